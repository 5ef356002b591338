use baserepo::ui::output;

fn main() {
    if let Err(err) = baserepo::cli::run() {
        output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
