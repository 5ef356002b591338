//! Architecture enforcement tests.
//!
//! Layering rules for the source tree:
//!
//! 1. **Git isolation** - only `src/git/` talks to libgit2
//! 2. **Terminal isolation** - only `src/ui/` talks to dialoguer
//! 3. **Pure combinators** - `src/resolve/` never reaches for the CLI layer

use std::fs;
use std::path::{Path, PathBuf};

fn src_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src")
}

/// All `.rs` files under `dir`, recursively.
fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).expect("failed to read source dir") {
        let path = entry.expect("failed to read dir entry").path();
        if path.is_dir() {
            files.extend(rust_files(&path));
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files
}

/// Files outside `allowed` that mention `needle`, as paths relative to `src/`.
fn offenders(needle: &str, allowed: &str) -> Vec<String> {
    let src = src_dir();
    let allowed = src.join(allowed);

    rust_files(&src)
        .into_iter()
        .filter(|path| !path.starts_with(&allowed))
        .filter(|path| {
            fs::read_to_string(path)
                .map(|content| content.contains(needle))
                .unwrap_or(false)
        })
        .map(|path| path.strip_prefix(&src).unwrap().display().to_string())
        .collect()
}

#[test]
fn only_git_module_uses_git2() {
    let found = offenders("git2::", "git");
    assert!(
        found.is_empty(),
        "git2 used outside src/git/: {:?}",
        found
    );
}

#[test]
fn only_ui_module_uses_dialoguer() {
    let found = offenders("dialoguer", "ui");
    assert!(
        found.is_empty(),
        "dialoguer used outside src/ui/: {:?}",
        found
    );
}

#[test]
fn resolvers_do_not_depend_on_cli() {
    let resolve = src_dir().join("resolve");
    let violations: Vec<_> = rust_files(&resolve)
        .into_iter()
        .filter(|path| {
            fs::read_to_string(path)
                .map(|content| content.contains("crate::cli"))
                .unwrap_or(false)
        })
        .collect();

    assert!(
        violations.is_empty(),
        "resolve/ must not import the CLI layer: {:?}",
        violations
    );
}
