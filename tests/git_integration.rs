//! Git integration tests.
//!
//! These tests drive a real repository created with the `git` binary and
//! read it back through [`Git`].

use std::path::Path;
use std::process::Command;

use baserepo::core::remotes::Remotes;
use baserepo::core::types::RepoId;
use baserepo::git::{Git, GitError};
use baserepo::resolve::{
    from_remotes, prompt_when_ambiguous, require_no_ambiguity, ResolveBaseRepo, ResolveError,
    SELECT_PROMPT,
};
use baserepo::ui::mock::{index_for, MockPrompter};
use tempfile::TempDir;

/// A scratch repository with helpers for wiring up remotes.
struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        run_git(dir.path(), &["init"]);
        run_git(dir.path(), &["config", "user.email", "test@example.com"]);
        run_git(dir.path(), &["config", "user.name", "Test User"]);
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn add_remote(&self, name: &str, url: &str) -> &Self {
        run_git(self.path(), &["remote", "add", name, url]);
        self
    }

    fn git(&self) -> Git {
        Git::open(self.path()).expect("failed to open test repo")
    }
}

fn run_git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git command failed");

    if !output.status.success() {
        panic!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn repo(s: &str) -> RepoId {
    s.parse().unwrap()
}

/// Remote set of `git`, shaped for the resolver combinators.
fn provider(git: &Git) -> impl Fn() -> Result<Remotes, ResolveError> + Copy + '_ {
    move || Ok(git.remotes()?)
}

// =============================================================================
// Repository Opening
// =============================================================================

#[test]
fn open_from_subdirectory() {
    let test = TestRepo::new();
    let subdir = test.path().join("nested").join("deeper");
    std::fs::create_dir_all(&subdir).unwrap();

    let git = Git::open(&subdir).unwrap();
    assert!(git.git_dir().ends_with(".git"));
}

#[test]
fn open_outside_repository_fails() {
    let dir = TempDir::new().unwrap();

    let err = Git::open(dir.path()).unwrap_err();
    assert!(matches!(err, GitError::NotARepo { .. }));
}

// =============================================================================
// Remote Listing
// =============================================================================

#[test]
fn no_remotes_is_empty() {
    let test = TestRepo::new();
    assert!(test.git().remotes().unwrap().is_empty());
}

#[test]
fn remotes_parse_each_url_style() {
    let test = TestRepo::new();
    test.add_remote("origin", "git@github.com:me/fork.git")
        .add_remote("upstream", "https://github.com/owner/repo.git")
        .add_remote("enterprise", "ssh://git@ghe.example.com:2222/corp/tool");

    let remotes = test.git().remotes().unwrap();
    assert_eq!(remotes.len(), 3);

    assert_eq!(remotes.find_by_name("origin").unwrap().repo, repo("me/fork"));
    assert_eq!(
        remotes.find_by_name("upstream").unwrap().repo,
        repo("owner/repo")
    );
    let enterprise = &remotes.find_by_name("enterprise").unwrap().repo;
    assert_eq!(enterprise.host(), "ghe.example.com");
    assert_eq!(enterprise.full_name(), "corp/tool");
}

#[test]
fn remotes_come_back_in_name_order() {
    let test = TestRepo::new();
    test.add_remote("upstream", "https://github.com/owner/repo.git")
        .add_remote("origin", "https://github.com/me/fork.git");

    let git = test.git();
    let names: Vec<_> = git
        .remotes()
        .unwrap()
        .iter()
        .map(|r| r.name.clone())
        .collect();
    assert_eq!(names, vec!["origin", "upstream"]);

    // Without a marker the first remote in that order is the fallback.
    assert_eq!(from_remotes(git).resolve().unwrap(), repo("me/fork"));
}

#[test]
fn unparseable_remote_is_skipped() {
    let test = TestRepo::new();
    test.add_remote("origin", "https://github.com/owner/repo.git")
        .add_remote("local", "/srv/git/mirror");

    let remotes = test.git().remotes().unwrap();
    assert_eq!(remotes.len(), 1);
    assert!(remotes.find_by_name("local").is_none());
}

// =============================================================================
// Default Marker
// =============================================================================

#[test]
fn set_resolved_writes_marker() {
    let test = TestRepo::new();
    test.add_remote("origin", "https://github.com/me/fork.git")
        .add_remote("upstream", "https://github.com/owner/repo.git");

    test.git().set_resolved("upstream").unwrap();

    assert_eq!(
        run_git(test.path(), &["config", "remote.upstream.baserepo-resolved"]),
        "base"
    );
    let remotes = test.git().remotes().unwrap();
    assert_eq!(remotes.resolved_remote().unwrap().name, "upstream");
}

#[test]
fn set_resolved_moves_marker() {
    let test = TestRepo::new();
    test.add_remote("origin", "https://github.com/me/fork.git")
        .add_remote("upstream", "https://github.com/owner/repo.git");

    let git = test.git();
    git.set_resolved("upstream").unwrap();
    git.set_resolved("origin").unwrap();

    let remotes = git.remotes().unwrap();
    let marked: Vec<_> = remotes.iter().filter(|r| r.is_resolved()).collect();
    assert_eq!(marked.len(), 1);
    assert_eq!(marked[0].name, "origin");
}

#[test]
fn set_resolved_unknown_remote_fails() {
    let test = TestRepo::new();
    test.add_remote("origin", "https://github.com/me/fork.git");

    let err = test.git().set_resolved("nope").unwrap_err();
    assert!(matches!(err, GitError::RemoteNotFound { .. }));
}

#[test]
fn clear_resolved_without_marker_is_ok() {
    let test = TestRepo::new();
    test.add_remote("origin", "https://github.com/me/fork.git");

    let git = test.git();
    git.clear_resolved().unwrap();
    git.set_resolved("origin").unwrap();
    git.clear_resolved().unwrap();

    assert!(git.remotes().unwrap().resolved_remote().is_none());
}

#[test]
fn marker_set_by_hand_is_honoured() {
    let test = TestRepo::new();
    test.add_remote("origin", "https://github.com/me/fork.git")
        .add_remote("upstream", "https://github.com/owner/repo.git");
    run_git(
        test.path(),
        &["config", "remote.upstream.baserepo-resolved", "base"],
    );

    let resolved = from_remotes(test.git()).resolve().unwrap();
    assert_eq!(resolved, repo("owner/repo"));
}

// =============================================================================
// Resolution Against a Real Repository
// =============================================================================

#[test]
fn single_remote_resolves_under_strict_policy() {
    let test = TestRepo::new();
    test.add_remote("origin", "https://github.com/owner/repo.git");

    let git = test.git();
    let strict = require_no_ambiguity(from_remotes(provider(&git)), provider(&git));
    assert_eq!(strict.resolve().unwrap(), repo("owner/repo"));
}

#[test]
fn fork_and_upstream_are_ambiguous_under_strict_policy() {
    let test = TestRepo::new();
    test.add_remote("origin", "https://github.com/me/fork.git")
        .add_remote("upstream", "https://github.com/owner/repo.git");

    let git = test.git();
    let strict = require_no_ambiguity(from_remotes(provider(&git)), provider(&git));
    let err = strict.resolve().unwrap_err();

    let ambiguous = err.as_ambiguous().expect("expected ambiguity");
    assert_eq!(ambiguous.remotes, git.remotes().unwrap());
}

#[test]
fn marker_does_not_bypass_strict_policy() {
    let test = TestRepo::new();
    test.add_remote("origin", "https://github.com/me/fork.git")
        .add_remote("upstream", "https://github.com/owner/repo.git");

    let git = test.git();
    git.set_resolved("upstream").unwrap();

    let strict = require_no_ambiguity(from_remotes(provider(&git)), provider(&git));
    assert!(matches!(strict.resolve(), Err(ResolveError::Ambiguous(_))));
}

#[test]
fn prompt_settles_ambiguity_from_real_remotes() {
    let test = TestRepo::new();
    test.add_remote("origin", "https://github.com/me/fork.git")
        .add_remote("upstream", "https://github.com/owner/repo.git");

    let git = test.git();
    git.set_resolved("upstream").unwrap();

    let prompter = MockPrompter::new();
    prompter.register_select(SELECT_PROMPT, ["me/fork", "owner/repo"], |_, default, options| {
        assert_eq!(default, "owner/repo");
        index_for(options, "me/fork")
    });

    let resolver = prompt_when_ambiguous(
        require_no_ambiguity(from_remotes(provider(&git)), provider(&git)),
        Some(prompter.clone()),
    );
    assert_eq!(resolver.resolve().unwrap(), repo("me/fork"));
    prompter.verify();
}
