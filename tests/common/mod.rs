use std::path::Path;
use std::process::{Command, Output};

pub fn git(dir: &Path, args: &[&str]) -> Output {
    Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git")
}

pub fn setup_test_git_repo(dir: &Path) {
    git(dir, &["init"]);
    git(dir, &["config", "user.name", "Test User"]);
    git(dir, &["config", "user.email", "test@example.com"]);

    std::fs::write(dir.join("README.md"), "# Test Repo").unwrap();
    git(dir, &["add", "README.md"]);
    git(dir, &["commit", "-m", "Initial commit"]);
}

/// Name of the branch currently checked out ("main" or "master" depending
/// on the git version that ran `git init`).
pub fn current_branch(dir: &Path) -> String {
    let output = git(dir, &["rev-parse", "--abbrev-ref", "HEAD"]);
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

/// Create a branch at HEAD without switching to it.
pub fn create_branch(dir: &Path, name: &str) {
    let output = git(dir, &["branch", name]);
    assert!(
        output.status.success(),
        "Failed to create branch {}: {}",
        name,
        String::from_utf8_lossy(&output.stderr)
    );
}

pub fn stash_list(dir: &Path) -> Vec<String> {
    let output = git(dir, &["stash", "list"]);
    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| line.to_string())
        .collect()
}
