//! Adapter around the `git` binary.
//!
//! Every subprocess invocation and every piece of output scraping lives
//! behind this module, so a change in git's text format only breaks one
//! seam.

use std::process::{Command, Output};

use anyhow::Result;
use log::debug;

use crate::error::SmartSwitchError;

/// Run git with debug logging of the invocation and its result.
pub fn run(args: &[&str]) -> Result<Output> {
    debug!("Executing command: git {}", args.join(" "));

    let output = Command::new("git").args(args).output()?;

    if output.status.success() {
        debug!("Command succeeded: git {}", args.join(" "));
    } else {
        debug!(
            "Command failed: git {} (exit code: {:?})",
            args.join(" "),
            output.status.code()
        );
    }
    if !output.stdout.is_empty() {
        debug!("stdout: {}", String::from_utf8_lossy(&output.stdout).trim());
    }
    if !output.stderr.is_empty() {
        debug!("stderr: {}", String::from_utf8_lossy(&output.stderr).trim());
    }

    Ok(output)
}

/// Print a command's captured output exactly as git produced it.
pub fn passthrough(output: &Output) {
    if !output.stdout.is_empty() {
        print!("{}", String::from_utf8_lossy(&output.stdout));
    }
    if !output.stderr.is_empty() {
        eprint!("{}", String::from_utf8_lossy(&output.stderr));
    }
}

pub fn check_repo() -> Result<()> {
    let output = run(&["rev-parse", "--git-dir"])?;

    if !output.status.success() {
        return Err(SmartSwitchError::NotInGitRepo.into());
    }

    Ok(())
}

pub fn current_branch() -> Result<String> {
    let output = run(&["rev-parse", "--abbrev-ref", "HEAD"])?;

    if !output.status.success() {
        return Err(SmartSwitchError::NotInGitRepo.into());
    }

    let branch = String::from_utf8(output.stdout)?.trim().to_string();

    Ok(branch)
}

/// Whether the working tree has any uncommitted changes, untracked files
/// included.
pub fn is_dirty() -> Result<bool> {
    let output = run(&["status", "--short"])?;
    let status = String::from_utf8(output.stdout)?;

    Ok(status.lines().count() > 0)
}

/// List branch lines, optionally filtered by a glob pattern. Lines keep
/// their leading `* `/`  ` prefix so callers can display them as git does.
pub fn list_branches(pattern: Option<&str>) -> Result<Vec<String>> {
    let mut args = vec!["branch", "--list"];
    if let Some(pattern) = pattern {
        args.push(pattern);
    }

    let output = run(&args)?;
    let listing = String::from_utf8(output.stdout)?;

    Ok(listing.lines().map(|line| line.trim_end().to_string()).collect())
}

pub fn branch_exists(name: &str) -> Result<bool> {
    let output = run(&["rev-parse", "--verify", &format!("refs/heads/{}", name)])?;

    Ok(output.status.success())
}

pub fn checkout(branch: &str) -> Result<Output> {
    run(&["checkout", branch])
}

pub fn checkout_new(branch: &str) -> Result<Output> {
    run(&["checkout", "-b", branch])
}

pub fn stash_push(message: &str) -> Result<Output> {
    run(&["stash", "push", "-u", "-m", message])
}

pub fn stash_list() -> Result<Vec<String>> {
    let output = run(&["stash", "list"])?;
    let listing = String::from_utf8(output.stdout)?;

    Ok(listing.lines().map(|line| line.to_string()).collect())
}

/// Diff summary of a stash, untracked files included. Requires git 2.32.0
/// or higher; callers treat a non-zero exit as "no summary".
pub fn stash_show(index: u32) -> Result<Output> {
    run(&["stash", "show", "-u", &format!("stash@{{{}}}", index)])
}

pub fn stash_pop(index: u32) -> Result<Output> {
    run(&[
        "stash",
        "pop",
        "--index",
        "--quiet",
        &format!("stash@{{{}}}", index),
    ])
}

/// Extract the bare branch name from a `git branch --list` line, dropping
/// the current-branch marker.
pub fn branch_name_from_line(line: &str) -> Option<&str> {
    line.split_whitespace().find(|token| *token != "*")
}

/// Extract the `N` from a `stash@{N}: ...` stash-list line.
pub fn stash_index_from_line(line: &str) -> Option<u32> {
    let rest = line.trim().strip_prefix("stash@{")?;
    let digits = rest.get(..rest.find('}')?)?;

    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_name_from_current_branch_line() {
        assert_eq!(branch_name_from_line("* main"), Some("main"));
    }

    #[test]
    fn test_branch_name_from_plain_line() {
        assert_eq!(branch_name_from_line("  feature/login"), Some("feature/login"));
    }

    #[test]
    fn test_branch_name_from_empty_line() {
        assert_eq!(branch_name_from_line(""), None);
        assert_eq!(branch_name_from_line("*"), None);
    }

    #[test]
    fn test_stash_index_from_line() {
        assert_eq!(
            stash_index_from_line("stash@{0}: On main: smart-switch|main"),
            Some(0)
        );
        assert_eq!(
            stash_index_from_line("  stash@{12}: WIP on dev: abc123 wip"),
            Some(12)
        );
    }

    #[test]
    fn test_stash_index_from_garbage() {
        assert_eq!(stash_index_from_line("no index here"), None);
        assert_eq!(stash_index_from_line("stash@{}: empty"), None);
        assert_eq!(stash_index_from_line("stash@{x}: letters"), None);
    }
}
