//! Stash create and restore, keyed by branch name.
//!
//! A stash made while leaving a branch carries that branch's name in its
//! message, so it can be found and popped when the user returns.

use std::io;

use anyhow::{Context, Result};
use console::style;

use crate::error::SmartSwitchError;
use crate::git;

const STASH_TAG_PREFIX: &str = "smart-switch|";

/// Message embedded in a stash so it can be located again when switching
/// back to `branch_name`.
pub fn stash_message(branch_name: &str) -> String {
    format!("{}{}", STASH_TAG_PREFIX, branch_name)
}

/// What the stash step decided.
#[derive(Debug, PartialEq, Eq)]
pub enum StashOutcome {
    /// Working tree was clean, nothing to do.
    Clean,
    /// Changes stashed under the tag for the branch being left.
    Stashed,
    /// User chose to carry the changes along.
    Skipped,
    /// User cancelled the whole operation.
    Cancelled,
}

enum PromptChoice {
    Stash,
    Skip,
    Cancel,
}

/// Stash uncommitted changes tagged for `branch_name`, prompting first when
/// `interactive` is set.
pub fn maybe_stash(branch_name: &str, interactive: bool) -> Result<StashOutcome> {
    if !git::is_dirty()? {
        return Ok(StashOutcome::Clean);
    }

    if interactive {
        match prompt_choice()? {
            PromptChoice::Stash => {}
            PromptChoice::Skip => return Ok(StashOutcome::Skipped),
            PromptChoice::Cancel => return Ok(StashOutcome::Cancelled),
        }
    }

    println!(
        "{} {} {}",
        style("Stashing changes").green(),
        style("for").dim(),
        style(branch_name).yellow()
    );
    let output = git::stash_push(&stash_message(branch_name))?;
    git::passthrough(&output);
    println!();

    Ok(StashOutcome::Stashed)
}

fn prompt_choice() -> Result<PromptChoice> {
    println!(
        "{}",
        style("There are uncommitted changes. Stash them before checking out new branch? y/n/c")
            .bold()
    );
    println!("  y: Yes, stash and then checkout the new branch");
    println!("  n: No, don't stash, just checkout the new branch");
    println!("  c: Cancel");

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    match input.trim().to_lowercase().as_str() {
        "y" => Ok(PromptChoice::Stash),
        "n" => Ok(PromptChoice::Skip),
        "c" => Ok(PromptChoice::Cancel),
        _ => Err(SmartSwitchError::UnknownResponse.into()),
    }
}

/// Pop the most recent stash tagged for `dest_branch`, if one exists.
pub fn maybe_restore(dest_branch: &str) -> Result<()> {
    let tag = stash_message(dest_branch);
    let stashes = git::stash_list()?;

    let Some(line) = find_tagged(&stashes, &tag) else {
        println!("No stash found for {}", style(dest_branch).yellow());
        return Ok(());
    };

    let index = git::stash_index_from_line(line)
        .with_context(|| format!("Unrecognized stash entry: {}", line))?;

    println!();
    println!(
        "{} {} {}",
        style("Applying stash").green(),
        style("found for").dim(),
        style(dest_branch).yellow()
    );

    // Best effort; older git cannot show untracked files here.
    let summary = git::stash_show(index)?;
    if summary.status.success() {
        print!("{}", String::from_utf8_lossy(&summary.stdout));
    }

    let output = git::stash_pop(index)?;
    git::passthrough(&output);

    Ok(())
}

/// First stash-list line whose message ends with `tag`. `git stash list`
/// prints newest first, so the first hit is the most recent stash. The match
/// is an exact suffix match: a tag for `dev` never selects `dev2`.
fn find_tagged<'a>(lines: &'a [String], tag: &str) -> Option<&'a str> {
    lines.iter().map(|line| line.trim()).find(|line| line.ends_with(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stash_message_format() {
        assert_eq!(stash_message("feature/login"), "smart-switch|feature/login");
    }

    #[test]
    fn test_find_tagged_exact_suffix() {
        let lines = vec![
            "stash@{0}: On main: smart-switch|dev2".to_string(),
            "stash@{1}: On main: smart-switch|dev".to_string(),
        ];

        let found = find_tagged(&lines, "smart-switch|dev").unwrap();
        assert!(found.starts_with("stash@{1}"));
    }

    #[test]
    fn test_find_tagged_prefers_most_recent() {
        let lines = vec![
            "stash@{0}: On main: smart-switch|dev".to_string(),
            "stash@{1}: On other: smart-switch|dev".to_string(),
        ];

        let found = find_tagged(&lines, "smart-switch|dev").unwrap();
        assert!(found.starts_with("stash@{0}"));
    }

    #[test]
    fn test_find_tagged_ignores_untagged() {
        let lines = vec!["stash@{0}: WIP on main: abc123 wip".to_string()];

        assert_eq!(find_tagged(&lines, "smart-switch|main"), None);
    }
}
