use anyhow::{bail, Result};
use clap::Parser;
use console::style;

use git_smart_switch::config::Config;
use git_smart_switch::error::SmartSwitchError;
use git_smart_switch::git;
use git_smart_switch::resolve::{self, Resolution};
use git_smart_switch::stash;
use git_smart_switch::switch;

#[derive(Parser)]
#[command(name = "git-ss")]
#[command(about = "Switch git branches by pattern, stashing and restoring work in flight")]
#[command(after_help = "Running without a branch-pattern lists all branches")]
struct Cli {
    /// Create a new branch
    #[arg(short = 'b', long = "new-branch", conflicts_with = "stash_only")]
    new_branch: bool,

    /// Stash only, don't switch branches
    #[arg(short = 'o', long = "stash-only")]
    stash_only: bool,

    /// Force stashing without prompting
    #[arg(short = 'f', long = "force-stash")]
    force_stash: bool,

    /// Branch name or pattern to switch to
    branch_pattern: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.stash_only && cli.branch_pattern.is_some() {
        bail!("Bad arguments: don't provide a branch pattern with --stash-only");
    }

    git::check_repo()?;

    let config = Config::load(cli.force_stash)?;
    let interactive = config.interactive_stash();

    let current_branch = git::current_branch()?;

    if cli.stash_only {
        stash::maybe_stash(&current_branch, interactive)?;
        return Ok(());
    }

    if cli.new_branch {
        let Some(name) = cli.branch_pattern.as_deref().map(str::trim) else {
            bail!("Bad arguments: missing branch name to create");
        };
        if git::branch_exists(name)? {
            return Err(SmartSwitchError::BranchExists {
                name: name.to_string(),
            }
            .into());
        }
        switch::switch(&current_branch, name, true, interactive)?;
        return Ok(());
    }

    let pattern = cli.branch_pattern.as_deref().map(str::trim);
    let pattern_text = pattern.unwrap_or_default();

    match resolve::resolve(pattern)? {
        Resolution::ListAll(lines) => {
            println!("{}", style("Listing branches:").bold());
            print_branch_lines(&lines, &current_branch);
        }
        Resolution::NoMatch => {
            println!("No branches found matching '{}'", pattern_text);
        }
        Resolution::Single(branch) => {
            println!(
                "{}",
                style(format!(
                    "Found branch matching '{}': {}.",
                    pattern_text,
                    style(&branch).yellow()
                ))
                .bold()
            );
            println!();
            switch::switch(&current_branch, &branch, false, interactive)?;
        }
        Resolution::Ambiguous(lines) => {
            println!(
                "{}",
                style(format!(
                    "Found multiple branches matching '{}':",
                    pattern_text
                ))
                .yellow()
            );
            print_branch_lines(&lines, &current_branch);
        }
    }

    Ok(())
}

/// Echo `git branch` lines, highlighting the current branch.
fn print_branch_lines(lines: &[String], current: &str) {
    for line in lines {
        match line.strip_suffix(current) {
            Some(prefix) if prefix.ends_with(' ') => {
                println!("{}{}", prefix, style(current).green());
            }
            _ => println!("{}", line),
        }
    }
}
