//! The stash, checkout, restore sequence.

use anyhow::Result;
use console::style;

use crate::git;
use crate::stash::{self, StashOutcome};

/// How a switch attempt ended.
#[derive(Debug, PartialEq, Eq)]
pub enum SwitchOutcome {
    Switched,
    /// User cancelled at the stash prompt; nothing was checked out.
    Cancelled,
    /// Checkout failed; the stash stack was left untouched.
    CheckoutFailed,
}

/// Switch from `current` to `dest`, stashing uncommitted work first and
/// restoring any stash tagged for `dest` afterwards.
pub fn switch(current: &str, dest: &str, create: bool, interactive: bool) -> Result<SwitchOutcome> {
    let apply_stashes = current != dest;

    if apply_stashes && stash::maybe_stash(current, interactive)? == StashOutcome::Cancelled {
        return Ok(SwitchOutcome::Cancelled);
    }

    let output = if create {
        println!(
            "{} {}",
            style("Creating branch").yellow(),
            style(dest).yellow()
        );
        git::checkout_new(dest)?
    } else {
        println!(
            "{} {} {} {}",
            style("Switching from").dim(),
            style(current).yellow(),
            style("-->").dim(),
            style(dest).yellow()
        );
        git::checkout(dest)?
    };
    git::passthrough(&output);

    // Only touch the stash stack once the branch change is confirmed.
    if !output.status.success() {
        return Ok(SwitchOutcome::CheckoutFailed);
    }

    if !create && apply_stashes {
        stash::maybe_restore(dest)?;
    }

    Ok(SwitchOutcome::Switched)
}
