use anyhow::Result;

use crate::git;

/// Tool configuration, resolved once before dispatch.
pub struct Config {
    /// Stash without prompting. Settable per repository via
    /// `git config smart-switch.force-stash true` or per invocation with
    /// `-f`.
    pub force_stash: bool,
}

impl Config {
    pub fn load(force_stash_flag: bool) -> Result<Self> {
        let force_stash = force_stash_flag || get_git_config_bool("smart-switch.force-stash")?;

        Ok(Config { force_stash })
    }

    pub fn interactive_stash(&self) -> bool {
        !self.force_stash
    }
}

fn get_git_config(key: &str) -> Result<Option<String>> {
    let output = git::run(&["config", "--get", key])?;

    if output.status.success() {
        let value = String::from_utf8(output.stdout)?.trim().to_string();
        Ok(if value.is_empty() { None } else { Some(value) })
    } else {
        Ok(None)
    }
}

fn get_git_config_bool(key: &str) -> Result<bool> {
    let value = get_git_config(key)?;

    Ok(matches!(value.as_deref(), Some("true") | Some("1") | Some("yes")))
}
