//! Branch pattern resolution.

use anyhow::Result;

use crate::git;

/// Outcome of resolving a user-supplied branch pattern against the branch
/// list.
#[derive(Debug)]
pub enum Resolution {
    /// No pattern was given; the full listing is returned.
    ListAll(Vec<String>),
    /// Nothing matched, even with wildcards.
    NoMatch,
    /// Exactly one branch matched, marker token already stripped.
    Single(String),
    /// Several branches matched the wildcard query; raw lines returned for
    /// display.
    Ambiguous(Vec<String>),
}

/// Resolve a pattern with an exact query first, then a `*pattern*`
/// substring query. Glob metacharacters in the pattern are passed through
/// to git untouched.
pub fn resolve(pattern: Option<&str>) -> Result<Resolution> {
    let Some(pattern) = pattern else {
        return Ok(Resolution::ListAll(git::list_branches(None)?));
    };

    let mut lines = git::list_branches(Some(pattern))?;
    if lines.len() != 1 {
        lines = git::list_branches(Some(&format!("*{}*", pattern)))?;
    }

    Ok(match lines.len() {
        0 => Resolution::NoMatch,
        1 => match git::branch_name_from_line(&lines[0]) {
            Some(name) => Resolution::Single(name.to_string()),
            None => Resolution::NoMatch,
        },
        _ => Resolution::Ambiguous(lines),
    })
}
