//! Switch git branches by fuzzy pattern, stashing and restoring work in
//! flight.

pub mod config;
pub mod error;
pub mod git;
pub mod resolve;
pub mod stash;
pub mod switch;
