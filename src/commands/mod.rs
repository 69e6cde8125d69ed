//! Command implementations
//!
//! - `porcelain`: Repository operations (init, track, commit, branch, ...)
//! - `shell`: The line-oriented front end that parses user input, calls the
//!   porcelain commands and prints their results

pub mod porcelain;
pub mod shell;
