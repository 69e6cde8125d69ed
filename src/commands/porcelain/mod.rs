//! Porcelain commands
//!
//! The boundary operations of a repository, each implemented as an `impl
//! Repository` block returning a typed outcome. They print nothing; the shell
//! formats their results.
//!
//! ## Commands
//!
//! - `init`: Start a history with a root commit and the default branch
//! - `track`: Add a file to the current branch's working list
//! - `commit`: Seal the working list into a new commit
//! - `branch`: Create and list branches
//! - `checkout`: Switch branches and restore the head snapshot
//! - `merge`: Combine two branch heads into a merge commit
//! - `log`: Full and first-parent history
//! - `find`: Look a commit up by id

pub mod branch;
pub mod checkout;
pub mod commit;
pub mod find;
pub mod init;
pub mod log;
pub mod merge;
pub mod track;
