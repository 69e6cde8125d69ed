//! Commit history traversal
//!
//! - `rev_list`: first-parent chain, used for compact per-branch views
//! - `dag_walk`: full walk over every parent, used by `log`

pub mod dag_walk;
pub mod rev_list;
