#![allow(dead_code)]

pub mod repository;

/// Every commit made through the fixtures is stamped with this instant
pub const COMMIT_DATE: &str = "2023-01-01 12:00:00 +0000";
pub const COMMIT_SECONDS: i64 = 1_672_574_400;

/// The id a commit with `message` gets under the pinned clock
pub fn commit_id(message: &str) -> String {
    format!("{message}-{COMMIT_SECONDS}")
}
