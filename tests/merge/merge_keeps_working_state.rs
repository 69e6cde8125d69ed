use crate::common::commit_id;
use crate::common::file::read_file;
use crate::common::repository::{Sandbox, sandbox};
use crate::merge::diverged;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::{Path, PathBuf};
use twig::commands::porcelain::track::Tracked;

fn is_tracked(sandbox: &Sandbox, name: &str) -> bool {
    sandbox
        .repository
        .refs()
        .unwrap()
        .current()
        .working()
        .contains(Path::new(name))
}

#[rstest]
fn uncommitted_tracks_on_the_current_branch_are_merged(mut sandbox: Sandbox) {
    sandbox.commit_file("a.txt", "a", "first");
    sandbox.repository.branch("side").unwrap();
    sandbox.write("c.txt", "c");
    sandbox.repository.track("c.txt").unwrap();

    let merged = sandbox.repository.merge("master", "side", "merge").unwrap();

    assert!(merged.commit.snapshot().contains(Path::new("c.txt")));
    assert_eq!(read_file(&sandbox.stored(&commit_id("merge"), "c.txt")), "c");
    assert!(merged.carried.is_empty());
    assert!(is_tracked(&sandbox, "c.txt"));
}

#[rstest]
fn uncommitted_tracks_survive_a_merge_onto_another_branch(mut sandbox: Sandbox) {
    sandbox.commit_file("a.txt", "a", "first");
    sandbox.repository.branch("side").unwrap();
    sandbox.repository.branch("third").unwrap();
    sandbox.repository.checkout("side").unwrap();
    sandbox.commit_file("s.txt", "s", "side work");
    sandbox.repository.checkout("third").unwrap();
    sandbox.write("c.txt", "c");
    sandbox.repository.track("c.txt").unwrap();

    let merged = sandbox.repository.merge("master", "side", "combine").unwrap();

    assert_eq!(merged.target.as_ref(), "third");
    assert!(!merged.commit.snapshot().contains(Path::new("c.txt")));
    assert_eq!(merged.carried, vec![PathBuf::from("c.txt")]);
    assert!(is_tracked(&sandbox, "c.txt"));

    sandbox.repository.commit("next").unwrap();
    assert_eq!(read_file(&sandbox.stored(&commit_id("next"), "c.txt")), "c");
}

#[rstest]
fn commit_after_a_merge_keeps_the_merged_content(#[from(diverged)] mut sandbox: Sandbox) {
    sandbox.repository.checkout("master").unwrap();
    sandbox.remove("z.txt");

    let merged = sandbox.repository.merge("side", "master", "merge").unwrap();
    let mut stale = merged.stale.clone();
    stale.sort();
    assert_eq!(stale, vec![PathBuf::from("y.txt"), PathBuf::from("z.txt")]);
    assert_eq!(sandbox.read("y.txt"), "y from master");

    sandbox.repository.commit("next").unwrap();

    let next = commit_id("next");
    assert_eq!(read_file(&sandbox.stored(&next, "y.txt")), "y from side");
    assert_eq!(read_file(&sandbox.stored(&next, "z.txt")), "z from side");
    assert_eq!(read_file(&sandbox.stored(&next, "x.txt")), "x from master");
}

#[rstest]
fn retracking_a_stale_file_takes_the_working_copy(#[from(diverged)] mut sandbox: Sandbox) {
    sandbox.repository.checkout("master").unwrap();
    sandbox.repository.merge("side", "master", "merge").unwrap();

    let tracked = sandbox.repository.track("y.txt").unwrap();
    sandbox.repository.commit("next").unwrap();

    assert_eq!(tracked, Tracked::Restaged(PathBuf::from("y.txt")));
    assert_eq!(
        read_file(&sandbox.stored(&commit_id("next"), "y.txt")),
        "y from master"
    );
}

#[rstest]
fn files_won_by_the_current_branch_are_not_stale(#[from(diverged)] mut sandbox: Sandbox) {
    sandbox.repository.checkout("master").unwrap();
    sandbox.write("x.txt", "x edited after the merge started");

    let merged = sandbox.repository.merge("master", "side", "merge").unwrap();
    sandbox.repository.commit("next").unwrap();

    assert!(merged.stale.is_empty());
    assert_eq!(
        read_file(&sandbox.stored(&commit_id("next"), "x.txt")),
        "x edited after the merge started"
    );
}
