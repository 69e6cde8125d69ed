use crate::common::commit_id;
use crate::common::file::read_file;
use crate::common::repository::Sandbox;
use crate::merge::diverged;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::BTreeSet;

#[rstest]
fn merged_files_are_the_union_of_both_heads(#[from(diverged)] mut sandbox: Sandbox) {
    let merged = sandbox.repository.merge("master", "side", "merge").unwrap();

    let files = merged
        .commit
        .snapshot()
        .filenames()
        .map(|file| file.to_string_lossy().into_owned())
        .collect::<BTreeSet<_>>();
    assert_eq!(
        files,
        BTreeSet::from(["x.txt".to_string(), "y.txt".to_string(), "z.txt".to_string()])
    );
    assert_eq!(merged.conflicts.len(), 1);
    assert_eq!(merged.conflicts[0].filename().to_str(), Some("y.txt"));
    assert!(merged.report.is_complete());
}

#[rstest]
fn conflicting_file_content_comes_from_the_first_branch(#[from(diverged)] mut sandbox: Sandbox) {
    // the working copy holds side's version, the merge must not pick it up
    assert_eq!(sandbox.read("y.txt"), "y from side");

    sandbox.repository.merge("master", "side", "merge").unwrap();

    let merge_id = commit_id("merge");
    assert_eq!(read_file(&sandbox.stored(&merge_id, "y.txt")), "y from master");
    assert_eq!(read_file(&sandbox.stored(&merge_id, "x.txt")), "x from master");
    assert_eq!(read_file(&sandbox.stored(&merge_id, "z.txt")), "z from side");
}

#[rstest]
fn merge_leaves_the_working_directory_alone(#[from(diverged)] mut sandbox: Sandbox) {
    sandbox.repository.merge("master", "side", "merge").unwrap();

    assert_eq!(sandbox.read("y.txt"), "y from side");
}

#[rstest]
fn checking_out_the_merged_branch_restores_merged_content(
    #[from(diverged)] mut sandbox: Sandbox,
) {
    sandbox.repository.merge("master", "side", "merge").unwrap();
    sandbox.repository.checkout("master").unwrap();
    assert_eq!(sandbox.read("y.txt"), "y from master");
    sandbox.write("y.txt", "scribbled");

    sandbox.repository.checkout("side").unwrap();

    assert_eq!(sandbox.read("y.txt"), "y from master");
    assert_eq!(sandbox.read("z.txt"), "z from side");
}

#[rstest]
fn swapping_the_branches_swaps_the_winner(#[from(diverged)] mut sandbox: Sandbox) {
    sandbox.repository.merge("side", "master", "merge").unwrap();

    let stored = sandbox.stored(&commit_id("merge"), "y.txt");
    assert_eq!(read_file(&stored), "y from side");
}
