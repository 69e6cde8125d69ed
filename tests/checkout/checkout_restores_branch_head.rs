use crate::common::repository::{Sandbox, sandbox};
use crate::common::commit_id;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn switching_back_restores_the_first_commit(mut sandbox: Sandbox) {
    sandbox.commit_file("a.txt", "1", "first");
    sandbox.repository.branch("feature").unwrap();
    sandbox.repository.checkout("feature").unwrap();

    sandbox.write("a.txt", "2");
    sandbox.repository.commit("second").unwrap();
    let checked_out = sandbox.repository.checkout("master").unwrap();

    assert_eq!(sandbox.read("a.txt"), "1");
    assert_eq!(checked_out.head.id().as_ref(), commit_id("first"));
    assert!(checked_out.report.is_complete());
    assert_eq!(sandbox.repository.current_branch().unwrap().as_ref(), "master");
}

#[rstest]
fn switching_to_the_feature_branch_restores_its_head(mut sandbox: Sandbox) {
    sandbox.commit_file("a.txt", "1", "first");
    sandbox.repository.branch("feature").unwrap();
    sandbox.repository.checkout("feature").unwrap();
    sandbox.write("a.txt", "2");
    sandbox.repository.commit("second").unwrap();
    sandbox.repository.checkout("master").unwrap();

    sandbox.repository.checkout("feature").unwrap();

    assert_eq!(sandbox.read("a.txt"), "2");
}

#[rstest]
fn files_unknown_to_the_head_are_left_alone(mut sandbox: Sandbox) {
    sandbox.commit_file("a.txt", "1", "first");
    sandbox.write("notes.txt", "scratch");

    sandbox.repository.checkout("master").unwrap();

    assert_eq!(sandbox.read("notes.txt"), "scratch");
}

#[rstest]
fn new_branches_carry_the_tracked_files(mut sandbox: Sandbox) {
    sandbox.commit_file("a.txt", "1", "first");
    sandbox.repository.branch("feature").unwrap();
    sandbox.repository.checkout("feature").unwrap();

    sandbox.write("b.txt", "b");
    sandbox.repository.track("b.txt").unwrap();
    let committed = sandbox.repository.commit("second").unwrap();

    let files = committed
        .commit
        .snapshot()
        .filenames()
        .map(|file| file.to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    assert_eq!(files, vec!["b.txt", "a.txt"]);
}
