use crate::common::repository::{Sandbox, sandbox};
use pretty_assertions::assert_eq;
use rstest::rstest;
use twig::errors::RepositoryError;

#[rstest]
fn unknown_branch_is_reported_without_state_change(mut sandbox: Sandbox) {
    sandbox.commit_file("a.txt", "alpha", "first");
    sandbox.repository.branch("feature").unwrap();
    sandbox.write("a.txt", "edited");
    let head = sandbox.repository.head().unwrap();

    let error = sandbox.repository.checkout("nowhere").unwrap_err();

    assert!(matches!(error, RepositoryError::BranchNotFound(ref name) if name == "nowhere"));
    assert_eq!(sandbox.repository.current_branch().unwrap().as_ref(), "master");
    assert_eq!(sandbox.repository.head().unwrap().id(), head.id());
    assert_eq!(sandbox.read("a.txt"), "edited");
}

#[rstest]
fn unknown_merge_branch_creates_no_commit(mut sandbox: Sandbox) {
    sandbox.commit_file("a.txt", "alpha", "first");
    let commits = sandbox.repository.graph().len();

    let error = sandbox
        .repository
        .merge("master", "nowhere", "merge")
        .unwrap_err();

    assert!(matches!(error, RepositoryError::BranchNotFound(_)));
    assert_eq!(sandbox.repository.graph().len(), commits);
}

#[rstest]
fn duplicate_branch_names_are_rejected(mut sandbox: Sandbox) {
    sandbox.repository.branch("feature").unwrap();

    let error = sandbox.repository.branch("feature").unwrap_err();

    assert!(matches!(error, RepositoryError::BranchAlreadyExists(_)));
    assert_eq!(sandbox.repository.list_branches().unwrap().len(), 2);
}

#[rstest]
#[case("bad name")]
#[case("ends.lock")]
#[case("a..b")]
fn invalid_branch_names_are_rejected(mut sandbox: Sandbox, #[case] name: &str) {
    let error = sandbox.repository.branch(name).unwrap_err();

    assert!(matches!(error, RepositoryError::InvalidBranchName(_)));
}
