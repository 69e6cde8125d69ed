use crate::common::commit_id;
use crate::common::repository::{Sandbox, sandbox};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::PathBuf;
use std::sync::Arc;
use twig::errors::RepositoryError;

#[rstest]
fn find_reports_the_commit_and_its_stored_files(mut sandbox: Sandbox) {
    sandbox.commit_file("a.txt", "a", "first");
    sandbox.commit_file("docs/b.md", "b", "second");

    let found = sandbox.repository.find(&commit_id("second")).unwrap();

    assert_eq!(found.commit.message().as_ref(), "second");
    assert_eq!(
        found.folder,
        sandbox.repository.store().path().join(commit_id("second"))
    );
    assert_eq!(
        found.stored_files,
        vec![PathBuf::from("a.txt"), PathBuf::from("docs").join("b.md")]
    );
}

#[rstest]
fn find_trims_surrounding_whitespace(sandbox: Sandbox) {
    let id = format!("  {}\n", commit_id("Initial commit"));

    let found = sandbox.repository.find(&id).unwrap();

    assert!(found.commit.is_root());
}

#[rstest]
fn unknown_id_is_reported(sandbox: Sandbox) {
    let error = sandbox.repository.find("nothing-0").unwrap_err();

    assert!(matches!(error, RepositoryError::CommitNotFound(ref id) if id == "nothing-0"));
}

#[rstest]
fn same_message_in_the_same_second_shares_an_id(mut sandbox: Sandbox) {
    sandbox.commit_file("a.txt", "1", "same");
    let older = sandbox.repository.head().unwrap();
    sandbox.commit_file("a.txt", "2", "same");
    let newer = sandbox.repository.head().unwrap();

    assert_eq!(older.id(), newer.id());
    assert!(!Arc::ptr_eq(&older, &newer));

    let found = sandbox.repository.find(&commit_id("same")).unwrap();
    assert!(Arc::ptr_eq(&found.commit, &newer));

    // both commits are still part of the history
    assert_eq!(sandbox.repository.log().unwrap().count(), 3);
    assert!(Arc::ptr_eq(newer.parent().unwrap(), &older));
}
