use crate::common::repository::{Sandbox, sandbox};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn second_checkout_leaves_files_unchanged(mut sandbox: Sandbox) {
    sandbox.commit_file("a.txt", "alpha", "first");
    sandbox.commit_file("docs/b.md", "beta", "second");

    let first = sandbox.repository.checkout("master").unwrap();
    let after_first = (sandbox.read("a.txt"), sandbox.read("docs/b.md"));
    let second = sandbox.repository.checkout("master").unwrap();
    let after_second = (sandbox.read("a.txt"), sandbox.read("docs/b.md"));

    assert!(first.already_current);
    assert!(second.already_current);
    assert_eq!(after_first, after_second);
    assert_eq!(after_second, ("alpha".to_string(), "beta".to_string()));
}

#[rstest]
fn checkout_discards_uncommitted_edits_to_tracked_files(mut sandbox: Sandbox) {
    sandbox.commit_file("a.txt", "alpha", "first");
    sandbox.write("a.txt", "edited");

    sandbox.repository.checkout("master").unwrap();

    assert_eq!(sandbox.read("a.txt"), "alpha");
}
