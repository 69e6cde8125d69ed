use crate::common::commit_id;
use crate::common::repository::{Sandbox, sandbox};
use pretty_assertions::assert_eq;
use rstest::rstest;
use twig::errors::RepositoryError;

fn merged_history(sandbox: &mut Sandbox) {
    sandbox.repository.branch("side").unwrap();
    sandbox.commit_file("a.txt", "a", "add a");
    sandbox.repository.checkout("side").unwrap();
    sandbox.commit_file("b.txt", "b", "add b");
    sandbox.commit_file("c.txt", "c", "add c");
    sandbox.repository.merge("side", "master", "merge").unwrap();
}

#[rstest]
fn history_skips_second_parents(mut sandbox: Sandbox) {
    merged_history(&mut sandbox);

    let ids = sandbox
        .repository
        .history(None)
        .unwrap()
        .map(|commit| commit.id().to_string())
        .collect::<Vec<_>>();

    assert_eq!(
        ids,
        vec![
            commit_id("merge"),
            commit_id("add c"),
            commit_id("add b"),
            commit_id("Initial commit"),
        ]
    );
}

#[rstest]
fn every_branch_history_ends_at_the_root(mut sandbox: Sandbox) {
    merged_history(&mut sandbox);

    for (name, chain) in sandbox.repository.branch_graph().unwrap() {
        let last = chain.last().unwrap_or_else(|| panic!("{name} has no history"));
        assert!(last.is_root(), "{name} ends at {}", last.id());
    }
}

#[rstest]
fn history_of_a_named_branch(mut sandbox: Sandbox) {
    merged_history(&mut sandbox);

    let ids = sandbox
        .repository
        .history(Some("master"))
        .unwrap()
        .map(|commit| commit.id().to_string())
        .collect::<Vec<_>>();

    assert_eq!(ids, vec![commit_id("add a"), commit_id("Initial commit")]);
}

#[rstest]
fn history_of_an_unknown_branch(sandbox: Sandbox) {
    let error = sandbox.repository.history(Some("nowhere")).unwrap_err();

    assert!(matches!(error, RepositoryError::BranchNotFound(_)));
}
