use crate::common::commit_id;
use crate::common::file::{read_file, write_generated_files};
use crate::common::repository::{Sandbox, sandbox};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn deleted_files_are_restored_byte_for_byte(mut sandbox: Sandbox) {
    let binary = vec![0u8, 159, 146, 150, 255, b'\n', 0];
    std::fs::write(sandbox.repository.path().join("f2.bin"), &binary).unwrap();
    sandbox.write("f1.txt", "a");
    sandbox.repository.track("f1.txt").unwrap();
    sandbox.repository.track("f2.bin").unwrap();
    sandbox.repository.commit("both").unwrap();

    sandbox.remove("f1.txt");
    sandbox.remove("f2.bin");
    let restored = sandbox.repository.checkout("master").unwrap();

    assert!(restored.report.is_complete());
    assert_eq!(sandbox.read("f1.txt"), "a");
    assert_eq!(
        std::fs::read(sandbox.repository.path().join("f2.bin")).unwrap(),
        binary
    );
}

#[rstest]
fn every_commit_stores_its_own_copy(mut sandbox: Sandbox) {
    sandbox.commit_file("a.txt", "same", "first");
    sandbox.repository.commit("second").unwrap();

    let first = sandbox.stored(&commit_id("first"), "a.txt");
    let second = sandbox.stored(&commit_id("second"), "a.txt");

    assert_ne!(first, second);
    assert_eq!(read_file(&first), "same");
    assert_eq!(read_file(&second), "same");
}

#[rstest]
fn stored_content_does_not_follow_later_edits(mut sandbox: Sandbox) {
    sandbox.commit_file("a.txt", "before", "first");
    sandbox.write("a.txt", "after");

    assert_eq!(read_file(&sandbox.stored(&commit_id("first"), "a.txt")), "before");
}

#[rstest]
fn generated_files_are_all_saved(mut sandbox: Sandbox) {
    let files = write_generated_files(sandbox.repository.path(), 6);
    for file in &files {
        sandbox.repository.track(file.path.file_name().unwrap()).unwrap();
    }

    let committed = sandbox.repository.commit("generated").unwrap();

    assert_eq!(committed.report.copied.len(), files.len());
    for file in files {
        let name = file.path.file_name().unwrap().to_str().unwrap();
        assert_eq!(read_file(&sandbox.stored(&commit_id("generated"), name)), file.content);
    }
}
