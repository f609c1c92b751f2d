use crate::common::command::{run_minigit_command, two_commit_repository_dir};
use crate::common::file::{FileSpec, read_file, write_file};
use crate::common::stdout_of;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn restore_to_an_earlier_commit(
    two_commit_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = two_commit_repository_dir;

    // pending stage is discarded by the restore
    write_file(FileSpec::new(
        repository_dir.path().join("b.txt"),
        "staged, never committed".to_string(),
    ));
    run_minigit_command(repository_dir.path(), &["add", "b.txt"])
        .assert()
        .success();

    let expected_output = "\
restored 'a.txt'
restored 'b.txt'
Restored working directory to commit 1
Message: \"m1\"
"
    .to_string();
    let actual_output = run_minigit_command(repository_dir.path(), &["restore", "1"])
        .assert()
        .success();

    assert_eq!(stdout_of(&actual_output), expected_output);
    assert_eq!(read_file(&repository_dir.path().join("a.txt")), "a1");
    assert_eq!(read_file(&repository_dir.path().join("b.txt")), "b1");

    // HEAD is still commit 2, so a.txt now differs from it
    let status = run_minigit_command(repository_dir.path(), &["status", "--porcelain"])
        .assert()
        .success();
    assert_eq!(stdout_of(&status), " M a.txt\n");

    run_minigit_command(repository_dir.path(), &["restore", "2"])
        .assert()
        .success();
    let status = run_minigit_command(repository_dir.path(), &["status", "--porcelain"])
        .assert()
        .success();
    assert_eq!(stdout_of(&status), "");

    Ok(())
}
