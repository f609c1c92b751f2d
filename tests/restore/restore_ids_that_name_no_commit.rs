use crate::common::command::{run_minigit_command, two_commit_repository_dir};
use crate::common::file::read_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(&["restore", "-1"], "-1")]
#[case(&["restore", "--", "-1"], "-1")]
#[case(&["restore", "0"], "0")]
#[case(&["restore", "99999999999999999999"], "99999999999999999999")]
fn restore_ids_that_name_no_commit(
    two_commit_repository_dir: TempDir,
    #[case] args: &[&str],
    #[case] id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = two_commit_repository_dir;

    run_minigit_command(repository_dir.path(), args)
        .assert()
        .code(6)
        .stdout("")
        .stderr(format!("error: commit {id} does not exist\n"));

    assert_eq!(read_file(&repository_dir.path().join("a.txt")), "a2");

    Ok(())
}

#[rstest]
fn restore_rejects_a_non_numeric_id(
    two_commit_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = two_commit_repository_dir;

    run_minigit_command(repository_dir.path(), &["restore", "latest"])
        .assert()
        .code(2);

    Ok(())
}
