use crate::common::command::{run_minigit_command, two_commit_repository_dir};
use crate::common::stdout_of;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_log_from_specific_commit(
    two_commit_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = two_commit_repository_dir;

    let expected_output = "\
commit 1
Date:    2023-01-01 12:00:00 +0000
Message: m1
Files:   a.txt, b.txt

"
    .to_string();
    let actual_output = run_minigit_command(repository_dir.path(), &["log", "1"])
        .assert()
        .success();

    assert_eq!(stdout_of(&actual_output), expected_output);

    Ok(())
}

#[rstest]
#[case("0", 6)]
#[case("3", 6)]
#[case("-1", 6)]
#[case("99999999999999999999", 6)]
#[case("not-a-number", 2)]
fn show_log_from_invalid_commit(
    two_commit_repository_dir: TempDir,
    #[case] id: &str,
    #[case] exit_code: i32,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = two_commit_repository_dir;

    run_minigit_command(repository_dir.path(), &["log", id])
        .assert()
        .code(exit_code)
        .stdout("");

    Ok(())
}

#[rstest]
fn show_log_from_negative_commit_after_separator(
    two_commit_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = two_commit_repository_dir;

    run_minigit_command(repository_dir.path(), &["log", "--", "-1"])
        .assert()
        .code(6)
        .stdout("")
        .stderr("error: commit -1 does not exist\n");

    Ok(())
}
