use crate::common::command::{repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case(&["add", "a.txt"])]
#[case(&["commit", "-m", "message"])]
#[case(&["status"])]
#[case(&["log"])]
#[case(&["restore", "1"])]
fn commands_require_an_initialized_repository(
    repository_dir: TempDir,
    #[case] args: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    run_minigit_command(repository_dir.path(), args)
        .assert()
        .code(3)
        .stdout("")
        .stderr(predicate::str::starts_with("error: not a minigit repository"));

    assert!(!repository_dir.path().join(".minigit").exists());

    Ok(())
}
