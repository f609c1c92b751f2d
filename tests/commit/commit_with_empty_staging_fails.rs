use crate::common::command::{init_repository_dir, minigit_commit, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn commit_with_empty_staging_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    minigit_commit(repository_dir.path(), "x")
        .assert()
        .code(5)
        .stdout("")
        .stderr(predicate::str::contains("minigit add"));

    run_minigit_command(repository_dir.path(), &["log", "2"])
        .assert()
        .code(6)
        .stderr("error: commit 2 does not exist\n");
    assert!(!repository_dir.path().join(".minigit/commits/2.json").exists());

    Ok(())
}
