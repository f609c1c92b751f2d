use crate::common::command::{repository_dir, run_minigit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn init_repository_successfully(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let target = repository_dir.path().join("project");

    run_minigit_command(repository_dir.path(), &["init", "project"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty minigit repository in .+project\n$",
        )?);

    let metadata = target.join(".minigit");
    assert!(metadata.join("objects").is_dir());
    assert!(metadata.join("commits").is_dir());
    assert!(metadata.join("index.json").is_file());

    run_minigit_command(&target, &["status", "--porcelain"])
        .assert()
        .success()
        .stdout("");

    Ok(())
}
