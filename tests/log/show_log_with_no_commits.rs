use crate::common::command::{repository_dir, run_minigit_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_log_with_no_commits(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_minigit_command(repository_dir.path(), &["log"])
        .assert()
        .success()
        .stdout("No commits yet\n");

    Ok(())
}
