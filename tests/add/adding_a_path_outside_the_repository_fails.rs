use crate::common::command::{repository_dir, run_minigit_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::stdout_of;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn adding_a_path_outside_the_repository_fails(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let project = repository_dir.path().join("project");
    write_file(FileSpec::new(project.join("a.txt"), "a".to_string()));
    write_file(FileSpec::new(
        repository_dir.path().join("outside.txt"),
        "outside".to_string(),
    ));
    run_minigit_command(&project, &["init"]).assert().success();

    run_minigit_command(&project, &["add", "a.txt", "../outside.txt"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("outside the repository"));

    let status = run_minigit_command(&project, &["status", "--porcelain"])
        .assert()
        .success();
    assert_eq!(stdout_of(&status), "?? a.txt\n");

    Ok(())
}
