use crate::common::command::{run_minigit_command, two_commit_repository_dir};
use crate::common::file::{FileSpec, delete_path, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn restore_blocked_by_a_directory_writes_nothing(
    two_commit_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = two_commit_repository_dir;

    delete_path(&repository_dir.path().join("b.txt"));
    write_file(FileSpec::new(
        repository_dir.path().join("b.txt").join("inner.txt"),
        "a directory now".to_string(),
    ));

    run_minigit_command(repository_dir.path(), &["restore", "1"])
        .assert()
        .code(8)
        .stdout("")
        .stderr(predicates::str::contains("b.txt"));

    assert_eq!(read_file(&repository_dir.path().join("a.txt")), "a2");
    assert!(repository_dir.path().join("b.txt").is_dir());

    Ok(())
}
