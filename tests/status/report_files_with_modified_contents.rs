use crate::common::command::{init_repository_dir, run_minigit_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::stdout_of;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_files_with_modified_contents(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    let file1 = FileSpec::new(
        repository_dir.path().join("1.txt"),
        "modified one".to_string(),
    );
    write_file(file1);

    // same size, different content
    let file2 = FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "owt".to_string(),
    );
    write_file(file2);

    let expected_output = " M 1.txt\n M a/2.txt\n".to_string();
    let actual_output =
        run_minigit_command(repository_dir.path(), &["status", "--porcelain"])
            .assert()
            .success();

    assert_eq!(stdout_of(&actual_output), expected_output);

    Ok(())
}
