use crate::common::command::{repository_dir, run_minigit_command};
use crate::common::file::{FileSpec, write_file, write_generated_files};
use crate::common::stdout_of;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_files_from_nested_directories_successfully(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let nested = repository_dir.path().join("src").join("nested");
    let generated = write_generated_files(&nested, 3);
    write_file(FileSpec::new(
        repository_dir.path().join("src").join("main.rs"),
        "fn main() {}".to_string(),
    ));

    let actual_output = run_minigit_command(repository_dir.path(), &["add", "src"])
        .assert()
        .success();

    let mut expected_paths = generated
        .iter()
        .map(|file| {
            let name = file.path.file_name().unwrap().to_string_lossy();
            format!("src/nested/{name}")
        })
        .collect::<Vec<_>>();
    expected_paths.push("src/main.rs".to_string());
    expected_paths.sort();

    let expected_output = expected_paths
        .iter()
        .map(|path| format!("added '{path}'\n"))
        .collect::<String>();
    assert_eq!(stdout_of(&actual_output), expected_output);

    let expected_status = expected_paths
        .iter()
        .map(|path| format!("A  {path}\n"))
        .collect::<String>();
    let status = run_minigit_command(repository_dir.path(), &["status", "--porcelain"])
        .assert()
        .success();
    assert_eq!(stdout_of(&status), expected_status);

    Ok(())
}
