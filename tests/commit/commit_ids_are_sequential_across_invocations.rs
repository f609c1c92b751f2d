use crate::common::command::{minigit_commit, repository_dir, run_minigit_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::stdout_of;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_ids_are_sequential_across_invocations(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_minigit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let mut outputs = Vec::new();
    for n in 1..=3 {
        write_file(FileSpec::new(
            repository_dir.path().join("a.txt"),
            format!("version {n}"),
        ));
        write_file(FileSpec::new(
            repository_dir.path().join("b.txt"),
            "constant".to_string(),
        ));
        run_minigit_command(repository_dir.path(), &["add", "b.txt", "a.txt"])
            .assert()
            .success();

        let commit = minigit_commit(repository_dir.path(), &format!("m{n}"))
            .assert()
            .success();
        outputs.push(stdout_of(&commit));

        // staging is cleared by every commit
        let status = run_minigit_command(repository_dir.path(), &["status", "--porcelain"])
            .assert()
            .success();
        assert_eq!(stdout_of(&status), "");
    }

    assert_eq!(
        outputs,
        vec![
            "[(root-commit) 1] m1\n 2 file(s): a.txt, b.txt\n",
            "[2] m2\n 2 file(s): a.txt, b.txt\n",
            "[3] m3\n 2 file(s): a.txt, b.txt\n",
        ]
    );

    Ok(())
}
