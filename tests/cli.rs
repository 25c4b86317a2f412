use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use common::command::{
    beargit_commit, head_commit_id, init_repository_dir, repository_dir, run_beargit_command,
};
use fake::Fake;
use fake::faker::lorem::en::Words;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

#[rstest]
fn init_creates_the_control_directory(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let control_dir = repository_dir.path().canonicalize()?.join(".beargit");

    run_beargit_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty beargit repository in .+\n$",
        )?)
        .stdout(predicate::str::contains(control_dir.display().to_string()));

    for name in [".index", ".prev", ".current_branch", ".branches", ".branch_master"] {
        assert!(control_dir.join(name).is_file(), "{name} is missing");
    }

    Ok(())
}

#[rstest]
fn init_twice_fails(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_beargit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_beargit_command(repository_dir.path(), &["init"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already initialized"));

    Ok(())
}

#[rstest]
fn work_tree_flag_and_control_dir_env_are_honoured(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let elsewhere = TempDir::new()?;
    let work_tree = repository_dir.path().to_str().unwrap();

    let mut cmd = Command::cargo_bin("beargit")?;
    cmd.current_dir(elsewhere.path())
        .env("BEARGIT_DIR", ".vault")
        .args(["-C", work_tree, "init"]);
    cmd.assert().success();

    assert!(repository_dir.path().join(".vault").join(".index").is_file());
    assert!(!repository_dir.path().join(".beargit").exists());
    assert!(!elsewhere.path().join(".vault").exists());

    let mut cmd = Command::cargo_bin("beargit")?;
    cmd.current_dir(elsewhere.path())
        .env("BEARGIT_WORK_TREE", work_tree)
        .args(["--control-dir", ".vault", "add", "notes.txt"]);
    cmd.assert().success();

    assert_eq!(
        std::fs::read_to_string(repository_dir.path().join(".vault").join(".index"))?,
        "notes.txt\n"
    );

    Ok(())
}

#[rstest]
#[case("../escape")]
#[case("nested/dir")]
fn control_dir_must_be_a_single_name(
    repository_dir: TempDir,
    #[case] control_dir: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    run_beargit_command(repository_dir.path(), &["--control-dir", control_dir, "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid path"));

    Ok(())
}

#[rstest]
fn commands_outside_a_repository_fail(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    for args in [
        vec!["status"],
        vec!["add", "a.txt"],
        vec!["branch"],
        vec!["checkout", "master"],
        vec!["log"],
    ] {
        run_beargit_command(repository_dir.path(), &args)
            .assert()
            .failure()
            .stderr(predicate::str::contains("not a beargit repository"));
    }

    Ok(())
}

#[rstest]
fn rev_parse_prints_the_resolved_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let head = head_commit_id(dir);

    run_beargit_command(dir, &["rev-parse", "master"])
        .assert()
        .success()
        .stdout(format!("{head} (master)\n"));

    run_beargit_command(dir, &["rev-parse", &head])
        .assert()
        .success()
        .stdout(format!("{head}\n"));

    run_beargit_command(dir, &["rev-parse", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No branch or commit nope exists."));

    Ok(())
}

#[rstest]
fn full_workflow_over_the_command_line(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    let content = Words(5..10).fake::<Vec<String>>().join(" ");
    repository_dir.child("wug.txt").write_str(&content)?;

    run_beargit_command(dir, &["init"]).assert().success();
    run_beargit_command(dir, &["add", "wug.txt"]).assert().success();
    beargit_commit(dir, "GO BEARS!").assert().success();

    run_beargit_command(dir, &["checkout", "-b", "fixes"])
        .assert()
        .success();
    repository_dir.child("wug.txt").write_str("fixed")?;
    beargit_commit(dir, "fix").assert().success();

    run_beargit_command(dir, &["checkout", "master"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Switched to branch 'master'"));
    assert_eq!(std::fs::read_to_string(dir.join("wug.txt"))?, content);

    run_beargit_command(dir, &["merge", "fixes"])
        .assert()
        .success()
        .stdout("wug.txt conflicted copy created\n");

    run_beargit_command(dir, &["branch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*  "))
        .stdout(predicate::str::ends_with("   fixes\n"));

    run_beargit_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("There is 1 file total."));

    Ok(())
}
