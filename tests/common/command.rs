use crate::common::bear_message;
use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use beargit::{Config, Repository};
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A repository with `1.txt`, `a/2.txt` and `a/b/3.txt` committed on master
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_beargit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let files = [
        ("1.txt", "one"),
        ("a/2.txt", "two"),
        ("a/b/3.txt", "three"),
    ];
    for (path, content) in files {
        write_file(FileSpec::new(
            repository_dir.path().join(path),
            content.to_string(),
        ));
        run_beargit_command(repository_dir.path(), &["add", path])
            .assert()
            .success();
    }

    beargit_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

/// Four commits on master, each adding one file
#[fixture]
pub fn repository_with_multiple_commits(repository_dir: TempDir) -> TempDir {
    run_beargit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    for (i, summary) in ["First", "Second", "Third", "Fourth"].iter().enumerate() {
        let name = format!("file{}.txt", i + 1);
        write_file(FileSpec::new(
            repository_dir.path().join(&name),
            format!("content {}", i + 1),
        ));
        run_beargit_command(repository_dir.path(), &["add", &name])
            .assert()
            .success();
        beargit_commit(repository_dir.path(), &format!("{summary} commit"))
            .assert()
            .success();
    }

    repository_dir
}

pub fn run_beargit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("beargit").expect("Failed to find beargit binary");
    cmd.env_remove("BEARGIT_WORK_TREE");
    cmd.env_remove("BEARGIT_DIR");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// `beargit commit` with a message that carries the marker
pub fn beargit_commit(dir: &Path, summary: &str) -> Command {
    run_beargit_command(dir, &["commit", "-m", &bear_message(summary)])
}

/// Library handle over a test work tree
pub fn open_repository(dir: &Path) -> Repository {
    Repository::new(&Config::for_work_tree(dir)).expect("Failed to open repository")
}

/// Library handle over a freshly initialized work tree
pub fn init_repository(dir: &Path) -> Repository {
    let repository = open_repository(dir);
    repository.init().expect("Failed to initialize repository");
    repository
}

pub fn control_file(dir: &Path, name: &str) -> String {
    let path = dir.join(".beargit").join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e))
}

/// Commit id currently recorded as HEAD
pub fn head_commit_id(dir: &Path) -> String {
    control_file(dir, ".prev").trim().to_string()
}
