#![allow(dead_code)]

use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

use gitstatus::Status;
use temp_dir::TempDir;

// https://git-scm.com/book/en/v2/Git-Internals-Environment-Variables
const GIT_ENV: [(&str, &str); 10] = [
    ("GIT_CONFIG_GLOBAL", "/dev/null"),
    ("GIT_CONFIG_SYSTEM", "/dev/null"),
    ("GIT_CONFIG_NOSYSTEM", "1"),
    ("GIT_AUTHOR_NAME", "Author Name"),
    ("GIT_AUTHOR_EMAIL", "author@email.com"),
    ("GIT_AUTHOR_DATE", "Fri Feb 16 11:11 2024 +0100"),
    ("GIT_COMMITTER_NAME", "Committer Name"),
    ("GIT_COMMITTER_EMAIL", "committer@email.com"),
    ("GIT_COMMITTER_DATE", "Sun Feb 18 14:00 2024 +0100"),
    ("LC_ALL", "C"),
];

pub struct RepoTestContext {
    pub dir: TempDir,
    pub remote_dir: TempDir,
}

impl RepoTestContext {
    pub fn setup_init() -> Self {
        let remote_dir = TempDir::new().unwrap();
        let dir = TempDir::new().unwrap();

        init(dir.path());

        Self { dir, remote_dir }
    }

    /// `dir` is a clone of `remote_dir`, with `main` tracking `origin/main`.
    pub fn setup_clone() -> Self {
        let remote_dir = TempDir::new().unwrap();
        let dir = TempDir::new().unwrap();

        init(remote_dir.path());
        commit(remote_dir.path(), "initial-file", "hello");
        run(
            dir.path(),
            &["git", "clone", remote_dir.path().to_str().unwrap(), "."],
        );

        Self { dir, remote_dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn status(&self, extra_args: &[&str]) -> Status {
        let output = git_output(
            self.path(),
            &[
                &[
                    "status",
                    "--porcelain=v2",
                    "--branch",
                    "-z",
                    "--untracked-files=all",
                ],
                extra_args,
            ]
            .concat(),
        );
        assert!(output.status.success(), "git status failed: {:?}", output);

        gitstatus::parse_status(&output.stdout[..]).unwrap()
    }

    pub fn head(&self) -> String {
        run(self.path(), &["git", "rev-parse", "HEAD"])
            .trim()
            .to_string()
    }
}

fn init(dir: &Path) {
    run(dir, &["git", "init"]);
    // Works regardless of the git version's default branch name
    run(dir, &["git", "symbolic-ref", "HEAD", "refs/heads/main"]);
}

fn git_output(dir: &Path, args: &[&str]) -> Output {
    Command::new("git")
        .args(args)
        .envs(GIT_ENV)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|_| panic!("failed to execute git {:?}", args))
}

pub fn run(dir: &Path, cmd: &[&str]) -> String {
    String::from_utf8(
        Command::new(cmd[0])
            .args(&cmd[1..])
            .envs(GIT_ENV)
            .current_dir(dir)
            .output()
            .unwrap_or_else(|_| panic!("failed to execute {:?}", cmd))
            .stdout,
    )
    .unwrap()
}

pub fn commit(dir: &Path, file_name: &str, contents: &str) {
    let path = dir.to_path_buf().join(file_name);
    let message = match path.try_exists() {
        Ok(true) => format!("modify {}", file_name),
        _ => format!("add {}", file_name),
    };
    fs::write(path, contents).expect("error writing to file");
    run(dir, &["git", "add", file_name]);
    run(dir, &["git", "commit", "-m", &message]);
}
