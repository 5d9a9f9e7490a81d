#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub const COMMIT_MESSAGE: &str =
    "Add data folders (analysis, prompts, reference - excluding large files)";

pub struct TestRepo {
    _dir: TempDir,
    pub path: PathBuf,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    /// A git repository with a local commit identity.
    #[must_use]
    pub fn new() -> Self {
        let repo = Self::bare_dir();
        repo.git(&["init"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo
    }

    /// A git repository where committing fails because no identity is set.
    #[must_use]
    pub fn without_identity() -> Self {
        let repo = Self::bare_dir();
        repo.git(&["init"]);
        repo.git(&["config", "user.useConfigOnly", "true"]);
        repo
    }

    /// A plain directory that git will not treat as part of any repository.
    #[must_use]
    pub fn bare_dir() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().to_path_buf();
        Self { _dir: dir, path }
    }

    fn isolate(&self, cmd: &mut Command) {
        let ceiling = self.path.parent().unwrap_or(&self.path);
        cmd.current_dir(&self.path)
            .env("HOME", &self.path)
            .env("XDG_CONFIG_HOME", self.path.join(".config"))
            .env("GIT_CONFIG_GLOBAL", "/dev/null")
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("GIT_CEILING_DIRECTORIES", ceiling)
            .env_remove("GIT_DIR")
            .env_remove("GIT_WORK_TREE")
            .env_remove("GIT_AUTHOR_NAME")
            .env_remove("GIT_AUTHOR_EMAIL")
            .env_remove("GIT_COMMITTER_NAME")
            .env_remove("GIT_COMMITTER_EMAIL")
            .env_remove("EMAIL")
            .env_remove("FINALPUSH_COMMIT_MESSAGE")
            .env_remove("FINALPUSH_REMOTE")
            .env_remove("FINALPUSH_BRANCH");
    }

    pub fn git(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new("git");
        cmd.args(args);
        self.isolate(&mut cmd);
        cmd.output().expect("failed to run git")
    }

    pub fn write_file(&self, relative_path: &str, content: &str) {
        let full_path = self.path.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dirs");
        }
        std::fs::write(full_path, content).expect("failed to write file");
    }

    #[must_use]
    pub fn read_file(&self, relative_path: &str) -> String {
        std::fs::read_to_string(self.path.join(relative_path)).expect("failed to read file")
    }

    #[must_use]
    pub fn file_exists(&self, relative_path: &str) -> bool {
        self.path.join(relative_path).exists()
    }

    #[must_use]
    pub fn run_finalpush(&self, args: &[&str]) -> Output {
        self.run_finalpush_with_env(args, &[])
    }

    #[must_use]
    pub fn run_finalpush_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_finalpush"));
        cmd.args(args);
        self.isolate(&mut cmd);
        cmd.env("NO_COLOR", "1");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        cmd.output().expect("failed to run finalpush")
    }

    /// Subject line of HEAD, or `None` when there are no commits.
    #[must_use]
    pub fn head_message(&self) -> Option<String> {
        let output = self.git(&["log", "-1", "--format=%s"]);
        if !output.status.success() {
            return None;
        }
        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    #[must_use]
    pub fn commit_count(&self) -> usize {
        let output = self.git(&["rev-list", "--count", "HEAD"]);
        if !output.status.success() {
            return 0;
        }
        String::from_utf8_lossy(&output.stdout)
            .trim()
            .parse()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn is_tracked(&self, relative_path: &str) -> bool {
        self.git(&["ls-files", "--error-unmatch", relative_path])
            .status
            .success()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
