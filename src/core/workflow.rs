//! The finalize pipeline: rewrite `.gitignore`, stage, show status, commit,
//! then remind the operator to push.
//!
//! Every step must succeed before the next one starts. The first failure
//! aborts the run and leaves earlier side effects (written file, staged
//! index) in place.

use crate::core::config::Config;
use crate::core::git::command::GitRunner;
use crate::core::gitignore;
use crate::error::Result;
use crate::utils::theme::{code, phase, pointer_icon, success_message};
use std::io::Write;
use std::path::Path;
use tracing::info;

const TOTAL_PHASES: usize = 5;

pub struct Workflow<'a, R: GitRunner> {
    project_root: &'a Path,
    runner: &'a R,
    config: &'a Config,
}

impl<'a, R: GitRunner> Workflow<'a, R> {
    pub fn new(project_root: &'a Path, runner: &'a R, config: &'a Config) -> Self {
        Self {
            project_root,
            runner,
            config,
        }
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", phase(1, TOTAL_PHASES, "Writing .gitignore"))?;
        let path = gitignore::write(self.project_root)?;
        info!("replaced {}", path.display());
        writeln!(out, "{}", success_message(".gitignore updated"))?;

        writeln!(out, "\n{}", phase(2, TOTAL_PHASES, "Staging files"))?;
        out.flush()?;
        self.runner.run(&["add", "."])?;

        writeln!(out, "\n{}", phase(3, TOTAL_PHASES, "Checking status"))?;
        out.flush()?;
        self.runner.run(&["status"])?;

        writeln!(out, "\n{}", phase(4, TOTAL_PHASES, "Committing"))?;
        out.flush()?;
        self.runner
            .run(&["commit", "-m", self.config.commit_message.as_str()])?;
        info!("committed: {}", self.config.commit_message);
        writeln!(out, "{}", success_message("Commit created"))?;

        writeln!(out, "\n{}", phase(5, TOTAL_PHASES, "Push"))?;
        writeln!(
            out,
            "{} Now run: {}",
            pointer_icon(),
            code(&self.config.push_command())
        )?;
        out.flush()?;

        Ok(())
    }
}
