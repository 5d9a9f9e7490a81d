use crate::error::{CliError, Result};
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, trace};

/// Runs git subcommands to completion, one at a time.
pub trait GitRunner {
    fn run(&self, args: &[&str]) -> Result<()>;
}

/// Invokes the `git` binary with the parent's standard streams, so its output
/// and any error text reach the terminal unchanged.
#[derive(Debug, Clone)]
pub struct SystemGit {
    workdir: PathBuf,
}

impl SystemGit {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }
}

impl GitRunner for SystemGit {
    fn run(&self, args: &[&str]) -> Result<()> {
        let command = display_command(args);
        trace!("running {:?} in {}", command, self.workdir.display());

        let status = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .status()
            .map_err(|source| CliError::GitSpawn {
                command: command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(CliError::GitCommand {
                command,
                code: status.code(),
            });
        }

        debug!("{} finished", command);
        Ok(())
    }
}

pub fn display_command(args: &[&str]) -> String {
    let mut out = String::from("git");
    for arg in args {
        out.push(' ');
        if arg.is_empty() || arg.contains(char::is_whitespace) {
            out.push('"');
            out.push_str(arg);
            out.push('"');
        } else {
            out.push_str(arg);
        }
    }
    out
}
