use crate::core::config;
use crate::core::git::command::SystemGit;
use crate::core::workflow::Workflow;
use anyhow::{Context, Result};
use tracing::debug;

/// Runs the pipeline in the current directory. `message` overrides the
/// configured commit message for this run only.
pub fn run(message: Option<String>) -> Result<()> {
    let mut cfg = config::load().context("failed to load configuration")?;
    if let Some(message) = message {
        cfg.commit_message = message;
    }
    debug!("effective configuration: {:?}", cfg);

    let project_root = std::env::current_dir().context("failed to read current directory")?;
    let git = SystemGit::new(&project_root);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    Workflow::new(&project_root, &git, &cfg).run(&mut out)?;

    Ok(())
}
