pub mod cli;
pub mod error;

pub mod cmd {
    pub mod completions;
    pub mod finalize;
}

pub mod core {
    pub mod config;
    pub mod gitignore;
    pub mod workflow;

    pub mod git {
        pub mod command;
    }
}

pub mod utils {
    pub mod theme;
}

use anyhow::Result;
use cli::{Cli, Commands};

pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Completions { shell }) => {
            cmd::completions::generate(shell);
            Ok(())
        }
        Some(Commands::Version) => {
            cmd::completions::print_version();
            Ok(())
        }
        None => cmd::finalize::run(cli.message),
    }
}
