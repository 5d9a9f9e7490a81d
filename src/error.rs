use std::path::PathBuf;
use thiserror::Error;

// Variants that wrap a source error leave it out of their own message;
// callers render the chain with `{:#}`.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("failed to write {}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error")]
    Config(#[from] config::ConfigError),

    #[error("Failed to run '{command}'")]
    GitSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' failed with {}", describe_exit(*code))]
    GitCommand { command: String, code: Option<i32> },
}

impl CliError {
    /// Exit status the process should terminate with for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::GitCommand {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
