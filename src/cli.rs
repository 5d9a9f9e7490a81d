use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "finalpush",
    about = "Rewrite .gitignore and commit the data folders",
    long_about = "Rewrite .gitignore and commit the data folders in one step.\n\nThis command:\n  • Replaces ./.gitignore with the project's fixed exclusion list\n  • Stages every change (git add .)\n  • Shows the repository status\n  • Commits with the data-folders message\n\nPushing is left to you: run the printed git push command afterwards.",
    version,
    after_help = "Run without a subcommand to perform the commit."
)]
pub struct Cli {
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    #[arg(short, long, help = "Use this commit message instead of the configured one")]
    pub message: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Generate shell completions")]
    Completions {
        #[arg(value_enum, help = "Shell type to generate completions for")]
        shell: clap_complete::Shell,
    },

    #[command(about = "Print version information")]
    Version,
}
