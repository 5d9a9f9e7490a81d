use anyhow::Result;
use clap::Parser;
use finalpush::error::CliError;
use finalpush::utils::theme::error_label;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = finalpush::cli::Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color {
        owo_colors::set_override(false);
    }

    if let Err(e) = finalpush::execute(cli) {
        print_error(&e);
        std::process::exit(exit_code(&e));
    }

    Ok(())
}

fn exit_code(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<CliError>()
        .map_or(1, CliError::exit_code)
}

fn print_error(error: &anyhow::Error) {
    eprintln!("{} {:#}", error_label(), error);
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .init();
}
