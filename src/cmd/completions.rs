use crate::cli::Cli;
use crate::utils::theme::{dimmed, highlight};
use clap::CommandFactory;
use clap_complete::{generate as gen_completions, Shell};

pub fn generate(shell: Shell) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    gen_completions(shell, &mut cmd, bin_name, &mut std::io::stdout());
}

pub fn print_version() {
    println!(
        "{} {}",
        highlight("finalpush"),
        highlight(env!("CARGO_PKG_VERSION"))
    );
    println!("{}", dimmed(env!("CARGO_PKG_DESCRIPTION")));
    println!();
    println!("{:<12} {}", dimmed("Target:"), env!("TARGET"));
    println!("{:<12} {}", dimmed("Rustc:"), env!("RUSTC_VERSION"));
}
