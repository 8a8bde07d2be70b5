//! kazakh-morph - Kazakh morphological synthesis from the command line

use clap::Parser;
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use kazakh_morph::cli::commands;
use kazakh_morph::cli::Cli;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kazakh_morph=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli.command, cli.config) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
