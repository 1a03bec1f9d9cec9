//! # etude
//!
//! Étude - Vue.js practice environment with template linting.
//!
//! ## Name Origin
//!
//! An **étude** is a short piece written for practice: small enough to
//! hold in your head, hard enough to teach you something. This crate is
//! the command-line gateway to the étude toolchain — lint components,
//! watch one while you edit it, or run it against the execution backend.

mod commands;
mod config;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "etude")]
#[command(about = "Vue.js practice environment with template linting", long_about = None)]
#[command(version, disable_version_flag = true)]
struct Cli {
    /// Print version
    #[arg(short = 'v', short_alias = 'V', long, action = clap::ArgAction::Version)]
    version: (),
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint Vue SFC files
    #[command(visible_alias = "critique")]
    Lint(commands::lint::LintArgs),

    /// Watch a component, re-validating after each pause in editing
    #[command(visible_alias = "pupitre")]
    Watch(commands::watch::WatchArgs),

    /// Run a component on the execution backend
    Run(commands::run::RunArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Lint(args) => commands::lint::run(args),
        Commands::Watch(args) => commands::watch::run(args),
        Commands::Run(args) => commands::run::run(args),
    }
}
