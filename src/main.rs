//! embot CLI - Entry point
//!
//! Usage: embot <command> [options]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use embot::cli::{Cli, Commands};
use embot::config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .init();

    // Catch Ctrl-C so an interrupted `run` reports cleanly instead of
    // dying with the default signal disposition
    if let Err(e) = ctrlc::set_handler(|| {
        eprintln!("\n\n⚠️  Interrupted by user");
        std::process::exit(1);
    }) {
        eprintln!("{}", format!("❌ Error: {e}").red());
        return ExitCode::FAILURE;
    }

    let Some(command) = cli.command else {
        // No subcommand: print help and succeed
        let mut cmd = Cli::command();
        let _ = cmd.print_help();
        return ExitCode::SUCCESS;
    };

    let result = load_config(cli.config).and_then(|config| match command {
        Commands::Run => embot::cli::run::run(&config),
        Commands::Db(args) => embot::cli::db::run(args, &config),
        Commands::Rag(args) => embot::cli::rag::run(args, &config),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n{}", format!("❌ Error: {e:#}").red());
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<String>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(&PathBuf::from(path)),
        None => Config::load(),
    }
}
