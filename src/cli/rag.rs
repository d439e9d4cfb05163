//! `embot rag` command
//!
//! Knowledge-base operations: seed it via the initializer script, or
//! poke the running backend over HTTP.
//!
//! `test` and `demo` are diagnostics against a server that may well not
//! be up; a transport failure prints a warning instead of failing the
//! command, so the exit code stays 0.

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;

use crate::config::{Config, RAG_INIT_SCRIPT};
use crate::launcher;
use crate::remote::RagClient;

/// Question sent by `rag demo`
pub const DEMO_QUESTION: &str = "失眠怎么办？";

#[derive(Args, Debug)]
pub struct RagArgs {
    /// RAG operation to perform
    #[arg(value_enum)]
    pub action: RagAction,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RagAction {
    /// Seed the knowledge base
    Init,
    /// Check the RAG test endpoint
    Test,
    /// Ask a canned question to compare answers with and without RAG
    Demo,
}

pub fn run(args: RagArgs, config: &Config) -> Result<()> {
    match args.action {
        RagAction::Init => launcher::run_script(config, RAG_INIT_SCRIPT, &[]),
        RagAction::Test => test(config),
        RagAction::Demo => demo(config),
    }
}

fn test(config: &Config) -> Result<()> {
    let client = RagClient::from_config(config)?;
    println!("📝 Testing RAG system...");
    println!("Checking RAG API endpoint: {}", client.test_endpoint());

    match client.test() {
        Ok((status, body)) => {
            println!("✅ Status: {}", status.as_u16());
            println!("{body}");
        }
        Err(e) => print_backend_warning(&e),
    }
    Ok(())
}

fn demo(config: &Config) -> Result<()> {
    let client = RagClient::from_config(config)?;
    println!("🎬 Running RAG comparison demo...");
    println!("Question: {DEMO_QUESTION}");

    match client.ask(DEMO_QUESTION) {
        Ok((status, body)) => {
            println!("✅ Status: {}", status.as_u16());
            println!("{body}");
        }
        Err(e) => print_backend_warning(&e),
    }
    Ok(())
}

fn print_backend_warning(e: &anyhow::Error) {
    println!(
        "{}",
        format!("⚠️  Make sure the backend is running: {e:#}").yellow()
    );
}
