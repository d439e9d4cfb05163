//! CLI module - Command definitions and handlers

use clap::{Parser, Subcommand};

pub mod db;
pub mod rag;
pub mod run;

const EXAMPLES: &str = "\
Examples:
  embot run              # Start the backend server
  embot db upgrade       # Upgrade the database
  embot db check         # Check the database connection
  embot rag init         # Seed the RAG knowledge base
  embot rag test         # Test the RAG system
";

/// embot - emotional chatbot control CLI
///
/// Dispatches to the backend server, the database manager, and the
/// RAG knowledge-base tooling.
#[derive(Parser, Debug)]
#[command(name = "embot")]
#[command(author, version, about, long_about = None)]
#[command(after_help = EXAMPLES)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, env = "EMBOT_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the backend server
    Run,

    /// Database management commands
    Db(db::DbArgs),

    /// RAG knowledge-base commands
    Rag(rag::RagArgs),
}
