//! `embot run` command
//!
//! Starts the backend server and blocks until it exits.

use anyhow::Result;

use crate::config::{Config, BACKEND_SCRIPT};
use crate::launcher;

pub fn run(config: &Config) -> Result<()> {
    println!("🚀 Starting emotional chatbot backend...");
    launcher::run_script(config, BACKEND_SCRIPT, &[])
}
