//! `embot db` command
//!
//! Forwards a single validated action keyword to the database manager.
//!
//! # Usage
//! ```bash
//! embot db init      # Create the schema
//! embot db upgrade   # Apply pending migrations
//! embot db check     # Check the database connection
//! ```

use anyhow::Result;
use clap::{Args, ValueEnum};

use crate::config::{Config, DB_MANAGER_SCRIPT};
use crate::launcher;

#[derive(Args, Debug)]
pub struct DbArgs {
    /// Database operation to perform
    #[arg(value_enum)]
    pub action: DbAction,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DbAction {
    Init,
    Upgrade,
    Downgrade,
    Check,
    Current,
    History,
    Reset,
}

impl DbAction {
    /// Keyword passed to the database manager
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Upgrade => "upgrade",
            Self::Downgrade => "downgrade",
            Self::Check => "check",
            Self::Current => "current",
            Self::History => "history",
            Self::Reset => "reset",
        }
    }
}

pub fn run(args: DbArgs, config: &Config) -> Result<()> {
    launcher::run_script(config, DB_MANAGER_SCRIPT, &[args.action.as_str()])
}
