//! Subprocess launcher for the sibling entry points
//!
//! Each command runs the configured interpreter against one script,
//! inherits stdio, and blocks until the child exits. A non-zero exit
//! status surfaces as an error so `main` can map it to exit code 1.

use std::process::Command;

use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::config::Config;

/// Run a sibling script and wait for it to finish.
///
/// # Errors
/// Returns an error if the interpreter cannot be spawned or the child
/// exits with a non-zero status.
pub fn run_script(config: &Config, script: &str, args: &[&str]) -> Result<()> {
    let script_path = config.script_path(script);
    debug!(
        interpreter = %config.interpreter,
        script = %script_path.display(),
        ?args,
        "launching subprocess"
    );

    let status = Command::new(&config.interpreter)
        .arg(&script_path)
        .args(args)
        .status()
        .with_context(|| {
            format!(
                "Failed to launch {} {}",
                config.interpreter,
                script_path.display()
            )
        })?;

    if !status.success() {
        bail!(
            "{} exited with status {}",
            script_path.display(),
            status.code().map_or_else(
                || "killed by signal".to_string(),
                |code| code.to_string()
            )
        );
    }

    Ok(())
}
