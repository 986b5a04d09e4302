//! `forkmonkey start` - the launcher: initialize if needed, then serve.

use crate::models::ForkMonkeyConfig;
use crate::{server, Result};
use colored::Colorize;
use std::env;
use std::path::Path;

pub async fn run(port: Option<u16>, no_browser: bool) -> Result<()> {
    let project_root = env::current_dir()?;

    // Initialization must complete before the server binds
    if ensure_initialized(&project_root)? {
        println!();
    }

    let config = ForkMonkeyConfig::load(&project_root)?;
    let port = port.unwrap_or(config.port);

    server::start(project_root, port, !no_browser).await
}

/// Run the init flow when the marker file is absent.
///
/// Returns whether initialization ran.
pub fn ensure_initialized(project_root: &Path) -> Result<bool> {
    if ForkMonkeyConfig::exists(project_root) {
        return Ok(false);
    }

    println!(
        "{}",
        "🐵 No monkey found, initializing ForkMonkey first...".cyan()
    );
    crate::cli::init::init_project(project_root, None, true)?;
    Ok(true)
}
