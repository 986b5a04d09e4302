//! `forkmonkey serve` - run the web server for an existing project.

use crate::models::ForkMonkeyConfig;
use crate::{server, Result};
use colored::Colorize;
use std::env;

pub async fn run(port: Option<u16>, no_browser: bool) -> Result<()> {
    let project_root = env::current_dir()?;

    if !ForkMonkeyConfig::exists(&project_root) {
        println!(
            "{}",
            "⚠ Project is not initialized; run 'forkmonkey init' or 'forkmonkey start'".yellow()
        );
    }

    let config = ForkMonkeyConfig::load(&project_root)?;
    let port = port.unwrap_or(config.port);

    server::start(project_root, port, !no_browser).await
}
