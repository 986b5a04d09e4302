//! `forkmonkey render` - re-render the monkey SVG from stored DNA.

use crate::genetics::MonkeyDna;
use crate::models::ForkMonkeyConfig;
use crate::{visualizer, Result};
use anyhow::Context as _;
use colored::Colorize;
use std::env;
use std::path::PathBuf;

pub async fn run(output: Option<PathBuf>, size: Option<u32>) -> Result<()> {
    let project_root = env::current_dir()?;
    let config = ForkMonkeyConfig::load(&project_root)?;

    let dna = MonkeyDna::load(&ForkMonkeyConfig::monkey_path(&project_root))
        .context("No monkey DNA found; run 'forkmonkey init' first")?;

    let size = size.unwrap_or(visualizer::DEFAULT_SIZE);
    let svg = visualizer::generate_svg(&dna, size, size);

    let output = output.unwrap_or_else(|| project_root.join(&config.web_dir).join("monkey.svg"));
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&output, svg)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{}",
        format!("🎨 Rendered {} ({}x{})", output.display(), size, size).green()
    );

    Ok(())
}
