// ForkMonkey - procedurally generated repo monkeys
// DNA-driven SVG art, a local web interface, and git hook plumbing

pub mod cli;
pub mod genetics;
pub mod hooks;
pub mod models;
pub mod server;
pub mod visualizer;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use genetics::{Gene, GeneticsEngine, MonkeyDna, Rarity, TraitCategory};
pub use models::ForkMonkeyConfig;
