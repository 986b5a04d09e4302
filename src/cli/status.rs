//! `forkmonkey status` - show the current monkey.

use crate::genetics::{MonkeyDna, Rarity, TraitCategory};
use crate::models::ForkMonkeyConfig;
use crate::Result;
use anyhow::Context as _;
use colored::Colorize;
use std::env;

pub async fn run(json: bool) -> Result<()> {
    let project_root = env::current_dir()?;
    let config = ForkMonkeyConfig::load(&project_root)?;

    let dna = MonkeyDna::load(&ForkMonkeyConfig::monkey_path(&project_root))
        .context("No monkey DNA found; run 'forkmonkey init' first")?;

    if json {
        let output = serde_json::json!({
            "project": config.project_name,
            "dna": dna,
            "rarity_score": dna.rarity_score(),
            "rarity_label": dna.badge().1,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("\n{}", format!("🐵 {}", config.project_name).bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Id:         {}", dna.id);
    println!("  Generation: {}", dna.generation);
    println!("  DNA:        {}…", &dna.dna_hash[..dna.dna_hash.len().min(16)]);
    println!("  Born:       {}", dna.created_at.format("%Y-%m-%d %H:%M:%S"));

    println!("\n{}", "Traits".bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for category in TraitCategory::ALL {
        if let Some(gene) = dna.traits.get(&category) {
            let tier = match gene.rarity {
                Rarity::Common => gene.rarity.to_string().normal(),
                Rarity::Uncommon => gene.rarity.to_string().cyan(),
                Rarity::Rare => gene.rarity.to_string().magenta(),
                Rarity::Legendary => gene.rarity.to_string().yellow().bold(),
            };
            println!("  {:16} {:14} {}", category.to_string(), gene.value, tier);
        }
    }

    let (_, label) = dna.badge();
    println!();
    println!("  Rarity: {:.1}/100 {}", dna.rarity_score(), label.bold());
    println!();

    Ok(())
}
