//! `forkmonkey init` - create the project scaffold and founding monkey.

use crate::genetics::{GeneticsEngine, MonkeyDna, TraitCategory};
use crate::models::ForkMonkeyConfig;
use crate::{visualizer, Result};
use colored::Colorize;
use std::env;
use std::path::Path;

// Web interface assets
const WEB_INDEX: &str = include_str!("../../templates/web/index.html");
const WEB_STYLES: &str = include_str!("../../templates/web/styles.css");
const WEB_APP: &str = include_str!("../../templates/web/app.js");

// Sample git hook
const HOOK_POST_COMMIT: &str = include_str!("../../templates/hooks/post-commit");

pub async fn run(name: Option<&str>, force: bool) -> Result<()> {
    let project_root = env::current_dir()?;

    if ForkMonkeyConfig::exists(&project_root) && !force {
        println!("{}", "⚠️  ForkMonkey is already initialized".yellow());
        println!("   Run with --force to reinitialize");
        return Ok(());
    }

    let mut write_web = true;
    if force && project_root.join("web").exists() {
        use dialoguer::Confirm;
        write_web = Confirm::new()
            .with_prompt("Overwrite existing web interface assets?")
            .default(true)
            .interact()?;
    }

    println!("{}", "🐵 Initializing ForkMonkey...".cyan().bold());
    println!();

    let dna = init_project(&project_root, name, write_web)?;

    println!();
    println!("{}", "✅ ForkMonkey initialized!".green().bold());
    println!();
    println!("{}", "📁 Structure:".cyan());
    println!("   .forkmonkey/config.json  - Project configuration");
    println!("   .forkmonkey/monkey.json  - Your monkey's DNA");
    println!("   web/                     - Web interface");
    println!("   hooks/                   - Git hook scripts");
    println!();
    println!("{}", "🧬 Your monkey:".cyan().bold());
    for category in TraitCategory::ALL {
        if let Some(gene) = dna.traits.get(&category) {
            println!("   {:16} {} ({})", category.to_string(), gene.value, gene.rarity);
        }
    }
    println!("   Rarity: {:.1}/100 ({})", dna.rarity_score(), dna.badge().1);
    println!();
    println!("{}", "⏭️  Next Steps:".yellow().bold());
    println!("   1. Meet your monkey:    {}", "forkmonkey start".cyan());
    println!("   2. Install git hooks:   {}", "forkmonkey hooks install".cyan());

    Ok(())
}

/// Create config, founding monkey, web assets, and sample hooks under
/// `project_root`. Returns the generated DNA.
pub fn init_project(
    project_root: &Path,
    name: Option<&str>,
    write_web: bool,
) -> Result<MonkeyDna> {
    // Config doubles as the initialization marker
    let mut config = ForkMonkeyConfig::default();
    if let Some(n) = name {
        config.project_name = n.to_string();
    } else if let Some(dir_name) = project_root.file_name() {
        config.project_name = dir_name.to_string_lossy().to_string();
    }
    config.save(project_root)?;
    println!("   ✓ .forkmonkey/config.json");

    // Founding monkey
    let dna = GeneticsEngine::generate_random();
    dna.save(&ForkMonkeyConfig::monkey_path(project_root))?;
    println!("   ✓ .forkmonkey/monkey.json");

    // Web interface
    let web_dir = project_root.join(&config.web_dir);
    std::fs::create_dir_all(&web_dir)?;
    if write_web {
        std::fs::write(web_dir.join("index.html"), WEB_INDEX)?;
        std::fs::write(web_dir.join("styles.css"), WEB_STYLES)?;
        std::fs::write(web_dir.join("app.js"), WEB_APP)?;
        println!("   ✓ web/ interface assets");
    }

    // First render
    let svg = visualizer::generate_svg(&dna, visualizer::DEFAULT_SIZE, visualizer::DEFAULT_SIZE);
    std::fs::write(web_dir.join("monkey.svg"), svg)?;
    println!("   ✓ web/monkey.svg");

    // Sample hook, left alone if the user already customized it
    let hooks_dir = project_root.join(&config.hooks_dir);
    std::fs::create_dir_all(&hooks_dir)?;
    let post_commit = hooks_dir.join("post-commit");
    if !post_commit.exists() {
        std::fs::write(&post_commit, HOOK_POST_COMMIT)?;
        make_executable(&post_commit)?;
        println!("   ✓ hooks/post-commit");
    }

    Ok(dna)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = std::fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
