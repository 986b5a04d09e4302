//! `forkmonkey hooks` - manage git hook symlinks.

use crate::hooks::{HookInstaller, HookState};
use crate::models::ForkMonkeyConfig;
use crate::Result;
use clap::Subcommand;
use colored::Colorize;
use std::env;

#[derive(Subcommand)]
pub enum HooksCommands {
    /// Symlink hook scripts into the repository's hooks directory
    Install,

    /// Remove hook symlinks installed by ForkMonkey
    Uninstall,

    /// Show each hook script and whether it is installed
    List,
}

pub fn run(cmd: HooksCommands) -> Result<()> {
    let project_root = env::current_dir()?;
    let config = ForkMonkeyConfig::load(&project_root)?;
    let source_dir = project_root.join(&config.hooks_dir);

    let installer = HookInstaller::discover(&project_root, &source_dir)?;

    match cmd {
        HooksCommands::Install => {
            let installed = installer.install()?;
            if installed.is_empty() {
                println!("{}", "⚠ No hook scripts found to install".yellow());
            } else {
                for name in &installed {
                    println!("   ✓ {}", name);
                }
                println!(
                    "{}",
                    format!("✅ Installed {} hook(s) into {}", installed.len(), installer.hooks_dir().display())
                        .green()
                );
            }
        }

        HooksCommands::Uninstall => {
            let removed = installer.uninstall()?;
            if removed.is_empty() {
                println!("{}", "⚠ No ForkMonkey hooks were installed".yellow());
            } else {
                for name in &removed {
                    println!("   ✓ {}", name);
                }
                println!("{}", format!("✅ Removed {} hook(s)", removed.len()).green());
            }
        }

        HooksCommands::List => {
            println!("\n{}", "Hooks".bold());
            println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
            for status in installer.status()? {
                let state = match status.state {
                    HookState::Installed => "installed".green(),
                    HookState::NotInstalled => "not installed".yellow(),
                    HookState::Conflict => "conflict".red(),
                };
                println!("  {} {:16} {}", "●".cyan(), status.name, state);
            }
            println!();
        }
    }

    Ok(())
}
