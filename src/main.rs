use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use forkmonkey::Result;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "forkmonkey")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Procedurally generated repo monkeys", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize ForkMonkey in the current directory
    Init {
        /// Project name
        #[arg(short, long)]
        name: Option<String>,

        /// Reinitialize even when a monkey already exists
        #[arg(short, long)]
        force: bool,
    },

    /// Initialize if needed, then start the web interface
    Start {
        /// HTTP server port (default: from config, 8000)
        #[arg(long)]
        port: Option<u16>,

        /// Don't open the browser
        #[arg(long)]
        no_browser: bool,
    },

    /// Start the web interface for an existing project
    Serve {
        /// HTTP server port (default: from config, 8000)
        #[arg(long)]
        port: Option<u16>,

        /// Don't open the browser
        #[arg(long)]
        no_browser: bool,
    },

    /// Re-render the monkey SVG from stored DNA
    Render {
        /// Output path (default: web/monkey.svg)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Square render size in pixels
        #[arg(short, long)]
        size: Option<u32>,
    },

    /// Show the current monkey
    Status {
        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Git hook management
    #[command(subcommand)]
    Hooks(forkmonkey::cli::hooks::HooksCommands),

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    // Request logging, off unless RUST_LOG enables it
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create tokio runtime");

    if let Err(e) = runtime.block_on(run_async(cli)) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

async fn run_async(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { name, force } => {
            forkmonkey::cli::init::run(name.as_deref(), force).await?;
        }

        Commands::Start { port, no_browser } => {
            forkmonkey::cli::start::run(port, no_browser).await?;
        }

        Commands::Serve { port, no_browser } => {
            forkmonkey::cli::serve::run(port, no_browser).await?;
        }

        Commands::Render { output, size } => {
            forkmonkey::cli::render::run(output, size).await?;
        }

        Commands::Status { json } => {
            forkmonkey::cli::status::run(json).await?;
        }

        Commands::Hooks(cmd) => {
            forkmonkey::cli::hooks::run(cmd)?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "forkmonkey", &mut io::stdout());
        }
    }

    Ok(())
}
