//! Folio CLI - build and preview the statically exported portfolio site.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

use config::BuildOverrides;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Build and preview the statically exported portfolio site")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to folio.toml config file
    #[arg(short, long, default_value = "folio.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config and create the public directory
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        yes: bool,
    },

    /// Export the static site
    Build {
        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip minification
        #[arg(long)]
        no_minify: bool,

        /// URL prefix the site is served under
        #[arg(long, env = "FOLIO_BASE_PATH")]
        base_path: Option<String>,
    },

    /// Preview the exported site
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// Directory to serve (defaults to config or "dist")
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// URL prefix to mount the site under
        #[arg(long, env = "FOLIO_BASE_PATH")]
        base_path: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::Build {
            output,
            no_minify,
            base_path,
        } => {
            let overrides = BuildOverrides {
                output,
                minify: if no_minify { Some(false) } else { None },
                base_path,
            };
            commands::build::run(&cli.config, overrides).await?;
        }
        Commands::Serve {
            port,
            dir,
            base_path,
        } => {
            commands::serve::run(&cli.config, port, dir, base_path).await?;
        }
    }

    Ok(())
}
