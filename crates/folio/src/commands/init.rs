//! Scaffold a portfolio project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing portfolio project...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    let public_dir = config_path
        .parent()
        .unwrap_or(Path::new(""))
        .join("public");
    if !public_dir.exists() {
        fs::create_dir_all(&public_dir).context("Failed to create public directory")?;
        tracing::info!("Created {}/", public_dir.display());
    }

    tracing::info!("Place project screenshots (pintuco.png, ...) in public/.");
    tracing::info!("Run 'folio build' to export the site.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Portfolio configuration

[site]
# Document title
title = "Portafolio"

# URL prefix the site is deployed under ("" for the domain root)
base_path = "/harleyrave.github.io"

# Output directory for the exported site
output = "dist"

# Files copied as-is into the output (project screenshots)
public_dir = "public"

[build]
# Minify HTML and CSS
minify = true

[typing]
# Milliseconds between characters of the caption animation
interval_ms = 100
"#;
