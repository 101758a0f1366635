//! Static site build command.

use std::path::Path;

use anyhow::{Context, Result};
use folio_static::StaticBuilder;

use crate::config::{BuildOverrides, ConfigFile};

/// Run the build command.
pub async fn run(config_path: &Path, overrides: BuildOverrides) -> Result<()> {
    tracing::info!("Building static site...");

    let file_config = ConfigFile::load(config_path)?;
    let config = file_config.build_config(overrides);

    let result = StaticBuilder::new(config)
        .build()
        .await
        .context("Build failed")?;

    tracing::info!(
        "Built {} pages and copied {} public files in {}ms",
        result.pages,
        result.assets,
        result.duration_ms
    );

    if !result.missing_images.is_empty() {
        tracing::warn!(
            "{} project images are missing and will show as broken",
            result.missing_images.len()
        );
    }

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
