//! Preview server command.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::Router;
use folio_static::BasePath;
use tower_http::services::ServeDir;

use crate::config::ConfigFile;

/// Run the serve command.
///
/// Files are mounted under the configured base path so links in the
/// exported page resolve the same way they will once deployed.
pub async fn run(
    config_path: &Path,
    port: u16,
    dir: Option<PathBuf>,
    base_path: Option<String>,
) -> Result<()> {
    let file_config = ConfigFile::load(config_path)?;
    let dir = dir.unwrap_or_else(|| PathBuf::from(&file_config.site.output));

    if !dir.exists() {
        anyhow::bail!(
            "Directory not found: {}. Run 'folio build' first.",
            dir.display()
        );
    }

    let addr: SocketAddr = format!("127.0.0.1:{}", port)
        .parse()
        .context("Invalid address")?;

    let base_path = BasePath::new(&file_config.base_path(base_path));
    let app = router(&dir, &base_path);
    let url = format!("http://{}{}", addr, base_path.home());

    tracing::info!("Serving {} at {}", dir.display(), url);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    // Open browser
    let _ = open::that(&url);

    axum::serve(listener, app).await?;

    Ok(())
}

fn router(dir: &Path, base_path: &BasePath) -> Router {
    let files = ServeDir::new(dir);

    if base_path.is_root() {
        Router::new().fallback_service(files)
    } else {
        Router::new().nest_service(base_path.as_str(), files)
    }
}
