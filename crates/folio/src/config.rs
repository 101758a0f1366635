//! Configuration file (folio.toml).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use folio_static::BuildConfig;
use serde::Deserialize;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ConfigFile {
    pub site: SiteConfig,
    pub build: BuildSettings,
    pub typing: TypingConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    /// URL prefix the site is deployed under
    pub base_path: String,
    pub output: String,
    /// Files copied verbatim into the output (images)
    pub public_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portafolio".to_string(),
            base_path: String::new(),
            output: "dist".to_string(),
            public_dir: "public".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct BuildSettings {
    pub minify: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self { minify: true }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct TypingConfig {
    pub interval_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self { interval_ms: 100 }
    }
}

/// Overrides taken from the command line.
#[derive(Debug, Default)]
pub struct BuildOverrides {
    pub output: Option<PathBuf>,
    pub minify: Option<bool>,
    pub base_path: Option<String>,
}

/// Errors that can occur when loading the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    #[error("typing.interval_ms must be greater than zero")]
    ZeroInterval,
}

impl ConfigFile {
    /// Load configuration from `path` if it exists.
    /// Returns an error if the file exists but is malformed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })?;

        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: "config".to_string(),
            source,
        })?;

        if config.typing.interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        Ok(config)
    }

    /// Base path from `--base-path`/`FOLIO_BASE_PATH`, falling back to
    /// `site.base_path`. Shared by `build` and `serve` so the preview mounts
    /// the export where its URLs point.
    pub fn base_path(&self, cli_value: Option<String>) -> String {
        cli_value.unwrap_or_else(|| self.site.base_path.clone())
    }

    /// Builder configuration with command-line overrides applied.
    pub fn build_config(&self, overrides: BuildOverrides) -> BuildConfig {
        BuildConfig {
            output_dir: overrides
                .output
                .unwrap_or_else(|| PathBuf::from(&self.site.output)),
            public_dir: PathBuf::from(&self.site.public_dir),
            minify: overrides.minify.unwrap_or(self.build.minify),
            base_path: self.base_path(overrides.base_path),
            title: self.site.title.clone(),
            typing_interval: Duration::from_millis(self.typing.interval_ms),
            year: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_full_config() {
        let config = ConfigFile::parse(
            r#"
[site]
title = "Mi Portafolio"
base_path = "/harleyrave.github.io"
output = "out"
public_dir = "static"

[build]
minify = false

[typing]
interval_ms = 80
"#,
        )
        .unwrap();

        assert_eq!(config.site.title, "Mi Portafolio");
        assert_eq!(config.site.base_path, "/harleyrave.github.io");
        assert_eq!(config.site.output, "out");
        assert_eq!(config.site.public_dir, "static");
        assert!(!config.build.minify);
        assert_eq!(config.typing.interval_ms, 80);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigFile::parse("[site]\nbase_path = \"/blog\"\n").unwrap();

        assert_eq!(config.site.base_path, "/blog");
        assert_eq!(config.site.output, "dist");
        assert_eq!(config.site.public_dir, "public");
        assert!(config.build.minify);
        assert_eq!(config.typing.interval_ms, 100);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();

        let config = ConfigFile::load(&temp.path().join("folio.toml")).unwrap();

        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(&path, "[site\ntitle = ").unwrap();

        let err = ConfigFile::load(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("folio.toml"));
    }

    #[test]
    fn rejects_zero_interval() {
        let err = ConfigFile::parse("[typing]\ninterval_ms = 0\n").unwrap_err();

        assert!(matches!(err, ConfigError::ZeroInterval));
    }

    #[test]
    fn overrides_take_precedence() {
        let config = ConfigFile::parse("[site]\nbase_path = \"/a\"\n").unwrap();

        let build = config.build_config(BuildOverrides {
            output: Some(PathBuf::from("public_html")),
            minify: Some(false),
            base_path: Some("/b".to_string()),
        });

        assert_eq!(build.output_dir, PathBuf::from("public_html"));
        assert!(!build.minify);
        assert_eq!(build.base_path, "/b");
        assert_eq!(build.typing_interval, Duration::from_millis(100));
    }

    #[test]
    fn base_path_override_replaces_file_value() {
        let config = ConfigFile::parse("[site]\nbase_path = \"/a\"\n").unwrap();

        assert_eq!(config.base_path(None), "/a");
        assert_eq!(
            config.base_path(Some("/harleyrave.github.io".to_string())),
            "/harleyrave.github.io"
        );
        assert_eq!(ConfigFile::default().base_path(None), "");
    }

    #[test]
    fn no_overrides_uses_file_values() {
        let config = ConfigFile::default();

        let build = config.build_config(BuildOverrides::default());

        assert_eq!(build.output_dir, PathBuf::from("dist"));
        assert_eq!(build.public_dir, PathBuf::from("public"));
        assert!(build.minify);
        assert_eq!(build.base_path, "");
        assert_eq!(build.title, "Portafolio");
    }
}
