//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::Datelike;
use rayon::prelude::*;
use walkdir::WalkDir;

use folio_content::{SectionId, Site};
use folio_view::{ViewState, DEFAULT_TYPING_INTERVAL};

use crate::assets::{AssetPipeline, RuntimeConfig};
use crate::base_path::BasePath;
use crate::templates::{Context, NavItem, ProjectCard, TemplateEngine};

/// Configuration for building the static site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Output directory
    pub output_dir: PathBuf,

    /// Directory of files copied verbatim to the output root (images)
    pub public_dir: PathBuf,

    /// Minify HTML and CSS output
    pub minify: bool,

    /// URL prefix the site is served under
    pub base_path: String,

    /// Document title
    pub title: String,

    /// Delay between characters of the caption animation
    pub typing_interval: Duration,

    /// Copyright year; the current year when unset
    pub year: Option<i32>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            public_dir: PathBuf::from("public"),
            minify: true,
            base_path: String::new(),
            title: "Portafolio".to_string(),
            typing_interval: DEFAULT_TYPING_INTERVAL,
            year: None,
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of HTML pages written
    pub pages: usize,

    /// Number of public files copied
    pub assets: usize,

    /// Project images referenced by the content but absent from the public dir
    pub missing_images: Vec<String>,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read public files: {0}")]
    ReadError(String),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to generate asset: {0}")]
    AssetError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Static site builder.
pub struct StaticBuilder {
    config: BuildConfig,
    base_path: BasePath,
    site: Site,
    templates: TemplateEngine,
}

/// Outputs the build writes itself, relative to the output root.
const GENERATED_FILES: [&str; 4] = ["index.html", "404.html", "assets/main.css", "assets/main.js"];

impl StaticBuilder {
    /// Create a builder for the embedded site content.
    pub fn new(config: BuildConfig) -> Self {
        Self::with_site(config, Site::embedded())
    }

    /// Create a builder for the given content.
    pub fn with_site(config: BuildConfig, site: Site) -> Self {
        let base_path = BasePath::new(&config.base_path);

        Self {
            config,
            base_path,
            site,
            templates: TemplateEngine::new(),
        }
    }

    pub fn base_path(&self) -> &BasePath {
        &self.base_path
    }

    /// View state the exported page starts from.
    pub fn initial_view(&self) -> ViewState {
        ViewState::new(self.site.profile.caption_len())
    }

    /// Build the static site.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        // Public files go first so generated outputs always win.
        let assets = self.copy_public()?;

        tracing::info!("Rendering page under base path {}", self.base_path);

        let index = self.render_index(&self.initial_view())?;
        self.write_page("index.html", &index)?;

        let not_found = self.render_not_found()?;
        self.write_page("404.html", &not_found)?;

        self.generate_assets()?;

        let missing_images = self.missing_images();
        for image in &missing_images {
            tracing::warn!(
                "Project image not found in {}: {}",
                self.config.public_dir.display(),
                image
            );
        }

        let duration = start.elapsed();

        Ok(BuildResult {
            pages: 2,
            assets,
            missing_images,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Render the page for a given view state.
    pub fn render_index(&self, view: &ViewState) -> Result<String, BuildError> {
        self.render("index.html", view)
    }

    /// Render the not-found page.
    pub fn render_not_found(&self) -> Result<String, BuildError> {
        self.render("404.html", &self.initial_view())
    }

    fn render(&self, template: &str, view: &ViewState) -> Result<String, BuildError> {
        let context = self.page_context(view);

        let html = self
            .templates
            .render_page(template, &context)
            .map_err(|e: minijinja::Error| BuildError::TemplateError(e.to_string()))?;

        if self.config.minify {
            Ok(AssetPipeline::minify_html(&html))
        } else {
            Ok(html)
        }
    }

    /// Build the template context from content and view state.
    fn page_context(&self, view: &ViewState) -> Context {
        let profile = self.site.profile;

        let nav = SectionId::ALL
            .iter()
            .map(|&section| NavItem {
                anchor: section.anchor(),
                label: section.label(),
                active: view.is_active(section),
            })
            .collect();

        let projects = self
            .site
            .projects
            .iter()
            .map(|p| ProjectCard {
                title: p.title,
                description: p.description,
                technologies: p.technologies,
                image_url: self.base_path.url(p.image),
                link: p.link,
                repo: p.repo,
            })
            .collect();

        Context {
            title: self.config.title.clone(),
            home_url: self.base_path.home(),
            css_url: self.base_path.url("assets/main.css"),
            js_url: self.base_path.url("assets/main.js"),
            profile,
            skills: self.site.skills,
            projects,
            nav,
            menu_open: view.menu_open(),
            typed_text: view.typed_text(profile.caption).to_string(),
            year: self
                .config
                .year
                .unwrap_or_else(|| chrono::Local::now().year()),
        }
    }

    fn write_page(&self, name: &str, html: &str) -> Result<(), BuildError> {
        fs::write(self.config.output_dir.join(name), html)
            .map_err(|e| BuildError::WriteError(e.to_string()))
    }

    /// Generate the stylesheet and the client runtime.
    fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or_else(|e| {
                tracing::warn!("Keeping unminified CSS: {}", e);
                css
            })
        } else {
            css
        };
        fs::write(assets_dir.join("main.css"), css)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let runtime = RuntimeConfig::new(self.site.profile.caption, self.config.typing_interval);
        let js = AssetPipeline::generate_js(&runtime)
            .map_err(|e| BuildError::AssetError(e.to_string()))?;
        fs::write(assets_dir.join("main.js"), js)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Copy the public directory into the output root, byte for byte.
    fn copy_public(&self) -> Result<usize, BuildError> {
        let public_dir = &self.config.public_dir;

        if !public_dir.exists() {
            tracing::warn!("Public directory not found: {}", public_dir.display());
            return Ok(0);
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(public_dir).follow_links(true) {
            let entry = entry.map_err(|e| BuildError::ReadError(e.to_string()))?;
            let path = entry.path();

            if !path.is_file() || path.starts_with(&self.config.output_dir) {
                continue;
            }

            let relative = path.strip_prefix(public_dir).unwrap_or(path).to_path_buf();
            if GENERATED_FILES.iter().any(|name| relative == Path::new(name)) {
                tracing::warn!(
                    "{} is replaced by the generated file",
                    path.display()
                );
            }
            files.push((path.to_path_buf(), relative));
        }

        files
            .par_iter()
            .map(|(source, relative)| self.copy_file(source, relative))
            .collect::<Result<Vec<()>, BuildError>>()?;

        tracing::info!(
            "Copied {} files from {}",
            files.len(),
            public_dir.display()
        );

        Ok(files.len())
    }

    fn copy_file(&self, source: &Path, relative: &Path) -> Result<(), BuildError> {
        let target = self.config.output_dir.join(relative);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
        }

        fs::copy(source, &target).map_err(|e| {
            BuildError::WriteError(format!("{} -> {}: {}", source.display(), target.display(), e))
        })?;

        tracing::debug!("Copied {}", relative.display());
        Ok(())
    }

    /// Project images that the public directory does not provide.
    fn missing_images(&self) -> Vec<String> {
        self.site
            .image_paths()
            .filter(|image| {
                !self
                    .config
                    .public_dir
                    .join(image.trim_start_matches('/'))
                    .is_file()
            })
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn config(root: &Path) -> BuildConfig {
        BuildConfig {
            output_dir: root.join("dist"),
            public_dir: root.join("public"),
            year: Some(2025),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn builds_site() {
        let temp = tempdir().unwrap();
        let public = temp.path().join("public");
        fs::create_dir_all(&public).unwrap();
        fs::write(public.join("pintuco.png"), [0x89, b'P', b'N', b'G', 0, 1, 2]).unwrap();

        let result = StaticBuilder::new(config(temp.path())).build().await.unwrap();

        let out = temp.path().join("dist");
        assert_eq!(result.pages, 2);
        assert_eq!(result.assets, 1);
        assert!(out.join("index.html").exists());
        assert!(out.join("404.html").exists());
        assert!(out.join("assets/main.css").exists());
        assert!(out.join("assets/main.js").exists());
        assert_eq!(
            fs::read(out.join("pintuco.png")).unwrap(),
            vec![0x89, b'P', b'N', b'G', 0, 1, 2]
        );
    }

    #[tokio::test]
    async fn reports_missing_images() {
        let temp = tempdir().unwrap();
        let public = temp.path().join("public");
        fs::create_dir_all(&public).unwrap();
        fs::write(public.join("pintuco.png"), b"png").unwrap();
        fs::write(public.join("recetario.png"), b"png").unwrap();

        let result = StaticBuilder::new(config(temp.path())).build().await.unwrap();

        assert_eq!(
            result.missing_images,
            vec!["/pintucoEcuador.png", "/bolivariano.png", "/grandeza.png"]
        );
    }

    #[tokio::test]
    async fn builds_without_public_dir() {
        let temp = tempdir().unwrap();

        let result = StaticBuilder::new(config(temp.path())).build().await.unwrap();

        assert_eq!(result.assets, 0);
        assert_eq!(result.missing_images.len(), 5);
        assert!(temp.path().join("dist/index.html").exists());
    }

    #[tokio::test]
    async fn copies_nested_public_files() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("public/img/icons");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("favicon.svg"), "<svg/>").unwrap();

        let result = StaticBuilder::new(config(temp.path())).build().await.unwrap();

        assert_eq!(result.assets, 1);
        assert_eq!(
            fs::read_to_string(temp.path().join("dist/img/icons/favicon.svg")).unwrap(),
            "<svg/>"
        );
    }

    #[tokio::test]
    async fn generated_files_win_over_public_files() {
        let temp = tempdir().unwrap();
        let public = temp.path().join("public");
        fs::create_dir_all(public.join("assets")).unwrap();
        fs::write(public.join("index.html"), "STALE").unwrap();
        fs::write(public.join("404.html"), "STALE").unwrap();
        fs::write(public.join("assets/main.css"), "STALE").unwrap();
        fs::write(public.join("assets/main.js"), "STALE").unwrap();

        StaticBuilder::new(config(temp.path())).build().await.unwrap();

        let out = temp.path().join("dist");
        let index = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(!index.contains("STALE"));
        assert!(index.contains("id=\"proyectos\""));
        for generated in ["404.html", "assets/main.css", "assets/main.js"] {
            let content = fs::read_to_string(out.join(generated)).unwrap();
            assert_ne!(content, "STALE", "{} was overwritten", generated);
        }
        assert!(fs::read_to_string(out.join("assets/main.js"))
            .unwrap()
            .contains("Desarrollador Web"));
    }

    #[test]
    fn prefixes_urls_with_base_path() {
        let temp = tempdir().unwrap();
        let builder = StaticBuilder::new(BuildConfig {
            base_path: "/harleyrave.github.io".to_string(),
            ..config(temp.path())
        });

        let html = builder.render_index(&builder.initial_view()).unwrap();

        assert!(html.contains(r#"src="/harleyrave.github.io/pintuco.png""#));
        assert!(html.contains(r#"href="/harleyrave.github.io/assets/main.css""#));
        assert!(html.contains(r#"src="/harleyrave.github.io/assets/main.js""#));
        assert!(html.contains(r#"href="/harleyrave.github.io/" class="brand""#));
    }

    #[test]
    fn renders_one_card_per_entry_in_order() {
        let temp = tempdir().unwrap();
        let builder = StaticBuilder::new(config(temp.path()));
        let site = Site::embedded();

        let html = builder.render_index(&builder.initial_view()).unwrap();

        assert_eq!(html.matches(r#"class="skill-card""#).count(), 6);
        assert_eq!(html.matches(r#"class="project-card""#).count(), 5);

        let skill_positions: Vec<_> = site
            .skills
            .iter()
            .map(|s| html.find(&format!("<h3>{}</h3>", s.name)).unwrap())
            .collect();
        assert!(skill_positions.windows(2).all(|w| w[0] < w[1]));

        let project_positions: Vec<_> = site
            .projects
            .iter()
            .map(|p| html.find(&format!("<h3>{}</h3>", p.title)).unwrap())
            .collect();
        assert!(project_positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn initial_page_matches_mount_state() {
        let temp = tempdir().unwrap();
        let builder = StaticBuilder::new(config(temp.path()));

        let html = builder.render_index(&builder.initial_view()).unwrap();

        assert!(html.contains(r#"class="nav-link active" data-nav="inicio""#));
        assert_eq!(html.matches("nav-link active").count(), 1);
        assert!(html.contains(r#"<div class="mobile-menu" hidden>"#));
        assert!(html.contains(r#"<span class="typed-text"></span><span class="cursor">|</span>"#));
    }

    #[test]
    fn renders_any_view_state() {
        let temp = tempdir().unwrap();
        let builder = StaticBuilder::new(config(temp.path()));
        let mut view = builder.initial_view();
        for _ in 0..3 {
            view.advance_typing();
        }
        view.activate(SectionId::Proyectos);
        view.toggle_menu();

        let html = builder.render_index(&view).unwrap();

        assert!(html.contains(r#"class="nav-link active" data-nav="proyectos""#));
        assert!(html.contains(r#"<div class="mobile-menu">"#));
        assert!(html.contains(r#"<span class="typed-text">Des</span>"#));
    }

    #[test]
    fn footer_uses_configured_year() {
        let temp = tempdir().unwrap();
        let builder = StaticBuilder::new(BuildConfig {
            year: Some(2024),
            ..config(temp.path())
        });

        let html = builder.render_index(&builder.initial_view()).unwrap();

        assert!(html.contains("&copy; 2024 Davidson Rave."));
    }

    #[test]
    fn minify_toggle_controls_whitespace() {
        let temp = tempdir().unwrap();

        let minified = StaticBuilder::new(config(temp.path()))
            .render_index(&ViewState::new(17))
            .unwrap();
        let pretty = StaticBuilder::new(BuildConfig {
            minify: false,
            ..config(temp.path())
        })
        .render_index(&ViewState::new(17))
        .unwrap();

        assert!(minified.len() < pretty.len());
        assert!(!minified.contains(">\n"));
        assert!(pretty.contains(">\n"));
    }

    #[tokio::test]
    async fn runtime_script_carries_caption() {
        let temp = tempdir().unwrap();
        let builder = StaticBuilder::new(BuildConfig {
            typing_interval: Duration::from_millis(80),
            ..config(temp.path())
        });

        builder.build().await.unwrap();

        let js = fs::read_to_string(temp.path().join("dist/assets/main.js")).unwrap();
        assert!(js.contains(r#""caption":"Desarrollador Web""#));
        assert!(js.contains(r#""intervalMs":80"#));
    }
}
