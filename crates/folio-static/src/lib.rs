//! Static export of the portfolio page.
//!
//! Renders the page from a view-state snapshot and writes a self-contained
//! site (HTML, stylesheet, client runtime and public files) served under a
//! configurable base path.

pub mod assets;
pub mod base_path;
pub mod builder;
pub mod templates;

pub use base_path::BasePath;
pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder};
