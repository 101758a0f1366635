//! URL prefix the exported site is served under.

use std::fmt;

/// A normalised base path: empty for the domain root, otherwise a leading
/// slash and no trailing slash (`/harleyrave.github.io`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BasePath(String);

impl BasePath {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_matches('/');
        if trimmed.is_empty() {
            Self(String::new())
        } else {
            Self(format!("/{}", trimmed))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// URL of the site root, always ending in `/`.
    pub fn home(&self) -> String {
        format!("{}/", self.0)
    }

    /// URL for a file under the site root. The path may or may not start
    /// with `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("/")
        } else {
            f.write_str(&self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalises_root() {
        for raw in ["", "/", "  ", "//"] {
            let base = BasePath::new(raw);
            assert!(base.is_root(), "{:?} should be root", raw);
            assert_eq!(base.home(), "/");
            assert_eq!(base.url("/pintuco.png"), "/pintuco.png");
        }
    }

    #[test]
    fn adds_leading_and_strips_trailing_slash() {
        assert_eq!(
            BasePath::new("harleyrave.github.io/").as_str(),
            "/harleyrave.github.io"
        );
        assert_eq!(
            BasePath::new("/harleyrave.github.io").as_str(),
            "/harleyrave.github.io"
        );
    }

    #[test]
    fn joins_asset_urls() {
        let base = BasePath::new("/harleyrave.github.io");

        assert_eq!(
            base.url("/pintuco.png"),
            "/harleyrave.github.io/pintuco.png"
        );
        assert_eq!(
            base.url("assets/main.css"),
            "/harleyrave.github.io/assets/main.css"
        );
        assert_eq!(base.home(), "/harleyrave.github.io/");
    }

    #[test]
    fn displays_root_as_slash() {
        assert_eq!(BasePath::new("").to_string(), "/");
        assert_eq!(BasePath::new("docs").to_string(), "/docs");
    }
}
