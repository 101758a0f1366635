//! The content bundle handed to the renderer.

use serde::Serialize;

use crate::catalog::{Project, Skill, PROJECTS, SKILLS};
use crate::profile::{Profile, PROFILE};

/// Profile plus listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Site {
    pub profile: Profile,
    pub skills: &'static [Skill],
    pub projects: &'static [Project],
}

impl Site {
    /// The content compiled into this binary.
    pub const fn embedded() -> Self {
        Self {
            profile: PROFILE,
            skills: SKILLS,
            projects: PROJECTS,
        }
    }

    /// Root-relative image paths referenced by the projects, in order.
    pub fn image_paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.projects.iter().map(|p| p.image)
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_site_has_fixed_listings() {
        let site = Site::embedded();

        assert_eq!(site.skills.len(), 6);
        assert_eq!(site.projects.len(), 5);
        assert_eq!(site.profile.name, "Davidson Rave");
    }

    #[test]
    fn lists_project_images() {
        let images: Vec<_> = Site::default().image_paths().collect();

        assert_eq!(images.len(), 5);
        assert_eq!(images[0], "/pintuco.png");
    }
}
