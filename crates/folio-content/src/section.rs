//! Page section identifiers.

use std::fmt;

use serde::Serialize;

/// One of the five fixed page regions.
///
/// Navigation only ever targets one of these, so there is no way to ask the
/// page to scroll to an anchor that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    /// Hero
    #[default]
    Inicio,
    /// About
    SobreMi,
    /// Skills
    Habilidades,
    /// Projects
    Proyectos,
    /// Contact
    Contacto,
}

impl SectionId {
    /// All sections in display order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Inicio,
        SectionId::SobreMi,
        SectionId::Habilidades,
        SectionId::Proyectos,
        SectionId::Contacto,
    ];

    /// Element id of the section's anchor in the rendered page.
    pub const fn anchor(self) -> &'static str {
        match self {
            SectionId::Inicio => "inicio",
            SectionId::SobreMi => "sobre-mi",
            SectionId::Habilidades => "habilidades",
            SectionId::Proyectos => "proyectos",
            SectionId::Contacto => "contacto",
        }
    }

    /// Navigation label: the anchor with its first dash turned into a space.
    pub fn label(self) -> String {
        self.anchor().replacen('-', " ", 1)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}
