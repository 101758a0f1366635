//! Owner profile: hero copy, about text and contact links.

use serde::Serialize;

/// An external profile link and the handle shown for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileLink {
    pub url: &'static str,
    pub handle: &'static str,
}

/// A tag chip in the about section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub label: &'static str,
    /// Chip tint token
    pub tone: &'static str,
}

/// Everything about the page owner that is not a skill or a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    /// Site brand shown in the navigation bar
    pub brand: &'static str,
    pub name: &'static str,
    /// Text revealed by the typing animation
    pub caption: &'static str,
    /// Hero paragraph under the caption
    pub tagline: &'static str,
    pub avatar: &'static str,
    pub about: &'static [&'static str],
    pub about_glyph: &'static str,
    pub highlights: &'static [Highlight],
    pub email: &'static str,
    pub github: ProfileLink,
    pub linkedin: ProfileLink,
    pub contact_heading: &'static str,
    pub contact_blurb: &'static str,
    /// Footer text after the copyright notice
    pub credit: &'static str,
}

impl Profile {
    /// `mailto:` link for the owner's email.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Caption length in characters, the number of typing ticks needed.
    pub fn caption_len(&self) -> usize {
        self.caption.chars().count()
    }
}

pub const PROFILE: Profile = Profile {
    brand: "Portafolio",
    name: "Davidson Rave",
    caption: "Desarrollador Web",
    tagline: "Soy un experto en crear experiencias web excepcionales utilizando tecnologías modernas. Transformo ideas en soluciones digitales innovadoras.",
    avatar: "👨‍💻",
    about: &[
        "Soy un desarrollador entusiasta con más de 2 años de experiencia en la creación de soluciones web innovadoras. Me especializo en el desarrollo Web, utilizando tecnologías modernas como React, Next.js, PHP y WordPress.",
        "Mi enfoque se centra en crear experiencias de usuario excepcionales, código limpio y soluciones escalables que impulsen el crecimiento de los negocios.",
    ],
    about_glyph: "💻",
    highlights: &[
        Highlight {
            label: "Desarrollo Web",
            tone: "purple",
        },
        Highlight {
            label: "Optimización SEO Técnico",
            tone: "green",
        },
        Highlight {
            label: "Experiencia de Usuario",
            tone: "blue",
        },
    ],
    email: "davidsonrave1@gmail.com",
    github: ProfileLink {
        url: "https://github.com/davidsonrave/",
        handle: "davidsonrave",
    },
    linkedin: ProfileLink {
        url: "https://www.linkedin.com/in/davidson-rave-126b44191/",
        handle: "davidson-rave-126b44191",
    },
    contact_heading: "¿Trabajamos Juntos?",
    contact_blurb: "Estoy disponible para asumir proyectos freelance y explorar oportunidades de colaboración. ¡Hagamos que tu idea cobre vida!",
    credit: "Desarrollado con ❤️ usando Rust",
};
