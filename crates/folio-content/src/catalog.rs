//! Skill and project listings.

use serde::Serialize;

/// A technology card in the skills section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    /// Technology name
    pub name: &'static str,
    /// Glyph shown in the card badge
    pub icon: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Badge gradient token, resolved by the stylesheet
    pub color: &'static str,
}

/// A project card in the projects section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Technologies, in display order
    pub technologies: &'static [&'static str],
    /// Screenshot path relative to the site root, e.g. `/pintuco.png`
    pub image: &'static str,
    /// Live site
    pub link: &'static str,
    /// Source repository, when public
    pub repo: Option<&'static str>,
}

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "WordPress",
        icon: "🔥",
        description: "Desarrollo de temas y plugins personalizados",
        color: "blue",
    },
    Skill {
        name: "PHP",
        icon: "🐘",
        description: "Backend robusto y APIs escalables",
        color: "purple",
    },
    Skill {
        name: "React",
        icon: "⚛️",
        description: "Interfaces dinámicas y componentes reutilizables",
        color: "cyan",
    },
    Skill {
        name: "Next.js",
        icon: "▲",
        description: "Apps full-stack con SSR y optimización SEO",
        color: "graphite",
    },
    Skill {
        name: "TypeScript",
        icon: "📘",
        description: "Código más seguro y mantenible",
        color: "navy",
    },
    Skill {
        name: "JavaScript",
        icon: "⚡",
        description: "Lógica interactiva y experiencias modernas",
        color: "yellow",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Página web Pintuco Colombia",
        description: "Desarrollo de la página web de Pintuco Colombia, con un enfoque en la experiencia del usuario en bloques de Gutenberg y la optimización SEO.",
        technologies: &["WordPress", "PHP", "React", "MySQL"],
        image: "/pintuco.png",
        link: "https://www.pintuco.com.co/",
        repo: None,
    },
    Project {
        title: "Página web Pintuco Ecuador",
        description: "Desarrollo de la página web de Pintuco Ecuador, con un enfoque en la experiencia del usuario en bloques de Gutenberg y la optimización SEO.",
        technologies: &["WordPress", "PHP", "React", "MySQL"],
        image: "/pintucoEcuador.png",
        link: "https://www.pintuco.com.ec/",
        repo: None,
    },
    Project {
        title: "Página web bolivariano",
        description: "Trabajo colobativo en el desarrollo de la pagina web fronted de transportes y logistica Bolivariano, con un enfoque en la experiencia del usuario  para la compra de tiquetes ",
        technologies: &["Next ts", "React", "MySQL"],
        image: "/bolivariano.png",
        link: "https://bolivariano-qa.plm.com.co/",
        repo: None,
    },
    Project {
        title: "Grandeza Run Fest",
        description: "Trabajo colaborativo para el evento Grandeza Run Fest, con landing page y sistema de registro.",
        technologies: &["React", "TypeScript", "Tailwind CSS"],
        image: "/grandeza.png",
        link: "https://grandeza.atlnacional.com.co/",
        repo: None,
    },
    Project {
        title: "Recetario",
        description: "Página web de recetas con Next.js, TypeScript y Tailwind CSS, optimizada para SEO.",
        technologies: &["Next.js", "TypeScript"],
        image: "/recetario.png",
        link: "https://come-cerdo-recetas-qa.plm.com.co/",
        repo: None,
    },
];
