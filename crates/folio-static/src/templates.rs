//! Template engine for rendering the portfolio page.

use folio_content::{Profile, Skill};
use minijinja::{context, Environment, Value};

/// A section button in the navigation bar.
#[derive(Debug, Clone, serde::Serialize)]
pub struct NavItem {
    /// Section anchor id
    pub anchor: &'static str,
    /// Display label
    pub label: String,
    /// Whether this is the active section
    pub active: bool,
}

/// A project card with its image resolved against the base path.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProjectCard {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub image_url: String,
    pub link: &'static str,
    pub repo: Option<&'static str>,
}

/// Context for rendering a page template.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Context {
    /// Document title
    pub title: String,
    /// Site root URL, always ending in `/`
    pub home_url: String,
    pub css_url: String,
    pub js_url: String,
    pub profile: Profile,
    pub skills: &'static [Skill],
    pub projects: Vec<ProjectCard>,
    pub nav: Vec<NavItem>,
    pub menu_open: bool,
    /// Caption prefix shown before the client runtime takes over
    pub typed_text: String,
    /// Copyright year
    pub year: i32,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.add_filter("url", url_filter);

        for (name, source) in TEMPLATES {
            env.add_template(name, source)
                .unwrap_or_else(|e| panic!("built-in template {} is invalid: {}", name, e));
        }

        Self { env }
    }

    /// Render a page using the specified template.
    pub fn render_page(
        &self,
        template: &str,
        context: &Context,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template)?;

        tmpl.render(context! {
            title => &context.title,
            home_url => &context.home_url,
            css_url => &context.css_url,
            js_url => &context.js_url,
            profile => &context.profile,
            skills => &context.skills,
            projects => &context.projects,
            nav => &context.nav,
            menu_open => context.menu_open,
            typed_text => &context.typed_text,
            year => context.year,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape a URL for a double-quoted attribute.
///
/// The default HTML escaping also rewrites `/`, which is valid but makes
/// every link unreadable in the exported source.
fn url_filter(value: String) -> Value {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    Value::from_safe_string(out)
}

const TEMPLATES: [(&str, &str); 5] = [
    ("base.html", BASE_TEMPLATE),
    ("nav.html", NAV_TEMPLATE),
    ("sections.html", SECTIONS_TEMPLATE),
    ("index.html", INDEX_TEMPLATE),
    ("404.html", NOT_FOUND_TEMPLATE),
];

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta name="description" content="{{ profile.name }} - {{ profile.caption }}">
  <title>{{ title }}</title>
  <link rel="stylesheet" href="{{ css_url | url }}">
</head>
<body>
  <div class="page">
    {% block content %}{% endblock %}
    <footer class="footer">
      <p>&copy; {{ year }} {{ profile.name }}. {{ profile.credit }}</p>
    </footer>
  </div>
  {% block scripts %}{% endblock %}
</body>
</html>"##;

const NAV_TEMPLATE: &str = r##"<nav class="navbar">
  <div class="navbar-inner">
    <a href="{{ home_url | url }}" class="brand">{{ profile.brand }}</a>
    <div class="nav-links">
    {% for item in nav %}
      <button type="button" class="nav-link{% if item.active %} active{% endif %}" data-nav="{{ item.anchor }}">{{ item.label }}</button>
    {% endfor %}
    </div>
    <button type="button" class="menu-btn" aria-label="Toggle menu" aria-expanded="{% if menu_open %}true{% else %}false{% endif %}"><i class="icon icon-menu" aria-hidden="true"></i></button>
  </div>
  <div class="mobile-menu"{% if not menu_open %} hidden{% endif %}>
  {% for item in nav %}
    <button type="button" class="mobile-link" data-nav="{{ item.anchor }}">{{ item.label }}</button>
  {% endfor %}
  </div>
</nav>"##;

const SECTIONS_TEMPLATE: &str = r##"<section id="inicio" class="hero">
  <div class="hero-inner">
    <div class="avatar">{{ profile.avatar }}</div>
    <h1 class="hero-name gradient-text">{{ profile.name }}</h1>
    <h2 class="hero-caption"><span class="typed-text">{{ typed_text }}</span><span class="cursor">|</span></h2>
    <p class="hero-tagline">{{ profile.tagline }}</p>
    <div class="hero-actions">
      <button type="button" class="btn btn-primary" data-nav="proyectos">Ver Proyectos</button>
      <button type="button" class="btn btn-outline" data-nav="contacto">Contactarme</button>
    </div>
    <div class="social">
      <a href="{{ profile.github.url | url }}" target="_blank" rel="noopener noreferrer" class="social-link" aria-label="GitHub"><i class="icon icon-github" aria-hidden="true"></i></a>
      <a href="{{ profile.linkedin.url | url }}" target="_blank" rel="noopener noreferrer" class="social-link" aria-label="LinkedIn"><i class="icon icon-linkedin" aria-hidden="true"></i></a>
      <a href="mailto:{{ profile.email | url }}" class="social-link" aria-label="Email"><i class="icon icon-mail" aria-hidden="true"></i></a>
    </div>
    <div class="scroll-hint"><i class="icon icon-chevron-down" aria-hidden="true"></i></div>
  </div>
</section>

<section id="sobre-mi" class="section">
  <div class="panel">
    <h2 class="section-title gradient-text">Sobre Mí</h2>
    <div class="about-grid">
      <div class="about-text">
      {% for paragraph in profile.about %}
        <p>{{ paragraph }}</p>
      {% endfor %}
        <div class="chips">
        {% for highlight in profile.highlights %}
          <span class="chip chip-{{ highlight.tone }}">{{ highlight.label }}</span>
        {% endfor %}
        </div>
      </div>
      <div class="about-art">{{ profile.about_glyph }}</div>
    </div>
  </div>
</section>

<section id="habilidades" class="section">
  <div class="panel">
    <h2 class="section-title gradient-text">Habilidades Técnicas</h2>
    <div class="skills-grid">
    {% for skill in skills %}
      <div class="skill-card">
        <div class="skill-head">
          <div class="skill-badge badge-{{ skill.color }}"><span>{{ skill.icon }}</span></div>
          <h3>{{ skill.name }}</h3>
        </div>
        <p>{{ skill.description }}</p>
      </div>
    {% endfor %}
    </div>
  </div>
</section>

<section id="proyectos" class="section">
  <div class="panel panel-wide">
    <h2 class="section-title gradient-text">Proyectos Destacados</h2>
    <div class="projects-grid">
    {% for project in projects %}
      <div class="project-card">
        <div class="project-image"><img src="{{ project.image_url | url }}" alt="{{ project.title }}" loading="lazy"></div>
        <div class="project-body">
          <h3>{{ project.title }}</h3>
          <p>{{ project.description }}</p>
          <div class="chips">
          {% for tech in project.technologies %}
            <span class="chip chip-purple">{{ tech }}</span>
          {% endfor %}
          </div>
          <div class="project-links">
            <a href="{{ project.link | url }}" target="_blank" rel="noopener noreferrer" class="project-link"><i class="icon icon-external" aria-hidden="true"></i><span>Ver Demo</span></a>
            {% if project.repo %}
            <a href="{{ project.repo | url }}" target="_blank" rel="noopener noreferrer" class="project-link project-repo"><i class="icon icon-github" aria-hidden="true"></i><span>Código</span></a>
            {% endif %}
          </div>
        </div>
      </div>
    {% endfor %}
    </div>
  </div>
</section>

<section id="contacto" class="section">
  <div class="panel panel-narrow">
    <h2 class="section-title gradient-text">{{ profile.contact_heading }}</h2>
    <p class="contact-blurb">{{ profile.contact_blurb }}</p>
    <div class="contact-grid">
      <div class="contact-card">
        <i class="icon icon-mail" aria-hidden="true"></i>
        <h3>Email</h3>
        <a href="mailto:{{ profile.email | url }}">{{ profile.email }}</a>
      </div>
      <div class="contact-card">
        <i class="icon icon-linkedin" aria-hidden="true"></i>
        <h3>LinkedIn</h3>
        <a href="{{ profile.linkedin.url | url }}" target="_blank" rel="noopener noreferrer">{{ profile.linkedin.handle }}</a>
      </div>
      <div class="contact-card">
        <i class="icon icon-github" aria-hidden="true"></i>
        <h3>GitHub</h3>
        <a href="{{ profile.github.url | url }}" target="_blank" rel="noopener noreferrer">{{ profile.github.handle }}</a>
      </div>
    </div>
    <a href="mailto:{{ profile.email | url }}" class="btn btn-primary">Enviar Mensaje</a>
  </div>
</section>"##;

const INDEX_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
{% include "nav.html" %}
<main>
{% include "sections.html" %}
</main>
{% endblock %}

{% block scripts %}
  <script src="{{ js_url | url }}" defer></script>
{% endblock %}"##;

const NOT_FOUND_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<main class="not-found">
  <h1 class="gradient-text">404</h1>
  <p>Esta página no existe.</p>
  <a href="{{ home_url | url }}" class="btn btn-primary">Volver al inicio</a>
</main>
{% endblock %}"##;
