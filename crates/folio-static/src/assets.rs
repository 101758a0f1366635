//! Asset pipeline for CSS and JavaScript processing.

use std::sync::LazyLock;
use std::time::Duration;

use folio_content::SectionId;
use regex::Regex;
use serde::Serialize;

/// Values the client runtime needs, taken from the Rust side so the browser
/// and the view model agree on them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    /// Caption revealed by the typing animation
    pub caption: String,
    /// Milliseconds between revealed characters
    pub interval_ms: u64,
    /// Valid navigation targets
    pub sections: Vec<&'static str>,
}

impl RuntimeConfig {
    pub fn new(caption: &str, interval: Duration) -> Self {
        Self {
            caption: caption.to_string(),
            interval_ms: interval.as_millis().max(1) as u64,
            sections: SectionId::ALL.iter().map(|s| s.anchor()).collect(),
        }
    }
}

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file.
    pub fn generate_css() -> String {
        DEFAULT_CSS.to_string()
    }

    /// Generate the client runtime script.
    pub fn generate_js(config: &RuntimeConfig) -> Result<String, serde_json::Error> {
        let config_json = serde_json::to_string(config)?;
        Ok(RUNTIME_JS.replace("__FOLIO_CONFIG__", &config_json))
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }

    /// Drop the indentation and blank lines left between tags.
    ///
    /// Only whitespace runs containing a newline are removed, so spacing
    /// inside a line of text is untouched.
    pub fn minify_html(html: &str) -> String {
        static BETWEEN_TAGS: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r">\s*\n\s*<").expect("valid regex"));

        BETWEEN_TAGS.replace_all(html.trim(), "><").into_owned()
    }
}

const DEFAULT_CSS: &str = r#"/* Portfolio theme */

:root {
  --bg-from: #030712;
  --bg-via: #1e1b4b;
  --foreground: #ffffff;
  --muted: #9ca3af;
  --soft: #d1d5db;
  --accent: #c084fc;
  --accent-strong: #9333ea;
  --pink: #db2777;
  --glass: rgba(255, 255, 255, 0.05);
  --glass-hover: rgba(255, 255, 255, 0.1);
  --border: rgba(255, 255, 255, 0.1);
  --radius: 1rem;
  --max-width: 72rem;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
  background: linear-gradient(135deg, var(--bg-from), var(--bg-via), var(--bg-from));
  background-attachment: fixed;
  color: var(--foreground);
  line-height: 1.6;
  min-height: 100vh;
}

a {
  color: inherit;
  text-decoration: none;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

[hidden] {
  display: none !important;
}

.gradient-text {
  background: linear-gradient(90deg, var(--accent), #f472b6);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

/* Navigation */
.navbar {
  position: fixed;
  top: 0;
  width: 100%;
  z-index: 50;
  background: rgba(0, 0, 0, 0.2);
  backdrop-filter: blur(16px);
  border-bottom: 1px solid var(--border);
}

.navbar-inner {
  max-width: 80rem;
  margin: 0 auto;
  padding: 1rem 2rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.brand {
  font-size: 1.5rem;
  font-weight: 700;
  background: linear-gradient(90deg, var(--accent), #f472b6);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.nav-links {
  display: flex;
  gap: 2rem;
}

.nav-link {
  text-transform: capitalize;
  color: rgba(255, 255, 255, 0.8);
  transition: color 0.3s;
}

.nav-link:hover,
.nav-link.active {
  color: var(--accent);
}

.menu-btn {
  display: none;
}

.mobile-menu {
  background: rgba(0, 0, 0, 0.9);
  padding: 0.5rem 1rem;
}

.mobile-link {
  display: block;
  width: 100%;
  text-align: left;
  padding: 0.5rem 0;
  text-transform: capitalize;
  color: rgba(255, 255, 255, 0.8);
}

.mobile-link:hover {
  color: var(--accent);
}

/* Icons */
.icon {
  font-style: normal;
  display: inline-block;
  line-height: 1;
}

.icon-menu::before { content: "\2630"; }
.menu-btn[aria-expanded="true"] .icon-menu::before { content: "\2715"; }
.icon-github::before { content: "\2302"; }
.icon-linkedin::before { content: "in"; font-weight: 700; }
.icon-mail::before { content: "\2709"; }
.icon-external::before { content: "\2197"; }
.icon-chevron-down::before { content: "\2304"; }

/* Hero */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 5rem 1rem 0;
  position: relative;
  text-align: center;
}

.hero-inner {
  max-width: 56rem;
}

.avatar {
  width: 8rem;
  height: 8rem;
  margin: 0 auto 2rem;
  border-radius: 9999px;
  background: linear-gradient(90deg, #a855f7, #ec4899);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 3.75rem;
}

.hero-name {
  font-size: clamp(3rem, 8vw, 4.5rem);
  font-weight: 700;
  margin-bottom: 1rem;
}

.hero-caption {
  font-size: clamp(1.5rem, 4vw, 1.875rem);
  font-weight: 300;
  color: #d8b4fe;
  min-height: 2.5rem;
  margin-bottom: 2rem;
}

.cursor {
  animation: pulse 1s ease-in-out infinite;
}

.hero-tagline {
  font-size: 1.25rem;
  color: var(--soft);
  max-width: 42rem;
  margin: 0 auto 3rem;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 1.5rem;
  justify-content: center;
  margin-bottom: 3rem;
}

.btn {
  display: inline-block;
  padding: 1rem 2rem;
  border-radius: 9999px;
  font-weight: 600;
  font-size: 1.125rem;
  transition: transform 0.3s, background 0.3s;
}

.btn:hover {
  transform: scale(1.05);
}

.btn-primary {
  background: linear-gradient(90deg, var(--accent-strong), var(--pink));
}

.btn-outline {
  border: 2px solid #a855f7;
}

.social {
  display: flex;
  justify-content: center;
  gap: 1.5rem;
}

.social-link {
  padding: 0.75rem;
  width: 3rem;
  height: 3rem;
  border-radius: 9999px;
  background: var(--glass-hover);
  display: flex;
  align-items: center;
  justify-content: center;
  transition: transform 0.3s;
}

.social-link:hover {
  transform: scale(1.1);
}

.scroll-hint {
  position: absolute;
  bottom: 2rem;
  left: 50%;
  transform: translateX(-50%);
  color: var(--accent);
  font-size: 2rem;
  animation: bounce 1s infinite;
}

/* Sections */
.section {
  padding: 5rem 1rem;
}

.panel {
  max-width: var(--max-width);
  margin: 0 auto;
  padding: 2rem;
  background: var(--glass);
  backdrop-filter: blur(4px);
  border: 1px solid var(--border);
  border-radius: 0.75rem;
}

.panel-wide {
  max-width: 80rem;
}

.panel-narrow {
  max-width: 56rem;
  text-align: center;
}

.section-title {
  font-size: clamp(2.25rem, 5vw, 3rem);
  font-weight: 700;
  text-align: center;
  margin-bottom: 4rem;
}

.about-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
  gap: 3rem;
  align-items: center;
}

.about-text p {
  font-size: 1.125rem;
  color: var(--soft);
  margin-bottom: 1.5rem;
}

.about-art {
  height: 24rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: linear-gradient(135deg, rgba(147, 51, 234, 0.2), rgba(219, 39, 119, 0.2));
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 6rem;
}

.chips {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.chip {
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
  font-size: 0.875rem;
}

.chip-purple { background: rgba(147, 51, 234, 0.3); }
.chip-green { background: rgba(22, 163, 74, 0.3); }
.chip-blue { background: rgba(37, 99, 235, 0.3); }

/* Skills */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
  gap: 2rem;
}

.skill-card {
  background: var(--glass);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.5rem;
  transition: transform 0.3s, background 0.3s;
}

.skill-card:hover {
  background: var(--glass-hover);
  transform: scale(1.05);
}

.skill-head {
  display: flex;
  align-items: center;
  margin-bottom: 1rem;
}

.skill-head h3 {
  font-size: 1.25rem;
  font-weight: 600;
}

.skill-card p {
  color: var(--muted);
  font-size: 0.875rem;
}

.skill-badge {
  padding: 0.75rem;
  border-radius: 0.75rem;
  margin-right: 1rem;
  font-size: 1.5rem;
}

.badge-blue { background: linear-gradient(90deg, #3b82f6, #2563eb); }
.badge-purple { background: linear-gradient(90deg, #a855f7, #9333ea); }
.badge-cyan { background: linear-gradient(90deg, #06b6d4, #0891b2); }
.badge-graphite { background: linear-gradient(90deg, #1f2937, #111827); }
.badge-navy { background: linear-gradient(90deg, #2563eb, #1d4ed8); }
.badge-yellow { background: linear-gradient(90deg, #eab308, #ca8a04); }

/* Projects */
.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
  gap: 2rem;
}

.project-card {
  background: var(--glass);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  overflow: hidden;
  transition: transform 0.3s, background 0.3s;
}

.project-card:hover {
  background: var(--glass-hover);
  transform: scale(1.02);
}

.project-image {
  height: 12rem;
  background: linear-gradient(135deg, rgba(147, 51, 234, 0.2), rgba(219, 39, 119, 0.2));
  overflow: hidden;
}

.project-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.project-body {
  padding: 1.5rem;
}

.project-body h3 {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: 0.75rem;
}

.project-body p {
  color: var(--soft);
  margin-bottom: 1rem;
}

.project-links {
  display: flex;
  gap: 1rem;
  margin-top: 1.5rem;
}

.project-link {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  color: var(--accent);
}

.project-repo {
  color: var(--muted);
}

/* Contact */
.contact-blurb {
  font-size: 1.25rem;
  color: var(--soft);
  max-width: 42rem;
  margin: 0 auto 3rem;
}

.contact-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
  gap: 2rem;
  margin-bottom: 3rem;
}

.contact-card {
  background: var(--glass);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.5rem;
}

.contact-card .icon {
  font-size: 2.5rem;
  color: var(--accent);
  margin-bottom: 1rem;
}

.contact-card h3 {
  font-size: 1.25rem;
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.contact-card a {
  color: var(--muted);
  word-break: break-all;
}

.contact-card a:hover {
  color: var(--accent);
}

/* 404 */
.not-found {
  min-height: 80vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
}

.not-found h1 {
  font-size: 6rem;
}

.footer {
  padding: 2rem 1rem;
  border-top: 1px solid var(--border);
  text-align: center;
  color: var(--muted);
}

@keyframes pulse {
  50% { opacity: 0; }
}

@keyframes bounce {
  0%, 100% { transform: translate(-50%, -25%); }
  50% { transform: translate(-50%, 0); }
}

/* Mobile */
@media (max-width: 768px) {
  .nav-links {
    display: none;
  }

  .menu-btn {
    display: block;
    font-size: 1.5rem;
  }
}

@media (min-width: 769px) {
  .mobile-menu {
    display: none !important;
  }
}
"#;

// Browser half of the page view: menu toggle, section navigation and the
// typing animation. `__FOLIO_CONFIG__` is replaced with the runtime config.
const RUNTIME_JS: &str = r#"// Portfolio runtime
(function() {
  'use strict';

  const config = __FOLIO_CONFIG__;

  // Mobile menu
  const menuBtn = document.querySelector('.menu-btn');
  const mobileMenu = document.querySelector('.mobile-menu');
  let menuOpen = false;

  function setMenu(open) {
    menuOpen = open;
    if (mobileMenu) mobileMenu.hidden = !open;
    if (menuBtn) menuBtn.setAttribute('aria-expanded', String(open));
  }

  if (menuBtn) {
    menuBtn.addEventListener('click', () => setMenu(!menuOpen));
  }

  // Section navigation
  function activate(id) {
    if (!config.sections.includes(id)) return;

    document.querySelectorAll('.nav-links [data-nav]').forEach(btn => {
      btn.classList.toggle('active', btn.dataset.nav === id);
    });
    setMenu(false);

    const target = document.getElementById(id);
    if (target) target.scrollIntoView({ behavior: 'smooth' });
  }

  document.querySelectorAll('[data-nav]').forEach(btn => {
    btn.addEventListener('click', () => activate(btn.dataset.nav));
  });

  // Typing animation
  const typed = document.querySelector('.typed-text');
  const chars = Array.from(config.caption);
  let shown = typed ? Array.from(typed.textContent).length : chars.length;
  let timer = null;

  function stopTyping() {
    if (timer !== null) {
      clearInterval(timer);
      timer = null;
    }
  }

  if (typed && shown < chars.length) {
    timer = setInterval(() => {
      if (shown < chars.length) {
        shown += 1;
        typed.textContent = chars.slice(0, shown).join('');
      }
      if (shown >= chars.length) stopTyping();
    }, config.intervalMs);
  }

  window.addEventListener('pagehide', stopTyping);
})();
"#;
