//! HTML site generation.
//!
//! Renders every route in the route table to a static HTML file. Pages are
//! built from the [`Catalog`] and the resolved [`SiteConfig`]; nothing is
//! fetched at runtime except the contact form's delivery request.
//!
//! ## Generated Pages
//!
//! - **Home** (`/index.html`): hero, skills, and teasers drawn from the catalog
//! - **About, Projects, Certifications, Tools, Blog, Contact**
//!   (`/<route>/index.html`)
//! - **Blog posts** (`/blog/<id>/index.html`): markdown body when the post
//!   has one, otherwise a placeholder page
//! - **Not found** (`/404.html`): also the page for every unrouted path
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── 404.html
//! ├── about/index.html
//! ├── blog/
//! │   ├── index.html
//! │   └── advanced-penetration-testing/index.html
//! ├── sounds/                    # copied from <source>/assets/
//! │   ├── click.mp3
//! │   └── hover.mp3
//! └── ...
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time and inlined into each page:
//! - `static/style.css`: Base styles (theme palettes injected from config)
//! - `static/site.js`: Toggles, dropdowns, overlays and the contact form
//!
//! The initial preferences are written onto `<html>` (`data-theme`, the
//! `dark` class, `data-sound`); the script reads them back on load.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::catalog::{Catalog, CatalogEntry, CatalogError};
use crate::config::{self, ConfigError, SiteConfig};
use crate::overlay::{open_button, overlay_id, overlay_markup};
use crate::routes::{self, Page, RouteDefinition};
use crate::ui::DARK_CLASS;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),
    #[error("Path error: {0}")]
    StripPrefix(#[from] std::path::StripPrefixError),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

/// A page written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub page: Page,
    /// Path relative to the output root.
    pub file: String,
}

/// What a build produced.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub pages: Vec<GeneratedPage>,
    /// Files copied from `<source>/assets/`.
    pub assets: usize,
}

/// Everything a page renderer needs.
pub struct Site<'a> {
    pub config: &'a SiteConfig,
    pub catalog: &'a Catalog,
    menu: Vec<RouteDefinition>,
    css: String,
}

impl<'a> Site<'a> {
    pub fn new(config: &'a SiteConfig, catalog: &'a Catalog) -> Self {
        let color_css = config::generate_color_css(&config.colors, config.preferences.theme);
        Self {
            config,
            catalog,
            menu: routes::menu(),
            css: format!("{}\n\n{}", color_css, CSS_STATIC),
        }
    }
}

/// Every page the site renders, in output order.
pub fn site_pages(catalog: &Catalog) -> Vec<Page> {
    let mut pages = Page::STATIC.to_vec();
    pages.extend(catalog.posts.iter().map(|p| Page::BlogPost(p.id.clone())));
    pages.push(Page::NotFound);
    pages
}

pub fn generate(
    source_dir: &Path,
    output_dir: &Path,
    config: &SiteConfig,
    catalog: &Catalog,
) -> Result<GenerateReport, GenerateError> {
    config.validate()?;
    catalog.validate()?;
    if !config.contact.is_configured() {
        warn!("contact ids are not configured; the contact form will report failures");
    }

    fs::create_dir_all(output_dir)?;

    let mut report = GenerateReport::default();
    let assets_dir = source_dir.join("assets");
    if assets_dir.is_dir() {
        report.assets = copy_assets(&assets_dir, output_dir)?;
    }

    let site = Site::new(config, catalog);
    for page in site_pages(catalog) {
        let file = page.output_file();
        let path = output_dir.join(&file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, render_page(&site, &page).into_string())?;
        debug!("wrote {}", path.display());
        report.pages.push(GeneratedPage { page, file });
    }

    Ok(report)
}

/// Copy `src` into `dst`, skipping dotfiles. Returns the number of files.
fn copy_assets(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    let mut copied = 0;
    let walker = WalkDir::new(src)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));
    for entry in walker {
        let entry = entry?;
        let target = dst.join(entry.path().strip_prefix(src)?);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Render `page`. Every page produces exactly one document.
pub fn render_page(site: &Site, page: &Page) -> Markup {
    let content = match page {
        Page::Home => render_home(site),
        Page::About => render_about(site),
        Page::Projects => render_projects(site),
        Page::Certifications => render_certifications(site),
        Page::Tools => render_tools(site),
        Page::Blog => render_blog(site),
        Page::BlogPost(id) => render_post(site, id),
        Page::Contact => render_contact(site),
        Page::NotFound => render_not_found(),
    };
    base_document(site, page, content)
}

fn markdown(source: &str) -> Markup {
    let parser = Parser::new(source);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    PreEscaped(out)
}

fn href(page: &Page) -> String {
    page.path().unwrap_or_else(|| "/".to_string())
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(site: &Site, page: &Page, content: Markup) -> Markup {
    let prefs = &site.config.preferences;
    let title = match page {
        Page::Home => site.config.site.title.clone(),
        _ => format!("{} | {}", page.title(), site.config.site.title),
    };
    html! {
        (DOCTYPE)
        html lang="en"
            data-theme=(prefs.theme.as_str())
            class=[prefs.dark_mode.then_some(DARK_CLASS)]
            data-sound=(if prefs.sound_enabled { "on" } else { "off" }) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(&site.css)) }
            }
            body {
                (render_nav(&site.menu, page, &site.config.site.title))
                (content)
                (site_footer(site))
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Renders the navbar: logo, menu tree, mobile toggle and preference toggles.
pub fn render_nav(items: &[RouteDefinition], current: &Page, site_title: &str) -> Markup {
    html! {
        nav.site-nav {
            a.logo href="/" data-nav-link { (site_title) }
            button.nav-hamburger type="button" data-mobile-toggle aria-label="Open menu" aria-expanded="false" {
                span.hamburger-line {}
                span.hamburger-line {}
                span.hamburger-line {}
            }
            ul.nav-menu {
                @for (index, item) in items.iter().enumerate() {
                    (render_nav_item(index, item, current))
                }
            }
            div.nav-toggles {
                button.toggle type="button" data-toggle="dark" aria-label="Toggle dark mode" { "Dark" }
                button.toggle type="button" data-toggle="theme" aria-label="Switch theme" { "Theme" }
                button.toggle type="button" data-toggle="sound" aria-label="Toggle sound" { "Sound" }
            }
        }
    }
}

fn render_nav_item(index: usize, item: &RouteDefinition, current: &Page) -> Markup {
    let active = item.is_active(current);
    html! {
        @if item.is_dropdown() {
            li.nav-dropdown.active[active] data-dropdown=(index) {
                button.nav-group type="button" data-dropdown-toggle aria-expanded="false" {
                    (item.name)
                }
                ul.dropdown-panel hidden {
                    @for child in &item.children {
                        li.active[child.is_active(current)] {
                            a href=(child.path.unwrap_or("/")) data-nav-link { (child.name) }
                        }
                    }
                }
            }
        } @else {
            li.active[active] {
                a href=(item.path.unwrap_or("/")) data-nav-link { (item.name) }
            }
        }
    }
}

fn site_footer(site: &Site) -> Markup {
    let info = &site.config.site;
    html! {
        footer.site-footer {
            p { (site.catalog.profile.name) " · " (info.title) }
            ul.social {
                @if !info.github.is_empty() {
                    li { a href=(info.github) target="_blank" rel="noopener" { "GitHub" } }
                }
                @if !info.linkedin.is_empty() {
                    li { a href=(info.linkedin) target="_blank" rel="noopener" { "LinkedIn" } }
                }
                @if !info.email.is_empty() {
                    li { a href={ "mailto:" (info.email) } { "Email" } }
                }
            }
        }
    }
}

fn tags(items: &[String]) -> Markup {
    html! {
        @if !items.is_empty() {
            ul.tags {
                @for item in items {
                    li.tag { (item) }
                }
            }
        }
    }
}

fn external_link(url: &str, label: &str) -> Markup {
    html! {
        a.button.secondary href=(url) target="_blank" rel="noopener" { (label) }
    }
}

/// A card with a "Learn More" button and its hidden detail overlay.
fn detail_card<E: CatalogEntry>(list: &str, entry: &E, summary: Markup, detail: Markup) -> Markup {
    let dom_id = overlay_id(list, entry.id());
    let label = format!("Details for {}", entry.title());
    html! {
        article.card id=(entry.id()) {
            h3 { (entry.title()) }
            (summary)
            (open_button(&dom_id, &label))
        }
        (overlay_markup(&dom_id, entry.title(), html! {
            h2 { (entry.title()) }
            (detail)
        }))
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

fn render_home(site: &Site) -> Markup {
    let catalog = site.catalog;
    let profile = &catalog.profile;
    html! {
        main.home-page {
            section.hero {
                p.eyebrow { "Hello, I'm" }
                h1 { (profile.name) }
                p.headline { (profile.headline) }
                p.summary { (profile.summary) }
                div.hero-actions {
                    a.button href=(href(&Page::Projects)) data-nav-link { "View Projects" }
                    a.button.secondary href=(href(&Page::Contact)) data-nav-link { "Get in Touch" }
                }
            }
            @if !catalog.skills.is_empty() {
                section.skills {
                    h2 { "What I Do" }
                    div.card-grid {
                        @for skill in &catalog.skills {
                            article.card {
                                h3 { (skill.name) }
                                p { (skill.description) }
                            }
                        }
                    }
                }
            }
            @if !catalog.projects.is_empty() {
                section.teasers {
                    h2 { "Featured Projects" }
                    div.card-grid {
                        @for project in &catalog.projects {
                            a.card.teaser href={ (href(&Page::Projects)) "#" (project.id) } {
                                h3 { (project.title) }
                                p { (project.description) }
                            }
                        }
                    }
                }
            }
            @if !catalog.certifications.is_empty() {
                section.teasers {
                    h2 { "Certifications" }
                    div.card-grid {
                        @for cert in &catalog.certifications {
                            a.card.teaser href={ (href(&Page::Certifications)) "#" (cert.id) } {
                                h3 { (cert.title) }
                                p.meta { (cert.issuer) " · " (cert.date) }
                            }
                        }
                    }
                }
            }
            @if !catalog.posts.is_empty() {
                section.teasers {
                    h2 { "Latest Posts" }
                    div.card-grid {
                        @for post in catalog.posts.iter().take(2) {
                            a.card.teaser href=(href(&Page::BlogPost(post.id.clone()))) {
                                h3 { (post.title) }
                                p.meta { (post.date) }
                                p { (post.excerpt) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_about(site: &Site) -> Markup {
    let catalog = site.catalog;
    html! {
        main.about-page {
            header.page-header {
                h1 { "About Me" }
                p.headline { (catalog.profile.headline) }
            }
            article.bio {
                (markdown(&catalog.profile.bio))
            }
            @if !catalog.education.is_empty() {
                section.timeline {
                    h2 { "Education" }
                    @for edu in &catalog.education {
                        article.timeline-entry {
                            h3 { (edu.institution) }
                            p.meta { (edu.degree) " · " (edu.details) }
                            p { (edu.description) }
                        }
                    }
                }
            }
            @if !catalog.experience.is_empty() {
                section.timeline {
                    h2 { "Experience" }
                    @for job in &catalog.experience {
                        article.timeline-entry {
                            h3 { (job.role) }
                            p.meta { (job.company) " · " (job.period) }
                            p { (job.description) }
                        }
                    }
                }
            }
            @if !catalog.skills.is_empty() {
                section {
                    h2 { "Skills" }
                    ul.tags {
                        @for skill in &catalog.skills {
                            li.tag title=(skill.description) { (skill.name) }
                        }
                    }
                }
            }
            p.cta {
                a.button href=(href(&Page::Contact)) data-nav-link { "Work With Me" }
            }
        }
    }
}

fn render_projects(site: &Site) -> Markup {
    html! {
        main.projects-page {
            header.page-header {
                h1 { "Projects" }
                p { "Security tooling, machine learning and web work." }
            }
            div.card-grid {
                @for project in &site.catalog.projects {
                    (detail_card("projects", project,
                        html! {
                            p.meta { (project.year) }
                            p { (project.description) }
                            (tags(&project.tech))
                        },
                        html! {
                            p.meta { (project.year) }
                            p { (project.description) }
                            @if !project.features.is_empty() {
                                h3 { "Key Features" }
                                ul.features {
                                    @for feature in &project.features {
                                        li { (feature) }
                                    }
                                }
                            }
                            (tags(&project.tech))
                            div.links {
                                @if let Some(url) = &project.github {
                                    (external_link(url, "GitHub"))
                                }
                                @if let Some(url) = &project.demo {
                                    (external_link(url, "Live Demo"))
                                }
                            }
                        }))
                }
            }
        }
    }
}

fn render_certifications(site: &Site) -> Markup {
    html! {
        main.certifications-page {
            header.page-header {
                h1 { "Certifications" }
            }
            div.card-grid {
                @for cert in &site.catalog.certifications {
                    (detail_card("certifications", cert,
                        html! {
                            p.meta { (cert.issuer) " · " (cert.date) }
                            (tags(&cert.skills))
                        },
                        html! {
                            p.meta { (cert.issuer) " · " (cert.date) }
                            p { (cert.description) }
                            (tags(&cert.skills))
                            @if let Some(url) = &cert.credential {
                                div.links { (external_link(url, "View Credential")) }
                            }
                        }))
                }
            }
        }
    }
}

fn render_tools(site: &Site) -> Markup {
    html! {
        main.tools-page {
            header.page-header {
                h1 { "Tools & Technologies" }
            }
            @for (category, tools) in site.catalog.tools_by_category() {
                section.tool-category {
                    h2 { (category) }
                    div.card-grid {
                        @for tool in tools {
                            (detail_card("tools", tool,
                                html! {
                                    p.proficiency { (tool.proficiency) }
                                    p { (tool.description) }
                                },
                                html! {
                                    p.meta { (tool.category) " · " (tool.proficiency) }
                                    p { (tool.description) }
                                    h3 { "How I Use It" }
                                    p { (tool.use_case) }
                                    @if let Some(url) = &tool.link {
                                        div.links { (external_link(url, "Official Site")) }
                                    }
                                }))
                        }
                    }
                }
            }
        }
    }
}

fn render_blog(site: &Site) -> Markup {
    html! {
        main.blog-page {
            header.page-header {
                h1 { "Blog" }
            }
            div.card-grid {
                @for post in &site.catalog.posts {
                    article.card {
                        h3 { (post.title) }
                        p.meta { (post.date) }
                        p { (post.excerpt) }
                        a.button.secondary href=(href(&Page::BlogPost(post.id.clone()))) data-nav-link {
                            "Read More"
                        }
                    }
                }
            }
        }
    }
}

/// A post with a body renders it; anything else is the placeholder page.
fn render_post(site: &Site, id: &str) -> Markup {
    let post = site.catalog.post(id);
    let published = post.and_then(|p| p.body.as_deref().map(|body| (p, body)));
    html! {
        main.post-page {
            @if let Some((post, body)) = published {
                article.post {
                    h1 { (post.title) }
                    p.meta { (post.date) }
                    (markdown(body))
                }
            } @else {
                section.placeholder {
                    h1 { "Blog Post Placeholder" }
                    @if let Some(post) = post {
                        p.meta { (post.title) }
                    }
                    p { "This post hasn't been published yet." }
                }
            }
            p {
                a href=(href(&Page::Blog)) data-nav-link { "Back to Blog" }
            }
        }
    }
}

fn render_contact(site: &Site) -> Markup {
    let info = &site.config.site;
    let contact = &site.config.contact;
    html! {
        main.contact-page {
            header.page-header {
                h1 { "Get in Touch" }
                p { "Have a project or an opportunity in mind? Send a message." }
            }
            div.contact-layout {
                aside.contact-info {
                    @if !info.email.is_empty() {
                        p { "Email: " a href={ "mailto:" (info.email) } { (info.email) } }
                    }
                    @if !info.github.is_empty() {
                        p { a href=(info.github) target="_blank" rel="noopener" { "GitHub" } }
                    }
                    @if !info.linkedin.is_empty() {
                        p { a href=(info.linkedin) target="_blank" rel="noopener" { "LinkedIn" } }
                    }
                }
                form.contact-form
                    data-contact-form
                    data-endpoint=(contact.endpoint)
                    data-service-id=(contact.service_id)
                    data-template-id=(contact.template_id)
                    data-user-id=(contact.user_id) {
                    label for="contact-name" { "Name" }
                    input id="contact-name" type="text" name="name" autocomplete="name" required;
                    label for="contact-email" { "Email" }
                    input id="contact-email" type="email" name="email" autocomplete="email" required;
                    label for="contact-message" { "Message" }
                    textarea id="contact-message" name="message" rows="6" required {}
                    button.button type="submit" { "Send Message" }
                    p.notice data-notice role="status" aria-live="polite" {}
                }
            }
        }
    }
}

fn render_not_found() -> Markup {
    html! {
        main.not-found-page {
            h1 { "404" }
            p { "Page not found" }
            a.button href="/" data-nav-link { "Back to Home" }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{project, stock};
    use crate::ui::Theme;
    use tempfile::TempDir;

    fn render(config: &SiteConfig, catalog: &Catalog, page: &Page) -> String {
        render_page(&Site::new(config, catalog), page).into_string()
    }

    #[test]
    fn every_menu_path_renders_one_document() {
        let config = SiteConfig::default();
        let catalog = stock();
        for path in routes::menu_paths(&routes::menu()) {
            let page = routes::resolve(path);
            let html = render(&config, &catalog, &page);
            assert!(html.starts_with("<!DOCTYPE html>"), "{path}");
            assert_eq!(html.matches("<main").count(), 1, "{path}");
            assert_eq!(html.matches("<html").count(), 1, "{path}");
        }
    }

    #[test]
    fn site_pages_have_distinct_files() {
        let catalog = stock();
        let pages = site_pages(&catalog);
        let mut files: Vec<_> = pages.iter().map(Page::output_file).collect();
        files.sort();
        files.dedup();
        assert_eq!(files.len(), pages.len());
        assert_eq!(pages.len(), Page::STATIC.len() + catalog.posts.len() + 1);
    }

    #[test]
    fn root_reflects_initial_preferences() {
        let mut config = SiteConfig::default();
        let catalog = stock();
        let html = render(&config, &catalog, &Page::Home);
        assert!(html.contains(r#"<html lang="en" data-theme="cyberpunk" data-sound="off">"#));

        config.preferences.dark_mode = true;
        config.preferences.theme = Theme::Retro;
        config.preferences.sound_enabled = true;
        let html = render(&config, &catalog, &Page::Home);
        assert!(html.contains(
            r#"<html lang="en" data-theme="retro" class="dark" data-sound="on">"#
        ));
    }

    #[test]
    fn nav_marks_dropdown_active_for_child_page() {
        let html = render_nav(&routes::menu(), &Page::Tools, "Site").into_string();
        assert!(html.contains(r#"class="nav-dropdown active""#));
        assert!(html.contains(r#"data-dropdown="2""#));
        assert!(html.contains(r#"href="/ctf-challenges""#));
    }

    #[test]
    fn every_project_gets_an_overlay() {
        let config = SiteConfig::default();
        let catalog = stock();
        let html = render(&config, &catalog, &Page::Projects);
        for project in &catalog.projects {
            let id = overlay_id("projects", &project.id);
            assert!(html.contains(&format!(r#"id="{id}""#)));
            assert!(html.contains(&format!(r#"data-overlay-open="{id}""#)));
        }
        assert_eq!(
            html.matches("data-overlay-panel>").count(),
            catalog.projects.len()
        );
    }

    #[test]
    fn tools_grouped_by_category() {
        let config = SiteConfig::default();
        let catalog = stock();
        let html = render(&config, &catalog, &Page::Tools);
        assert_eq!(
            html.matches(r#"class="tool-category""#).count(),
            catalog.tools_by_category().len()
        );
        assert_eq!(html.matches("data-overlay-panel>").count(), catalog.tools.len());
    }

    #[test]
    fn catalog_text_is_escaped() {
        let config = SiteConfig::default();
        let mut evil = project("evil");
        evil.title = "<script>alert('xss')</script>".to_string();
        let catalog = Catalog {
            projects: vec![evil],
            ..Default::default()
        };
        let html = render(&config, &catalog, &Page::Projects);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn post_without_body_is_placeholder() {
        let config = SiteConfig::default();
        let catalog = stock();
        let id = catalog.posts[0].id.clone();
        let html = render(&config, &catalog, &Page::BlogPost(id));
        assert!(html.contains("Blog Post Placeholder"));

        let html = render(&config, &catalog, &Page::BlogPost("nope".into()));
        assert!(html.contains("Blog Post Placeholder"));
    }

    #[test]
    fn post_body_is_rendered_as_markdown() {
        let config = SiteConfig::default();
        let mut catalog = stock();
        catalog.posts[0].body = Some("Some **bold** text".to_string());
        let id = catalog.posts[0].id.clone();
        let html = render(&config, &catalog, &Page::BlogPost(id));
        assert!(html.contains("<strong>bold</strong>"));
        assert!(!html.contains("Blog Post Placeholder"));
    }

    #[test]
    fn contact_form_carries_delivery_settings() {
        let mut config = SiteConfig::default();
        config.contact.service_id = "service_abc".into();
        config.contact.template_id = "template_xyz".into();
        config.contact.user_id = "pk_123".into();
        let html = render(&config, &stock(), &Page::Contact);
        assert!(html.contains("data-contact-form"));
        assert!(html.contains(r#"data-service-id="service_abc""#));
        assert!(html.contains(r#"data-template-id="template_xyz""#));
        assert!(html.contains(r#"data-user-id="pk_123""#));
        assert!(html.contains(r#"data-endpoint="https://api.emailjs.com/api/v1.0/email/send""#));
    }

    #[test]
    fn not_found_page() {
        let html = render(&SiteConfig::default(), &stock(), &Page::NotFound);
        assert!(html.contains("Page not found"));
        assert!(html.contains("<title>Not Found | CyberPortfolio</title>"));
    }

    #[test]
    fn generate_writes_every_page() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("dist");
        let catalog = stock();
        let report = generate(tmp.path(), &out, &SiteConfig::default(), &catalog).unwrap();

        assert_eq!(report.pages.len(), site_pages(&catalog).len());
        assert_eq!(report.assets, 0);
        for file in [
            "index.html",
            "404.html",
            "about/index.html",
            "projects/index.html",
            "certifications/index.html",
            "tools/index.html",
            "blog/index.html",
            "contact/index.html",
        ] {
            assert!(out.join(file).is_file(), "{file} missing");
        }
        for post in &catalog.posts {
            assert!(out.join(format!("blog/{}/index.html", post.id)).is_file());
        }
    }

    #[test]
    fn generate_copies_assets() {
        let tmp = TempDir::new().unwrap();
        let sounds = tmp.path().join("assets/sounds");
        fs::create_dir_all(&sounds).unwrap();
        fs::write(sounds.join("click.mp3"), b"click").unwrap();
        fs::write(sounds.join("hover.mp3"), b"hover").unwrap();
        fs::write(tmp.path().join("assets/.DS_Store"), b"junk").unwrap();

        let out = tmp.path().join("dist");
        let report = generate(tmp.path(), &out, &SiteConfig::default(), &stock()).unwrap();
        assert_eq!(report.assets, 2);
        assert_eq!(fs::read(out.join("sounds/click.mp3")).unwrap(), b"click");
        assert!(!out.join(".DS_Store").exists());
    }

    #[test]
    fn generate_rejects_invalid_catalog() {
        let tmp = TempDir::new().unwrap();
        let catalog = Catalog {
            projects: vec![project("a"), project("a")],
            ..Default::default()
        };
        let err = generate(tmp.path(), &tmp.path().join("dist"), &SiteConfig::default(), &catalog)
            .unwrap_err();
        assert!(matches!(err, GenerateError::Catalog(_)));
    }

    #[test]
    fn post_id_cannot_escape_blog_directory() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("dist");
        let mut catalog = stock();
        catalog.posts[0].id = "../about".to_string();
        let err = generate(tmp.path(), &out, &SiteConfig::default(), &catalog).unwrap_err();
        assert!(matches!(
            err,
            GenerateError::Catalog(CatalogError::InvalidId { list: "posts", .. })
        ));
        assert!(!out.join("about/index.html").exists());
    }

    #[test]
    fn every_generated_post_resolves_back_to_itself() {
        for page in site_pages(&stock()) {
            if let Some(path) = page.path() {
                assert_eq!(routes::resolve(&path), page);
            }
        }
    }
}
