//! CLI output formatting for every subcommand.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (catalog entry, menu item, page) is its semantic identity
//! (title and positional index), with ids, paths and output files shown as
//! secondary context.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Catalog
//! 001 Projects (3 entries)
//!     001 Automated Penetration Testing Suite
//!         Id: penetration-testing-suite
//! ...
//!
//! Contact
//!     EmailJS: configured
//! ```
//!
//! ## Routes
//!
//! ```text
//! 001 Home / → Home
//! 003 Work
//!     001 Projects /projects → Projects
//! 005 CTF Challenges /ctf-challenges → Not Found
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//! Blog Post advanced-penetration-testing → blog/advanced-penetration-testing/index.html
//! Not Found → 404.html
//!
//! Generated 11 pages, 2 assets
//! ```
//!
//! # Architecture
//!
//! Each subcommand has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure and do no I/O.

use crate::catalog::{Catalog, CatalogEntry};
use crate::config::SiteConfig;
use crate::generate::GenerateReport;
use crate::routes::{self, Page, RouteDefinition};

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + title, with optional count.
///
/// ```text
/// 001 Projects (3 entries)
/// 003 Work
/// ```
fn entity_header(index: usize, title: &str, count: Option<usize>) -> String {
    match count {
        Some(1) => format!("{} {} (1 entry)", format_index(index), title),
        Some(n) => format!("{} {} ({} entries)", format_index(index), title, n),
        None => format!("{} {}", format_index(index), title),
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn entry_lines<E: CatalogEntry>(entries: &[E]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        lines.push(format!("{}{}", indent(1), entity_header(i + 1, entry.title(), None)));
        lines.push(format!("{}Id: {}", indent(2), entry.id()));
        if !entry.description().is_empty() {
            lines.push(format!(
                "{}Description: {}",
                indent(2),
                truncate_desc(entry.description(), 60)
            ));
        }
    }
    lines
}

fn section<E: CatalogEntry>(lines: &mut Vec<String>, index: usize, title: &str, entries: &[E]) {
    lines.push(entity_header(index, title, Some(entries.len())));
    lines.extend(entry_lines(entries));
}

// ============================================================================
// Check
// ============================================================================

/// Format `check` output: the catalog inventory plus config status.
pub fn format_check_output(config: &SiteConfig, catalog: &Catalog) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Profile".to_string());
    lines.push(format!("{}{}", indent(1), catalog.profile.name));
    if !catalog.profile.headline.is_empty() {
        lines.push(format!("{}{}", indent(1), catalog.profile.headline));
    }
    lines.push(String::new());

    lines.push("Catalog".to_string());
    section(&mut lines, 1, "Projects", &catalog.projects);
    section(&mut lines, 2, "Certifications", &catalog.certifications);
    section(&mut lines, 3, "Tools", &catalog.tools);
    section(&mut lines, 4, "Blog Posts", &catalog.posts);
    section(&mut lines, 5, "Skills", &catalog.skills);
    section(&mut lines, 6, "Education", &catalog.education);
    section(&mut lines, 7, "Experience", &catalog.experience);
    lines.push(String::new());

    lines.push("Preferences".to_string());
    let prefs = &config.preferences;
    lines.push(format!("{}Theme: {}", indent(1), prefs.theme));
    lines.push(format!("{}Dark mode: {}", indent(1), on_off(prefs.dark_mode)));
    lines.push(format!("{}Sound: {}", indent(1), on_off(prefs.sound_enabled)));
    lines.push(String::new());

    lines.push("Contact".to_string());
    let status = if config.contact.is_configured() {
        "configured"
    } else {
        "not configured"
    };
    lines.push(format!("{}EmailJS: {}", indent(1), status));
    lines.push(format!("{}Endpoint: {}", indent(1), config.contact.endpoint));

    lines
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

/// Print check output to stdout.
pub fn print_check_output(config: &SiteConfig, catalog: &Catalog) {
    for line in format_check_output(config, catalog) {
        println!("{}", line);
    }
}

// ============================================================================
// Routes
// ============================================================================

/// Format the navigation menu with the page each link resolves to.
pub fn format_routes(items: &[RouteDefinition]) -> Vec<String> {
    let mut lines = Vec::new();
    format_routes_recursive(items, 0, &mut lines);
    lines
}

fn format_routes_recursive(items: &[RouteDefinition], depth: usize, lines: &mut Vec<String>) {
    for (i, item) in items.iter().enumerate() {
        let header = entity_header(i + 1, item.name, None);
        match item.path {
            Some(path) => {
                let page = routes::resolve(path);
                lines.push(format!(
                    "{}{} {} \u{2192} {}",
                    indent(depth),
                    header,
                    path,
                    page.title()
                ));
            }
            None => lines.push(format!("{}{}", indent(depth), header)),
        }
        format_routes_recursive(&item.children, depth + 1, lines);
    }
}

/// Print the navigation menu to stdout.
pub fn print_routes(items: &[RouteDefinition]) {
    for line in format_routes(items) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

/// Format build output: each page and the file it was written to.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();
    for generated in &report.pages {
        let label = match &generated.page {
            Page::BlogPost(id) => format!("{} {}", generated.page.title(), id),
            page => page.title().to_string(),
        };
        lines.push(format!("{} \u{2192} {}", label, generated.file));
    }
    lines.push(String::new());
    lines.push(format!(
        "Generated {} pages, {} assets",
        report.pages.len(),
        report.assets
    ));
    lines
}

/// Print build output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
