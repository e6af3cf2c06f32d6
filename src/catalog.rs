//! Content catalog: the hand-authored records every page renders.
//!
//! The catalog is read from `catalog.toml` in the content root. When no such
//! file exists the stock catalog compiled into the binary is used, so a bare
//! `cyberfolio build` always produces a complete site.
//!
//! ```toml
//! [[projects]]
//! id = "penetration-testing-suite"
//! title = "Automated Penetration Testing Suite"
//! year = "2024"
//! description = "..."
//! tech = ["Python", "Metasploit", "Nmap"]
//! features = ["Automated Nmap scanning for vulnerability detection."]
//! github = "https://github.com/..."
//!
//! [[tools]]
//! id = "nmap"
//! name = "Nmap"
//! category = "Cybersecurity"
//! ...
//! ```
//!
//! Records are immutable once loaded. Ids are unique within each list and
//! must be slugs (`[A-Za-z0-9_-]+`): they become output paths
//! (`blog/<id>/index.html`) and DOM ids.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

const STOCK_CATALOG: &str = include_str!("../static/catalog.toml");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid id `{id}` in {list}: only ASCII letters, digits, `-` and `_` are allowed")]
    InvalidId { list: &'static str, id: String },
    #[error("duplicate id `{id}` in {list}")]
    DuplicateId { list: &'static str, id: String },
    #[error("entry #{index} in {list} has an empty {field}")]
    EmptyField {
        list: &'static str,
        index: usize,
        field: &'static str,
    },
}

/// Common view over any catalog record.
pub trait CatalogEntry {
    fn id(&self) -> &str;
    fn title(&self) -> &str;
    fn description(&self) -> &str;
}

macro_rules! catalog_entry {
    ($ty:ty, $title:ident, $desc:ident) => {
        impl CatalogEntry for $ty {
            fn id(&self) -> &str {
                &self.id
            }
            fn title(&self) -> &str {
                &self.$title
            }
            fn description(&self) -> &str {
                &self.$desc
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub year: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub github: Option<String>,
    pub demo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Certification {
    pub id: String,
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub credential: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub use_case: String,
    pub proficiency: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    /// Markdown body. Posts without one still get a placeholder page.
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub details: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Experience {
    pub id: String,
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

catalog_entry!(Project, title, description);
catalog_entry!(Certification, title, description);
catalog_entry!(Tool, name, description);
catalog_entry!(BlogPost, title, excerpt);
catalog_entry!(Skill, name, description);
catalog_entry!(Education, institution, description);
catalog_entry!(Experience, role, description);

/// Owner profile shown on the home and about pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub summary: String,
    /// Markdown, rendered on the about page.
    pub bio: String,
}

/// Every list the site renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Catalog {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub tools: Vec<Tool>,
    pub posts: Vec<BlogPost>,
    pub skills: Vec<Skill>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
}

impl Catalog {
    /// Check that ids are present, slug-shaped and unique within each list.
    pub fn validate(&self) -> Result<(), CatalogError> {
        check_list("projects", &self.projects)?;
        check_list("certifications", &self.certifications)?;
        check_list("tools", &self.tools)?;
        check_list("posts", &self.posts)?;
        check_list("skills", &self.skills)?;
        check_list("education", &self.education)?;
        check_list("experience", &self.experience)?;
        Ok(())
    }

    pub fn post(&self, id: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Tool categories in first-seen order, each with its tools.
    pub fn tools_by_category(&self) -> Vec<(&str, Vec<&Tool>)> {
        let mut groups: Vec<(&str, Vec<&Tool>)> = Vec::new();
        for tool in &self.tools {
            match groups.iter_mut().find(|(c, _)| *c == tool.category) {
                Some((_, tools)) => tools.push(tool),
                None => groups.push((tool.category.as_str(), vec![tool])),
            }
        }
        groups
    }
}

fn check_list<E: CatalogEntry>(list: &'static str, entries: &[E]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for (index, entry) in entries.iter().enumerate() {
        if entry.id().trim().is_empty() {
            return Err(CatalogError::EmptyField {
                list,
                index,
                field: "id",
            });
        }
        if !is_slug(entry.id()) {
            return Err(CatalogError::InvalidId {
                list,
                id: entry.id().to_string(),
            });
        }
        if entry.title().trim().is_empty() {
            return Err(CatalogError::EmptyField {
                list,
                index,
                field: "title",
            });
        }
        if !seen.insert(entry.id()) {
            return Err(CatalogError::DuplicateId {
                list,
                id: entry.id().to_string(),
            });
        }
    }
    Ok(())
}

fn is_slug(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Parse and validate a catalog from TOML text.
pub fn parse_catalog(content: &str) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = toml::from_str(content)?;
    catalog.validate()?;
    Ok(catalog)
}

/// The catalog compiled into the binary.
pub fn stock_catalog() -> Result<Catalog, CatalogError> {
    parse_catalog(STOCK_CATALOG)
}

/// Raw text of the stock catalog, for `gen-catalog`.
pub fn stock_catalog_toml() -> &'static str {
    STOCK_CATALOG
}

/// Load `catalog.toml` from `root`, falling back to the stock catalog.
pub fn load_catalog(root: &Path) -> Result<Catalog, CatalogError> {
    let path = root.join("catalog.toml");
    if !path.exists() {
        tracing::debug!("no catalog.toml in {}, using stock catalog", root.display());
        return stock_catalog();
    }
    let content = fs::read_to_string(&path)?;
    parse_catalog(&content)
}
