//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! overridden by a `config.toml` in the content root, and the contact ids can
//! be overridden again from the environment.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown by `cyberfolio gen-config`
//!
//! [site]
//! title = "CyberPortfolio"
//! github = "https://github.com/yogeshwaranEvil"
//!
//! [preferences]
//! dark_mode = false        # Initial state on every load (never persisted)
//! theme = "cyberpunk"      # cyberpunk | minimal | retro
//! sound_enabled = false
//!
//! [colors.cyberpunk.light]
//! accent = "#ef4444"
//!
//! [contact]
//! endpoint = "https://api.emailjs.com/api/v1.0/email/send"
//! service_id = ""
//! template_id = ""
//! user_id = ""
//! ```
//!
//! ## Environment
//!
//! `CYBERFOLIO_EMAILJS_SERVICE_ID`, `CYBERFOLIO_EMAILJS_TEMPLATE_ID` and
//! `CYBERFOLIO_EMAILJS_USER_ID` take precedence over the `[contact]` table,
//! so credentials can stay out of the content repository.
//!
//! Unknown keys are rejected to catch typos early.

use crate::ui::{Preferences, Theme};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const ENV_SERVICE_ID: &str = "CYBERFOLIO_EMAILJS_SERVICE_ID";
pub const ENV_TEMPLATE_ID: &str = "CYBERFOLIO_EMAILJS_TEMPLATE_ID";
pub const ENV_USER_ID: &str = "CYBERFOLIO_EMAILJS_USER_ID";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults; a user file only lists what it overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity and social links.
    pub site: SiteInfo,
    /// Initial UI preferences for every fresh page load.
    pub preferences: Preferences,
    /// Palette per theme, each with light and dark variants.
    pub colors: ThemeColors,
    /// Contact form delivery settings.
    pub contact: ContactConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteInfo::default(),
            preferences: Preferences::default(),
            colors: ThemeColors::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation("site.title must not be empty".into()));
        }
        if !self.contact.endpoint.starts_with("https://")
            && !self.contact.endpoint.starts_with("http://")
        {
            return Err(ConfigError::Validation(
                "contact.endpoint must be an http(s) URL".into(),
            ));
        }
        for theme in Theme::ALL {
            let colors = self.colors.for_theme(theme);
            for (variant, scheme) in [("light", &colors.light), ("dark", &colors.dark)] {
                if scheme.fields().iter().any(|(_, v)| v.trim().is_empty()) {
                    return Err(ConfigError::Validation(format!(
                        "colors.{theme}.{variant} has an empty color"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Site identity and social links.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// Logo text and `<title>` suffix.
    pub title: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "CyberPortfolio".to_string(),
            email: "yogeshwaran.r2022lcse@sece.ac.in".to_string(),
            github: "https://github.com/yogeshwaranEvil".to_string(),
            linkedin: "https://linkedin.com/in/yogeshwaran".to_string(),
        }
    }
}

/// EmailJS delivery settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    /// EmailJS public key (called "user id" by the API).
    pub user_id: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.emailjs.com/api/v1.0/email/send".to_string(),
            service_id: String::new(),
            template_id: String::new(),
            user_id: String::new(),
        }
    }
}

impl ContactConfig {
    /// True when all three ids are set.
    pub fn is_configured(&self) -> bool {
        !self.service_id.is_empty() && !self.template_id.is_empty() && !self.user_id.is_empty()
    }

    /// Override ids from `lookup` (normally the process environment).
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let fields = [
            (ENV_SERVICE_ID, &mut self.service_id),
            (ENV_TEMPLATE_ID, &mut self.template_id),
            (ENV_USER_ID, &mut self.user_id),
        ];
        for (key, field) in fields {
            if let Some(value) = lookup(key).filter(|v| !v.is_empty()) {
                *field = value;
            }
        }
    }
}

/// Palettes for each theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeColors {
    pub cyberpunk: ColorConfig,
    pub minimal: ColorConfig,
    pub retro: ColorConfig,
}

impl ThemeColors {
    pub fn for_theme(&self, theme: Theme) -> &ColorConfig {
        match theme {
            Theme::Cyberpunk => &self.cyberpunk,
            Theme::Minimal => &self.minimal,
            Theme::Retro => &self.retro,
        }
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            cyberpunk: ColorConfig {
                light: ColorScheme::new(
                    "#f4f4f6", "#ffffff", "#111827", "#4b5563", "#ef4444", "#ec4899", "#e5e7eb",
                ),
                dark: ColorScheme::new(
                    "#0b0f19", "#111827", "#f3f4f6", "#9ca3af", "#ef4444", "#ec4899", "#1f2937",
                ),
            },
            minimal: ColorConfig {
                light: ColorScheme::new(
                    "#ffffff", "#f9fafb", "#111111", "#666666", "#333333", "#000000", "#e0e0e0",
                ),
                dark: ColorScheme::new(
                    "#0a0a0a", "#161616", "#eeeeee", "#999999", "#cccccc", "#ffffff", "#333333",
                ),
            },
            retro: ColorConfig {
                light: ColorScheme::new(
                    "#f3f0e0", "#fffbea", "#1c3d1c", "#4d6b4d", "#14532d", "#b45309", "#cbd5a0",
                ),
                dark: ColorScheme::new(
                    "#05170c", "#0b2414", "#a3e635", "#65a30d", "#22c55e", "#facc15", "#14532d",
                ),
            },
        }
    }
}

/// Light and dark variants of one theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

/// Individual color scheme.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background.
    pub background: String,
    /// Card and modal panel background.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Secondary text (dates, issuers, categories).
    pub text_muted: String,
    /// Links, buttons, headings.
    pub accent: String,
    /// Gradient partner for `accent`.
    pub accent_alt: String,
    pub border: String,
}

impl ColorScheme {
    fn new(
        background: &str,
        surface: &str,
        text: &str,
        text_muted: &str,
        accent: &str,
        accent_alt: &str,
        border: &str,
    ) -> Self {
        Self {
            background: background.to_string(),
            surface: surface.to_string(),
            text: text.to_string(),
            text_muted: text_muted.to_string(),
            accent: accent.to_string(),
            accent_alt: accent_alt.to_string(),
            border: border.to_string(),
        }
    }

    /// `(css variable suffix, value)` pairs in output order.
    fn fields(&self) -> [(&'static str, &str); 7] {
        [
            ("bg", self.background.as_str()),
            ("surface", self.surface.as_str()),
            ("text", self.text.as_str()),
            ("text-muted", self.text_muted.as_str()),
            ("accent", self.accent.as_str()),
            ("accent-alt", self.accent_alt.as_str()),
            ("border", self.border.as_str()),
        ]
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in `root`, then apply environment overrides.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    let mut config = resolve_config(base, overlay)?;
    config.contact.apply_env(|key| std::env::var(key).ok());
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# cyberfolio Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
title = "CyberPortfolio"
email = "yogeshwaran.r2022lcse@sece.ac.in"
github = "https://github.com/yogeshwaranEvil"
linkedin = "https://linkedin.com/in/yogeshwaran"

# ---------------------------------------------------------------------------
# Initial UI preferences
# ---------------------------------------------------------------------------
# Every page load starts from these values. Toggles are never persisted.
[preferences]
dark_mode = false
# One of: cyberpunk, minimal, retro (the theme button cycles in this order)
theme = "cyberpunk"
sound_enabled = false

# ---------------------------------------------------------------------------
# Contact form (EmailJS)
# ---------------------------------------------------------------------------
# The ids can also be supplied via CYBERFOLIO_EMAILJS_SERVICE_ID,
# CYBERFOLIO_EMAILJS_TEMPLATE_ID and CYBERFOLIO_EMAILJS_USER_ID.
[contact]
endpoint = "https://api.emailjs.com/api/v1.0/email/send"
service_id = ""
template_id = ""
user_id = ""

# ---------------------------------------------------------------------------
# Colors, per theme. `dark` applies while dark mode is toggled on.
# ---------------------------------------------------------------------------
[colors.cyberpunk.light]
background = "#f4f4f6"
surface = "#ffffff"
text = "#111827"
text_muted = "#4b5563"
accent = "#ef4444"
accent_alt = "#ec4899"
border = "#e5e7eb"

[colors.cyberpunk.dark]
background = "#0b0f19"
surface = "#111827"
text = "#f3f4f6"
text_muted = "#9ca3af"
accent = "#ef4444"
accent_alt = "#ec4899"
border = "#1f2937"

[colors.minimal.light]
background = "#ffffff"
surface = "#f9fafb"
text = "#111111"
text_muted = "#666666"
accent = "#333333"
accent_alt = "#000000"
border = "#e0e0e0"

[colors.minimal.dark]
background = "#0a0a0a"
surface = "#161616"
text = "#eeeeee"
text_muted = "#999999"
accent = "#cccccc"
accent_alt = "#ffffff"
border = "#333333"

[colors.retro.light]
background = "#f3f0e0"
surface = "#fffbea"
text = "#1c3d1c"
text_muted = "#4d6b4d"
accent = "#14532d"
accent_alt = "#b45309"
border = "#cbd5a0"

[colors.retro.dark]
background = "#05170c"
surface = "#0b2414"
text = "#a3e635"
text_muted = "#65a30d"
accent = "#22c55e"
accent_alt = "#facc15"
border = "#14532d"
"##
}

fn scheme_block(selector: &str, scheme: &ColorScheme) -> String {
    let mut css = format!("{selector} {{\n");
    for (name, value) in scheme.fields() {
        css.push_str(&format!("    --color-{name}: {value};\n"));
    }
    css.push('}');
    css
}

/// Generate CSS custom properties for every theme and dark-mode variant.
///
/// Themes are selected by the `data-theme` attribute on `<html>`, dark mode
/// by the `dark` class. The configured initial theme also applies when the
/// attribute is missing.
pub fn generate_color_css(colors: &ThemeColors, initial: Theme) -> String {
    let mut blocks = Vec::new();
    for theme in Theme::ALL {
        let palette = colors.for_theme(theme);
        let (light_sel, dark_sel) = if theme == initial {
            (
                format!(":root, :root[data-theme=\"{theme}\"]"),
                format!(":root.dark, :root.dark[data-theme=\"{theme}\"]"),
            )
        } else {
            (
                format!(":root[data-theme=\"{theme}\"]"),
                format!(":root.dark[data-theme=\"{theme}\"]"),
            )
        };
        blocks.push(scheme_block(&light_sel, &palette.light));
        blocks.push(scheme_block(&dark_sel, &palette.dark));
    }
    blocks.join("\n\n")
}
