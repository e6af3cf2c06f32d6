//! # Cyberfolio
//!
//! A static generator for a personal portfolio site: a fixed set of pages
//! (home, about, projects, certifications, tools, blog, contact) rendered
//! from a single content catalog, with client-side theme toggles, detail
//! modals, and a contact form delivered through EmailJS.
//!
//! # Architecture
//!
//! ```text
//! content/config.toml  ─┐
//! content/catalog.toml ─┼─▶  generate  ─▶  dist/  (one HTML file per route)
//! content/assets/      ─┘
//! ```
//!
//! The interactive behavior of the generated pages is modeled in Rust first
//! ([`ui`], [`overlay`], [`contact`]) as explicit state machines with
//! injected side effects, and the page script mirrors those rules. The same
//! contact dispatcher also backs the `send-message` subcommand.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`routes`] | Route table, path resolution, and the navbar menu tree |
//! | [`catalog`] | `catalog.toml` records: projects, certifications, tools, posts, ... |
//! | [`config`] | `config.toml` loading, validation, merging, and theme CSS generation |
//! | [`ui`] | Preferences (dark mode, theme, sound) and navigation state |
//! | [`overlay`] | Detail selection and the dismissible modal overlay |
//! | [`contact`] | Contact form state machine and cancellable dispatch |
//! | [`emailjs`] | Message delivery over the EmailJS REST API |
//! | [`generate`] | Renders every route to HTML using Maud |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## No Persisted Preferences
//!
//! Dark mode, theme and sound start from the configured defaults on every
//! page load and are never written to storage. The generated script keeps
//! them in memory only.
//!
//! ## One Catalog
//!
//! Every page draws from the same [`catalog::Catalog`]. The home page's
//! project and certification teasers are views over the same records as the
//! full pages, so text never drifts between them.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time HTML
//! macro system. Malformed templates are build errors and all interpolation is
//! auto-escaped, which matters here because every string comes from a
//! hand-edited TOML file.
//!
//! ## Dismissible Overlays
//!
//! All detail modals share one click rule: the backdrop closes, the panel
//! absorbs. [`overlay::DismissibleOverlay`] states it once and
//! [`overlay::overlay_markup`] is the only place that emits the markup the
//! page script keys on.
//!
//! ## Cancellable Dispatch
//!
//! Contact delivery returns a [`contact::DispatchHandle`] wrapping the tokio
//! task. Nothing cancels it today; a cancelled dispatch settles back to
//! `Idle` with the draft intact.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod emailjs;
pub mod generate;
pub mod output;
pub mod overlay;
pub mod routes;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_helpers;
