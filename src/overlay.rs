//! Detail selection and the dismissible overlay.
//!
//! Every card list that can show a detail modal composes two pieces:
//!
//! - [`DetailSelection`]: which entry (by id) is open. Opening one replaces
//!   whatever was open, so at most one entry per list is selected.
//! - [`DismissibleOverlay`]: the click rule for the modal. A click on the
//!   backdrop closes it; a click anywhere inside the panel is absorbed.
//!
//! The generated site implements the same rule in `static/site.js`
//! (`[data-overlay]` closes, `[data-overlay-panel]` stops propagation), and
//! [`overlay_markup`] is the single place that emits those attributes.

use crate::catalog::CatalogEntry;
use crate::ui::{Preferences, SoundKind, UiEffects};
use maud::{Markup, html};

/// Where a click inside an open overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the panel.
    Backdrop,
    /// Anything inside the modal panel, including its children.
    Panel,
}

/// What the overlay did with a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Dismissed,
    Absorbed,
}

/// Click-containment rule shared by all modals.
pub trait DismissibleOverlay {
    fn is_open(&self) -> bool;
    fn dismiss(&mut self, prefs: &Preferences, fx: &mut dyn UiEffects);

    /// Route a click. Panel clicks never reach [`dismiss`](Self::dismiss).
    fn handle_click(
        &mut self,
        target: ClickTarget,
        prefs: &Preferences,
        fx: &mut dyn UiEffects,
    ) -> ClickOutcome {
        match target {
            ClickTarget::Panel => ClickOutcome::Absorbed,
            ClickTarget::Backdrop => {
                if self.is_open() {
                    self.dismiss(prefs, fx);
                }
                ClickOutcome::Dismissed
            }
        }
    }
}

/// The open detail for one list of catalog entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailSelection {
    selected: Option<String>,
}

impl DetailSelection {
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Open `entry`, implicitly closing any other open entry.
    pub fn open_detail<E: CatalogEntry + ?Sized>(
        &mut self,
        entry: &E,
        prefs: &Preferences,
        fx: &mut dyn UiEffects,
    ) {
        self.selected = Some(entry.id().to_string());
        prefs.cue(SoundKind::Click, fx);
    }

    pub fn close_detail(&mut self, prefs: &Preferences, fx: &mut dyn UiEffects) {
        self.selected = None;
        prefs.cue(SoundKind::Click, fx);
    }

    /// Look the selected id up in `entries`.
    pub fn current<'a, E: CatalogEntry>(&self, entries: &'a [E]) -> Option<&'a E> {
        let id = self.selected.as_deref()?;
        entries.iter().find(|e| e.id() == id)
    }
}

impl DismissibleOverlay for DetailSelection {
    fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    fn dismiss(&mut self, prefs: &Preferences, fx: &mut dyn UiEffects) {
        self.close_detail(prefs, fx);
    }
}

/// DOM id of the overlay for entry `id` in list `list`.
pub fn overlay_id(list: &str, id: &str) -> String {
    format!("{list}-{id}-detail")
}

/// Render a hidden modal overlay wrapping `panel`.
///
/// The backdrop carries `data-overlay`, the panel `data-overlay-panel`; the
/// site script uses those to apply the click rule.
pub fn overlay_markup(dom_id: &str, label: &str, panel: Markup) -> Markup {
    html! {
        div.overlay id=(dom_id) data-overlay hidden role="dialog" aria-modal="true" aria-label=(label) {
            div.overlay-panel data-overlay-panel {
                (panel)
                button.overlay-close type="button" data-overlay-close { "Close" }
            }
        }
    }
}

/// The trigger button that opens overlay `dom_id`.
pub fn open_button(dom_id: &str, label: &str) -> Markup {
    html! {
        button.learn-more type="button" data-overlay-open=(dom_id) aria-label=(label) {
            "Learn More"
        }
    }
}
