//! Interactive UI state: preference toggles and navigation state.
//!
//! State lives in an explicit [`UiState`] value that the caller owns and
//! passes to whatever needs it. Nothing here touches a global. Every side
//! effect (playing a sound, marking the document root) goes through the
//! [`UiEffects`] collaborator handed to each toggle.
//!
//! ## Persistence
//!
//! Preferences are not persisted. A fresh load starts from
//! [`Preferences::default`] (or the site's configured defaults) every time.
//! The generated site follows the same rule: the toggle script keeps its
//! state in memory only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Class marker placed on the document root while dark mode is on.
pub const DARK_CLASS: &str = "dark";
/// Document root attribute holding the current theme name.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Visual theme. Cycles in declaration order and wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Cyberpunk,
    Minimal,
    Retro,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Cyberpunk, Theme::Minimal, Theme::Retro];

    pub fn next(self) -> Theme {
        match self {
            Theme::Cyberpunk => Theme::Minimal,
            Theme::Minimal => Theme::Retro,
            Theme::Retro => Theme::Cyberpunk,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Cyberpunk => "cyberpunk",
            Theme::Minimal => "minimal",
            Theme::Retro => "retro",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sound cue tag passed to the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundKind {
    Hover,
    Click,
}

impl SoundKind {
    /// Site-relative URL of the audio file for this cue.
    pub fn asset_path(self) -> &'static str {
        match self {
            SoundKind::Hover => "/sounds/hover.mp3",
            SoundKind::Click => "/sounds/click.mp3",
        }
    }
}

/// Side effects the UI state machine asks its host to perform.
///
/// All calls are fire-and-forget; nothing is returned.
pub trait UiEffects {
    fn play(&mut self, sound: SoundKind);
    fn set_root_class(&mut self, class: &str, on: bool);
    fn set_root_attribute(&mut self, name: &str, value: &str);
}

/// Effects sink that drops everything. Useful for headless callers.
#[derive(Debug, Default)]
pub struct NoEffects;

impl UiEffects for NoEffects {
    fn play(&mut self, _sound: SoundKind) {}
    fn set_root_class(&mut self, _class: &str, _on: bool) {}
    fn set_root_attribute(&mut self, _name: &str, _value: &str) {}
}

/// Process-wide preferences: dark mode, theme, sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Preferences {
    pub dark_mode: bool,
    pub theme: Theme,
    pub sound_enabled: bool,
}

impl Preferences {
    pub fn toggle_dark_mode(&mut self, fx: &mut dyn UiEffects) {
        self.dark_mode = !self.dark_mode;
        fx.set_root_class(DARK_CLASS, self.dark_mode);
    }

    pub fn toggle_theme(&mut self, fx: &mut dyn UiEffects) {
        self.theme = self.theme.next();
        fx.set_root_attribute(THEME_ATTRIBUTE, self.theme.as_str());
        self.cue(SoundKind::Click, fx);
    }

    /// Flip sound on/off. Turning it on plays a confirmation click.
    pub fn toggle_sound(&mut self, fx: &mut dyn UiEffects) {
        self.sound_enabled = !self.sound_enabled;
        self.cue(SoundKind::Click, fx);
    }

    /// Play `sound` only when sound is enabled.
    pub fn cue(&self, sound: SoundKind, fx: &mut dyn UiEffects) {
        if self.sound_enabled {
            fx.play(sound);
        }
    }
}

/// Navbar state: which dropdown is open and whether the mobile menu is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    /// At most one dropdown is open at a time.
    pub active_dropdown: Option<usize>,
    pub mobile_menu_open: bool,
}

/// Full interactive state for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub prefs: Preferences,
    pub nav: NavState,
}

impl UiState {
    pub fn new(prefs: Preferences) -> Self {
        Self {
            prefs,
            nav: NavState::default(),
        }
    }

    /// Open dropdown `index`, or close it if it is already the open one.
    pub fn toggle_dropdown(&mut self, index: usize, fx: &mut dyn UiEffects) {
        self.nav.active_dropdown = if self.nav.active_dropdown == Some(index) {
            None
        } else {
            Some(index)
        };
        self.prefs.cue(SoundKind::Hover, fx);
    }

    pub fn close_dropdown(&mut self) {
        self.nav.active_dropdown = None;
    }

    pub fn toggle_mobile_menu(&mut self, fx: &mut dyn UiEffects) {
        self.nav.mobile_menu_open = !self.nav.mobile_menu_open;
        self.prefs.cue(SoundKind::Click, fx);
    }

    /// A menu link was followed: the mobile menu collapses.
    pub fn follow_link(&mut self, fx: &mut dyn UiEffects) {
        self.nav.mobile_menu_open = false;
        self.prefs.cue(SoundKind::Click, fx);
    }
}
