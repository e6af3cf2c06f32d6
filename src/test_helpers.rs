//! Shared test utilities for the cyberfolio test suite.
//!
//! - [`RecordingEffects`] captures every UI side effect in order, so state
//!   machine tests can assert on sounds and document-root changes.
//! - [`FakeDelivery`] stands in for the email service: it records payloads
//!   and resolves or rejects on demand.
//! - [`project`] and friends build minimal catalog records.

use std::sync::Mutex;

use crate::catalog::{Catalog, Project};
use crate::contact::{ContactPayload, DeliveryError, MessageDelivery};
use crate::ui::{SoundKind, UiEffects};

// =========================================================================
// UI effects
// =========================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Sound(SoundKind),
    Class(String, bool),
    Attribute(String, String),
}

#[derive(Debug, Default)]
pub struct RecordingEffects {
    pub effects: Vec<Effect>,
}

impl RecordingEffects {
    pub fn sounds(&self) -> Vec<SoundKind> {
        self.effects
            .iter()
            .filter_map(|e| match e {
                Effect::Sound(s) => Some(*s),
                _ => None,
            })
            .collect()
    }
}

impl UiEffects for RecordingEffects {
    fn play(&mut self, sound: SoundKind) {
        self.effects.push(Effect::Sound(sound));
    }

    fn set_root_class(&mut self, class: &str, on: bool) {
        self.effects.push(Effect::Class(class.to_string(), on));
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        self.effects
            .push(Effect::Attribute(name.to_string(), value.to_string()));
    }
}

// =========================================================================
// Message delivery
// =========================================================================

/// Delivery double. `fail = true` rejects every payload.
#[derive(Debug, Default)]
pub struct FakeDelivery {
    pub fail: bool,
    pub delivered: Mutex<Vec<ContactPayload>>,
}

impl FakeDelivery {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.delivered.lock().unwrap().len()
    }
}

impl MessageDelivery for FakeDelivery {
    async fn deliver(&self, payload: &ContactPayload) -> Result<(), DeliveryError> {
        self.delivered.lock().unwrap().push(payload.clone());
        if self.fail {
            Err(DeliveryError::Rejected {
                status: 400,
                body: "The service ID is invalid".into(),
            })
        } else {
            Ok(())
        }
    }
}

// =========================================================================
// Catalog records
// =========================================================================

pub fn project(id: &str) -> Project {
    Project {
        id: id.to_string(),
        title: format!("Project {id}"),
        year: "2024".to_string(),
        description: format!("About {id}"),
        tech: vec!["Rust".to_string()],
        features: vec![format!("{id} feature")],
        github: Some(format!("https://github.com/example/{id}")),
        demo: None,
    }
}

/// The stock catalog, which every rendering test can rely on.
pub fn stock() -> Catalog {
    crate::catalog::stock_catalog().unwrap()
}
