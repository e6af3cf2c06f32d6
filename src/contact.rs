//! Contact form state and dispatch.
//!
//! The form is a small state machine:
//!
//! ```text
//! Idle ──submit (valid)──▶ Submitting ──delivered──▶ Idle (fields cleared)
//!   ▲                          │
//!   └──────────failed──────────┘ (fields kept for retry)
//! ```
//!
//! A submit with an empty field never leaves `Idle` and never reaches the
//! delivery collaborator. While `Submitting`, fields are read-only and a
//! second submit is refused.
//!
//! Delivery runs on the tokio runtime and is exposed as a [`DispatchHandle`].
//! Nothing cancels a dispatch today, but the handle can, and a cancelled
//! dispatch settles like a failure that keeps the draft. There is no retry,
//! no timeout, and no offline queue: one best-effort attempt per submit.

use crate::ui::{Preferences, SoundKind, UiEffects};
use serde::Serialize;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// One of the three form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        })
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("`{0}` is not an email address")]
    InvalidEmail(String),
    #[error("a message is already being sent")]
    Busy,
}

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("delivery service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("delivery service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("contact delivery is not configured")]
    NotConfigured,
    #[error("delivery task failed: {0}")]
    Aborted(String),
}

/// The validated form contents handed to the delivery collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// External message-delivery collaborator.
pub trait MessageDelivery {
    fn deliver(
        &self,
        payload: &ContactPayload,
    ) -> impl Future<Output = Result<(), DeliveryError>> + Send;
}

/// User-visible result of a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Sent,
    Failed,
}

impl Notification {
    pub fn message(self) -> &'static str {
        match self {
            Notification::Sent => "Message sent successfully!",
            Notification::Failed => "Failed to send message. Please try again.",
        }
    }
}

/// How a dispatch settled.
#[derive(Debug)]
pub enum DispatchOutcome {
    Delivered,
    Failed(DeliveryError),
    Cancelled,
}

/// In-flight delivery. Await [`settle`](Self::settle) for the outcome.
#[derive(Debug)]
pub struct DispatchHandle {
    task: JoinHandle<Result<(), DeliveryError>>,
}

impl DispatchHandle {
    /// Spawn delivery of `payload` on the current tokio runtime.
    pub fn spawn<D>(delivery: Arc<D>, payload: ContactPayload) -> Self
    where
        D: MessageDelivery + Send + Sync + 'static,
    {
        let task = tokio::spawn(async move { delivery.deliver(&payload).await });
        Self { task }
    }

    /// Abort the delivery. Settling afterwards yields `Cancelled` unless the
    /// delivery already finished.
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub async fn settle(self) -> DispatchOutcome {
        match self.task.await {
            Ok(Ok(())) => DispatchOutcome::Delivered,
            Ok(Err(err)) => DispatchOutcome::Failed(err),
            Err(err) if err.is_cancelled() => DispatchOutcome::Cancelled,
            Err(err) => DispatchOutcome::Failed(DeliveryError::Aborted(err.to_string())),
        }
    }
}

/// The form's editable contents plus the `submitting` flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormDraft {
    name: String,
    email: String,
    message: String,
    submitting: bool,
}

impl ContactFormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Edit one field. Refused while a submit is in flight.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), ContactError> {
        if self.submitting {
            return Err(ContactError::Busy);
        }
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
        Ok(())
    }

    /// Check required fields and build the payload. Does not change state.
    pub fn validate(&self) -> Result<ContactPayload, ContactError> {
        for field in Field::ALL {
            if self.field(field).trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        Ok(ContactPayload {
            name: self.name.clone(),
            email: self.email.trim().to_string(),
            message: self.message.clone(),
        })
    }

    /// `Idle → Submitting`. Returns the payload to dispatch.
    pub fn begin_submit(&mut self) -> Result<ContactPayload, ContactError> {
        if self.submitting {
            return Err(ContactError::Busy);
        }
        let payload = self.validate()?;
        self.submitting = true;
        Ok(payload)
    }

    /// `Submitting → Idle`. Clears the fields only on delivery.
    pub fn finish(&mut self, outcome: &DispatchOutcome) -> Notification {
        self.submitting = false;
        match outcome {
            DispatchOutcome::Delivered => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                Notification::Sent
            }
            DispatchOutcome::Failed(_) | DispatchOutcome::Cancelled => Notification::Failed,
        }
    }
}

/// The same shape check an `<input type="email">` applies: something on
/// both sides of a single `@`, no whitespace.
fn looks_like_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !s.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Owns a draft and the collaborator it is sent through.
pub struct ContactDispatcher<D> {
    delivery: Arc<D>,
    pub draft: ContactFormDraft,
}

impl<D> ContactDispatcher<D>
where
    D: MessageDelivery + Send + Sync + 'static,
{
    pub fn new(delivery: Arc<D>) -> Self {
        Self {
            delivery,
            draft: ContactFormDraft::new(),
        }
    }

    /// Validate, enter `Submitting`, and start delivery.
    ///
    /// Validation failures leave the form `Idle` and never call the
    /// collaborator.
    pub fn start(
        &mut self,
        prefs: &Preferences,
        fx: &mut dyn UiEffects,
    ) -> Result<DispatchHandle, ContactError> {
        let payload = self.draft.begin_submit()?;
        prefs.cue(SoundKind::Click, fx);
        info!(email = %payload.email, "dispatching contact message");
        Ok(DispatchHandle::spawn(Arc::clone(&self.delivery), payload))
    }

    /// Apply a settled dispatch to the draft.
    pub fn finish(&mut self, outcome: DispatchOutcome) -> Notification {
        match &outcome {
            DispatchOutcome::Delivered => info!("contact message delivered"),
            DispatchOutcome::Failed(err) => warn!(error = %err, "contact message failed"),
            DispatchOutcome::Cancelled => warn!("contact message cancelled"),
        }
        self.draft.finish(&outcome)
    }

    /// Start a dispatch and wait for it to settle.
    pub async fn submit(
        &mut self,
        prefs: &Preferences,
        fx: &mut dyn UiEffects,
    ) -> Result<Notification, ContactError> {
        let handle = self.start(prefs, fx)?;
        let outcome = handle.settle().await;
        Ok(self.finish(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{FakeDelivery, RecordingEffects};
    use crate::ui::NoEffects;

    fn filled(d: &mut ContactFormDraft, name: &str, email: &str, message: &str) {
        d.set_field(Field::Name, name).unwrap();
        d.set_field(Field::Email, email).unwrap();
        d.set_field(Field::Message, message).unwrap();
    }

    fn fields(d: &ContactFormDraft) -> [&str; 3] {
        [
            d.field(Field::Name),
            d.field(Field::Email),
            d.field(Field::Message),
        ]
    }

    #[tokio::test]
    async fn empty_name_never_reaches_delivery() {
        let delivery = Arc::new(FakeDelivery::default());
        let mut dispatcher = ContactDispatcher::new(Arc::clone(&delivery));
        filled(&mut dispatcher.draft, "", "ada@example.com", "Hello");

        let result = dispatcher
            .submit(&Preferences::default(), &mut NoEffects)
            .await;
        assert_eq!(result, Err(ContactError::MissingField(Field::Name)));
        assert_eq!(delivery.calls(), 0);
        assert!(!dispatcher.draft.is_submitting());
    }

    #[tokio::test]
    async fn whitespace_only_counts_as_empty() {
        let delivery = Arc::new(FakeDelivery::default());
        let mut dispatcher = ContactDispatcher::new(Arc::clone(&delivery));
        filled(&mut dispatcher.draft, "Ada", "ada@example.com", "   ");
        let result = dispatcher
            .submit(&Preferences::default(), &mut NoEffects)
            .await;
        assert_eq!(result, Err(ContactError::MissingField(Field::Message)));
        assert_eq!(delivery.calls(), 0);
    }

    #[tokio::test]
    async fn successful_delivery_clears_form() {
        let delivery = Arc::new(FakeDelivery::default());
        let mut dispatcher = ContactDispatcher::new(Arc::clone(&delivery));
        filled(&mut dispatcher.draft, "Ada", "ada@example.com", "Hello");

        let note = dispatcher
            .submit(&Preferences::default(), &mut NoEffects)
            .await
            .unwrap();
        assert_eq!(note, Notification::Sent);
        assert_eq!(fields(&dispatcher.draft), ["", "", ""]);
        assert!(!dispatcher.draft.is_submitting());
        assert_eq!(
            delivery.delivered.lock().unwrap()[0],
            ContactPayload {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                message: "Hello".into(),
            }
        );
    }

    #[tokio::test]
    async fn failed_delivery_keeps_fields_for_retry() {
        let delivery = Arc::new(FakeDelivery::failing());
        let mut dispatcher = ContactDispatcher::new(Arc::clone(&delivery));
        filled(&mut dispatcher.draft, "Ada", "ada@example.com", "Hello");

        let note = dispatcher
            .submit(&Preferences::default(), &mut NoEffects)
            .await
            .unwrap();
        assert_eq!(note, Notification::Failed);
        assert_eq!(fields(&dispatcher.draft), ["Ada", "ada@example.com", "Hello"]);
        assert!(!dispatcher.draft.is_submitting());

        // Retry goes through again
        dispatcher
            .submit(&Preferences::default(), &mut NoEffects)
            .await
            .unwrap();
        assert_eq!(delivery.calls(), 2);
    }

    #[tokio::test]
    async fn fields_are_read_only_while_submitting() {
        let delivery = Arc::new(FakeDelivery::default());
        let mut dispatcher = ContactDispatcher::new(delivery);
        filled(&mut dispatcher.draft, "Ada", "ada@example.com", "Hello");

        let handle = dispatcher
            .start(&Preferences::default(), &mut NoEffects)
            .unwrap();
        assert!(dispatcher.draft.is_submitting());
        assert_eq!(
            dispatcher.draft.set_field(Field::Name, "Eve"),
            Err(ContactError::Busy)
        );
        assert!(matches!(
            dispatcher.start(&Preferences::default(), &mut NoEffects),
            Err(ContactError::Busy)
        ));

        let outcome = handle.settle().await;
        dispatcher.finish(outcome);
        assert!(dispatcher.draft.set_field(Field::Name, "Eve").is_ok());
    }

    #[test]
    fn cancelled_dispatch_keeps_draft() {
        let mut draft = ContactFormDraft::new();
        filled(&mut draft, "Ada", "ada@example.com", "Hello");
        draft.begin_submit().unwrap();
        let note = draft.finish(&DispatchOutcome::Cancelled);
        assert_eq!(note, Notification::Failed);
        assert_eq!(fields(&draft), ["Ada", "ada@example.com", "Hello"]);
        assert!(!draft.is_submitting());
    }

    #[tokio::test]
    async fn cancel_before_delivery_settles_cancelled() {
        struct Never;
        impl MessageDelivery for Never {
            async fn deliver(&self, _payload: &ContactPayload) -> Result<(), DeliveryError> {
                std::future::pending::<()>().await;
                Ok(())
            }
        }

        let payload = ContactPayload {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello".into(),
        };
        let handle = DispatchHandle::spawn(Arc::new(Never), payload);
        handle.cancel();
        assert!(matches!(handle.settle().await, DispatchOutcome::Cancelled));
    }

    #[tokio::test]
    async fn submit_clicks_when_sound_enabled() {
        let mut dispatcher = ContactDispatcher::new(Arc::new(FakeDelivery::default()));
        filled(&mut dispatcher.draft, "Ada", "ada@example.com", "Hello");
        let prefs = Preferences {
            sound_enabled: true,
            ..Default::default()
        };
        let mut fx = RecordingEffects::default();
        dispatcher.submit(&prefs, &mut fx).await.unwrap();
        assert_eq!(fx.sounds(), vec![SoundKind::Click]);
    }

    #[test]
    fn email_shape_check() {
        assert!(looks_like_email("ada@example.com"));
        assert!(looks_like_email("a@b"));
        assert!(!looks_like_email("ada.example.com"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("ada@"));
        assert!(!looks_like_email("a@b@c"));
        assert!(!looks_like_email("ada @example.com"));
    }

    #[test]
    fn invalid_email_blocks_submit() {
        let mut draft = ContactFormDraft::new();
        filled(&mut draft, "Ada", "not-an-email", "Hello");
        assert_eq!(
            draft.begin_submit(),
            Err(ContactError::InvalidEmail("not-an-email".into()))
        );
        assert!(!draft.is_submitting());
    }

    #[test]
    fn notification_text() {
        assert_eq!(Notification::Sent.message(), "Message sent successfully!");
        assert!(Notification::Failed.message().contains("try again"));
    }
}
