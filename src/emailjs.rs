//! EmailJS delivery over HTTPS.
//!
//! EmailJS accepts a JSON POST naming a service, a template and the
//! account's public key, with the form fields as template parameters. Any
//! 2xx is a delivery; anything else is surfaced as
//! [`DeliveryError::Rejected`] with the response body, which EmailJS fills
//! with a human-readable reason.

use crate::config::ContactConfig;
use crate::contact::{ContactPayload, DeliveryError, MessageDelivery};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactPayload,
}

/// Message delivery through the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    http: reqwest::Client,
    config: ContactConfig,
}

impl EmailJsClient {
    /// Build a client. Fails with `NotConfigured` when any id is missing.
    pub fn new(config: ContactConfig) -> Result<Self, DeliveryError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("cyberfolio/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Self::with_client(config, http)
    }

    /// Build a client around an existing `reqwest::Client`.
    pub fn with_client(config: ContactConfig, http: reqwest::Client) -> Result<Self, DeliveryError> {
        if !config.is_configured() {
            return Err(DeliveryError::NotConfigured);
        }
        Ok(Self { http, config })
    }

    fn request<'a>(&'a self, payload: &'a ContactPayload) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.user_id,
            template_params: payload,
        }
    }
}

impl MessageDelivery for EmailJsClient {
    async fn deliver(&self, payload: &ContactPayload) -> Result<(), DeliveryError> {
        debug!(endpoint = %self.config.endpoint, "posting to EmailJS");
        let resp = self
            .http
            .post(&self.config.endpoint)
            .json(&self.request(payload))
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                debug!(error = %e, "failed to read EmailJS error body");
                String::new()
            }
        };
        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
