//! Webhook subscription models.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A webhook registered for the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    /// Primary identifier
    pub id: String,
    /// Listener URL
    pub url: String,
    /// Event name, e.g. `item/updated` or `all`
    pub event: String,
    /// When the webhook was disabled after repeated delivery failures
    pub disabled_at: Option<DateTime<Utc>>,
    /// When the webhook was created
    pub created_at: Option<DateTime<Utc>>,
    /// When the webhook was last updated
    pub updated_at: Option<DateTime<Utc>>,
}

impl Webhook {
    /// Returns `true` unless the API disabled the webhook.
    pub fn is_enabled(&self) -> bool {
        self.disabled_at.is_none()
    }
}

/// Body of webhook create and update calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    /// Listener URL
    pub url: String,
    /// Event to subscribe to
    pub event: String,
    /// Extra HTTP headers sent with each notification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}

impl WebhookRequest {
    /// Subscribe `url` to `event`.
    pub fn new(url: impl Into<String>, event: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            event: event.into(),
            headers: None,
        }
    }

    /// Add a header sent with each notification.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }
}
