//! Item (institution connection) models.

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_yaml::{Mapping, Value as YamlValue};

use super::enums::{ExecutionStatus, ItemStatus};
use super::primitives::ItemId;
use crate::error::{Error, Result};

/// A connection between a user and one financial institution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Primary identifier
    pub id: String,
    /// Display name
    pub name: Option<String>,
    /// Connector used to reach the institution
    pub connector_id: Option<u64>,
    /// Connection status
    pub status: Option<ItemStatus>,
    /// Outcome of the last execution
    pub execution_status: Option<ExecutionStatus>,
    /// Parameter names expected by the connector
    pub parameter_names: Option<HashMap<String, Value>>,
    /// Error of the last execution, if it failed
    pub error: Option<ItemError>,
    /// Webhook notified about this item
    pub webhook_url: Option<String>,
    /// Caller-side user reference
    pub client_user_id: Option<String>,
    /// When the item was created
    pub created_at: Option<DateTime<Utc>>,
    /// When the item was last modified
    pub updated_at: Option<DateTime<Utc>>,
    /// When data was last collected successfully
    pub last_updated_at: Option<DateTime<Utc>>,
}

impl Item {
    /// Get the item ID as a strongly-typed value.
    pub fn item_id(&self) -> ItemId {
        ItemId::new(&self.id)
    }

    /// Returns `true` if the item is waiting on the user (MFA, new credentials).
    pub fn needs_user_action(&self) -> bool {
        self.status.map_or(false, |s| s.needs_user_action())
    }
}

/// Error reported for the last item execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemError {
    /// Error code, e.g. INVALID_CREDENTIALS
    pub code: Option<String>,
    /// Human-readable message
    pub message: Option<String>,
}

/// Body of `POST /items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    /// Connector to use
    pub connector_id: u64,
    /// Credentials and other connector parameters
    pub parameters: HashMap<String, Value>,
    /// Webhook to notify about item updates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    /// Caller-side user reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_user_id: Option<String>,
}

impl CreateItemRequest {
    /// Connect through `connector_id` with no parameters yet.
    pub fn new(connector_id: u64) -> Self {
        Self {
            connector_id,
            parameters: HashMap::new(),
            webhook_url: None,
            client_user_id: None,
        }
    }

    /// Add a connector parameter (e.g. `user`, `password`).
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Set the webhook notified about this item.
    pub fn with_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = Some(url.into());
        self
    }

    /// Set the caller-side user reference.
    pub fn with_client_user_id(mut self, id: impl Into<String>) -> Self {
        self.client_user_id = Some(id.into());
        self
    }
}

/// Body of `PATCH /items/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    /// New credentials or parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, Value>>,
    /// New webhook
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    /// New caller-side user reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_user_id: Option<String>,
}

/// A named item reference, as kept in a local `name: id` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRef {
    /// Label chosen by the user
    pub name: String,
    /// Item identifier
    pub id: ItemId,
}

impl ItemRef {
    /// Parse a YAML mapping of `name: id` pairs, keeping file order.
    ///
    /// Comments and quoting follow YAML rules. Numeric ids are accepted
    /// and kept as text; an empty document yields no items.
    ///
    /// # Example
    ///
    /// ```
    /// use pluggy_rs::models::ItemRef;
    ///
    /// let refs = ItemRef::parse_list("nubank: 1234\n# comment\nitau : '5678' # sandbox").unwrap();
    /// assert_eq!(refs.len(), 2);
    /// assert_eq!(refs[1].name, "itau");
    /// assert_eq!(refs[1].id.as_str(), "5678");
    /// ```
    pub fn parse_list(text: &str) -> Result<Vec<ItemRef>> {
        let mapping: Option<Mapping> = serde_yaml::from_str(text)?;

        mapping
            .unwrap_or_default()
            .into_iter()
            .map(|(name, id)| {
                Ok(ItemRef {
                    name: scalar_text(name)?,
                    id: ItemId::new(scalar_text(id)?),
                })
            })
            .collect()
    }

    /// Read and parse an item list file.
    pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<ItemRef>> {
        let text = std::fs::read_to_string(path)?;
        Self::parse_list(&text)
    }
}

fn scalar_text(value: YamlValue) -> Result<String> {
    let text = match value {
        YamlValue::String(s) => s,
        YamlValue::Number(n) => n.to_string(),
        other => {
            return Err(Error::Config(format!(
                "item list entries must be `name: id` scalars, got {other:?}"
            )))
        }
    };
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::Config("item list has a blank name or id".to_string()));
    }
    Ok(text.to_string())
}
