//! Items service for institution connections.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use super::resource_path;
use crate::client::ClientInner;
use crate::models::{CreateItemRequest, DeleteCount, Item, ItemId, UpdateItemRequest};
use crate::Result;

/// Service for item operations.
///
/// Creating or updating an item starts an asynchronous sync at the
/// institution; poll [`get`](Self::get) or register a webhook to follow it.
///
/// # Example
///
/// ```no_run
/// use pluggy_rs::models::CreateItemRequest;
///
/// # async fn example(client: pluggy_rs::PluggyClient) -> pluggy_rs::Result<()> {
/// let request = CreateItemRequest::new(201)
///     .with_parameter("user", "user-ok")
///     .with_parameter("password", "password-ok");
///
/// let item = client.items().create(&request).await?;
/// println!("Created item {} ({:?})", item.id, item.status);
/// # Ok(())
/// # }
/// ```
pub struct ItemsService {
    inner: Arc<ClientInner>,
}

impl ItemsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Connect a new item.
    pub async fn create(&self, request: &CreateItemRequest) -> Result<Item> {
        let item: Item = self.inner.post("/items", request).await?;
        tracing::info!(item = %item.id, connector = request.connector_id, "item created");
        Ok(item)
    }

    /// Get an item.
    pub async fn get(&self, id: &ItemId) -> Result<Item> {
        self.inner.get(&resource_path("/items", id.as_str())?).await
    }

    /// Update an item's parameters or references and trigger a new sync.
    pub async fn update(&self, id: &ItemId, request: &UpdateItemRequest) -> Result<Item> {
        self.inner
            .patch(&resource_path("/items", id.as_str())?, request)
            .await
    }

    /// Delete an item and all data collected through it.
    pub async fn delete(&self, id: &ItemId) -> Result<DeleteCount> {
        let deleted: DeleteCount = self
            .inner
            .delete(&resource_path("/items", id.as_str())?)
            .await?;
        tracing::info!(item = %id, count = deleted.count, "item deleted");
        Ok(deleted)
    }

    /// Answer a multi-factor challenge for an item waiting on user input.
    pub async fn send_mfa(&self, id: &ItemId, values: &HashMap<String, Value>) -> Result<Item> {
        let path = format!("{}/mfa", resource_path("/items", id.as_str())?);
        self.inner.post(&path, values).await
    }
}
