//! Identity service for account holder data.

use std::sync::Arc;

use super::{require_id, resource_path, ItemQuery};
use crate::client::ClientInner;
use crate::models::{Identity, ItemId};
use crate::Result;

/// Service for identity operations. Each item has at most one identity.
pub struct IdentityService {
    inner: Arc<ClientInner>,
}

impl IdentityService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the identity collected from an item.
    pub async fn find_by_item(&self, item_id: &ItemId) -> Result<Identity> {
        require_id("itemId", item_id.as_str())?;
        self.inner
            .get_with_query("/identity", &ItemQuery::new(item_id.clone()))
            .await
    }

    /// Get an identity by its own id.
    pub async fn get(&self, id: &str) -> Result<Identity> {
        self.inner.get(&resource_path("/identity", id)?).await
    }
}
