//! Consents service for Open Finance consents.

use std::sync::Arc;

use super::{check_page_size, require_id, resource_path, ItemQuery};
use crate::client::paginated::{self, PaginatedStream, PaginatedStreamBuilder};
use crate::client::{ClientInner, Page, PageRequest};
use crate::models::Consent;
use crate::Result;

/// Service for consent operations.
pub struct ConsentsService {
    inner: Arc<ClientInner>,
}

impl ConsentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of consents.
    pub async fn list(&self, query: &ItemQuery, page: PageRequest) -> Result<Page<Consent>> {
        require_id("itemId", query.item_id.as_str())?;
        self.inner.get_page("/consents", query, page).await
    }

    /// Fetch every consent granted for the item.
    pub async fn list_all(&self, query: &ItemQuery, page_size: u32) -> Result<Vec<Consent>> {
        check_page_size(page_size)?;
        paginated::collect_all(self.inner.config.max_pages, |page| {
            self.list(query, PageRequest::new(page, page_size))
        })
        .await
    }

    /// Stream the consents of an item.
    pub fn stream(&self, query: ItemQuery, page_size: u32) -> PaginatedStream<Consent> {
        if let Err(e) = require_id("itemId", query.item_id.as_str()).and(check_page_size(page_size)) {
            return PaginatedStream::from_error(e);
        }
        PaginatedStreamBuilder::new(self.inner.clone(), "/consents")
            .page_size(page_size)
            .build_with_query(query)
    }

    /// Get a single consent.
    pub async fn get(&self, id: &str) -> Result<Consent> {
        self.inner.get(&resource_path("/consents", id)?).await
    }
}
