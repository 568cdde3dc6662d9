//! Benefits service for social security benefits.

use std::sync::Arc;

use super::{check_page_size, require_id, resource_path, ItemQuery};
use crate::client::paginated::{self, PaginatedStream, PaginatedStreamBuilder};
use crate::client::{ClientInner, Page, PageRequest};
use crate::models::Benefit;
use crate::Result;

/// Service for benefit operations.
pub struct BenefitsService {
    inner: Arc<ClientInner>,
}

impl BenefitsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of benefits.
    pub async fn list(&self, query: &ItemQuery, page: PageRequest) -> Result<Page<Benefit>> {
        require_id("itemId", query.item_id.as_str())?;
        self.inner.get_page("/benefits", query, page).await
    }

    /// Fetch every benefit of the item, one page at a time.
    pub async fn list_all(&self, query: &ItemQuery, page_size: u32) -> Result<Vec<Benefit>> {
        check_page_size(page_size)?;
        paginated::collect_all(self.inner.config.max_pages, |page| {
            self.list(query, PageRequest::new(page, page_size))
        })
        .await
    }

    /// Stream the benefits of an item, fetching pages as needed.
    pub fn stream(&self, query: ItemQuery, page_size: u32) -> PaginatedStream<Benefit> {
        if let Err(e) = require_id("itemId", query.item_id.as_str()).and(check_page_size(page_size)) {
            return PaginatedStream::from_error(e);
        }
        PaginatedStreamBuilder::new(self.inner.clone(), "/benefits")
            .page_size(page_size)
            .build_with_query(query)
    }

    /// Get a single benefit.
    pub async fn get(&self, id: &str) -> Result<Benefit> {
        self.inner.get(&resource_path("/benefits", id)?).await
    }
}
