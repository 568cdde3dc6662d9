//! Loans service for contracted credit.

use std::sync::Arc;

use super::{check_page_size, require_id, resource_path, ItemQuery};
use crate::client::paginated::{self, PaginatedStream, PaginatedStreamBuilder};
use crate::client::{ClientInner, Page, PageRequest};
use crate::models::Loan;
use crate::Result;

/// Service for loan operations.
pub struct LoansService {
    inner: Arc<ClientInner>,
}

impl LoansService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of loans.
    pub async fn list(&self, query: &ItemQuery, page: PageRequest) -> Result<Page<Loan>> {
        require_id("itemId", query.item_id.as_str())?;
        self.inner.get_page("/loans", query, page).await
    }

    /// Fetch every loan of the item, one page at a time.
    pub async fn list_all(&self, query: &ItemQuery, page_size: u32) -> Result<Vec<Loan>> {
        check_page_size(page_size)?;
        paginated::collect_all(self.inner.config.max_pages, |page| {
            self.list(query, PageRequest::new(page, page_size))
        })
        .await
    }

    /// Stream the loans of an item, fetching pages as needed.
    pub fn stream(&self, query: ItemQuery, page_size: u32) -> PaginatedStream<Loan> {
        if let Err(e) = require_id("itemId", query.item_id.as_str()).and(check_page_size(page_size)) {
            return PaginatedStream::from_error(e);
        }
        PaginatedStreamBuilder::new(self.inner.clone(), "/loans")
            .page_size(page_size)
            .build_with_query(query)
    }

    /// Get a single loan contract.
    pub async fn get(&self, id: &str) -> Result<Loan> {
        self.inner.get(&resource_path("/loans", id)?).await
    }
}
