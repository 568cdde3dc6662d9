//! Bills service for credit card bills.

use std::sync::Arc;

use super::{check_page_size, require_id, resource_path, AccountQuery};
use crate::client::paginated::{self, PaginatedStream, PaginatedStreamBuilder};
use crate::client::{ClientInner, Page, PageRequest};
use crate::models::Bill;
use crate::Result;

/// Service for credit card bill operations.
///
/// Bills only exist for credit card accounts; listing them for a bank
/// account returns an empty page.
///
/// # Example
///
/// ```no_run
/// use pluggy_rs::api::AccountQuery;
///
/// # async fn example(client: pluggy_rs::PluggyClient) -> pluggy_rs::Result<()> {
/// let bills = client.bills().list_all(&AccountQuery::new("card-account-id"), 50).await?;
/// for bill in bills {
///     println!("{:?} due {:?}", bill.total_amount, bill.due_date);
/// }
/// # Ok(())
/// # }
/// ```
pub struct BillsService {
    inner: Arc<ClientInner>,
}

impl BillsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of bills.
    pub async fn list(&self, query: &AccountQuery, page: PageRequest) -> Result<Page<Bill>> {
        require_id("accountId", query.account_id.as_str())?;
        self.inner.get_page("/bills", query, page).await
    }

    /// Fetch every bill of the credit card account, one page at a time.
    pub async fn list_all(&self, query: &AccountQuery, page_size: u32) -> Result<Vec<Bill>> {
        check_page_size(page_size)?;
        paginated::collect_all(self.inner.config.max_pages, |page| {
            self.list(query, PageRequest::new(page, page_size))
        })
        .await
    }

    /// Stream the bills of an account, fetching pages as needed.
    pub fn stream(&self, query: AccountQuery, page_size: u32) -> PaginatedStream<Bill> {
        if let Err(e) = require_id("accountId", query.account_id.as_str()).and(check_page_size(page_size)) {
            return PaginatedStream::from_error(e);
        }
        PaginatedStreamBuilder::new(self.inner.clone(), "/bills")
            .page_size(page_size)
            .build_with_query(query)
    }

    /// Get a single bill.
    pub async fn get(&self, id: &str) -> Result<Bill> {
        self.inner.get(&resource_path("/bills", id)?).await
    }
}
