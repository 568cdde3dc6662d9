//! Accounts service for bank and credit card accounts.

use std::sync::Arc;

use serde::Serialize;

use super::{check_page_size, require_id, resource_path};
use crate::client::paginated::{self, PaginatedStream, PaginatedStreamBuilder};
use crate::client::{ClientInner, Page, PageRequest};
use crate::models::{Account, AccountType, ItemId};
use crate::{Error, Result};

/// Service for account operations.
///
/// # Example
///
/// ```no_run
/// use pluggy_rs::{ItemId, api::AccountsQuery};
///
/// # async fn example(client: pluggy_rs::PluggyClient) -> pluggy_rs::Result<()> {
/// let query = AccountsQuery::new(ItemId::new("item-id"));
///
/// // Every account of the item, across all pages
/// let accounts = client.accounts().list_all(&query, 50).await?;
/// for account in accounts {
///     println!("{}: {:?}", account.id, account.balance);
/// }
/// # Ok(())
/// # }
/// ```
pub struct AccountsService {
    inner: Arc<ClientInner>,
}

/// Filters for listing accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsQuery {
    /// Item whose accounts to list
    pub item_id: ItemId,
    /// Only accounts of this type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
}

impl AccountsQuery {
    /// List every account of `item_id`.
    pub fn new(item_id: impl Into<ItemId>) -> Self {
        Self {
            item_id: item_id.into(),
            account_type: None,
        }
    }

    /// Only list accounts of `account_type`.
    pub fn with_type(mut self, account_type: AccountType) -> Self {
        self.account_type = Some(account_type);
        self
    }

    fn validate(&self) -> Result<()> {
        require_id("itemId", self.item_id.as_str())?;
        if self.account_type == Some(AccountType::Unknown) {
            return Err(Error::InvalidInput(
                "type filter must name an account type the API knows".to_string(),
            ));
        }
        Ok(())
    }
}

impl AccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of accounts.
    pub async fn list(&self, query: &AccountsQuery, page: PageRequest) -> Result<Page<Account>> {
        query.validate()?;
        self.inner.get_page("/accounts", query, page).await
    }

    /// Fetch every account matching `query`, one page at a time.
    pub async fn list_all(&self, query: &AccountsQuery, page_size: u32) -> Result<Vec<Account>> {
        check_page_size(page_size)?;
        paginated::collect_all(self.inner.config.max_pages, |page| {
            self.list(query, PageRequest::new(page, page_size))
        })
        .await
    }

    /// Stream accounts matching `query`, fetching pages as needed.
    pub fn stream(&self, query: AccountsQuery, page_size: u32) -> PaginatedStream<Account> {
        if let Err(e) = query.validate().and(check_page_size(page_size)) {
            return PaginatedStream::from_error(e);
        }
        PaginatedStreamBuilder::new(self.inner.clone(), "/accounts")
            .page_size(page_size)
            .build_with_query(query)
    }

    /// Get a single account.
    pub async fn get(&self, id: &str) -> Result<Account> {
        self.inner.get(&resource_path("/accounts", id)?).await
    }
}
