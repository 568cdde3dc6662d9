//! API service modules for Pluggy endpoints.
//!
//! Each service wraps one resource path and is handed out by
//! [`PluggyClient`](crate::PluggyClient). Collection endpoints offer three
//! ways in: `list` for one page, `list_all` for every record, and
//! `stream` to walk the pages lazily.

use serde::Serialize;

use crate::models::{AccountId, ItemId};
use crate::{Error, Result};

mod accounts;
mod benefits;
mod bills;
mod categories;
mod consents;
mod identity;
mod investments;
mod items;
mod loans;
mod transactions;
mod webhooks;

pub use accounts::{AccountsQuery, AccountsService};
pub use benefits::BenefitsService;
pub use bills::BillsService;
pub use categories::{CategoriesQuery, CategoriesService};
pub use consents::ConsentsService;
pub use identity::IdentityService;
pub use investments::{InvestmentsQuery, InvestmentsService};
pub use items::ItemsService;
pub use loans::LoansService;
pub use transactions::{TransactionsQuery, TransactionsService};
pub use webhooks::WebhooksService;

/// Filter for endpoints scoped to one item (`?itemId=`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemQuery {
    /// Item to list records for
    pub item_id: ItemId,
}

impl ItemQuery {
    /// Scope a listing to `item_id`.
    pub fn new(item_id: impl Into<ItemId>) -> Self {
        Self {
            item_id: item_id.into(),
        }
    }
}

/// Filter for endpoints scoped to one account (`?accountId=`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountQuery {
    /// Account to list records for
    pub account_id: AccountId,
}

impl AccountQuery {
    /// Scope a listing to `account_id`.
    pub fn new(account_id: impl Into<AccountId>) -> Self {
        Self {
            account_id: account_id.into(),
        }
    }
}

/// Filters of endpoints that take none besides paging.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub(crate) struct NoFilters {}

/// Build `{collection}/{id}`, rejecting blank identifiers before any request.
pub(crate) fn resource_path(collection: &str, id: &str) -> Result<String> {
    let id = id.trim();
    if id.is_empty() {
        return Err(Error::InvalidInput(format!(
            "{collection}: identifier must not be empty"
        )));
    }
    Ok(format!("{}/{}", collection, id))
}

/// Reject blank scope identifiers (`itemId`, `accountId`) before any request.
pub(crate) fn require_id(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidInput(format!("{name} must not be empty")));
    }
    Ok(())
}

pub(crate) fn check_page_size(page_size: u32) -> Result<()> {
    if page_size == 0 {
        return Err(Error::InvalidInput("page size must be at least 1".to_string()));
    }
    Ok(())
}
