//! Transactions service for account movements.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Serialize, Serializer};

use super::{check_page_size, require_id, resource_path};
use crate::client::paginated::{self, PaginatedStream, PaginatedStreamBuilder};
use crate::client::{ClientInner, Page, PageRequest};
use crate::models::{AccountId, Transaction};
use crate::{Error, Result};

/// Service for transaction operations.
///
/// # Example
///
/// ```no_run
/// use chrono::NaiveDate;
/// use pluggy_rs::{AccountId, api::TransactionsQuery};
///
/// # async fn example(client: pluggy_rs::PluggyClient) -> pluggy_rs::Result<()> {
/// let query = TransactionsQuery::new(AccountId::new("account-id"))
///     .from(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
///     .to(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
///
/// let transactions = client.transactions().list_all(&query, 100).await?;
/// for tx in transactions {
///     println!("{} {} {:?}", tx.date, tx.amount, tx.description);
/// }
/// # Ok(())
/// # }
/// ```
pub struct TransactionsService {
    inner: Arc<ClientInner>,
}

/// Filters for listing transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsQuery {
    /// Account whose transactions to list
    pub account_id: AccountId,
    /// Only these transaction ids
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "comma_joined"
    )]
    pub ids: Option<Vec<String>>,
    /// Start of the date range, inclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    /// End of the date range, inclusive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    /// Only transactions charged on this credit card bill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_id: Option<String>,
    /// Only transactions recorded by the API after this instant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_from: Option<DateTime<Utc>>,
}

impl TransactionsQuery {
    /// List every transaction of `account_id`.
    pub fn new(account_id: impl Into<AccountId>) -> Self {
        Self {
            account_id: account_id.into(),
            ids: None,
            from: None,
            to: None,
            bill_id: None,
            created_at_from: None,
        }
    }

    /// Only list these transaction ids.
    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Only list transactions on or after `date`.
    pub fn from(mut self, date: NaiveDate) -> Self {
        self.from = Some(date);
        self
    }

    /// Only list transactions on or before `date`.
    pub fn to(mut self, date: NaiveDate) -> Self {
        self.to = Some(date);
        self
    }

    /// Only list transactions of a credit card bill.
    pub fn bill_id(mut self, bill_id: impl Into<String>) -> Self {
        self.bill_id = Some(bill_id.into());
        self
    }

    /// Only list transactions recorded after `instant`.
    pub fn created_at_from(mut self, instant: DateTime<Utc>) -> Self {
        self.created_at_from = Some(instant);
        self
    }

    fn validate(&self) -> Result<()> {
        require_id("accountId", self.account_id.as_str())?;
        if let (Some(from), Some(to)) = (self.from, self.to) {
            if from > to {
                return Err(Error::InvalidInput(format!(
                    "date range is reversed: from {from} is after to {to}"
                )));
            }
        }
        Ok(())
    }
}

fn comma_joined<S: Serializer>(
    ids: &Option<Vec<String>>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match ids {
        Some(ids) => serializer.serialize_str(&ids.join(",")),
        None => serializer.serialize_none(),
    }
}

/// Body of `PATCH /transactions/{id}`.
#[derive(Serialize)]
struct CategoryUpdate<'a> {
    category: &'a str,
}

impl TransactionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of transactions.
    pub async fn list(
        &self,
        query: &TransactionsQuery,
        page: PageRequest,
    ) -> Result<Page<Transaction>> {
        query.validate()?;
        self.inner.get_page("/transactions", query, page).await
    }

    /// Fetch every transaction matching `query`, one page at a time.
    pub async fn list_all(
        &self,
        query: &TransactionsQuery,
        page_size: u32,
    ) -> Result<Vec<Transaction>> {
        check_page_size(page_size)?;
        paginated::collect_all(self.inner.config.max_pages, |page| {
            self.list(query, PageRequest::new(page, page_size))
        })
        .await
    }

    /// Stream transactions matching `query`, fetching pages as needed.
    pub fn stream(&self, query: TransactionsQuery, page_size: u32) -> PaginatedStream<Transaction> {
        if let Err(e) = query.validate().and(check_page_size(page_size)) {
            return PaginatedStream::from_error(e);
        }
        PaginatedStreamBuilder::new(self.inner.clone(), "/transactions")
            .page_size(page_size)
            .build_with_query(query)
    }

    /// Get a single transaction.
    pub async fn get(&self, id: &str) -> Result<Transaction> {
        self.inner.get(&resource_path("/transactions", id)?).await
    }

    /// Recategorize a transaction, returning the updated record.
    pub async fn update_category(&self, id: &str, category_id: &str) -> Result<Transaction> {
        require_id("categoryId", category_id)?;
        let path = resource_path("/transactions", id)?;
        tracing::debug!(transaction = id, category = category_id, "updating category");
        self.inner
            .patch(&path, &CategoryUpdate { category: category_id })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_serialization() {
        let query = TransactionsQuery::new("acc-1")
            .ids(["a", "b", "c"])
            .from(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .to(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());

        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "accountId": "acc-1",
                "ids": "a,b,c",
                "from": "2024-01-01",
                "to": "2024-01-31"
            })
        );
    }

    #[test]
    fn test_reversed_range_rejected() {
        let query = TransactionsQuery::new("acc-1")
            .from(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
            .to(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!(matches!(query.validate(), Err(Error::InvalidInput(_))));

        assert!(TransactionsQuery::new("").validate().is_err());
        assert!(TransactionsQuery::new("acc-1").validate().is_ok());
    }
}
