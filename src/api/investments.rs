//! Investments service for positions and their movements.

use std::sync::Arc;

use serde::Serialize;

use super::{check_page_size, require_id, resource_path, NoFilters};
use crate::client::paginated::{self, PaginatedStream, PaginatedStreamBuilder};
use crate::client::{ClientInner, Page, PageRequest};
use crate::models::{Investment, InvestmentTransaction, InvestmentType, ItemId};
use crate::{Error, Result};

/// Service for investment operations.
///
/// # Example
///
/// ```no_run
/// use pluggy_rs::{ItemId, api::InvestmentsQuery, models::InvestmentType};
///
/// # async fn example(client: pluggy_rs::PluggyClient) -> pluggy_rs::Result<()> {
/// let query = InvestmentsQuery::new(ItemId::new("item-id")).with_type(InvestmentType::FixedIncome);
///
/// for investment in client.investments().list_all(&query, 50).await? {
///     println!("{:?}: {}", investment.name, investment.balance);
///     let movements = client.investments().list_all_transactions(&investment.id, 50).await?;
///     println!("  {} movements", movements.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct InvestmentsService {
    inner: Arc<ClientInner>,
}

/// Filters for listing investments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentsQuery {
    /// Item whose investments to list
    pub item_id: ItemId,
    /// Only investments of this asset class
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub investment_type: Option<InvestmentType>,
}

impl InvestmentsQuery {
    /// List every investment of `item_id`.
    pub fn new(item_id: impl Into<ItemId>) -> Self {
        Self {
            item_id: item_id.into(),
            investment_type: None,
        }
    }

    /// Only list investments of `investment_type`.
    pub fn with_type(mut self, investment_type: InvestmentType) -> Self {
        self.investment_type = Some(investment_type);
        self
    }

    fn validate(&self) -> Result<()> {
        require_id("itemId", self.item_id.as_str())?;
        if self.investment_type == Some(InvestmentType::Unknown) {
            return Err(Error::InvalidInput(
                "type filter must name an investment type the API knows".to_string(),
            ));
        }
        Ok(())
    }
}

impl InvestmentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of investments.
    pub async fn list(
        &self,
        query: &InvestmentsQuery,
        page: PageRequest,
    ) -> Result<Page<Investment>> {
        query.validate()?;
        self.inner.get_page("/investments", query, page).await
    }

    /// Fetch every investment matching `query`, one page at a time.
    pub async fn list_all(
        &self,
        query: &InvestmentsQuery,
        page_size: u32,
    ) -> Result<Vec<Investment>> {
        check_page_size(page_size)?;
        paginated::collect_all(self.inner.config.max_pages, |page| {
            self.list(query, PageRequest::new(page, page_size))
        })
        .await
    }

    /// Stream investments matching `query`, fetching pages as needed.
    pub fn stream(&self, query: InvestmentsQuery, page_size: u32) -> PaginatedStream<Investment> {
        if let Err(e) = query.validate().and(check_page_size(page_size)) {
            return PaginatedStream::from_error(e);
        }
        PaginatedStreamBuilder::new(self.inner.clone(), "/investments")
            .page_size(page_size)
            .build_with_query(query)
    }

    /// Get a single investment.
    pub async fn get(&self, id: &str) -> Result<Investment> {
        self.inner.get(&resource_path("/investments", id)?).await
    }

    /// Fetch one page of an investment's movements.
    pub async fn transactions(
        &self,
        investment_id: &str,
        page: PageRequest,
    ) -> Result<Page<InvestmentTransaction>> {
        let path = format!("{}/transactions", resource_path("/investments", investment_id)?);
        self.inner.get_page(&path, &NoFilters {}, page).await
    }

    /// Fetch every movement of an investment, one page at a time.
    pub async fn list_all_transactions(
        &self,
        investment_id: &str,
        page_size: u32,
    ) -> Result<Vec<InvestmentTransaction>> {
        check_page_size(page_size)?;
        paginated::collect_all(self.inner.config.max_pages, |page| {
            self.transactions(investment_id, PageRequest::new(page, page_size))
        })
        .await
    }
}
