//! Categories service for the transaction category tree and client rules.

use std::sync::Arc;

use serde::Serialize;

use super::{check_page_size, require_id, resource_path};
use crate::client::paginated::{self, PaginatedStream, PaginatedStreamBuilder};
use crate::client::{ClientInner, Page, PageRequest};
use crate::models::{Category, CategoryRule, CreateCategoryRule};
use crate::Result;

/// Service for category operations.
///
/// # Example
///
/// ```no_run
/// use pluggy_rs::{api::CategoriesQuery, models::CreateCategoryRule};
///
/// # async fn example(client: pluggy_rs::PluggyClient) -> pluggy_rs::Result<()> {
/// let roots: Vec<_> = client
///     .categories()
///     .list_all(&CategoriesQuery::default(), 100)
///     .await?
///     .into_iter()
///     .filter(|c| c.is_root())
///     .collect();
/// println!("{} root categories", roots.len());
///
/// let rule = CreateCategoryRule::new("UBER *TRIP", "19000000").with_match_type("startsWith");
/// client.categories().create_rule(&rule).await?;
/// # Ok(())
/// # }
/// ```
pub struct CategoriesService {
    inner: Arc<ClientInner>,
}

/// Filters for listing categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesQuery {
    /// Only children of this category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl CategoriesQuery {
    /// Only list the children of `parent_id`.
    pub fn children_of(parent_id: impl Into<String>) -> Self {
        Self {
            parent_id: Some(parent_id.into()),
        }
    }
}

impl CategoriesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of categories.
    pub async fn list(&self, query: &CategoriesQuery, page: PageRequest) -> Result<Page<Category>> {
        self.inner.get_page("/categories", query, page).await
    }

    /// Fetch every category matching `query`.
    pub async fn list_all(&self, query: &CategoriesQuery, page_size: u32) -> Result<Vec<Category>> {
        check_page_size(page_size)?;
        paginated::collect_all(self.inner.config.max_pages, |page| {
            self.list(query, PageRequest::new(page, page_size))
        })
        .await
    }

    /// Stream categories matching `query`.
    pub fn stream(&self, query: CategoriesQuery, page_size: u32) -> PaginatedStream<Category> {
        if let Err(e) = check_page_size(page_size) {
            return PaginatedStream::from_error(e);
        }
        PaginatedStreamBuilder::new(self.inner.clone(), "/categories")
            .page_size(page_size)
            .build_with_query(query)
    }

    /// Get a single category.
    pub async fn get(&self, id: &str) -> Result<Category> {
        self.inner.get(&resource_path("/categories", id)?).await
    }

    /// List the client's category rules.
    pub async fn rules(&self) -> Result<Page<CategoryRule>> {
        self.inner.get("/categories/rules").await
    }

    /// Create a category rule.
    pub async fn create_rule(&self, rule: &CreateCategoryRule) -> Result<CategoryRule> {
        require_id("description", &rule.description)?;
        require_id("categoryId", &rule.category_id)?;
        self.inner.post("/categories/rules", rule).await
    }
}
