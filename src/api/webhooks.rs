//! Webhooks service for notification subscriptions.

use std::sync::Arc;

use super::{check_page_size, require_id, resource_path, NoFilters};
use crate::client::paginated::{self, PaginatedStream, PaginatedStreamBuilder};
use crate::client::{ClientInner, Page, PageRequest};
use crate::models::{DeleteCount, Webhook, WebhookRequest};
use crate::Result;

/// Service for webhook operations.
///
/// # Example
///
/// ```no_run
/// use pluggy_rs::models::WebhookRequest;
///
/// # async fn example(client: pluggy_rs::PluggyClient) -> pluggy_rs::Result<()> {
/// let request = WebhookRequest::new("https://example.com/pluggy", "item/updated");
/// let webhook = client.webhooks().create(&request).await?;
///
/// for hook in client.webhooks().list_all(50).await? {
///     println!("{} -> {} (enabled: {})", hook.event, hook.url, hook.is_enabled());
/// }
///
/// client.webhooks().delete(&webhook.id).await?;
/// # Ok(())
/// # }
/// ```
pub struct WebhooksService {
    inner: Arc<ClientInner>,
}

impl WebhooksService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of webhooks.
    pub async fn list(&self, page: PageRequest) -> Result<Page<Webhook>> {
        self.inner.get_page("/webhooks", &NoFilters {}, page).await
    }

    /// Fetch every webhook of the client.
    pub async fn list_all(&self, page_size: u32) -> Result<Vec<Webhook>> {
        check_page_size(page_size)?;
        paginated::collect_all(self.inner.config.max_pages, |page| {
            self.list(PageRequest::new(page, page_size))
        })
        .await
    }

    /// Stream the client's webhooks.
    pub fn stream(&self, page_size: u32) -> PaginatedStream<Webhook> {
        if let Err(e) = check_page_size(page_size) {
            return PaginatedStream::from_error(e);
        }
        PaginatedStreamBuilder::new(self.inner.clone(), "/webhooks")
            .page_size(page_size)
            .build_with_query(NoFilters {})
    }

    /// Get a single webhook.
    pub async fn get(&self, id: &str) -> Result<Webhook> {
        self.inner.get(&resource_path("/webhooks", id)?).await
    }

    /// Register a webhook.
    pub async fn create(&self, request: &WebhookRequest) -> Result<Webhook> {
        validate(request)?;
        self.inner.post("/webhooks", request).await
    }

    /// Replace a webhook's URL, event and headers.
    pub async fn update(&self, id: &str, request: &WebhookRequest) -> Result<Webhook> {
        let path = resource_path("/webhooks", id)?;
        validate(request)?;
        self.inner.patch(&path, request).await
    }

    /// Delete a webhook.
    pub async fn delete(&self, id: &str) -> Result<DeleteCount> {
        self.inner.delete(&resource_path("/webhooks", id)?).await
    }
}

fn validate(request: &WebhookRequest) -> Result<()> {
    require_id("url", &request.url)?;
    require_id("event", &request.event)
}
