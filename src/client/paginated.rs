//! Page envelope, full-pagination aggregation and lazy page streams.
//!
//! Every list endpoint of the API answers with the same envelope:
//!
//! ```json
//! { "page": 1, "total": 107, "totalPages": 3, "results": [ ... ] }
//! ```
//!
//! [`collect_all`] walks pages `1..=totalPages` one request at a time and
//! concatenates the results in server order. [`PaginatedStream`] walks the
//! same pages lazily and yields one item at a time.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::Stream;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::ClientInner;
use crate::{Error, Result};

/// Default page size for single-page `list` calls.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Default page size used by `list_all` and `stream`.
pub const DEFAULT_LIST_ALL_PAGE_SIZE: u32 = 50;

/// One page of a paginated collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Current page number (1-indexed)
    pub page: u32,
    /// Total number of records across all pages
    pub total: u64,
    /// Total number of pages
    pub total_pages: u32,
    /// Records on this page, in server order
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Check if there are more pages after this one.
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }

    /// Get the next page number, if available.
    pub fn next_page(&self) -> Option<u32> {
        if self.has_more() {
            Some(self.page + 1)
        } else {
            None
        }
    }
}

/// Page selection for single-page `list` calls.
///
/// # Example
///
/// ```
/// use pluggy_rs::PageRequest;
///
/// let first = PageRequest::default();
/// assert_eq!((first.page, first.page_size), (1, 20));
///
/// let third = PageRequest::new(3, 100);
/// assert_eq!(third.page, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number, starting at 1
    pub page: u32,
    /// Records per page
    pub page_size: u32,
}

impl PageRequest {
    /// Select a page with a given size.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Select page `page` with the default page size.
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Query string for a page request: the endpoint's filters plus paging.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PagedQuery<'a, Q: ?Sized> {
    #[serde(flatten)]
    pub(crate) filters: &'a Q,
    pub(crate) page: u32,
    pub(crate) page_size: u32,
}

/// Fetch every page of a collection and concatenate the results.
///
/// Pages are requested strictly in order `1, 2, ...`; the loop stops once
/// the page just fetched is at or past its reported `totalPages`, or when
/// the very first page is empty. The first failing page aborts the whole
/// listing and nothing gathered so far is returned.
///
/// With `max_pages = Some(n)`, a server still reporting more pages after
/// page `n` yields [`Error::PageLimitExceeded`].
pub(crate) async fn collect_all<T, F, Fut>(max_pages: Option<u32>, mut fetch_page: F) -> Result<Vec<T>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut items = Vec::new();
    let mut page = 1;

    loop {
        let response = fetch_page(page).await?;
        let total_pages = response.total_pages;
        let first_page_empty = page == 1 && response.results.is_empty();

        tracing::debug!(
            page,
            total_pages,
            count = response.results.len(),
            "fetched page"
        );
        items.extend(response.results);

        if first_page_empty || page >= total_pages {
            return Ok(items);
        }
        if let Some(max_pages) = max_pages {
            if page >= max_pages {
                tracing::warn!(max_pages, total_pages, "page cap reached");
                return Err(Error::PageLimitExceeded { max_pages });
            }
        }
        page += 1;
    }
}

/// Type alias for a boxed future used internally.
type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A stream that lazily fetches pages from a paginated API endpoint.
///
/// This stream yields individual records from each page, fetching the next
/// page only when the current one is exhausted. A failed fetch is yielded
/// once as an error and ends the stream.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use pluggy_rs::{AccountId, api::TransactionsQuery};
///
/// # async fn example(client: pluggy_rs::PluggyClient) -> pluggy_rs::Result<()> {
/// let query = TransactionsQuery::new(AccountId::new("account-id"));
/// let mut stream = client.transactions().stream(query, 100);
///
/// while let Some(result) = stream.next().await {
///     let transaction = result?;
///     println!("{} {}", transaction.date, transaction.amount);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaginatedStream<T> {
    /// Function to fetch a page by number.
    fetch_page: Box<dyn Fn(u32) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync>,
    /// Records of the current page not yet yielded.
    current_items: std::vec::IntoIter<T>,
    /// Next page to fetch, None if exhausted.
    next_page: Option<u32>,
    /// Page number of the in-flight fetch.
    requested_page: u32,
    /// Cap on page numbers, if any.
    max_pages: Option<u32>,
    /// Current in-flight fetch future.
    pending_fetch: Option<BoxFuture<'static, Result<Page<T>>>>,
}

impl<T> PaginatedStream<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Create a new paginated stream starting at page 1.
    pub(crate) fn new<F>(fetch_page: F, max_pages: Option<u32>) -> Self
    where
        F: Fn(u32) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync + 'static,
    {
        Self {
            fetch_page: Box::new(fetch_page),
            current_items: Vec::new().into_iter(),
            next_page: Some(1),
            requested_page: 0,
            max_pages,
            pending_fetch: None,
        }
    }

    /// A stream that yields `error` once and then ends, without any request.
    pub(crate) fn from_error(error: Error) -> Self {
        Self {
            fetch_page: Box::new(|_| {
                Box::pin(async {
                    Ok(Page {
                        page: 1,
                        total: 0,
                        total_pages: 0,
                        results: Vec::new(),
                    })
                })
            }),
            current_items: Vec::new().into_iter(),
            next_page: None,
            requested_page: 0,
            max_pages: None,
            pending_fetch: Some(Box::pin(async move { Err(error) })),
        }
    }
}

impl<T> Stream for PaginatedStream<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(item) = this.current_items.next() {
                return Poll::Ready(Some(Ok(item)));
            }

            if let Some(ref mut fut) = this.pending_fetch {
                match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(response)) => {
                        this.pending_fetch = None;
                        let requested = this.requested_page;
                        this.next_page = if response.results.is_empty()
                            || requested >= response.total_pages
                        {
                            None
                        } else {
                            Some(requested + 1)
                        };
                        this.current_items = response.results.into_iter();
                        continue;
                    }
                    Poll::Ready(Err(e)) => {
                        this.pending_fetch = None;
                        this.next_page = None;
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => return Poll::Pending,
                }
            }

            if let Some(page) = this.next_page {
                if let Some(max_pages) = this.max_pages {
                    if page > max_pages {
                        this.next_page = None;
                        return Poll::Ready(Some(Err(Error::PageLimitExceeded { max_pages })));
                    }
                }
                this.requested_page = page;
                this.pending_fetch = Some((this.fetch_page)(page));
                continue;
            }

            return Poll::Ready(None);
        }
    }
}

impl<T> Unpin for PaginatedStream<T> {}

impl<T> std::fmt::Debug for PaginatedStream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginatedStream")
            .field("next_page", &self.next_page)
            .field("max_pages", &self.max_pages)
            .field("buffered", &self.current_items.len())
            .finish()
    }
}

/// Builder for creating paginated streams over one endpoint.
pub(crate) struct PaginatedStreamBuilder<T> {
    inner: Arc<ClientInner>,
    path: String,
    page_size: u32,
    _marker: std::marker::PhantomData<T>,
}

impl<T: DeserializeOwned + Send + 'static> PaginatedStreamBuilder<T> {
    /// Create a new builder.
    pub(crate) fn new(inner: Arc<ClientInner>, path: impl Into<String>) -> Self {
        Self {
            inner,
            path: path.into(),
            page_size: DEFAULT_LIST_ALL_PAGE_SIZE,
            _marker: std::marker::PhantomData,
        }
    }

    /// Set the number of records per page.
    pub(crate) fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Build the stream with the endpoint's filters.
    pub(crate) fn build_with_query<Q>(self, filters: Q) -> PaginatedStream<T>
    where
        Q: Serialize + Clone + Send + Sync + 'static,
    {
        let inner = self.inner;
        let path = self.path;
        let page_size = self.page_size;
        let max_pages = inner.config.max_pages;

        PaginatedStream::new(
            move |page: u32| {
                let inner = inner.clone();
                let path = path.clone();
                let filters = filters.clone();

                Box::pin(async move {
                    inner
                        .get_page::<T, Q>(&path, &filters, PageRequest::new(page, page_size))
                        .await
                })
            },
            max_pages,
        )
    }
}
