//! HTTP client and service layer for the Pluggy API.
//!
//! This module provides the main entry point [`PluggyClient`], the
//! [`ClientConfig`] it is built from, and the pagination types shared by
//! every list endpoint.
//!
//! # Example
//!
//! ```no_run
//! use pluggy_rs::{ClientConfig, Credentials, PluggyClient};
//!
//! # async fn example() -> pluggy_rs::Result<()> {
//! let client = PluggyClient::authenticate_with_config(
//!     Credentials::from_env()?,
//!     ClientConfig::default(),
//! )
//! .await?;
//!
//! let webhooks = client.webhooks().list_all(50).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod paginated;

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_MAX_PAGES};
pub use http::{PluggyClient, API_KEY_HEADER};
pub use paginated::{
    Page, PageRequest, PaginatedStream, DEFAULT_LIST_ALL_PAGE_SIZE, DEFAULT_PAGE_SIZE,
};
pub(crate) use http::{decode, ClientInner, HttpTransport};
