//! # pluggy-rs
//!
//! A typed async Rust client for the Pluggy open-finance API.
//!
//! Pluggy aggregates accounts, transactions, investments, loans, benefits,
//! credit card bills, identity data and more from Brazilian financial
//! institutions. This crate authenticates, issues requests against the
//! REST endpoints, validates every response body into typed records and
//! walks paginated collections.
//!
//! ## Features
//!
//! - **Authentication**: client credentials exchanged once for an API key
//! - **Resources**: items, accounts, transactions, investments, loans,
//!   benefits, bills, categories, consents, identity and webhooks
//! - **Pagination**: single pages, full listings or lazy streams
//! - **Typed errors**: HTTP status classes, schema mismatches and network
//!   failures are separate [`Error`] variants
//! - **Exact money**: amounts are [`rust_decimal::Decimal`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pluggy_rs::{ItemId, PluggyClient};
//! use pluggy_rs::api::{AccountsQuery, TransactionsQuery};
//!
//! #[tokio::main]
//! async fn main() -> pluggy_rs::Result<()> {
//!     let client = PluggyClient::authenticate("client-id", "client-secret").await?;
//!
//!     let item = ItemId::new("item-id");
//!     let accounts = client.accounts().list_all(&AccountsQuery::new(item), 50).await?;
//!
//!     for account in &accounts {
//!         let query = TransactionsQuery::new(account.account_id());
//!         let transactions = client.transactions().list_all(&query, 100).await?;
//!         println!("{:?}: {} transactions", account.name, transactions.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use pluggy_rs::{Error, PluggyClient};
//!
//! # async fn example(client: PluggyClient) {
//! match client.accounts().get("missing").await {
//!     Ok(account) => println!("{:?}", account.name),
//!     Err(Error::NotFound(details)) => println!("no such account: {}", details.message),
//!     Err(e) if e.is_auth_error() => println!("API key expired, authenticate again"),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::{ApiKey, Credentials};
pub use client::{ClientConfig, Page, PageRequest, PaginatedStream, PluggyClient};
pub use error::{ApiError, Error, Result};
pub use models::{AccountId, ItemId};

/// Prelude module for convenient imports.
///
/// ```rust
/// use pluggy_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        AccountQuery, AccountsQuery, CategoriesQuery, InvestmentsQuery, ItemQuery,
        TransactionsQuery,
    };
    pub use crate::auth::{ApiKey, Credentials};
    pub use crate::client::{ClientConfig, Page, PageRequest, PaginatedStream, PluggyClient};
    pub use crate::error::{ApiError, Error, Result};
    pub use crate::models::{
        // Identifiers
        AccountId, ItemId, DeleteCount,
        // Enums
        AccountType, AccountSubtype, TransactionType, TransactionStatus, ItemStatus,
        ExecutionStatus, InvestmentType, InvestmentStatus,
        // Records
        Account, Transaction, Investment, InvestmentTransaction, Loan, Benefit, Bill,
        Category, CategoryRule, Consent, Identity, Item, Webhook,
        // Request bodies
        CreateItemRequest, UpdateItemRequest, CreateCategoryRule, WebhookRequest, ItemRef,
    };
}
