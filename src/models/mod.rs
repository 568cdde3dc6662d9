//! Data models for the Pluggy API.
//!
//! Records are deserialized straight from response bodies. Required fields
//! are plain types and optional fields are `Option<_>`, so a body missing
//! a required field fails with [`Error::SchemaValidation`](crate::Error).
//! Models are organized by resource:
//!
//! - [`primitives`] - Identifier newtypes and small shared bodies
//! - [`enums`] - Account, transaction, item and investment enumerations
//! - [`item`] - Items and the local item list
//! - [`account`] / [`transaction`] - Accounts and their movements
//! - [`investment`], [`loan`], [`benefit`], [`bill`] - Other financial products
//! - [`category`], [`consent`], [`identity`], [`webhook`]

pub mod primitives;
pub mod enums;
pub mod account;
pub mod transaction;
pub mod investment;
pub mod loan;
pub mod benefit;
pub mod bill;
pub mod category;
pub mod consent;
pub mod identity;
pub mod item;
pub mod webhook;

// Re-export commonly used types
pub use primitives::*;
pub use enums::*;
pub use account::*;
pub use transaction::*;
pub use investment::*;
pub use loan::*;
pub use benefit::*;
pub use bill::*;
pub use category::*;
pub use consent::*;
pub use identity::*;
pub use item::*;
pub use webhook::*;
