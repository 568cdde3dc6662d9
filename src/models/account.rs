//! Bank and credit card account models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{AccountSubtype, AccountType};
use super::primitives::{AccountId, ItemId};

/// A bank or credit card account collected from an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Primary identifier
    pub id: String,
    /// Bank or credit account
    #[serde(rename = "type")]
    pub account_type: AccountType,
    /// Checking, savings or credit card
    pub subtype: Option<AccountSubtype>,
    /// Account number at the institution
    pub number: Option<String>,
    /// Account name
    pub name: Option<String>,
    /// Commercial product name
    pub marketing_name: Option<String>,
    /// Current balance
    pub balance: Option<Decimal>,
    /// Item this account belongs to
    pub item_id: Option<String>,
    /// Owner's tax number (CPF/CNPJ)
    pub tax_number: Option<String>,
    /// Owner's name
    pub owner: Option<String>,
    /// ISO currency code
    pub currency_code: Option<String>,
    /// Bank account details
    pub bank_data: Option<BankData>,
    /// Credit card details
    pub credit_data: Option<CreditData>,
}

impl Account {
    /// Get the account ID as a strongly-typed value.
    pub fn account_id(&self) -> AccountId {
        AccountId::new(&self.id)
    }

    /// Get the owning item ID, if present.
    pub fn item_id(&self) -> Option<ItemId> {
        self.item_id.as_deref().map(ItemId::new)
    }

    /// Returns `true` for credit card accounts.
    pub fn is_credit(&self) -> bool {
        self.account_type == AccountType::Credit
    }
}

/// Details specific to bank accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankData {
    /// Number used for transfers (branch/account/digit)
    pub transfer_number: Option<String>,
    /// Balance at closing
    pub closing_balance: Option<Decimal>,
    /// Balance automatically invested
    pub automatically_invested_balance: Option<Decimal>,
}

/// Details specific to credit card accounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditData {
    /// Card level (e.g. GOLD)
    pub level: Option<String>,
    /// Card brand (e.g. VISA)
    pub brand: Option<String>,
    /// Closing date of the current bill
    pub balance_close_date: Option<String>,
    /// Due date of the current bill
    pub balance_due_date: Option<String>,
    /// Remaining credit limit
    pub available_credit_limit: Option<Decimal>,
    /// Balance in foreign currency
    pub balance_foreign_currency: Option<Decimal>,
    /// Minimum payment of the current bill
    pub minimum_payment: Option<Decimal>,
    /// Total credit limit
    pub credit_limit: Option<Decimal>,
    /// Card status
    pub status: Option<String>,
    /// Holder type (main or additional)
    pub holder_type: Option<String>,
}
