//! Enumeration types for the Pluggy API.
//!
//! Each enum has an `Unknown` fallback so values added by the API later
//! deserialize instead of failing the whole record.

use serde::{Deserialize, Serialize};

/// Top-level account type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    /// Checking or savings account
    Bank,
    /// Credit card account
    Credit,
    /// Unrecognized account type
    #[serde(other)]
    Unknown,
}

/// Account subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountSubtype {
    /// Checking account
    CheckingAccount,
    /// Savings account
    SavingsAccount,
    /// Credit card
    CreditCard,
    /// Unrecognized subtype
    #[serde(other)]
    Unknown,
}

/// Direction of money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Outflow
    Debit,
    /// Inflow
    Credit,
    /// Unrecognized type
    #[serde(other)]
    Unknown,
}

impl TransactionType {
    /// Returns `true` for outflows.
    pub fn is_debit(&self) -> bool {
        matches!(self, TransactionType::Debit)
    }
}

/// Settlement status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    /// Settled
    Posted,
    /// Not yet settled
    Pending,
    /// Unrecognized status
    #[serde(other)]
    Unknown,
}

/// Connection status of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    /// Last sync finished
    Updated,
    /// Sync in progress
    Updating,
    /// Waiting for MFA or other user input
    WaitingUserInput,
    /// Credentials were rejected by the institution
    LoginError,
    /// Last sync failed, data may be stale
    Outdated,
    /// Unrecognized status
    #[serde(other)]
    Unknown,
}

impl ItemStatus {
    /// Returns `true` if the item needs the user to act before it can sync.
    pub fn needs_user_action(&self) -> bool {
        matches!(self, ItemStatus::WaitingUserInput | ItemStatus::LoginError)
    }
}

/// Detailed outcome of the last item execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionStatus {
    /// Item being created
    Creating,
    /// Item created, sync not started
    Created,
    /// Login in progress
    LoginInProgress,
    /// Waiting for user input
    WaitingUserInput,
    /// Invalid credentials
    InvalidCredentials,
    /// Every product was collected
    Success,
    /// Some products failed
    PartialSuccess,
    /// Execution failed
    Error,
    /// Unrecognized status
    #[serde(other)]
    Unknown,
}

/// Asset class of an investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentType {
    /// Mutual fund
    MutualFund,
    /// Listed equity
    Equity,
    /// Security (pension plans and similar)
    Security,
    /// Fixed income
    FixedIncome,
    /// Exchange-traded fund
    Etf,
    /// Certificate of structured operations
    Coe,
    /// Anything else
    Other,
    /// Unrecognized type
    #[serde(other)]
    Unknown,
}

/// Status of an investment position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentStatus {
    /// Position is open
    Active,
    /// Awaiting settlement
    Pending,
    /// Fully redeemed
    Total,
    /// Unrecognized status
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        let subtype: AccountSubtype = serde_json::from_str("\"CREDIT_CARD\"").unwrap();
        assert_eq!(subtype, AccountSubtype::CreditCard);

        let status: ItemStatus = serde_json::from_str("\"WAITING_USER_INPUT\"").unwrap();
        assert!(status.needs_user_action());

        let kind: InvestmentType = serde_json::from_str("\"FIXED_INCOME\"").unwrap();
        assert_eq!(kind, InvestmentType::FixedIncome);
        assert_eq!(serde_json::to_string(&InvestmentType::MutualFund).unwrap(), "\"MUTUAL_FUND\"");
    }

    #[test]
    fn test_unknown_fallback() {
        let kind: AccountType = serde_json::from_str("\"CRYPTO\"").unwrap();
        assert_eq!(kind, AccountType::Unknown);

        let status: ExecutionStatus = serde_json::from_str("\"MERGING\"").unwrap();
        assert_eq!(status, ExecutionStatus::Unknown);
    }
}
