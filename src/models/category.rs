//! Transaction category and client category rule models.

use serde::{Deserialize, Serialize};

/// A node of the transaction category tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Identifier
    pub id: String,
    /// English description
    pub description: String,
    /// Portuguese description
    pub description_translated: Option<String>,
    /// Parent category, `None` for roots
    pub parent_id: Option<String>,
    /// Parent category description
    pub parent_description: Option<String>,
}

impl Category {
    /// Returns `true` if this category has no parent.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// A client-defined rule that assigns a category to matching transactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRule {
    /// Transaction description the rule matches
    pub description: String,
    /// Category assigned
    pub category_id: Option<String>,
    /// Category description
    pub category: Option<String>,
    /// Client that owns the rule
    pub client_id: Option<String>,
    /// DEBIT or CREDIT
    pub transaction_type: Option<String>,
    /// CHECKING_ACCOUNT or CREDIT_CARD
    pub account_type: Option<String>,
}

/// Body of `POST /categories/rules`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRule {
    /// Transaction description the rule matches
    pub description: String,
    /// Category to assign
    pub category_id: String,
    /// DEBIT or CREDIT
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
    /// CHECKING_ACCOUNT or CREDIT_CARD
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    /// exact, contains, startsWith or endsWith; the API defaults to exact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_type: Option<String>,
}

impl CreateCategoryRule {
    /// Create a rule matching `description` exactly.
    pub fn new(description: impl Into<String>, category_id: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            category_id: category_id.into(),
            transaction_type: None,
            account_type: None,
            match_type: None,
        }
    }

    /// Set how `description` is matched.
    pub fn with_match_type(mut self, match_type: impl Into<String>) -> Self {
        self.match_type = Some(match_type.into());
        self
    }

    /// Restrict the rule to one transaction type.
    pub fn with_transaction_type(mut self, transaction_type: impl Into<String>) -> Self {
        self.transaction_type = Some(transaction_type.into());
        self
    }

    /// Restrict the rule to one account type.
    pub fn with_account_type(mut self, account_type: impl Into<String>) -> Self {
        self.account_type = Some(account_type.into());
        self
    }
}
