//! Bank and credit card transaction models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{TransactionStatus, TransactionType};

/// A single movement on an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Primary identifier
    pub id: String,
    /// Cleaned-up description
    pub description: Option<String>,
    /// Description as sent by the institution
    pub description_raw: Option<String>,
    /// ISO currency code
    pub currency_code: Option<String>,
    /// Amount in the transaction's currency
    pub amount: Decimal,
    /// Amount converted to the account's currency, when they differ
    pub amount_in_account_currency: Option<Decimal>,
    /// When the transaction was made
    pub date: DateTime<Utc>,
    /// Debit or credit
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
    /// Account balance after the transaction
    pub balance: Option<Decimal>,
    /// Institution-provided code
    pub provider_code: Option<String>,
    /// Posted or pending
    pub status: Option<TransactionStatus>,
    /// Human-friendly category (e.g. "Restaurants")
    pub category: Option<String>,
    /// Category identifier, see the categories service
    pub category_id: Option<String>,
    /// Operation type as classified by the institution
    pub operation_type: Option<String>,
    /// Transfer and payment details
    pub payment_data: Option<PaymentData>,
    /// Credit card specific details
    pub credit_card_metadata: Option<CreditCardMetadata>,
    /// Merchant details
    pub merchant: Option<Merchant>,
    /// Account this transaction belongs to
    pub account_id: Option<String>,
}

/// Identification document (CPF, CNPJ, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentNumber {
    /// Document type
    #[serde(rename = "type")]
    pub document_type: Option<String>,
    /// Document value
    pub value: Option<String>,
}

/// Payer or receiver of a payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentParticipant {
    /// Participant name
    pub name: Option<String>,
    /// Branch number
    pub branch_number: Option<String>,
    /// Account number
    pub account_number: Option<String>,
    /// Routing number
    pub routing_number: Option<String>,
    /// Identification document
    pub document_number: Option<DocumentNumber>,
}

/// Payment details attached to transfers (PIX, TED, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentData {
    /// Who paid
    pub payer: Option<PaymentParticipant>,
    /// Free-text reason
    pub reason: Option<String>,
    /// Who received
    pub receiver: Option<PaymentParticipant>,
    /// Method, e.g. PIX or TED
    pub payment_method: Option<String>,
    /// Reference number
    pub reference_number: Option<String>,
}

/// Credit card specific transaction data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardMetadata {
    /// Current installment number
    pub installment_number: Option<u32>,
    /// Total number of installments
    pub total_installments: Option<u32>,
    /// Total purchase amount
    pub total_amount: Option<Decimal>,
    /// Original purchase date
    pub purchase_date: Option<DateTime<Utc>>,
    /// Merchant category code
    #[serde(rename = "payeeMCC")]
    pub payee_mcc: Option<u32>,
    /// Card used, may differ from the account's main card
    pub card_number: Option<String>,
    /// Bill this transaction was charged on
    pub bill_id: Option<String>,
}

/// Merchant details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Merchant {
    /// Display name
    pub name: Option<String>,
    /// Legal name
    pub business_name: Option<String>,
    /// CNPJ
    pub cnpj: Option<String>,
    /// Merchant category
    pub category: Option<String>,
    /// CNAE code
    pub cnae: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_transaction() {
        let json = r#"{
            "id": "tx-1",
            "description": "Uber",
            "amount": -42.5,
            "date": "2024-03-01T12:30:00.000Z",
            "type": "DEBIT",
            "status": "POSTED",
            "accountId": "acc-1",
            "creditCardMetadata": {"installmentNumber": 1, "totalInstallments": 3, "payeeMCC": 4121},
            "merchant": {"name": "Uber", "cnpj": "17.895.646/0001-87"}
        }"#;

        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.amount, dec!(-42.5));
        assert!(tx.transaction_type.unwrap().is_debit());
        assert_eq!(tx.status, Some(TransactionStatus::Posted));
        assert_eq!(tx.credit_card_metadata.unwrap().payee_mcc, Some(4121));
        assert_eq!(tx.merchant.unwrap().name.as_deref(), Some("Uber"));
    }

    #[test]
    fn test_transaction_wrong_type_fails() {
        let json = r#"{"id": "tx-1", "amount": "lots", "date": "2024-03-01T00:00:00Z"}"#;
        assert!(serde_json::from_str::<Transaction>(json).is_err());

        let json = r#"{"id": "tx-1", "amount": 1}"#;
        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }
}
