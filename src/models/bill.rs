//! Credit card bill models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A credit card bill.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// Primary identifier
    pub id: String,
    /// Credit card account this bill belongs to
    pub account_id: Option<String>,
    /// Due date
    pub due_date: Option<DateTime<Utc>>,
    /// Total amount
    pub total_amount: Option<Decimal>,
    /// Currency of `total_amount`
    pub total_amount_currency_code: Option<String>,
    /// Minimum payment required
    pub minimum_payment_amount: Option<Decimal>,
    /// Whether the bill can be paid in installments
    pub allows_installments: Option<bool>,
    /// Charges and fees on the bill
    pub finance_charges: Option<Vec<BillFinanceCharge>>,
}

/// A charge or fee on a bill (IOF, late payment interest, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillFinanceCharge {
    /// Identifier
    pub id: Option<String>,
    /// Charge type
    #[serde(rename = "type")]
    pub charge_type: Option<String>,
    /// Amount
    pub amount: Option<Decimal>,
    /// ISO currency code
    pub currency_code: Option<String>,
    /// Free-text details
    pub additional_info: Option<String>,
}

impl Bill {
    /// Sum of all finance charges on the bill.
    pub fn total_finance_charges(&self) -> Decimal {
        self.finance_charges
            .iter()
            .flatten()
            .filter_map(|c| c.amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_bill() {
        let json = r#"{
            "id": "bill-1",
            "accountId": "acc-1",
            "dueDate": "2024-04-10T00:00:00.000Z",
            "totalAmount": 1234.5,
            "allowsInstallments": true,
            "financeCharges": [
                {"type": "IOF", "amount": 3.25},
                {"type": "LATE_PAYMENT_INTEREST", "amount": 10.5},
                {"type": "OTHER"}
            ]
        }"#;

        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.total_amount, Some(dec!(1234.5)));
        assert_eq!(bill.allows_installments, Some(true));
        assert_eq!(bill.total_finance_charges(), dec!(13.75));
    }

    #[test]
    fn test_bill_without_charges() {
        let bill: Bill = serde_json::from_str(r#"{"id": "bill-2"}"#).unwrap();
        assert_eq!(bill.total_finance_charges(), Decimal::ZERO);
    }
}
