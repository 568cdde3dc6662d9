//! Investment position and investment transaction models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::enums::{InvestmentStatus, InvestmentType};

/// An investment position held through an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    /// Primary identifier
    pub id: String,
    /// Item this investment belongs to
    pub item_id: String,
    /// Asset class
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    /// Asset subtype (e.g. CDB, MULTIMARKET_FUND)
    pub subtype: Option<String>,
    /// Number at the institution
    pub number: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// Net balance
    pub balance: Decimal,
    /// ISO currency code
    pub currency_code: Option<String>,
    /// Associated code (e.g. fund CNPJ, ticker)
    pub code: Option<String>,
    /// ISIN
    pub isin: Option<String>,
    /// Last month's rate of return
    pub last_month_rate: Option<f64>,
    /// Trailing twelve months' rate of return
    pub last_twelve_months_rate: Option<f64>,
    /// Annual rate of return
    pub annual_rate: Option<f64>,
    /// Quota value at `date`
    pub value: Option<Decimal>,
    /// Quantity of quotas held
    pub quantity: Option<f64>,
    /// Gross amount
    pub amount: Option<Decimal>,
    /// Income tax
    pub taxes: Option<Decimal>,
    /// Financial operations tax
    pub taxes2: Option<Decimal>,
    /// Quota date or last update
    pub date: DateTime<Utc>,
    /// Holder name
    pub owner: Option<String>,
    /// Profit over the original amount
    pub amount_profit: Option<Decimal>,
    /// Amount available for withdrawal
    pub amount_withdrawal: Option<Decimal>,
    /// Originally invested amount
    pub amount_original: Option<Decimal>,
    /// Position status
    pub status: Option<InvestmentStatus>,
    /// Issuing institution
    pub issuer: Option<String>,
    /// Issuer's CNPJ
    #[serde(rename = "issuerCNPJ")]
    pub issuer_cnpj: Option<String>,
    /// Issue date
    pub issue_date: Option<DateTime<Utc>>,
    /// Contracted rate
    pub rate: Option<f64>,
    /// Rate indexer (CDI, IPCA, ...)
    pub rate_type: Option<String>,
    /// Fixed annual rate component
    pub fixed_annual_rate: Option<f64>,
}

/// A buy, sell or other movement on an investment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentTransaction {
    /// Primary identifier
    pub id: Option<String>,
    /// Gross amount
    pub amount: Option<Decimal>,
    /// Description as sent by the institution
    pub description: Option<String>,
    /// Quota value at the transaction date
    pub value: Option<Decimal>,
    /// Quotas bought or sold
    pub quantity: Option<f64>,
    /// When the trade was made
    pub trade_date: Option<DateTime<Utc>>,
    /// Settlement date
    pub date: Option<DateTime<Utc>>,
    /// BUY, SELL, TAX, ...
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    /// CREDIT or DEBIT
    pub movement_type: Option<String>,
    /// Amount after fees
    pub net_amount: Option<Decimal>,
    /// Agreed rate
    pub agreed_rate: Option<f64>,
    /// Brokerage note number
    pub brokerage_number: Option<String>,
    /// Fees charged, keyed by fee name
    pub expenses: Option<Map<String, Value>>,
}
