//! Social security benefit models (payroll-deductible loans).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A benefit received by the item owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benefit {
    /// Primary identifier
    pub id: String,
    /// Item this benefit belongs to
    pub item_id: String,
    /// Benefit number
    pub number: Option<String>,
    /// Benefit type
    #[serde(rename = "type")]
    pub benefit_type: Option<String>,
    /// Beneficiary's name
    pub beneficiary_name: Option<String>,
    /// Base value for the deductible margin
    pub margin_base_value: Option<Decimal>,
    /// Margin still available
    pub available_margin_value: Option<Decimal>,
    /// Margin already used
    pub used_margin_value: Option<Decimal>,
    /// Margin reserved
    pub reserved_margin_value: Option<Decimal>,
    /// Deductible margin available
    pub deductible_available_margin_value: Option<Decimal>,
    /// Institution paying the benefit
    pub paying_institution: Option<PayingInstitution>,
    /// Loans deducted from the benefit
    pub loans: Option<Vec<BenefitLoan>>,
}

/// Institution paying a benefit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayingInstitution {
    /// Institution name
    pub name: Option<String>,
    /// Institution code
    pub code: Option<String>,
    /// Branch
    pub agency: Option<String>,
    /// Account number
    pub account: Option<String>,
}

/// Loan deducted from a benefit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitLoan {
    /// Contract code
    pub contract_code: Option<String>,
    /// Contract code in the HISCON statement
    pub hiscon_contract_code: Option<String>,
    /// Effective interest rate
    pub effective_interest_rate: Option<f64>,
    /// Total effective cost, annual
    pub cet_annual_rate: Option<f64>,
    /// Total effective cost, monthly
    pub cet_month_rate: Option<f64>,
    /// ISO currency code
    pub currency_code: Option<String>,
    /// Amortization regime
    pub amortization_regime: Option<String>,
    /// When the loan was contracted
    pub operation_hiring_date: Option<DateTime<Utc>>,
    /// Number of installments
    pub installments_quantity: Option<u32>,
    /// Installment value
    pub installments_value: Option<Decimal>,
    /// First installment due date
    pub due_date_first_installment: Option<DateTime<Utc>>,
    /// Last installment due date
    pub due_date_last_installment: Option<DateTime<Utc>>,
    /// Correspondent bank CNPJ
    pub cnpj_correspondent_banking: Option<String>,
    /// Link to the contract PDF
    pub pdf_contract: Option<String>,
    /// Borrower details
    pub client: Option<BenefitLoanClient>,
}

/// Borrower of a benefit loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitLoanClient {
    /// Document number
    pub document: Option<String>,
    /// Full name
    pub name: Option<String>,
    /// Phone number
    pub phone: Option<String>,
    /// Street
    pub address_street: Option<String>,
    /// Street number
    pub address_number: Option<String>,
    /// City
    pub address_city: Option<String>,
    /// Zip code
    pub address_zip_code: Option<String>,
    /// State
    pub address_state: Option<String>,
}
