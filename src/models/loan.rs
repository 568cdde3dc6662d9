//! Loan contract models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A loan contract collected from an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    /// Primary identifier
    pub id: String,
    /// Item this loan belongs to
    pub item_id: String,
    /// Contract number at the institution
    pub contract_number: Option<String>,
    /// Standard contract number (IPOC code)
    pub ipoc_code: Option<String>,
    /// Name of the credit product
    pub product_name: Option<String>,
    /// Loan modality
    #[serde(rename = "type")]
    pub loan_type: Option<String>,
    /// When the data was collected
    pub date: Option<DateTime<Utc>>,
    /// When the loan was contracted
    pub contract_date: Option<DateTime<Utc>>,
    /// When the amount was disbursed
    pub disbursement_dates: Option<Vec<DateTime<Utc>>>,
    /// Settlement date
    pub settlement_date: Option<DateTime<Utc>>,
    /// Contracted amount
    pub contract_amount: Option<Decimal>,
    /// ISO currency code
    pub currency_code: Option<String>,
    /// Final due date
    pub due_date: Option<DateTime<Utc>>,
    /// Installment frequency
    pub installment_periodicity: Option<String>,
    /// Details when the periodicity is OTHERS
    pub installment_periodicity_additional_info: Option<String>,
    /// First installment due date
    pub first_installment_due_date: Option<DateTime<Utc>>,
    /// Total effective cost, annual percentage
    #[serde(rename = "CET")]
    pub cet: Option<f64>,
    /// Amortization system (SAC, PRICE, ...)
    pub amortization_scheduled: Option<String>,
    /// Details when the amortization system is OTHERS
    pub amortization_scheduled_additional_info: Option<String>,
    /// Consignor CNPJ
    pub cnpj_consignee: Option<String>,
    /// Contracted interest rates
    pub interest_rates: Option<Vec<LoanInterestRate>>,
    /// Contracted fees
    pub contracted_fees: Option<Vec<LoanContractedFee>>,
    /// Contracted finance charges
    pub contracted_finance_charges: Option<Vec<LoanContractedFinanceCharge>>,
    /// Warranties backing the contract
    pub warranties: Option<Vec<LoanWarranty>>,
    /// Installment schedule
    pub installments: Option<LoanInstallments>,
    /// Payments made
    pub payments: Option<LoanPayments>,
}

/// Interest rate clause of a loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanInterestRate {
    /// NOMINAL or EFETIVA
    pub tax_type: Option<String>,
    /// SIMPLES or COMPOSTO
    pub interest_rate_type: Option<String>,
    /// MONTHLY or YEARLY
    pub tax_periodicity: Option<String>,
    /// Calculation basis, e.g. "21/252"
    pub calculation: Option<String>,
    /// Benchmark rate type
    pub referential_rate_indexer_type: Option<String>,
    /// Benchmark rate subtype
    pub referential_rate_indexer_sub_type: Option<String>,
    /// Benchmark details
    pub referential_rate_indexer_additional_info: Option<String>,
    /// Pre-fixed rate, 1 = 100%
    pub pre_fixed_rate: Option<f64>,
    /// Post-fixed rate, 1 = 100%
    pub post_fixed_rate: Option<f64>,
    /// Free-text details
    pub additional_info: Option<String>,
}

/// Fee agreed in a loan contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanContractedFee {
    /// Fee name
    pub name: Option<String>,
    /// Fee acronym
    pub code: Option<String>,
    /// UNICA or BY_INSTALLMENT
    pub charge_type: Option<String>,
    /// MINIMO, MAXIMO, FIXO or PERCENTUAL
    pub charge: Option<String>,
    /// Fee amount
    pub amount: Option<Decimal>,
    /// Fee rate
    pub rate: Option<f64>,
}

/// Finance charge agreed in a loan contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanContractedFinanceCharge {
    /// Charge type
    #[serde(rename = "type")]
    pub charge_type: Option<String>,
    /// Free-text details
    pub charge_additional_info: Option<String>,
    /// Charge rate in percent
    pub charge_rate: Option<f64>,
}

/// Warranty backing a loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanWarranty {
    /// ISO currency code
    pub currency_code: Option<String>,
    /// Warranty type
    #[serde(rename = "type")]
    pub warranty_type: Option<String>,
    /// Warranty subtype
    pub subtype: Option<String>,
    /// Original value
    pub amount: Option<Decimal>,
}

/// Installment schedule of a loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanInstallments {
    /// Unit of the total term (DAY, MONTH, ...)
    pub type_number_of_installments: Option<String>,
    /// Total term
    pub total_number_of_installments: Option<u32>,
    /// Unit of the remaining term
    pub type_contract_remaining: Option<String>,
    /// Remaining term
    pub contract_remaining_number: Option<u32>,
    /// Installments paid
    pub paid_installments: Option<u32>,
    /// Installments still due
    pub due_installments: Option<u32>,
    /// Overdue installments
    pub past_due_installments: Option<u32>,
    /// Non-regular installments
    pub balloon_payments: Option<Vec<LoanBalloonPayment>>,
}

/// Non-regular installment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanBalloonPayment {
    /// Due date
    pub due_date: Option<DateTime<Utc>>,
    /// Amount due
    pub amount: Option<LoanBalloonPaymentAmount>,
}

/// Amount of a non-regular installment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanBalloonPaymentAmount {
    /// Amount
    pub value: Option<Decimal>,
    /// ISO currency code
    pub currency_code: Option<String>,
}

/// Payments made on a loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanPayments {
    /// Amount needed to settle the debt
    pub contract_outstanding_balance: Option<Decimal>,
    /// Individual payments
    pub releases: Option<Vec<LoanPaymentRelease>>,
}

/// One payment made on a loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanPaymentRelease {
    /// Single (true) or scheduled (false) payment
    pub is_over_parcel_payment: Option<bool>,
    /// Installment identifier at the institution
    pub installment_id: Option<String>,
    /// Payment date
    pub paid_date: Option<DateTime<Utc>>,
    /// ISO currency code
    pub currency_code: Option<String>,
    /// Amount paid
    pub paid_amount: Option<Decimal>,
    /// Fees and charges paid outside the installment
    pub over_parcel: Option<LoanOverParcel>,
}

/// Fees and charges paid outside an installment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanOverParcel {
    /// Fees
    pub fees: Option<Vec<LoanOverParcelFee>>,
    /// Charges
    pub charges: Option<Vec<LoanOverParcelCharge>>,
}

/// Fee paid outside an installment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanOverParcelFee {
    /// Fee name
    pub name: Option<String>,
    /// Fee acronym
    pub code: Option<String>,
    /// Amount
    pub amount: Option<Decimal>,
}

/// Charge paid outside an installment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanOverParcelCharge {
    /// Charge type
    #[serde(rename = "type")]
    pub charge_type: Option<String>,
    /// Free-text details
    pub additional_info: Option<String>,
    /// Amount
    pub amount: Option<Decimal>,
}
