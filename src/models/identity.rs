//! Identity (account holder) models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Personal or company data of the item owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Primary identifier
    pub id: String,
    /// Item this identity was collected from
    pub item_id: String,
    /// Date of birth
    pub birth_date: Option<DateTime<Utc>>,
    /// Tax number (CPF/CNPJ)
    pub tax_number: Option<String>,
    /// Primary document
    pub document: Option<String>,
    /// Primary document type
    pub document_type: Option<String>,
    /// Job title
    pub job_title: Option<String>,
    /// Full name
    pub full_name: Option<String>,
    /// Company establishment code
    pub establishment_code: Option<String>,
    /// Company establishment name
    pub establishment_name: Option<String>,
    /// Company name
    pub company_name: Option<String>,
    /// Phone numbers
    pub phone_numbers: Option<Vec<PhoneNumber>>,
    /// Email addresses
    pub emails: Option<Vec<Email>>,
    /// Postal addresses
    pub addresses: Option<Vec<Address>>,
    /// Family relations
    pub relations: Option<Vec<IdentityRelation>>,
    /// Investor suitability profile
    pub investor_profile: Option<String>,
    /// Occupation and income
    pub qualifications: Option<Qualifications>,
    /// Relationship with the institution
    pub financial_relationships: Option<FinancialRelationships>,
    /// When the record was created
    pub created_at: Option<DateTime<Utc>>,
    /// When the record was last updated
    pub updated_at: Option<DateTime<Utc>>,
}

/// A phone number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumber {
    /// Personal, Work or Residencial
    #[serde(rename = "type")]
    pub phone_type: Option<String>,
    /// Full number
    pub value: String,
}

/// An email address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Email {
    /// Personal or Work
    #[serde(rename = "type")]
    pub email_type: Option<String>,
    /// Address
    pub value: String,
}

/// A postal address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// All components joined
    pub full_address: Option<String>,
    /// Street name and number
    pub primary_address: Option<String>,
    /// City
    pub city: Option<String>,
    /// Zip code
    pub postal_code: Option<String>,
    /// State or province
    pub state: Option<String>,
    /// Country
    pub country: Option<String>,
    /// Personal or Work
    #[serde(rename = "type")]
    pub address_type: Option<String>,
}

/// A family relation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRelation {
    /// Father, Mother or Spouse
    #[serde(rename = "type")]
    pub relation_type: Option<String>,
    /// Full name
    pub name: Option<String>,
    /// Primary document
    pub document: Option<String>,
}

/// Occupation and income declared to the institution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Qualifications {
    /// Employer CNPJ
    pub company_cnpj: String,
    /// Occupation code
    pub occupation_code: Option<String>,
    /// Declared income
    pub informed_income: Option<InformedIncome>,
    /// Declared assets
    pub informed_patrimony: Option<InformedPatrimony>,
}

/// Declared income.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InformedIncome {
    /// Income frequency
    pub frequency: Option<String>,
    /// Amount
    pub amount: Option<Decimal>,
    /// Declaration date
    pub date: Option<DateTime<Utc>>,
}

/// Declared assets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InformedPatrimony {
    /// Amount
    pub amount: Option<Decimal>,
    /// Reference year
    pub year: Option<i32>,
}

/// Relationship between the owner and the institution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRelationships {
    /// Start of the relationship
    pub start_date: Option<DateTime<Utc>>,
    /// Products and services contracted
    pub products_services_type: Option<Vec<String>>,
    /// Legal representatives
    #[serde(default)]
    pub procurators: Vec<Procurator>,
    /// Accounts held
    pub accounts: Option<Vec<FinancialRelationshipAccount>>,
}

/// A legal representative.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Procurator {
    /// Representation type
    #[serde(rename = "type")]
    pub procurator_type: Option<String>,
    /// CPF
    pub cpf_number: Option<String>,
    /// Civil name
    pub civil_name: Option<String>,
    /// Social name
    pub social_name: Option<String>,
}

/// An account held at the institution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRelationshipAccount {
    /// COMPE bank code
    pub compe_code: Option<String>,
    /// Branch code
    pub branch_code: Option<String>,
    /// Account number
    pub number: Option<String>,
    /// Check digit
    pub check_digit: Option<String>,
    /// Account type
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    /// Account subtype
    pub subtype: Option<String>,
}
