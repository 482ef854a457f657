//! Company domain model.
//!
//! # Responsibility
//! - Define the tenant company record and its lifecycle helpers.
//!
//! # Invariants
//! - `company_id` is caller-assigned and stable for the row lifetime.
//! - `is_deleted` is the source of truth for tombstone state.
//! - At most one non-deleted company is meaningful to callers; the store
//!   does not enforce cardinality, callers rely on first-result semantics.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::country::CountryCode;
use crate::model::currency::CurrencyCode;
use serde::{Deserialize, Serialize};

/// Stable identifier for a company row.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CompanyId = i64;

/// Tenant company record.
///
/// Currency and country references are opaque ids; resolving them against
/// the currency/country repositories is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Caller-assigned primary key.
    pub company_id: CompanyId,
    /// Legal display name.
    pub company_name: String,
    /// Trade-register number, when registered.
    pub registration_number: Option<String>,
    /// VAT registration number, when VAT-registered.
    pub vat_number: Option<String>,
    /// Primary contact address.
    pub email_address: Option<String>,
    pub phone_number: Option<String>,
    pub website: Option<String>,
    /// Street address, first line.
    pub address_line1: Option<String>,
    /// Street address, second line.
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state_region: Option<String>,
    pub postal_code: Option<String>,
    /// Default currency reference, resolved by callers.
    pub currency_code: Option<CurrencyCode>,
    /// Default country reference, resolved by callers.
    pub country_code: Option<CountryCode>,
    /// Soft delete tombstone; rows are never removed physically.
    pub is_deleted: bool,
    /// Creation timestamp in Unix epoch milliseconds.
    pub created_at: i64,
    /// User id that created the row, when known.
    pub created_by: Option<i64>,
}

impl Company {
    /// Creates a company record with all optional fields unset.
    ///
    /// # Invariants
    /// - `is_deleted` starts as `false`.
    /// - Reference ids and contact fields are initialized to `None`.
    pub fn new(company_id: CompanyId, company_name: impl Into<String>, created_at: i64) -> Self {
        Self {
            company_id,
            company_name: company_name.into(),
            registration_number: None,
            vat_number: None,
            email_address: None,
            phone_number: None,
            website: None,
            address_line1: None,
            address_line2: None,
            city: None,
            state_region: None,
            postal_code: None,
            currency_code: None,
            country_code: None,
            is_deleted: false,
            created_at,
            created_by: None,
        }
    }

    /// Marks this company as softly deleted (tombstoned).
    pub fn soft_delete(&mut self) {
        self.is_deleted = true;
    }

    /// Clears the soft delete flag.
    pub fn restore(&mut self) {
        self.is_deleted = false;
    }

    /// Returns whether this company should be considered visible/active.
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }
}
