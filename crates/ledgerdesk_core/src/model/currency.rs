//! Currency domain model.
//!
//! # Responsibility
//! - Define the currency reference record used for amounts and conversion
//!   pickers.
//!
//! # Invariants
//! - `currency_code` is caller-assigned and stable for the row lifetime.
//! - `is_deleted` is the source of truth for tombstone state.
//! - List ordering is `display_order` first, then `currency_code`; default
//!   lookup takes the first row of that order.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::common::DefaultFlag;
use serde::{Deserialize, Serialize};

/// Stable identifier for a currency row.
pub type CurrencyCode = i64;

/// Currency reference record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Caller-assigned primary key.
    pub currency_code: CurrencyCode,
    /// Display name.
    pub currency_name: String,
    /// ISO 4217 code, always three characters.
    pub iso_code: String,
    /// Display symbol, when one exists.
    pub symbol: Option<String>,
    pub description: Option<String>,
    /// Single-character default marker (`Y`/`N` on the wire).
    pub default_flag: DefaultFlag,
    /// Position in currency lists; lower sorts first, ties break on code.
    pub display_order: i64,
    /// Soft delete tombstone; rows are never removed physically.
    pub is_deleted: bool,
    /// Creation timestamp in Unix epoch milliseconds.
    pub created_at: i64,
    /// User id that created the row, when known.
    pub created_by: Option<i64>,
}

impl Currency {
    /// Creates a currency record with optional fields unset.
    ///
    /// # Invariants
    /// - `display_order` starts as `0`, so fresh rows sort by code.
    /// - `is_deleted` starts as `false` and the default marker is cleared.
    pub fn new(
        currency_code: CurrencyCode,
        currency_name: impl Into<String>,
        iso_code: impl Into<String>,
        created_at: i64,
    ) -> Self {
        Self {
            currency_code,
            currency_name: currency_name.into(),
            iso_code: iso_code.into(),
            symbol: None,
            description: None,
            default_flag: DefaultFlag::No,
            display_order: 0,
            is_deleted: false,
            created_at,
            created_by: None,
        }
    }

    /// Marks this currency as the designated default.
    pub fn mark_default(&mut self) {
        self.default_flag = DefaultFlag::Yes;
    }

    /// Clears the default marker.
    pub fn clear_default(&mut self) {
        self.default_flag = DefaultFlag::No;
    }

    /// Returns whether this currency carries the default marker.
    pub fn is_default(&self) -> bool {
        self.default_flag.is_default()
    }

    /// Marks this currency as softly deleted (tombstoned).
    pub fn soft_delete(&mut self) {
        self.is_deleted = true;
    }

    /// Clears the soft delete flag.
    pub fn restore(&mut self) {
        self.is_deleted = false;
    }

    /// Returns whether this currency should be considered visible/active.
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }
}
