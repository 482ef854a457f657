//! Country domain model.
//!
//! # Responsibility
//! - Define the country reference record used for address and tax setup.
//!
//! # Invariants
//! - `country_code` is caller-assigned and stable for the row lifetime.
//! - At most one row should carry `DefaultFlag::Yes`; default lookup takes
//!   the first row of the declared query order either way.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::common::DefaultFlag;
use serde::{Deserialize, Serialize};

/// Stable identifier for a country row.
pub type CountryCode = i64;

/// Country reference record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Caller-assigned primary key.
    pub country_code: CountryCode,
    /// Display name.
    pub country_name: String,
    /// ISO 3166-1 alpha-3 code, always three characters.
    pub iso_alpha3: String,
    pub description: Option<String>,
    /// Single-character default marker (`Y`/`N` on the wire).
    pub default_flag: DefaultFlag,
}

impl Country {
    /// Creates a country record with no description and the flag cleared.
    pub fn new(
        country_code: CountryCode,
        country_name: impl Into<String>,
        iso_alpha3: impl Into<String>,
    ) -> Self {
        Self {
            country_code,
            country_name: country_name.into(),
            iso_alpha3: iso_alpha3.into(),
            description: None,
            default_flag: DefaultFlag::No,
        }
    }

    /// Marks this country as the designated default.
    pub fn mark_default(&mut self) {
        self.default_flag = DefaultFlag::Yes;
    }

    /// Clears the default marker.
    pub fn clear_default(&mut self) {
        self.default_flag = DefaultFlag::No;
    }

    /// Returns whether this country carries the default marker.
    pub fn is_default(&self) -> bool {
        self.default_flag.is_default()
    }
}
