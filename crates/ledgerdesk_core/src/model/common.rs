//! Shared model vocabulary.

use serde::{Deserialize, Serialize};

/// Single-character default marker carried by countries and currencies.
///
/// The flag is stored data, not a selection filter: default lookups take the
/// first row of the declared query order, and at most one row should carry
/// `Yes` for that to stay meaningful. The repository layer does not enforce
/// uniqueness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefaultFlag {
    /// This row is the designated default (`Y` on the wire).
    #[serde(rename = "Y")]
    Yes,
    /// Regular row (`N` on the wire).
    #[default]
    #[serde(rename = "N")]
    No,
}

impl DefaultFlag {
    /// Returns whether this flag marks the designated default row.
    pub fn is_default(self) -> bool {
        matches!(self, Self::Yes)
    }
}
