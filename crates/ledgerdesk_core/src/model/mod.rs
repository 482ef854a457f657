//! Reference-data entity definitions.
//!
//! # Responsibility
//! - Define the flat records persisted by the repository layer.
//! - Keep entity shapes free of query or storage concerns.
//!
//! # Invariants
//! - Every entity is identified by a caller-assigned integer key.
//! - Deletion is represented by soft-delete flags, not hard delete.
//! - Field layouts round-trip unchanged through create/update.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod common;
pub mod company;
pub mod country;
pub mod currency;
