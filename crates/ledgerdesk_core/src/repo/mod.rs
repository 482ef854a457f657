//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the generic reference-data access pattern and its entity
//!   facades.
//! - Isolate SQLite query details from caller orchestration.
//!
//! # Invariants
//! - Read operations report absence structurally, never as errors.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.
//!
//! # See also
//! - docs/architecture/repository.md

pub mod company_repo;
pub mod country_repo;
pub mod currency_repo;
pub mod store;
