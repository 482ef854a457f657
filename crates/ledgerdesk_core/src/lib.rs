//! Core reference-data logic for LedgerDesk.
//!
//! # Responsibility
//! - Own entity models, storage bootstrap, and repository access rules.
//! - Expose a small, stable API surface for application frontends.
//!
//! # Invariants
//! - Core stays deterministic and synchronous.
//! - Repositories borrow an externally managed connection and never open
//!   their own.
//!
//! # See also
//! - docs/architecture/repository.md

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::common::DefaultFlag;
pub use model::company::{Company, CompanyId};
pub use model::country::{Country, CountryCode};
pub use model::currency::{Currency, CurrencyCode};
pub use repo::company_repo::{CompanyRepository, SqliteCompanyRepository};
pub use repo::country_repo::{CountryRepository, SqliteCountryRepository};
pub use repo::currency_repo::{CurrencyRepository, SqliteCurrencyRepository};
pub use repo::store::{
    DropdownEntry, EntityQuery, RefEntity, RepoError, RepoResult, RowModel, SqliteRefStore,
};

/// Returns a static liveness probe string.
///
/// Frontends call this during startup wiring to confirm the core library is
/// linked and callable.
pub fn ping() -> String {
    "pong".to_string()
}

/// Returns the core crate version.
pub fn core_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
