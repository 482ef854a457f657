//! Currency repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Fix the generic store pattern to the `currencies` table.
//! - Declare the currency query constants: the full list, the profile,
//!   company and active subsets, and the conversion-picker exclusion.
//!
//! # Invariants
//! - `get_default_currency` reduces the all-currencies query to its first
//!   row; the query orders by display order, then code.
//! - Subset queries never widen the full list; they only filter it.
//!
//! # See also
//! - docs/architecture/repository.md

use crate::model::currency::{Currency, CurrencyCode};
use crate::repo::store::{
    bool_to_int, default_flag_to_db, opt_integer, opt_text, parse_bool_int, parse_default_flag,
    EntityQuery, RefEntity, RepoError, RepoResult, RowModel, SqliteRefStore,
};
use rusqlite::types::Value;
use rusqlite::{Connection, Row};

/// Full-entity select over every currency, display order first.
pub const ALL_CURRENCIES: EntityQuery<Currency> = EntityQuery::new(
    "all_currencies",
    "SELECT
        currency_code,
        currency_name,
        iso_code,
        symbol,
        description,
        default_flag,
        display_order,
        is_deleted,
        created_at,
        created_by
     FROM currencies
     ORDER BY display_order ASC, currency_code ASC;",
);

/// Active currencies for profile settings lists, label order.
pub const ALL_CURRENCIES_PROFILE: EntityQuery<Currency> = EntityQuery::new(
    "all_currencies_profile",
    "SELECT
        currency_code,
        currency_name,
        iso_code,
        symbol,
        description,
        default_flag,
        display_order,
        is_deleted,
        created_at,
        created_by
     FROM currencies
     WHERE is_deleted = 0
     ORDER BY currency_name COLLATE NOCASE ASC;",
);

/// Currencies referenced as some company's default currency.
pub const ALL_COMPANY_CURRENCIES: EntityQuery<Currency> = EntityQuery::new(
    "all_company_currencies",
    "SELECT
        currency_code,
        currency_name,
        iso_code,
        symbol,
        description,
        default_flag,
        display_order,
        is_deleted,
        created_at,
        created_by
     FROM currencies
     WHERE currency_code IN (
        SELECT currency_code
        FROM companies
        WHERE currency_code IS NOT NULL
     )
     ORDER BY currency_code ASC;",
);

/// Non-deleted currencies, display order first.
pub const ALL_ACTIVE_CURRENCIES: EntityQuery<Currency> = EntityQuery::new(
    "all_active_currencies",
    "SELECT
        currency_code,
        currency_name,
        iso_code,
        symbol,
        description,
        default_flag,
        display_order,
        is_deleted,
        created_at,
        created_by
     FROM currencies
     WHERE is_deleted = 0
     ORDER BY display_order ASC, currency_code ASC;",
);

/// Active currencies other than the given ISO code, for conversion pickers.
pub const CURRENCIES_EXCLUDING: EntityQuery<Currency> = EntityQuery::new(
    "currencies_excluding",
    "SELECT
        currency_code,
        currency_name,
        iso_code,
        symbol,
        description,
        default_flag,
        display_order,
        is_deleted,
        created_at,
        created_by
     FROM currencies
     WHERE iso_code <> ?1
       AND is_deleted = 0
     ORDER BY display_order ASC, currency_code ASC;",
);

/// Repository interface for currency access.
pub trait CurrencyRepository {
    /// Looks up one currency by primary key.
    fn find_currency(&self, currency_code: CurrencyCode) -> RepoResult<Option<Currency>>;
    /// Returns the first currency row, or `None` on an empty store.
    fn get_default_currency(&self) -> RepoResult<Option<Currency>>;
    /// Lists every currency in display order.
    fn list_currencies(&self) -> RepoResult<Vec<Currency>>;
    /// Lists active currencies for profile settings, label order.
    fn list_profile_currencies(&self) -> RepoResult<Vec<Currency>>;
    /// Lists currencies referenced by at least one company.
    fn list_company_currencies(&self) -> RepoResult<Vec<Currency>>;
    /// Lists non-deleted currencies in display order.
    fn list_active_currencies(&self) -> RepoResult<Vec<Currency>>;
    /// Lists active currencies whose ISO code differs from the given one.
    fn currencies_excluding(&self, currency: &Currency) -> RepoResult<Vec<Currency>>;
    /// Inserts a new currency row.
    fn create_currency(&self, currency: &Currency) -> RepoResult<()>;
    /// Merges fields into the matching row, inserting when the key is new.
    fn update_currency(&self, currency: &Currency) -> RepoResult<Currency>;
    /// Updates the matching row, failing with `NotFound` when absent.
    fn update_currency_strict(&self, currency: &Currency) -> RepoResult<Currency>;
}

/// SQLite-backed currency repository.
pub struct SqliteCurrencyRepository<'conn> {
    store: SqliteRefStore<'conn, Currency>,
}

impl<'conn> SqliteCurrencyRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        Ok(Self {
            store: SqliteRefStore::try_new(conn)?,
        })
    }
}

impl CurrencyRepository for SqliteCurrencyRepository<'_> {
    fn find_currency(&self, currency_code: CurrencyCode) -> RepoResult<Option<Currency>> {
        self.store.find_by_key(&currency_code)
    }

    fn get_default_currency(&self) -> RepoResult<Option<Currency>> {
        self.store.query_single(&ALL_CURRENCIES)
    }

    fn list_currencies(&self) -> RepoResult<Vec<Currency>> {
        self.store.query_all(&ALL_CURRENCIES)
    }

    fn list_profile_currencies(&self) -> RepoResult<Vec<Currency>> {
        self.store.query_all(&ALL_CURRENCIES_PROFILE)
    }

    fn list_company_currencies(&self) -> RepoResult<Vec<Currency>> {
        self.store.query_all(&ALL_COMPANY_CURRENCIES)
    }

    fn list_active_currencies(&self) -> RepoResult<Vec<Currency>> {
        self.store.query_all(&ALL_ACTIVE_CURRENCIES)
    }

    fn currencies_excluding(&self, currency: &Currency) -> RepoResult<Vec<Currency>> {
        self.store.query_all_with(
            &CURRENCIES_EXCLUDING,
            vec![Value::Text(currency.iso_code.clone())],
        )
    }

    fn create_currency(&self, currency: &Currency) -> RepoResult<()> {
        self.store.create(currency)
    }

    fn update_currency(&self, currency: &Currency) -> RepoResult<Currency> {
        self.store.update(currency)
    }

    fn update_currency_strict(&self, currency: &Currency) -> RepoResult<Currency> {
        self.store.update_strict(currency)
    }
}

impl RowModel for Currency {
    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        parse_currency_row(row)
    }
}

impl RefEntity for Currency {
    type Key = CurrencyCode;

    const TABLE: &'static str = "currencies";
    const KEY_COLUMN: &'static str = "currency_code";
    const COLUMNS: &'static [&'static str] = &[
        "currency_code",
        "currency_name",
        "iso_code",
        "symbol",
        "description",
        "default_flag",
        "display_order",
        "is_deleted",
        "created_at",
        "created_by",
    ];

    fn key(&self) -> CurrencyCode {
        self.currency_code
    }

    fn to_params(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.currency_code),
            Value::Text(self.currency_name.clone()),
            Value::Text(self.iso_code.clone()),
            opt_text(self.symbol.as_deref()),
            opt_text(self.description.as_deref()),
            Value::Text(default_flag_to_db(self.default_flag).to_string()),
            Value::Integer(self.display_order),
            Value::Integer(bool_to_int(self.is_deleted)),
            Value::Integer(self.created_at),
            opt_integer(self.created_by),
        ]
    }
}

fn parse_currency_row(row: &Row<'_>) -> RepoResult<Currency> {
    let flag_text: String = row.get("default_flag")?;
    let default_flag = parse_default_flag(&flag_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid default flag `{flag_text}` in currencies.default_flag"
        ))
    })?;

    let deleted_raw: i64 = row.get("is_deleted")?;
    let is_deleted = parse_bool_int(deleted_raw).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid is_deleted value `{deleted_raw}` in currencies.is_deleted"
        ))
    })?;

    Ok(Currency {
        currency_code: row.get("currency_code")?,
        currency_name: row.get("currency_name")?,
        iso_code: row.get("iso_code")?,
        symbol: row.get("symbol")?,
        description: row.get("description")?,
        default_flag,
        display_order: row.get("display_order")?,
        is_deleted,
        created_at: row.get("created_at")?,
        created_by: row.get("created_by")?,
    })
}
