//! Country repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Fix the generic store pattern to the `countries` table.
//! - Declare the country query constants, including the parameterized
//!   name-to-code lookup.
//!
//! # Invariants
//! - `get_default_country` reduces the all-countries query to its first
//!   row; the query orders by country code.
//! - The name lookup matches case-insensitively and yields at most one code.
//!
//! # See also
//! - docs/architecture/repository.md

use crate::model::country::{Country, CountryCode};
use crate::repo::store::{
    default_flag_to_db, opt_text, parse_default_flag, EntityQuery, RefEntity, RepoError,
    RepoResult, RowModel, SqliteRefStore,
};
use rusqlite::types::Value;
use rusqlite::{Connection, Row};

/// Full-entity select over every country, key order.
pub const ALL_COUNTRIES: EntityQuery<Country> = EntityQuery::new(
    "all_countries",
    "SELECT
        country_code,
        country_name,
        iso_alpha3,
        description,
        default_flag
     FROM countries
     ORDER BY country_code ASC;",
);

/// Scalar lookup of a country code by display name, case-insensitive.
pub const COUNTRY_CODE_BY_NAME: EntityQuery<CountryCode> = EntityQuery::new(
    "country_code_by_name",
    "SELECT country_code
     FROM countries
     WHERE country_name = ?1 COLLATE NOCASE
     LIMIT 1;",
);

/// Repository interface for country access.
pub trait CountryRepository {
    /// Looks up one country by primary key.
    fn find_country(&self, country_code: CountryCode) -> RepoResult<Option<Country>>;
    /// Returns the first country row, or `None` on an empty store.
    fn get_default_country(&self) -> RepoResult<Option<Country>>;
    /// Lists every country in key order.
    fn list_countries(&self) -> RepoResult<Vec<Country>>;
    /// Resolves a display name to a country code, `None` when unknown.
    fn country_code_by_name(&self, name: &str) -> RepoResult<Option<CountryCode>>;
    /// Inserts a new country row.
    fn create_country(&self, country: &Country) -> RepoResult<()>;
    /// Merges fields into the matching row, inserting when the key is new.
    fn update_country(&self, country: &Country) -> RepoResult<Country>;
    /// Updates the matching row, failing with `NotFound` when absent.
    fn update_country_strict(&self, country: &Country) -> RepoResult<Country>;
}

/// SQLite-backed country repository.
pub struct SqliteCountryRepository<'conn> {
    store: SqliteRefStore<'conn, Country>,
}

impl<'conn> SqliteCountryRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        Ok(Self {
            store: SqliteRefStore::try_new(conn)?,
        })
    }
}

impl CountryRepository for SqliteCountryRepository<'_> {
    fn find_country(&self, country_code: CountryCode) -> RepoResult<Option<Country>> {
        self.store.find_by_key(&country_code)
    }

    fn get_default_country(&self) -> RepoResult<Option<Country>> {
        self.store.query_single(&ALL_COUNTRIES)
    }

    fn list_countries(&self) -> RepoResult<Vec<Country>> {
        self.store.query_all(&ALL_COUNTRIES)
    }

    fn country_code_by_name(&self, name: &str) -> RepoResult<Option<CountryCode>> {
        self.store.query_single_with(
            &COUNTRY_CODE_BY_NAME,
            vec![Value::Text(name.trim().to_string())],
        )
    }

    fn create_country(&self, country: &Country) -> RepoResult<()> {
        self.store.create(country)
    }

    fn update_country(&self, country: &Country) -> RepoResult<Country> {
        self.store.update(country)
    }

    fn update_country_strict(&self, country: &Country) -> RepoResult<Country> {
        self.store.update_strict(country)
    }
}

impl RowModel for Country {
    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        parse_country_row(row)
    }
}

impl RefEntity for Country {
    type Key = CountryCode;

    const TABLE: &'static str = "countries";
    const KEY_COLUMN: &'static str = "country_code";
    const COLUMNS: &'static [&'static str] = &[
        "country_code",
        "country_name",
        "iso_alpha3",
        "description",
        "default_flag",
    ];

    fn key(&self) -> CountryCode {
        self.country_code
    }

    fn to_params(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.country_code),
            Value::Text(self.country_name.clone()),
            Value::Text(self.iso_alpha3.clone()),
            opt_text(self.description.as_deref()),
            Value::Text(default_flag_to_db(self.default_flag).to_string()),
        ]
    }
}

fn parse_country_row(row: &Row<'_>) -> RepoResult<Country> {
    let flag_text: String = row.get("default_flag")?;
    let default_flag = parse_default_flag(&flag_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid default flag `{flag_text}` in countries.default_flag"
        ))
    })?;

    Ok(Country {
        country_code: row.get("country_code")?,
        country_name: row.get("country_name")?,
        iso_alpha3: row.get("iso_alpha3")?,
        description: row.get("description")?,
        default_flag,
    })
}
