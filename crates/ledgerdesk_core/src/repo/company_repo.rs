//! Company repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Fix the generic store pattern to the `companies` table.
//! - Declare the company query constants, including the dropdown projection
//!   and the storage probe.
//!
//! # Invariants
//! - `get_company` reduces the all-companies query to its first row; the
//!   system assumes a single meaningful tenant row.
//! - The dropdown projection excludes soft-deleted rows and sorts by label.
//!
//! # See also
//! - docs/architecture/repository.md

use crate::model::company::{Company, CompanyId};
use crate::repo::store::{
    bool_to_int, opt_integer, opt_text, parse_bool_int, DropdownEntry, EntityQuery, RefEntity,
    RepoError, RepoResult, RowModel, SqliteRefStore,
};
use rusqlite::types::Value;
use rusqlite::{Connection, Row};

/// Full-entity select over every company, key order.
pub const ALL_COMPANIES: EntityQuery<Company> = EntityQuery::new(
    "all_companies",
    "SELECT
        company_id,
        company_name,
        registration_number,
        vat_number,
        email_address,
        phone_number,
        website,
        address_line1,
        address_line2,
        city,
        state_region,
        postal_code,
        currency_code,
        country_code,
        is_deleted,
        created_at,
        created_by
     FROM companies
     ORDER BY company_id ASC;",
);

/// (id, label) projection of active companies for selection lists.
pub const COMPANIES_FOR_DROPDOWN: EntityQuery<DropdownEntry> = EntityQuery::new(
    "companies_for_dropdown",
    "SELECT company_id AS value, company_name AS label
     FROM companies
     WHERE is_deleted = 0
     ORDER BY company_name COLLATE NOCASE ASC;",
);

/// Scalar health probe; yields one row per stored company.
pub const STORAGE_PROBE: EntityQuery<i64> = EntityQuery::new(
    "storage_probe",
    "SELECT 1
     FROM companies;",
);

/// Repository interface for company access.
pub trait CompanyRepository {
    /// Looks up one company by primary key.
    fn find_company(&self, company_id: CompanyId) -> RepoResult<Option<Company>>;
    /// Returns the first company row, or `None` on an empty store.
    fn get_company(&self) -> RepoResult<Option<Company>>;
    /// Lists every company in key order.
    fn list_companies(&self) -> RepoResult<Vec<Company>>;
    /// Lists active companies as (id, label) pairs for selection lists.
    fn companies_for_dropdown(&self) -> RepoResult<Vec<DropdownEntry>>;
    /// Probes the store; `Some(1)` when it answers with at least one row.
    fn probe_storage(&self) -> RepoResult<Option<i64>>;
    /// Inserts a new company row.
    fn create_company(&self, company: &Company) -> RepoResult<()>;
    /// Merges fields into the matching row, inserting when the key is new.
    fn update_company(&self, company: &Company) -> RepoResult<Company>;
    /// Updates the matching row, failing with `NotFound` when absent.
    fn update_company_strict(&self, company: &Company) -> RepoResult<Company>;
}

/// SQLite-backed company repository.
pub struct SqliteCompanyRepository<'conn> {
    store: SqliteRefStore<'conn, Company>,
}

impl<'conn> SqliteCompanyRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        Ok(Self {
            store: SqliteRefStore::try_new(conn)?,
        })
    }
}

impl CompanyRepository for SqliteCompanyRepository<'_> {
    fn find_company(&self, company_id: CompanyId) -> RepoResult<Option<Company>> {
        self.store.find_by_key(&company_id)
    }

    fn get_company(&self) -> RepoResult<Option<Company>> {
        self.store.query_single(&ALL_COMPANIES)
    }

    fn list_companies(&self) -> RepoResult<Vec<Company>> {
        self.store.query_all(&ALL_COMPANIES)
    }

    fn companies_for_dropdown(&self) -> RepoResult<Vec<DropdownEntry>> {
        self.store.query_all(&COMPANIES_FOR_DROPDOWN)
    }

    fn probe_storage(&self) -> RepoResult<Option<i64>> {
        self.store.query_single(&STORAGE_PROBE)
    }

    fn create_company(&self, company: &Company) -> RepoResult<()> {
        self.store.create(company)
    }

    fn update_company(&self, company: &Company) -> RepoResult<Company> {
        self.store.update(company)
    }

    fn update_company_strict(&self, company: &Company) -> RepoResult<Company> {
        self.store.update_strict(company)
    }
}

impl RowModel for Company {
    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        parse_company_row(row)
    }
}

impl RefEntity for Company {
    type Key = CompanyId;

    const TABLE: &'static str = "companies";
    const KEY_COLUMN: &'static str = "company_id";
    const COLUMNS: &'static [&'static str] = &[
        "company_id",
        "company_name",
        "registration_number",
        "vat_number",
        "email_address",
        "phone_number",
        "website",
        "address_line1",
        "address_line2",
        "city",
        "state_region",
        "postal_code",
        "currency_code",
        "country_code",
        "is_deleted",
        "created_at",
        "created_by",
    ];

    fn key(&self) -> CompanyId {
        self.company_id
    }

    fn to_params(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.company_id),
            Value::Text(self.company_name.clone()),
            opt_text(self.registration_number.as_deref()),
            opt_text(self.vat_number.as_deref()),
            opt_text(self.email_address.as_deref()),
            opt_text(self.phone_number.as_deref()),
            opt_text(self.website.as_deref()),
            opt_text(self.address_line1.as_deref()),
            opt_text(self.address_line2.as_deref()),
            opt_text(self.city.as_deref()),
            opt_text(self.state_region.as_deref()),
            opt_text(self.postal_code.as_deref()),
            opt_integer(self.currency_code),
            opt_integer(self.country_code),
            Value::Integer(bool_to_int(self.is_deleted)),
            Value::Integer(self.created_at),
            opt_integer(self.created_by),
        ]
    }
}

fn parse_company_row(row: &Row<'_>) -> RepoResult<Company> {
    let deleted_raw: i64 = row.get("is_deleted")?;
    let is_deleted = parse_bool_int(deleted_raw).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid is_deleted value `{deleted_raw}` in companies.is_deleted"
        ))
    })?;

    Ok(Company {
        company_id: row.get("company_id")?,
        company_name: row.get("company_name")?,
        registration_number: row.get("registration_number")?,
        vat_number: row.get("vat_number")?,
        email_address: row.get("email_address")?,
        phone_number: row.get("phone_number")?,
        website: row.get("website")?,
        address_line1: row.get("address_line1")?,
        address_line2: row.get("address_line2")?,
        city: row.get("city")?,
        state_region: row.get("state_region")?,
        postal_code: row.get("postal_code")?,
        currency_code: row.get("currency_code")?,
        country_code: row.get("country_code")?,
        is_deleted,
        created_at: row.get("created_at")?,
        created_by: row.get("created_by")?,
    })
}
