//! Generic reference-data store over a borrowed SQLite connection.
//!
//! # Responsibility
//! - Provide the one access pattern shared by all reference entities:
//!   find-by-key, typed-query execution, singleton reduction, create and
//!   merge-style update.
//! - Own row/value codec helpers shared by the entity facades.
//!
//! # Invariants
//! - Query identifiers are compile-time constants; there is no runtime
//!   registry to misconfigure.
//! - Absence is structural (`None`/empty vec), never an error.
//! - `update` is merge-as-upsert: a missing key is inserted, not rejected.
//!   `update_strict` is the opt-in stricter contract.
//! - The store borrows its connection and never creates, pools or closes it.
//!
//! # See also
//! - docs/architecture/repository.md

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::common::DefaultFlag;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Row, ToSql};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for reference-data persistence and queries.
#[derive(Debug)]
pub enum RepoError {
    /// Store-level failure, passed through unchanged.
    Db(DbError),
    /// Strict update targeted a key with no row.
    NotFound {
        table: &'static str,
        key: String,
    },
    /// Persisted value cannot be decoded into the entity shape.
    InvalidData(String),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
    /// The connection has not been migrated to the expected schema version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { table, key } => write!(f, "no row in {table} for key `{key}`"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::InconsistentState(details) => {
                write!(f, "inconsistent store state: {details}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Decodes one SQL row into a result value.
///
/// Implemented by full entities and by reduced projections (dropdown pairs,
/// scalars), so both run through the same query entry points.
pub trait RowModel: Sized {
    fn from_row(row: &Row<'_>) -> RepoResult<Self>;
}

/// Column contract tying an entity type to its table.
///
/// # Invariants
/// - `COLUMNS` lists every persisted column and starts with `KEY_COLUMN`;
///   the SQL builders rely on that ordering.
/// - `to_params` yields one value per `COLUMNS` entry, in the same order.
pub trait RefEntity: RowModel {
    /// Primary-key type for this entity.
    type Key: ToSql + Display;

    const TABLE: &'static str;
    const KEY_COLUMN: &'static str;
    const COLUMNS: &'static [&'static str];

    /// Returns the primary-key value of this instance.
    fn key(&self) -> Self::Key;

    /// Binds every column value in `COLUMNS` order.
    fn to_params(&self) -> Vec<Value>;
}

/// Predeclared query constant: identifier, SQL text and result type.
///
/// Declared as `pub const` items next to each facade, so a mistyped or
/// unregistered identifier is a compile error rather than a runtime lookup
/// failure.
pub struct EntityQuery<T> {
    name: &'static str,
    sql: &'static str,
    result: PhantomData<fn() -> T>,
}

impl<T> EntityQuery<T> {
    /// Declares a query constant.
    pub const fn new(name: &'static str, sql: &'static str) -> Self {
        Self {
            name,
            sql,
            result: PhantomData,
        }
    }

    /// Stable identifier, kept for diagnostics and caller-side registries.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// SQL text executed by the store.
    pub fn sql(&self) -> &'static str {
        self.sql
    }
}

impl<T> std::fmt::Debug for EntityQuery<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityQuery")
            .field("name", &self.name)
            .finish()
    }
}

/// Reduced (value, label) view for selection-list rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownEntry {
    /// Entity primary key.
    pub value: i64,
    /// Display label.
    pub label: String,
}

impl RowModel for DropdownEntry {
    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            value: row.get("value")?,
            label: row.get("label")?,
        })
    }
}

impl RowModel for i64 {
    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(row.get(0)?)
    }
}

/// SQLite-backed generic store for one reference entity.
pub struct SqliteRefStore<'conn, E: RefEntity> {
    conn: &'conn Connection,
    entity: PhantomData<fn() -> E>,
}

impl<'conn, E: RefEntity> SqliteRefStore<'conn, E> {
    /// Constructs a store from a migrated/ready connection.
    ///
    /// Schema mismatches are configuration errors and surface immediately;
    /// no operation on a store can run against an unverified connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready::<E>(conn)?;
        Ok(Self {
            conn,
            entity: PhantomData,
        })
    }

    /// Looks up one row by primary key.
    pub fn find_by_key(&self, key: &E::Key) -> RepoResult<Option<E>> {
        let mut stmt = self.conn.prepare(&select_by_key_sql::<E>())?;
        let mut rows = stmt.query([key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(E::from_row(row)?));
        }

        Ok(None)
    }

    /// Executes a query constant and returns all rows in query order.
    pub fn query_all<T: RowModel>(&self, query: &EntityQuery<T>) -> RepoResult<Vec<T>> {
        self.query_all_with(query, Vec::new())
    }

    /// Executes a parameterized query constant and returns all rows.
    pub fn query_all_with<T: RowModel>(
        &self,
        query: &EntityQuery<T>,
        bind_values: Vec<Value>,
    ) -> RepoResult<Vec<T>> {
        let mut stmt = self.conn.prepare(query.sql())?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(T::from_row(row)?);
        }

        Ok(items)
    }

    /// Reduces a query constant to its first row, or `None` when empty.
    pub fn query_single<T: RowModel>(&self, query: &EntityQuery<T>) -> RepoResult<Option<T>> {
        Ok(self.query_all(query)?.into_iter().next())
    }

    /// Reduces a parameterized query constant to its first row.
    pub fn query_single_with<T: RowModel>(
        &self,
        query: &EntityQuery<T>,
        bind_values: Vec<Value>,
    ) -> RepoResult<Option<T>> {
        Ok(self.query_all_with(query, bind_values)?.into_iter().next())
    }

    /// Inserts a new, not-yet-persistent instance.
    ///
    /// A duplicate key surfaces as the store's constraint error, passed
    /// through unchanged.
    pub fn create(&self, entity: &E) -> RepoResult<()> {
        self.conn
            .execute(&insert_sql::<E>(), params_from_iter(entity.to_params()))?;
        Ok(())
    }

    /// Merges the instance's fields into the row with the matching key and
    /// returns the persistent result.
    ///
    /// When no row with that key exists the store inserts one. Callers
    /// wanting a missing key rejected use [`Self::update_strict`].
    pub fn update(&self, entity: &E) -> RepoResult<E> {
        self.conn
            .execute(&upsert_sql::<E>(), params_from_iter(entity.to_params()))?;
        self.find_by_key(&entity.key())?
            .ok_or(RepoError::InconsistentState(
                "merged row not found in read-back",
            ))
    }

    /// Updates the row with the matching key and returns the persistent
    /// result, failing with `NotFound` when the key is absent.
    pub fn update_strict(&self, entity: &E) -> RepoResult<E> {
        let changed = self
            .conn
            .execute(&update_sql::<E>(), params_from_iter(entity.to_params()))?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                table: E::TABLE,
                key: entity.key().to_string(),
            });
        }

        self.find_by_key(&entity.key())?
            .ok_or(RepoError::InconsistentState(
                "updated row not found in read-back",
            ))
    }
}

fn select_by_key_sql<E: RefEntity>() -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = ?1;",
        E::COLUMNS.join(", "),
        E::TABLE,
        E::KEY_COLUMN
    )
}

fn insert_sql<E: RefEntity>() -> String {
    format!(
        "INSERT INTO {} ({}) VALUES ({});",
        E::TABLE,
        E::COLUMNS.join(", "),
        placeholders(E::COLUMNS.len())
    )
}

fn upsert_sql<E: RefEntity>() -> String {
    let assignments = E::COLUMNS
        .iter()
        .filter(|column| **column != E::KEY_COLUMN)
        .map(|column| format!("{column} = excluded.{column}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "INSERT INTO {} ({}) VALUES ({}) ON CONFLICT({}) DO UPDATE SET {};",
        E::TABLE,
        E::COLUMNS.join(", "),
        placeholders(E::COLUMNS.len()),
        E::KEY_COLUMN,
        assignments
    )
}

fn update_sql<E: RefEntity>() -> String {
    let assignments = E::COLUMNS
        .iter()
        .enumerate()
        .skip(1)
        .map(|(idx, column)| format!("{} = ?{}", column, idx + 1))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "UPDATE {} SET {} WHERE {} = ?1;",
        E::TABLE,
        assignments,
        E::KEY_COLUMN
    )
}

fn placeholders(count: usize) -> String {
    (1..=count)
        .map(|idx| format!("?{idx}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn ensure_connection_ready<E: RefEntity>(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, E::TABLE)? {
        return Err(RepoError::MissingRequiredTable(E::TABLE));
    }

    for &column in E::COLUMNS {
        if !table_has_column(conn, E::TABLE, column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: E::TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}

pub(crate) fn opt_text(value: Option<&str>) -> Value {
    match value {
        Some(text) => Value::Text(text.to_string()),
        None => Value::Null,
    }
}

pub(crate) fn opt_integer(value: Option<i64>) -> Value {
    match value {
        Some(number) => Value::Integer(number),
        None => Value::Null,
    }
}

pub(crate) fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

pub(crate) fn parse_bool_int(value: i64) -> Option<bool> {
    match value {
        0 => Some(false),
        1 => Some(true),
        _ => None,
    }
}

pub(crate) fn default_flag_to_db(flag: DefaultFlag) -> &'static str {
    match flag {
        DefaultFlag::Yes => "Y",
        DefaultFlag::No => "N",
    }
}

pub(crate) fn parse_default_flag(value: &str) -> Option<DefaultFlag> {
    match value {
        "Y" => Some(DefaultFlag::Yes),
        "N" => Some(DefaultFlag::No),
        _ => None,
    }
}
