//! DuckDB-backed storage for ticker ingestion runs.
//!
//! One table, `datos`, holds every captured field as a `(clave, valor,
//! fecha)` row with an auto-assigned id. The table only grows: rows are
//! immutable once written and repeated runs accumulate snapshots
//! distinguished only by their capture timestamp.

pub mod migrations;

use std::fs;
use std::path::{Path, PathBuf};

use ::duckdb::{Connection, ToSql};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during warehouse operations.
#[derive(Debug, Error)]
pub enum WarehouseError {
    /// `DuckDB` database error.
    #[error(transparent)]
    DuckDb(#[from] ::duckdb::Error),

    /// I/O error (file system operations).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Configuration for the warehouse database.
#[derive(Debug, Clone)]
pub struct WarehouseConfig {
    /// Path to the `DuckDB` database file.
    pub db_path: PathBuf,
}

/// A captured ticker field awaiting insertion.
#[derive(Debug, Clone)]
pub struct NewRecord {
    /// Ticker field name (e.g. "last", "high").
    pub clave: String,
    /// Stringified field value.
    pub valor: String,
}

/// A persisted row of the `datos` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickerRow {
    pub id: i64,
    pub clave: String,
    pub valor: String,
    pub fecha: String,
}

/// Storage interface for captured ticker snapshots.
///
/// Each operation opens its own connection and releases it on return;
/// the design assumes single-writer, single-run usage.
pub struct Warehouse {
    config: WarehouseConfig,
}

impl Warehouse {
    /// Open the warehouse, creating the database file and its schema if
    /// they do not exist yet. Safe to call on every run.
    ///
    /// # Errors
    /// Returns an error if the parent directory cannot be created or the
    /// schema cannot be applied.
    pub fn open(config: WarehouseConfig) -> Result<Self, WarehouseError> {
        if let Some(parent) = config.db_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let warehouse = Self { config };
        let connection = warehouse.connect()?;
        migrations::apply_migrations(&connection)?;
        Ok(warehouse)
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn db_path(&self) -> &Path {
        self.config.db_path.as_path()
    }

    fn connect(&self) -> Result<Connection, WarehouseError> {
        Ok(Connection::open(self.config.db_path.as_path())?)
    }

    /// Insert one row per captured field, all sharing the given capture
    /// timestamp. Returns the number of rows inserted.
    ///
    /// No deduplication against prior runs is attempted.
    ///
    /// # Errors
    /// Returns an error if the transaction cannot be committed; nothing
    /// is inserted in that case.
    pub fn ingest_snapshot(
        &self,
        records: &[NewRecord],
        fecha: &str,
    ) -> Result<usize, WarehouseError> {
        if records.is_empty() {
            return Ok(0);
        }

        let connection = self.connect()?;
        connection.execute_batch("BEGIN TRANSACTION")?;
        let result = (|| -> Result<usize, WarehouseError> {
            for record in records {
                let params: [&dyn ToSql; 3] = [&record.clave, &record.valor, &fecha];
                connection.execute(
                    "INSERT INTO datos (clave, valor, fecha) VALUES (?, ?, ?)",
                    params.as_slice(),
                )?;
            }
            Ok(records.len())
        })();

        finalize_transaction(&connection, result)
    }

    /// Read the entire table in insertion order.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn fetch_all(&self) -> Result<Vec<TickerRow>, WarehouseError> {
        let connection = self.connect()?;
        let mut statement =
            connection.prepare("SELECT id, clave, valor, fecha FROM datos ORDER BY id")?;
        let rows = statement
            .query_map([], |row| {
                Ok(TickerRow {
                    id: row.get(0)?,
                    clave: row.get(1)?,
                    valor: row.get(2)?,
                    fecha: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Total row count, cumulative across all historical runs.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn count_rows(&self) -> Result<i64, WarehouseError> {
        let connection = self.connect()?;
        let count = connection.query_row("SELECT COUNT(*) FROM datos", [], |row| row.get(0))?;
        Ok(count)
    }
}

/// Finalize a transaction, committing on success or rolling back on failure.
fn finalize_transaction<T>(
    connection: &Connection,
    result: Result<T, WarehouseError>,
) -> Result<T, WarehouseError> {
    match result {
        Ok(value) => {
            connection.execute_batch("COMMIT")?;
            Ok(value)
        }
        Err(error) => {
            let _ = connection.execute_batch("ROLLBACK");
            Err(error)
        }
    }
}
