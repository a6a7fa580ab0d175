use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use ingesta_warehouse::{NewRecord, Warehouse, WarehouseConfig, WarehouseError};

use crate::audit::{self, AuditReport};
use crate::client::{TickerClient, TickerRequest};
use crate::clock;
use crate::config::IngestConfig;
use crate::error::CoreError;
use crate::export::{self, ExportError};
use crate::http::HttpClient;

/// Errors surfaced by one ingestion run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The API call yielded no data; the run stops before any side
    /// effect is performed.
    #[error("ticker endpoint returned no data")]
    EmptySnapshot,

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Warehouse(#[from] WarehouseError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Summary of one completed ingestion run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Capture timestamp shared by every row of this run.
    pub fecha: String,
    /// Rows inserted from the snapshot.
    pub rows_inserted: usize,
    /// Data rows written to the spreadsheet.
    pub rows_exported: usize,
    /// Fields in this run's snapshot.
    pub registros_api: usize,
    /// Cumulative rows in the table.
    pub registros_db: i64,
    /// Audit verdict.
    pub counts_match: bool,
    pub spreadsheet_path: PathBuf,
    pub audit_path: PathBuf,
}

/// Run the full ingestion pipeline: fetch one snapshot, persist its
/// fields, export the table to a spreadsheet, and write the audit
/// report.
///
/// Steps after the no-data guard run in order without transactional
/// rollback across them; any storage or filesystem error aborts the
/// remainder of the run.
///
/// # Errors
/// Returns [`PipelineError::EmptySnapshot`] when the API call yields no
/// data (nothing is written in that case), or the failing step's error
/// otherwise.
pub async fn run(
    config: &IngestConfig,
    http: Arc<dyn HttpClient>,
) -> Result<RunReport, PipelineError> {
    let client = TickerClient::new(config.base_url.as_str(), http);
    let request = TickerRequest::new(config.coin.as_str(), config.method.as_str());

    info!(coin = %request.coin, method = %request.method, "starting ingestion run");
    let snapshot = client.fetch(&request).await?;
    if snapshot.is_empty() {
        return Err(PipelineError::EmptySnapshot);
    }

    let warehouse = Warehouse::open(WarehouseConfig {
        db_path: config.db_path.clone(),
    })?;

    let fecha = clock::local_timestamp();
    let records = snapshot
        .ticker_fields()
        .into_iter()
        .map(|(clave, valor)| NewRecord { clave, valor })
        .collect::<Vec<_>>();
    let rows_inserted = warehouse.ingest_snapshot(&records, &fecha)?;
    info!(rows_inserted, db = %warehouse.db_path().display(), "snapshot stored");

    let rows = warehouse.fetch_all()?;
    let rows_exported = export::export_rows(&config.spreadsheet_path, &rows)?;
    info!(rows_exported, path = %config.spreadsheet_path.display(), "spreadsheet written");

    let registros_db = warehouse.count_rows()?;
    let report = AuditReport::new(snapshot.field_count(), registros_db, clock::local_timestamp());
    audit::write_report(&config.audit_path, &report)?;
    info!(
        registros_api = report.registros_api,
        registros_db,
        counts_match = report.is_match(),
        path = %config.audit_path.display(),
        "audit report written"
    );

    Ok(RunReport {
        fecha,
        rows_inserted,
        rows_exported,
        registros_api: report.registros_api,
        registros_db,
        counts_match: report.is_match(),
        spreadsheet_path: config.spreadsheet_path.clone(),
        audit_path: config.audit_path.clone(),
    })
}
