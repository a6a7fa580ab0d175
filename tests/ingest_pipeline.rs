//! End-to-end ingestion scenarios against mock HTTP transports.
//!
//! These tests verify user-visible run outcomes: rows stored, the CSV
//! export, the audit report text, and the no-data guard.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tempfile::tempdir;

use ingesta_core::{pipeline, IngestConfig, PipelineError};
use ingesta_tests::{FailingHttpClient, StaticHttpClient};
use ingesta_warehouse::{NewRecord, Warehouse, WarehouseConfig};

const TICKER_BODY: &str = r#"{"ticker": {"last": "100000", "high": "101000"}}"#;

fn config_in(dir: &Path) -> IngestConfig {
    IngestConfig {
        base_url: String::from("https://exchange.test/api"),
        coin: String::from("BTC"),
        method: String::from("ticker"),
        db_path: dir.join("ingesta.duckdb"),
        spreadsheet_path: dir.join("muestra_datos.csv"),
        audit_path: dir.join("auditoria.txt"),
    }
}

fn ticker_transport() -> Arc<StaticHttpClient> {
    Arc::new(StaticHttpClient {
        status: 200,
        body: TICKER_BODY,
    })
}

#[tokio::test]
async fn fresh_table_run_stores_exports_and_audits_two_fields() {
    // Given: an empty data directory
    let temp = tempdir().expect("tempdir");
    let config = config_in(temp.path());

    // When: one run against a two-field ticker snapshot
    let report = pipeline::run(&config, ticker_transport())
        .await
        .expect("pipeline run");

    // Then: two rows stored, two exported, counts agree
    assert_eq!(report.rows_inserted, 2);
    assert_eq!(report.rows_exported, 2);
    assert_eq!(report.registros_api, 2);
    assert_eq!(report.registros_db, 2);
    assert!(report.counts_match);

    let warehouse = Warehouse::open(WarehouseConfig {
        db_path: config.db_path.clone(),
    })
    .expect("warehouse open");
    let rows = warehouse.fetch_all().expect("fetch");
    assert_eq!(rows.len(), 2);
    let claves = rows.iter().map(|row| row.clave.as_str()).collect::<Vec<_>>();
    assert!(claves.contains(&"last"));
    assert!(claves.contains(&"high"));
    assert!(rows.iter().all(|row| row.fecha == report.fecha));

    let spreadsheet = fs::read_to_string(&config.spreadsheet_path).expect("spreadsheet");
    assert_eq!(spreadsheet.lines().count(), 3, "header plus two data rows");

    let audit = fs::read_to_string(&config.audit_path).expect("audit");
    assert!(audit.contains("Registros obtenidos del API: 2"));
    assert!(audit.contains("Registros almacenados en BD: 2"));
    assert!(audit.contains("No hay diferencias"));
}

#[tokio::test]
async fn prepopulated_table_reports_count_mismatch() {
    // Given: a table holding five unrelated rows from earlier runs
    let temp = tempdir().expect("tempdir");
    let config = config_in(temp.path());
    let warehouse = Warehouse::open(WarehouseConfig {
        db_path: config.db_path.clone(),
    })
    .expect("warehouse open");
    let unrelated = (0..5)
        .map(|index| NewRecord {
            clave: format!("viejo_{index}"),
            valor: index.to_string(),
        })
        .collect::<Vec<_>>();
    warehouse
        .ingest_snapshot(&unrelated, "2025-01-01 00:00:00")
        .expect("pre-populate");

    // When: one run against the two-field ticker snapshot
    let report = pipeline::run(&config, ticker_transport())
        .await
        .expect("pipeline run");

    // Then: the audit compares this run's 2 fields against 7 total rows
    assert_eq!(report.registros_api, 2);
    assert_eq!(report.registros_db, 7);
    assert!(!report.counts_match);

    let audit = fs::read_to_string(&config.audit_path).expect("audit");
    assert!(audit.contains("Registros obtenidos del API: 2"));
    assert!(audit.contains("Registros almacenados en BD: 7"));
    assert!(audit.contains("Advertencia"));
}

#[tokio::test]
async fn unreachable_endpoint_halts_without_side_effects() {
    let temp = tempdir().expect("tempdir");
    let config = config_in(temp.path());

    let error = pipeline::run(&config, Arc::new(FailingHttpClient))
        .await
        .expect_err("run must stop");

    assert!(matches!(error, PipelineError::EmptySnapshot));
    assert!(!config.db_path.exists());
    assert!(!config.spreadsheet_path.exists());
    assert!(!config.audit_path.exists());
}

#[tokio::test]
async fn server_error_status_behaves_like_no_data() {
    let temp = tempdir().expect("tempdir");
    let config = config_in(temp.path());

    let error = pipeline::run(
        &config,
        Arc::new(StaticHttpClient {
            status: 500,
            body: "internal error",
        }),
    )
    .await
    .expect_err("run must stop");

    assert!(matches!(error, PipelineError::EmptySnapshot));
    assert!(!config.db_path.exists());
}

#[tokio::test]
async fn payload_without_ticker_key_runs_with_zero_rows() {
    // A non-empty body without a ticker object passes the guard but
    // contributes no rows; both counts stay at zero on a fresh table.
    let temp = tempdir().expect("tempdir");
    let config = config_in(temp.path());

    let report = pipeline::run(
        &config,
        Arc::new(StaticHttpClient {
            status: 200,
            body: r#"{"status": "ok"}"#,
        }),
    )
    .await
    .expect("pipeline run");

    assert_eq!(report.rows_inserted, 0);
    assert_eq!(report.rows_exported, 0);
    assert_eq!(report.registros_api, 0);
    assert_eq!(report.registros_db, 0);
    assert!(report.counts_match);

    let audit = fs::read_to_string(&config.audit_path).expect("audit");
    assert!(audit.contains("No hay diferencias"));
}

#[tokio::test]
async fn repeated_runs_accumulate_rows_and_diverge_by_design() {
    let temp = tempdir().expect("tempdir");
    let config = config_in(temp.path());

    let first = pipeline::run(&config, ticker_transport())
        .await
        .expect("first run");
    assert!(first.counts_match);

    let second = pipeline::run(&config, ticker_transport())
        .await
        .expect("second run");

    assert_eq!(second.registros_api, 2);
    assert_eq!(second.registros_db, 4);
    assert!(!second.counts_match);
    assert_eq!(second.rows_exported, 4, "export reflects the whole table");
}
