use std::env;
use std::path::PathBuf;

/// Default exchange API base URL.
pub const DEFAULT_BASE_URL: &str = "https://www.mercadobitcoin.net/api";

/// File-system layout and endpoint parameters for one ingestion run.
///
/// Passed explicitly into the pipeline entry point; nothing is read from
/// globals and constructing it has no side effects.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Exchange API base URL.
    pub base_url: String,
    /// Trading pair to snapshot.
    pub coin: String,
    /// API method segment appended after the coin.
    pub method: String,
    /// Path to the `DuckDB` database file.
    pub db_path: PathBuf,
    /// Path of the CSV spreadsheet export, overwritten each run.
    pub spreadsheet_path: PathBuf,
    /// Path of the plain-text audit report, overwritten each run.
    pub audit_path: PathBuf,
}

impl Default for IngestConfig {
    fn default() -> Self {
        let data_dir = resolve_data_dir();
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            coin: String::from("BTC"),
            method: String::from("ticker"),
            db_path: data_dir.join("ingesta.duckdb"),
            spreadsheet_path: data_dir.join("muestra_datos.csv"),
            audit_path: data_dir.join("auditoria.txt"),
        }
    }
}

/// Resolve the data directory from the environment or default.
fn resolve_data_dir() -> PathBuf {
    if let Some(path) = env::var_os("INGESTA_HOME") {
        let path = PathBuf::from(path);
        if !path.as_os_str().is_empty() {
            return path;
        }
    }

    PathBuf::from("static")
}
