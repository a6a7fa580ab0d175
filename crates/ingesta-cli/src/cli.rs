//! CLI argument definitions for ingesta.
//!
//! Two commands share one ticker client: `check` prints the raw API
//! body for a quick look, `ingest` runs the full snapshot-to-audit
//! pipeline.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use ingesta_core::DEFAULT_BASE_URL;

/// Mercado Bitcoin ticker snapshot tool.
///
/// Fetches one ticker snapshot per run, stores its fields in a local
/// DuckDB file, exports the table to CSV, and writes an audit report
/// comparing API fields against stored rows.
#[derive(Debug, Parser)]
#[command(
    name = "ingesta",
    author,
    version,
    about = "Cryptocurrency ticker snapshot ingestion CLI"
)]
pub struct Cli {
    /// Exchange API base URL.
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Trading pair to snapshot (e.g. BTC, ETH, LTC).
    #[arg(long, global = true, default_value = "BTC")]
    pub coin: String,

    /// API method segment appended after the coin.
    #[arg(long, global = true, default_value = "ticker")]
    pub method: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the ticker endpoint and print the raw JSON body.
    ///
    /// # Examples
    ///
    ///   ingesta check
    ///   ingesta check --coin ETH --pretty
    Check(CheckArgs),

    /// Run the full pipeline: fetch, store, export, audit.
    ///
    /// # Examples
    ///
    ///   ingesta ingest
    ///   ingesta ingest --db-path data/ingesta.duckdb
    Ingest(IngestArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Pretty-print the JSON body with indentation.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

/// Arguments for the `ingest` command.
#[derive(Debug, Args)]
pub struct IngestArgs {
    /// Path to the DuckDB database file (default: under the data
    /// directory, see INGESTA_HOME).
    #[arg(long)]
    pub db_path: Option<PathBuf>,

    /// Path of the CSV spreadsheet export, overwritten each run.
    #[arg(long)]
    pub spreadsheet: Option<PathBuf>,

    /// Path of the plain-text audit report, overwritten each run.
    #[arg(long)]
    pub audit: Option<PathBuf>,
}
