//! Core pipeline for ingesta.
//!
//! This crate contains:
//! - The ticker snapshot model and exchange client
//! - HTTP transport trait with a reqwest implementation
//! - Spreadsheet export and audit reporting
//! - The run configuration and pipeline orchestrator

pub mod audit;
pub mod client;
pub mod clock;
pub mod config;
pub mod error;
pub mod export;
pub mod http;
pub mod pipeline;
pub mod snapshot;

pub use audit::AuditReport;
pub use client::{TickerClient, TickerRequest};
pub use config::{IngestConfig, DEFAULT_BASE_URL};
pub use error::CoreError;
pub use export::ExportError;
pub use http::{HttpClient, HttpError, HttpResponse, ReqwestHttpClient};
pub use ingesta_warehouse::{NewRecord, TickerRow, Warehouse, WarehouseConfig, WarehouseError};
pub use pipeline::{PipelineError, RunReport};
pub use snapshot::TickerSnapshot;
