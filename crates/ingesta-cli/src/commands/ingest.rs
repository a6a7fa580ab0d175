use std::sync::Arc;

use ingesta_core::{pipeline, IngestConfig, ReqwestHttpClient};

use crate::cli::{Cli, IngestArgs};
use crate::error::CliError;

pub async fn run(cli: &Cli, args: &IngestArgs) -> Result<(), CliError> {
    let mut config = IngestConfig {
        base_url: cli.base_url.clone(),
        coin: cli.coin.clone(),
        method: cli.method.clone(),
        ..IngestConfig::default()
    };
    if let Some(db_path) = &args.db_path {
        config.db_path = db_path.clone();
    }
    if let Some(spreadsheet) = &args.spreadsheet {
        config.spreadsheet_path = spreadsheet.clone();
    }
    if let Some(audit) = &args.audit {
        config.audit_path = audit.clone();
    }

    let report = pipeline::run(&config, Arc::new(ReqwestHttpClient::new())).await?;

    println!("fecha          : {}", report.fecha);
    println!("rows_inserted  : {}", report.rows_inserted);
    println!("rows_exported  : {}", report.rows_exported);
    println!("registros_api  : {}", report.registros_api);
    println!("registros_db   : {}", report.registros_db);
    println!(
        "verdict        : {}",
        if report.counts_match { "match" } else { "mismatch" }
    );
    println!("spreadsheet    : {}", report.spreadsheet_path.display());
    println!("audit          : {}", report.audit_path.display());

    Ok(())
}
