use std::sync::Arc;

use ingesta_core::{PipelineError, ReqwestHttpClient, TickerClient, TickerRequest};

use crate::cli::{CheckArgs, Cli};
use crate::error::CliError;

pub async fn run(cli: &Cli, args: &CheckArgs) -> Result<(), CliError> {
    let client = TickerClient::new(cli.base_url.as_str(), Arc::new(ReqwestHttpClient::new()));
    let request = TickerRequest::new(cli.coin.as_str(), cli.method.as_str());

    let snapshot = client.fetch(&request).await?;
    if snapshot.is_empty() {
        return Err(CliError::Pipeline(PipelineError::EmptySnapshot));
    }

    let body = snapshot.to_value();
    let payload = if args.pretty {
        serde_json::to_string_pretty(&body)?
    } else {
        serde_json::to_string(&body)?
    };
    println!("{payload}");

    Ok(())
}
