mod check;
mod ingest;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Check(args) => check::run(cli, args).await,
        Command::Ingest(args) => ingest::run(cli, args).await,
    }
}
