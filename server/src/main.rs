use clap::Parser;
use commands::Command;

pub use color_eyre::Result;

mod commands;
mod contact;
mod http_server;
mod state;

pub(crate) use state::{AppState, ContactConfig};

#[derive(Parser)]
#[command(author, version, about)]
struct CliArgs {
    #[clap(subcommand)]
    command: Option<Command>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let _sentry_guard = tracing_common::setup_sentry();

    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(4)
        .enable_all()
        .build()?
        .block_on(async { _main().await })
}

async fn _main() -> Result<()> {
    tracing_common::setup_tracing(env!("CARGO_CRATE_NAME"))?;

    let cli = CliArgs::parse();
    let command = cli.command.unwrap_or_default();

    command.run().await
}
