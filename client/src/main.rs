//! Courtside entry point: wires settings, the token store, the transport,
//! and the session restore before dispatching the parsed subcommand.

use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

use client::Courtside;
use client::cli::{Cli, Command, run};
use client::outbound::{FileTokenStore, ReqwestTransport};
use client::settings::ClientSettings;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let settings = ClientSettings::load().wrap_err("configuration could not be loaded")?;

    let base_url = Url::parse(settings.api_base_url())
        .wrap_err_with(|| format!("invalid base URL {}", settings.api_base_url()))?;
    let transport = ReqwestTransport::with_timeout(settings.request_timeout())
        .wrap_err("HTTP client could not be constructed")?;
    let store = FileTokenStore::new(settings.token_path());

    let courtside = Courtside::new(Arc::new(transport), base_url, Arc::new(store))?;

    // A persisted token restores the session optimistically; verification
    // completes it in the background of whatever command runs. Only an
    // Unauthorized answer forces the session away again.
    if !matches!(cli.command, Command::Login { .. } | Command::Register { .. })
        && courtside.auth().restore()
    {
        if let Err(error) = courtside.auth().verify().await {
            if error.is_unauthorized() {
                warn!(%error, "persisted session was rejected");
            } else {
                warn!(%error, "session verification unavailable; continuing optimistically");
            }
        }
    }

    run(cli.command, &courtside).await
}
