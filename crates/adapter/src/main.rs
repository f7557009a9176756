// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Scorechain bridge adapter
//!
//! Serves the Scorechain Ethereum API adapter over HTTP.

use adapter::{Server, ServerConfig, ShutdownConfig};
use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Ok(path) = dotenv {
        debug!(path = %path.display(), "loaded environment file");
    }

    info!("Starting Scorechain bridge adapter");

    // an unusable Scorechain base URL fails here and aborts startup
    let config = ServerConfig::from_env()?;

    let server = Server::new(config, ShutdownConfig::default())?;

    // NOTE: the `#[tokio::main]` task does not run a worker future, we must spawn
    tokio::spawn(async move { server.run().await }).await??;

    Ok(())
}
