use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;

use config::Config;
use server::{build_schema, make_app};
use store::Store;

#[cfg(test)]
mod client;
mod config;
mod datamodel;
mod error;
mod logging;
mod server;
mod store;


#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    if config.print_schema {
        print!("{}", build_schema(Store::default()).sdl());
        return Ok(());
    }

    logging::init(config.verbose);

    let app = make_app(Store::seeded());
    let listener = TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("failed to bind {}", config.listen))?;
    tracing::info!(
        "listening on http://{}{}",
        listener.local_addr()?,
        server::GRAPHQL_PATH
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(%err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
