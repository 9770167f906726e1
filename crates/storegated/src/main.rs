//! storegated — the StoreGate daemon.
//!
//! Hosts the admission gate that protects a distributed storage cluster from
//! unsafe pod recreation: the orchestration platform asks this daemon for
//! permission before (re)creating a storage-member pod, and the gate ends any
//! in-progress leader eviction targeting the store that ran under that
//! identity before admitting it.
//!
//! # Usage
//!
//! ```text
//! storegated serve --port 8443 --placement-url http://placement:2379
//! ```

use std::net::SocketAddr;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::info;

use storegate_api::ApiState;
use storegate_placement::{DEFAULT_ENDPOINT_TEMPLATE, EndpointResolver};

#[derive(Parser)]
#[command(name = "storegated", about = "StoreGate admission daemon")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the admission API.
    Serve {
        /// Port to listen on.
        #[arg(long, default_value = "8443")]
        port: u16,

        /// Fixed placement-service URL (single-cluster deployments).
        #[arg(long)]
        placement_url: Option<String>,

        /// URL template locating a cluster's placement service.
        #[arg(long, default_value = DEFAULT_ENDPOINT_TEMPLATE)]
        endpoint_template: String,

        /// Per-call placement request timeout in seconds.
        #[arg(long, default_value = "10")]
        request_timeout: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,storegated=debug,storegate=debug".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            port,
            placement_url,
            endpoint_template,
            request_timeout,
        } => serve(port, placement_url, endpoint_template, request_timeout).await,
    }
}

async fn serve(
    port: u16,
    placement_url: Option<String>,
    endpoint_template: String,
    request_timeout: u64,
) -> anyhow::Result<()> {
    info!("StoreGate daemon starting");

    let endpoints = match placement_url {
        Some(url) => EndpointResolver::fixed(url),
        None => EndpointResolver::from_template(endpoint_template),
    };
    info!(?endpoints, "placement endpoint resolver configured");

    let state = ApiState {
        endpoints,
        timeout: Duration::from_secs(request_timeout),
    };
    let router = storegate_api::build_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!(%addr, "admission API starting");
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to install CTRL+C handler");
            info!("shutdown signal received");
        })
        .await?;

    info!("StoreGate daemon stopped");
    Ok(())
}
