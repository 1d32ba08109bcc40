//! Catalog-and-ordering web server.
//!
//! Startup sequence: parse the CLI, initialize logging, load the catalog,
//! then bind the listener and start the HTTP server and the operator
//! console. The socket binds only after the catalog load completes, so no
//! request can observe an empty catalog.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use storefront::catalog;
use storefront::console::OperatorConsole;
use storefront::http::HttpServer;
use storefront::lifecycle::Shutdown;
use storefront::observability;
use storefront::ServerConfig;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Catalog-and-ordering web server", long_about = None)]
struct Cli {
    /// Path to the JSON catalog file
    catalog_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    observability::logging::init();

    let config = ServerConfig::default();

    // Fatal: the server never starts without a loaded catalog. Exit status
    // 0 matches the documented contract for startup load failure.
    let catalog = match catalog::load_catalog(&cli.catalog_file) {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            tracing::error!(
                path = %cli.catalog_file.display(),
                error = %e,
                "Failed to load catalog"
            );
            std::process::exit(0);
        }
    };

    tracing::info!(
        path = %cli.catalog_file.display(),
        items = catalog.len(),
        "Catalog loaded"
    );

    let shutdown = Arc::new(Shutdown::new());

    let console = OperatorConsole::new(
        catalog.clone(),
        cli.catalog_file.clone(),
        shutdown.clone(),
    );
    tokio::spawn(console.run());

    let listener = TcpListener::bind(&config.bind_address).await?;
    let server = HttpServer::new(&config, catalog);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
