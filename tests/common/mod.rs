//! Shared utilities for integration testing.

use std::io::Write;
use std::net::SocketAddr;
use std::sync::Arc;

use tempfile::NamedTempFile;

use storefront::catalog::load_catalog;
use storefront::http::HttpServer;
use storefront::lifecycle::Shutdown;
use storefront::ServerConfig;

/// Write a catalog file with the given JSON content.
pub fn write_catalog(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Load a catalog from JSON and serve it on an ephemeral port.
///
/// The listener is bound before the serve task spawns, so requests can be
/// issued as soon as this returns. Returns the bound address and the
/// shutdown handle keeping the server alive.
pub async fn start_server(json: &str) -> (SocketAddr, Arc<Shutdown>) {
    let file = write_catalog(json);
    let catalog = Arc::new(load_catalog(file.path()).unwrap());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Arc::new(Shutdown::new());
    let server = HttpServer::new(&ServerConfig::default(), catalog);
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}
