//! Catalog-and-ordering web server library.

pub mod catalog;
pub mod config;
pub mod console;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod order;

pub use catalog::Catalog;
pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
