//! HTTP surface of the storefront.
//!
//! # Data Flow
//! ```text
//! incoming request
//!     → server.rs (Axum setup, middleware)
//!     → handlers.rs (read the frozen catalog, decode submissions)
//!     → pages.rs (render HTML)
//!     → response
//! ```

pub mod error;
pub mod handlers;
pub mod pages;
pub mod server;

pub use server::{AppState, HttpServer};
