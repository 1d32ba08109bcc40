//! Catalog management subsystem.
//!
//! # Data Flow
//! ```text
//! catalog file (JSON)
//!     → loader.rs (read & deserialize)
//!     → Catalog (frozen snapshot)
//!     → shared via Arc to the HTTP handlers and the operator console
//! ```
//!
//! # Design Decisions
//! - The catalog is immutable once loaded; there is no reload
//! - Raw `cost` values stay untyped until a request coerces them
//! - A price that fails coercion is absent, never zero

pub mod item;
pub mod loader;
pub mod schema;

pub use item::Item;
pub use loader::{load_catalog, CatalogError};
pub use schema::{Catalog, CatalogRecord};
