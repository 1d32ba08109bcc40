//! Catalog loading from disk.

use std::fs;
use std::path::Path;

use crate::catalog::schema::{Catalog, CatalogFile};

/// Error type for catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load the catalog from a JSON file.
///
/// Runs once at startup, before the listening socket binds. Any failure
/// here is fatal to the process; there is no retry and no reload.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path)?;
    let file: CatalogFile = serde_json::from_str(&content)?;
    Ok(Catalog::new(file.items_list))
}
