//! Catalog file schema definitions.
//!
//! All types derive Serde traits for deserialization from the catalog file.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::item::Item;

/// Root shape of the catalog file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogFile {
    /// Item records, in file order.
    #[serde(rename = "itemsList")]
    pub items_list: Vec<CatalogRecord>,
}

/// One raw record as stored in the catalog file.
///
/// `cost` is kept as a raw JSON value: well-formed files carry numbers,
/// but a record may hold an arbitrary string, and whether it counts as a
/// price is decided per request by numeric coercion.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogRecord {
    pub name: String,
    pub cost: Value,
}

/// The frozen in-memory catalog.
///
/// Built once at startup and never mutated afterwards, so it is shared
/// across concurrently-handled requests without synchronization.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<CatalogRecord>,
}

impl Catalog {
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        Self { records }
    }

    /// Raw records in file order.
    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Items whose price coerces to a finite number, in file order.
    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        self.records.iter().filter_map(Item::from_record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(name: &str, cost: Value) -> CatalogRecord {
        CatalogRecord {
            name: name.to_string(),
            cost,
        }
    }

    #[test]
    fn test_items_skip_coercion_failures() {
        let catalog = Catalog::new(vec![
            record("Milk", json!(2.5)),
            record("Bread", json!("bad")),
            record("Eggs", json!("3.00")),
        ]);

        let items: Vec<_> = catalog.items().collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name(), "Milk");
        assert_eq!(items[1].name(), "Eggs"); // file order preserved
    }

    #[test]
    fn test_deserialize_catalog_file() {
        let json = r#"{"itemsList": [{"name": "Milk", "cost": 2.5}]}"#;
        let file: CatalogFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.items_list.len(), 1);
        assert_eq!(file.items_list[0].name, "Milk");
    }
}
