//! The item value object and price coercion.

use serde_json::Value;

use crate::catalog::schema::CatalogRecord;

/// One catalog entry or order line with a usable price.
///
/// Constructed on demand from a raw record or an order selection and
/// discarded once the response renders. Immutable: there is no setter,
/// and a value whose price fails coercion never becomes an `Item`.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    name: String,
    price: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Build an item from a raw record, if its cost coerces.
    pub fn from_record(record: &CatalogRecord) -> Option<Self> {
        coerce_price(&record.cost).map(|price| Self {
            name: record.name.clone(),
            price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

/// Coerce a raw cost value to a finite price.
///
/// Numbers pass through; strings are parsed. Anything else, and anything
/// non-finite, is absent.
pub fn coerce_price(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|p| p.is_finite()),
        Value::String(s) => coerce_price_str(s),
        _ => None,
    }
}

/// Coerce a price string, as submitted in an order selection.
pub fn coerce_price_str(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|p| p.is_finite())
}
