//! Order submission decoding.
//!
//! # Responsibilities
//! - Decode the urlencoded form body preserving pair order and repetition
//! - Normalize the selected-items field (single value or repeated key)
//! - Parse `"name,price"` selections and total the coercible prices
//!
//! # Design Decisions
//! - The selected-items field is modeled as an explicit Single/Many
//!   variant, normalized to one ordered sequence before processing
//! - A selection without a separator is a fault, not a skipped row
//! - A selection whose price fails coercion drops out of the rows and
//!   the total, the same policy the catalog table applies

use url::form_urlencoded;

use crate::catalog::item::{coerce_price_str, Item};

/// Error type for order decoding.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    /// A selected value carried no name/price separator.
    #[error("malformed selection (no separator): {0:?}")]
    MalformedSelection(String),
}

/// The selected-items field as it arrived on the wire.
///
/// HTML multi-selects submit the same key once per chosen option, so the
/// field shows up as a single value or an ordered run of values depending
/// on the client.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectedItems {
    Single(String),
    Many(Vec<String>),
}

impl SelectedItems {
    /// Normalize into one ordered sequence.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            SelectedItems::Single(value) => vec![value],
            SelectedItems::Many(values) => values,
        }
    }
}

/// One decoded POST `/order` body.
///
/// Contact fields default to empty and are rendered back verbatim; no
/// validation is applied to them.
#[derive(Debug, Clone, Default)]
pub struct OrderSubmission {
    pub name: String,
    pub email: String,
    pub delivery: String,
    pub items_selected: Option<SelectedItems>,
}

impl OrderSubmission {
    /// Decode an `application/x-www-form-urlencoded` body.
    ///
    /// Repeated `itemsSelected` keys are collected in submission order;
    /// unknown keys are ignored.
    pub fn decode(body: &[u8]) -> Self {
        let mut submission = Self::default();
        let mut selections: Vec<String> = Vec::new();

        for (key, value) in form_urlencoded::parse(body) {
            match key.as_ref() {
                "name" => submission.name = value.into_owned(),
                "email" => submission.email = value.into_owned(),
                "delivery" => submission.delivery = value.into_owned(),
                "itemsSelected" => selections.push(value.into_owned()),
                _ => {}
            }
        }

        submission.items_selected = if selections.len() > 1 {
            Some(SelectedItems::Many(selections))
        } else {
            selections.pop().map(SelectedItems::Single)
        };
        submission
    }

    /// Parse the selections and total the coercible prices.
    pub fn into_order(self) -> Result<Order, OrderError> {
        let selections = self
            .items_selected
            .map(SelectedItems::into_vec)
            .unwrap_or_default();

        let mut lines = Vec::new();
        let mut total = 0.0;
        for raw in &selections {
            let (name, price) = split_selection(raw)?;
            if let Some(price) = coerce_price_str(price) {
                total += price;
                lines.push(Item::new(name, price));
            }
        }

        Ok(Order {
            name: self.name,
            email: self.email,
            delivery: self.delivery,
            lines,
            total,
        })
    }
}

/// Split a selection on its first comma into name and price-string.
fn split_selection(raw: &str) -> Result<(&str, &str), OrderError> {
    raw.split_once(',')
        .ok_or_else(|| OrderError::MalformedSelection(raw.to_string()))
}

/// One fully-decoded order, alive for a single request.
#[derive(Debug, Clone)]
pub struct Order {
    pub name: String,
    pub email: String,
    pub delivery: String,
    pub lines: Vec<Item>,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single_selection() {
        let body = b"name=Ann&email=a%40b.c&delivery=pickup&itemsSelected=Milk%2C2.50";
        let submission = OrderSubmission::decode(body);

        assert_eq!(submission.name, "Ann");
        assert_eq!(submission.email, "a@b.c");
        assert_eq!(submission.delivery, "pickup");
        assert_eq!(
            submission.items_selected,
            Some(SelectedItems::Single("Milk,2.50".to_string()))
        );
    }

    #[test]
    fn test_decode_many_selections_in_order() {
        let body = b"itemsSelected=Milk%2C2.50&itemsSelected=Eggs%2C3.00";
        let submission = OrderSubmission::decode(body);

        assert_eq!(
            submission.items_selected,
            Some(SelectedItems::Many(vec![
                "Milk,2.50".to_string(),
                "Eggs,3.00".to_string(),
            ]))
        );
    }

    #[test]
    fn test_decode_no_selection() {
        let submission = OrderSubmission::decode(b"name=Ann");
        assert_eq!(submission.items_selected, None);

        let order = submission.into_order().unwrap();
        assert!(order.lines.is_empty());
        assert_eq!(order.total, 0.0);
    }

    #[test]
    fn test_order_total_sums_coerced_prices() {
        let submission = OrderSubmission::decode(
            b"itemsSelected=Milk%2C2.50&itemsSelected=Eggs%2C3.00",
        );
        let order = submission.into_order().unwrap();

        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.total, 5.5);
    }

    #[test]
    fn test_order_skips_non_coercible_price() {
        let submission = OrderSubmission::decode(
            b"itemsSelected=Milk%2C2.50&itemsSelected=Bread%2Cbad",
        );
        let order = submission.into_order().unwrap();

        assert_eq!(order.lines.len(), 1);
        assert_eq!(order.lines[0].name(), "Milk");
        assert_eq!(order.total, 2.5);
    }

    #[test]
    fn test_malformed_selection_is_a_fault() {
        let submission = OrderSubmission::decode(b"itemsSelected=MilkNoComma");
        let err = submission.into_order().unwrap_err();
        assert!(matches!(err, OrderError::MalformedSelection(_)));
    }

    #[test]
    fn test_split_on_first_comma_only() {
        let submission = OrderSubmission::decode(b"itemsSelected=Ice%20Cream%2C4.00%2Cextra");
        let order = submission.into_order().unwrap();

        // Price-string "4.00,extra" fails coercion, so the line drops out.
        assert!(order.lines.is_empty());
        assert_eq!(order.total, 0.0);
    }
}
