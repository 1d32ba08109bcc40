//! Request handlers for the four storefront pages.
//!
//! All handlers are synchronous reads of the frozen catalog plus, for the
//! order submission, one request-scoped computation. None of them mutate
//! any state.

use axum::extract::{RawForm, State};
use axum::response::Html;

use crate::http::error::AppError;
use crate::http::pages;
use crate::http::server::AppState;
use crate::order::OrderSubmission;

/// GET `/`: landing page.
pub async fn index() -> Html<String> {
    Html(pages::index())
}

/// GET `/catalog`: table of every item with a usable price, in catalog
/// order.
pub async fn show_catalog(State(state): State<AppState>) -> Html<String> {
    Html(pages::catalog(&state.catalog))
}

/// GET `/order`: order form with one option per priced item.
pub async fn order_form(State(state): State<AppState>) -> Html<String> {
    Html(pages::order_form(&state.catalog))
}

/// POST `/order`: decode the submission, total it, render confirmation.
///
/// The body is decoded raw so a repeated `itemsSelected` key keeps its
/// order. A selection without a separator propagates as a fault and
/// surfaces as a generic 500.
pub async fn place_order(RawForm(body): RawForm) -> Result<Html<String>, AppError> {
    let submission = OrderSubmission::decode(&body);
    let order = submission.into_order()?;

    tracing::debug!(
        customer = %order.name,
        lines = order.lines.len(),
        total = order.total,
        "Order placed"
    );

    Ok(Html(pages::order_confirmation(&order)))
}
