//! HTML rendering for the storefront pages.
//!
//! Pages are assembled as strings into complete documents; item and order
//! tables use the classic bordered Name/Cost layout with prices formatted
//! to two decimal places. Submitted values are rendered back verbatim.

use crate::catalog::{Catalog, Item};
use crate::order::Order;

const TABLE_HEADER: &str = "<table border='1'><tr><th>Name</th><th>Cost</th></tr>";

/// Document shell shared by all pages.
fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>{title}</title></head><body>{body}</body></html>"
    )
}

fn table_row(name: &str, price: f64) -> String {
    format!("<tr><td>{name}</td><td>{price:.2}</td></tr>")
}

/// Landing page.
pub fn index() -> String {
    page(
        "Storefront",
        "<h1>Welcome to the Storefront</h1>\
         <p><a href=\"/catalog\">Browse the catalog</a></p>\
         <p><a href=\"/order\">Place an order</a></p>",
    )
}

/// Catalog page: one row per item with a usable price, in file order.
pub fn catalog(catalog: &Catalog) -> String {
    let mut table = String::from(TABLE_HEADER);
    for item in catalog.items() {
        table.push_str(&table_row(item.name(), item.price()));
    }
    table.push_str("</table>");

    page("Catalog", &format!("<h1>Catalog</h1>{table}"))
}

/// Order form: one option per priced item, each value encoding
/// `"name,price"`.
pub fn order_form(catalog: &Catalog) -> String {
    let mut options = String::new();
    for item in catalog.items() {
        options.push_str(&format!(
            "<option value=\"{},{:.2}\">{}</option>",
            item.name(),
            item.price(),
            item.name()
        ));
    }

    let body = format!(
        "<h1>Place an Order</h1>\
         <form action=\"/order\" method=\"post\">\
         <label>Name: <input type=\"text\" name=\"name\"></label><br>\
         <label>Email: <input type=\"text\" name=\"email\"></label><br>\
         <label>Delivery: <select name=\"delivery\">\
         <option value=\"pickup\">Pickup</option>\
         <option value=\"delivery\">Delivery</option>\
         </select></label><br>\
         <label>Items: <select name=\"itemsSelected\" multiple>{options}</select></label><br>\
         <input type=\"submit\" value=\"Order\">\
         </form>"
    );
    page("Place an Order", &body)
}

/// Confirmation page: contact fields verbatim, itemized table, total.
pub fn order_confirmation(order: &Order) -> String {
    let mut table = String::from(TABLE_HEADER);
    for item in &order.lines {
        table.push_str(&table_row(item.name(), item.price()));
    }
    table.push_str(&format!(
        "<tr><td>Total Cost:</td><td>{:.2}</td></tr>",
        order.total
    ));
    table.push_str("</table>");

    let body = format!(
        "<h1>Order Confirmation</h1>\
         <p>Name: {}</p>\
         <p>Email: {}</p>\
         <p>Delivery: {}</p>\
         {table}",
        order.name, order.email, order.delivery
    );
    page("Order Confirmation", &body)
}
