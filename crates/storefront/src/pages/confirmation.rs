//! Confirmation page.

use kanap_core::OrderId;
use url::form_urlencoded;

use super::query_param;

/// Link to the confirmation page for `order_id`.
#[must_use]
pub fn confirmation_url(order_id: &OrderId) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("orderId", order_id.as_str())
        .finish();
    format!("confirmation.html?{query}")
}

/// Read the order id back from a confirmation page URL.
#[must_use]
pub fn order_id_from_url(url: &str) -> Option<OrderId> {
    query_param(url, "orderId").and_then(|id| OrderId::parse(&id).ok())
}
