//! Shopping cart of a signed-in customer.

use super::{empty_body, ApiClient, ApiError};
use reqwest::Method;
use serde_json::Value;
use tracing::instrument;

/// One cart line: a product variant in a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine {
    pub variant_id: u64,
    pub size_id: u64,
}

impl CartLine {
    fn query(self, customer_id: &str) -> Vec<(&'static str, String)> {
        vec![
            ("customerId", customer_id.to_string()),
            ("productVariantId", self.variant_id.to_string()),
            ("sizeId", self.size_id.to_string()),
        ]
    }
}

/// # Errors
/// Returns an error if the request fails or the server rejects it.
#[instrument(skip(client))]
pub async fn add(
    client: &ApiClient,
    customer_id: &str,
    line: CartLine,
    quantity: u32,
) -> Result<Value, ApiError> {
    let mut query = line.query(customer_id);
    query.push(("quantity", quantity.to_string()));
    client
        .call(Method::POST, "Cart/AddToCart", &query, Some(&empty_body()))
        .await
}

/// # Errors
/// Returns an error if the request fails or the server rejects it.
#[instrument(skip(client))]
pub async fn items(client: &ApiClient, customer_id: &str) -> Result<Value, ApiError> {
    client
        .call(
            Method::GET,
            "Cart/GetCartItems",
            &[("customerId", customer_id.to_string())],
            None,
        )
        .await
}

/// Set the quantity of an existing line.
///
/// # Errors
/// Returns an error if the request fails or the server rejects it.
#[instrument(skip(client))]
pub async fn change_quantity(
    client: &ApiClient,
    customer_id: &str,
    line: CartLine,
    quantity: u32,
) -> Result<Value, ApiError> {
    let mut query = line.query(customer_id);
    query.push(("quantity", quantity.to_string()));
    client
        .call(
            Method::PUT,
            "Cart/ChangeItemQuantity",
            &query,
            Some(&empty_body()),
        )
        .await
}

/// # Errors
/// Returns an error if the request fails or the server rejects it.
#[instrument(skip(client))]
pub async fn remove(client: &ApiClient, customer_id: &str, line: CartLine) -> Result<Value, ApiError> {
    client
        .call(
            Method::DELETE,
            "Cart/RemoveItemFromCart",
            &line.query(customer_id),
            None,
        )
        .await
}
