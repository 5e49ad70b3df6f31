//! Wishlist of a signed-in customer.

use super::{empty_body, ApiClient, ApiError};
use reqwest::Method;
use serde_json::Value;
use tracing::instrument;

fn query(customer_id: &str, product_id: u64) -> [(&'static str, String); 2] {
    [
        ("customerId", customer_id.to_string()),
        ("productId", product_id.to_string()),
    ]
}

/// # Errors
/// Returns an error if the request fails or the server rejects it.
#[instrument(skip(client))]
pub async fn add(client: &ApiClient, customer_id: &str, product_id: u64) -> Result<Value, ApiError> {
    client
        .call(
            Method::POST,
            "Wishlist/AddToWishlist",
            &query(customer_id, product_id),
            Some(&empty_body()),
        )
        .await
}

/// # Errors
/// Returns an error if the request fails or the server rejects it.
#[instrument(skip(client))]
pub async fn items(client: &ApiClient, customer_id: &str) -> Result<Value, ApiError> {
    client
        .call(
            Method::GET,
            "Wishlist/GetWishlistItems",
            &[("customerId", customer_id.to_string())],
            None,
        )
        .await
}

/// # Errors
/// Returns an error if the request fails or the server rejects it.
#[instrument(skip(client))]
pub async fn remove(
    client: &ApiClient,
    customer_id: &str,
    product_id: u64,
) -> Result<Value, ApiError> {
    client
        .call(
            Method::DELETE,
            "WishList/DeleteItemFromWishlist",
            &query(customer_id, product_id),
            None,
        )
        .await
}
