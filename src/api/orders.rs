//! Checkout and order administration.

use super::{ApiClient, ApiError};
use reqwest::Method;
use serde_json::Value;
use tracing::instrument;

/// Place an order. The payload is passed through as the checkout form built it.
///
/// # Errors
/// Returns an error if the request fails or the server rejects it.
#[instrument(skip(client, order))]
pub async fn create(client: &ApiClient, order: &Value) -> Result<Value, ApiError> {
    client
        .call(Method::POST, "Order/CreateOrder", &[], Some(order))
        .await
}

/// # Errors
/// Returns an error if the request fails or the server rejects it.
#[instrument(skip(client))]
pub async fn shipping_costs(client: &ApiClient) -> Result<Value, ApiError> {
    client
        .call(Method::GET, "Shipping/GetShippingCosts", &[], None)
        .await
}

/// # Errors
/// Returns an error if the request fails or the server rejects it.
#[instrument(skip(client))]
pub async fn all_orders(client: &ApiClient) -> Result<Value, ApiError> {
    client.call(Method::GET, "Order/GetAllOrders", &[], None).await
}

/// # Errors
/// Returns an error if the request fails or the server rejects it.
#[instrument(skip(client))]
pub async fn customers(client: &ApiClient) -> Result<Value, ApiError> {
    client
        .call(Method::GET, "User/GetAllCustomers", &[], None)
        .await
}

/// # Errors
/// Returns an error if the request fails or the order does not exist.
#[instrument(skip(client))]
pub async fn order_details(client: &ApiClient, order_id: u64) -> Result<Value, ApiError> {
    client
        .call(
            Method::GET,
            &format!("Order/GetOrderDetails/{order_id}"),
            &[],
            None,
        )
        .await
}
