//! Product catalog, including the admin back-office endpoints.

use super::{ApiClient, ApiError};
use reqwest::Method;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::instrument;

pub const DEFAULT_PAGE_SIZE: u32 = 12;

fn paging(page: u32, page_size: u32) -> [(&'static str, String); 2] {
    [("page", page.to_string()), ("pageSize", page_size.to_string())]
}

/// # Errors
/// Returns an error if the request fails or the server rejects it.
#[instrument(skip(client))]
pub async fn products(client: &ApiClient, page: u32, page_size: u32) -> Result<Value, ApiError> {
    client
        .call(
            Method::GET,
            "Product/GetAllProducts",
            &paging(page, page_size),
            None,
        )
        .await
}

/// Every product including unpublished ones.
///
/// # Errors
/// Returns an error if the request fails or the server rejects it.
#[instrument(skip(client))]
pub async fn admin_products(
    client: &ApiClient,
    page: u32,
    page_size: u32,
) -> Result<Value, ApiError> {
    client
        .call(
            Method::GET,
            "Product/GetAllAdminProducts",
            &paging(page, page_size),
            None,
        )
        .await
}

/// # Errors
/// Returns an error if the request fails or the product does not exist.
#[instrument(skip(client))]
pub async fn product_details(client: &ApiClient, product_id: u64) -> Result<Value, ApiError> {
    client
        .call(
            Method::GET,
            "Product/GetProductDetails",
            &[("productId", product_id.to_string())],
            None,
        )
        .await
}

/// # Errors
/// Returns an error if the request fails or the server rejects it.
#[instrument(skip(client))]
pub async fn categories(client: &ApiClient) -> Result<Value, ApiError> {
    client
        .call(Method::GET, "Product/GetAllCategories", &[], None)
        .await
}

/// # Errors
/// Returns an error if the request fails or the server rejects it.
#[instrument(skip(client))]
pub async fn colors(client: &ApiClient) -> Result<Value, ApiError> {
    client.call(Method::GET, "Order/GetAllColors", &[], None).await
}

/// # Errors
/// Returns an error if the request fails or the server rejects it.
#[instrument(skip(client))]
pub async fn sizes(client: &ApiClient) -> Result<Value, ApiError> {
    client.call(Method::GET, "Order/GetAllSizes", &[], None).await
}

/// Create a product; the result carries the new product's `id`.
///
/// # Errors
/// Returns an error if the request fails or the server rejects it.
#[instrument(skip(client, product))]
pub async fn create_product(client: &ApiClient, product: &Value) -> Result<Value, ApiError> {
    client
        .call(Method::POST, "Product/CreateProduct", &[], Some(product))
        .await
}

/// # Errors
/// Returns an error if the request fails or the server rejects it.
#[instrument(skip(client, variants))]
pub async fn create_variants(client: &ApiClient, variants: &Value) -> Result<Value, ApiError> {
    client
        .call(
            Method::POST,
            "Product/CreateProductVariants",
            &[],
            Some(variants),
        )
        .await
}

/// Upload variant images (base64 payloads).
///
/// # Errors
/// Returns an error if the request fails or the server rejects it.
#[instrument(skip(client, images))]
pub async fn create_variant_images(client: &ApiClient, images: &Value) -> Result<Value, ApiError> {
    client
        .call(
            Method::POST,
            "Product/CreateProductVariantImages",
            &[],
            Some(images),
        )
        .await
}

/// # Errors
/// Returns an error if the request fails or the server rejects it.
#[instrument(skip(client))]
pub async fn delete_product(client: &ApiClient, product_id: u64) -> Result<Value, ApiError> {
    client
        .call(
            Method::DELETE,
            "Product/DeleteProduct",
            &[("productId", product_id.to_string())],
            None,
        )
        .await
}

/// # Errors
/// Returns an error if the request fails or the server rejects it.
#[instrument(skip(client))]
pub async fn delete_variant(client: &ApiClient, variant_id: u64) -> Result<Value, ApiError> {
    client
        .call(
            Method::DELETE,
            "Product/DeleteProductVariant",
            &[("productVariantId", variant_id.to_string())],
            None,
        )
        .await
}

/// # Errors
/// Returns an error if the request fails or the server rejects it.
#[instrument(skip(client))]
pub async fn delete_image(client: &ApiClient, image_id: u64) -> Result<Value, ApiError> {
    client
        .call(
            Method::DELETE,
            "Product/DeleteProductImage",
            &[("productImageId", image_id.to_string())],
            None,
        )
        .await
}

/// A variant in a given size, as shown on order lines.
///
/// # Errors
/// Returns an error if the request fails or the server rejects it.
#[instrument(skip(client))]
pub async fn variant_details(
    client: &ApiClient,
    variant_id: u64,
    size_id: u64,
) -> Result<Value, ApiError> {
    client
        .call(
            Method::GET,
            "Product/GetProductOrderVariant",
            &[
                ("variantId", variant_id.to_string()),
                ("sizeId", size_id.to_string()),
            ],
            None,
        )
        .await
}

#[derive(Serialize)]
struct ColorBody<'a> {
    name: &'a str,
    color: &'a str,
}

/// Register a color; `color` is the swatch value (for example `#ff0000`).
///
/// # Errors
/// Returns an error if the request fails or the server rejects it.
#[instrument(skip(client))]
pub async fn add_color(client: &ApiClient, name: &str, color: &str) -> Result<Value, ApiError> {
    let body = super::to_body(&ColorBody { name, color })?;
    client
        .call(Method::POST, "Order/AddColor", &[], Some(&body))
        .await
}

/// # Errors
/// Returns an error if the request fails or the server rejects it.
#[instrument(skip(client))]
pub async fn add_size(client: &ApiClient, name: &str) -> Result<Value, ApiError> {
    client
        .call(Method::POST, "Order/AddSize", &[], Some(&json!({ "name": name })))
        .await
}
