//! In-process mock of the storefront REST backend.
#![allow(dead_code)]

use anyhow::Result;
use axum::{
    extract::{Path, Query},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::{collections::HashMap, time::Duration};
use storefront::session::{encode_unsigned, Claims, Role};
use tokio::{net::TcpListener, task::JoinHandle};

pub const PASSWORD: &str = "secret";
pub const CUSTOMER_EMAIL: &str = "ada@shop.tld";
pub const ADMIN_EMAIL: &str = "root@shop.tld";
pub const TAKEN_EMAIL: &str = "taken@shop.tld";
pub const VALID_OTP: &str = "123456";
pub const RESET_TOKEN: &str = "CfDJ8reset-token-abc";
pub const SLOW_DELAY: Duration = Duration::from_secs(2);

type Params = Query<HashMap<String, String>>;

pub struct MockBackend {
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn token_for(id: &str, full_name: &str, email: &str, role: Role) -> Result<String> {
    Ok(encode_unsigned(&Claims {
        id: id.to_string(),
        full_name: full_name.to_string(),
        email: email.to_string(),
        phone_number: "0100".to_string(),
        role,
    })?)
}

fn envelope(result: Value) -> Response {
    Json(json!({"isSuccess": true, "result": result, "errorMessages": null})).into_response()
}

fn has_bearer(headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("Bearer ") && value.len() > "Bearer ".len())
}

fn param<'a>(params: &'a HashMap<String, String>, name: &str) -> &'a str {
    params.get(name).map_or("", String::as_str)
}

async fn login(Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    let token = match (email, password) {
        (CUSTOMER_EMAIL, PASSWORD) => token_for("c-1", "Ada Lovelace", email, Role::Customer),
        (ADMIN_EMAIL, PASSWORD) => token_for("a-1", "Root", email, Role::Admin),
        _ => return StatusCode::UNAUTHORIZED.into_response(),
    };
    match token {
        Ok(token) => Json(json!({ "token": token })).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

async fn register(Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    if email == TAKEN_EMAIL {
        return StatusCode::CONFLICT.into_response();
    }
    if body["password"] != body["confirmPassword"] {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "Passwords do not match"})),
        )
            .into_response();
    }
    let name = body["name"].as_str().unwrap_or_default();
    match token_for("c-new", name, email, Role::Customer) {
        Ok(token) => envelope(json!({ "token": token })),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

async fn generate_otp(Query(params): Params) -> Response {
    if param(&params, "email").is_empty() || param(&params, "purpose").is_empty() {
        return StatusCode::BAD_REQUEST.into_response();
    }
    envelope(Value::Null)
}

async fn validate_otp(Query(params): Params) -> Json<bool> {
    Json(param(&params, "code") == VALID_OTP)
}

async fn check_existence(Query(params): Params) -> Response {
    envelope(json!(param(&params, "email") == CUSTOMER_EMAIL))
}

async fn generate_reset_token(Query(params): Params) -> Response {
    if param(&params, "email") == CUSTOMER_EMAIL {
        RESET_TOKEN.into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({"message": "No account uses this email"})),
        )
            .into_response()
    }
}

async fn reset_password(Json(body): Json<Value>) -> Response {
    if body["token"] == RESET_TOKEN && body["newPassword"].is_string() {
        envelope(json!("Password updated"))
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "Invalid or expired token"})),
        )
            .into_response()
    }
}

async fn cart_items(headers: HeaderMap, Query(params): Params) -> Response {
    if !has_bearer(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    envelope(json!([{
        "customerId": param(&params, "customerId"),
        "productVariantId": 5,
        "sizeId": 2,
        "quantity": 1
    }]))
}

async fn add_to_cart(headers: HeaderMap, Query(params): Params) -> Response {
    if !has_bearer(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    envelope(json!(params))
}

async fn products(Query(params): Params) -> Response {
    envelope(json!({
        "page": param(&params, "page"),
        "pageSize": param(&params, "pageSize"),
        "items": [{"id": 1, "name": "Linen shirt"}]
    }))
}

async fn product_details(Query(params): Params) -> Response {
    let id = param(&params, "productId");
    if id == "404" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"errorMessages": "Product not found"})),
        )
            .into_response();
    }
    envelope(json!({ "id": id }))
}

async fn categories() -> Response {
    tokio::time::sleep(SLOW_DELAY).await;
    envelope(json!([]))
}

async fn all_orders() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "NullReferenceException at OrderService").into_response()
}

async fn shipping_costs() -> Response {
    Json(json!({
        "isSuccess": false,
        "result": null,
        "errorMessages": ["Shipping unavailable", "Try again tomorrow"]
    }))
    .into_response()
}

async fn delete_product() -> StatusCode {
    StatusCode::OK
}

async fn order_details(headers: HeaderMap, Path(id): Path<u64>) -> Response {
    if !has_bearer(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    envelope(json!({ "id": id, "orderItems": [] }))
}

fn router() -> Router {
    Router::new()
        .route("/api/Authentication/Login", post(login))
        .route("/api/Authentication/CustomerRegister", post(register))
        .route("/api/Authentication/generateOtp", post(generate_otp))
        .route("/api/Authentication/validateOtp", post(validate_otp))
        .route("/api/Authentication/CheckExistence", get(check_existence))
        .route(
            "/api/Authentication/GenerateResetToken",
            post(generate_reset_token),
        )
        .route("/api/Authentication/ResetPassword", post(reset_password))
        .route("/api/Cart/GetCartItems", get(cart_items))
        .route("/api/Cart/AddToCart", post(add_to_cart))
        .route("/api/Product/GetAllProducts", get(products))
        .route("/api/Product/GetProductDetails", get(product_details))
        .route("/api/Product/GetAllCategories", get(categories))
        .route("/api/Product/DeleteProduct", delete(delete_product))
        .route("/api/Order/GetAllOrders", get(all_orders))
        .route("/api/Order/GetOrderDetails/:id", get(order_details))
        .route("/api/Shipping/GetShippingCosts", get(shipping_costs))
}

pub async fn spawn() -> Result<MockBackend> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, router()).await;
    });
    Ok(MockBackend {
        base_url: format!("http://{addr}/api/"),
        handle,
    })
}

/// An address nothing listens on.
pub async fn closed_url() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}/api/"))
}
