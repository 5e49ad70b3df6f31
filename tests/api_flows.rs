mod common;

use anyhow::Result;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use storefront::api::{
    auth::{self, Registration},
    cart::{self, CartLine},
    catalog, orders, ApiClient, ApiError, DEFAULT_TIMEOUT,
};
use storefront::routes::{navigate, Navigation};
use storefront::session::{MemoryTokenStorage, Role, SessionStore, ADMIN_LANDING_PATH, HOME_PATH};

fn password(value: &str) -> SecretString {
    SecretString::from(value.to_string())
}

#[tokio::test]
async fn customer_login_establishes_session_and_unlocks_cart() -> Result<()> {
    let backend = common::spawn().await?;
    let mut store = SessionStore::initialize(MemoryTokenStorage::new());
    let mut changes = store.subscribe();
    let client = ApiClient::new(&backend.base_url, DEFAULT_TIMEOUT)?;

    assert_eq!(
        navigate(store.session(), "/Cart"),
        Navigation::Redirect("/Login")
    );

    let token = auth::login(&client, common::CUSTOMER_EMAIL, &password(common::PASSWORD)).await?;
    let session = store.establish(&token)?;
    assert_eq!(session.display_name(), Some("Ada Lovelace"));
    assert_eq!(session.role(), Some(&Role::Customer));
    assert_eq!(session.landing_path(), HOME_PATH);
    assert!(changes.has_changed()?);
    assert!(changes.borrow_and_update().is_authenticated());
    assert_eq!(store.storage().peek(), Some(token.token.clone()));

    assert!(matches!(
        navigate(store.session(), "/Cart"),
        Navigation::Render(_)
    ));
    assert_eq!(
        navigate(store.session(), "/Admin/Orders"),
        Navigation::Redirect(HOME_PATH)
    );

    let authed = client.clone().with_bearer(store.session().token());
    let customer = store.session().user_id().unwrap_or_default().to_string();
    let items = cart::items(&authed, &customer).await?;
    assert_eq!(items[0]["customerId"], "c-1");

    let added = cart::add(
        &authed,
        &customer,
        CartLine {
            variant_id: 5,
            size_id: 2,
        },
        3,
    )
    .await?;
    assert_eq!(added["quantity"], "3");
    assert_eq!(added["productVariantId"], "5");
    Ok(())
}

#[tokio::test]
async fn admin_login_lands_on_dashboard() -> Result<()> {
    let backend = common::spawn().await?;
    let mut store = SessionStore::initialize(MemoryTokenStorage::new());
    let client = ApiClient::new(&backend.base_url, DEFAULT_TIMEOUT)?;

    let token = auth::login(&client, common::ADMIN_EMAIL, &password(common::PASSWORD)).await?;
    let session = store.establish(&token)?;
    assert!(session.is_admin());
    assert_eq!(session.landing_path(), ADMIN_LANDING_PATH);
    assert_eq!(
        navigate(store.session(), "/Admin"),
        Navigation::Redirect(ADMIN_LANDING_PATH)
    );

    let authed = client.with_bearer(store.session().token());
    let order = orders::order_details(&authed, 77).await?;
    assert_eq!(order["id"], 77);
    Ok(())
}

#[tokio::test]
async fn wrong_password_leaves_session_empty() -> Result<()> {
    let backend = common::spawn().await?;
    let store = SessionStore::initialize(MemoryTokenStorage::new());
    let client = ApiClient::new(&backend.base_url, DEFAULT_TIMEOUT)?;

    let err = auth::login(&client, common::CUSTOMER_EMAIL, &password("nope"))
        .await
        .err();
    match err {
        Some(ApiError::Http { status, message }) => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(message, "Email or password is incorrect.");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(!store.session().is_authenticated());
    Ok(())
}

#[tokio::test]
async fn registration_confirms_otp_then_signs_in() -> Result<()> {
    let backend = common::spawn().await?;
    let mut store = SessionStore::initialize(MemoryTokenStorage::new());
    let client = ApiClient::new(&backend.base_url, DEFAULT_TIMEOUT)?;
    let email = "new@shop.tld";

    auth::generate_otp(&client, email, auth::OTP_PURPOSE_CONFIRMATION).await?;
    assert!(!auth::validate_otp(&client, email, "000000").await?);
    assert!(auth::validate_otp(&client, email, common::VALID_OTP).await?);

    let token = auth::register(
        &client,
        &Registration {
            name: "Grace Hopper".to_string(),
            email: email.to_string(),
            phone_number: "0101".to_string(),
            password: password("pw"),
        },
    )
    .await?;
    let session = store.establish(&token)?;
    assert_eq!(session.user_id(), Some("c-new"));
    assert_eq!(session.display_name(), Some("Grace Hopper"));
    assert_eq!(session.email(), Some(email));
    Ok(())
}

#[tokio::test]
async fn registration_conflict_uses_default_message() -> Result<()> {
    let backend = common::spawn().await?;
    let client = ApiClient::new(&backend.base_url, DEFAULT_TIMEOUT)?;

    let err = auth::register(
        &client,
        &Registration {
            name: "Dup".to_string(),
            email: common::TAKEN_EMAIL.to_string(),
            phone_number: "0102".to_string(),
            password: password("pw"),
        },
    )
    .await
    .err()
    .map(|e| e.to_string());
    assert_eq!(
        err,
        Some("The email or phone number already exists.".to_string())
    );
    Ok(())
}

#[tokio::test]
async fn password_reset_uses_issued_token() -> Result<()> {
    let backend = common::spawn().await?;
    let client = ApiClient::new(&backend.base_url, DEFAULT_TIMEOUT)?;

    assert!(auth::check_existence(&client, common::CUSTOMER_EMAIL).await?);
    assert!(!auth::check_existence(&client, "ghost@shop.tld").await?);

    let token = auth::generate_reset_token(&client, common::CUSTOMER_EMAIL).await?;
    assert_eq!(token.expose_secret(), common::RESET_TOKEN);

    auth::generate_otp(&client, common::CUSTOMER_EMAIL, auth::OTP_PURPOSE_CONFIRMATION).await?;
    assert!(auth::validate_otp(&client, common::CUSTOMER_EMAIL, common::VALID_OTP).await?);
    auth::reset_password(&client, common::CUSTOMER_EMAIL, &token, &password("n3w")).await?;

    let err = auth::reset_password(
        &client,
        common::CUSTOMER_EMAIL,
        &password("stale"),
        &password("n3w"),
    )
    .await
    .err()
    .map(|e| e.to_string());
    assert_eq!(err, Some("Invalid or expired token".to_string()));

    let unknown = auth::generate_reset_token(&client, "ghost@shop.tld")
        .await
        .err();
    assert_eq!(
        unknown.as_ref().and_then(ApiError::status),
        Some(StatusCode::NOT_FOUND)
    );
    Ok(())
}

#[tokio::test]
async fn server_failures_are_translated() -> Result<()> {
    let backend = common::spawn().await?;
    let client = ApiClient::new(&backend.base_url, DEFAULT_TIMEOUT)?;

    let not_found = catalog::product_details(&client, 404).await.err();
    assert_eq!(
        not_found.as_ref().and_then(ApiError::status),
        Some(StatusCode::NOT_FOUND)
    );
    assert_eq!(
        not_found.map(|e| e.to_string()),
        Some("Product not found".to_string())
    );

    let server_error = orders::all_orders(&client).await.err().map(|e| e.to_string());
    assert_eq!(
        server_error,
        Some("Something went wrong. Please try again later.".to_string())
    );

    let rejected = orders::shipping_costs(&client).await.err();
    match rejected {
        Some(ApiError::Rejected(message)) => {
            assert_eq!(message, "Shipping unavailable, Try again tomorrow");
        }
        other => panic!("unexpected result: {other:?}"),
    }

    let unauthorized = cart::items(&client, "c-1").await.err();
    assert_eq!(
        unauthorized.as_ref().and_then(ApiError::status),
        Some(StatusCode::UNAUTHORIZED)
    );
    Ok(())
}

#[tokio::test]
async fn enveloped_and_empty_success_bodies() -> Result<()> {
    let backend = common::spawn().await?;
    let client = ApiClient::new(&backend.base_url, DEFAULT_TIMEOUT)?;

    let page = catalog::products(&client, 2, catalog::DEFAULT_PAGE_SIZE).await?;
    assert_eq!(page["page"], "2");
    assert_eq!(page["pageSize"], "12");
    assert_eq!(page["items"][0]["name"], "Linen shirt");

    let deleted = catalog::delete_product(&client, 1).await?;
    assert!(deleted.is_null());
    Ok(())
}

#[tokio::test]
async fn slow_backend_times_out() -> Result<()> {
    let backend = common::spawn().await?;
    let client = ApiClient::new(&backend.base_url, Duration::from_millis(200))?;

    let err = catalog::categories(&client).await.err();
    assert!(matches!(err, Some(ApiError::Timeout)), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() -> Result<()> {
    let client = ApiClient::new(&common::closed_url().await?, DEFAULT_TIMEOUT)?;

    let err = catalog::categories(&client).await.err();
    assert!(matches!(err, Some(ApiError::Network(_))), "{err:?}");
    assert_eq!(
        err.map(|e| e.to_string()),
        Some("Network error. Please check your internet connection.".to_string())
    );
    Ok(())
}
