//! Authentication endpoints: login, registration, OTP and password reset.

use super::{empty_body, to_body, ApiClient, ApiError, ApiResponse};
use crate::session::TokenResponse;
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

/// OTP purpose used when confirming an email address.
pub const OTP_PURPOSE_CONFIRMATION: &str = "confirmation";

/// New customer account details.
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub password: SecretString,
}

#[derive(Serialize)]
struct CredentialsBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegistrationBody<'a> {
    name: &'a str,
    email: &'a str,
    phone_number: &'a str,
    password: &'a str,
    confirm_password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetBody<'a> {
    email: &'a str,
    token: &'a str,
    new_password: &'a str,
}

/// Login and registration answer either with a bare `{token}` or with the
/// token wrapped in the usual envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum TokenPayload {
    Bare(TokenResponse),
    Wrapped(ApiResponse<TokenResponse>),
}

impl TokenPayload {
    fn into_token(self) -> Result<TokenResponse, ApiError> {
        match self {
            Self::Bare(token) => Ok(token),
            Self::Wrapped(envelope) => envelope.into_result(),
        }
    }
}

/// Exchange credentials for a token.
///
/// # Errors
/// Returns an error if the request fails or the credentials are rejected.
#[instrument(skip(client, password))]
pub async fn login(
    client: &ApiClient,
    email: &str,
    password: &SecretString,
) -> Result<TokenResponse, ApiError> {
    let body = to_body(&CredentialsBody {
        email,
        password: password.expose_secret(),
    })?;
    let payload: TokenPayload = client
        .send(Method::POST, "Authentication/Login", &[], Some(&body))
        .await?;
    payload.into_token()
}

/// Create a customer account. The backend signs the new user in right away.
///
/// # Errors
/// Returns an error if the request fails or the account cannot be created.
#[instrument(skip(client, registration), fields(email = %registration.email))]
pub async fn register(
    client: &ApiClient,
    registration: &Registration,
) -> Result<TokenResponse, ApiError> {
    let password = registration.password.expose_secret();
    let body = to_body(&RegistrationBody {
        name: &registration.name,
        email: &registration.email,
        phone_number: &registration.phone_number,
        password,
        confirm_password: password,
    })?;
    let payload: TokenPayload = client
        .send(Method::POST, "Authentication/CustomerRegister", &[], Some(&body))
        .await?;
    payload.into_token()
}

/// Email a one-time code for `purpose`.
///
/// # Errors
/// Returns an error if the request fails.
#[instrument(skip(client))]
pub async fn generate_otp(client: &ApiClient, email: &str, purpose: &str) -> Result<Value, ApiError> {
    let query = [("email", email.to_string()), ("purpose", purpose.to_string())];
    client
        .send(
            Method::POST,
            "Authentication/generateOtp",
            &query,
            Some(&empty_body()),
        )
        .await
}

/// Check a one-time code. Any 2xx answer that does not explicitly say
/// otherwise counts as valid.
///
/// # Errors
/// Returns an error if the request fails; a wrong code usually surfaces as an
/// HTTP error carrying the server's message.
#[instrument(skip(client, code))]
pub async fn validate_otp(client: &ApiClient, email: &str, code: &str) -> Result<bool, ApiError> {
    let query = [("email", email.to_string()), ("code", code.to_string())];
    let value: Value = client
        .send(
            Method::POST,
            "Authentication/validateOtp",
            &query,
            Some(&empty_body()),
        )
        .await?;
    Ok(flag(&value).unwrap_or(true))
}

/// Request a password reset token for `email`.
///
/// The backend answers with the token itself, as plain text, a JSON string or
/// an enveloped string `result`.
///
/// # Errors
/// Returns an error if the request fails, the server rejects it or the answer
/// carries no token.
#[instrument(skip(client))]
pub async fn generate_reset_token(client: &ApiClient, email: &str) -> Result<SecretString, ApiError> {
    let body = client
        .send_text(
            Method::POST,
            "Authentication/GenerateResetToken",
            &[("email", email.to_string())],
            None,
        )
        .await?;
    reset_token(&body).map(SecretString::from)
}

fn reset_token(body: &str) -> Result<String, ApiError> {
    let body = body.trim();
    let token = match serde_json::from_str::<Value>(body) {
        Ok(Value::String(token)) => token,
        Ok(value @ Value::Object(_)) => serde_json::from_value::<ApiResponse<String>>(value)
            .map_err(|err| ApiError::Parse(format!("Unexpected reset token answer: {err}")))?
            .into_result()?,
        Ok(Value::Null) => return Err(ApiError::MissingResult),
        Ok(other) => {
            return Err(ApiError::Parse(format!(
                "Unexpected reset token answer: {other}"
            )))
        }
        Err(_) => body.to_string(),
    };

    let token = token.trim();
    if token.is_empty() {
        Err(ApiError::MissingResult)
    } else {
        Ok(token.to_string())
    }
}

/// Set a new password using the emailed reset token.
///
/// # Errors
/// Returns an error if the request fails or the token is rejected.
#[instrument(skip(client, token, new_password))]
pub async fn reset_password(
    client: &ApiClient,
    email: &str,
    token: &SecretString,
    new_password: &SecretString,
) -> Result<Value, ApiError> {
    let body = to_body(&ResetBody {
        email,
        token: token.expose_secret(),
        new_password: new_password.expose_secret(),
    })?;
    client
        .send(Method::POST, "Authentication/ResetPassword", &[], Some(&body))
        .await
}

/// Whether an account already uses `email`.
///
/// # Errors
/// Returns an error if the request fails or the answer carries no flag.
#[instrument(skip(client))]
pub async fn check_existence(client: &ApiClient, email: &str) -> Result<bool, ApiError> {
    let value: Value = client
        .send(
            Method::GET,
            "Authentication/CheckExistence",
            &[("email", email.to_string())],
            None,
        )
        .await?;
    flag(&value).ok_or_else(|| ApiError::Parse(format!("expected a boolean answer, got {value}")))
}

/// Read a yes/no answer: a bare boolean, an enveloped boolean `result`, or
/// the envelope's `isSuccess`.
fn flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::Object(map) => {
            let success = map.get("isSuccess").and_then(Value::as_bool);
            match map.get("result").and_then(Value::as_bool) {
                Some(result) => Some(result && success.unwrap_or(true)),
                None => success,
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn token_payload_accepts_both_shapes() -> Result<(), Box<dyn std::error::Error>> {
        let bare: TokenPayload = serde_json::from_value(json!({"token": "a.b.c"}))?;
        assert_eq!(bare.into_token()?.token, "a.b.c");

        let wrapped: TokenPayload = serde_json::from_value(json!({
            "isSuccess": true,
            "result": {"token": "x.y.z"},
            "errorMessages": null
        }))?;
        assert_eq!(wrapped.into_token()?.token, "x.y.z");
        Ok(())
    }

    #[test]
    fn token_payload_surfaces_rejection() -> Result<(), Box<dyn std::error::Error>> {
        let rejected: TokenPayload = serde_json::from_value(json!({
            "isSuccess": false,
            "errorMessages": ["Account locked"]
        }))?;
        assert_eq!(
            rejected.into_token().map_err(|e| e.to_string()).err(),
            Some("Account locked".to_string())
        );
        Ok(())
    }

    #[test]
    fn registration_body_repeats_password() -> Result<(), Box<dyn std::error::Error>> {
        let body = to_body(&RegistrationBody {
            name: "Ada",
            email: "ada@example.com",
            phone_number: "0100",
            password: "pw",
            confirm_password: "pw",
        })?;
        assert_eq!(
            body,
            json!({
                "name": "Ada",
                "email": "ada@example.com",
                "phoneNumber": "0100",
                "password": "pw",
                "confirmPassword": "pw"
            })
        );
        Ok(())
    }

    #[test]
    fn reset_token_accepts_text_and_json() -> Result<(), ApiError> {
        assert_eq!(reset_token("CfDJ8reset-token-abc\n")?, "CfDJ8reset-token-abc");
        assert_eq!(reset_token("\"CfDJ8quoted\"")?, "CfDJ8quoted");
        assert_eq!(
            reset_token(r#"{"isSuccess":true,"result":"CfDJ8wrapped","errorMessages":null}"#)?,
            "CfDJ8wrapped"
        );
        Ok(())
    }

    #[test]
    fn reset_token_rejects_empty_answers() {
        assert!(matches!(reset_token(""), Err(ApiError::MissingResult)));
        assert!(matches!(reset_token("null"), Err(ApiError::MissingResult)));
        assert!(matches!(reset_token("\"  \""), Err(ApiError::MissingResult)));
        assert!(matches!(reset_token("42"), Err(ApiError::Parse(_))));
        assert!(matches!(
            reset_token(r#"{"isSuccess":false,"errorMessages":"Unknown email"}"#),
            Err(ApiError::Rejected(message)) if message == "Unknown email"
        ));
    }

    #[test]
    fn reads_flags() {
        assert_eq!(flag(&json!(true)), Some(true));
        assert_eq!(flag(&json!(false)), Some(false));
        assert_eq!(flag(&json!({"isSuccess": true, "result": false})), Some(false));
        assert_eq!(flag(&json!({"isSuccess": false, "result": true})), Some(false));
        assert_eq!(flag(&json!({"isSuccess": false})), Some(false));
        assert_eq!(flag(&json!({"isSuccess": true, "result": "ok"})), Some(true));
        assert_eq!(flag(&json!("ok")), None);
        assert_eq!(flag(&Value::Null), None);
    }
}
