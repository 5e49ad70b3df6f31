//! Claim extraction from bearer tokens issued by the storefront API.
//!
//! Tokens are compact JWTs. The client reads the payload for display and UI
//! branching only; signatures and expiry are the backend's concern, so nothing
//! here verifies them. Callers choose how to react to a [`DecodeError`].

use base64ct::{Base64Url, Base64UrlUnpadded, Encoding};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid token format")]
    Format,
    #[error("invalid base64url encoding")]
    Base64,
    #[error("invalid json")]
    Json(#[from] serde_json::Error),
    #[error("missing claim: {0}")]
    MissingClaim(&'static str),
}

/// Role claim carried by storefront tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Customer,
    Admin,
    /// Any role the client has no special handling for, kept verbatim.
    Other(String),
}

impl Role {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Customer => "Customer",
            Self::Admin => "Admin",
            Self::Other(value) => value,
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value {
            "Customer" => Self::Customer,
            "Admin" => Self::Admin,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// The subset of token claims the client trusts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub role: Role,
}

const CLAIM_NAMES: [&str; 5] = ["id", "fullName", "email", "phoneNumber", "role"];

/// Decode the claims of a compact JWT without verifying it.
///
/// # Errors
///
/// Returns an error if the token does not have three segments, the payload is
/// not base64url JSON, or any expected claim is missing or not a string.
pub fn decode(token: &str) -> Result<Claims, DecodeError> {
    let mut parts = token.trim().split('.');
    let _header = parts.next().ok_or(DecodeError::Format)?;
    let payload_b64 = parts.next().ok_or(DecodeError::Format)?;
    let _signature = parts.next().ok_or(DecodeError::Format)?;
    if parts.next().is_some() || payload_b64.is_empty() {
        return Err(DecodeError::Format);
    }

    let bytes = decode_segment(payload_b64)?;
    let payload: Value = serde_json::from_slice(&bytes)?;

    // Report the first absent claim by name instead of a serde message.
    for name in CLAIM_NAMES {
        if !payload.get(name).is_some_and(Value::is_string) {
            return Err(DecodeError::MissingClaim(name));
        }
    }

    Ok(serde_json::from_value(payload)?)
}

/// Build an unsigned (`alg: none`) compact token carrying `claims`.
///
/// The storefront never mints tokens; this exists for fixtures and local mocks.
///
/// # Errors
///
/// Returns an error if the claims cannot be serialized.
pub fn encode_unsigned(claims: &Claims) -> Result<String, DecodeError> {
    let header = serde_json::json!({ "alg": "none", "typ": "JWT" });
    let header_b64 = Base64UrlUnpadded::encode_string(&serde_json::to_vec(&header)?);
    let claims_b64 = Base64UrlUnpadded::encode_string(&serde_json::to_vec(claims)?);
    Ok(format!("{header_b64}.{claims_b64}.unsigned"))
}

fn decode_segment(segment: &str) -> Result<Vec<u8>, DecodeError> {
    if segment.ends_with('=') {
        Base64Url::decode_vec(segment).map_err(|_| DecodeError::Base64)
    } else {
        Base64UrlUnpadded::decode_vec(segment).map_err(|_| DecodeError::Base64)
    }
}
