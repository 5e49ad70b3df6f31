//! Uniform response envelope returned by the storefront API.

use super::errors::ApiError;
use serde::{Deserialize, Serialize};

/// `errorMessages` arrives either as a single string or as a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessages {
    One(String),
    Many(Vec<String>),
}

impl ErrorMessages {
    /// All non-blank messages joined for display, or `None` when there are none.
    #[must_use]
    pub fn joined(&self) -> Option<String> {
        let parts: Vec<&str> = match self {
            Self::One(message) => vec![message.trim()],
            Self::Many(messages) => messages.iter().map(|m| m.trim()).collect(),
        };
        let parts: Vec<&str> = parts.into_iter().filter(|m| !m.is_empty()).collect();
        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub is_success: bool,
    pub result: Option<T>,
    pub error_messages: Option<ErrorMessages>,
}

impl<T> ApiResponse<T> {
    /// The payload of a successful response, which may legitimately be empty.
    ///
    /// # Errors
    /// Returns `ApiError::Rejected` when the server reports failure.
    pub fn into_optional(self) -> Result<Option<T>, ApiError> {
        if self.is_success {
            Ok(self.result)
        } else {
            let message = self
                .error_messages
                .as_ref()
                .and_then(ErrorMessages::joined)
                .unwrap_or_else(|| "An unexpected error occurred.".to_string());
            Err(ApiError::Rejected(message))
        }
    }

    /// The payload of a successful response.
    ///
    /// # Errors
    /// Returns `ApiError::Rejected` on failure and `ApiError::MissingResult`
    /// when a successful response carries no payload.
    pub fn into_result(self) -> Result<T, ApiError> {
        self.into_optional()?.ok_or(ApiError::MissingResult)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn success_yields_result() -> Result<(), Box<dyn std::error::Error>> {
        let response: ApiResponse<Vec<u32>> =
            serde_json::from_value(json!({"isSuccess": true, "result": [1, 2], "errorMessages": null}))?;
        assert_eq!(response.into_result()?, vec![1, 2]);
        Ok(())
    }

    #[test]
    fn success_without_result() -> Result<(), Box<dyn std::error::Error>> {
        let response: ApiResponse<Value> = serde_json::from_value(json!({"isSuccess": true}))?;
        assert!(matches!(
            response.clone().into_result(),
            Err(ApiError::MissingResult)
        ));
        assert_eq!(response.into_optional()?, None);
        Ok(())
    }

    #[test]
    fn failure_carries_messages() -> Result<(), Box<dyn std::error::Error>> {
        let response: ApiResponse<Value> = serde_json::from_value(json!({
            "isSuccess": false,
            "result": null,
            "errorMessages": ["Out of stock", " ", "Size unavailable"]
        }))?;
        match response.into_result() {
            Err(ApiError::Rejected(message)) => {
                assert_eq!(message, "Out of stock, Size unavailable");
            }
            other => panic!("unexpected: {other:?}"),
        }

        let response: ApiResponse<Value> = serde_json::from_value(json!({
            "isSuccess": false,
            "errorMessages": "Cart is empty"
        }))?;
        assert_eq!(
            response.into_result().map_err(|e| e.to_string()).err(),
            Some("Cart is empty".to_string())
        );
        Ok(())
    }

    #[test]
    fn failure_without_messages_has_generic_text() -> Result<(), Box<dyn std::error::Error>> {
        let response: ApiResponse<Value> = serde_json::from_value(json!({"isSuccess": false}))?;
        assert_eq!(
            response.into_optional().map_err(|e| e.to_string()).err(),
            Some("An unexpected error occurred.".to_string())
        );
        Ok(())
    }
}
