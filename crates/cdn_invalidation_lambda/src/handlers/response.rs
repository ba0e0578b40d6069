use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::runtime::contract::{FailureBody, FAILURE_MESSAGE};
use crate::runtime::error::InvalidationError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

impl HandlerResponse {
    pub fn body_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

pub fn success_response(status_code: u16, payload: impl Serialize) -> HandlerResponse {
    let body = serde_json::to_string(&payload).unwrap_or_else(|error| {
        json!({
            "message": FAILURE_MESSAGE,
            "error": format!("failed to serialize response: {error}"),
        })
        .to_string()
    });
    HandlerResponse {
        status_code,
        headers: json!({"Content-Type": "application/json"}),
        body,
    }
}

pub fn error_response(error: &InvalidationError) -> HandlerResponse {
    success_response(500, FailureBody::from_error(error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_carries_message_and_error_text() {
        let response = error_response(&InvalidationError::provider("Access denied"));

        assert_eq!(response.status_code, 500);
        assert_eq!(
            response.body_json().expect("body should parse"),
            json!({
                "message": "Error creating CloudFront invalidation",
                "error": "Access denied"
            })
        );
    }

    #[test]
    fn serializes_status_code_in_lambda_proxy_shape() {
        let value = serde_json::to_value(success_response(200, json!({"ok": true})))
            .expect("response should serialize");
        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["body"], "{\"ok\":true}");
    }
}
