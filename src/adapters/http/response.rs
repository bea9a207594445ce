//! Shared HTTP response types.

use serde::Serialize;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn invalid_id(resource_type: &str) -> Self {
        Self {
            code: "INVALID_ID".to_string(),
            message: format!("Invalid {} ID", resource_type),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            code: "UNAUTHORIZED".to_string(),
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            code: "SERVICE_UNAVAILABLE".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_carries_the_message() {
        let error = ErrorResponse::bad_request("title must not be empty");
        assert_eq!(error.code, "BAD_REQUEST");
        assert_eq!(error.message, "title must not be empty");
    }

    #[test]
    fn not_found_names_resource_and_id() {
        let error = ErrorResponse::not_found("Goal", "abc123");
        assert_eq!(error.code, "NOT_FOUND");
        assert!(error.message.contains("Goal"));
        assert!(error.message.contains("abc123"));
    }

    #[test]
    fn serializes_to_code_and_message() {
        let json = serde_json::to_value(ErrorResponse::invalid_id("goal")).unwrap();
        assert_eq!(json["code"], "INVALID_ID");
        assert_eq!(json["message"], "Invalid goal ID");
    }
}
