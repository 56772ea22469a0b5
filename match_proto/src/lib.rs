//! Wire contract shared by the capture client and the auth gateway.
//!
//! Field names are part of the deployed contract and must stay camelCase;
//! `staffId` is omitted entirely when no identifier is attached to a match.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticateRequest {
    /// One base64-encoded still frame.
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticateResponse {
    pub is_authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_uses_camel_case_field_names() {
        let response = AuthenticateResponse {
            is_authenticated: true,
            staff_id: Some("S123".to_string()),
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"isAuthenticated": true, "staffId": "S123"})
        );
    }

    #[test]
    fn staff_id_is_omitted_when_absent() {
        let response = AuthenticateResponse {
            is_authenticated: false,
            staff_id: None,
        };

        let json = serde_json::to_string(&response).unwrap();

        assert_eq!(json, r#"{"isAuthenticated":false}"#);
    }

    #[test]
    fn response_without_staff_id_deserializes() {
        let response: AuthenticateResponse =
            serde_json::from_str(r#"{"isAuthenticated":false}"#).unwrap();

        assert!(!response.is_authenticated);
        assert!(response.staff_id.is_none());
    }

    #[test]
    fn request_round_trips() {
        let request: AuthenticateRequest =
            serde_json::from_str(r#"{"image":"aGVsbG8="}"#).unwrap();

        assert_eq!(request.image, "aGVsbG8=");
    }
}
