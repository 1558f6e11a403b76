//! # Response Formatting
//!
//! Success envelope shared by every resource.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// `{ "success": true, "payload": ... }`
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub payload: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(payload: T) -> Self {
        Self {
            success: true,
            payload,
        }
    }
}

/// Envelope paired with the status it is sent with
#[derive(Debug)]
pub struct Reply<T: Serialize> {
    status: StatusCode,
    body: Envelope<T>,
}

impl<T: Serialize> Reply<T> {
    /// 200 OK
    pub fn ok(payload: T) -> Self {
        Self {
            status: StatusCode::OK,
            body: Envelope::new(payload),
        }
    }

    /// 201 Created
    pub fn created(payload: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            body: Envelope::new(payload),
        }
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_serialization() {
        let envelope = Envelope::new(json!({"id": 1, "name": "Merlot"}));

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["payload"]["id"], 1);
    }

    #[test]
    fn test_empty_list_payload_is_array() {
        let envelope = Envelope::new(Vec::<serde_json::Value>::new());

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["payload"], json!([]));
    }

    #[test]
    fn test_reply_status() {
        assert_eq!(Reply::ok(1).into_response().status(), StatusCode::OK);
        assert_eq!(
            Reply::created(1).into_response().status(),
            StatusCode::CREATED
        );
    }
}
