//! Response envelopes shared by the HTTP services.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Unpaged listing: every live row plus how many were returned
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub success: bool,
    pub data: Vec<T>,
    pub total: usize,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            total: data.len(),
            data,
        }
    }
}

/// 201 response for POST endpoints
pub struct Created<T: Serialize> {
    pub data: T,
    pub message: String,
}

impl<T: Serialize> Created<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
        }
    }
}

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (
            StatusCode::CREATED,
            Json(ApiResponse::with_message(self.data, self.message)),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_only_omits_data() {
        let body = serde_json::to_value(ApiResponse::message("Store deleted successfully")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"success": true, "message": "Store deleted successfully"})
        );
    }

    #[test]
    fn list_total_counts_returned_rows() {
        let body = serde_json::to_value(ListResponse::new(vec![1, 2, 3])).unwrap();
        assert_eq!(body["total"], 3);
        assert_eq!(body["success"], true);
    }

    #[test]
    fn created_is_201() {
        let response = Created::new("x", "User created successfully").into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
