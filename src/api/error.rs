// Copyright 2025 The Roster Server Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The error taxonomy and the single place that renders it.
//!
//! Handlers only detect failures; everything is forwarded here, and this
//! module alone decides status code, body shape and log severity. Every
//! non-2xx response uses the same envelope:
//! `{"error": {"message", "statusCode", "requestId"}}`.

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use log::{error, warn};
use serde::Serialize;

use super::trace::RequestContext;
use crate::store::StoreError;

/// Failure conditions surfaced by the request pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Identifier failed lexical validation; user-correctable.
    #[error("Invalid GUID format: {0}")]
    Validation(String),

    /// Well-formed identifier with no matching record.
    #[error("Item not found: {0}")]
    NotFound(String),

    /// No handler matched the request path and method.
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    /// Dataset unreadable or unparseable; not user-correctable.
    #[error(transparent)]
    Load(#[from] StoreError),

    /// Anything else. The detail stays server-side; clients get a generic
    /// message.
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// An identifier that does not have the GUID textual shape.
    pub fn invalid_guid(value: &str) -> Self {
        ApiError::Validation(value.to_string())
    }

    /// A well-formed identifier that matched no record.
    pub fn item_not_found(value: &str) -> Self {
        ApiError::NotFound(value.to_string())
    }

    /// A request no route matched.
    pub fn route_not_found(method: &Method, path: &str) -> Self {
        ApiError::RouteNotFound(format!("{method} {path}"))
    }

    /// The HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) | ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Load(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Uniform JSON body for all non-2xx responses.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(rename = "requestId")]
    pub request_id: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>, status: StatusCode, request_id: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                message: message.into(),
                status_code: status.as_u16(),
                request_id: request_id.into(),
            },
        }
    }
}

/// Render `err` for the request identified by `ctx`.
///
/// Log severity follows the taxonomy: warn for user-correctable 4xx, error
/// with full detail for 5xx. Unmatched routes are already recorded by the
/// access-log line, so they produce no extra entry here.
pub fn respond(ctx: &RequestContext, err: ApiError) -> Response {
    let status = err.status_code();

    match &err {
        ApiError::Validation(_) | ApiError::NotFound(_) => {
            warn!("{err} request_id={}", ctx.request_id());
        }
        ApiError::RouteNotFound(_) => {}
        ApiError::Load(detail) => {
            error!("Dataset load failed: {detail} request_id={}", ctx.request_id());
        }
        ApiError::Internal(detail) => {
            error!("Unhandled error: {detail:#} request_id={}", ctx.request_id());
        }
    }

    let envelope = ErrorEnvelope::new(err.to_string(), status, ctx.request_id());
    (status, Json(envelope)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let err = ApiError::invalid_guid("not-a-guid");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid GUID format: not-a-guid");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::item_not_found("00000000-0000-0000-0000-000000000000");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert!(err.to_string().contains("not found"));
        assert!(err
            .to_string()
            .contains("00000000-0000-0000-0000-000000000000"));
    }

    #[test]
    fn test_route_not_found_maps_to_404() {
        let err = ApiError::route_not_found(&Method::GET, "/nonexistent/route");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Route not found: GET /nonexistent/route");
    }

    #[test]
    fn test_load_failure_maps_to_500_with_wrapped_message() {
        let store_err = StoreError::Parse {
            path: "schools.json".to_string(),
            detail: "expected a top-level JSON array, found an object".to_string(),
        };
        let err = ApiError::from(store_err);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("schools.json"));
    }

    #[test]
    fn test_internal_error_message_is_generic() {
        let err = ApiError::from(anyhow::anyhow!("db handle poisoned"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Internal server error");
    }

    #[test]
    fn test_envelope_serialization_shape() {
        let envelope = ErrorEnvelope::new("Item not found: x", StatusCode::NOT_FOUND, "req-1");
        let json = serde_json::to_value(&envelope).expect("serialize");

        assert_eq!(json["error"]["message"], "Item not found: x");
        assert_eq!(json["error"]["statusCode"], 404);
        assert_eq!(json["error"]["requestId"], "req-1");
    }

    #[test]
    fn test_respond_builds_envelope_with_request_id() {
        let ctx = RequestContext::new();
        let response = respond(&ctx, ApiError::invalid_guid("xyz"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
