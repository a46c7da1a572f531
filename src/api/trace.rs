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

//! Per-request tracing.
//!
//! Every inbound request gets a correlation identifier. The identifier is
//! injected into request extensions for handlers and the error responder,
//! stamped onto the response as `X-Request-ID`, and written into the single
//! access-log line emitted when the response completes.

use axum::{
    extract::Request,
    http::{header::HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use log::info;
use uuid::Uuid;

/// Response header carrying the correlation identifier.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Ephemeral per-request state, discarded when the response is sent.
///
/// Handlers receive it via `Extension<RequestContext>`; components that log
/// on behalf of a request take it explicitly instead of reaching for any
/// process-wide state.
#[derive(Debug, Clone)]
pub struct RequestContext {
    request_id: String,
}

impl RequestContext {
    /// Create a context with a fresh correlation identifier.
    ///
    /// UUID v4 is more than unique enough for log correlation; collisions
    /// within a log-retention window are not a practical concern.
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
        }
    }

    /// The correlation identifier for this request.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Middleware wrapping the whole router.
///
/// Assigns the context before any handler runs, then stamps the header and
/// logs status, method, path and correlation id on completion. Requests that
/// fall through to the not-found fallback pass here too, so every response
/// carries the header.
pub async fn trace_requests(mut req: Request, next: Next) -> Response {
    let ctx = RequestContext::new();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    req.extensions_mut().insert(ctx.clone());

    let mut response = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(ctx.request_id()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    info!(
        "{} {} {} request_id={}",
        response.status().as_u16(),
        method,
        path,
        ctx.request_id()
    );

    response
}
