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

//! Request handlers.
//!
//! Handlers detect failures and forward them to the error responder; they
//! never pick a status code or log severity themselves.

use axum::{
    extract::{Extension, Path},
    http::{Method, Uri},
    response::{Json, Response},
};
use serde_json::Value;

use super::error::{self, ApiError};
use super::responses::HealthResponse;
use super::trace::RequestContext;
use crate::guid;
use crate::store::SchoolStore;

/// Check server health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// List every record in the dataset, preserving file order.
pub async fn list_schools(
    Extension(store): Extension<SchoolStore>,
    Extension(ctx): Extension<RequestContext>,
) -> Result<Json<Vec<Value>>, Response> {
    let records = store
        .load()
        .map_err(|e| error::respond(&ctx, e.into()))?;
    Ok(Json(records))
}

/// Fetch a single record by its GUID.
pub async fn get_school(
    Extension(store): Extension<SchoolStore>,
    Extension(ctx): Extension<RequestContext>,
    Path(identifier): Path<String>,
) -> Result<Json<Value>, Response> {
    if !guid::is_valid_guid(&identifier) {
        return Err(error::respond(&ctx, ApiError::invalid_guid(&identifier)));
    }

    let record = store
        .find(&identifier)
        .map_err(|e| error::respond(&ctx, e.into()))?;

    match record {
        Some(record) => Ok(Json(record)),
        None => Err(error::respond(&ctx, ApiError::item_not_found(&identifier))),
    }
}

/// Fallback for requests no route matched, by path or by method.
pub async fn route_not_found(
    Extension(ctx): Extension<RequestContext>,
    method: Method,
    uri: Uri,
) -> Response {
    error::respond(&ctx, ApiError::route_not_found(&method, uri.path()))
}
