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

//! Route definitions.

use axum::{extract::Extension, middleware, routing::get, Router};
use tower_http::cors::CorsLayer;

use super::{handlers, trace};
use crate::store::SchoolStore;

/// Build the application router.
///
/// A request that matches no path, or a known path with the wrong method,
/// falls through to the not-found handler so it still gets the uniform
/// error envelope. The tracing layer wraps everything, fallbacks included.
pub fn build_router(store: SchoolStore) -> Router {
    Router::new()
        .route(
            "/health",
            get(handlers::health_check).fallback(handlers::route_not_found),
        )
        .route(
            "/",
            get(handlers::list_schools).fallback(handlers::route_not_found),
        )
        .route(
            "/:identifier",
            get(handlers::get_school).fallback(handlers::route_not_found),
        )
        .fallback(handlers::route_not_found)
        .layer(Extension(store))
        .layer(middleware::from_fn(trace::trace_requests))
        .layer(CorsLayer::permissive())
}
