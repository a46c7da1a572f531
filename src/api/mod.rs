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

//! HTTP API surface: routing, handlers, error envelope, request tracing.

pub mod error;
pub mod handlers;
pub mod responses;
pub mod routes;
pub mod trace;

pub use error::{ApiError, ErrorEnvelope};
pub use routes::build_router;
pub use trace::{RequestContext, REQUEST_ID_HEADER};
