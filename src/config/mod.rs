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

//! Configuration management for Roster Server.
//!
//! This module provides:
//! - Type-safe settings with serde defaults
//! - YAML and JSON file loading (auto-detected)
//! - Automatic environment variable interpolation
//! - Settings validation
//!
//! # Environment Variable Interpolation
//!
//! Config loading interpolates environment variables using POSIX-style
//! syntax:
//! - `${VAR_NAME}` - Required variable
//! - `${VAR_NAME:-default}` - Variable with default value
//!
//! # Configuration File Example
//!
//! ```yaml
//! host: "${ROSTER_HOST:-0.0.0.0}"
//! port: "${ROSTER_PORT:-3000}"
//! log_level: "${LOG_LEVEL:-info}"
//! data_file: data/schools.json
//! ```

pub mod env_interpolation;
pub mod loader;
pub mod types;

// Re-export commonly used types
pub use loader::{from_json_str, from_yaml_str, load_config_file, save_config_file, ConfigError};
pub use types::ServerSettings;
