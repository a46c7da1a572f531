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

//! Environment variable interpolation for configuration files.
//!
//! Supports POSIX-style references inside YAML/JSON text:
//! - `${VAR_NAME}` - required variable
//! - `${VAR_NAME:-default}` - falls back to `default` when unset or empty
//!
//! Variable names follow POSIX rules (`[A-Za-z_][A-Za-z0-9_]*`); anything
//! else is left untouched. No recursive expansion, no code execution.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::env;

/// Cap on the interpolated output size. A config file has no business being
/// anywhere near this large.
const MAX_INTERPOLATED_LENGTH: usize = 1_000_000;

lazy_static! {
    /// Captures the variable name and, when present, the `:-default` value.
    static ref ENV_VAR_PATTERN: Regex =
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("Invalid interpolation pattern");
}

/// Errors raised during environment variable interpolation.
#[derive(Debug, thiserror::Error)]
pub enum InterpolationError {
    #[error("Environment variable '{name}' is not set and has no default value")]
    Missing { name: String },

    #[error("Interpolated result exceeds {MAX_INTERPOLATED_LENGTH} bytes")]
    TooLarge,
}

/// Replace every `${...}` reference in `input` with its resolved value.
///
/// A variable that is unset or empty resolves to its `:-default` when one
/// is given and is an error otherwise.
pub fn interpolate(input: &str) -> Result<String, InterpolationError> {
    let mut output = String::with_capacity(input.len());
    let mut cursor = 0;
    let mut resolved_names: Vec<&str> = Vec::new();

    for caps in ENV_VAR_PATTERN.captures_iter(input) {
        let reference = caps.get(0).expect("capture 0 always present");
        let name = caps.get(1).expect("name group always present").as_str();
        let default = caps.get(2).map(|m| m.as_str());

        output.push_str(&input[cursor..reference.start()]);
        output.push_str(&resolve(name, default)?);
        cursor = reference.end();

        if output.len() > MAX_INTERPOLATED_LENGTH {
            return Err(InterpolationError::TooLarge);
        }
        resolved_names.push(name);
    }
    output.push_str(&input[cursor..]);

    if !resolved_names.is_empty() {
        // Names only; the values may be secrets
        debug!(
            "Interpolated environment variables: {}",
            resolved_names.join(", ")
        );
    }

    Ok(output)
}

fn resolve(name: &str, default: Option<&str>) -> Result<String, InterpolationError> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => default
            .map(str::to_string)
            .ok_or_else(|| InterpolationError::Missing {
                name: name.to_string(),
            }),
    }
}
