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

//! Server settings types and validation.

use serde::{Deserialize, Serialize};

/// Known log levels, in increasing verbosity order.
const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Top-level server settings.
///
/// Every field has a default, so an empty config file is valid. Unknown
/// fields are rejected at parse time to catch typos that would otherwise be
/// silently ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSettings {
    /// Interface the listener binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the listener binds to.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Minimum log level when RUST_LOG is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Path to the dataset JSON file, resolved against the working directory.
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_data_file() -> String {
    "data/schools.json".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            data_file: default_data_file(),
        }
    }
}

impl ServerSettings {
    /// Validate field values that serde cannot check structurally.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.host.trim().is_empty() {
            anyhow::bail!("host must not be empty");
        }
        if self.port == 0 {
            anyhow::bail!("port must be greater than 0");
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            anyhow::bail!(
                "unknown log_level '{}', expected one of: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            );
        }
        if self.data_file.trim().is_empty() {
            anyhow::bail!("data_file must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ServerSettings::default();
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 3000);
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.data_file, "data/schools.json");
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(ServerSettings::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_port() {
        let settings = ServerSettings {
            port: 0,
            ..Default::default()
        };
        let err = settings.validate().expect_err("should be rejected");
        assert!(err.to_string().contains("port"));
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let settings = ServerSettings {
            log_level: "verbose".to_string(),
            ..Default::default()
        };
        let err = settings.validate().expect_err("should be rejected");
        assert!(err.to_string().contains("log_level"));
    }

    #[test]
    fn test_accepts_every_known_log_level() {
        for level in ["error", "warn", "info", "debug", "trace"] {
            let settings = ServerSettings {
                log_level: level.to_string(),
                ..Default::default()
            };
            assert!(settings.validate().is_ok(), "level '{level}' rejected");
        }
    }

    #[test]
    fn test_rejects_empty_data_file() {
        let settings = ServerSettings {
            data_file: "  ".to_string(),
            ..Default::default()
        };
        let err = settings.validate().expect_err("should be rejected");
        assert!(err.to_string().contains("data_file"));
    }

    #[test]
    fn test_empty_document_deserializes_to_defaults() {
        let settings: ServerSettings = serde_json::from_str("{}").expect("parse");
        assert_eq!(settings.port, 3000);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = serde_json::from_str::<ServerSettings>(r#"{"prot": 8080}"#);
        assert!(result.is_err());
    }
}
