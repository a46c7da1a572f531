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

//! Dataset access.
//!
//! Records are kept as opaque `serde_json::Value` objects: the only field
//! this server interprets is `guid`, everything else is passthrough data.
//! The dataset file is read and parsed fresh on every invocation, so edits
//! take effect without a restart at the cost of repeated I/O per request.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors raised while loading the dataset file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read dataset file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dataset file '{path}': {detail}")]
    Parse { path: String, detail: String },
}

/// Handle to the on-disk dataset of school records.
///
/// Holds only the file path. There is no cross-request cache or lock; every
/// load is an independent read, and a file mutated externally mid-request
/// may be observed partially updated. That is accepted, not mitigated.
#[derive(Debug, Clone)]
pub struct SchoolStore {
    path: PathBuf,
}

impl SchoolStore {
    /// Create a store backed by the given dataset file path.
    ///
    /// Relative paths are resolved against the process working directory.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The dataset file path this store reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the full dataset, preserving file order.
    ///
    /// The top-level JSON value must be an array; any other shape is a parse
    /// failure. Failures are never retried here; the caller translates them
    /// into an internal-server error.
    pub fn load(&self) -> Result<Vec<Value>, StoreError> {
        let path = self.path.display().to_string();

        let content = fs::read_to_string(&self.path)
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;

        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| StoreError::Parse {
                path: path.clone(),
                detail: e.to_string(),
            })?;

        match parsed {
            Value::Array(records) => Ok(records),
            other => Err(StoreError::Parse {
                path,
                detail: format!(
                    "expected a top-level JSON array, found {}",
                    json_type_name(&other)
                ),
            }),
        }
    }

    /// Find the first record whose `guid` field equals `guid` exactly.
    ///
    /// The comparison is case-sensitive string equality against the stored
    /// value. Records without a string `guid` field never match. Duplicate
    /// guids are not rejected; the first match in dataset order wins.
    pub fn find(&self, guid: &str) -> Result<Option<Value>, StoreError> {
        let records = self.load()?;
        Ok(records
            .into_iter()
            .find(|record| record.get("guid").and_then(Value::as_str) == Some(guid)))
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
