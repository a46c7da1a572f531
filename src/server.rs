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

//! Server lifecycle: bind once at launch, serve until a termination signal,
//! then drain in-flight requests and exit.

use anyhow::Result;
use log::{error, info, warn};

use crate::api;
use crate::config::ServerSettings;
use crate::store::SchoolStore;

pub struct RosterServer {
    settings: ServerSettings,
}

impl RosterServer {
    pub fn new(settings: ServerSettings) -> Self {
        Self { settings }
    }

    pub async fn run(self) -> Result<()> {
        info!("Initializing Roster Server");

        let store = SchoolStore::new(&self.settings.data_file);

        // Probe the dataset once so a misconfigured path is visible at
        // startup. Requests still read fresh on every call; a file that
        // appears (or breaks) later changes behavior without a restart.
        match store.load() {
            Ok(records) => info!(
                "Dataset '{}' readable: {} record(s)",
                self.settings.data_file,
                records.len()
            ),
            Err(e) => warn!("Dataset not readable at startup: {e}"),
        }

        let app = api::build_router(store);

        let addr = format!("{}:{}", self.settings.host, self.settings.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!("Starting web API on {addr}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Roster Server stopped");
        Ok(())
    }
}

/// Resolves when the process receives a termination signal. In-flight
/// requests drain after this; there is no forced abort or drain timeout.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutdown signal received, draining in-flight requests");
}
