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

// Allow println! in main.rs for CLI user-facing output (validate command)
#![allow(clippy::print_stdout)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use roster_server::store::SchoolStore;
use roster_server::{load_config_file, save_config_file, RosterServer, ServerSettings};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "Read-only HTTP API serving school roster records")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nrustc: ",
    env!("ROSTER_RUSTC_VERSION"),
))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the configuration file
    #[arg(short, long, default_value = "config/server.yaml", global = true)]
    config: PathBuf,

    /// Override the server port
    #[arg(short, long, global = true)]
    port: Option<u16>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the server (default if no subcommand specified)
    Run,

    /// Validate the configuration and dataset without starting the server
    Validate {
        /// Show resolved configuration with environment variables expanded
        #[arg(long)]
        show_resolved: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Validate { show_resolved }) => validate_config(cli.config, show_resolved),
        // Default behavior: run the server
        Some(Commands::Run) | None => run_server(cli.config, cli.port).await,
    }
}

/// Run the Roster Server
async fn run_server(config_path: PathBuf, port_override: Option<u16>) -> Result<()> {
    // Load .env before reading the config; interpolation depends on it
    let env_file_loaded = load_env_file(&config_path);

    // Check if config file exists, create default if it doesn't
    let mut settings = if !config_path.exists() {
        init_logging("info");

        warn!(
            "Config file '{}' not found. Creating default configuration.",
            config_path.display()
        );

        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut defaults = ServerSettings::default();
        if let Some(port) = port_override {
            defaults.port = port;
            info!("Using command line port {port} in default configuration");
        }

        save_config_file(&defaults, &config_path)?;
        info!(
            "Default configuration created at: {}",
            config_path.display()
        );

        defaults
    } else {
        let settings = load_config_file(&config_path)?;
        // RUST_LOG wins over the configured level
        init_logging(&settings.log_level);
        settings
    };

    info!("Starting Roster Server");
    debug!("Debug logging is enabled");

    if env_file_loaded {
        info!("Loaded environment variables from .env file");
    }

    info!("Config file: {}", config_path.display());

    if let Some(port) = port_override {
        settings.port = port;
    }
    info!("Port: {}", settings.port);
    info!("Dataset file: {}", settings.data_file);
    debug!("Server configuration: {settings:?}");

    RosterServer::new(settings).run().await
}

/// Validate the configuration and dataset without starting the server
fn validate_config(config_path: PathBuf, show_resolved: bool) -> Result<()> {
    load_env_file(&config_path);

    println!("Validating configuration file: {}", config_path.display());

    if !config_path.exists() {
        anyhow::bail!("Config file '{}' does not exist", config_path.display());
    }

    let settings = load_config_file(&config_path)?;
    println!("Configuration is valid.");

    let store = SchoolStore::new(&settings.data_file);
    match store.load() {
        Ok(records) => println!(
            "Dataset '{}' is readable: {} record(s).",
            settings.data_file,
            records.len()
        ),
        Err(e) => println!("Warning: {e}"),
    }

    if show_resolved {
        println!("\nResolved configuration:");
        println!("{}", serde_yaml::to_string(&settings)?);
    }

    Ok(())
}

/// Load a .env file from the config file's directory, if one exists.
fn load_env_file(config_path: &Path) -> bool {
    let Some(config_dir) = config_path.parent() else {
        return false;
    };
    let env_file = config_dir.join(".env");
    if !env_file.exists() {
        return false;
    }
    match dotenvy::from_path(&env_file) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Warning: Failed to load .env file: {e}");
            false
        }
    }
}

/// Initialize the process-wide log backend. The `log` facade stays silent
/// until this runs, which keeps library code and tests free of any logger
/// setup.
fn init_logging(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
