//! Application layer - state management and orchestration

pub mod controller;
pub mod controls;
pub mod fields;
pub mod handler;
pub mod message;
pub mod presets;
pub mod state;
pub mod token;

// Re-export handler types for event loop integration
pub use handler::{update, UpdateResult};
pub use state::AppState;

use std::path::PathBuf;

use crate::common::prelude::*;
use crate::config;
use crate::i18n::Catalog;
use crate::runtime::{Request, RuntimeClient};
use crate::tui;

/// Main application entry point
///
/// Connects to the runtime control socket and runs the panel TUI until
/// the user quits.
pub async fn run(socket: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since TUI owns stdout)
    crate::common::logging::init()?;

    let panel_config = config::load_config(config_path.as_deref());
    let socket = socket.unwrap_or_else(|| panel_config.connection.socket.clone());

    // Static labels resolve before anything touches the wire
    let catalog = match &panel_config.ui.locale_file {
        Some(path) => Catalog::load(path),
        None => Catalog::embedded(),
    };

    let client = RuntimeClient::connect(&socket).await?;

    let result = tui::run(&client, &catalog).await;

    if let Err(ref e) = result {
        error!("Panel error: {:?}", e);
    }

    info!("Proxy Panel exiting");
    result
}

/// Headless mode: fetch the config and token, print one JSON document
/// to stdout, and exit. Uses the same sequential request order as the
/// interactive panel.
pub async fn dump(socket: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    crate::common::logging::init()?;

    let panel_config = config::load_config(config_path.as_deref());
    let socket = socket.unwrap_or_else(|| panel_config.connection.socket.clone());

    let client = RuntimeClient::connect(&socket).await?;

    let config = client.request(Request::GetCurrentConfig).await?;
    let token = client.request(Request::GetProxyToken).await?;

    let document = serde_json::json!({
        "fetchedAt": chrono::Local::now().to_rfc3339(),
        "config": config,
        "proxyToken": token,
    });
    println!("{}", serde_json::to_string_pretty(&document)?);

    Ok(())
}
