//! Logging configuration using tracing
//!
//! The TUI owns stdout, so all logs go to a rolling file.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::common::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/proxy-panel/logs/`
/// Log level is controlled by the `PROXYPANEL_LOG` environment variable.
///
/// # Examples
/// ```bash
/// PROXYPANEL_LOG=debug proxy-panel
/// PROXYPANEL_LOG=trace proxy-panel
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "panel.log");

    // Default to info, allow override via PROXYPANEL_LOG
    let env_filter = EnvFilter::try_from_env("PROXYPANEL_LOG")
        .unwrap_or_else(|_| EnvFilter::new("proxy_panel=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Proxy Panel starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("proxy-panel").join("logs")
}
