//! Proxy Panel Library
//!
//! A TUI settings and diagnostics panel for a proxy-client runtime. The
//! panel fetches one snapshot of the runtime-owned configuration, maps
//! each setting to a version-gated control, and turns edits into
//! fire-and-forget update messages.

// Module declarations
pub mod app;
pub mod common;
pub mod config;
pub mod i18n;
pub mod runtime;
pub mod tui;

// Re-export main entry points
pub use app::{dump, run};
