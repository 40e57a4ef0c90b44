//! Proxy Panel - settings and diagnostics TUI for a proxy-client runtime
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use proxy_panel::common::prelude::*;

/// Settings and diagnostics panel for a proxy-client runtime
#[derive(Parser, Debug)]
#[command(name = "proxy-panel")]
#[command(about = "Settings and diagnostics panel for a proxy-client runtime", long_about = None)]
struct Args {
    /// Path to the runtime control socket (overrides the config file)
    #[arg(value_name = "SOCKET")]
    socket: Option<PathBuf>,

    /// Path to an alternate panel config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Fetch the runtime config and token, print JSON, and exit (no TUI)
    #[arg(long)]
    dump: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.dump {
        proxy_panel::dump(args.socket, args.config).await
    } else {
        proxy_panel::run(args.socket, args.config).await
    }
}
