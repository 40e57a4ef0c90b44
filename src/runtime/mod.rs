//! Client side of the runtime message protocol
//!
//! The background runtime owns the authoritative configuration; the panel
//! only talks to it through line-delimited JSON frames over a local socket.

pub mod config;
pub mod connection;
pub mod message;
pub mod transport;

pub use config::RuntimeConfig;
pub use connection::RuntimeClient;
pub use message::{RawMessage, Request};
pub use transport::{Reply, ReplyRouter};
