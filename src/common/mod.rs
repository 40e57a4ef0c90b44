//! Shared infrastructure: errors, logging, prelude

pub mod error;
pub mod logging;
pub mod prelude;

pub use error::{Error, Result};
