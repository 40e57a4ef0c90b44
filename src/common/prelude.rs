//! Prelude for common imports used throughout the panel

pub use crate::common::error::{Error, Result, ResultExt};
pub use tracing::{debug, error, info, trace, warn};
