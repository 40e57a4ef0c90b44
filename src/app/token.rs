//! Token field serialization
//!
//! The proxy token is an arbitrary JSON value, opaque to the panel; it is
//! shown and edited through its JSON text serialization.

use serde_json::Value;

use crate::common::error::Result;

/// JSON text shown in the token field
pub fn render_token(token: &Value) -> String {
    token.to_string()
}

/// Parse the token field's current text.
///
/// The error's description is shown verbatim in the alert; nothing is
/// sent on failure.
pub fn parse_token(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}
