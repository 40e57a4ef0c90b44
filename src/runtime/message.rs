//! Request building and inbound frame parsing
//!
//! Every outbound message the panel can send is a [`Request`] variant; the
//! wire JSON is assembled in exactly one place, [`Request::build`].

use serde::Deserialize;
use serde_json::{json, Value};

/// All outbound request types
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    GetCurrentConfig,
    GetProxyToken,
    Reload,
    Clear,
    SetProxyState(String),
    SetDebuggingEnabled(bool),
    SetProxyUrl(String),
    SetProxyMode(String),
    SetSpService(String),
    SetFxaOpenId(String),
    SetProxyToken(Value),
    SetMessageServiceInterval(String),
}

impl Request {
    /// The `type` field of the wire frame
    pub fn wire_type(&self) -> &'static str {
        match self {
            Request::GetCurrentConfig => "getCurrentConfig",
            Request::GetProxyToken => "getProxyToken",
            Request::Reload => "reload",
            Request::Clear => "clear",
            Request::SetProxyState(_) => "setProxyState",
            Request::SetDebuggingEnabled(_) => "setDebuggingEnabled",
            Request::SetProxyUrl(_) => "setProxyURL",
            Request::SetProxyMode(_) => "setProxyMode",
            Request::SetSpService(_) => "setSPService",
            Request::SetFxaOpenId(_) => "setFxaOpenID",
            Request::SetProxyToken(_) => "setProxyToken",
            Request::SetMessageServiceInterval(_) => "setMessageServiceInterval",
        }
    }

    /// The `value` field of the wire frame, if this request carries one
    pub fn value(&self) -> Option<Value> {
        match self {
            Request::GetCurrentConfig
            | Request::GetProxyToken
            | Request::Reload
            | Request::Clear => None,
            Request::SetProxyState(s)
            | Request::SetProxyUrl(s)
            | Request::SetProxyMode(s)
            | Request::SetSpService(s)
            | Request::SetFxaOpenId(s)
            | Request::SetMessageServiceInterval(s) => Some(json!(s)),
            Request::SetDebuggingEnabled(b) => Some(json!(b)),
            Request::SetProxyToken(v) => Some(v.clone()),
        }
    }

    /// True for the two requests whose reply the panel awaits
    pub fn expects_reply(&self) -> bool {
        matches!(self, Request::GetCurrentConfig | Request::GetProxyToken)
    }

    /// Build the wire frame: one JSON object per line
    pub fn build(&self, id: u64) -> String {
        let mut frame = json!({ "id": id, "type": self.wire_type() });
        if let Some(value) = self.value() {
            frame["value"] = value;
        }
        frame.to_string()
    }
}

/// A raw inbound frame, before routing
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawMessage {
    /// A reply to a request we sent
    Reply {
        id: u64,
        result: Option<Value>,
        error: Option<Value>,
    },
    /// An unsolicited runtime event; the panel drops these
    Event {
        event: String,
        #[serde(default)]
        params: Value,
    },
}

impl RawMessage {
    /// Parse a line into a RawMessage
    pub fn parse(line: &str) -> Option<Self> {
        serde_json::from_str(line).ok()
    }
}
