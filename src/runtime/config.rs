//! The runtime's configuration object
//!
//! The panel fetches one snapshot at startup and never re-syncs; edits
//! update the local mirror optimistically. `proxyToken` is not part of
//! this object, it travels through its own `getProxyToken` request.

use serde::Deserialize;
use serde_json::Value;

use crate::common::prelude::*;

/// Snapshot of the runtime-owned configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Capability version; absent means the runtime predates versioning
    pub version: Option<u32>,

    #[serde(rename = "proxyStates")]
    pub proxy_states: Vec<String>,

    #[serde(rename = "proxyState")]
    pub proxy_state: String,

    #[serde(rename = "debuggingEnabled")]
    pub debugging_enabled: bool,

    #[serde(rename = "onboardingShown")]
    pub onboarding_shown: bool,

    #[serde(rename = "proxyURL")]
    pub proxy_url: String,

    #[serde(rename = "proxyMode")]
    pub proxy_mode: String,

    /// Support/consent service endpoint
    pub sps: String,

    #[serde(rename = "fxaOpenID")]
    pub fxa_open_id: String,

    #[serde(rename = "messageServiceInterval")]
    pub message_service_interval: Option<u64>,
}

impl RuntimeConfig {
    /// Version used for gating decisions. Absent reads as 0.
    pub fn effective_version(&self) -> u32 {
        self.version.unwrap_or(0)
    }

    /// True when the runtime predates capability versioning.
    /// An explicit 0 and an absent version read the same.
    pub fn version_is_legacy(&self) -> bool {
        self.effective_version() == 0
    }

    /// Decode a `getCurrentConfig` reply.
    ///
    /// A null result reads as defaults; so does a malformed one, with a
    /// warning in the log.
    pub fn from_reply(result: Value) -> Self {
        if result.is_null() {
            return Self::default();
        }
        match serde_json::from_value(result) {
            Ok(config) => config,
            Err(e) => {
                warn!("malformed config reply, using defaults: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_config_parses_wire_names() {
        let config = RuntimeConfig::from_reply(json!({
            "version": 22,
            "proxyStates": ["US", "UK"],
            "proxyState": "UK",
            "debuggingEnabled": true,
            "onboardingShown": true,
            "proxyURL": "https://gateway/",
            "proxyMode": "socks",
            "sps": "https://sps/",
            "fxaOpenID": "https://fxa/",
            "messageServiceInterval": 1500
        }));

        assert_eq!(config.version, Some(22));
        assert_eq!(config.proxy_states, vec!["US", "UK"]);
        assert_eq!(config.proxy_state, "UK");
        assert!(config.debugging_enabled);
        assert!(config.onboarding_shown);
        assert_eq!(config.proxy_url, "https://gateway/");
        assert_eq!(config.proxy_mode, "socks");
        assert_eq!(config.sps, "https://sps/");
        assert_eq!(config.fxa_open_id, "https://fxa/");
        assert_eq!(config.message_service_interval, Some(1500));
    }

    #[test]
    fn test_null_reply_reads_as_defaults() {
        let config = RuntimeConfig::from_reply(Value::Null);
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.effective_version(), 0);
        assert!(config.proxy_states.is_empty());
    }

    #[test]
    fn test_malformed_reply_reads_as_defaults() {
        let config = RuntimeConfig::from_reply(json!({"version": "twenty-two"}));
        assert_eq!(config, RuntimeConfig::default());
    }

    #[test]
    fn test_absent_and_zero_version_are_both_legacy() {
        let absent = RuntimeConfig::from_reply(json!({"proxyURL": "https://x/"}));
        assert_eq!(absent.version, None);
        assert!(absent.version_is_legacy());

        let zero = RuntimeConfig::from_reply(json!({"version": 0}));
        assert_eq!(zero.version, Some(0));
        assert!(zero.version_is_legacy());
        assert_eq!(zero.effective_version(), 0);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let config = RuntimeConfig::from_reply(json!({
            "version": 12,
            "futureField": {"nested": true}
        }));
        assert_eq!(config.version, Some(12));
    }
}
