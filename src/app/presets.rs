//! Endpoint preset buttons
//!
//! Each URL-like field carries a staging and a production literal.
//! Activating a preset overwrites the target field's displayed value and
//! sends the field's update message even when the version gate has
//! disabled the target field itself. The original page behaves this way
//! and the bypass is kept on purpose (see DESIGN.md).

use crate::runtime::Request;

use super::controls::ControlId;

pub const DEBUGGING_PROXY_URL: &str = "https://proxy-staging.cloudflareclient.com:8001";
pub const PRODUCTION_PROXY_URL: &str = "https://firefox.factor11.cloudflareclient.com:2486";

pub const DEBUGGING_FXA_OPENID: &str =
    "https://accounts.stage.mozaws.net/.well-known/openid-configuration";
pub const PRODUCTION_FXA_OPENID: &str =
    "https://accounts.firefox.com/.well-known/openid-configuration";

pub const DEBUGGING_SPS: &str = "https://stage-browser.guardian.nonprod.cloudops.mozgcp.net/";
pub const PRODUCTION_SPS: &str = "https://fpn.firefox.com/";

/// One preset button
pub struct Preset {
    pub id: ControlId,
    pub label_key: &'static str,
    /// The text field this preset overwrites
    pub target: ControlId,
    pub value: &'static str,
    pub update: fn(String) -> Request,
}

/// All six preset buttons, in page order
pub static PRESETS: &[Preset] = &[
    Preset {
        id: ControlId::DebuggingProxyUrl,
        label_key: "debuggingProxyURL",
        target: ControlId::ProxyUrl,
        value: DEBUGGING_PROXY_URL,
        update: Request::SetProxyUrl,
    },
    Preset {
        id: ControlId::ProductionProxyUrl,
        label_key: "productionProxyURL",
        target: ControlId::ProxyUrl,
        value: PRODUCTION_PROXY_URL,
        update: Request::SetProxyUrl,
    },
    Preset {
        id: ControlId::DebuggingSpService,
        label_key: "debuggingSPService",
        target: ControlId::SpService,
        value: DEBUGGING_SPS,
        update: Request::SetSpService,
    },
    Preset {
        id: ControlId::ProductionSpService,
        label_key: "productionSPService",
        target: ControlId::SpService,
        value: PRODUCTION_SPS,
        update: Request::SetSpService,
    },
    Preset {
        id: ControlId::DebuggingFxaOpenId,
        label_key: "debuggingFxaOpenID",
        target: ControlId::FxaOpenId,
        value: DEBUGGING_FXA_OPENID,
        update: Request::SetFxaOpenId,
    },
    Preset {
        id: ControlId::ProductionFxaOpenId,
        label_key: "productionFxaOpenID",
        target: ControlId::FxaOpenId,
        value: PRODUCTION_FXA_OPENID,
        update: Request::SetFxaOpenId,
    },
];

/// Look up a preset by its button id
pub fn preset(id: ControlId) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_url_field_has_two_presets() {
        for target in [
            ControlId::ProxyUrl,
            ControlId::SpService,
            ControlId::FxaOpenId,
        ] {
            let count = PRESETS.iter().filter(|p| p.target == target).count();
            assert_eq!(count, 2, "{:?} needs a staging and a production preset", target);
        }
    }

    #[test]
    fn test_preset_messages_match_their_target() {
        let p = preset(ControlId::ProductionProxyUrl).unwrap();
        let request = (p.update)(p.value.to_string());
        assert_eq!(request, Request::SetProxyUrl(PRODUCTION_PROXY_URL.to_string()));

        let p = preset(ControlId::DebuggingFxaOpenId).unwrap();
        let request = (p.update)(p.value.to_string());
        assert_eq!(request.wire_type(), "setFxaOpenID");
    }

    #[test]
    fn test_unknown_id_has_no_preset() {
        assert!(preset(ControlId::ProxyUrl).is_none());
        assert!(preset(ControlId::Reload).is_none());
    }
}
