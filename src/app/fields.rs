//! Declarative page table
//!
//! One entry per setting, in page order. The table drives all three
//! concerns at once: initial rendering (`init`), version gating
//! (`min_version`), and update dispatch (`update`). Preset buttons live
//! in [`super::presets`] and are interleaved by the controller.

use crate::runtime::{Request, RuntimeConfig};

use super::controls::{ControlId, ControlValue};

/// How a field turns its committed control value into an update request
#[derive(Clone, Copy)]
pub enum UpdateFn {
    /// The committed text travels as the message value
    Text(fn(String) -> Request),
    /// The checkbox state travels as the message value
    Toggle(fn(bool) -> Request),
    /// A plain action button with a fixed message
    Fire(fn() -> Request),
}

/// One field of the page
pub struct FieldSpec {
    pub id: ControlId,
    pub label_key: &'static str,
    /// Minimum capability version; the control renders disabled below it
    pub min_version: Option<u32>,
    /// Initial control value from the config snapshot
    pub init: fn(&RuntimeConfig) -> ControlValue,
    /// Update message for a committed edit; `None` means no edit ever
    /// produces a message (display rows, the token field, the submit
    /// button whose message is built from the token text)
    pub update: Option<UpdateFn>,
}

/// The page, in display order
pub static PAGE: &[FieldSpec] = &[
    FieldSpec {
        id: ControlId::Version,
        label_key: "version",
        min_version: None,
        // The controller overwrites this with the number or the
        // localized legacy placeholder
        init: |_| ControlValue::Display(String::new()),
        update: None,
    },
    FieldSpec {
        id: ControlId::Reload,
        label_key: "reload",
        min_version: Some(10),
        init: |_| ControlValue::Button,
        update: Some(UpdateFn::Fire(|| Request::Reload)),
    },
    FieldSpec {
        id: ControlId::Clear,
        label_key: "clear",
        min_version: Some(12),
        init: |_| ControlValue::Button,
        update: Some(UpdateFn::Fire(|| Request::Clear)),
    },
    FieldSpec {
        id: ControlId::ProxyState,
        label_key: "proxyState",
        min_version: Some(22),
        init: |config| ControlValue::Select {
            value: config.proxy_state.clone(),
            options: config.proxy_states.clone(),
        },
        update: Some(UpdateFn::Text(Request::SetProxyState)),
    },
    FieldSpec {
        id: ControlId::DebuggingEnabled,
        label_key: "debuggingEnabled",
        min_version: None,
        init: |config| ControlValue::Checkbox(config.debugging_enabled),
        update: Some(UpdateFn::Toggle(Request::SetDebuggingEnabled)),
    },
    FieldSpec {
        id: ControlId::OnboardingShown,
        label_key: "onboardingShown",
        min_version: None,
        init: |config| ControlValue::Checkbox(config.onboarding_shown),
        // Display-only: the page never sends an update for this flag
        update: None,
    },
    FieldSpec {
        id: ControlId::ProxyUrl,
        label_key: "proxyURL",
        min_version: Some(10),
        init: |config| ControlValue::Text(config.proxy_url.clone()),
        update: Some(UpdateFn::Text(Request::SetProxyUrl)),
    },
    FieldSpec {
        id: ControlId::ProxyMode,
        label_key: "proxyMode",
        min_version: Some(15),
        init: |config| ControlValue::Text(config.proxy_mode.clone()),
        update: Some(UpdateFn::Text(Request::SetProxyMode)),
    },
    FieldSpec {
        id: ControlId::SpService,
        label_key: "spService",
        min_version: Some(10),
        init: |config| ControlValue::Text(config.sps.clone()),
        update: Some(UpdateFn::Text(Request::SetSpService)),
    },
    FieldSpec {
        id: ControlId::FxaOpenId,
        label_key: "fxaOpenID",
        min_version: Some(10),
        init: |config| ControlValue::Text(config.fxa_open_id.clone()),
        update: Some(UpdateFn::Text(Request::SetFxaOpenId)),
    },
    FieldSpec {
        id: ControlId::ProxyToken,
        label_key: "proxyToken",
        min_version: Some(10),
        // Filled after the separate getProxyToken request
        init: |_| ControlValue::Text(String::new()),
        // Committing an edit only updates the display; the submit button
        // parses and sends
        update: None,
    },
    FieldSpec {
        id: ControlId::ProxySubmit,
        label_key: "proxySubmit",
        min_version: Some(10),
        init: |_| ControlValue::Button,
        update: None,
    },
    FieldSpec {
        id: ControlId::MessageServiceInterval,
        label_key: "messageServiceInterval",
        min_version: Some(22),
        init: |config| {
            ControlValue::Text(
                config
                    .message_service_interval
                    .map(|n| n.to_string())
                    .unwrap_or_default(),
            )
        },
        update: Some(UpdateFn::Text(Request::SetMessageServiceInterval)),
    },
];

/// Look up a field's table entry
pub fn spec(id: ControlId) -> Option<&'static FieldSpec> {
    PAGE.iter().find(|field| field.id == id)
}

/// Minimum capability version for a control, if gated
pub fn min_version(id: ControlId) -> Option<u32> {
    spec(id).and_then(|field| field.min_version)
}

/// Whether a control is editable at the given capability version.
/// Controls without a threshold (and all preset buttons) are always enabled.
pub fn enabled_at(id: ControlId, version: u32) -> bool {
    match min_version(id) {
        Some(min) => version >= min,
        None => true,
    }
}
