//! Page controller: initialization sequencing
//!
//! Fetch the config snapshot, build every control from the page table,
//! then fetch the token. The two awaits are deliberately sequential; the
//! ordering is inherited behavior, not a protocol necessity.

use crate::common::prelude::*;
use crate::i18n::Catalog;
use crate::runtime::{Request, RuntimeClient, RuntimeConfig};

use super::controls::{Control, ControlId, ControlValue};
use super::fields::{self, PAGE};
use super::presets::PRESETS;
use super::state::AppState;
use super::token;

/// Build the full control list from a config snapshot.
///
/// Labels come from the catalog, values from the page table's accessors,
/// and the enabled flag from the version gate — evaluated once, here; the
/// page never re-fetches the config.
pub fn build_controls(config: &RuntimeConfig, catalog: &Catalog) -> Vec<Control> {
    let version = config.effective_version();
    let mut controls = Vec::new();

    for field in PAGE {
        let value = if field.id == ControlId::Version {
            ControlValue::Display(version_text(config, catalog))
        } else {
            (field.init)(config)
        };
        controls.push(Control {
            id: field.id,
            label: catalog.get(field.label_key),
            value,
            enabled: fields::enabled_at(field.id, version),
        });

        // Interleave each field's preset buttons right after it
        for preset in PRESETS.iter().filter(|p| p.target == field.id) {
            controls.push(Control {
                id: preset.id,
                label: catalog.get(preset.label_key),
                value: ControlValue::Button,
                enabled: true,
            });
        }
    }

    controls
}

fn version_text(config: &RuntimeConfig, catalog: &Catalog) -> String {
    match config.version {
        Some(v) if v > 0 => v.to_string(),
        // Absent and explicit 0 both render the legacy placeholder
        _ => catalog.get("olderThanV10"),
    }
}

/// Initialize the panel state against a connected runtime.
///
/// Strictly sequential: config is fetched and every config-derived
/// control is built before the token request goes out.
pub async fn init(client: &RuntimeClient, catalog: &Catalog) -> Result<AppState> {
    let config_reply = client.request(Request::GetCurrentConfig).await?;
    let config = RuntimeConfig::from_reply(config_reply);
    info!(
        "runtime config loaded, capability version {}",
        config.effective_version()
    );

    let mut state = AppState::new(build_controls(&config, catalog));

    let token_reply = client.request(Request::GetProxyToken).await?;
    if let Some(control) = state.control_mut(ControlId::ProxyToken) {
        control.value = ControlValue::Text(token::render_token(&token_reply));
    }

    Ok(state)
}
