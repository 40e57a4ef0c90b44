//! Key handling (TEA update function)
//!
//! `update` consumes one message, mutates the state, and returns the
//! requests to put on the wire. The caller owns dispatch, so every edit
//! path is testable without a connection. Edits are optimistic: the
//! control shows the new value immediately, whether or not the runtime
//! accepts it.

use crossterm::event::{KeyCode, KeyEvent};

use crate::runtime::Request;

use super::controls::{ControlId, ControlValue};
use super::fields::{self, UpdateFn};
use super::message::Message;
use super::presets::{self, Preset};
use super::state::{AppState, UiMode};
use super::token;

/// Result of one update step
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Fire-and-forget requests produced by this step
    pub requests: Vec<Request>,
}

/// Process one message
pub fn update(state: &mut AppState, msg: Message) -> UpdateResult {
    let mut result = UpdateResult::default();
    match msg {
        Message::Key(key) => handle_key(state, key, &mut result),
        Message::Tick => {}
        Message::Quit => state.should_quit = true,
    }
    result
}

fn handle_key(state: &mut AppState, key: KeyEvent, out: &mut UpdateResult) {
    match state.ui_mode {
        // The alert blocks everything until dismissed
        UiMode::Alert => state.dismiss_alert(),
        UiMode::Editing => handle_editing_key(state, key, out),
        UiMode::Normal => handle_normal_key(state, key, out),
    }
}

fn handle_normal_key(state: &mut AppState, key: KeyEvent, out: &mut UpdateResult) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => state.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => state.select_next(),
        KeyCode::Enter | KeyCode::Char(' ') => activate_selected(state, out),
        _ => {}
    }
}

fn handle_editing_key(state: &mut AppState, key: KeyEvent, out: &mut UpdateResult) {
    match key.code {
        KeyCode::Esc => {
            state.edit_buffer.clear();
            state.ui_mode = UiMode::Normal;
        }
        KeyCode::Enter => commit_edit(state, out),
        KeyCode::Backspace => {
            state.edit_buffer.pop();
        }
        KeyCode::Char(c) => state.edit_buffer.push(c),
        _ => {}
    }
}

fn activate_selected(state: &mut AppState, out: &mut UpdateResult) {
    let Some(control) = state.selected_control().cloned() else {
        return;
    };

    // Preset buttons bypass the target field's gate by design
    if let Some(preset) = presets::preset(control.id) {
        apply_preset(state, preset, out);
        return;
    }

    if !control.enabled {
        return;
    }

    match control.value {
        ControlValue::Text(current) => {
            state.edit_buffer = current;
            state.ui_mode = UiMode::Editing;
        }
        ControlValue::Checkbox(checked) => toggle_checkbox(state, control.id, !checked, out),
        ControlValue::Select { value, options } => cycle_select(state, control.id, value, options, out),
        ControlValue::Button => activate_button(state, control.id, out),
        ControlValue::Display(_) => {}
    }
}

fn toggle_checkbox(state: &mut AppState, id: ControlId, checked: bool, out: &mut UpdateResult) {
    if let Some(control) = state.control_mut(id) {
        control.value = ControlValue::Checkbox(checked);
    }
    // OnboardingShown has no update entry: the toggle is local only
    if let Some(UpdateFn::Toggle(build)) = fields::spec(id).and_then(|f| f.update) {
        out.requests.push(build(checked));
    }
}

fn cycle_select(
    state: &mut AppState,
    id: ControlId,
    current: String,
    options: Vec<String>,
    out: &mut UpdateResult,
) {
    if options.is_empty() {
        return;
    }
    let next_index = match options.iter().position(|o| *o == current) {
        Some(i) => (i + 1) % options.len(),
        None => 0,
    };
    let next = options[next_index].clone();
    if let Some(control) = state.control_mut(id) {
        control.value = ControlValue::Select {
            value: next.clone(),
            options,
        };
    }
    if let Some(UpdateFn::Text(build)) = fields::spec(id).and_then(|f| f.update) {
        out.requests.push(build(next));
    }
}

fn activate_button(state: &mut AppState, id: ControlId, out: &mut UpdateResult) {
    if id == ControlId::ProxySubmit {
        submit_token(state, out);
        return;
    }
    if let Some(UpdateFn::Fire(build)) = fields::spec(id).and_then(|f| f.update) {
        out.requests.push(build());
    }
}

fn apply_preset(state: &mut AppState, preset: &Preset, out: &mut UpdateResult) {
    // Overwrite the target's displayed value even when the gate has
    // disabled the target field itself
    if let Some(target) = state.control_mut(preset.target) {
        if let ControlValue::Text(text) = &mut target.value {
            *text = preset.value.to_string();
        }
    }
    out.requests.push((preset.update)(preset.value.to_string()));
}

fn submit_token(state: &mut AppState, out: &mut UpdateResult) {
    let text = state
        .control(ControlId::ProxyToken)
        .map(|c| c.value.text().to_string())
        .unwrap_or_default();
    match token::parse_token(&text) {
        Ok(value) => out.requests.push(Request::SetProxyToken(value)),
        Err(e) => state.open_alert(format!("Syntax invalid: {}", e)),
    }
}

fn commit_edit(state: &mut AppState, out: &mut UpdateResult) {
    let buffer = std::mem::take(&mut state.edit_buffer);
    state.ui_mode = UiMode::Normal;

    let Some(id) = state.selected_control().map(|c| c.id) else {
        return;
    };
    if let Some(control) = state.control_mut(id) {
        control.value = ControlValue::Text(buffer.clone());
    }
    if let Some(UpdateFn::Text(build)) = fields::spec(id).and_then(|f| f.update) {
        out.requests.push(build(buffer));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::controller::build_controls;
    use crate::i18n::Catalog;
    use crate::runtime::RuntimeConfig;
    use serde_json::json;

    fn state_with_version(version: u32) -> AppState {
        let config = RuntimeConfig {
            version: Some(version),
            proxy_states: vec!["US".into(), "UK".into()],
            proxy_state: "US".into(),
            proxy_url: "https://gateway/".into(),
            ..RuntimeConfig::default()
        };
        AppState::new(build_controls(&config, &Catalog::embedded()))
    }

    fn select(state: &mut AppState, id: ControlId) {
        state.selected = state.controls.iter().position(|c| c.id == id).unwrap();
    }

    fn press(state: &mut AppState, code: KeyCode) -> UpdateResult {
        update(state, Message::Key(KeyEvent::from(code)))
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut state = state_with_version(22);
        press(&mut state, KeyCode::Char('q'));
        assert!(state.should_quit);
    }

    #[test]
    fn test_text_edit_commits_optimistically_and_sends() {
        let mut state = state_with_version(22);
        select(&mut state, ControlId::ProxyUrl);

        press(&mut state, KeyCode::Enter);
        assert_eq!(state.ui_mode, UiMode::Editing);
        assert_eq!(state.edit_buffer, "https://gateway/");

        // Rewrite the value entirely
        for _ in 0.."https://gateway/".len() {
            press(&mut state, KeyCode::Backspace);
        }
        type_text(&mut state, "https://other/");
        let result = press(&mut state, KeyCode::Enter);

        assert_eq!(state.ui_mode, UiMode::Normal);
        assert_eq!(
            state.control(ControlId::ProxyUrl).unwrap().value.text(),
            "https://other/"
        );
        assert_eq!(
            result.requests,
            vec![Request::SetProxyUrl("https://other/".into())]
        );
    }

    #[test]
    fn test_escape_cancels_edit_without_sending() {
        let mut state = state_with_version(22);
        select(&mut state, ControlId::ProxyUrl);
        press(&mut state, KeyCode::Enter);
        type_text(&mut state, "zzz");
        let result = press(&mut state, KeyCode::Esc);

        assert_eq!(state.ui_mode, UiMode::Normal);
        assert!(result.requests.is_empty());
        assert_eq!(
            state.control(ControlId::ProxyUrl).unwrap().value.text(),
            "https://gateway/"
        );
    }

    #[test]
    fn test_disabled_field_ignores_activation() {
        let mut state = state_with_version(9);
        select(&mut state, ControlId::ProxyUrl);
        let result = press(&mut state, KeyCode::Enter);
        assert_eq!(state.ui_mode, UiMode::Normal);
        assert!(result.requests.is_empty());
    }

    #[test]
    fn test_checkbox_toggle_sends_bool() {
        let mut state = state_with_version(0);
        select(&mut state, ControlId::DebuggingEnabled);
        let result = press(&mut state, KeyCode::Char(' '));

        assert!(state.control(ControlId::DebuggingEnabled).unwrap().value.checked());
        assert_eq!(result.requests, vec![Request::SetDebuggingEnabled(true)]);

        let result = press(&mut state, KeyCode::Char(' '));
        assert_eq!(result.requests, vec![Request::SetDebuggingEnabled(false)]);
    }

    #[test]
    fn test_onboarding_checkbox_is_local_only() {
        let mut state = state_with_version(22);
        select(&mut state, ControlId::OnboardingShown);
        let result = press(&mut state, KeyCode::Enter);
        assert!(result.requests.is_empty());
    }

    #[test]
    fn test_select_cycles_and_sends() {
        let mut state = state_with_version(22);
        select(&mut state, ControlId::ProxyState);
        let result = press(&mut state, KeyCode::Enter);

        assert_eq!(
            state.control(ControlId::ProxyState).unwrap().value.text(),
            "UK"
        );
        assert_eq!(result.requests, vec![Request::SetProxyState("UK".into())]);

        let result = press(&mut state, KeyCode::Enter);
        assert_eq!(result.requests, vec![Request::SetProxyState("US".into())]);
    }

    #[test]
    fn test_empty_select_does_nothing() {
        let config = RuntimeConfig {
            version: Some(22),
            ..RuntimeConfig::default()
        };
        let mut state = AppState::new(build_controls(&config, &Catalog::embedded()));
        select(&mut state, ControlId::ProxyState);
        let result = press(&mut state, KeyCode::Enter);
        assert!(result.requests.is_empty());
    }

    #[test]
    fn test_reload_and_clear_buttons() {
        let mut state = state_with_version(22);
        select(&mut state, ControlId::Reload);
        assert_eq!(press(&mut state, KeyCode::Enter).requests, vec![Request::Reload]);

        select(&mut state, ControlId::Clear);
        assert_eq!(press(&mut state, KeyCode::Enter).requests, vec![Request::Clear]);
    }

    #[test]
    fn test_gated_buttons_stay_silent_below_threshold() {
        let mut state = state_with_version(11);
        select(&mut state, ControlId::Clear);
        assert!(press(&mut state, KeyCode::Enter).requests.is_empty());

        let mut state = state_with_version(9);
        select(&mut state, ControlId::Reload);
        assert!(press(&mut state, KeyCode::Enter).requests.is_empty());
    }

    #[test]
    fn test_preset_bypasses_disabled_field() {
        // Version 0: proxyURL is gate-disabled, the preset still fires
        let mut state = state_with_version(0);
        assert!(!state.control(ControlId::ProxyUrl).unwrap().enabled);

        select(&mut state, ControlId::ProductionProxyUrl);
        let result = press(&mut state, KeyCode::Enter);

        assert_eq!(
            state.control(ControlId::ProxyUrl).unwrap().value.text(),
            presets::PRODUCTION_PROXY_URL
        );
        assert_eq!(
            result.requests,
            vec![Request::SetProxyUrl(presets::PRODUCTION_PROXY_URL.into())]
        );
    }

    #[test]
    fn test_token_submit_valid_json() {
        let mut state = state_with_version(22);
        let token = json!({"credential": "abc"});
        state.control_mut(ControlId::ProxyToken).unwrap().value =
            ControlValue::Text(token.to_string());

        select(&mut state, ControlId::ProxySubmit);
        let result = press(&mut state, KeyCode::Enter);
        assert_eq!(result.requests, vec![Request::SetProxyToken(token)]);
        assert_eq!(state.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_token_submit_invalid_json_alerts_and_sends_nothing() {
        let mut state = state_with_version(22);
        state.control_mut(ControlId::ProxyToken).unwrap().value =
            ControlValue::Text("not json".into());

        select(&mut state, ControlId::ProxySubmit);
        let result = press(&mut state, KeyCode::Enter);

        assert!(result.requests.is_empty());
        assert_eq!(state.ui_mode, UiMode::Alert);
        assert!(state.alert_message.starts_with("Syntax invalid:"));

        // The alert blocks input until dismissed
        let result = press(&mut state, KeyCode::Char('q'));
        assert!(result.requests.is_empty());
        assert!(!state.should_quit);
        assert_eq!(state.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_interval_edit_travels_as_text() {
        let mut state = state_with_version(22);
        select(&mut state, ControlId::MessageServiceInterval);
        press(&mut state, KeyCode::Enter);
        type_text(&mut state, "1500");
        let result = press(&mut state, KeyCode::Enter);
        assert_eq!(
            result.requests,
            vec![Request::SetMessageServiceInterval("1500".into())]
        );
    }

    #[test]
    fn test_token_text_commit_updates_display_only() {
        let mut state = state_with_version(22);
        select(&mut state, ControlId::ProxyToken);
        press(&mut state, KeyCode::Enter);
        type_text(&mut state, "42");
        let result = press(&mut state, KeyCode::Enter);

        // Only the submit button sends; the edit is display-local
        assert!(result.requests.is_empty());
        assert_eq!(
            state.control(ControlId::ProxyToken).unwrap().value.text(),
            "42"
        );
    }
}
