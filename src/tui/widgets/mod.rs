//! Panel widgets

pub mod alert;
pub mod panel;

use ratatui::Frame;

use crate::app::state::{AppState, UiMode};

/// Render the full frame
pub fn view(frame: &mut Frame, state: &AppState) {
    frame.render_widget(panel::Panel::new(state), frame.area());

    if state.ui_mode == UiMode::Alert {
        frame.render_widget(alert::AlertDialog::new(&state.alert_message), frame.area());
    }
}
