//! Panel state (TEA model)

use super::controls::{Control, ControlId, ControlValue};

/// Input mode of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Navigating and activating controls
    #[default]
    Normal,
    /// Editing the selected text field
    Editing,
    /// Blocking error alert; every other input waits for dismissal
    Alert,
}

/// Full panel state: the control list plus interaction state
#[derive(Debug, Default)]
pub struct AppState {
    pub controls: Vec<Control>,
    pub selected: usize,
    pub ui_mode: UiMode,
    pub edit_buffer: String,
    pub alert_message: String,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(controls: Vec<Control>) -> Self {
        let mut state = Self {
            controls,
            ..Self::default()
        };
        // Land on the first interactive row
        if !state
            .selected_control()
            .map(Control::is_interactive)
            .unwrap_or(false)
        {
            state.select_next();
        }
        state
    }

    pub fn control(&self, id: ControlId) -> Option<&Control> {
        self.controls.iter().find(|c| c.id == id)
    }

    pub fn control_mut(&mut self, id: ControlId) -> Option<&mut Control> {
        self.controls.iter_mut().find(|c| c.id == id)
    }

    pub fn selected_control(&self) -> Option<&Control> {
        self.controls.get(self.selected)
    }

    /// Move selection down, skipping display rows, wrapping at the end
    pub fn select_next(&mut self) {
        self.step_selection(1);
    }

    /// Move selection up, skipping display rows, wrapping at the start
    pub fn select_prev(&mut self) {
        self.step_selection(-1);
    }

    fn step_selection(&mut self, direction: isize) {
        let len = self.controls.len();
        if len == 0 {
            return;
        }
        let mut index = self.selected;
        for _ in 0..len {
            index = (index as isize + direction).rem_euclid(len as isize) as usize;
            if self.controls[index].is_interactive() {
                self.selected = index;
                return;
            }
        }
    }

    pub fn open_alert(&mut self, message: impl Into<String>) {
        self.alert_message = message.into();
        self.ui_mode = UiMode::Alert;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert_message.clear();
        self.ui_mode = UiMode::Normal;
    }
}
