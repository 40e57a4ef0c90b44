//! Settings panel widget - the full-screen control list

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    widgets::{Block, Borders, Widget},
};

use crate::app::controls::{Control, ControlValue};
use crate::app::state::{AppState, UiMode};

const LABEL_WIDTH: u16 = 32;

/// Full-screen panel listing every control in page order
pub struct Panel<'a> {
    state: &'a AppState,
}

impl<'a> Panel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn row_styles(&self, control: &Control, selected: bool) -> (Style, Style) {
        if selected && self.state.ui_mode != UiMode::Alert {
            let style = Style::default().fg(Color::Black).bg(Color::Cyan);
            (style, style.add_modifier(Modifier::BOLD))
        } else if !control.enabled {
            let style = Style::default().fg(Color::DarkGray);
            (style, style)
        } else {
            (
                Style::default().fg(Color::Gray),
                Style::default().fg(Color::White),
            )
        }
    }

    fn value_text(&self, control: &Control, selected: bool) -> String {
        let editing = selected && self.state.ui_mode == UiMode::Editing;
        match &control.value {
            ControlValue::Display(text) => text.clone(),
            ControlValue::Text(text) => {
                if editing {
                    format!("{}▏", self.state.edit_buffer)
                } else {
                    text.clone()
                }
            }
            ControlValue::Checkbox(true) => "[x]".to_string(),
            ControlValue::Checkbox(false) => "[ ]".to_string(),
            ControlValue::Select { value, options } => options
                .iter()
                .map(|option| {
                    if option == value {
                        format!("[{}]", option)
                    } else {
                        option.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join("  "),
            ControlValue::Button => String::new(),
        }
    }

    fn footer_text(&self) -> &'static str {
        match self.state.ui_mode {
            UiMode::Normal => " [↑↓] Select   [Enter] Edit/Toggle/Apply   [q] Quit",
            UiMode::Editing => " [Enter] Commit   [Esc] Cancel",
            UiMode::Alert => " [any key] Dismiss",
        }
    }
}

impl Widget for Panel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Proxy Panel ")
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);
        let rows_area = chunks[0];

        for (i, control) in self.state.controls.iter().enumerate() {
            let y = rows_area.y + i as u16;
            if y >= rows_area.bottom() {
                break;
            }

            let selected = i == self.state.selected && control.is_interactive();
            let (label_style, value_style) = self.row_styles(control, selected);

            // Buttons render their label bracketed; other rows get a
            // label column and a value column
            if matches!(control.value, ControlValue::Button) {
                let text = format!("  [ {} ]", control.label);
                buf.set_stringn(rows_area.x, y, &text, rows_area.width as usize, value_style);
            } else {
                let label = format!("  {}", control.label);
                buf.set_stringn(rows_area.x, y, &label, LABEL_WIDTH as usize, label_style);

                let value_x = rows_area.x + LABEL_WIDTH;
                let value_width = rows_area.width.saturating_sub(LABEL_WIDTH) as usize;
                let value = self.value_text(control, selected);
                buf.set_stringn(value_x, y, &value, value_width, value_style);
            }
        }

        buf.set_stringn(
            chunks[1].x,
            chunks[1].y,
            self.footer_text(),
            chunks[1].width as usize,
            Style::default().fg(Color::DarkGray),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::controller::build_controls;
    use crate::app::controls::ControlId;
    use crate::i18n::Catalog;
    use crate::runtime::RuntimeConfig;
    use crate::tui::test_utils::TestTerminal;

    fn state_for(config: RuntimeConfig) -> AppState {
        AppState::new(build_controls(&config, &Catalog::embedded()))
    }

    #[test]
    fn test_panel_renders_labels_and_version() {
        let catalog = Catalog::embedded();
        let state = state_for(RuntimeConfig {
            version: Some(22),
            ..RuntimeConfig::default()
        });

        let mut term = TestTerminal::new();
        term.render_widget(Panel::new(&state), term.area());

        assert!(term.buffer_contains(&catalog.get("proxyURL")));
        assert!(term.buffer_contains(&catalog.get("proxyToken")));
        assert!(term.buffer_contains("22"));
    }

    #[test]
    fn test_panel_renders_legacy_placeholder() {
        let catalog = Catalog::embedded();
        let state = state_for(RuntimeConfig::default());

        let mut term = TestTerminal::new();
        term.render_widget(Panel::new(&state), term.area());

        assert!(term.buffer_contains(&catalog.get("olderThanV10")));
    }

    #[test]
    fn test_panel_renders_selector_options() {
        let state = state_for(RuntimeConfig {
            version: Some(22),
            proxy_states: vec!["US".into(), "UK".into()],
            proxy_state: "UK".into(),
            ..RuntimeConfig::default()
        });

        let mut term = TestTerminal::new();
        term.render_widget(Panel::new(&state), term.area());

        assert!(term.buffer_contains("US  [UK]"));
    }

    #[test]
    fn test_panel_renders_checkbox_state() {
        let state = state_for(RuntimeConfig {
            version: Some(22),
            debugging_enabled: true,
            ..RuntimeConfig::default()
        });

        let mut term = TestTerminal::new();
        term.render_widget(Panel::new(&state), term.area());

        assert!(term.buffer_contains("[x]"));
        // onboardingShown defaults to unchecked
        assert!(term.buffer_contains("[ ]"));
    }

    #[test]
    fn test_panel_renders_edit_buffer_with_cursor() {
        let mut state = state_for(RuntimeConfig {
            version: Some(22),
            ..RuntimeConfig::default()
        });
        state.selected = state
            .controls
            .iter()
            .position(|c| c.id == ControlId::ProxyUrl)
            .unwrap();
        state.ui_mode = UiMode::Editing;
        state.edit_buffer = "https://typing".into();

        let mut term = TestTerminal::new();
        term.render_widget(Panel::new(&state), term.area());

        assert!(term.buffer_contains("https://typing▏"));
    }

    #[test]
    fn test_panel_fits_compact_terminal() {
        let state = state_for(RuntimeConfig::default());
        let mut term = TestTerminal::with_size(40, 10);
        term.render_widget(Panel::new(&state), term.area());
        assert!(!term.content().is_empty());
    }
}
