//! Message types for the panel (TEA pattern)

use crossterm::event::KeyEvent;

/// All possible messages in the panel event loop
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(KeyEvent),

    /// Tick event for periodic redraw
    Tick,

    /// Request to quit the panel
    Quit,
}
