//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use crate::app::message::Message;
use crate::common::prelude::*;

/// Poll for terminal events with a 50ms timeout (20 FPS tick)
pub fn poll() -> Result<Option<Message>> {
    if event::poll(Duration::from_millis(50))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(Message::Key(key))),
            _ => Ok(None),
        }
    } else {
        // Generate tick on timeout for redraws
        Ok(Some(Message::Tick))
    }
}
