//! Terminal UI shell
//!
//! Renders the control list and feeds key events through the handler.
//! The core (controller/handler) never touches the terminal, so this
//! layer stays thin.

pub mod event;
pub mod runner;
pub mod terminal;
pub mod test_utils;
pub mod widgets;

pub use runner::run;
