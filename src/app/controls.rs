//! Typed page surface
//!
//! The original page surface is a set of named interactive elements; here
//! each one is a [`Control`] identified by a [`ControlId`], so the
//! controller and handler never touch the terminal.

/// Every named interactive element on the page, in no particular order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    Version,
    Reload,
    Clear,
    ProxyState,
    DebuggingEnabled,
    OnboardingShown,
    ProxyUrl,
    DebuggingProxyUrl,
    ProductionProxyUrl,
    ProxyMode,
    SpService,
    DebuggingSpService,
    ProductionSpService,
    FxaOpenId,
    DebuggingFxaOpenId,
    ProductionFxaOpenId,
    ProxyToken,
    ProxySubmit,
    MessageServiceInterval,
}

/// The displayed value of a control
#[derive(Debug, Clone, PartialEq)]
pub enum ControlValue {
    /// Read-only text row
    Display(String),
    /// Editable text field
    Text(String),
    /// Checked/unchecked control
    Checkbox(bool),
    /// One value out of a list of options
    Select { value: String, options: Vec<String> },
    /// Action button
    Button,
}

impl ControlValue {
    /// The text representation, as it would travel in an update message
    pub fn text(&self) -> &str {
        match self {
            ControlValue::Display(s) | ControlValue::Text(s) => s,
            ControlValue::Select { value, .. } => value,
            ControlValue::Checkbox(_) | ControlValue::Button => "",
        }
    }

    pub fn checked(&self) -> bool {
        matches!(self, ControlValue::Checkbox(true))
    }
}

/// One rendered control: current value plus gate state
#[derive(Debug, Clone)]
pub struct Control {
    pub id: ControlId,
    pub label: String,
    pub value: ControlValue,
    pub enabled: bool,
}

impl Control {
    /// Display rows carry no interaction; selection skips them
    pub fn is_interactive(&self) -> bool {
        !matches!(self.value, ControlValue::Display(_))
    }
}
