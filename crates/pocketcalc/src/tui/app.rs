//! Terminal application state
//!
//! Owns the one [`CalculatorState`] of the session plus presentation-only
//! state (keypad highlight, quit flag).

use serde::{Deserialize, Serialize};

use crate::core::{ButtonToken, CalculatorState, StateSnapshot};
use crate::driver::CalculatorDriver;
use crate::keypad::Keypad;

use super::input::KeyAction;

/// Front-end options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Highlight the most recently pressed button
    pub highlight_keys: bool,
    /// Capture mouse clicks on keypad buttons
    pub mouse: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            highlight_keys: true,
            mouse: true,
        }
    }
}

impl TuiConfig {
    /// Set keypad highlighting
    #[must_use]
    pub const fn with_highlight_keys(mut self, highlight_keys: bool) -> Self {
        self.highlight_keys = highlight_keys;
        self
    }

    /// Set mouse capture
    #[must_use]
    pub const fn with_mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }
}

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    state: CalculatorState,
    keypad: Keypad,
    config: TuiConfig,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates an app with default options
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TuiConfig::default())
    }

    /// Creates an app with the given options
    #[must_use]
    pub fn with_config(config: TuiConfig) -> Self {
        Self {
            state: CalculatorState::new(),
            keypad: Keypad::new(),
            config,
            should_quit: false,
        }
    }

    /// Calculator state (read-only)
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Keypad with its highlight state
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Front-end options
    #[must_use]
    pub fn config(&self) -> TuiConfig {
        self.config
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Forwards a button press to the calculator
    pub fn press(&mut self, token: ButtonToken) {
        self.state.handle_press(token);
        if self.config.highlight_keys {
            self.keypad.highlight(token);
        }
    }

    /// Applies an input action
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(token) => self.press(token),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }
}

impl CalculatorDriver for CalculatorApp {
    fn press(&mut self, token: ButtonToken) {
        CalculatorApp::press(self, token);
    }

    fn display(&self) -> String {
        self.state.current_display().to_string()
    }

    fn snapshot(&self) -> StateSnapshot {
        self.state.snapshot()
    }
}
