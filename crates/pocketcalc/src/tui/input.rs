//! Maps terminal key and mouse events to button tokens

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::core::ButtonToken;
use crate::keypad::Keypad;

use super::render::Layout;

/// What the app should do with an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Deliver a button press to the calculator
    Press(ButtonToken),
    /// Leave the application
    Quit,
    /// Ignored input
    None,
}

/// Input handler that maps events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q' | 'Q') => KeyAction::Quit,
            KeyCode::Char('c') => KeyAction::Press(ButtonToken::Clear),
            KeyCode::Char(c) => {
                ButtonToken::try_from(c).map_or(KeyAction::None, KeyAction::Press)
            }
            KeyCode::Enter => KeyAction::Press(ButtonToken::Equals),
            KeyCode::Esc | KeyCode::Delete => KeyAction::Press(ButtonToken::Clear),
            _ => KeyAction::None,
        }
    }

    /// Maps a left click on a keypad button to a press
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent, keypad: &Keypad, layout: &Layout) -> KeyAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => keypad
                .hit_test(layout.keypad, event.column, event.row)
                .map_or(KeyAction::None, KeyAction::Press),
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;
    use crate::keypad::Area;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_digit_keys() {
        let handler = InputHandler::new();
        for d in 0..=9u8 {
            let c = char::from_digit(u32::from(d), 10).unwrap();
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Press(ButtonToken::Digit(d))
            );
        }
    }

    #[test]
    fn test_operator_keys() {
        let handler = InputHandler::new();
        for op in Operation::ALL {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(op.symbol()))),
                KeyAction::Press(ButtonToken::Operator(op))
            );
        }
    }

    #[test]
    fn test_equals_and_enter() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('='))),
            KeyAction::Press(ButtonToken::Equals)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            KeyAction::Press(ButtonToken::Equals)
        );
    }

    #[test]
    fn test_clear_keys() {
        let handler = InputHandler::new();
        for code in [
            KeyCode::Char('C'),
            KeyCode::Char('c'),
            KeyCode::Esc,
            KeyCode::Delete,
        ] {
            assert_eq!(
                handler.handle_key(key_event(code)),
                KeyAction::Press(ButtonToken::Clear)
            );
        }
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let handler = InputHandler::new();
        for code in [
            KeyCode::Char('%'),
            KeyCode::Char('x'),
            KeyCode::Backspace,
            KeyCode::Left,
            KeyCode::Tab,
        ] {
            assert_eq!(handler.handle_key(key_event(code)), KeyAction::None);
        }
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('l'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let handler = InputHandler::new();
        let mut event = key_event(KeyCode::Char('5'));
        event.kind = KeyEventKind::Release;
        assert_eq!(handler.handle_key(event), KeyAction::None);
    }

    #[test]
    fn test_mouse_click_on_button() {
        let handler = InputHandler::new();
        let keypad = Keypad::new();
        let layout = Layout::compute(Area::new(0, 0, 40, 20)).unwrap();
        let area = layout.keypad;
        let action = handler.handle_mouse(click(area.x, area.y), &keypad, &layout);
        assert_eq!(action, KeyAction::Press(ButtonToken::Digit(1)));
    }

    #[test]
    fn test_mouse_click_outside_keypad() {
        let handler = InputHandler::new();
        let keypad = Keypad::new();
        let layout = Layout::compute(Area::new(0, 0, 40, 20)).unwrap();
        let action = handler.handle_mouse(click(0, 0), &keypad, &layout);
        assert_eq!(action, KeyAction::None);
    }

    #[test]
    fn test_mouse_non_left_click_ignored() {
        let handler = InputHandler::new();
        let keypad = Keypad::new();
        let layout = Layout::compute(Area::new(0, 0, 40, 20)).unwrap();
        let mut event = click(layout.keypad.x, layout.keypad.y);
        event.kind = MouseEventKind::Down(MouseButton::Right);
        assert_eq!(handler.handle_mouse(event, &keypad, &layout), KeyAction::None);
    }
}
