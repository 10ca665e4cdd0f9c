//! Keypad model: the button grid the presentation layer draws
//!
//! ```text
//! [ 1 ] [ 2 ] [ 3 ] [ / ]
//! [ 4 ] [ 5 ] [ 6 ] [ * ]
//! [ 7 ] [ 8 ] [ 9 ] [ - ]
//! [ C ] [ 0 ] [ . ] [ + ]
//! [         =         ]
//! ```
//!
//! The last row holds a single `=` button spanning the full width.

use serde::{Deserialize, Serialize};

use crate::core::{ButtonToken, Operation};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypadButton {
    /// Token sent when the button is pressed
    pub token: ButtonToken,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates an unpressed button for a token
    #[must_use]
    pub const fn new(token: ButtonToken) -> Self {
        Self {
            token,
            pressed: false,
        }
    }

    /// The character printed on the button
    #[must_use]
    pub fn label(&self) -> char {
        self.token.label()
    }

    /// Stable identifier, e.g. `btn-7`, `btn-divide`, `btn-equals`
    #[must_use]
    pub fn id(&self) -> String {
        match self.token {
            ButtonToken::Digit(d) => format!("btn-{d}"),
            ButtonToken::Decimal => "btn-decimal".to_string(),
            ButtonToken::Operator(op) => format!("btn-{}", op_name(op)),
            ButtonToken::Equals => "btn-equals".to_string(),
            ButtonToken::Clear => "btn-clear".to_string(),
        }
    }

    /// Sets the highlight state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

const fn op_name(op: Operation) -> &'static str {
    match op {
        Operation::Add => "add",
        Operation::Subtract => "subtract",
        Operation::Multiply => "multiply",
        Operation::Divide => "divide",
    }
}

/// Screen rectangle in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Area {
    /// Left column
    pub x: u16,
    /// Top row
    pub y: u16,
    /// Width in cells
    pub width: u16,
    /// Height in cells
    pub height: u16,
}

impl Area {
    /// Creates an area
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns true if the cell lies inside the area
    #[must_use]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u32) < self.x as u32 + self.width as u32
            && (y as u32) < self.y as u32 + self.height as u32
    }
}

/// The calculator keypad
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    rows: Vec<Vec<KeypadButton>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Number of columns in the full rows
    pub const COLUMNS: usize = 4;

    /// Creates the standard keypad layout
    #[must_use]
    pub fn new() -> Self {
        use ButtonToken::{Clear, Decimal, Digit, Equals, Operator};

        let layout = vec![
            vec![Digit(1), Digit(2), Digit(3), Operator(Operation::Divide)],
            vec![Digit(4), Digit(5), Digit(6), Operator(Operation::Multiply)],
            vec![Digit(7), Digit(8), Digit(9), Operator(Operation::Subtract)],
            vec![Clear, Digit(0), Decimal, Operator(Operation::Add)],
            vec![Equals],
        ];

        let rows = layout
            .into_iter()
            .map(|row| row.into_iter().map(KeypadButton::new).collect())
            .collect();

        Self { rows }
    }

    /// Number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Buttons of one row
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[KeypadButton]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Iterates all buttons in reading order
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.rows.iter().flatten()
    }

    /// Iterates buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, button)| ((r, c), button))
        })
    }

    /// Finds the position of the button that sends `token`
    #[must_use]
    pub fn find_token(&self, token: ButtonToken) -> Option<(usize, usize)> {
        self.buttons_with_positions()
            .find(|(_, b)| b.token == token)
            .map(|(pos, _)| pos)
    }

    /// Finds a button by its label character
    #[must_use]
    pub fn find_button_by_label(&self, label: char) -> Option<&KeypadButton> {
        self.buttons().find(|b| b.label() == label)
    }

    /// Finds a button by its id
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons().find(|b| b.id() == id)
    }

    /// Highlights the button for `token`, releasing all others
    pub fn highlight(&mut self, token: ButtonToken) {
        for button in self.rows.iter_mut().flatten() {
            button.set_pressed(button.token == token);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for button in self.rows.iter_mut().flatten() {
            button.set_pressed(false);
        }
    }

    /// The currently highlighted button, if any
    #[must_use]
    pub fn pressed_button(&self) -> Option<&KeypadButton> {
        self.buttons().find(|b| b.pressed)
    }

    /// Cell rectangle of the button at (row, col) when the keypad is drawn
    /// inside `area`. Rows share the height evenly; each row shares the
    /// width evenly among its own buttons.
    #[must_use]
    pub fn button_area(&self, area: Area, row: usize, col: usize) -> Option<Area> {
        let buttons = self.rows.get(row)?;
        if col >= buttons.len() {
            return None;
        }
        let row_height = area.height / self.rows.len() as u16;
        let button_width = area.width / buttons.len() as u16;
        if row_height == 0 || button_width == 0 {
            return None;
        }
        Some(Area::new(
            area.x + col as u16 * button_width,
            area.y + row as u16 * row_height,
            button_width,
            row_height,
        ))
    }

    /// Maps a click at (x, y) to the button drawn there
    #[must_use]
    pub fn hit_test(&self, area: Area, x: u16, y: u16) -> Option<ButtonToken> {
        if !area.contains(x, y) {
            return None;
        }
        self.buttons_with_positions()
            .find(|((row, col), _)| {
                self.button_area(area, *row, *col)
                    .is_some_and(|cell| cell.contains(x, y))
            })
            .map(|(_, button)| button.token)
    }
}
