//! Frame layout and rendering
//!
//! ```text
//! ┌─pocketcalc─────────────┐
//! │3.0                     │
//! └────────────────────────┘
//! ┌─Keypad─────────────────┐
//! │ [1]   [2]   [3]   [/]  │
//! │                        │
//! │ ...                    │
//! │          [=]           │
//! └────────────────────────┘
//!  q quit · Esc clear
//! ```

use crate::keypad::{Area, Keypad};

use super::app::CalculatorApp;
use super::grid::TextGrid;

/// Help line under the keypad
pub const HELP_LINE: &str = "q quit · Esc clear";

/// Message shown when the terminal cannot fit the calculator
pub const TOO_SMALL: &str = "Terminal too small";

/// Screen regions used by the renderer and by mouse hit testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Outer box of the display
    pub display_box: Area,
    /// Single text line inside the display box
    pub display: Area,
    /// Outer box of the keypad
    pub keypad_box: Area,
    /// Inner keypad area, split into buttons
    pub keypad: Area,
    /// Help text line
    pub help: Area,
}

impl Layout {
    /// Outer width of both boxes
    pub const WIDTH: u16 = 26;
    /// Rows per keypad row
    pub const BUTTON_HEIGHT: u16 = 2;
    /// Total height: display box, keypad box, help line
    pub const HEIGHT: u16 = 3 + (5 * Self::BUTTON_HEIGHT + 2) + 1;

    /// Places the calculator in the top-left corner of `screen`, or returns
    /// `None` if it does not fit
    #[must_use]
    pub fn compute(screen: Area) -> Option<Self> {
        if screen.width < Self::WIDTH || screen.height < Self::HEIGHT {
            return None;
        }
        let x = screen.x;
        let y = screen.y;
        let keypad_height = 5 * Self::BUTTON_HEIGHT;

        let display_box = Area::new(x, y, Self::WIDTH, 3);
        let keypad_box = Area::new(x, y + 3, Self::WIDTH, keypad_height + 2);
        Some(Self {
            display_box,
            display: Area::new(x + 1, y + 1, Self::WIDTH - 2, 1),
            keypad_box,
            keypad: Area::new(x + 1, y + 4, Self::WIDTH - 2, keypad_height),
            help: Area::new(x + 1, keypad_box.y + keypad_box.height, Self::WIDTH - 2, 1),
        })
    }
}

/// Renders the app into `grid`, returning the layout used (or `None` when
/// the grid is too small and only a notice was drawn)
pub fn render(app: &CalculatorApp, grid: &mut TextGrid) -> Option<Layout> {
    grid.clear();
    let Some(layout) = Layout::compute(grid.area()) else {
        grid.write_str(0, 0, TOO_SMALL);
        return None;
    };

    grid.draw_box(layout.display_box, "pocketcalc");
    grid.write_str(
        layout.display.x,
        layout.display.y,
        &fit_display(app.state().current_display(), layout.display.width),
    );

    grid.draw_box(layout.keypad_box, "Keypad");
    render_keypad(app.keypad(), layout.keypad, grid);

    grid.write_str(layout.help.x, layout.help.y, HELP_LINE);
    Some(layout)
}

fn render_keypad(keypad: &Keypad, area: Area, grid: &mut TextGrid) {
    for ((row, col), button) in keypad.buttons_with_positions() {
        let Some(cell) = keypad.button_area(area, row, col) else {
            continue;
        };
        let label = if button.pressed {
            format!(">{}<", button.label())
        } else {
            format!("[{}]", button.label())
        };
        let label_x = cell.x + cell.width.saturating_sub(label.chars().count() as u16) / 2;
        grid.write_str(label_x, cell.y, &label);
    }
}

/// Keeps the rightmost `width` characters so the newest digits stay visible
fn fit_display(text: &str, width: u16) -> String {
    let len = text.chars().count();
    let width = width as usize;
    if len <= width {
        return text.to_string();
    }
    text.chars().skip(len - width).collect()
}
