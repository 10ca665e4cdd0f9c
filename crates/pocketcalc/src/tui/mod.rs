//! Terminal front end
//!
//! Renders the display and keypad into a [`TextGrid`] and forwards key
//! presses and mouse clicks to the calculator as button tokens.

mod app;
mod grid;
mod input;
mod render;
mod terminal;

pub use app::{CalculatorApp, TuiConfig};
pub use grid::TextGrid;
pub use input::{InputHandler, KeyAction};
pub use render::{render, Layout};
pub use terminal::run;
