//! Plain character grid the UI renders into before it reaches the terminal.
//!
//! Keeping the frame as text makes rendering testable line by line.

use crate::keypad::Area;

/// Row-major grid of characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextGrid {
    cells: Vec<char>,
    width: u16,
    height: u16,
}

impl TextGrid {
    /// Creates a grid filled with spaces
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            cells: vec![' '; size],
            width,
            height,
        }
    }

    /// Grid width
    #[inline]
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Grid height
    #[inline]
    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The whole grid as an area anchored at the origin
    #[must_use]
    pub fn area(&self) -> Area {
        Area::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Character at (x, y)
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Sets the character at (x, y); out-of-range writes are dropped
    pub fn set(&mut self, x: u16, y: u16, ch: char) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = ch;
        }
    }

    /// Fills with spaces
    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    /// Writes a string from (x, y), truncated at the right edge
    pub fn write_str(&mut self, x: u16, y: u16, s: &str) {
        for (offset, ch) in s.chars().enumerate() {
            let Some(col) = x.checked_add(offset as u16) else {
                break;
            };
            if col >= self.width {
                break;
            }
            self.set(col, y, ch);
        }
    }

    /// Draws a single-line box around `area` with an optional title in the
    /// top border
    pub fn draw_box(&mut self, area: Area, title: &str) {
        if area.width < 2 || area.height < 2 {
            return;
        }
        let right = area.x + area.width - 1;
        let bottom = area.y + area.height - 1;

        for col in area.x + 1..right {
            self.set(col, area.y, '─');
            self.set(col, bottom, '─');
        }
        for row in area.y + 1..bottom {
            self.set(area.x, row, '│');
            self.set(right, row, '│');
        }
        self.set(area.x, area.y, '┌');
        self.set(right, area.y, '┐');
        self.set(area.x, bottom, '└');
        self.set(right, bottom, '┘');

        if !title.is_empty() && area.width > 4 {
            let max = (area.width - 4) as usize;
            let title: String = title.chars().take(max).collect();
            self.write_str(area.x + 2, area.y, &title);
        }
    }

    /// The grid as lines with trailing spaces trimmed
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                let start = (y as usize) * (self.width as usize);
                let end = start + (self.width as usize);
                let line: String = self.cells[start..end].iter().collect();
                line.trim_end().to_string()
            })
            .collect()
    }
}
