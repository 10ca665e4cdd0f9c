//! Interactive crossterm event loop

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute, queue,
    style::Print,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

use super::app::{CalculatorApp, TuiConfig};
use super::grid::TextGrid;
use super::input::{InputHandler, KeyAction};
use super::render::{render, Layout};

/// Runs the calculator in the terminal until the user quits.
///
/// Returns the text on the display at exit.
pub fn run(config: TuiConfig) -> io::Result<String> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    if config.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }

    let mut app = CalculatorApp::with_config(config);
    let result = event_loop(&mut app, &mut stdout);

    if config.mouse {
        execute!(stdout, DisableMouseCapture)?;
    }
    execute!(stdout, Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;

    result.map(|()| app.state().current_display().to_string())
}

fn event_loop<W: Write>(app: &mut CalculatorApp, out: &mut W) -> io::Result<()> {
    let input = InputHandler::new();
    let (width, height) = terminal::size()?;
    let mut grid = TextGrid::new(width, height);
    let mut layout = draw(app, &mut grid, out)?;

    while !app.should_quit() {
        let action = match event::read()? {
            Event::Key(key) => input.handle_key(key),
            Event::Mouse(mouse) => layout
                .as_ref()
                .map_or(KeyAction::None, |l| input.handle_mouse(mouse, app.keypad(), l)),
            Event::Resize(width, height) => {
                tracing::debug!(width, height, "terminal resized");
                grid = TextGrid::new(width, height);
                KeyAction::None
            }
            _ => KeyAction::None,
        };
        app.handle_action(action);
        layout = draw(app, &mut grid, out)?;
    }
    Ok(())
}

fn draw<W: Write>(
    app: &CalculatorApp,
    grid: &mut TextGrid,
    out: &mut W,
) -> io::Result<Option<Layout>> {
    let layout = render(app, grid);
    queue!(out, Clear(ClearType::All))?;
    for (row, line) in (0u16..).zip(grid.to_lines()) {
        queue!(out, MoveTo(0, row), Print(line))?;
    }
    out.flush()?;
    Ok(layout)
}
