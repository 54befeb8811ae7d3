//! TerminalRenderer: draws generations to a real terminal.
//!
//! Raw mode plus the alternate screen, entered once per run; every frame
//! overwrites the previous one in place, so there is no per-frame clear and
//! no flicker. Callers must pair `enter` with `exit` (and should attempt
//! `exit` even when the run fails).

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::grid::Grid;
use crate::term::view::GridView;

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw one generation with a status line underneath, then flush once.
    pub fn draw(&mut self, view: &GridView, grid: &Grid, iterations: usize) -> Result<()> {
        let mut current_color: Option<Color> = None;

        for (y, row) in grid.iter_rows().enumerate() {
            self.stdout.queue(cursor::MoveTo(0, y as u16))?;
            for &cell in row {
                let (ch, color) = view.style(cell);
                if current_color != Some(color) {
                    self.stdout.queue(SetForegroundColor(color))?;
                    current_color = Some(color);
                }
                self.stdout.queue(Print(ch))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::MoveTo(0, grid.rows() as u16))?;
        self.stdout.queue(Print(format!(
            "iteration: {iterations}  population: {}  (q to quit)",
            grid.population()
        )))?;
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
