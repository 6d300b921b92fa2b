//! TerminalRenderer: draws the session state to a real terminal.
//!
//! Frames are whole-board redraws queued into an internal buffer and
//! flushed once per tick. At 10 ticks per second on a board this size
//! there is nothing to gain from diffing.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor},
    terminal, QueueableCommand,
};

use crate::core::StateView;
use crate::game_view::compose_board;
use crate::types::Rgb;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw one frame: generation/score header, border, board cells
    /// (two terminal columns per cell to square up the aspect ratio).
    pub fn draw(&mut self, view: &StateView<'_>) -> Result<()> {
        let image = compose_board(view);
        let inner = image.width() as usize * 2;

        self.buf.clear();
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.buf.queue(ResetColor)?;
        self.buf.queue(Print(format!(
            " GEN {:<6} SCORE {:<8}",
            view.generation, view.score
        )))?;

        self.buf.queue(cursor::MoveTo(0, 1))?;
        self.buf.queue(Print(format!("+{}+", "-".repeat(inner))))?;

        for y in 0..image.height() {
            self.buf.queue(cursor::MoveTo(0, y as u16 + 2))?;
            self.buf.queue(Print("|"))?;
            for x in 0..image.width() {
                match image.get(x, y) {
                    Some(color) => {
                        self.buf.queue(SetBackgroundColor(to_term_color(color)))?;
                        self.buf.queue(Print("  "))?;
                        self.buf.queue(ResetColor)?;
                    }
                    None => {
                        self.buf.queue(Print(" ."))?;
                    }
                }
            }
            self.buf.queue(Print("|"))?;
        }

        self.buf
            .queue(cursor::MoveTo(0, image.height() as u16 + 2))?;
        self.buf.queue(Print(format!("+{}+", "-".repeat(inner))))?;

        self.flush_buf()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_term_color(color: Rgb) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}
