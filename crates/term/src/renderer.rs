//! TerminalRenderer: full-screen redraws to a real terminal.
//!
//! Every frame clears the screen and prints the text produced by
//! [`TextView`]. Output is queued into a byte buffer first and written with a
//! single flush.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::core::Snapshot;
use crate::engine::RenderSink;
use crate::view::{TextView, WELCOME};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    view: TextView,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_view(TextView::default())
    }

    pub fn with_view(view: TextView) -> Self {
        Self {
            stdout: io::stdout(),
            view,
            buf: Vec::with_capacity(8 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
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

    /// Show the welcome banner and key help.
    pub fn show_banner(&mut self) -> Result<()> {
        self.draw_lines(&WELCOME)
    }

    /// Clear the screen and print `lines` from the top-left corner.
    pub fn draw_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<()> {
        self.buf.clear();
        encode_full_into(lines, &mut self.buf)?;
        self.flush_buf()
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

impl RenderSink for TerminalRenderer {
    fn render(&mut self, frame: &Snapshot) -> Result<()> {
        let lines = self.view.render_lines(frame);
        self.draw_lines(&lines)
    }
}

/// Encode a full-screen redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
/// Lines are joined with `\r\n` since raw mode disables newline translation.
pub fn encode_full_into<S: AsRef<str>>(lines: &[S], out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    for (i, line) in lines.iter().enumerate() {
        out.queue(Print(line.as_ref()))?;
        if i + 1 < lines.len() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}
