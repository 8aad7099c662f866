//! Terminal setup and teardown with panic safety.

use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use dropdown::Rect;

/// Text attributes for a run of cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Attrs {
    pub bold: bool,
    pub dim: bool,
    pub reverse: bool,
}

/// A wrapper around stdout that ensures proper cleanup on drop.
pub struct TerminalGuard {
    out: Stdout,
}

impl TerminalGuard {
    /// Initialize the terminal for TUI rendering.
    pub fn new() -> io::Result<Self> {
        // Set up panic hook to restore terminal on panic
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            // Attempt to restore terminal
            let _ = restore_terminal();
            // Call original panic handler
            original_hook(panic_info);
        }));

        // Enable raw mode and alternate screen
        enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, EnableMouseCapture, Hide)?;

        Ok(Self { out })
    }

    /// Current screen area.
    pub fn area(&self) -> io::Result<Rect> {
        let (width, height) = crossterm::terminal::size()?;
        Ok(Rect::from_size(width, height))
    }

    /// Start a new frame.
    pub fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))
    }

    /// Queue `text` at a position with the given attributes.
    pub fn print(&mut self, x: u16, y: u16, text: &str, attrs: Attrs) -> io::Result<()> {
        queue!(self.out, MoveTo(x, y))?;
        if attrs.bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if attrs.dim {
            queue!(self.out, SetAttribute(Attribute::Dim))?;
        }
        if attrs.reverse {
            queue!(self.out, SetAttribute(Attribute::Reverse))?;
        }
        queue!(self.out, Print(text), SetAttribute(Attribute::Reset))
    }

    /// Flush the queued frame to the terminal.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

/// Restore the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), Show, LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}
