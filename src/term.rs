use anyhow::{Context, Result};

/// Source of the terminal's size in character cells.
pub trait TerminalSize {
    /// Returns `(columns, lines)`.
    fn size(&self) -> Result<(u16, u16)>;
}

/// Asks the controlling terminal. On unix crossterm tries the window-size
/// ioctl first and falls back to `tput cols` / `tput lines`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Crossterm;

impl TerminalSize for Crossterm {
    fn size(&self) -> Result<(u16, u16)> {
        crossterm::terminal::size().context("failed to query terminal size")
    }
}
