use std::time::Duration;

use tracing::{debug, warn};

use crate::{args::Args, duration, gol::Board, term::TerminalSize};

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(200);

/// Everything fixed at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub interval: Duration,
}

impl Config {
    /// Sizes the board to the terminal, two columns per cell. A failed size
    /// query gives a 0x0 board.
    pub fn detect(args: &Args, term: &dyn TerminalSize) -> Self {
        let (cols, lines) = term.size().unwrap_or_else(|err| {
            warn!(?err, "no terminal size, using an empty board");
            (0, 0)
        });
        Config {
            width: cols as u32 / 2,
            height: lines as u32,
            interval: interval(args.duration.as_deref()),
        }
    }

    pub fn board(&self) -> Board {
        Board::new(self.width, self.height)
    }
}

/// Frame interval from the optional argument. Anything unusable, including a
/// zero duration, falls back to `DEFAULT_INTERVAL`.
pub fn interval(arg: Option<&str>) -> Duration {
    let Some(arg) = arg else {
        return DEFAULT_INTERVAL;
    };
    match duration::parse(arg) {
        Ok(d) if !d.is_zero() => d,
        Ok(_) => {
            debug!(arg, "zero interval, using default");
            DEFAULT_INTERVAL
        }
        Err(err) => {
            debug!(%err, "bad interval, using default");
            DEFAULT_INTERVAL
        }
    }
}
