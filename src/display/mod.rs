use std::{
    io::Write,
    sync::mpsc::{self, Receiver, SyncSender},
    time::Duration,
};

use anyhow::{Context, Result};
use scopeguard::guard;
use tracing::{debug, trace, warn};

pub mod ticker;

use ticker::Ticker;

/// Frames the simulation may run ahead of the display.
pub const CAPACITY: usize = 10;

/// One rendered generation on its way to the terminal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    generation: u64,
    text: Box<str>,
}

impl Snapshot {
    pub fn new(generation: u64, text: String) -> Self {
        Snapshot {
            generation,
            text: text.into_boxed_str(),
        }
    }
    pub fn generation(&self) -> u64 {
        self.generation
    }
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The snapshot queue. Sends block while `CAPACITY` frames are pending.
pub fn bounded() -> (SyncSender<Snapshot>, Receiver<Snapshot>) {
    mpsc::sync_channel(CAPACITY)
}

/// Consumer side: writes one queued frame per tick, oldest first.
pub struct DisplayPump<W: Write> {
    rx: Receiver<Snapshot>,
    out: W,
    ticker: Ticker,
}

impl<W: Write> DisplayPump<W> {
    pub fn new(rx: Receiver<Snapshot>, out: W, interval: Duration) -> Self {
        DisplayPump {
            rx,
            out,
            ticker: Ticker::new(interval),
        }
    }

    /// Runs until every sender is gone and the queue is drained. Returns the
    /// number of frames written.
    pub fn run(self) -> Result<u64> {
        let DisplayPump { rx, out, mut ticker } = self;
        let mut out = guard(out, |mut out| {
            if let Err(err) = out.flush() {
                warn!(?err, "failed to flush display");
            }
        });
        debug!(interval = ?ticker.period(), "display pump started");

        let mut shown = 0u64;
        loop {
            let due = ticker.wait();
            let snap = match rx.recv() {
                Ok(snap) => snap,
                Err(_) => break,
            };
            trace!(generation = snap.generation(), lag = ?due.elapsed(), "frame");
            out.write_all(snap.text().as_bytes())
                .with_context(|| format!("failed to write generation {}", snap.generation()))?;
            out.flush().context("failed to flush frame")?;
            shown += 1;
        }
        debug!(shown, "display pump stopped");
        Ok(shown)
    }
}
