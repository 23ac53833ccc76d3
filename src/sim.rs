use std::{
    io::Write,
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::SyncSender,
    },
    thread,
};

use anyhow::{anyhow, ensure, Result};
use tracing::{debug, trace};

use crate::{
    config::Config,
    display::{self, DisplayPump, Snapshot},
    gol::{rule, Board},
    render::Renderer,
};

/// Producer side: owns the board and turns each generation into a snapshot.
pub struct Simulation<R> {
    board: Board,
    renderer: R,
    generation: u64,
}

impl<R: Renderer> Simulation<R> {
    pub fn new(board: Board, renderer: R) -> Self {
        Simulation {
            board,
            renderer,
            generation: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.generation, self.renderer.render_board(&self.board))
    }

    pub fn advance(&mut self) {
        rule::advance(&mut self.board);
        self.generation += 1;
        trace!(generation = self.generation, alive = self.board.alive(), "advanced");
    }

    /// Render, enqueue, advance; until `stop` is raised or `limit` snapshots
    /// have been sent. Blocks while the queue is full. Returns the number sent.
    pub fn produce(
        &mut self,
        tx: &SyncSender<Snapshot>,
        stop: &AtomicBool,
        limit: Option<u64>,
    ) -> Result<u64> {
        let mut sent = 0u64;
        while !stop.load(Ordering::Relaxed) && limit.map_or(true, |l| sent < l) {
            tx.send(self.snapshot())
                .map_err(|_| anyhow!("display closed at generation {}", self.generation))?;
            sent += 1;
            self.advance();
        }
        Ok(sent)
    }
}

/// Runs the simulation against a display thread writing to `out`. Returns
/// once the producer stops and every queued frame has been written.
pub fn run<R, W>(
    config: &Config,
    sim: &mut Simulation<R>,
    out: W,
    stop: &AtomicBool,
    limit: Option<u64>,
) -> Result<u64>
where
    R: Renderer,
    W: Write + Send,
{
    let (tx, rx) = display::bounded();
    let interval = config.interval;
    thread::scope(|s| {
        let pump = s.spawn(move || DisplayPump::new(rx, out, interval).run());
        let produced = sim.produce(&tx, stop, limit);
        drop(tx);
        let shown = pump
            .join()
            .map_err(|_| anyhow!("display thread panicked"))??;
        let produced = produced?;
        ensure!(
            produced == shown,
            "produced {} frames but displayed {}",
            produced,
            shown
        );
        debug!(
            shown,
            generation = sim.generation(),
            alive = sim.board().alive(),
            "simulation finished"
        );
        Ok(shown)
    })
}
