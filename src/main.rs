use std::io;
use std::sync::atomic::AtomicBool;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::args::Args;
use crate::config::Config;
use crate::render::ansi::Blocks;
use crate::sim::Simulation;

mod args;
mod config;
mod display;
mod duration;
mod gol;
mod render;
mod sim;
mod term;

fn init_tracing() {
    // stdout carries the frames, so diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    if !args.rest.is_empty() {
        debug!(ignored = ?args.rest, "extra arguments ignored");
    }
    let config = Config::detect(&args, &term::Crossterm);
    info!(
        width = config.width,
        height = config.height,
        interval = ?config.interval,
        "starting"
    );

    let mut board = config.board();
    gol::seed::start(&mut board);
    let mut sim = Simulation::new(board, Blocks);

    // nothing raises the flag; the process runs until it is killed
    let stop = AtomicBool::new(false);
    sim::run(&config, &mut sim, io::stdout(), &stop, None)?;
    Ok(())
}
