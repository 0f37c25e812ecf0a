mod config;
mod error;
mod game;
mod generator;
mod logging;
mod menu;
mod piece_queue;
mod types;

use std::io;

use anyhow::Context;
use log::debug;

use crate::config::GameConfig;
use crate::game::Session;
use crate::generator::PieceGenerator;

fn main() -> anyhow::Result<()> {
    logging::init();

    let config = GameConfig::default();
    let generator = PieceGenerator::from_clock();
    let mut session = Session::new(&config, generator).context("invalid game configuration")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    session
        .run(stdin.lock(), stdout.lock())
        .context("terminal i/o failed")?;
    debug!("{} pieces left in queue at exit", session.queue().len());
    Ok(())
}
