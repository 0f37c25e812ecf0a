//! Interactive session: pre-fills the queue and runs the text menu loop.

use std::io::{self, BufRead, Write};

use log::{debug, info};
use rand::Rng;

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::generator::PieceGenerator;
use crate::menu::MenuChoice;
use crate::piece_queue::PieceQueue;

/// Owns the queue and the generator for the lifetime of one game.
pub struct Session<R: Rng> {
    queue: PieceQueue,
    generator: PieceGenerator<R>,
}

impl<R: Rng> Session<R> {
    /// Validate the config and fill a fresh queue to capacity.
    pub fn new(config: &GameConfig, generator: PieceGenerator<R>) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut session = Self {
            queue: PieceQueue::new(config.capacity),
            generator,
        };
        while !session.queue.is_full() {
            let piece = session.generator.generate();
            if session.queue.enqueue(piece).is_err() {
                break;
            }
        }
        Ok(session)
    }

    /// Read-only view of the piece queue.
    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    /// Run the menu loop until `0` or end of input.
    pub fn run<I: BufRead, W: Write>(&mut self, mut input: I, mut out: W) -> io::Result<()> {
        info!("session started with capacity {}", self.queue.capacity());
        writeln!(
            out,
            "Initializing the game with {} pieces...",
            self.queue.capacity()
        )?;

        let mut buf = Vec::new();
        loop {
            self.render_queue(&mut out)?;
            render_menu(&mut out)?;
            write!(out, "Choose your action: ")?;
            out.flush()?;

            // Raw bytes: a line that is not UTF-8 is still one consumed, invalid entry.
            buf.clear();
            let read = input.read_until(b'\n', &mut buf)?;
            let line = String::from_utf8_lossy(&buf);
            let choice = if read == 0 {
                // Closed input behaves like choosing `0`.
                MenuChoice::Quit
            } else {
                MenuChoice::parse(&line)
            };

            match choice {
                MenuChoice::Play => self.play(&mut out)?,
                MenuChoice::Insert => self.insert(&mut out)?,
                MenuChoice::Quit => {
                    writeln!(out, "\nLeaving Tetris Stack. See you next time!")?;
                    break;
                }
                MenuChoice::Invalid => {
                    info!("invalid menu input: {:?}", line.trim_end());
                    writeln!(out, "\n>> Invalid option! Try again.")?;
                }
            }
        }
        out.flush()?;
        info!(
            "session ended after {} pieces generated",
            self.generator.issued()
        );
        Ok(())
    }

    fn play<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match self.queue.dequeue() {
            Ok(piece) => {
                debug!("next piece after play: {:?}", self.queue.front());
                writeln!(
                    out,
                    "\n>> Piece '{}' (ID: {}) was played.",
                    piece.kind, piece.id
                )
            }
            Err(_) => writeln!(out, "\n>> The piece queue is empty! Unable to play."),
        }
    }

    fn insert<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        // Check first so a rejected insert does not consume an id.
        if self.queue.is_full() {
            return writeln!(
                out,
                "\n>> The piece queue is full! Play a piece to add another."
            );
        }
        let piece = self.generator.generate();
        match self.queue.enqueue(piece) {
            Ok(()) => writeln!(
                out,
                "\n>> New piece '{}' (ID: {}) inserted at the end of the queue.",
                piece.kind, piece.id
            ),
            Err(_) => writeln!(
                out,
                "\n>> The piece queue is full! Play a piece to add another."
            ),
        }
    }

    fn render_queue<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n\nCurrent state:\n")?;
        writeln!(out, "Piece queue")?;
        if self.queue.is_empty() {
            writeln!(out, "[Queue empty]")
        } else {
            let pieces: Vec<String> = self.queue.snapshot().map(|p| p.to_string()).collect();
            writeln!(out, "{}", pieces.join(" "))
        }
    }
}

fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nAction options:\n")?;
    writeln!(out, "Code\tAction")?;
    writeln!(out, "1\tPlay piece")?;
    writeln!(out, "2\tInsert new piece")?;
    writeln!(out, "0\tQuit")
}
