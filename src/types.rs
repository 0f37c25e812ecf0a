//! Shared identifiers and piece model used across the system.

use std::fmt;

/// Unique identifier for a generated piece.
pub type PieceId = u64;

/// Tetromino type carried by a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// The full alphabet in a fixed order; the generator samples from it.
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// One-letter symbol used in all terminal output.
    pub fn symbol(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single upcoming piece. Never mutated after creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    /// Shape type shown to the player.
    pub kind: PieceKind,
    /// Creation-order identifier, unique within a run.
    pub id: PieceId,
}

impl Piece {
    /// Construct a piece with the provided kind and id.
    pub fn new(kind: PieceKind, id: PieceId) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_displays_as_bracketed_kind_and_id() {
        assert_eq!(Piece::new(PieceKind::T, 3).to_string(), "[T 3]");
        assert_eq!(Piece::new(PieceKind::I, 0).to_string(), "[I 0]");
    }

    #[test]
    fn alphabet_symbols_are_distinct() {
        let symbols: Vec<char> = PieceKind::ALL.iter().map(|kind| kind.symbol()).collect();
        assert_eq!(symbols, vec!['I', 'O', 'T', 'L']);
    }
}
