//! Piece model: a variant, a current tile, and an append-only move history.
//!
//! `ChessPiece` owns the only mutable state in the per-piece pipeline. Its
//! position changes exclusively through the move operation, which records
//! every accepted move before returning it.

use crate::match_state::chess_types::PieceKind;
use crate::match_state::match_errors::MatchErrors;
use crate::match_state::move_record::MoveRecord;
use crate::pieces::legal_move_checks::is_legal_move;
use crate::utils::clock::{MatchClock, SystemClock};

#[derive(Debug, Clone)]
pub struct ChessPiece {
    kind: PieceKind,
    position: String,
    moves: Vec<MoveRecord>,
}

impl ChessPiece {
    /// Construct a piece standing on `position` with an empty history.
    ///
    /// The variant's own legality predicate is evaluated from the starting
    /// tile to itself. Every variant accepts a zero delta on a valid tile,
    /// so the check rejects bad notation rather than geometry.
    pub fn new(kind: PieceKind, position: &str) -> Result<Self, MatchErrors> {
        if !is_legal_move(kind, position, position) {
            return Err(MatchErrors::IllegalStartPosition(position.to_owned()));
        }

        Ok(Self {
            kind,
            position: position.to_owned(),
            moves: Vec::new(),
        })
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Current tile notation.
    #[inline]
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Accepted moves of this piece, oldest first.
    #[inline]
    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    /// Full notation: variant prefix + current tile (for example `Ra1`).
    pub fn full_notation(&self) -> String {
        format!("{}{}", self.kind.prefix(), self.position)
    }

    /// Pure legality query from this piece's current tile to `position`.
    #[inline]
    pub fn is_legal_move(&self, position: &str) -> bool {
        is_legal_move(self.kind, &self.position, position)
    }

    /// Move to `position`, stamping the system clock.
    pub fn make_move(&mut self, position: &str) -> Option<MoveRecord> {
        self.make_move_at(position, &SystemClock)
    }

    /// Move to `position`, stamping `clock`.
    ///
    /// On acceptance the record is appended to this piece's history and a
    /// copy is returned. An illegal destination leaves the piece untouched
    /// and returns `None`; it is never an error.
    pub fn make_move_at(&mut self, position: &str, clock: &dyn MatchClock) -> Option<MoveRecord> {
        if !self.is_legal_move(position) {
            return None;
        }

        let from = self.full_notation();
        self.position = position.to_owned();
        let record = MoveRecord::new(from, self.full_notation(), clock.now_seconds());
        self.moves.push(record.clone());

        Some(record)
    }
}
