//! Match tracker: the board-level ownership table and the shared move log.
//!
//! `ChessMatch` owns every tracked piece keyed by full notation, dispatches
//! move requests to the right variant, and appends accepted moves to one
//! log in acceptance order. Each live piece has exactly one key, kept in
//! sync with its position on every accepted move.

use std::collections::HashMap;

use crate::match_state::chess_types::PieceKind;
use crate::match_state::match_errors::MatchErrors;
use crate::match_state::match_rules::STANDARD_LAYOUT;
use crate::match_state::move_record::MoveRecord;
use crate::pieces::chess_piece::ChessPiece;
use crate::utils::clock::{MatchClock, SystemClock};

pub struct ChessMatch {
    pieces: HashMap<String, ChessPiece>,
    log: Vec<MoveRecord>,
    clock: Box<dyn MatchClock>,
}

impl ChessMatch {
    /// Standard starting subset stamped by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Standard starting subset stamped by `clock`.
    pub fn with_clock(clock: Box<dyn MatchClock>) -> Self {
        let mut chess_match = Self {
            pieces: HashMap::new(),
            log: Vec::new(),
            clock,
        };
        chess_match.reset();
        chess_match
    }

    /// Track a supplied piece mapping instead of the standard layout.
    ///
    /// Keys must be the pieces' current full notations; the log starts
    /// empty.
    pub fn with_pieces(pieces: HashMap<String, ChessPiece>) -> Self {
        Self::with_pieces_and_clock(pieces, Box::new(SystemClock))
    }

    /// Track a supplied piece mapping stamped by `clock`.
    pub fn with_pieces_and_clock(
        pieces: HashMap<String, ChessPiece>,
        clock: Box<dyn MatchClock>,
    ) -> Self {
        Self {
            pieces,
            log: Vec::new(),
            clock,
        }
    }

    /// Clear the log and restore the fixed standard subset: rooks on
    /// a1/h1/a8/h8, bishops on c1/f1/c8/f8, kings on e1/e8.
    ///
    /// Pieces are stored as constructed instances, so their histories
    /// survive later moves.
    pub fn reset(&mut self) {
        self.log.clear();
        self.pieces.clear();

        for (tile, kind) in STANDARD_LAYOUT {
            let piece =
                ChessPiece::new(*kind, tile).expect("standard layout tiles should construct");
            self.pieces.insert(piece.full_notation(), piece);
        }
    }

    /// Dispatch a move request.
    ///
    /// `piece` is a full notation key (for example `Ra1`) and `position` is
    /// the destination tile. Returns `Ok(Some(record))` on acceptance and
    /// `Ok(None)` when the variant geometry rejects the destination; both
    /// `pieces` and the log stay untouched on rejection. An unrecognized
    /// prefix or an unusable notation string is an error, never a silent
    /// no-op.
    ///
    /// A key that is not currently tracked still dispatches: the request is
    /// evaluated by a fresh piece standing on the tile carried in the
    /// notation, and an accepted move inserts that piece under its new key.
    pub fn make_move(
        &mut self,
        piece: &str,
        position: &str,
    ) -> Result<Option<MoveRecord>, MatchErrors> {
        let prefix = piece
            .chars()
            .next()
            .ok_or_else(|| MatchErrors::InvalidFullNotation(piece.to_owned()))?;
        let kind =
            PieceKind::from_prefix(prefix).ok_or(MatchErrors::UnknownPieceType(prefix))?;

        if piece.len() < 3 {
            return Err(MatchErrors::InvalidFullNotation(piece.to_owned()));
        }

        let (mut moving_piece, tracked) = match self.pieces.remove(piece) {
            Some(found) => (found, true),
            None => {
                let start_tile = piece
                    .get(piece.len() - 2..)
                    .ok_or_else(|| MatchErrors::InvalidFullNotation(piece.to_owned()))?;
                (ChessPiece::new(kind, start_tile)?, false)
            }
        };

        match moving_piece.make_move_at(position, self.clock.as_ref()) {
            Some(record) => {
                self.log.push(record.clone());
                self.pieces.insert(moving_piece.full_notation(), moving_piece);
                Ok(Some(record))
            }
            None => {
                if tracked {
                    self.pieces.insert(piece.to_owned(), moving_piece);
                }
                Ok(None)
            }
        }
    }

    /// Number of accepted moves in the shared log.
    #[inline]
    pub fn len(&self) -> usize {
        self.log.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Accepted moves across all pieces, in acceptance order.
    #[inline]
    pub fn log(&self) -> &[MoveRecord] {
        &self.log
    }

    /// Tracked pieces keyed by their current full notation.
    #[inline]
    pub fn pieces(&self) -> &HashMap<String, ChessPiece> {
        &self.pieces
    }
}

impl Default for ChessMatch {
    fn default() -> Self {
        Self::new()
    }
}
