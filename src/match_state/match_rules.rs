//! Canonical starting-layout constants.
//!
//! This module stores the fixed standard subset used by `ChessMatch::reset`:
//! rooks, bishops, and kings on their back-rank squares for both sides.

use crate::match_state::chess_types::PieceKind;

/// Back-rank placement of the tracked subset, as (tile, variant) entries.
pub const STANDARD_LAYOUT: &[(&str, PieceKind)] = &[
    ("a1", PieceKind::Rook),
    ("h1", PieceKind::Rook),
    ("a8", PieceKind::Rook),
    ("h8", PieceKind::Rook),
    ("c1", PieceKind::Bishop),
    ("f1", PieceKind::Bishop),
    ("c8", PieceKind::Bishop),
    ("f8", PieceKind::Bishop),
    ("e1", PieceKind::King),
    ("e8", PieceKind::King),
];
