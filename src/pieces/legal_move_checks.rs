//! Variant dispatch for move legality.
//!
//! Exposes the single entry point the piece model and tooling use to ask
//! whether a move fits a variant's geometry.

use crate::match_state::chess_types::PieceKind;
use crate::pieces::legal_moves_bishop::bishop_move_is_legal;
use crate::pieces::legal_moves_king::king_move_is_legal;
use crate::pieces::legal_moves_rook::rook_move_is_legal;

/// Evaluate the geometry predicate for `kind` from `from` to `to`.
///
/// Pure query: no occupancy, no path blocking, no turn order. Invalid
/// notation on either side is illegal for every variant.
#[inline]
pub fn is_legal_move(kind: PieceKind, from: &str, to: &str) -> bool {
    match kind {
        PieceKind::Rook => rook_move_is_legal(from, to),
        PieceKind::Bishop => bishop_move_is_legal(from, to),
        PieceKind::King => king_move_is_legal(from, to),
    }
}
