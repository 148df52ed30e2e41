//! Bishop move legality.
//!
//! Diagonal geometry only: any distance, no path-blocking and no awareness
//! of other pieces.

use crate::utils::algebraic::tile_to_coordinate;

/// True when the decoded file-delta and rank-delta match in magnitude.
///
/// A zero delta passes: staying on the same square counts as a diagonal of
/// length zero.
#[inline]
pub fn bishop_move_is_legal(from: &str, to: &str) -> bool {
    match (tile_to_coordinate(from), tile_to_coordinate(to)) {
        (Some((from_file, from_rank)), Some((to_file, to_rank))) => {
            from_file.abs_diff(to_file) == from_rank.abs_diff(to_rank)
        }
        _ => false,
    }
}
