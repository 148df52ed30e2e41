//! Rook move legality.
//!
//! Straight-line geometry only: any distance along a rank or file, with no
//! path-blocking and no awareness of other pieces.

use crate::utils::algebraic::is_valid_tile;

/// True when `to` shares a file letter or a rank digit with `from`.
///
/// Both tiles must be valid notation; the comparison itself runs on the raw
/// notation bytes rather than decoded coordinates.
#[inline]
pub fn rook_move_is_legal(from: &str, to: &str) -> bool {
    if !is_valid_tile(from) || !is_valid_tile(to) {
        return false;
    }

    let from = from.as_bytes();
    let to = to.as_bytes();
    from[0] == to[0] || from[1] == to[1]
}
