//! Terminal-oriented match renderer.
//!
//! Creates a human-readable board view and log listing from a tracker for
//! debugging, tests, and diagnostics in text environments.

use crate::match_state::chess_match::ChessMatch;
use crate::match_state::chess_types::PieceKind;
use crate::utils::algebraic::tile_to_coordinate;

/// Render the tracked pieces to a Unicode grid for terminal output.
pub fn render_match(chess_match: &ChessMatch) -> String {
    let mut grid = [[None::<PieceKind>; 8]; 8];

    for piece in chess_match.pieces().values() {
        if let Some((file, rank)) = tile_to_coordinate(piece.position()) {
            grid[rank as usize][file as usize] = Some(piece.kind());
        }
    }

    let mut out = String::new();
    out.push_str("  a b c d e f g h\n");

    for rank in (0..8).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');

        for file in 0..8 {
            match grid[rank][file] {
                Some(kind) => out.push(piece_to_glyph(kind)),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Render the shared log, one accepted move per line, in acceptance order.
pub fn render_move_log(chess_match: &ChessMatch) -> String {
    chess_match
        .log()
        .iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn piece_to_glyph(kind: PieceKind) -> char {
    match kind {
        PieceKind::Rook => '♜',
        PieceKind::Bishop => '♝',
        PieceKind::King => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::{render_match, render_move_log};
    use crate::match_state::chess_match::ChessMatch;
    use crate::utils::clock::ManualClock;

    #[test]
    fn standard_layout_renders_back_rank_glyphs() {
        let chess_match = ChessMatch::with_clock(Box::new(ManualClock::new(0.0, 1.0)));
        let view = render_match(&chess_match);
        let lines: Vec<&str> = view.lines().collect();

        assert_eq!(lines.first(), Some(&"  a b c d e f g h"));
        assert_eq!(lines.last(), Some(&"  a b c d e f g h"));
        // Rank 1 is the second-to-last line: rooks on a/h, bishops on c/f,
        // king on e.
        assert_eq!(lines[lines.len() - 2], "1 ♜ · ♝ · ♚ · ♝ ♜ 1");
        assert_eq!(lines[1], "8 ♜ · ♝ · ♚ · ♝ ♜ 8");
    }

    #[test]
    fn moved_piece_relocates_in_the_view() {
        let mut chess_match = ChessMatch::with_clock(Box::new(ManualClock::new(0.0, 1.0)));
        chess_match
            .make_move("Ra1", "a4")
            .expect("rook dispatch should succeed")
            .expect("a1 to a4 should be accepted");

        let view = render_match(&chess_match);
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines[lines.len() - 2], "1 · · ♝ · ♚ · ♝ ♜ 1");
        assert_eq!(lines[lines.len() - 5], "4 ♜ · · · · · · · 4");
    }

    #[test]
    fn log_renders_one_line_per_accepted_move() {
        let mut chess_match = ChessMatch::with_clock(Box::new(ManualClock::new(5.0, 1.0)));
        chess_match
            .make_move("Ra1", "a2")
            .expect("rook dispatch should succeed")
            .expect("a1 to a2 should be accepted");
        chess_match
            .make_move("Ke8", "d8")
            .expect("king dispatch should succeed")
            .expect("e8 to d8 should be accepted");

        let listing = render_move_log(&chess_match);
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Ra1 -> Ra2 @ 5.000000");
        assert_eq!(lines[1], "Ke8 -> Kd8 @ 6.000000");
    }
}
