//! Standalone random-walk smoke harness for the match tracker.
//!
//! Drives the standard layout with uniformly random destinations and prints
//! the resulting board and log. Run with:
//! `cargo run --release --bin match_sim`
//! `cargo run --release --bin match_sim -- --verbose`

use rand::prelude::IndexedRandom;

use chess_ledger::match_state::chess_match::ChessMatch;
use chess_ledger::utils::render_match::{render_match, render_move_log};

const FILES: &[u8] = b"abcdefgh";
const RANKS: &[u8] = b"12345678";
const ATTEMPTS: usize = 200;

fn main() -> Result<(), String> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    let mut chess_match = ChessMatch::new();
    let mut rng = rand::rng();
    let mut accepted = 0usize;

    for _ in 0..ATTEMPTS {
        let keys: Vec<String> = chess_match.pieces().keys().cloned().collect();
        let piece = keys
            .choose(&mut rng)
            .ok_or("tracker has no pieces left to move")?
            .clone();

        let file = *FILES.choose(&mut rng).ok_or("file set is empty")?;
        let rank = *RANKS.choose(&mut rng).ok_or("rank set is empty")?;
        let destination = format!("{}{}", file as char, rank as char);

        let outcome = chess_match
            .make_move(&piece, &destination)
            .map_err(|error| format!("dispatch failed: {error:?}"))?;

        match outcome {
            Some(record) => {
                accepted += 1;
                if verbose {
                    println!("{record}");
                }
            }
            None => {
                if verbose {
                    println!("rejected: {piece} -> {destination}");
                }
            }
        }
    }

    println!("{}", render_match(&chess_match));
    println!(
        "accepted {accepted} of {ATTEMPTS} attempts; log length {}",
        chess_match.len()
    );
    if verbose {
        println!("{}", render_move_log(&chess_match));
    }

    Ok(())
}
