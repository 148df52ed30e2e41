//! Errors used throughout the match-tracking library.
//!
//! `MatchErrors` is the single error type returned by fallible operations:
//! piece construction and tracker dispatch. Expected, frequent legality
//! failures are signaled by `Option`/boolean results instead and never
//! appear here, so a caller matching on `MatchErrors` is always looking at
//! bad input rather than a merely rejected move.

/// Unified error type for the match-tracking library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchErrors {
    /// A piece was constructed on a tile that fails its own legality
    /// self-check.
    ///
    /// Payload: the offending starting position.
    IllegalStartPosition(String),

    /// The tracker was asked to move a piece whose prefix names no known
    /// variant.
    ///
    /// Payload: the offending prefix character.
    UnknownPieceType(char),

    /// A full-notation string was too short or too mangled to carry a prefix
    /// and a tile.
    ///
    /// Payload: the original string.
    InvalidFullNotation(String),
}
