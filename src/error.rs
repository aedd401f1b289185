//! Error types for the quantum chess engine.
//!
//! Engine operations report failure through these variants so that callers
//! (the opponent search in particular) can cheaply retry alternate
//! candidates. `apply_move` flattens them to a boolean at the boundary.

use thiserror::Error;

use crate::types::Square;

/// Errors that can occur in the quantum chess engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Move string does not match the move grammar.
    #[error("malformed move string: {0:?}")]
    MalformedMove(String),

    /// Difficulty string is not one of easy/normal/hard.
    #[error("unknown difficulty: {0:?}")]
    UnknownDifficulty(String),

    /// No branches at the source square.
    #[error("no piece at source square {0}")]
    EmptySource(Square),

    /// Target square is outside the piece's legal set.
    #[error("illegal target {tgt} from {src}")]
    IllegalTarget { src: Square, tgt: Square },

    /// Pawns cannot split.
    #[error("pawn at {src} cannot split")]
    PawnSplit { src: Square },

    /// Both split targets name the same square.
    #[error("split targets must differ, both were {tgt}")]
    DuplicateSplitTargets { tgt: Square },

    /// A legal capture attempt whose random draw exceeded the target's
    /// occupancy probability. The board is unchanged.
    #[error("capture on {tgt} collapsed against the mover")]
    CaptureDenied { tgt: Square },

    /// A history entry failed to apply during replay under
    /// `ReplayPolicy::Abort`.
    #[error("history entry {index} ({mv:?}) failed to apply")]
    ReplayDesync {
        index: usize,
        mv: String,
        #[source]
        source: Box<EngineError>,
    },
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
