//! Game lifecycle: fresh boards and history replay.
//!
//! Boards are never persisted; only the comma-separated move history is.
//! Every request reconstructs its board by replaying that history against
//! a fresh setup.

use rand::Rng;
use tracing::warn;

use crate::api::moves::try_apply_move;
use crate::board::QuantumBoard;
use crate::error::{EngineError, EngineResult};

/// Create a new game with the initial position.
pub fn new_game() -> QuantumBoard {
    QuantumBoard::new()
}

/// What to do when a history entry fails to apply during replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayPolicy {
    /// Skip the entry and continue (the original best-effort behavior).
    /// Skipped entries are logged and collected in the report.
    SkipInvalid,
    /// Stop at the first failure and surface `ReplayDesync`.
    Abort,
}

/// Outcome of a replay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayReport {
    /// Entries applied successfully.
    pub applied: usize,
    /// (index, move string) of entries skipped under `SkipInvalid`.
    pub skipped: Vec<(usize, String)>,
}

/// Replay a persisted history against the board.
///
/// The history is a comma-separated sequence of move strings with no
/// leading or trailing delimiter; the empty string is the initial
/// position. Capture collapses during replay consume randomness, so a
/// deterministic reconstruction requires the same rng sequence that
/// produced the history.
pub fn load_game<R: Rng + ?Sized>(
    board: &mut QuantumBoard,
    history: &str,
    policy: ReplayPolicy,
    rng: &mut R,
) -> EngineResult<ReplayReport> {
    let mut report = ReplayReport::default();
    if history.is_empty() {
        return Ok(report);
    }

    for (index, mv) in history.split(',').enumerate() {
        match try_apply_move(board, mv, rng) {
            Ok(()) => report.applied += 1,
            Err(err) => match policy {
                ReplayPolicy::SkipInvalid => {
                    warn!(index, mv, %err, "skipping history entry that failed to apply");
                    report.skipped.push((index, mv.to_string()));
                }
                ReplayPolicy::Abort => {
                    return Err(EngineError::ReplayDesync {
                        index,
                        mv: mv.to_string(),
                        source: Box::new(err),
                    });
                }
            },
        }
    }

    Ok(report)
}
