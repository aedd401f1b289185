//! Opponent move-candidate search.
//!
//! Produces an ordered sequence of move strings for the automated
//! opponent at three difficulty tiers. The list is regenerated each turn
//! and verified only against a snapshot of the board at search time: the
//! caller must still attempt each candidate against the live board in
//! order until one succeeds.

mod candidates;
mod probe;

use futures_lite::future::yield_now;
use instant::Instant;
use rand::Rng;
use tracing::debug;

use crate::board::QuantumBoard;
use crate::types::{Difficulty, PieceColor};

/// Generate and rank move candidates for `color`.
///
/// - `Easy`: the shuffled candidate list as-is.
/// - `Normal`: capture candidates first, then the rest, each partition in
///   shuffled order.
/// - `Hard`: the first 15 shuffled candidates are probed on snapshots and
///   scored by probability-weighted material; all candidates tying the
///   best score are returned (full list when no probe applies).
pub fn select_candidates<R: Rng + ?Sized>(
    board: &QuantumBoard,
    color: PieceColor,
    difficulty: Difficulty,
    rng: &mut R,
) -> Vec<String> {
    let generated = candidates::generate_candidates(board, color, difficulty, rng);
    debug!(count = generated.len(), ?difficulty, "generated move candidates");

    match difficulty {
        Difficulty::Easy => generated,
        Difficulty::Normal => candidates::captures_first(board, generated),
        Difficulty::Hard => probe::best_probed(board, color, generated, rng),
    }
}

/// Opponent reply with the artificial thinking delay.
///
/// The delay is cooperative: the task yields until the deadline passes
/// instead of blocking a thread, so a server can schedule it off the
/// request path.
pub async fn reply<R: Rng + ?Sized>(
    board: &QuantumBoard,
    color: PieceColor,
    difficulty: Difficulty,
    think_time_secs: f32,
    rng: &mut R,
) -> Vec<String> {
    let start = Instant::now();
    while start.elapsed().as_secs_f32() < think_time_secs {
        yield_now().await;
    }

    select_candidates(board, color, difficulty, rng)
}
