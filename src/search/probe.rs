//! Hard-tier probing: clone the board, attempt a candidate, score the
//! result by probability-weighted material.

use rand::Rng;
use tracing::debug;

use crate::api::try_apply_move;
use crate::board::QuantumBoard;
use crate::constants::HARD_PROBE_LIMIT;
use crate::evaluation::evaluate_material;
use crate::types::PieceColor;

/// Score tolerance when collecting ties.
const SCORE_EPS: f64 = 1e-9;

/// Probe the first `HARD_PROBE_LIMIT` candidates on snapshots and return
/// every candidate tying the best material score. Falls back to the full
/// candidate list when no probe applies (each probe's capture draws may
/// collapse against it).
pub(crate) fn best_probed<R: Rng + ?Sized>(
    board: &QuantumBoard,
    side: PieceColor,
    candidates: Vec<String>,
    rng: &mut R,
) -> Vec<String> {
    let mut best_score = f64::NEG_INFINITY;
    let mut best: Vec<String> = Vec::new();

    for mv in candidates.iter().take(HARD_PROBE_LIMIT) {
        let mut scratch = board.snapshot();
        if try_apply_move(&mut scratch, mv, rng).is_err() {
            continue;
        }

        let score = evaluate_material(&scratch, side);
        if score > best_score + SCORE_EPS {
            best_score = score;
            best.clear();
            best.push(mv.clone());
        } else if (score - best_score).abs() <= SCORE_EPS {
            best.push(mv.clone());
        }
    }

    if best.is_empty() {
        debug!("no probe applied; falling back to the full candidate list");
        candidates
    } else {
        debug!(score = best_score, ties = best.len(), "probing finished");
        best
    }
}
