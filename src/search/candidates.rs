//! Candidate move generation for the opponent search.
//!
//! Enumerates every (source, target) pair for the searching color from
//! the cheap `simple_view` probe, optionally synthesizes split moves at
//! the hard tier, and shuffles the result for randomized tie-breaking.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::api::simple_view;
use crate::board::QuantumBoard;
use crate::constants::SPLIT_CANDIDATE_RATE;
use crate::move_gen::valid_targets;
use crate::types::{Difficulty, Move, PieceColor, Square};

/// Generate the shuffled candidate list for one turn.
pub(crate) fn generate_candidates<R: Rng + ?Sized>(
    board: &QuantumBoard,
    color: PieceColor,
    difficulty: Difficulty,
    rng: &mut R,
) -> Vec<String> {
    let mut candidates = Vec::new();

    for (src, piece) in simple_view(board) {
        if piece.color != color {
            continue;
        }
        let targets = valid_targets(board, src, piece);
        for &tgt in &targets {
            candidates.push(format!("{src}{tgt}"));

            // Hard tier occasionally offers a split pairing two distinct
            // legal targets of the same source.
            if difficulty == Difficulty::Hard
                && targets.len() >= 2
                && rng.random_bool(SPLIT_CANDIDATE_RATE)
            {
                let pair: Vec<&Square> = targets.choose_multiple(rng, 2).collect();
                candidates.push(format!("{src}{}^{src}{}", pair[0], pair[1]));
            }
        }
    }

    candidates.shuffle(rng);
    candidates
}

/// Stable partition: capture candidates (occupied target) first, each
/// partition keeping its shuffled order.
pub(crate) fn captures_first(board: &QuantumBoard, candidates: Vec<String>) -> Vec<String> {
    let (mut captures, quiet): (Vec<String>, Vec<String>) = candidates
        .into_iter()
        .partition(|mv| is_capture(board, mv));
    captures.extend(quiet);
    captures
}

fn is_capture(board: &QuantumBoard, mv: &str) -> bool {
    match Move::parse(mv) {
        Ok(Move::Standard { tgt, .. }) => board.is_occupied(tgt),
        Ok(Move::Split { t1, t2, .. }) => board.is_occupied(t1) || board.is_occupied(t2),
        Err(_) => false,
    }
}
