//! Game state queries and serialization views.
//!
//! `simple_view` is the cheap probe the opponent search enumerates;
//! `display_view` is the wire shape the frontend renders, including
//! per-square probability, phase and entanglement tags.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::board::QuantumBoard;
use crate::constants::{DISPLAY_PROB_FLOOR, KING_SURVIVAL_THRESHOLD};
use crate::types::{Branch, GameStatus, Piece, PieceColor, PieceId, Square};

/// Per-square entry of `display_view`, serialized in the original wire
/// shape (`type`/`prob`/`id`/`phase`/`entangle_color`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SquareView {
    #[serde(rename = "type")]
    pub piece: Piece,
    #[serde(rename = "prob")]
    pub probability: f64,
    pub id: PieceId,
    #[serde(rename = "phase")]
    pub phase_degrees: i32,
    #[serde(rename = "entangle_color", skip_serializing_if = "Option::is_none")]
    pub entangle_tag: Option<String>,
}

/// King-survival check.
///
/// A side loses once its summed king probability drops below the
/// threshold. Both sides dropping below it on the same move is a draw
/// (`game_over` with no winner).
pub fn check_status(board: &QuantumBoard) -> GameStatus {
    let white = board.king_probability(PieceColor::White);
    let black = board.king_probability(PieceColor::Black);

    match (
        white < KING_SURVIVAL_THRESHOLD,
        black < KING_SURVIVAL_THRESHOLD,
    ) {
        (true, true) => GameStatus::draw(),
        (true, false) => GameStatus::won_by(PieceColor::Black),
        (false, true) => GameStatus::won_by(PieceColor::White),
        (false, false) => GameStatus::playing(),
    }
}

/// Most probable piece per occupied square (first encountered wins ties).
pub fn simple_view(board: &QuantumBoard) -> BTreeMap<Square, Piece> {
    let mut view = BTreeMap::new();

    for sq in board.occupied_squares() {
        let mut best: Option<&Branch> = None;
        for branch in board.branches(sq) {
            let better = match best {
                None => true,
                Some(current) => branch.amp.abs() > current.amp.abs(),
            };
            if better {
                best = Some(branch);
            }
        }
        if let Some(branch) = best {
            view.insert(sq, branch.piece);
        }
    }

    view
}

/// Frontend view: every square whose total probability reaches the
/// display floor, described by its primary branch.
pub fn display_view(board: &QuantumBoard) -> BTreeMap<Square, SquareView> {
    let mut view = BTreeMap::new();

    for sq in board.occupied_squares() {
        let total: f64 = board.branches(sq).iter().map(Branch::probability).sum();
        if total < DISPLAY_PROB_FLOOR {
            continue; // effectively vacated
        }

        if let Some(primary) = board.primary(sq) {
            view.insert(
                sq,
                SquareView {
                    piece: primary.piece,
                    probability: total.min(1.0),
                    id: primary.id,
                    phase_degrees: primary.amp.phase_degrees() as i32,
                    entangle_tag: board.entangle_tag(primary.id).map(str::to_string),
                },
            );
        }
    }

    view
}
