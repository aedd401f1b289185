//! Pawn target generation.
//!
//! - Forward push: one square toward the opponent, only onto an empty
//!   square.
//! - Double push: from the starting rank, when both intervening squares
//!   are empty.
//! - Captures: one square diagonally forward, only when an enemy primary
//!   branch occupies the destination.
//!
//! No en passant and no promotion.

use crate::board::QuantumBoard;
use crate::constants::{BLACK_PAWN_START_ROW, WHITE_PAWN_START_ROW};
use crate::types::{PieceColor, Square};

use super::occupant_color;

pub(super) fn generate_pawn_targets(
    board: &QuantumBoard,
    from: Square,
    color: PieceColor,
    targets: &mut Vec<Square>,
) {
    let (dir, start_row) = match color {
        PieceColor::White => (1, WHITE_PAWN_START_ROW),
        PieceColor::Black => (-1, BLACK_PAWN_START_ROW),
    };

    if let Some(one) = from.offset(0, dir) {
        if !board.is_occupied(one) {
            targets.push(one);

            if from.row() == start_row {
                if let Some(two) = from.offset(0, dir * 2) {
                    if !board.is_occupied(two) {
                        targets.push(two);
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(diag) = from.offset(dc, dir) {
            if matches!(occupant_color(board, diag), Some(occupant) if occupant != color) {
                targets.push(diag);
            }
        }
    }
}
