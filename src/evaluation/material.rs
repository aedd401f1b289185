//! Material evaluation.
//!
//! Sums piece values weighted by branch occupancy probability, from the
//! perspective of the searching side.

use crate::board::QuantumBoard;
use crate::constants::piece_value;
use crate::types::PieceColor;

/// Evaluate material for `side`: each branch contributes its piece value
/// times its occupancy probability, added for `side`'s branches and
/// subtracted for the opponent's.
pub fn evaluate_material(board: &QuantumBoard, side: PieceColor) -> f64 {
    let mut score = 0.0;

    for (_, branch) in board.branches_iter() {
        let value = piece_value(branch.piece.kind) * branch.probability();
        if branch.piece.color == side {
            score += value;
        } else {
            score -= value;
        }
    }

    score
}
