//! Sliding piece target generation (bishops, rooks, queens).
//!
//! Walks each direction square by square and stops at the first occupied
//! cell: an enemy primary branch is included as a capture target, a
//! friendly one ends the ray before it.

use crate::board::QuantumBoard;
use crate::types::{PieceColor, Square};

use super::occupant_color;

pub(super) fn generate_sliding_targets(
    board: &QuantumBoard,
    from: Square,
    color: PieceColor,
    dirs: &[(i8, i8)],
    targets: &mut Vec<Square>,
) {
    for &(dc, dr) in dirs {
        let mut step = 1;
        while let Some(tgt) = from.offset(dc * step, dr * step) {
            match occupant_color(board, tgt) {
                None => targets.push(tgt),
                Some(occupant) => {
                    if occupant != color {
                        targets.push(tgt);
                    }
                    break;
                }
            }
            step += 1;
        }
    }
}
