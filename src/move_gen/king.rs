//! King target generation.
//!
//! One square in any direction; no castling. The king may step onto
//! attacked squares freely, since king risk is resolved through survival
//! probability rather than check detection.

use crate::board::QuantumBoard;
use crate::constants::KING_DIRS;
use crate::types::{PieceColor, Square};

use super::push_offset_targets;

pub(super) fn generate_king_targets(
    board: &QuantumBoard,
    from: Square,
    color: PieceColor,
    targets: &mut Vec<Square>,
) {
    push_offset_targets(board, from, color, &KING_DIRS, targets);
}
