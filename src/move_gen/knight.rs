//! Knight target generation.
//!
//! Knights jump, so only the destination squares matter: empty squares
//! and enemy-held squares are targets, friendly squares are not.

use crate::board::QuantumBoard;
use crate::constants::KNIGHT_DIRS;
use crate::types::{PieceColor, Square};

use super::push_offset_targets;

pub(super) fn generate_knight_targets(
    board: &QuantumBoard,
    from: Square,
    color: PieceColor,
    targets: &mut Vec<Square>,
) {
    push_offset_targets(board, from, color, &KNIGHT_DIRS, targets);
}
