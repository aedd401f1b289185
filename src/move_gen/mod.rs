//! Target generation: the legal destination set for a piece's normal
//! movement rule, given the current branch occupancy.
//!
//! No check or pin filtering happens here. A move that exposes the moving
//! side's king is still legal; king risk resolves through the
//! probability-based status check, not through move legality.
//!
//! Occupancy is judged by a square's primary branch: a square counts as
//! friendly or enemy according to the color of its first-inserted branch.

mod king;
mod knight;
mod pawn;
mod sliding;

use crate::board::QuantumBoard;
use crate::constants::{BISHOP_DIRS, ROOK_DIRS};
use crate::types::{Piece, PieceColor, PieceKind, Square};

/// Compute the ordered set of squares reachable by `piece` from `src`.
///
/// Captures of differently-colored occupants are included; squares held
/// by a same-colored primary branch are excluded.
pub fn valid_targets(board: &QuantumBoard, src: Square, piece: Piece) -> Vec<Square> {
    let mut targets = Vec::new();

    match piece.kind {
        PieceKind::Pawn => pawn::generate_pawn_targets(board, src, piece.color, &mut targets),
        PieceKind::Knight => knight::generate_knight_targets(board, src, piece.color, &mut targets),
        PieceKind::King => king::generate_king_targets(board, src, piece.color, &mut targets),
        PieceKind::Bishop => {
            sliding::generate_sliding_targets(board, src, piece.color, &BISHOP_DIRS, &mut targets)
        }
        PieceKind::Rook => {
            sliding::generate_sliding_targets(board, src, piece.color, &ROOK_DIRS, &mut targets)
        }
        PieceKind::Queen => {
            sliding::generate_sliding_targets(board, src, piece.color, &ROOK_DIRS, &mut targets);
            sliding::generate_sliding_targets(board, src, piece.color, &BISHOP_DIRS, &mut targets);
        }
    }

    targets
}

/// Color of the primary branch at a square, `None` when vacant.
fn occupant_color(board: &QuantumBoard, sq: Square) -> Option<PieceColor> {
    board.primary(sq).map(|b| b.piece.color)
}

/// Append every in-board offset destination that is empty or holds an
/// enemy primary branch. Shared by the jumping pieces (knight, king).
fn push_offset_targets(
    board: &QuantumBoard,
    from: Square,
    color: PieceColor,
    dirs: &[(i8, i8)],
    targets: &mut Vec<Square>,
) {
    for &(dc, dr) in dirs {
        if let Some(tgt) = from.offset(dc, dr) {
            match occupant_color(board, tgt) {
                Some(occupant) if occupant == color => {}
                _ => targets.push(tgt),
            }
        }
    }
}
