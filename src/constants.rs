//! Engine constants: piece valuations, probability thresholds and
//! direction offset tables for move generation.
//!
//! Piece values are in tenths of a pawn (10/30/30/50/90/900) and are
//! always weighted by a branch's occupancy probability before they enter
//! a score, so a half-present queen counts 45.

use crate::types::PieceKind;

pub const PAWN_VALUE: f64 = 10.0;
pub const KNIGHT_VALUE: f64 = 30.0;
pub const BISHOP_VALUE: f64 = 30.0;
pub const ROOK_VALUE: f64 = 50.0;
pub const QUEEN_VALUE: f64 = 90.0;
pub const KING_VALUE: f64 = 900.0;

/// Material value of a piece kind, before probability weighting.
pub const fn piece_value(kind: PieceKind) -> f64 {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}

/// A side loses once the summed probability of its king branches drops
/// below this threshold.
pub const KING_SURVIVAL_THRESHOLD: f64 = 0.1;

/// Squares whose total occupancy probability falls below this floor are
/// treated as vacated by `display_view`.
pub const DISPLAY_PROB_FLOOR: f64 = 0.01;

/// Amplitude factor applied to both halves of a split: 1/sqrt(2).
pub const SPLIT_FACTOR: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Hard-tier search probes at most this many shuffled candidates.
pub const HARD_PROBE_LIMIT: usize = 15;

/// Probability that the hard tier synthesizes a split candidate per
/// generated standard move.
pub const SPLIT_CANDIDATE_RATE: f64 = 0.1;

/// (col, row) deltas. Row grows toward black's side, so white pawns
/// advance with +1.
pub const KNIGHT_DIRS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

pub const KING_DIRS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1), (0, -1),
    (0, 1), (1, -1), (1, 0), (1, 1),
];

pub const ROOK_DIRS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Starting rows (0-based) from which pawns may double-push.
pub const WHITE_PAWN_START_ROW: i8 = 1;
pub const BLACK_PAWN_START_ROW: i8 = 6;
