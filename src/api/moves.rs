//! Move execution.
//!
//! Three move forms share one entry point: standard moves (which may
//! resolve as a merge or a probabilistic capture) and split moves. All
//! validation happens before any mutation, so a failed move leaves the
//! board exactly as it was.

use rand::Rng;

use crate::board::QuantumBoard;
use crate::constants::SPLIT_FACTOR;
use crate::error::{EngineError, EngineResult};
use crate::move_gen::valid_targets;
use crate::types::{Branch, Move, PieceKind, Square};

/// Execute a move string against the board.
///
/// Returns `true` on success and `false` on any failure, including a
/// capture attempt that collapsed against the mover. Use
/// [`try_apply_move`] when the failure reason matters.
pub fn apply_move<R: Rng + ?Sized>(board: &mut QuantumBoard, mv: &str, rng: &mut R) -> bool {
    try_apply_move(board, mv, rng).is_ok()
}

/// Execute a move string, reporting the failure reason.
///
/// Randomness is consumed by capture collapse draws and by the
/// entanglement tag assigned on a piece's first split; pass a seeded rng
/// for deterministic behavior.
pub fn try_apply_move<R: Rng + ?Sized>(
    board: &mut QuantumBoard,
    mv: &str,
    rng: &mut R,
) -> EngineResult<()> {
    match Move::parse(mv)? {
        Move::Standard { src, tgt } => standard_move(board, src, tgt, rng),
        Move::Split { src, t1, t2 } => split_move(board, src, t1, t2, rng),
    }
}

fn standard_move<R: Rng + ?Sized>(
    board: &mut QuantumBoard,
    src: Square,
    tgt: Square,
    rng: &mut R,
) -> EngineResult<()> {
    let mover = *board.primary(src).ok_or(EngineError::EmptySource(src))?;

    // Merge exception: a same-id branch at the target absorbs the mover's
    // amplitude regardless of movement legality. This is the system's only
    // normalization point.
    if board.has_branch_with_id(tgt, mover.id) {
        if let Some(existing) = board.branch_with_id_mut(tgt, mover.id) {
            existing.amp = existing.amp + mover.amp;
            if existing.amp.norm_sqr() > 1.0 {
                existing.amp = existing.amp.normalized();
            }
        }
        board.take_primary(src);
        return Ok(());
    }

    if !valid_targets(board, src, mover.piece).contains(&tgt) {
        return Err(EngineError::IllegalTarget { src, tgt });
    }

    if let Some(occupant) = board.primary(tgt) {
        // Legality already guarantees the occupant is enemy-colored.
        // Collapse: draw against its occupancy probability.
        let p = occupant.probability();
        if rng.random::<f64>() > p {
            return Err(EngineError::CaptureDenied { tgt });
        }
        board.clear_square(tgt);
    }

    if let Some(branch) = board.take_primary(src) {
        board.push_branch(tgt, branch);
    }
    Ok(())
}

fn split_move<R: Rng + ?Sized>(
    board: &mut QuantumBoard,
    src: Square,
    t1: Square,
    t2: Square,
    rng: &mut R,
) -> EngineResult<()> {
    let mover = *board.primary(src).ok_or(EngineError::EmptySource(src))?;

    if mover.piece.kind == PieceKind::Pawn {
        return Err(EngineError::PawnSplit { src });
    }

    let targets = valid_targets(board, src, mover.piece);
    for tgt in [t1, t2] {
        if !targets.contains(&tgt) {
            return Err(EngineError::IllegalTarget { src, tgt });
        }
    }
    if t1 == t2 {
        return Err(EngineError::DuplicateSplitTargets { tgt: t1 });
    }

    board.take_primary(src);

    // Quadrature split: amp/sqrt(2) and i*amp/sqrt(2), preserving total
    // probability.
    board.push_branch(
        t1,
        Branch {
            amp: mover.amp.scaled(SPLIT_FACTOR),
            ..mover
        },
    );
    board.push_branch(
        t2,
        Branch {
            amp: mover.amp.times_i().scaled(SPLIT_FACTOR),
            ..mover
        },
    );

    if !board.is_entangled(mover.id) {
        let tag = format!("#{:06x}", rng.random_range(0..0x100_0000u32));
        board.register_entanglement(mover.id, tag);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceColor, PieceKind};
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    /// Rng whose `next_u64` always returns the same raw value. With
    /// `u64::MAX` the f64 draw is just under 1.0; with 0 it is exactly 0.
    struct FixedRng(u64);

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.0 as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for byte in dst.iter_mut() {
                *byte = 0;
            }
        }
    }

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_standard_move_vacates_source() {
        let mut board = QuantumBoard::new();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(apply_move(&mut board, "e2e4", &mut rng));
        assert!(!board.is_occupied(sq("e2")), "e2 becomes absent");
        let pawn = board.primary(sq("e4")).unwrap();
        assert_eq!(pawn.piece.kind, PieceKind::Pawn);
        assert_eq!(pawn.probability(), 1.0);
    }

    #[test]
    fn test_empty_source_fails() {
        let mut board = QuantumBoard::new();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            try_apply_move(&mut board, "e4e5", &mut rng),
            Err(EngineError::EmptySource(sq("e4")))
        );
    }

    #[test]
    fn test_illegal_target_leaves_board_unchanged() {
        let mut board = QuantumBoard::new();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            try_apply_move(&mut board, "e2e5", &mut rng),
            Err(EngineError::IllegalTarget {
                src: sq("e2"),
                tgt: sq("e5"),
            })
        );
        assert!(board.is_occupied(sq("e2")));
        assert!(!board.is_occupied(sq("e5")));
    }

    #[test]
    fn test_capture_against_certain_target_always_succeeds() {
        let mut board = QuantumBoard::new();
        // Park a black pawn where the white e-pawn can take it.
        let enemy = board.take_primary(sq("d7")).unwrap();
        board.push_branch(sq("d3"), enemy);

        // Worst possible draw, still below p = 1.
        let mut rng = FixedRng(u64::MAX);
        assert!(apply_move(&mut board, "e2d3", &mut rng));
        let victor = board.primary(sq("d3")).unwrap();
        assert_eq!(victor.piece.color, PieceColor::White);
    }

    #[test]
    fn test_capture_against_zero_probability_target_fails() {
        let mut board = QuantumBoard::new();
        let mut enemy = board.take_primary(sq("d7")).unwrap();
        enemy.amp = crate::types::Amplitude { re: 0.0, im: 0.0 };
        board.push_branch(sq("d3"), enemy);

        let mut rng = FixedRng(u64::MAX);
        assert_eq!(
            try_apply_move(&mut board, "e2d3", &mut rng),
            Err(EngineError::CaptureDenied { tgt: sq("d3") })
        );
        assert!(board.is_occupied(sq("e2")), "mover stays put");
        let survivor = board.primary(sq("d3")).unwrap();
        assert_eq!(survivor.piece.color, PieceColor::Black, "target survives");
    }

    #[test]
    fn test_split_halves_probability_and_registers_entanglement() {
        let mut board = QuantumBoard::new();
        let mut rng = StdRng::seed_from_u64(7);
        let knight_id = board.primary(sq("b1")).unwrap().id;

        assert!(apply_move(&mut board, "b1a3^b1c3", &mut rng));
        assert!(!board.is_occupied(sq("b1")));

        let a3 = board.primary(sq("a3")).unwrap();
        let c3 = board.primary(sq("c3")).unwrap();
        assert_eq!(a3.id, knight_id);
        assert_eq!(c3.id, knight_id);
        assert!((a3.probability() - 0.5).abs() < 1e-12);
        assert!((c3.probability() - 0.5).abs() < 1e-12);
        assert!((c3.amp.phase_degrees() - 90.0).abs() < 1e-9);

        let tag = board.entangle_tag(knight_id).unwrap();
        assert!(tag.starts_with('#') && tag.len() == 7, "tag is #rrggbb");
    }

    #[test]
    fn test_pawn_split_rejected() {
        let mut board = QuantumBoard::new();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            try_apply_move(&mut board, "e2e3^e2e4", &mut rng),
            Err(EngineError::PawnSplit { src: sq("e2") })
        );
    }

    #[test]
    fn test_split_with_duplicate_targets_rejected() {
        let mut board = QuantumBoard::new();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            try_apply_move(&mut board, "b1a3^b1a3", &mut rng),
            Err(EngineError::DuplicateSplitTargets { tgt: sq("a3") })
        );
        assert!(board.is_occupied(sq("b1")));
    }

    #[test]
    fn test_merge_adds_amplitudes_and_caps_probability() {
        let mut board = QuantumBoard::new();
        let mut rng = StdRng::seed_from_u64(3);

        // Split the knight, then walk one half onto the other.
        assert!(apply_move(&mut board, "b1a3^b1c3", &mut rng));
        assert!(apply_move(&mut board, "a3b5", &mut rng));
        assert!(apply_move(&mut board, "c3b5", &mut rng));

        let merged = board.branches(sq("b5"));
        assert_eq!(merged.len(), 1, "same-id branches merged");
        assert!(
            merged[0].probability() <= 1.0 + 1e-12,
            "merge renormalizes above unit probability"
        );
        // |1/sqrt(2) + i/sqrt(2)|^2 = 1: this merge lands exactly on 1.
        assert!((merged[0].probability() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_merge_ignores_movement_legality() {
        let mut board = QuantumBoard::new();
        let mut rng = StdRng::seed_from_u64(11);

        // a3 -> c3 is not a knight move, but c3 holds a branch with the
        // same id, so the merge exception applies.
        assert!(apply_move(&mut board, "b1a3^b1c3", &mut rng));
        assert!(apply_move(&mut board, "a3c3", &mut rng));

        let merged = board.branches(sq("c3"));
        assert_eq!(merged.len(), 1);
        assert!((merged[0].probability() - 1.0).abs() < 1e-9);
    }
}
