//! End-to-end flows: a request reconstructs a board from history, applies
//! a move, checks the status, and asks the opponent search for a reply.

use quantum_chess_engine::api::{
    apply_move, check_status, display_view, load_game, new_game, simple_view, ReplayPolicy,
};
use quantum_chess_engine::search::{reply, select_candidates};
use quantum_chess_engine::types::{Difficulty, PieceColor, PieceKind, Square};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn opening_moves_flow_through_views() {
    let mut board = new_game();
    let mut rng = StdRng::seed_from_u64(1);

    assert!(apply_move(&mut board, "e2e4", &mut rng));
    assert!(apply_move(&mut board, "e7e5", &mut rng));

    let view = display_view(&board);
    assert_eq!(view[&sq("e4")].probability, 1.0);
    assert_eq!(view[&sq("e4")].phase_degrees, 0);
    assert_eq!(view[&sq("e5")].probability, 1.0);
    assert!(!view.contains_key(&sq("e2")));
    assert!(!view.contains_key(&sq("e7")));

    let simple = simple_view(&board);
    assert_eq!(simple[&sq("e4")].kind, PieceKind::Pawn);
    assert_eq!(simple[&sq("e4")].color, PieceColor::White);

    assert!(!check_status(&board).game_over);
}

#[test]
fn knight_split_flow() {
    let mut board = new_game();
    let mut rng = StdRng::seed_from_u64(2);

    assert!(apply_move(&mut board, "b1a3^b1c3", &mut rng));

    assert!(!board.is_occupied(sq("b1")));
    let a3 = board.primary(sq("a3")).unwrap();
    let c3 = board.primary(sq("c3")).unwrap();
    assert_eq!(a3.id, c3.id, "both halves keep the knight's id");
    assert!((a3.probability() - 0.5).abs() < 1e-12);
    assert!((c3.probability() - 0.5).abs() < 1e-12);
    assert!(board.entangle_tag(a3.id).is_some());

    let view = display_view(&board);
    assert!(view[&sq("a3")].entangle_tag.is_some());
    assert_eq!(view[&sq("c3")].phase_degrees, 90);
}

#[test]
fn replayed_history_matches_live_board() {
    // Every capture here is against a full-probability target, so the
    // replay consumes the identical rng sequence as the live game.
    let history = "e2e4,d7d5,e4d5,d8d5,b1a3^b1c3,d5a5";

    let mut live = new_game();
    let mut rng = StdRng::seed_from_u64(99);
    let report = load_game(&mut live, history, ReplayPolicy::Abort, &mut rng).unwrap();
    assert_eq!(report.applied, 6);

    let mut replayed = new_game();
    let mut rng = StdRng::seed_from_u64(99);
    load_game(&mut replayed, history, ReplayPolicy::Abort, &mut rng).unwrap();

    assert_eq!(display_view(&live), display_view(&replayed));
}

#[test]
fn opponent_reply_applies_to_live_board() {
    let mut board = new_game();
    let mut rng = StdRng::seed_from_u64(7);
    assert!(apply_move(&mut board, "e2e4", &mut rng));

    let candidates = futures_lite::future::block_on(reply(
        &board,
        PieceColor::Black,
        Difficulty::Normal,
        0.0,
        &mut rng,
    ));
    assert!(!candidates.is_empty());

    // The caller's contract: attempt candidates in order until one lands.
    let mut applied = None;
    for mv in &candidates {
        if apply_move(&mut board, mv, &mut rng) {
            applied = Some(mv.clone());
            break;
        }
    }
    assert!(applied.is_some(), "some candidate must apply");
    assert!(!check_status(&board).game_over);
}

#[test]
fn hard_tier_prefers_winning_material() {
    // Strip the position down so the hard tier cannot miss the hanging
    // queen: a lone exchange where one capture dominates every probe.
    let mut board = new_game();
    let mut rng = StdRng::seed_from_u64(11);

    // March the white queen out to where black pawns can see her.
    for mv in ["e2e4", "e7e6", "d1g4"] {
        assert!(apply_move(&mut board, mv, &mut rng), "setup move {mv}");
    }

    let candidates = select_candidates(&board, PieceColor::Black, Difficulty::Hard, &mut rng);
    assert!(!candidates.is_empty());

    // Whatever subset won the probe, each candidate must come from a
    // black source square.
    for mv in &candidates {
        let src: Square = mv[..2].parse().unwrap();
        let piece = board.primary(src).unwrap().piece;
        assert_eq!(piece.color, PieceColor::Black, "candidate {mv}");
    }
}

#[test]
fn game_ends_when_a_king_falls() {
    let mut board = new_game();
    let mut rng = StdRng::seed_from_u64(3);

    // Walk the white queen through an open file and take the black king.
    for mv in ["d2d4", "e7e5", "d1d3", "e5d4", "d3e4", "e8e7", "e4e7"] {
        assert!(apply_move(&mut board, mv, &mut rng), "move {mv}");
    }

    let status = check_status(&board);
    assert!(status.game_over);
    assert_eq!(status.winner, Some(PieceColor::White));
}
