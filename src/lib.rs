//! Quantum chess engine.
//!
//! A probabilistic chess variant: pieces may occupy several squares in
//! superposition, split moves divide a piece's amplitude across two
//! destinations, merge moves recombine same-id branches, and captures
//! resolve through a random draw weighted by the target's occupancy
//! probability. The winner is decided by king survival probability, not
//! checkmate.
//!
//! The crate is the engine core plus its opponent search; routing,
//! persistence and rendering live outside and talk to it through the
//! [`api`] boundary:
//!
//! ```rust
//! use quantum_chess_engine::api::{apply_move, check_status, new_game};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut board = new_game();
//! let mut rng = StdRng::seed_from_u64(1);
//! assert!(apply_move(&mut board, "e2e4", &mut rng));
//! assert!(!check_status(&board).game_over);
//! ```
//!
//! Randomness is injected everywhere it is consumed (capture collapse,
//! entanglement tags, candidate shuffling), so seeded games replay
//! deterministically.

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod move_gen;
pub mod search;
pub mod types;

pub use api::{
    apply_move, check_status, display_view, load_game, new_game, simple_view, try_apply_move,
    ReplayPolicy, ReplayReport, SquareView,
};
pub use board::QuantumBoard;
pub use error::{EngineError, EngineResult};
pub use search::{reply, select_candidates};
pub use types::{
    Amplitude, Branch, Difficulty, GameStatus, Move, Piece, PieceColor, PieceId, PieceKind, Square,
};
