//! Public API for the quantum chess engine.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game, load_game replay)
//! - `moves` - Move execution (apply_move, try_apply_move)
//! - `state` - Game state queries and views (check_status, simple_view,
//!   display_view)

mod game;
mod moves;
mod state;

pub use game::{load_game, new_game, ReplayPolicy, ReplayReport};
pub use moves::{apply_move, try_apply_move};
pub use state::{check_status, display_view, simple_view, SquareView};
