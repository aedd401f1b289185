//! Position evaluation for the opponent search.

mod material;

pub use material::evaluate_material;
