pub mod expectimax;
pub use expectimax::*;

pub mod heuristic;
pub use heuristic::*;
