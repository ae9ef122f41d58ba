pub mod decision;
pub use decision::*;

pub mod player;
pub use player::*;

pub mod position;
pub use position::*;
