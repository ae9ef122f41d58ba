pub mod agent;
pub use agent::*;

pub mod fish;
pub use fish::*;

#[cfg(feature = "cli")]
pub mod human;
#[cfg(feature = "cli")]
pub use human::*;

pub mod robot;
pub use robot::*;
