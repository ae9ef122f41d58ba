pub mod color;
pub use color::*;

pub mod cup;
pub use cup::*;

pub mod die;
pub use die::*;

pub mod face;
pub use face::*;

pub mod roll;
pub use roll::*;
