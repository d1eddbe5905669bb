pub mod activity;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod tilt;
pub mod transform;
pub mod wobble;

pub use activity::*;
pub use config::*;
pub use constants::*;
pub use geometry::*;
pub use tilt::*;
pub use transform::*;
pub use wobble::*;
