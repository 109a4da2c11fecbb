pub mod error;
pub mod euler;
pub mod geometry;
