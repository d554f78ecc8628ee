//! Immutable 2D geometry: vectors, star polygons, chord circles.
//!
//! - `Point`: value-type vector with rotation and signed angles.
//! - `StarPolygon`: regular vertex set; transforms return new instances.
//! - `ChordCircle`, `Line`: borrowed views producing lazy line sequences.

mod circle;
mod point;
mod polygon;

pub use circle::{ChordCircle, Circles, Line, Lines};
pub use point::Point;
pub use polygon::StarPolygon;

#[cfg(test)]
mod tests;
