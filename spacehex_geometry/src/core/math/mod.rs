//! Core math types and functions for 2D vectors, line segments, and
//! intersections.
mod base_math;
mod infinite_line;
mod line_segment;
mod vec2d;

pub use base_math::*;
pub use infinite_line::InfiniteLine2D;
pub use line_segment::LineSegment2D;
pub use vec2d::{vec2d, Vec2D};
