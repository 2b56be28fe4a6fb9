//! 2D vector and line segment geometry for game bot clients.
//!
//! This crate holds the value types and queries a bot needs to reason about
//! the playing field: [Vec2D] for points and displacements, [LineSegment2D]
//! for walls and movement paths, and [InfiniteLine2D] for unbounded lines.
//! All types are immutable `Copy` values and every operation returns a new
//! value, so they can be shared across threads freely.
//!
//! Predicates that compare positions use a shared tolerance, exposed through
//! the [FuzzyEq](crate::core::traits::FuzzyEq) trait, rather than exact
//! floating point comparison. Plain `==` on the value types stays exact.
//!
//! # Examples
//!
//! ```
//! use spacehex_geometry::{LineSegment2D, Vec2D};
//!
//! let a = LineSegment2D::new(Vec2D::new(-1.0, -1.0), Vec2D::new(1.0, 1.0));
//! let b = LineSegment2D::new(Vec2D::new(-1.0, 1.0), Vec2D::new(1.0, -1.0));
//! let pt = a.intersects(b).unwrap();
//! assert!((pt - Vec2D::zero()).length() < 0.01);
//! ```
//!
//! # Features
//!
//! * `serde` - enables serialize/deserialize for [Vec2D] and [LineSegment2D]
//!   using the wire field names `x`/`y` and `start`/`end`.

#[macro_use]
mod macros;

pub mod core;

pub use static_aabb2d_index::AABB;

pub use crate::core::math::{vec2d, InfiniteLine2D, LineSegment2D, Vec2D};
pub use crate::core::traits::{FuzzyEq, FuzzyOrd, Real};
