use super::Vec2D;
use crate::core::traits::Real;

/// Unbounded line through the point `start` with direction `dir`.
///
/// Useful for ray style queries where a wall or movement path should be
/// extended past its end points, e.g. finding where a heading leaves the
/// playing field.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InfiniteLine2D<T = f64> {
    pub start: Vec2D<T>,
    pub dir: Vec2D<T>,
}

impl<T> InfiniteLine2D<T>
where
    T: Real,
{
    /// Create a new line through `start` with direction `dir`.
    ///
    /// `dir` must not be the zero vector.
    pub fn new(start: Vec2D<T>, dir: Vec2D<T>) -> Self {
        debug_assert!(dir != Vec2D::zero(), "line must have a direction");
        InfiniteLine2D { start, dir }
    }

    /// The intersection point of this line with `other`, `None` when the
    /// lines are exactly parallel.
    ///
    /// Unlike [LineSegment2D](super::LineSegment2D) there is no containment
    /// check: the intersection may lie anywhere along either line.
    ///
    /// # Examples
    ///
    /// ```
    /// # use spacehex_geometry::core::math::*;
    /// let a = InfiniteLine2D::new(vec2d(0.0, 5.0), vec2d(1.0, 0.0));
    /// let b = InfiniteLine2D::new(vec2d(2.0, 0.0), vec2d(0.0, 1.0));
    /// assert_eq!(a.intersects(b), Some(vec2d(2.0, 5.0)));
    ///
    /// let c = InfiniteLine2D::new(vec2d(0.0, 0.0), vec2d(1.0, 0.0));
    /// assert_eq!(a.intersects(c), None);
    /// ```
    pub fn intersects(&self, other: Self) -> Option<Vec2D<T>> {
        let w = self.dir;
        let v = other.dir;
        let denom = v.perp_dot(w);

        if denom == T::zero() {
            return None;
        }

        let num = w.perp_dot(other.start) - w.perp_dot(self.start);
        Some(other.start + v.scale(num / denom))
    }
}
