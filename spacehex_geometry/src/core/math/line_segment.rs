use super::base_math::{dist_squared, min_max, point_within_aabb_eps};
use super::Vec2D;
use crate::core::traits::Real;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use static_aabb2d_index::AABB;
use std::fmt;

/// Directed line segment between the points `start` and `end`.
///
/// The segment is an immutable value type; `start` and `end` may coincide
/// (the degenerate segment has direction zero by convention). Queries share
/// the library tolerance from
/// [FuzzyEq::fuzzy_epsilon](crate::core::traits::FuzzyEq::fuzzy_epsilon) so
/// boundary cases are edge tolerant.
///
/// When the `serde` feature is enabled the segment serializes as an object
/// with field names `start` and `end`, matching the game protocol's wire
/// format.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineSegment2D<T = f64> {
    pub start: Vec2D<T>,
    pub end: Vec2D<T>,
}

impl<T> LineSegment2D<T>
where
    T: Real,
{
    /// Create a new segment from `start` to `end`.
    pub fn new(start: Vec2D<T>, end: Vec2D<T>) -> Self {
        LineSegment2D { start, end }
    }

    /// New segment with the start and end points exchanged.
    pub fn swap(&self) -> Self {
        LineSegment2D::new(self.end, self.start)
    }

    /// The vector from `start` to `end`.
    pub fn vector(&self) -> Vec2D<T> {
        self.end - self.start
    }

    /// Length (euclidean) of the segment.
    pub fn length(&self) -> T {
        self.vector().length()
    }

    /// Vector of length 1 in the direction `start` to `end`.
    ///
    /// Zero vector for a degenerate (zero length) segment.
    pub fn direction(&self) -> Vec2D<T> {
        self.vector().unit()
    }

    /// True if the segment has no extent along the y axis.
    pub fn horizontal(&self) -> bool {
        self.direction().y == T::zero()
    }

    /// True if the segment has no extent along the x axis.
    pub fn vertical(&self) -> bool {
        self.direction().x == T::zero()
    }

    /// Axis aligned bounding box of the two end points.
    pub fn bounding_box(&self) -> AABB<T> {
        let (min_x, max_x) = min_max(self.start.x, self.end.x);
        let (min_y, max_y) = min_max(self.start.y, self.end.y);
        AABB::new(min_x, min_y, max_x, max_y)
    }

    /// Tests whether `pt` lies on the segment, inclusive of the end points
    /// with tolerance.
    ///
    /// `pt` must be collinear with the segment (cross product with the
    /// segment vector near zero) and its parametric position along each axis
    /// must land within the `start` to `end` span. An axis along which the
    /// segment has exactly zero extent imposes no constraint.
    ///
    /// # Examples
    ///
    /// ```
    /// # use spacehex_geometry::core::math::*;
    /// let segment = LineSegment2D::new(vec2d(-1.0, -1.0), vec2d(2.0, 2.0));
    /// assert!(segment.in_segment(vec2d(0.5, 0.5)));
    /// // collinear but past the end
    /// assert!(!segment.in_segment(vec2d(2.02, 2.02)));
    /// // off the line
    /// assert!(!segment.in_segment(vec2d(-1.01, 1.01)));
    /// ```
    pub fn in_segment(&self, pt: Vec2D<T>) -> bool {
        let v = self.vector();
        let t = pt - self.start;

        if v == Vec2D::zero() {
            // degenerate segment contains only its own point
            return pt == self.start;
        }

        let eps = T::fuzzy_epsilon();
        if !v.perp_dot(t).fuzzy_eq_zero_eps(eps) {
            return false;
        }

        let x_in_span =
            v.x == T::zero() || (t.x / v.x).fuzzy_in_range_eps(T::zero(), T::one(), eps);
        let y_in_span =
            v.y == T::zero() || (t.y / v.y).fuzzy_in_range_eps(T::zero(), T::one(), eps);
        x_in_span && y_in_span
    }

    /// The closest point on this segment to `pt`.
    ///
    /// Projects `pt` orthogonally onto the infinite line through the
    /// segment; when the foot of the projection falls outside the segment
    /// the nearer end point is returned instead.
    ///
    /// A degenerate (zero length) segment is not guarded: the projection
    /// parameter is NaN and the `end` point is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use spacehex_geometry::core::math::*;
    /// let segment = LineSegment2D::new(vec2d(-1.0, -1.0), vec2d(2.0, 2.0));
    /// // perpendicular foot within the span
    /// assert!(segment.closest_point(vec2d(1.0, 0.0)).fuzzy_eq(vec2d(0.5, 0.5)));
    /// // before start, clamps to start
    /// assert!(segment.closest_point(vec2d(-3.0, -2.0)).fuzzy_eq(vec2d(-1.0, -1.0)));
    /// ```
    pub fn closest_point(&self, pt: Vec2D<T>) -> Vec2D<T> {
        let v = self.vector();
        let w = pt - self.start;

        let t = w.dot(v) / v.dot(v);
        let pt_on_line = self.start + v.scale(t);

        if self.in_segment(pt_on_line) {
            return pt_on_line;
        }

        if dist_squared(self.start, pt_on_line) < dist_squared(self.end, pt_on_line) {
            self.start
        } else {
            self.end
        }
    }

    /// The intersection point of this segment with `other`, `None` when the
    /// segments do not intersect.
    ///
    /// Exactly parallel segments (including collinear and degenerate ones)
    /// have no unique line intersection; for those the four end points are
    /// tested for containment in order and the first point lying within both
    /// segments' bounds is returned. Otherwise the intersection of the two
    /// infinite lines is computed and accepted when it lies within both
    /// segments' bounding boxes expanded by the tolerance on all sides.
    ///
    /// The bounding box acceptance is deliberately edge tolerant: a point a
    /// hair past an end point still counts as an intersection.
    ///
    /// # Examples
    ///
    /// ```
    /// # use spacehex_geometry::core::math::*;
    /// let a = LineSegment2D::new(vec2d(-1.0, -1.0), vec2d(1.0, 1.0));
    /// let b = LineSegment2D::new(vec2d(-1.0, 1.0), vec2d(1.0, -1.0));
    /// assert!(a.intersects(b).unwrap().fuzzy_eq(Vec2D::zero()));
    ///
    /// let c = LineSegment2D::new(vec2d(-2.0, -2.0), vec2d(-1.5, -1.5));
    /// assert_eq!(a.intersects(c), None);
    /// ```
    pub fn intersects(&self, other: Self) -> Option<Vec2D<T>> {
        let w = self.direction();
        let v = other.direction();
        let denom = v.perp_dot(w);

        if denom == T::zero() {
            // parallel, collinear, or degenerate: no unique line
            // intersection, fall back to end point containment
            return if self.in_segment(other.start) {
                Some(other.start)
            } else if self.in_segment(other.end) {
                Some(other.end)
            } else if other.in_segment(self.start) {
                Some(self.start)
            } else if other.in_segment(self.end) {
                Some(self.end)
            } else {
                None
            };
        }

        let num = w.perp_dot(other.start) - w.perp_dot(self.start);
        let pos = other.start + v.scale(num / denom);

        let eps = T::fuzzy_epsilon();
        if point_within_aabb_eps(&self.bounding_box(), pos, eps)
            && point_within_aabb_eps(&other.bounding_box(), pos, eps)
        {
            Some(pos)
        } else {
            None
        }
    }
}

impl<T> fmt::Display for LineSegment2D<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineSegment2D(start={}, end={})", self.start, self.end)
    }
}
