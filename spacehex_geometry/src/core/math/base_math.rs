use super::Vec2D;
use crate::core::traits::Real;
use static_aabb2d_index::AABB;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use spacehex_geometry::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Distance squared between the points `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Vec2D<T>, p1: Vec2D<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Midpoint of a line segment defined by `p0` to `p1`.
#[inline]
pub fn midpoint<T>(p0: Vec2D<T>, p1: Vec2D<T>) -> Vec2D<T>
where
    T: Real,
{
    Vec2D::new((p0.x + p1.x) / T::two(), (p0.y + p1.y) / T::two())
}

/// Returns the point on the line segment going from `p0` to `p1` at
/// parametric value `t`.
#[inline]
pub fn point_from_parametric<T>(p0: Vec2D<T>, p1: Vec2D<T>, t: T) -> Vec2D<T>
where
    T: Real,
{
    p0 + (p1 - p0).scale(t)
}

/// Tests if `point` lies within `aabb` expanded by `epsilon` on all sides.
///
/// # Examples
///
/// ```
/// # use spacehex_geometry::core::math::*;
/// # use spacehex_geometry::AABB;
/// let aabb = AABB::new(0.0, 0.0, 1.0, 1.0);
/// assert!(point_within_aabb_eps(&aabb, vec2d(0.5, 0.5), 1e-7));
/// assert!(point_within_aabb_eps(&aabb, vec2d(1.0, 1.0), 1e-7));
/// assert!(!point_within_aabb_eps(&aabb, vec2d(1.1, 0.5), 1e-7));
/// ```
#[inline]
pub fn point_within_aabb_eps<T>(aabb: &AABB<T>, point: Vec2D<T>, epsilon: T) -> bool
where
    T: Real,
{
    point.x.fuzzy_in_range_eps(aabb.min_x, aabb.max_x, epsilon)
        && point.y.fuzzy_in_range_eps(aabb.min_y, aabb.max_y, epsilon)
}
