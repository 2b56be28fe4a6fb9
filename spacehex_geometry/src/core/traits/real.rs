use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy
/// compared and used with [AABB](crate::AABB) extents.
pub trait Real:
    num_traits::real::Real + FuzzyOrd + std::default::Default + std::fmt::Debug + IndexableNum + 'static
{
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl Real for f32 {
    #[inline]
    fn two() -> Self {
        2.0f32
    }
}

impl Real for f64 {
    #[inline]
    fn two() -> Self {
        2.0f64
    }
}
