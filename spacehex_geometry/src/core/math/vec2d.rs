use crate::core::traits::Real;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops;

/// 2D vector or point value.
///
/// `Vec2D` is an immutable value type; every operation returns a new vector.
/// The derived `PartialEq` is exact component equality (floating point
/// rounding is NOT tolerated by `==`) - use [Vec2D::fuzzy_eq] when comparing
/// computed positions.
///
/// When the `serde` feature is enabled the vector serializes as an object
/// with field names `x` and `y`, matching the game protocol's wire format.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vec2D<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vec2D<T>
where
    T: Real,
{
    /// Create a new vector with x and y components.
    pub fn new(x: T, y: T) -> Self {
        Vec2D { x, y }
    }

    /// Create a zero vector (x = 0, y = 0).
    pub fn zero() -> Self {
        Vec2D::new(T::zero(), T::zero())
    }

    /// Unit vector pointing in the negative x direction, (-1, 0).
    pub fn left() -> Self {
        Vec2D::new(-T::one(), T::zero())
    }

    /// Unit vector pointing in the positive x direction, (1, 0).
    pub fn right() -> Self {
        Vec2D::new(T::one(), T::zero())
    }

    /// Unit vector pointing in the positive y direction, (0, 1).
    ///
    /// The y axis points up (mathematical orientation). When rendering to a
    /// screen coordinate system with y growing downward, swap [Vec2D::up]
    /// and [Vec2D::down].
    pub fn up() -> Self {
        Vec2D::new(T::zero(), T::one())
    }

    /// Unit vector pointing in the negative y direction, (0, -1).
    ///
    /// See [Vec2D::up] for the sign convention.
    pub fn down() -> Self {
        Vec2D::new(T::zero(), -T::one())
    }

    /// Uniformly scale the vector by `scale_factor`.
    pub fn scale(&self, scale_factor: T) -> Self {
        vec2d(scale_factor * self.x, scale_factor * self.y)
    }

    /// Dot product.
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Compute the perpendicular dot product (`self.x * other.y - self.y * other.x`).
    pub fn perp_dot(&self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Squared length of the vector.
    pub fn length_squared(&self) -> T {
        self.dot(*self)
    }

    /// Length of the vector, `sqrt(x * x + y * y)`.
    pub fn length(&self) -> T {
        self.dot(*self).sqrt()
    }

    /// Vector of length 1 with the same direction as this vector.
    ///
    /// Returns the zero vector when this vector is exactly zero, so callers
    /// never see a division by zero here.
    ///
    /// # Examples
    ///
    /// ```
    /// # use spacehex_geometry::core::math::*;
    /// # use spacehex_geometry::core::traits::*;
    /// assert!(vec2d(3.0, 4.0).unit().length().fuzzy_eq(1.0));
    /// assert_eq!(Vec2D::<f64>::zero().unit(), Vec2D::zero());
    /// ```
    pub fn unit(&self) -> Self {
        if *self == Self::zero() {
            return Self::zero();
        }

        self.scale(T::one() / self.length())
    }

    /// Create perpendicular vector, `(-y, x)` (a 90 degree rotation).
    pub fn perp(&self) -> Self {
        vec2d(-self.y, self.x)
    }

    /// Angle in radians between this vector and `other`.
    ///
    /// Computed as `acos(dot / (length * other_length))`. Returns 0 when
    /// either vector has zero length. The acos argument is not clamped, so
    /// rounding that pushes it outside `[-1, 1]` yields NaN.
    pub fn angle_to(&self, other: Self) -> T {
        let length = self.length();
        let other_length = other.length();
        if length == T::zero() || other_length == T::zero() {
            return T::zero();
        }

        (self.dot(other) / (length * other_length)).acos()
    }

    /// Project this vector onto `target`.
    ///
    /// Returns the zero vector when `target` is the zero vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use spacehex_geometry::core::math::*;
    /// let v = vec2d(2.0, 3.0);
    /// assert_eq!(v.project_onto(vec2d(1.0, 0.0)), vec2d(2.0, 0.0));
    /// assert_eq!(v.project_onto(Vec2D::zero()), Vec2D::zero());
    /// ```
    pub fn project_onto(&self, target: Self) -> Self {
        let target_dot = target.dot(target);
        if target_dot == T::zero() {
            return Self::zero();
        }

        target.scale(self.dot(target) / target_dot)
    }

    /// Rotate this point around an `origin` point by some `angle` in radians.
    pub fn rotate_about(&self, origin: Self, angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let translated = self - origin;
        vec2d(
            translated.x * c - translated.y * s,
            translated.x * s + translated.y * c,
        ) + origin
    }

    /// Fuzzy equal comparison with another vector using `fuzzy_epsilon` given.
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another vector using `T::fuzzy_epsilon()`.
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

#[inline(always)]
pub fn vec2d<T>(x: T, y: T) -> Vec2D<T>
where
    T: Real,
{
    Vec2D::new(x, y)
}

impl<T> fmt::Display for Vec2D<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?},{:?})", self.x, self.y)
    }
}

macro_rules! ImplBinaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<Vec2D<T>> for Vec2D<T> {
            type Output = Vec2D<T>;
            fn $op_func(self, rhs: Vec2D<T>) -> Self::Output {
                Vec2D::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<&Vec2D<T>> for Vec2D<T> {
            type Output = Vec2D<T>;
            fn $op_func(self, rhs: &Vec2D<T>) -> Self::Output {
                Vec2D::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<'a, 'b, T: Real> ops::$op_trait<&'b Vec2D<T>> for &'a Vec2D<T> {
            type Output = Vec2D<T>;
            fn $op_func(self, rhs: &'b Vec2D<T>) -> Self::Output {
                Vec2D::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Real> ops::$op_trait<Vec2D<T>> for &Vec2D<T> {
            type Output = Vec2D<T>;
            fn $op_func(self, rhs: Vec2D<T>) -> Self::Output {
                Vec2D::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

ImplBinaryOp!(Add, add, +);
ImplBinaryOp!(Sub, sub, -);

// Scalar multiply/divide are not guarded: dividing by zero yields IEEE
// infinity/NaN components.
macro_rules! ImplScalarOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait<T> for Vec2D<T> {
            type Output = Vec2D<T>;
            fn $op_func(self, rhs: T) -> Self::Output {
                Vec2D::new(self.x $op rhs, self.y $op rhs)
            }
        }

        impl<T: Real> ops::$op_trait<T> for &Vec2D<T> {
            type Output = Vec2D<T>;
            fn $op_func(self, rhs: T) -> Self::Output {
                Vec2D::new(self.x $op rhs, self.y $op rhs)
            }
        }
    };
}

ImplScalarOp!(Mul, mul, *);
ImplScalarOp!(Div, div, /);

macro_rules! ImplUnaryOp {
    ($op_trait:ident, $op_func:ident, $op:tt) => {
        impl<T: Real> ops::$op_trait for Vec2D<T> {
            type Output = Vec2D<T>;
            fn $op_func(self) -> Self::Output {
                Vec2D::new($op self.x, $op self.y)
            }
        }

        impl<T: Real> ops::$op_trait for &Vec2D<T> {
            type Output = Vec2D<T>;
            fn $op_func(self) -> Self::Output {
                Vec2D::new($op self.x, $op self.y)
            }
        }
    };
}

ImplUnaryOp!(Neg, neg, -);
