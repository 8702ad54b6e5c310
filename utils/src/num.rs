//! Scalar traits and angle types.

use std::{
    fmt::{Debug, Display},
    iter::Sum,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign},
};

/// Floating-point scalar used as the component type of vectors and matrices.
///
/// Implemented for `f32` and `f64`.
pub trait Float:
    Copy
    + Debug
    + Display
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Sum
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const PI: Self;
    const EPSILON: Self;

    /// Converts from an `f64` constant, rounding if needed.
    fn from_f64(value: f64) -> Self;
    /// Widens into an `f64`.
    fn to_f64(self) -> f64;

    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn floor(self) -> Self;
    fn trunc(self) -> Self;
    fn tan(self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn is_finite(self) -> bool;

    /// Returns the lesser of two values, ignoring NaN like `f32::min`.
    fn min(self, rhs: Self) -> Self;
    /// Returns the greater of two values, ignoring NaN like `f32::max`.
    fn max(self, rhs: Self) -> Self;

    /// Restricts a value to `min..=max`.
    #[inline]
    fn clamp_to(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

macro_rules! impl_float {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl Float for $ty {
                const ZERO: $ty = 0.0;
                const ONE: $ty = 1.0;
                const TWO: $ty = 2.0;
                const PI: $ty = std::$ty::consts::PI;
                const EPSILON: $ty = $ty::EPSILON;

                #[allow(trivial_numeric_casts)]
                #[inline]
                fn from_f64(value: f64) -> $ty {
                    value as $ty
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    f64::from(self)
                }

                #[inline]
                fn sqrt(self) -> $ty {
                    $ty::sqrt(self)
                }

                #[inline]
                fn abs(self) -> $ty {
                    $ty::abs(self)
                }

                #[inline]
                fn floor(self) -> $ty {
                    $ty::floor(self)
                }

                #[inline]
                fn trunc(self) -> $ty {
                    $ty::trunc(self)
                }

                #[inline]
                fn tan(self) -> $ty {
                    $ty::tan(self)
                }

                #[inline]
                fn sin_cos(self) -> ($ty, $ty) {
                    $ty::sin_cos(self)
                }

                #[inline]
                fn is_finite(self) -> bool {
                    $ty::is_finite(self)
                }

                #[inline]
                fn min(self, rhs: $ty) -> $ty {
                    $ty::min(self, rhs)
                }

                #[inline]
                fn max(self, rhs: $ty) -> $ty {
                    $ty::max(self, rhs)
                }
            }
        )+
    };
}

impl_float!(f32, f64);

/// Epsilon comparison between values of the same shape.
pub trait ApproxEq<Rhs = Self> {
    type Epsilon;

    fn is_approx_eq(&self, rhs: Rhs, epsilon: Self::Epsilon) -> bool;
}

impl ApproxEq for f32 {
    type Epsilon = f32;

    fn is_approx_eq(&self, rhs: f32, epsilon: f32) -> bool {
        (self - rhs).abs() <= epsilon
    }
}

impl ApproxEq for f64 {
    type Epsilon = f64;

    fn is_approx_eq(&self, rhs: f64, epsilon: f64) -> bool {
        (self - rhs).abs() <= epsilon
    }
}

/// An angle in radians.
#[derive(
    Default,
    Debug,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    derive_more::From,
    derive_more::Into,
    derive_more::Deref,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Mul,
    derive_more::MulAssign,
    derive_more::Div,
    derive_more::DivAssign,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Neg,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use]
#[repr(transparent)]
pub struct Radians(f32);

impl Radians {
    /// Creates `Radians` from a raw value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Returns the value as a primitive type.
    #[inline]
    #[must_use]
    pub fn get(self) -> f32 {
        self.0
    }
}

impl From<Degrees> for Radians {
    /// Converts `Degrees` into `Radians`.
    fn from(degrees: Degrees) -> Self {
        Radians(degrees.0.to_radians())
    }
}

/// An angle in degrees.
#[derive(
    Default,
    Debug,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    derive_more::From,
    derive_more::Into,
    derive_more::Deref,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Mul,
    derive_more::MulAssign,
    derive_more::Div,
    derive_more::DivAssign,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Neg,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use]
#[repr(transparent)]
pub struct Degrees(f32);

impl Degrees {
    /// Creates `Degrees` from a raw value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Returns the value as a primitive type.
    #[inline]
    #[must_use]
    pub fn get(self) -> f32 {
        self.0
    }

    /// Creates a copy restricted to `min..=max`.
    #[inline]
    pub fn clamped(self, min: Degrees, max: Degrees) -> Self {
        Self(self.0.clamp(min.0, max.0))
    }

    /// Convert into `Radians`.
    #[inline]
    pub fn to_radians(self) -> Radians {
        self.into()
    }
}

impl From<Radians> for Degrees {
    /// Converts `Radians` into `Degrees`.
    fn from(radians: Radians) -> Self {
        Degrees(radians.0.to_degrees())
    }
}
