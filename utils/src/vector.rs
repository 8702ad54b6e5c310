//! Two-, three- and four-dimensional vectors.

use crate::{num::Float, Error};
use std::{
    fmt,
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
    },
};

macro_rules! impl_vector {
    ($({
        $Vec:ident, $dim:expr => $($field:ident: $idx:expr),+
    }),+ $(,)?) => {
        $(
            #[doc = concat!("A ", stringify!($dim), "-dimensional vector.")]
            #[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            #[must_use]
            #[repr(transparent)]
            pub struct $Vec<T> {
                e: [T; $dim],
            }

            impl<T: Float> Default for $Vec<T> {
                fn default() -> Self {
                    Self::origin()
                }
            }

            impl<T: Float> $Vec<T> {
                #[doc = concat!("Create a ", stringify!($dim), "-dimensional vector from given coordinates.")]
                #[inline]
                pub const fn new($($field: T),+) -> Self {
                    Self { e: [$($field),+] }
                }

                #[doc = concat!("Create a ", stringify!($dim), "-dimensional vector with every component set to `value`.")]
                #[inline]
                pub fn splat(value: T) -> Self {
                    Self { e: [value; $dim] }
                }

                #[doc = concat!("Create a ", stringify!($dim), "-dimensional vector at the origin.")]
                #[inline]
                pub fn origin() -> Self {
                    Self::splat(T::ZERO)
                }

                #[doc = concat!("Create a ", stringify!($dim), "-dimensional vector from an array of components.")]
                #[inline]
                pub const fn from_array(e: [T; $dim]) -> Self {
                    Self { e }
                }

                $(
                    #[doc = concat!("The `", stringify!($field), "` component.")]
                    #[inline]
                    #[must_use]
                    pub fn $field(&self) -> T {
                        self.e[$idx]
                    }
                )+

                /// Components as an array reference, in `x, y, z, w` order.
                #[inline]
                #[must_use]
                pub fn as_array(&self) -> &[T; $dim] {
                    &self.e
                }

                /// Components as an array, in `x, y, z, w` order.
                #[inline]
                #[must_use]
                pub fn to_array(self) -> [T; $dim] {
                    self.e
                }

                /// Returns whether two vectors are equal given an epsilon.
                #[inline]
                #[must_use]
                pub fn compare(&self, rhs: Self, epsilon: T) -> bool {
                    self.e
                        .iter()
                        .zip(rhs.e.iter())
                        .all(|(&a, &b)| (a - b).abs() <= epsilon)
                }

                /// Calculate the dot-product between two vectors.
                #[inline]
                #[must_use]
                pub fn dot(&self, rhs: Self) -> T {
                    self.e.iter().zip(rhs.e.iter()).map(|(&a, &b)| a * b).sum()
                }

                /// Calculate the squared magnitude of the vector.
                #[inline]
                #[must_use]
                pub fn sq_length(&self) -> T {
                    self.dot(*self)
                }

                /// Calculate the magnitude of the vector.
                #[inline]
                #[must_use]
                pub fn length(&self) -> T {
                    self.sq_length().sqrt()
                }

                /// Create a unit-length copy of the vector. A zero vector stays zero.
                #[inline]
                pub fn normalized(&self) -> Self {
                    let length = self.length();
                    if length == T::ZERO {
                        Self::origin()
                    } else {
                        *self / length
                    }
                }

                /// Create the Euclidean distance between two vectors.
                #[inline]
                #[must_use]
                pub fn distance(&self, rhs: Self) -> T {
                    (*self - rhs).length()
                }

                /// Create a copy with each component restricted to `min..=max`.
                #[inline]
                pub fn clamp(&self, min: T, max: T) -> Self {
                    self.map(|val| val.clamp_to(min, max))
                }

                /// Component-wise minimum of two vectors.
                #[inline]
                pub fn min(&self, rhs: Self) -> Self {
                    self.zip_map(rhs, Float::min)
                }

                /// Component-wise maximum of two vectors.
                #[inline]
                pub fn max(&self, rhs: Self) -> Self {
                    self.zip_map(rhs, Float::max)
                }

                #[doc = concat!("Create a ", stringify!($dim), "-dimensional vector with components in `[0, 1)`.")]
                #[cfg(feature = "rand")]
                #[inline]
                pub fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> Self
                where
                    rand::distributions::Standard: rand::distributions::Distribution<T>,
                {
                    Self { e: std::array::from_fn(|_| rng.gen()) }
                }

                #[inline]
                fn map(&self, f: impl FnMut(T) -> T) -> Self {
                    Self { e: self.e.map(f) }
                }

                #[inline]
                fn zip_map(&self, rhs: Self, mut f: impl FnMut(T, T) -> T) -> Self {
                    Self { e: std::array::from_fn(|i| f(self.e[i], rhs.e[i])) }
                }
            }

            impl<T: Float> fmt::Display for $Vec<T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "[")?;
                    for (i, val) in self.e.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{val}")?;
                    }
                    write!(f, "]")
                }
            }

            impl<T> IntoIterator for $Vec<T> {
                type Item = T;
                type IntoIter = std::array::IntoIter<T, $dim>;

                fn into_iter(self) -> Self::IntoIter {
                    self.e.into_iter()
                }
            }

            impl<T> Index<usize> for $Vec<T> {
                type Output = T;

                fn index(&self, index: usize) -> &T {
                    &self.e[index]
                }
            }

            impl<T> IndexMut<usize> for $Vec<T> {
                fn index_mut(&mut self, index: usize) -> &mut T {
                    &mut self.e[index]
                }
            }

            impl<T> From<[T; $dim]> for $Vec<T> {
                fn from(e: [T; $dim]) -> Self {
                    Self { e }
                }
            }

            impl<T> From<$Vec<T>> for [T; $dim] {
                fn from(vector: $Vec<T>) -> Self {
                    vector.e
                }
            }

            impl<T: Float> TryFrom<&[T]> for $Vec<T> {
                type Error = Error;

                fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
                    let e = <[T; $dim]>::try_from(slice).map_err(|_| Error::InvalidLength {
                        expected: $dim,
                        found: slice.len(),
                    })?;
                    Ok(Self { e })
                }
            }

            impl<T: Float> Add for $Vec<T> {
                type Output = Self;

                fn add(self, rhs: Self) -> Self::Output {
                    self.zip_map(rhs, |a, b| a + b)
                }
            }

            impl<T: Float> Add<T> for $Vec<T> {
                type Output = Self;

                fn add(self, rhs: T) -> Self::Output {
                    self.map(|val| val + rhs)
                }
            }

            impl<T: Float> AddAssign for $Vec<T> {
                fn add_assign(&mut self, rhs: Self) {
                    *self = *self + rhs;
                }
            }

            impl<T: Float> Sub for $Vec<T> {
                type Output = Self;

                fn sub(self, rhs: Self) -> Self::Output {
                    self.zip_map(rhs, |a, b| a - b)
                }
            }

            impl<T: Float> Sub<T> for $Vec<T> {
                type Output = Self;

                fn sub(self, rhs: T) -> Self::Output {
                    self.map(|val| val - rhs)
                }
            }

            impl<T: Float> SubAssign for $Vec<T> {
                fn sub_assign(&mut self, rhs: Self) {
                    *self = *self - rhs;
                }
            }

            impl<T: Float> Mul for $Vec<T> {
                type Output = Self;

                fn mul(self, rhs: Self) -> Self::Output {
                    self.zip_map(rhs, |a, b| a * b)
                }
            }

            impl<T: Float> Mul<T> for $Vec<T> {
                type Output = Self;

                fn mul(self, rhs: T) -> Self::Output {
                    self.map(|val| val * rhs)
                }
            }

            impl<T: Float> MulAssign<T> for $Vec<T> {
                fn mul_assign(&mut self, rhs: T) {
                    *self = *self * rhs;
                }
            }

            impl<T: Float> Div for $Vec<T> {
                type Output = Self;

                fn div(self, rhs: Self) -> Self::Output {
                    self.zip_map(rhs, |a, b| a / b)
                }
            }

            impl<T: Float> Div<T> for $Vec<T> {
                type Output = Self;

                fn div(self, rhs: T) -> Self::Output {
                    self.map(|val| val / rhs)
                }
            }

            impl<T: Float> DivAssign<T> for $Vec<T> {
                fn div_assign(&mut self, rhs: T) {
                    *self = *self / rhs;
                }
            }

            impl<T: Float> Neg for $Vec<T> {
                type Output = Self;

                fn neg(self) -> Self::Output {
                    self.map(|val| -val)
                }
            }
        )+
    };
}

impl_vector! {
    { Vec2t, 2 => x: 0, y: 1 },
    { Vec3t, 3 => x: 0, y: 1, z: 2 },
    { Vec4t, 4 => x: 0, y: 1, z: 2, w: 3 },
}

macro_rules! impl_scalar_lhs {
    ($($ty:ty => $($Vec:ident),+);+ $(;)?) => {
        $($(
            impl Mul<$Vec<$ty>> for $ty {
                type Output = $Vec<$ty>;

                fn mul(self, rhs: $Vec<$ty>) -> Self::Output {
                    rhs * self
                }
            }
        )+)+
    };
}

impl_scalar_lhs! {
    f32 => Vec2t, Vec3t, Vec4t;
    f64 => Vec2t, Vec3t, Vec4t;
}

/// Single-precision 2D vector.
pub type Vec2 = Vec2t<f32>;
/// Single-precision 3D vector.
pub type Vec3 = Vec3t<f32>;
/// Single-precision 4D vector.
pub type Vec4 = Vec4t<f32>;
/// Double-precision 2D vector.
pub type DVec2 = Vec2t<f64>;
/// Double-precision 3D vector.
pub type DVec3 = Vec3t<f64>;
/// Double-precision 4D vector.
pub type DVec4 = Vec4t<f64>;

/// Constructs a new [Vec2t].
#[macro_export]
macro_rules! vec2 {
    () => {
        $crate::vector::Vec2t::origin()
    };
    ($val:expr) => {
        $crate::vector::Vec2t::from($val)
    };
    ($x:expr, $y:expr $(,)?) => {
        $crate::vector::Vec2t::new($x, $y)
    };
}

/// Constructs a new [Vec3t].
#[macro_export]
macro_rules! vec3 {
    () => {
        $crate::vector::Vec3t::origin()
    };
    ($val:expr) => {
        $crate::vector::Vec3t::from($val)
    };
    ($x:expr, $y:expr, $z:expr $(,)?) => {
        $crate::vector::Vec3t::new($x, $y, $z)
    };
}

/// Constructs a new [Vec4t].
#[macro_export]
macro_rules! vec4 {
    () => {
        $crate::vector::Vec4t::origin()
    };
    ($val:expr) => {
        $crate::vector::Vec4t::from($val)
    };
    ($xyz:expr, $w:expr $(,)?) => {
        $crate::vector::Vec4t::from_vec3($xyz, $w)
    };
    ($x:expr, $y:expr, $z:expr, $w:expr $(,)?) => {
        $crate::vector::Vec4t::new($x, $y, $z, $w)
    };
}

impl<T: Float> Vec2t<T> {
    /// The red channel, aliasing `x`.
    #[inline]
    #[must_use]
    pub fn r(&self) -> T {
        self.e[0]
    }

    /// The green channel, aliasing `y`.
    #[inline]
    #[must_use]
    pub fn g(&self) -> T {
        self.e[1]
    }

    /// Create a 3D vector from a 2D vector.
    #[inline]
    pub fn to_vec3(self, z: T) -> Vec3t<T> {
        Vec3t::from_vec2(self, z)
    }

    /// Create a 4D vector from a 2D vector.
    #[inline]
    pub fn to_vec4(self, z: T, w: T) -> Vec4t<T> {
        Vec4t::from_vec2(self, z, w)
    }
}

impl<T: Float> Vec3t<T> {
    /// The red channel, aliasing `x`.
    #[inline]
    #[must_use]
    pub fn r(&self) -> T {
        self.e[0]
    }

    /// The green channel, aliasing `y`.
    #[inline]
    #[must_use]
    pub fn g(&self) -> T {
        self.e[1]
    }

    /// The blue channel, aliasing `z`.
    #[inline]
    #[must_use]
    pub fn b(&self) -> T {
        self.e[2]
    }

    /// The `x` and `y` components.
    #[inline]
    pub fn xy(&self) -> Vec2t<T> {
        Vec2t::new(self.e[0], self.e[1])
    }

    /// Create a 3D vector from a 2D vector and a `z` component.
    #[inline]
    pub fn from_vec2(vector: Vec2t<T>, z: T) -> Self {
        Self::new(vector.x(), vector.y(), z)
    }

    /// Create a 4D vector from a 3D vector.
    #[inline]
    pub fn to_vec4(self, w: T) -> Vec4t<T> {
        Vec4t::from_vec3(self, w)
    }

    /// Create a 3D unit vector pointing up.
    #[inline]
    pub fn up() -> Self {
        Self::new(T::ZERO, T::ONE, T::ZERO)
    }

    /// Create a 3D unit vector pointing down.
    #[inline]
    pub fn down() -> Self {
        Self::new(T::ZERO, -T::ONE, T::ZERO)
    }

    /// Create a 3D unit vector pointing left.
    #[inline]
    pub fn left() -> Self {
        Self::new(-T::ONE, T::ZERO, T::ZERO)
    }

    /// Create a 3D unit vector pointing right.
    #[inline]
    pub fn right() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO)
    }

    /// Create a 3D unit vector pointing forward, down the negative `z` axis.
    #[inline]
    pub fn forward() -> Self {
        Self::new(T::ZERO, T::ZERO, -T::ONE)
    }

    /// Create a 3D unit vector pointing backward.
    #[inline]
    pub fn backward() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ONE)
    }

    /// Calculate the cross-product between two vectors.
    #[inline]
    pub fn cross(&self, rhs: Self) -> Self {
        let [x, y, z] = self.e;
        let [rx, ry, rz] = rhs.e;
        Self::new(y * rz - z * ry, z * rx - x * rz, x * ry - y * rx)
    }

    /// Reflect the vector about the unit normal `n`: `a - 2(a·n)n`.
    #[inline]
    pub fn reflect(&self, n: Self) -> Self {
        *self - n * (self.dot(n) * T::TWO)
    }

    /// Refract the vector through a surface using Snell's law.
    ///
    /// `self` points towards the surface and `normal` is the unit normal pointing away from it.
    /// `ior` is the ratio of the material's index of refraction to the outside medium. A positive
    /// `self·normal` means the ray is leaving the material. Returns `None` on total internal
    /// reflection.
    #[must_use]
    pub fn refract(&self, normal: Self, ior: T) -> Option<Self> {
        let cos_i = self.dot(normal);
        let sign = if cos_i < T::ZERO { -T::ONE } else { T::ONE };
        let n = if cos_i < T::ZERO { T::ONE / ior } else { ior };
        let sin_theta_sq = n * n * (T::ONE - cos_i * cos_i);
        if sin_theta_sq > T::ONE {
            return None;
        }
        let c = n * cos_i - sign * (T::ONE - sin_theta_sq).sqrt();
        Some(*self * n - normal * c)
    }
}

#[cfg(feature = "rand")]
impl<T: Float> Vec3t<T>
where
    rand::distributions::Standard: rand::distributions::Distribution<T>,
{
    /// Create a random point inside the unit sphere.
    pub fn random_point_in_sphere<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let p = Self::new(rand11(rng), rand11(rng), rand11(rng));
            if p.sq_length() <= T::ONE {
                return p;
            }
        }
    }

    /// Create a random point inside the positive octant of the unit sphere.
    pub fn random_point_in_hemisphere<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let p = Self::random(rng);
            if p.sq_length() <= T::ONE {
                return p;
            }
        }
    }

    /// Create a random point inside the unit disc on the `z = 0` plane.
    pub fn random_point_in_disc<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let p = Self::new(rand11(rng), rand11(rng), T::ZERO);
            if p.sq_length() <= T::ONE {
                return p;
            }
        }
    }

    /// Create a random unit vector, uniformly distributed on the sphere.
    pub fn random_unit_vector<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let angle = T::TWO * T::PI * rng.gen::<T>();
        let z = rand11(rng);
        let r = (T::ONE - z * z).sqrt();
        let (sin, cos) = angle.sin_cos();
        Self::new(r * cos, r * sin, z)
    }
}

/// A random value in `[-1, 1)`.
#[cfg(feature = "rand")]
fn rand11<T: Float, R: rand::Rng + ?Sized>(rng: &mut R) -> T
where
    rand::distributions::Standard: rand::distributions::Distribution<T>,
{
    T::TWO * rng.gen::<T>() - T::ONE
}

impl<T: Float> Vec4t<T> {
    /// The red channel, aliasing `x`.
    #[inline]
    #[must_use]
    pub fn r(&self) -> T {
        self.e[0]
    }

    /// The green channel, aliasing `y`.
    #[inline]
    #[must_use]
    pub fn g(&self) -> T {
        self.e[1]
    }

    /// The blue channel, aliasing `z`.
    #[inline]
    #[must_use]
    pub fn b(&self) -> T {
        self.e[2]
    }

    /// The alpha channel, aliasing `w`.
    #[inline]
    #[must_use]
    pub fn a(&self) -> T {
        self.e[3]
    }

    /// The `x` and `y` components.
    #[inline]
    pub fn xy(&self) -> Vec2t<T> {
        Vec2t::new(self.e[0], self.e[1])
    }

    /// The `x`, `y` and `z` components, without a perspective divide.
    #[inline]
    pub fn xyz(&self) -> Vec3t<T> {
        Vec3t::new(self.e[0], self.e[1], self.e[2])
    }

    /// Create a 4D vector from a 2D vector.
    #[inline]
    pub fn from_vec2(vector: Vec2t<T>, z: T, w: T) -> Self {
        Self::new(vector.x(), vector.y(), z, w)
    }

    /// Create a 4D vector from a 3D vector.
    #[inline]
    pub fn from_vec3(vector: Vec3t<T>, w: T) -> Self {
        Self::new(vector.x(), vector.y(), vector.z(), w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::ApproxEq;
    use approx::assert_relative_eq;

    #[test]
    fn accessors_and_aliases() {
        let v = vec4!(1.0f32, 2.0, 3.0, 4.0);
        assert_eq!((v.x(), v.y(), v.z(), v.w()), (1.0, 2.0, 3.0, 4.0));
        assert_eq!((v.r(), v.g(), v.b(), v.a()), (1.0, 2.0, 3.0, 4.0));
        assert_eq!(v.xyz(), vec3!(1.0, 2.0, 3.0));
        assert_eq!(v.xy(), vec2!(1.0, 2.0));
        assert_eq!(v[3], 4.0);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn arithmetic() {
        let a = vec3!(1.0f32, 2.0, 3.0);
        let b = vec3!(4.0f32, 5.0, 6.0);
        assert_eq!(a + b, vec3!(5.0, 7.0, 9.0));
        assert_eq!(b - a, vec3!(3.0, 3.0, 3.0));
        assert_eq!(a * b, vec3!(4.0, 10.0, 18.0));
        assert_eq!(b / a, vec3!(4.0, 2.5, 2.0));
        assert_eq!(a * 2.0, vec3!(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, vec3!(2.0, 4.0, 6.0));
        assert_eq!(a + 1.0, vec3!(2.0, 3.0, 4.0));
        assert_eq!(a - 1.0, vec3!(0.0, 1.0, 2.0));
        assert_eq!(-a, vec3!(-1.0, -2.0, -3.0));

        let mut c = a;
        c += b;
        c *= 0.5;
        assert_eq!(c, vec3!(2.5, 3.5, 4.5));
    }

    #[test]
    fn dot_cross_length() {
        let x = Vec3::right();
        let y = Vec3::up();
        assert_eq!(x.dot(y), 0.0);
        assert_eq!(x.cross(y), Vec3::backward());
        assert_eq!(vec3!(3.0f32, 4.0, 0.0).length(), 5.0);
        assert_eq!(vec2!(3.0f64, 4.0).sq_length(), 25.0);
        assert_relative_eq!(vec4!(1.0f32, 1.0, 1.0, 1.0).normalized().length(), 1.0);
    }

    #[test]
    fn normalize_zero_vector() {
        assert_eq!(Vec3::origin().normalized(), Vec3::origin());
        assert_eq!(DVec2::origin().normalized(), DVec2::origin());
    }

    #[test]
    fn clamp_min_max() {
        let v = vec3!(-2.0f32, 0.5, 3.0);
        assert_eq!(v.clamp(0.0, 1.0), vec3!(0.0, 0.5, 1.0));
        assert_eq!(v.min(Vec3::splat(0.0)), vec3!(-2.0, 0.0, 0.0));
        assert_eq!(v.max(Vec3::splat(0.0)), vec3!(0.0, 0.5, 3.0));
    }

    #[test]
    fn reflect() {
        let incoming = vec3!(1.0f32, -1.0, 0.0);
        assert_eq!(incoming.reflect(Vec3::up()), vec3!(1.0, 1.0, 0.0));
    }

    #[test]
    fn refract_through_glass() {
        let straight = vec3!(0.0f32, -1.0, 0.0);
        let refracted = straight.refract(Vec3::up(), 1.5);
        assert!(refracted.map_or(false, |r| r.compare(straight, 1e-6)));

        let angled = vec3!(0.8f32, -0.6, 0.0);
        let refracted = angled.refract(Vec3::up(), 1.5);
        assert!(refracted.map_or(false, |r| {
            r.length().is_approx_eq(1.0, 1e-5) && r.x() < angled.x()
        }));
    }

    #[test]
    fn refract_total_internal_reflection() {
        let leaving = vec3!(0.8f32, 0.6, 0.0);
        assert!(leaving.refract(Vec3::up(), 1.5).is_none());
    }

    #[test]
    fn conversions() {
        let v = Vec3::try_from(&[1.0f32, 2.0, 3.0][..]);
        assert!(matches!(v, Ok(v) if v == vec3!(1.0, 2.0, 3.0)));
        let err = Vec4::try_from(&[1.0f32, 2.0][..]);
        assert!(matches!(
            err,
            Err(Error::InvalidLength {
                expected: 4,
                found: 2
            })
        ));
        assert_eq!(vec4!(vec3!(1.0f32, 2.0, 3.0), 1.0), vec4!(1.0, 2.0, 3.0, 1.0));
        assert_eq!(vec2!(1.0f32, 2.0).to_vec4(3.0, 4.0), vec4!(1.0, 2.0, 3.0, 4.0));
        assert_eq!(<[f32; 2]>::from(vec2!(5.0f32, 6.0)), [5.0, 6.0]);
    }

    #[test]
    fn display() {
        assert_eq!(vec3!(1.0f32, 2.5, -3.0).to_string(), "[1, 2.5, -3]");
    }

    #[cfg(feature = "rand")]
    #[test]
    fn random_points() {
        use rand::{rngs::StdRng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            assert!(Vec3::random_point_in_sphere(&mut rng).sq_length() <= 1.0);
            let disc = Vec3::random_point_in_disc(&mut rng);
            assert!(disc.sq_length() <= 1.0 && disc.z() == 0.0);
            let hemisphere = Vec3::random_point_in_hemisphere(&mut rng);
            assert!(hemisphere.min(Vec3::origin()) == Vec3::origin());
            assert_relative_eq!(Vec3::random_unit_vector(&mut rng).length(), 1.0, epsilon = 1e-5);
            let v = Vec4::random(&mut rng);
            assert!(v.to_array().iter().all(|c| (0.0..1.0).contains(c)));
        }
    }
}
