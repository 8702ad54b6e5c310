//! 3x3 and 4x4 matrices and the transform factories built on them.
//!
//! Coefficients are stored row-major (`e[row * N + col]`) and points are column vectors, so a
//! transform reads `M * v` and composes right to left. Factories never validate their input.

use crate::{
    num::Float,
    vector::{Vec2t, Vec3t, Vec4t},
    Error, Result,
};
use std::{
    array, fmt,
    ops::{Add, Div, Index, IndexMut, Mul, MulAssign, Sub},
};

macro_rules! impl_matrix {
    ($({ $Mat:ident, $Vec:ident, $n:literal, $len:literal }),+ $(,)?) => {
        $(
            #[doc = concat!("A ", stringify!($n), "x", stringify!($n), " matrix stored row-major.")]
            #[derive(Debug, Copy, Clone, PartialEq)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            #[must_use]
            #[repr(transparent)]
            pub struct $Mat<T> {
                e: [T; $len],
            }

            impl<T: Float> Default for $Mat<T> {
                fn default() -> Self {
                    Self::identity()
                }
            }

            impl<T: Float> $Mat<T> {
                /// Construct an identity matrix.
                #[inline]
                pub fn identity() -> Self {
                    Self {
                        e: array::from_fn(|i| if i / $n == i % $n { T::ONE } else { T::ZERO }),
                    }
                }

                /// Construct a matrix of zeros.
                #[inline]
                pub fn zero() -> Self {
                    Self { e: [T::ZERO; $len] }
                }

                /// Row `index` as a vector.
                #[inline]
                pub fn row(&self, index: usize) -> $Vec<T> {
                    $Vec::from_array(array::from_fn(|col| self.e[index * $n + col]))
                }

                /// Column `index` as a vector.
                #[inline]
                pub fn col(&self, index: usize) -> $Vec<T> {
                    $Vec::from_array(array::from_fn(|row| self.e[row * $n + index]))
                }

                /// Coefficients in row-major order, as stored.
                #[inline]
                #[must_use]
                pub fn as_rows_array(&self) -> &[T; $len] {
                    &self.e
                }

                /// Coefficients in row-major order, as stored.
                #[inline]
                #[must_use]
                pub fn to_rows_array(self) -> [T; $len] {
                    self.e
                }

                /// Coefficients in column-major order, ready for a graphics API that expects
                /// columns without a transpose flag.
                #[inline]
                #[must_use]
                pub fn to_cols_array(self) -> [T; $len] {
                    self.transpose().e
                }

                /// Create a transposed copy of the matrix.
                #[inline]
                pub fn transpose(&self) -> Self {
                    Self {
                        e: array::from_fn(|i| self.e[(i % $n) * $n + i / $n]),
                    }
                }

                /// Returns whether two matrices are equal given an epsilon.
                #[inline]
                #[must_use]
                pub fn compare(&self, rhs: Self, epsilon: T) -> bool {
                    self.e
                        .iter()
                        .zip(rhs.e.iter())
                        .all(|(&a, &b)| (a - b).abs() <= epsilon)
                }

                /// Create an inverted copy of the matrix, failing when it is singular.
                ///
                /// # Errors
                ///
                /// Returns [`Error::SingularMatrix`] when the determinant is not finite or its
                /// magnitude does not exceed `T::EPSILON`.
                pub fn try_inverse(&self) -> Result<Self> {
                    let det = self.det();
                    if !det.is_finite() || det.abs() <= T::EPSILON {
                        return Err(Error::SingularMatrix {
                            determinant: det.to_f64(),
                        });
                    }
                    Ok(self.inverse_with_det(det))
                }

                /// Create an inverted copy of the matrix.
                ///
                /// Singular matrices produce infinities and NaNs.
                #[inline]
                pub fn inverse(&self) -> Self {
                    self.inverse_with_det(self.det())
                }

                #[inline]
                fn map(&self, f: impl FnMut(T) -> T) -> Self {
                    Self { e: self.e.map(f) }
                }
            }

            impl<T: Float> fmt::Display for $Mat<T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "[")?;
                    for (i, val) in self.e.iter().enumerate() {
                        if i > 0 {
                            if i % $n == 0 {
                                write!(f, "\n ")?;
                            } else {
                                write!(f, ", ")?;
                            }
                        }
                        write!(f, "{val}")?;
                    }
                    write!(f, "]")
                }
            }

            impl<T> Index<(usize, usize)> for $Mat<T> {
                type Output = T;

                fn index(&self, (row, col): (usize, usize)) -> &T {
                    &self.e[row * $n + col]
                }
            }

            impl<T> IndexMut<(usize, usize)> for $Mat<T> {
                fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
                    &mut self.e[row * $n + col]
                }
            }

            impl<T> From<[T; $len]> for $Mat<T> {
                fn from(e: [T; $len]) -> Self {
                    Self { e }
                }
            }

            impl<T: Copy> From<[[T; $n]; $n]> for $Mat<T> {
                fn from(rows: [[T; $n]; $n]) -> Self {
                    Self {
                        e: array::from_fn(|i| rows[i / $n][i % $n]),
                    }
                }
            }

            impl<T> From<$Mat<T>> for [T; $len] {
                fn from(matrix: $Mat<T>) -> Self {
                    matrix.e
                }
            }

            impl<T: Float> TryFrom<&[T]> for $Mat<T> {
                type Error = Error;

                fn try_from(slice: &[T]) -> std::result::Result<Self, Self::Error> {
                    let e = <[T; $len]>::try_from(slice).map_err(|_| Error::InvalidLength {
                        expected: $len,
                        found: slice.len(),
                    })?;
                    Ok(Self { e })
                }
            }

            impl<T: Float> Add<T> for $Mat<T> {
                type Output = Self;

                fn add(self, rhs: T) -> Self::Output {
                    self.map(|val| val + rhs)
                }
            }

            impl<T: Float> Sub<T> for $Mat<T> {
                type Output = Self;

                fn sub(self, rhs: T) -> Self::Output {
                    self.map(|val| val - rhs)
                }
            }

            impl<T: Float> Mul<T> for $Mat<T> {
                type Output = Self;

                fn mul(self, rhs: T) -> Self::Output {
                    self.map(|val| val * rhs)
                }
            }

            impl<T: Float> Div<T> for $Mat<T> {
                type Output = Self;

                fn div(self, rhs: T) -> Self::Output {
                    self.map(|val| val / rhs)
                }
            }

            impl<T: Float> Mul for $Mat<T> {
                type Output = Self;

                fn mul(self, rhs: Self) -> Self::Output {
                    Self {
                        e: array::from_fn(|i| {
                            let (row, col) = (i / $n, i % $n);
                            (0..$n).map(|k| self.e[row * $n + k] * rhs.e[k * $n + col]).sum()
                        }),
                    }
                }
            }

            impl<T: Float> MulAssign for $Mat<T> {
                fn mul_assign(&mut self, rhs: Self) {
                    *self = *self * rhs;
                }
            }

            /// Matrix-vector product without any divide.
            impl<T: Float> Mul<$Vec<T>> for $Mat<T> {
                type Output = $Vec<T>;

                fn mul(self, v: $Vec<T>) -> Self::Output {
                    $Vec::from_array(array::from_fn(|row| self.row(row).dot(v)))
                }
            }
        )+
    };
}

impl_matrix! {
    { Mat3t, Vec3t, 3, 9 },
    { Mat4t, Vec4t, 4, 16 },
}

macro_rules! impl_scalar_lhs {
    ($($ty:ty => $($Mat:ident),+);+ $(;)?) => {
        $($(
            impl Mul<$Mat<$ty>> for $ty {
                type Output = $Mat<$ty>;

                fn mul(self, rhs: $Mat<$ty>) -> Self::Output {
                    rhs * self
                }
            }
        )+)+
    };
}

impl_scalar_lhs! {
    f32 => Mat3t, Mat4t;
    f64 => Mat3t, Mat4t;
}

/// Single-precision 3x3 matrix.
pub type Mat3 = Mat3t<f32>;
/// Single-precision 4x4 matrix.
pub type Mat4 = Mat4t<f32>;
/// Double-precision 3x3 matrix.
pub type DMat3 = Mat3t<f64>;
/// Double-precision 4x4 matrix.
pub type DMat4 = Mat4t<f64>;

/// Constructs a new [Mat3t].
#[macro_export]
macro_rules! mat3 {
    () => {
        $crate::matrix::Mat3t::identity()
    };
    ($val:expr) => {
        $crate::matrix::Mat3t::from($val)
    };
    ($r0:expr, $r1:expr, $r2:expr $(,)?) => {
        $crate::matrix::Mat3t::from([$r0, $r1, $r2])
    };
}

/// Constructs a new [Mat4t].
#[macro_export]
macro_rules! mat4 {
    () => {
        $crate::matrix::Mat4t::identity()
    };
    ($val:expr) => {
        $crate::matrix::Mat4t::from($val)
    };
    ($r0:expr, $r1:expr, $r2:expr, $r3:expr $(,)?) => {
        $crate::matrix::Mat4t::from([$r0, $r1, $r2, $r3])
    };
}

#[inline]
fn deg_to_rad<T: Float>(degrees: T) -> T {
    T::PI * degrees / T::from_f64(180.0)
}

impl<T: Float> Mat3t<T> {
    /// Create a 3x3 matrix from 9 values in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        e00: T,
        e01: T,
        e02: T,
        e10: T,
        e11: T,
        e12: T,
        e20: T,
        e21: T,
        e22: T,
    ) -> Self {
        Self {
            e: [e00, e01, e02, e10, e11, e12, e20, e21, e22],
        }
    }

    /// Create a 3x3 matrix from given rows.
    #[inline]
    pub fn from_rows(r0: Vec3t<T>, r1: Vec3t<T>, r2: Vec3t<T>) -> Self {
        Self::from([r0.to_array(), r1.to_array(), r2.to_array()])
    }

    /// Create a scale matrix.
    #[inline]
    pub fn scaling(x: T, y: T, z: T) -> Self {
        let o = T::ZERO;
        Self::new(x, o, o, o, y, o, o, o, z)
    }

    /// Create a scale matrix from a vector of factors.
    #[inline]
    pub fn scaling_vec(scale: Vec3t<T>) -> Self {
        Self::scaling(scale.x(), scale.y(), scale.z())
    }

    /// Create a rotation matrix about the x-axis for the given angle in degrees.
    #[inline]
    pub fn rotation_x(degrees: T) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        let (o, i) = (T::ZERO, T::ONE);
        Self::new(i, o, o, o, c, s, o, -s, c)
    }

    /// Create a rotation matrix about the y-axis for the given angle in degrees.
    #[inline]
    pub fn rotation_y(degrees: T) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        let (o, i) = (T::ZERO, T::ONE);
        Self::new(c, o, -s, o, i, o, s, o, c)
    }

    /// Create a rotation matrix about the z-axis for the given angle in degrees.
    #[inline]
    pub fn rotation_z(degrees: T) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        let (o, i) = (T::ZERO, T::ONE);
        Self::new(c, s, o, -s, c, o, o, o, i)
    }

    /// Calculate the determinant.
    #[must_use]
    pub fn det(&self) -> T {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.e;
        a00 * (a11 * a22 - a12 * a21) - a01 * (a10 * a22 - a12 * a20)
            + a02 * (a10 * a21 - a11 * a20)
    }

    /// Create an inverted copy of the matrix using a precomputed determinant.
    pub fn inverse_with_det(&self, det: T) -> Self {
        let [a00, a01, a02, a10, a11, a12, a20, a21, a22] = self.e;
        let inv_det = T::ONE / det;
        Self::new(
            a11 * a22 - a12 * a21,
            a02 * a21 - a01 * a22,
            a01 * a12 - a02 * a11,
            a12 * a20 - a10 * a22,
            a00 * a22 - a02 * a20,
            a02 * a10 - a00 * a12,
            a10 * a21 - a11 * a20,
            a01 * a20 - a00 * a21,
            a00 * a11 - a01 * a10,
        ) * inv_det
    }
}

impl<T: Float> From<Mat3t<T>> for Mat4t<T> {
    /// Embeds a 3x3 matrix into the upper-left block of an identity.
    fn from(m: Mat3t<T>) -> Self {
        let mut matrix = Self::identity();
        for row in 0..3 {
            for col in 0..3 {
                matrix[(row, col)] = m[(row, col)];
            }
        }
        matrix
    }
}

/// The four matrices needed to render a stereo pair.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct StereoMatrices<T> {
    pub left_view: Mat4t<T>,
    pub right_view: Mat4t<T>,
    pub left_projection: Mat4t<T>,
    pub right_projection: Mat4t<T>,
}

impl<T: Float> Mat4t<T> {
    /// Create a 4x4 matrix from 16 values in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        e00: T,
        e01: T,
        e02: T,
        e03: T,
        e10: T,
        e11: T,
        e12: T,
        e13: T,
        e20: T,
        e21: T,
        e22: T,
        e23: T,
        e30: T,
        e31: T,
        e32: T,
        e33: T,
    ) -> Self {
        Self {
            e: [
                e00, e01, e02, e03, e10, e11, e12, e13, e20, e21, e22, e23, e30, e31, e32, e33,
            ],
        }
    }

    /// Create a 4x4 matrix from given rows.
    #[inline]
    pub fn from_rows(r0: Vec4t<T>, r1: Vec4t<T>, r2: Vec4t<T>, r3: Vec4t<T>) -> Self {
        Self::from([r0.to_array(), r1.to_array(), r2.to_array(), r3.to_array()])
    }

    /// Create a 4x4 matrix from four 3-element rows, each followed by its last-column value.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn from_vec3_rows(
        r0: Vec3t<T>,
        e03: T,
        r1: Vec3t<T>,
        e13: T,
        r2: Vec3t<T>,
        e23: T,
        r3: Vec3t<T>,
        e33: T,
    ) -> Self {
        Self::from_rows(r0.to_vec4(e03), r1.to_vec4(e13), r2.to_vec4(e23), r3.to_vec4(e33))
    }

    /// Create an affine 4x4 matrix from three 3-element rows and their last-column values. The
    /// bottom row is `(0, 0, 0, 1)`.
    #[inline]
    pub fn from_affine_rows(
        r0: Vec3t<T>,
        e03: T,
        r1: Vec3t<T>,
        e13: T,
        r2: Vec3t<T>,
        e23: T,
    ) -> Self {
        Self::from_vec3_rows(r0, e03, r1, e13, r2, e23, Vec3t::origin(), T::ONE)
    }

    /// The upper-left 3x3 block.
    #[inline]
    pub fn upper_left(&self) -> Mat3t<T> {
        Mat3t::from_rows(self.row(0).xyz(), self.row(1).xyz(), self.row(2).xyz())
    }

    /// Create a translation matrix.
    #[inline]
    pub fn translation(x: T, y: T, z: T) -> Self {
        let mut matrix = Self::identity();
        matrix[(0, 3)] = x;
        matrix[(1, 3)] = y;
        matrix[(2, 3)] = z;
        matrix
    }

    /// Create a translation matrix for the given offset.
    #[inline]
    pub fn translation_vec(offset: Vec3t<T>) -> Self {
        Self::translation(offset.x(), offset.y(), offset.z())
    }

    /// Create a scale matrix.
    #[inline]
    pub fn scaling(x: T, y: T, z: T) -> Self {
        let mut matrix = Self::identity();
        matrix[(0, 0)] = x;
        matrix[(1, 1)] = y;
        matrix[(2, 2)] = z;
        matrix
    }

    /// Create a scale matrix from a vector of factors.
    #[inline]
    pub fn scaling_vec(scale: Vec3t<T>) -> Self {
        Self::scaling(scale.x(), scale.y(), scale.z())
    }

    /// Create a scale matrix with the same factor on every axis.
    #[inline]
    pub fn uniform_scaling(scale: T) -> Self {
        Self::scaling(scale, scale, scale)
    }

    /// Create a rotation matrix about the x-axis for the given angle in degrees.
    #[inline]
    pub fn rotation_x(degrees: T) -> Self {
        Self::from(Mat3t::rotation_x(degrees))
    }

    /// Create a rotation matrix about the y-axis for the given angle in degrees.
    #[inline]
    pub fn rotation_y(degrees: T) -> Self {
        Self::from(Mat3t::rotation_y(degrees))
    }

    /// Create a rotation matrix about the z-axis for the given angle in degrees.
    #[inline]
    pub fn rotation_z(degrees: T) -> Self {
        Self::from(Mat3t::rotation_z(degrees))
    }

    /// Create a rotation matrix about an arbitrary axis for the given angle in degrees.
    ///
    /// The axis is used as given and should be unit length.
    pub fn rotation_axis(axis: Vec3t<T>, degrees: T) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        let om = T::ONE - c;
        let [x, y, z] = axis.to_array();
        Self::from_affine_rows(
            Vec3t::new(c + om * x * x, om * x * y + s * z, om * x * z - s * y),
            T::ZERO,
            Vec3t::new(om * x * y - s * z, c + om * y * y, om * y * z + s * x),
            T::ZERO,
            Vec3t::new(om * x * z + s * y, om * y * z - s * x, c + om * z * z),
            T::ZERO,
        )
    }

    /// Create a symmetric perspective projection matrix mapping depth to `[-1, 1]`.
    pub fn perspective(fovy_degrees: T, aspect: T, near: T, far: T) -> Self {
        let cot = T::ONE / (deg_to_rad(fovy_degrees) / T::TWO).tan();
        let depth = far - near;
        let o = T::ZERO;
        Self::new(
            cot / aspect,
            o,
            o,
            o,
            o,
            cot,
            o,
            o,
            o,
            o,
            -(far + near) / depth,
            -T::TWO * far * near / depth,
            o,
            o,
            -T::ONE,
            o,
        )
    }

    /// Create an off-center perspective projection matrix.
    pub fn frustum(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let (width, height, depth) = (right - left, top - bottom, far - near);
        let o = T::ZERO;
        Self::new(
            T::TWO * near / width,
            o,
            (right + left) / width,
            o,
            o,
            T::TWO * near / height,
            (top + bottom) / height,
            o,
            o,
            o,
            -(far + near) / depth,
            -T::TWO * far * near / depth,
            o,
            o,
            -T::ONE,
            o,
        )
    }

    /// Create an orthographic projection matrix.
    pub fn ortho(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let (width, height, depth) = (right - left, top - bottom, far - near);
        let mut matrix = Self::identity();
        matrix[(0, 0)] = T::TWO / width;
        matrix[(1, 1)] = T::TWO / height;
        matrix[(2, 2)] = -T::TWO / depth;
        matrix[(0, 3)] = -(right + left) / width;
        matrix[(1, 3)] = -(top + bottom) / height;
        matrix[(2, 3)] = -(far + near) / depth;
        matrix
    }

    /// Create a right-handed view matrix looking from `eye` towards `at`.
    ///
    /// A forward direction parallel to `up` yields zero side and up rows.
    pub fn look_at(eye: Vec3t<T>, at: Vec3t<T>, up: Vec3t<T>) -> Self {
        let f = (at - eye).normalized();
        let s = f.cross(up).normalized();
        let u = s.cross(f).normalized();
        Self::from_affine_rows(s, -s.dot(eye), u, -u.dot(eye), -f, f.dot(eye))
    }

    /// Create a reflection about the plane through `point` with unit `normal`.
    pub fn mirror(point: Vec3t<T>, normal: Vec3t<T>) -> Self {
        let k = point.dot(normal);
        let [x, y, z] = normal.to_array();
        let two = T::TWO;
        Self::from_affine_rows(
            Vec3t::new(T::ONE - two * x * x, -two * x * y, -two * x * z),
            two * k * x,
            Vec3t::new(-two * x * y, T::ONE - two * y * y, -two * y * z),
            two * k * y,
            Vec3t::new(-two * x * z, -two * y * z, T::ONE - two * z * z),
            two * k * z,
        )
    }

    /// Create view and projection matrices for a parallel-axis asymmetric frustum stereo pair.
    ///
    /// Both eyes share the `focal_length` zero-parallax plane. Each view is the shared
    /// `look_at` shifted by half of `eye_separation`.
    #[allow(clippy::too_many_arguments)]
    pub fn stereo_look_at_and_projection(
        eye: Vec3t<T>,
        at: Vec3t<T>,
        up: Vec3t<T>,
        fovy_degrees: T,
        aspect: T,
        near: T,
        far: T,
        focal_length: T,
        eye_separation: T,
    ) -> StereoMatrices<T> {
        let wd2 = near * (deg_to_rad(fovy_degrees) / T::TWO).tan();
        let shift = eye_separation * near / focal_length;
        let half_width = aspect * wd2;

        let view = Self::look_at(eye, at, up);
        let half_separation = eye_separation / T::TWO;

        StereoMatrices {
            left_view: Self::translation(-half_separation, T::ZERO, T::ZERO) * view,
            right_view: Self::translation(half_separation, T::ZERO, T::ZERO) * view,
            left_projection: Self::frustum(
                -half_width - shift,
                half_width - shift,
                -wd2,
                wd2,
                near,
                far,
            ),
            right_projection: Self::frustum(
                -half_width + shift,
                half_width + shift,
                -wd2,
                wd2,
                near,
                far,
            ),
        }
    }

    /// Calculate the determinant.
    #[must_use]
    pub fn det(&self) -> T {
        let (s, c) = self.sub_determinants();
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    /// Create an inverted copy of the matrix using a precomputed determinant.
    pub fn inverse_with_det(&self, det: T) -> Self {
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] =
            self.e;
        let (s, c) = self.sub_determinants();
        let inv_det = T::ONE / det;
        Self::new(
            a11 * c[5] - a12 * c[4] + a13 * c[3],
            -a01 * c[5] + a02 * c[4] - a03 * c[3],
            a31 * s[5] - a32 * s[4] + a33 * s[3],
            -a21 * s[5] + a22 * s[4] - a23 * s[3],
            -a10 * c[5] + a12 * c[2] - a13 * c[1],
            a00 * c[5] - a02 * c[2] + a03 * c[1],
            -a30 * s[5] + a32 * s[2] - a33 * s[1],
            a20 * s[5] - a22 * s[2] + a23 * s[1],
            a10 * c[4] - a11 * c[2] + a13 * c[0],
            -a00 * c[4] + a01 * c[2] - a03 * c[0],
            a30 * s[4] - a31 * s[2] + a33 * s[0],
            -a20 * s[4] + a21 * s[2] - a23 * s[0],
            -a10 * c[3] + a11 * c[1] - a12 * c[0],
            a00 * c[3] - a01 * c[1] + a02 * c[0],
            -a30 * s[3] + a31 * s[1] - a32 * s[0],
            a20 * s[3] - a21 * s[1] + a22 * s[0],
        ) * inv_det
    }

    /// 2x2 determinants of the top two rows (`s`) and bottom two rows (`c`).
    fn sub_determinants(&self) -> ([T; 6], [T; 6]) {
        let [a00, a01, a02, a03, a10, a11, a12, a13, a20, a21, a22, a23, a30, a31, a32, a33] =
            self.e;
        let s = [
            a00 * a11 - a10 * a01,
            a00 * a12 - a10 * a02,
            a00 * a13 - a10 * a03,
            a01 * a12 - a11 * a02,
            a01 * a13 - a11 * a03,
            a02 * a13 - a12 * a03,
        ];
        let c = [
            a20 * a31 - a30 * a21,
            a20 * a32 - a30 * a22,
            a20 * a33 - a30 * a23,
            a21 * a32 - a31 * a22,
            a21 * a33 - a31 * a23,
            a22 * a33 - a32 * a23,
        ];
        (s, c)
    }
}

/// Transforms a point with an implicit `w = 1` and divides by the resulting `w`.
///
/// Unlike the [`Vec4t`] product, this applies the perspective divide.
impl<T: Float> Mul<Vec3t<T>> for Mat4t<T> {
    type Output = Vec3t<T>;

    fn mul(self, v: Vec3t<T>) -> Self::Output {
        let clip = self * v.to_vec4(T::ONE);
        clip.xyz() / clip.w()
    }
}

/// Transforms `(x, y, 0, 1)` and keeps `x` and `y`, without a divide.
impl<T: Float> Mul<Vec2t<T>> for Mat4t<T> {
    type Output = Vec2t<T>;

    fn mul(self, v: Vec2t<T>) -> Self::Output {
        (self * v.to_vec4(T::ZERO, T::ONE)).xy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        vec2, vec3, vec4,
        vector::{DVec3, DVec4},
    };
    use approx::assert_relative_eq;

    const EPS: f64 = 1e-4;

    fn sample() -> DMat4 {
        mat4!(
            [2.0, 0.0, 1.0, 3.0],
            [1.0, 3.0, 0.0, 1.0],
            [0.0, 1.0, 4.0, 2.0],
            [1.0, 0.0, 2.0, 5.0],
        )
    }

    #[test]
    fn matrix_multiply_matrix() {
        let m1: DMat4 = mat4!(
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0]
        );
        let m2 = m1;
        assert_eq!(
            m1 * m2,
            mat4!(
                [34.0, 44.0, 54.0, 64.0],
                [82.0, 108.0, 134.0, 160.0],
                [34.0, 44.0, 54.0, 64.0],
                [82.0, 108.0, 134.0, 160.0]
            )
        );
    }

    #[test]
    fn matrix_multiply_vector() {
        let m: DMat4 = mat4!(
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0]
        );
        let v = vec4!(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m * v, vec4!(30.0, 70.0, 30.0, 70.0));
    }

    #[test]
    fn construction() {
        let m = DMat4::new(
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0,
        );
        assert_eq!(m[(0, 3)], 4.0);
        assert_eq!(m[(3, 0)], 13.0);
        assert_eq!(m.row(1), vec4!(5.0, 6.0, 7.0, 8.0));
        assert_eq!(m.col(1), vec4!(2.0, 6.0, 10.0, 14.0));
        assert_eq!(
            m,
            DMat4::from_rows(
                vec4!(1.0, 2.0, 3.0, 4.0),
                vec4!(5.0, 6.0, 7.0, 8.0),
                vec4!(9.0, 10.0, 11.0, 12.0),
                vec4!(13.0, 14.0, 15.0, 16.0),
            )
        );
        assert_eq!(
            m,
            DMat4::from_vec3_rows(
                vec3!(1.0, 2.0, 3.0),
                4.0,
                vec3!(5.0, 6.0, 7.0),
                8.0,
                vec3!(9.0, 10.0, 11.0),
                12.0,
                vec3!(13.0, 14.0, 15.0),
                16.0,
            )
        );
        let affine = DMat4::from_affine_rows(
            vec3!(1.0, 0.0, 0.0),
            5.0,
            vec3!(0.0, 1.0, 0.0),
            6.0,
            vec3!(0.0, 0.0, 1.0),
            7.0,
        );
        assert_eq!(affine, DMat4::translation(5.0, 6.0, 7.0));
        assert_eq!(DMat4::default(), mat4!());
        assert_eq!(DMat4::identity().det(), 1.0);
    }

    #[test]
    fn flat_layouts() {
        let t = Mat4::translation(1.0, 2.0, 3.0);
        let rows = t.to_rows_array();
        assert_eq!((rows[3], rows[7], rows[11]), (1.0, 2.0, 3.0));
        let cols = t.to_cols_array();
        assert_eq!(&cols[12..15], &[1.0, 2.0, 3.0]);
        assert_eq!(Mat4::from(rows), t);
        assert_eq!(t.as_rows_array(), &rows);
    }

    #[test]
    fn try_from_slice() {
        let values = [1.0f32; 16];
        assert!(Mat4::try_from(&values[..]).is_ok());
        assert!(matches!(
            Mat4::try_from(&values[..12]),
            Err(Error::InvalidLength {
                expected: 16,
                found: 12
            })
        ));
        assert!(matches!(
            Mat3::try_from(&values[..]),
            Err(Error::InvalidLength {
                expected: 9,
                found: 16
            })
        ));
    }

    #[test]
    fn display() {
        assert_eq!(Mat3::identity().to_string(), "[1, 0, 0\n 0, 1, 0\n 0, 0, 1]");
        assert_eq!(
            Mat4::translation(1.0, 2.0, 3.5).to_string(),
            "[1, 0, 0, 1\n 0, 1, 0, 2\n 0, 0, 1, 3.5\n 0, 0, 0, 1]"
        );
    }

    #[test]
    fn scalar_arithmetic() {
        let m = DMat4::identity();
        assert_eq!((m + 1.0)[(0, 1)], 1.0);
        assert_eq!((m - 1.0)[(0, 0)], 0.0);
        assert_eq!((m * 3.0)[(2, 2)], 3.0);
        assert_eq!((3.0 * m)[(2, 2)], 3.0);
        assert_eq!((m / 2.0)[(3, 3)], 0.5);
        assert_eq!((m * 0.0), DMat4::zero());
    }

    #[test]
    fn identity_is_neutral() {
        let m = sample();
        assert_eq!(DMat4::identity() * m, m);
        assert_eq!(m * DMat4::identity(), m);
        let mut n = m;
        n *= DMat4::identity();
        assert_eq!(n, m);
    }

    #[test]
    fn transpose() {
        let m = sample();
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose()[(0, 3)], m[(3, 0)]);
        assert_eq!(m.transpose().to_cols_array(), m.to_rows_array());
    }

    #[test]
    fn determinant() {
        assert_eq!(sample().det(), 68.0);
        assert_eq!(sample().transpose().det(), 68.0);
        let m: DMat4 = mat4!(
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [2.0, 6.0, 4.0, 8.0],
            [3.0, 1.0, 1.0, 2.0],
        );
        assert_eq!(m.det(), 72.0);
        assert_eq!(DMat4::scaling(2.0, 3.0, 4.0).det(), 24.0);
        let rotation = DMat4::rotation_axis(vec3!(0.0, 0.6, 0.8), 33.0);
        assert_relative_eq!(rotation.det(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn inverse() {
        let m = sample();
        let inv = m.inverse();
        assert!((m * inv).compare(DMat4::identity(), EPS));
        assert!((inv * m).compare(DMat4::identity(), EPS));
        assert_eq!(m.inverse_with_det(m.det()), inv);

        let t = DMat4::translation(1.0, -2.0, 3.0);
        assert!(t.inverse().compare(DMat4::translation(-1.0, 2.0, -3.0), EPS));
        let s = DMat4::scaling(2.0, 4.0, 8.0);
        assert!(s.inverse().compare(DMat4::scaling(0.5, 0.25, 0.125), EPS));
        let r = DMat4::rotation_y(37.0);
        assert!(r.inverse().compare(r.transpose(), EPS));
    }

    #[test]
    fn checked_inverse() {
        let singular: DMat4 = mat4!(
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0]
        );
        assert_eq!(
            singular.try_inverse(),
            Err(Error::SingularMatrix { determinant: 0.0 })
        );
        assert!(singular.inverse().e.iter().any(|val| !val.is_finite()));
        assert!(matches!(sample().try_inverse(), Ok(inv) if inv == sample().inverse()));
        assert!(Mat3::scaling(1.0, 0.0, 1.0).try_inverse().is_err());
    }

    #[test]
    fn translation_moves_points() {
        let t = DMat4::translation_vec(vec3!(1.0, 2.0, 3.0));
        assert_eq!(t * DVec3::origin(), vec3!(1.0, 2.0, 3.0));
        assert_eq!(t * vec4!(0.0, 0.0, 0.0, 0.0), vec4!(0.0, 0.0, 0.0, 0.0));
        assert_eq!(t * vec2!(1.0, 1.0), vec2!(2.0, 3.0));
    }

    #[test]
    fn vec3_product_divides_by_w() {
        let mut m = DMat4::identity();
        m[(3, 3)] = 2.0;
        assert_eq!(m * vec3!(2.0, 4.0, 6.0), vec3!(1.0, 2.0, 3.0));
        assert_eq!(m * vec4!(2.0, 4.0, 6.0, 1.0), vec4!(2.0, 4.0, 6.0, 2.0));
        assert_eq!(m * vec2!(2.0, 4.0), vec2!(2.0, 4.0));
    }

    #[test]
    fn scaling() {
        assert_eq!(DMat4::uniform_scaling(2.0), DMat4::scaling(2.0, 2.0, 2.0));
        assert_eq!(
            DMat4::scaling_vec(vec3!(1.0, 2.0, 3.0)) * vec3!(1.0, 1.0, 1.0),
            vec3!(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn axis_rotations() {
        assert_eq!(DMat4::rotation_x(0.0), DMat4::identity());
        assert!(DMat4::rotation_x(360.0).compare(DMat4::identity(), EPS));
        let quarter = 90.0;
        assert!((DMat4::rotation_x(quarter) * DVec3::up()).compare(DVec3::forward(), EPS));
        assert!((DMat4::rotation_y(quarter) * DVec3::backward()).compare(DVec3::left(), EPS));
        assert!((DMat4::rotation_z(quarter) * DVec3::right()).compare(DVec3::down(), EPS));
    }

    #[test]
    fn rotation_about_principal_axes() {
        for degrees in [15.0, 90.0, -120.0] {
            assert!(DMat4::rotation_axis(DVec3::right(), degrees)
                .compare(DMat4::rotation_x(degrees), EPS));
            assert!(DMat4::rotation_axis(DVec3::up(), degrees)
                .compare(DMat4::rotation_y(degrees), EPS));
            assert!(DMat4::rotation_axis(DVec3::backward(), degrees)
                .compare(DMat4::rotation_z(degrees), EPS));
        }
    }

    #[test]
    fn ortho() {
        let m = DMat4::ortho(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0);
        assert_eq!(m * DVec3::origin(), DVec3::origin());
        assert_eq!(m * vec3!(1.0, 1.0, 1.0), vec3!(1.0, 1.0, -1.0));

        let m = DMat4::ortho(0.0, 800.0, 0.0, 600.0, -10.0, 10.0);
        assert!((m * vec3!(800.0, 600.0, 10.0)).compare(vec3!(1.0, 1.0, -1.0), EPS));
    }

    #[test]
    fn perspective() {
        let m = DMat4::perspective(60.0, 16.0 / 9.0, 0.1, 1000.0);
        let clip = m * vec4!(0.0, 0.0, -0.1, 1.0);
        assert_relative_eq!(clip.z() / clip.w(), -1.0, epsilon = EPS);
        assert_relative_eq!((m * vec3!(0.0, 0.0, -0.1)).z(), -1.0, epsilon = EPS);
        assert_relative_eq!((m * vec3!(0.0, 0.0, -1000.0)).z(), 1.0, epsilon = EPS);
        assert_eq!(m[(3, 2)], -1.0);
        assert_eq!(m[(3, 3)], 0.0);
    }

    #[test]
    fn symmetric_frustum_matches_perspective() {
        let (fovy, aspect, near, far) = (45.0, 4.0 / 3.0, 0.5, 50.0);
        let top = near * (deg_to_rad(fovy) / 2.0f64).tan();
        let right = top * aspect;
        let frustum = DMat4::frustum(-right, right, -top, top, near, far);
        assert!(frustum.compare(DMat4::perspective(fovy, aspect, near, far), EPS));
    }

    #[test]
    fn look_at() {
        let eye = vec3!(0.0, 0.0, 5.0);
        let view = DMat4::look_at(eye, DVec3::origin(), DVec3::up());
        assert!((view * eye).compare(DVec3::origin(), EPS));
        assert!((view * DVec3::origin()).compare(vec3!(0.0, 0.0, -5.0), EPS));
        assert!((view * vec3!(1.0, 0.0, 5.0)).compare(vec3!(1.0, 0.0, 0.0), EPS));
    }

    #[test]
    fn mirror() {
        let m = DMat4::mirror(vec3!(0.0, 1.0, 0.0), DVec3::up());
        assert!((m * vec3!(1.0, 3.0, 2.0)).compare(vec3!(1.0, -1.0, 2.0), EPS));
        let n = vec3!(1.0, 2.0, 2.0).normalized();
        let m = DMat4::mirror(vec3!(3.0, -1.0, 0.5), n);
        let p = vec3!(-4.0, 7.0, 2.5);
        assert!((m * (m * p)).compare(p, EPS));
        assert!((m * m).compare(DMat4::identity(), EPS));
    }

    #[test]
    fn stereo_without_separation() {
        let (eye, at, up) = (vec3!(0.0, 1.0, 4.0), DVec3::origin(), DVec3::up());
        let stereo =
            DMat4::stereo_look_at_and_projection(eye, at, up, 60.0, 1.5, 0.1, 100.0, 4.0, 0.0);
        assert_eq!(stereo.left_view, stereo.right_view);
        assert_eq!(stereo.left_projection, stereo.right_projection);
        assert_eq!(stereo.left_view, DMat4::look_at(eye, at, up));
        assert!(stereo
            .left_projection
            .compare(DMat4::perspective(60.0, 1.5, 0.1, 100.0), EPS));
    }

    #[test]
    fn stereo_eyes_are_offset() {
        let (eye, at, up) = (vec3!(0.0, 0.0, 4.0), DVec3::origin(), DVec3::up());
        let separation = 0.2;
        let stereo = DMat4::stereo_look_at_and_projection(
            eye, at, up, 60.0, 1.5, 0.1, 100.0, 4.0, separation,
        );
        assert!((stereo.left_view * eye).compare(vec3!(-0.1, 0.0, 0.0), EPS));
        assert!((stereo.right_view * eye).compare(vec3!(0.1, 0.0, 0.0), EPS));

        let left_skew = stereo.left_projection[(0, 2)];
        let right_skew = stereo.right_projection[(0, 2)];
        assert!(left_skew < 0.0 && right_skew > 0.0);
        assert_relative_eq!(left_skew, -right_skew, epsilon = 1e-12);
        assert_eq!(stereo.left_projection[(1, 1)], stereo.right_projection[(1, 1)]);
    }

    #[test]
    fn degenerate_inputs_are_unchecked() {
        assert_eq!(DMat4::perspective(60.0, 0.0, 0.1, 100.0)[(0, 0)], f64::INFINITY);
        assert!(!DMat4::ortho(-1.0, 1.0, -1.0, 1.0, 1.0, 1.0)[(2, 2)].is_finite());

        let (eye, at, up) = (vec3!(0.0, 0.0, 4.0), DVec3::origin(), DVec3::up());
        let stereo =
            DMat4::stereo_look_at_and_projection(eye, at, up, 60.0, 1.5, 0.1, 100.0, 0.0, 0.2);
        assert!(stereo.left_projection[(0, 2)].is_nan());
        assert!(stereo.right_projection[(0, 2)].is_nan());

        let view = DMat4::look_at(DVec3::origin(), DVec3::up(), DVec3::up());
        assert_eq!(view.row(0), DVec4::origin());
        assert_eq!(view.row(1), DVec4::origin());
        assert_eq!(view.row(2), vec4!(0.0, -1.0, 0.0, 0.0));
        assert!(view.e.iter().all(|val| val.is_finite()));
    }

    #[test]
    fn mat3() {
        let m: DMat3 = mat3!([2.0, 0.0, 1.0], [1.0, 3.0, 0.0], [0.0, 1.0, 4.0]);
        assert_eq!(m.det(), 25.0);
        assert_eq!(m.transpose().det(), 25.0);
        assert!((m * m.inverse()).compare(DMat3::identity(), EPS));
        assert_eq!(m.inverse_with_det(25.0), m.inverse());
        assert_eq!(m * vec3!(1.0, 1.0, 1.0), vec3!(3.0, 4.0, 5.0));
        assert_eq!(
            DMat3::from_rows(vec3!(2.0, 0.0, 1.0), vec3!(1.0, 3.0, 0.0), vec3!(0.0, 1.0, 4.0)),
            m
        );
        assert_eq!(DMat3::scaling_vec(vec3!(2.0, 3.0, 4.0)).det(), 24.0);
        assert!((DMat3::rotation_z(90.0) * DVec3::right()).compare(DVec3::down(), EPS));
    }

    #[test]
    fn mat3_embedding() {
        let m: DMat3 = mat3!([2.0, 0.0, 1.0], [1.0, 3.0, 0.0], [0.0, 1.0, 4.0]);
        let embedded = DMat4::from(m);
        assert_eq!(embedded.upper_left(), m);
        assert_eq!(embedded.row(3), vec4!(0.0, 0.0, 0.0, 1.0));
        assert_eq!(embedded.col(3), vec4!(0.0, 0.0, 0.0, 1.0));
        assert_eq!(embedded.det(), 25.0);
        assert_eq!(DMat4::rotation_x(30.0).upper_left(), DMat3::rotation_x(30.0));
    }
}
