//! Vector, matrix and projection math for real-time graphics.
//!
//! Matrices use the column-vector convention: a point is transformed as `M * v`, translations live
//! in the last column and the bottom row supplies `w`. Coefficients are stored row-major, in the
//! same order the 16-value constructor takes them. Use [`Mat4t::to_cols_array`] when uploading to
//! an API that expects column-major data without a transpose flag.
//!
//! The transform API is unchecked. Singular matrices and zero denominators in projections
//! (`aspect`, `near == far`, `focal_length`) produce IEEE infinities and NaNs instead of errors.
//! Zero-length vectors normalize to zero, so [`Mat4t::look_at`] with a forward direction parallel
//! to `up` yields a zero side and up basis rather than NaNs. Checked variants such as
//! [`Mat4t::try_inverse`] return [`Result`].

#![warn(
    anonymous_parameters,
    bare_trait_objects,
    clippy::branches_sharing_code,
    clippy::map_unwrap_or,
    clippy::match_wildcard_for_single_variants,
    // clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::needless_for_each,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::unreadable_literal,
    clippy::unwrap_used,
    clippy::expect_used,
    deprecated_in_future,
    ellipsis_inclusive_range_patterns,
    future_incompatible,
    missing_copy_implementations,
    missing_debug_implementations,
    // missing_docs,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    rustdoc::bare_urls,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::private_intra_doc_links,
    single_use_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused,
    variant_size_differences
)]

pub mod camera;
pub mod color;
pub mod matrix;
pub mod num;
pub mod vector;

pub use matrix::{DMat3, DMat4, Mat3, Mat3t, Mat4, Mat4t, StereoMatrices};
pub use vector::{DVec2, DVec3, DVec4, Vec2, Vec2t, Vec3, Vec3t, Vec4, Vec4t};

/// Results that can be returned from this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can be returned from this crate.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum Error {
    #[error("matrix is not invertible: determinant is {determinant}")]
    SingularMatrix { determinant: f64 },
    #[error("invalid length: expected {expected} values, found {found}")]
    InvalidLength { expected: usize, found: usize },
}

pub mod prelude {
    //! Most commonly used exports.

    pub use crate::{
        camera::Camera,
        color,
        matrix::{DMat3, DMat4, Mat3, Mat3t, Mat4, Mat4t, StereoMatrices},
        num::{ApproxEq, Degrees, Float, Radians},
        vector::{DVec2, DVec3, DVec4, Vec2, Vec2t, Vec3, Vec3t, Vec4, Vec4t},
        Error, Result,
    };

    // Macros
    pub use crate::{mat3, mat4, vec2, vec3, vec4};
}
