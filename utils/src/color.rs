//! Color space conversions.
//!
//! RGB, CMY and CMYK components are in `[0, 1]`. HSV and HSL carry hue in degrees `[0, 360)` in
//! `x` followed by saturation and value or lightness in `[0, 1]`. The CMYK key is stored in `w`.

use crate::{
    matrix::Mat4t,
    num::Float,
    vector::{Vec3t, Vec4t},
};

/// Convert separate 8-bit RGB values to a single packed `0xRRGGBB` value.
#[inline]
#[must_use]
pub fn rgb_to_u32(r: u32, g: u32, b: u32) -> u32 {
    ((r & 0xFF) << 16) | ((g & 0xFF) << 8) | (b & 0xFF)
}

/// Convert a packed `0xRRGGBB` value into separate 8-bit RGB values.
#[inline]
#[must_use]
pub fn u32_to_rgb(value: u32) -> [u32; 3] {
    [(value >> 16) & 0xFF, (value >> 8) & 0xFF, value & 0xFF]
}

/// Convert RGB to HSV.
pub fn rgb_to_hsv<T: Float>(rgb: Vec3t<T>) -> Vec3t<T> {
    let [r, g, b] = rgb.to_array();
    let max = r.max(g.max(b));
    let min = r.min(g.min(b));
    let delta = max - min;

    let sixty = T::from_f64(60.0);
    let full_turn = T::from_f64(360.0);
    let h = if max == min {
        T::ZERO
    } else if max == r {
        (sixty * ((g - b) / delta) + full_turn) % full_turn
    } else if max == g {
        (sixty * ((b - r) / delta) + T::from_f64(120.0)) % full_turn
    } else {
        (sixty * ((r - g) / delta) + T::from_f64(240.0)) % full_turn
    };
    let s = if max == T::ZERO { T::ZERO } else { delta / max };

    Vec3t::new(h, s, max)
}

/// Convert HSV to RGB.
///
/// Hue is truncated to whole degrees and wrapped to one turn. Saturation and value are clamped
/// to `[0, 1]`.
pub fn hsv_to_rgb<T: Float>(hsv: Vec3t<T>) -> Vec3t<T> {
    let h = (hsv.x().trunc() % T::from_f64(360.0)) / T::from_f64(60.0);
    let s = hsv.y().clamp_to(T::ZERO, T::ONE);
    let v = hsv.z().clamp_to(T::ZERO, T::ONE);

    if s == T::ZERO {
        return Vec3t::splat(v);
    }

    let sector = h.floor();
    let f = h - sector;
    let p = v * (T::ONE - s);
    let q = v * (T::ONE - s * f);
    let t = v * (T::ONE - s * (T::ONE - f));

    match sector.to_f64() as i32 {
        0 => Vec3t::new(v, t, p),
        1 => Vec3t::new(q, v, p),
        2 => Vec3t::new(p, v, t),
        3 => Vec3t::new(p, q, v),
        4 => Vec3t::new(t, p, v),
        _ => Vec3t::new(v, p, q),
    }
}

/// Convert HSL to HSV.
pub fn hsl_to_hsv<T: Float>(hsl: Vec3t<T>) -> Vec3t<T> {
    let [h, s, l] = hsl.to_array();
    let v = s * l.min(T::ONE - l) + l;
    let s = if v > T::ZERO { T::TWO - T::TWO * l / v } else { T::ZERO };
    Vec3t::new(h, s, v)
}

/// Convert HSV to HSL.
pub fn hsv_to_hsl<T: Float>(hsv: Vec3t<T>) -> Vec3t<T> {
    let [h, s, v] = hsv.to_array();
    let l = v - v * s / T::TWO;
    let m = l.min(T::ONE - l);
    let s = if m > T::ZERO { (v - l) / m } else { l };
    Vec3t::new(h, s, l)
}

/// Convert RGB to CMY.
#[inline]
pub fn rgb_to_cmy<T: Float>(rgb: Vec3t<T>) -> Vec3t<T> {
    -rgb + T::ONE
}

/// Convert CMY to RGB.
#[inline]
pub fn cmy_to_rgb<T: Float>(cmy: Vec3t<T>) -> Vec3t<T> {
    -cmy + T::ONE
}

/// Convert RGB to CMYK, pulling the shared component out into the key.
pub fn rgb_to_cmyk<T: Float>(rgb: Vec3t<T>) -> Vec4t<T> {
    let cmy = rgb_to_cmy(rgb);
    let key = cmy.x().min(cmy.y().min(cmy.z()));
    Vec4t::from_vec3(cmy - key, key)
}

/// Convert CMYK to RGB.
#[inline]
pub fn cmyk_to_rgb<T: Float>(cmyk: Vec4t<T>) -> Vec3t<T> {
    -(cmyk.xyz() + cmyk.w()) + T::ONE
}

/// Convert RGB to YUV.
pub fn rgb_to_yuv<T: Float>(rgb: Vec3t<T>) -> Vec3t<T> {
    let to_yuv = yuv_matrix([
        [0.299, 0.587, 0.114],
        [-0.147, -0.289, 0.436],
        [0.615, -0.515, -0.100],
    ]);
    (to_yuv * rgb.to_vec4(T::ONE)).xyz()
}

/// Convert YUV to RGB.
pub fn yuv_to_rgb<T: Float>(yuv: Vec3t<T>) -> Vec3t<T> {
    let to_rgb = yuv_matrix([
        [1.0, 0.0, 1.140],
        [1.0, -0.395, -0.581],
        [1.0, 2.032, 0.0],
    ]);
    (to_rgb * yuv.to_vec4(T::ONE)).xyz()
}

fn yuv_matrix<T: Float>(rows: [[f64; 3]; 3]) -> Mat4t<T> {
    let mut matrix = Mat4t::identity();
    for (row, coefficients) in rows.iter().enumerate() {
        for (col, &value) in coefficients.iter().enumerate() {
            matrix[(row, col)] = T::from_f64(value);
        }
    }
    matrix
}
