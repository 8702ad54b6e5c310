//! Three triangles spinning about different axes, arranged as a Triforce.

use lnc_utils::prelude::*;

const SQRT_3: f32 = 1.732_050_8;
const SCALE: f32 = 1.75;

/// The shared triangle, in model space.
const VERTICES: [Vec3; 3] = [
    Vec3::new(0.5, 1.0, 0.0),
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(1.0, 0.0, 0.0),
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Spin {
    X,
    Y,
    Z,
}

#[derive(Debug, Copy, Clone)]
struct Placement {
    label: &'static str,
    offset: Vec3,
    spin: Spin,
}

const PLACEMENTS: [Placement; 3] = [
    Placement {
        label: "top",
        offset: Vec3::new(0.0, 0.5, 0.0),
        spin: Spin::X,
    },
    Placement {
        label: "left",
        offset: Vec3::new(-0.375, -0.5, 0.0),
        spin: Spin::Z,
    },
    Placement {
        label: "right",
        offset: Vec3::new(0.375, -0.5, 0.0),
        spin: Spin::Y,
    },
];

/// One triangle of a rendered frame.
#[derive(Debug, Copy, Clone, PartialEq)]
#[must_use]
pub(crate) struct TriangleFrame {
    pub(crate) label: &'static str,
    /// Full model to clip-space transform.
    pub(crate) transform: Mat4,
    /// Vertices after the transform and perspective divide.
    pub(crate) vertices: [Vec3; 3],
}

#[derive(Debug, Copy, Clone)]
#[must_use]
pub(crate) struct Triforce {
    degrees_per_second: f32,
    anim_time: f32,
    playing: bool,
    projection: Mat4,
    to_origin: Mat4,
    rotation_x: Mat4,
    rotation_y: Mat4,
    rotation_z: Mat4,
}

impl Triforce {
    pub(crate) fn new(degrees_per_second: f32) -> Self {
        let mut triforce = Self {
            degrees_per_second,
            anim_time: 0.0,
            playing: true,
            projection: Mat4::identity(),
            to_origin: Mat4::identity(),
            rotation_x: Mat4::identity(),
            rotation_y: Mat4::identity(),
            rotation_z: Mat4::identity(),
        };
        triforce.animate(0.0);
        triforce
    }

    #[inline]
    pub(crate) fn anim_time(&self) -> f32 {
        self.anim_time
    }

    #[inline]
    pub(crate) fn is_playing(&self) -> bool {
        self.playing
    }

    /// Advance the animation clock by `delta` seconds while playing and rebuild the spins.
    pub(crate) fn animate(&mut self, delta: f32) {
        if self.playing {
            self.anim_time += delta;
        }
        let angle = self.degrees_per_second * self.anim_time;
        self.to_origin = Mat4::translation(-0.5, 0.5, 0.0);
        self.rotation_x = Mat4::rotation_x(angle);
        self.rotation_y = Mat4::rotation_y(angle);
        self.rotation_z = Mat4::rotation_z(-angle);
    }

    pub(crate) fn toggle(&mut self) {
        self.playing = !self.playing;
        tracing::debug!(playing = self.playing, "toggled animation");
    }

    pub(crate) fn reset(&mut self) {
        self.anim_time = 0.0;
    }

    /// Fit the projection to a window, keeping the whole Triforce visible.
    pub(crate) fn resize(&mut self, width: u32, height: u32) {
        let ratio = width as f32 / height as f32;
        self.projection = if ratio * SQRT_3 >= 2.0 {
            Mat4::ortho(-ratio * SQRT_3, ratio * SQRT_3, -SQRT_3, SQRT_3, -10.0, 10.0)
        } else {
            Mat4::ortho(-2.0, 2.0, -2.0 / ratio, 2.0 / ratio, -10.0, 10.0)
        };
        tracing::debug!(width, height, "projection resized");
    }

    #[inline]
    pub(crate) fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Transform every triangle for the current animation state.
    pub(crate) fn frame(&self) -> [TriangleFrame; 3] {
        let model_view = Mat4::translation(0.0, -1.0, 0.0);
        let scaling = Mat4::uniform_scaling(SCALE);
        PLACEMENTS.map(|placement| {
            let animation = match placement.spin {
                Spin::X => self.rotation_x,
                Spin::Y => self.rotation_y,
                Spin::Z => self.rotation_z,
            };
            let transform = self.projection
                * model_view
                * Mat4::translation_vec(placement.offset)
                * animation
                * scaling
                * self.to_origin;
            TriangleFrame {
                label: placement.label,
                transform,
                vertices: VERTICES.map(|vertex| transform * vertex),
            }
        })
    }
}
