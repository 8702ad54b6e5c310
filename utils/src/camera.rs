//! First-person camera.

use crate::{
    matrix::Mat4,
    num::Degrees,
    vec3,
    vector::{Vec2, Vec3},
};

const DEFAULT_YAW: Degrees = Degrees::new(-90.0);
const DEFAULT_PITCH: Degrees = Degrees::new(0.0);
const DEFAULT_MOVE_SPEED: f32 = 0.015;
const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.15;

const PITCH_LIMIT: Degrees = Degrees::new(89.0);

/// A yaw/pitch camera that moves along its own axes while movement flags are held.
#[derive(Debug, Copy, Clone)]
#[must_use]
pub struct Camera {
    position: Vec3,
    direction: Vec3,
    right: Vec3,
    up: Vec3,
    world_up: Vec3,
    yaw: Degrees,
    pitch: Degrees,
    move_speed: f32,
    moving_front: bool,
    moving_back: bool,
    moving_left: bool,
    moving_right: bool,
    mouse_sensitivity: f32,
    mouse_enabled: bool,
    last_mouse: Option<Vec2>,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::origin())
    }
}

impl Camera {
    /// Create a new `Camera` at a given position, looking down the negative z-axis.
    pub fn new(position: Vec3) -> Self {
        let mut camera = Self {
            position,
            direction: Vec3::forward(),
            right: Vec3::right(),
            up: Vec3::up(),
            world_up: Vec3::up(),
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            move_speed: DEFAULT_MOVE_SPEED,
            moving_front: false,
            moving_back: false,
            moving_left: false,
            moving_right: false,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            mouse_enabled: false,
            last_mouse: None,
        };
        camera.update_direction();
        camera
    }

    /// Set the distance moved per call to [`Camera::update_position`].
    pub fn with_move_speed(mut self, move_speed: f32) -> Self {
        self.move_speed = move_speed;
        self
    }

    /// Set the degrees turned per pixel of mouse movement.
    pub fn with_mouse_sensitivity(mut self, sensitivity: f32) -> Self {
        self.mouse_sensitivity = sensitivity;
        self
    }

    /// Set the world up vector used to derive the camera axes.
    pub fn with_world_up(mut self, world_up: Vec3) -> Self {
        self.world_up = world_up;
        self.update_direction();
        self
    }

    /// Get the `Camera` position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Get the unit view direction.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the unit right vector.
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Get the unit up vector.
    #[inline]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    #[inline]
    pub fn yaw(&self) -> Degrees {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> Degrees {
        self.pitch
    }

    #[inline]
    pub fn move_front(&mut self, moving: bool) {
        self.moving_front = moving;
    }

    #[inline]
    pub fn move_back(&mut self, moving: bool) {
        self.moving_back = moving;
    }

    #[inline]
    pub fn move_left(&mut self, moving: bool) {
        self.moving_left = moving;
    }

    #[inline]
    pub fn move_right(&mut self, moving: bool) {
        self.moving_right = moving;
    }

    /// Start turning the camera from mouse movement.
    pub fn enable_mouse(&mut self) {
        tracing::trace!("camera mouse look enabled");
        self.mouse_enabled = true;
    }

    /// Stop turning the camera from mouse movement. The next move after re-enabling only records
    /// the cursor position.
    pub fn disable_mouse(&mut self) {
        tracing::trace!("camera mouse look disabled");
        self.mouse_enabled = false;
        self.last_mouse = None;
    }

    /// Turn the camera towards a new cursor position, in window pixels with y pointing down.
    pub fn mouse_move(&mut self, x: f32, y: f32) {
        if !self.mouse_enabled {
            return;
        }
        let Some(last) = self.last_mouse.replace(Vec2::new(x, y)) else {
            return;
        };

        self.yaw += Degrees::new((x - last.x()) * self.mouse_sensitivity);
        self.pitch = (self.pitch + Degrees::new((last.y() - y) * self.mouse_sensitivity))
            .clamped(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_direction();
    }

    /// Advance the position one step along every held movement direction.
    pub fn update_position(&mut self) {
        if self.moving_front {
            self.position += self.direction * self.move_speed;
        }
        if self.moving_back {
            self.position -= self.direction * self.move_speed;
        }
        if self.moving_right {
            self.position += self.right * self.move_speed;
        }
        if self.moving_left {
            self.position -= self.right * self.move_speed;
        }
    }

    /// Get the `Camera` view [Mat4].
    #[inline]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.position + self.direction, self.up)
    }

    fn update_direction(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();
        self.direction = vec3!(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalized();
        self.right = self.direction.cross(self.world_up).normalized();
        self.up = self.right.cross(self.direction).normalized();
    }
}
