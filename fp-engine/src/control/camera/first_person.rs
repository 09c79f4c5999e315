use glam::{Mat4, Vec3};

use super::super::{Direction, Input};
use super::{Camera, CameraError};

const WORLD_UP: Vec3 = Vec3::Y;

/// Pitch is kept strictly away from ±90° so `front` and the world up
/// axis never become parallel, which would degenerate the view matrix.
const PITCH_LIMIT: f32 = 89.0;

const FOV_MIN: f32 = 1.0;
const FOV_MAX: f32 = 45.0;

/// Represents a first person camera.
///
/// Yaw, pitch and field of view are stored in degrees and converted to
/// radians only where the basis vectors and matrices are derived.
/// `front`, `right` and `up` are never set directly: they are recomputed
/// from the angles after every orientation change.
#[derive(Copy, Clone, Debug)]
pub struct FirstPerson {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    yaw: f32,
    pitch: f32,
    fov: f32,
    near: f32,
    far: f32,
    speed: f32,
}

impl Default for FirstPerson {
    fn default() -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            yaw: Self::DEFAULT_YAW,
            pitch: 0.0,
            fov: FOV_MAX,
            near: 0.1,
            far: 100.0,
            speed: Self::DEFAULT_SPEED,
        };
        camera.update_basis();
        camera
    }
}

impl FirstPerson {
    /// Looking down -Z at rest.
    const DEFAULT_YAW: f32 = -90.0;
    const DEFAULT_SPEED: f32 = 2.5;

    /// Sets the eye position. Intended for initial setup or deliberate
    /// resets; there are no bounds on position, but it must be finite.
    pub fn set_position(&mut self, position: Vec3) -> Result<(), CameraError> {
        if !position.is_finite() {
            return Err(CameraError::InvalidConfiguration(format!(
                "non-finite position {position}"
            )));
        }
        self.position = position;
        Ok(())
    }

    /// Sets the clipping distances, which must satisfy `0 < near < far`.
    pub fn set_clipping_plane(&mut self, near: f32, far: f32) -> Result<(), CameraError> {
        if !near.is_finite() || !far.is_finite() || near <= 0.0 || far <= near {
            return Err(CameraError::InvalidConfiguration(format!(
                "clipping planes must satisfy 0 < near < far, got {near}..{far}"
            )));
        }
        self.near = near;
        self.far = far;
        Ok(())
    }

    /// Sets yaw and pitch in degrees. Pitch is clamped inside
    /// (-90°, 90°) like every other orientation change.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) -> Result<(), CameraError> {
        if !yaw.is_finite() || !pitch.is_finite() {
            return Err(CameraError::InvalidConfiguration(format!(
                "non-finite orientation yaw={yaw} pitch={pitch}"
            )));
        }
        self.yaw = yaw % 360.0;
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_basis();
        Ok(())
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Moves the eye along the camera basis by `speed * delta_seconds`.
    ///
    /// `delta_seconds` must be finite and non-negative.
    pub fn process_keyboard_input(
        &mut self,
        direction: Direction,
        delta_seconds: f32,
    ) -> Result<(), CameraError> {
        if !delta_seconds.is_finite() || delta_seconds < 0.0 {
            return Err(CameraError::InvalidArgument(format!(
                "delta seconds must be finite and >= 0, got {delta_seconds}"
            )));
        }

        let step = self.speed * delta_seconds;
        self.position += match direction {
            Direction::Forward => self.front * step,
            Direction::Backward => -self.front * step,
            Direction::Left => -self.right * step,
            Direction::Right => self.right * step,
            Direction::Up => self.up * step,
            Direction::Down => -self.up * step,
        };
        Ok(())
    }

    /// Applies yaw/pitch offsets in degrees and rebuilds the basis.
    ///
    /// Offsets are expected already sensitivity-scaled and with the
    /// screen-Y inversion applied (pitch-up positive). Callers tracking
    /// an absolute cursor must treat the first sample after capture as
    /// a reference point with zero offset, or the camera snaps to
    /// wherever the cursor happened to start; see the cursor
    /// controller. Non-finite offsets are dropped, extreme pitch clamps.
    pub fn process_mouse_input(&mut self, xoffset: f32, yoffset: f32) {
        if !xoffset.is_finite() || !yoffset.is_finite() {
            return;
        }
        self.yaw = (self.yaw + xoffset) % 360.0;
        self.pitch = (self.pitch + yoffset).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_basis();
    }

    /// Applies a zoom offset in degrees of field of view, clamped to
    /// [1°, 45°]. Non-finite offsets are dropped.
    pub fn process_scroll_input(&mut self, yoffset: f32) {
        if !yoffset.is_finite() {
            return;
        }
        self.fov = (self.fov + yoffset).clamp(FOV_MIN, FOV_MAX);
    }

    #[must_use]
    pub const fn yaw(&self) -> f32 {
        self.yaw
    }

    #[must_use]
    pub const fn pitch(&self) -> f32 {
        self.pitch
    }

    #[must_use]
    pub const fn fov(&self) -> f32 {
        self.fov
    }

    fn update_basis(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();

        self.front = Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize();
        self.right = self.front.cross(WORLD_UP).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Camera for FirstPerson {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn front(&self) -> Vec3 {
        self.front
    }

    fn up(&self) -> Vec3 {
        self.up
    }

    fn right(&self) -> Vec3 {
        self.right
    }

    fn near(&self) -> f32 {
        self.near
    }

    fn far(&self) -> f32 {
        self.far
    }

    fn mat_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    fn mat_projection(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov.to_radians(), aspect_ratio, self.near, self.far)
    }

    fn process_inputs(&mut self, inputs: &[Input], delta_seconds: f32) {
        // Inside the render loop a bad frame delta degrades to a frozen
        // frame, never a failure.
        let delta_seconds = if delta_seconds.is_finite() {
            delta_seconds.max(0.0)
        } else {
            0.0
        };

        let mut yaw_offset = 0.0;
        let mut pitch_offset = 0.0;
        let mut zoom_offset = 0.0;

        for input in inputs {
            match *input {
                Input::Move(direction) => {
                    if let Err(err) = self.process_keyboard_input(direction, delta_seconds) {
                        tracing::warn!("dropped movement input: {err}");
                    }
                }
                Input::Yaw(value) => yaw_offset += value,
                Input::Pitch(value) => pitch_offset += value,
                Input::Zoom(value) => zoom_offset += value,
            }
        }

        if yaw_offset != 0.0 || pitch_offset != 0.0 {
            self.process_mouse_input(yaw_offset, pitch_offset);
        }
        if zoom_offset != 0.0 {
            self.process_scroll_input(zoom_offset);
        }
    }
}
