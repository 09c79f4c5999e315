pub mod first_person;

use std::fmt;

use glam::{Mat4, Vec3};

/// Represents a camera.
///
/// It is expected that `front`, `up` and `right` are unit vectors and
/// stay mutually orthogonal across every mutation.
pub trait Camera {
    /// Returns the position of the camera eye, in world space.
    fn position(&self) -> Vec3;
    /// Returns the direction the camera is facing.
    fn front(&self) -> Vec3;
    /// Returns the up vector of the camera.
    fn up(&self) -> Vec3;
    /// Returns the right vector of the camera.
    fn right(&self) -> Vec3;

    /// Returns the near clipping distance.
    fn near(&self) -> f32;
    /// Returns the far clipping distance.
    fn far(&self) -> f32;

    /// Returns the world-to-eye transform for the current pose.
    fn mat_view(&self) -> Mat4;
    /// Returns the eye-to-clip perspective transform for the given
    /// aspect ratio (width over height).
    fn mat_projection(&self, aspect_ratio: f32) -> Mat4;

    /// Processes the inputs drained from the controllers this frame.
    ///
    /// This runs inside the render loop and must not fail: out-of-range
    /// values are clamped, non-finite ones dropped.
    fn process_inputs(&mut self, inputs: &[super::Input], delta_seconds: f32);
}

/// Errors raised by camera configuration calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    /// One-time setup was given values that would produce a degenerate
    /// matrix (bad clipping planes, non-finite pose).
    InvalidConfiguration(String),
    /// A per-frame call was given an argument outside its contract.
    InvalidArgument(String),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(msg) => {
                write!(f, "invalid camera configuration: {msg}")
            }
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for CameraError {}
