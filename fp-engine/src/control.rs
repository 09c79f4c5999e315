pub mod camera;
pub mod controller;

/// A movement direction relative to the camera's own basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// A discrete input drained from a controller once per frame.
///
/// `Yaw`/`Pitch` offsets are in degrees and already sensitivity-scaled
/// by the controller that produced them. `Zoom` is in degrees of
/// field-of-view change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Move(Direction),
    Yaw(f32),
    Pitch(f32),
    Zoom(f32),
}
