use super::super::Input;

/// Bridges absolute cursor positions into yaw/pitch offsets.
///
/// Owns the last-sample state: the first cursor sample after capture
/// only establishes the reference point and produces no offset, so the
/// camera does not snap to wherever the cursor happened to start.
/// Offsets are sensitivity-scaled here, and the screen-Y axis (which
/// grows downward) is inverted so that moving the cursor up pitches up.
#[derive(Copy, Clone, Debug)]
pub struct Cursor {
    last_x: f32,
    last_y: f32,
    first_sample: bool,
    sensitivity: f32,
    /// Accumulated (yaw, pitch) offsets in degrees, already scaled.
    offsets: (f32, f32),
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            last_x: 0.0,
            last_y: 0.0,
            first_sample: true,
            sensitivity: Self::DEFAULT_SENSITIVITY,
            offsets: (0.0, 0.0),
        }
    }
}

impl Cursor {
    const DEFAULT_SENSITIVITY: f32 = 0.05;

    #[must_use]
    pub fn with_sensitivity(sensitivity: f32) -> Self {
        Self {
            sensitivity,
            ..Self::default()
        }
    }

    pub fn handle_move(&mut self, x: f32, y: f32) {
        if self.first_sample {
            self.last_x = x;
            self.last_y = y;
            self.first_sample = false;
            return;
        }

        self.offsets.0 += (x - self.last_x) * self.sensitivity;
        self.offsets.1 += (self.last_y - y) * self.sensitivity;
        self.last_x = x;
        self.last_y = y;
    }
}

impl super::Controller for Cursor {
    fn handle_event(&mut self, event: &winit::event::Event<()>) {
        if let winit::event::Event::WindowEvent {
            event: winit::event::WindowEvent::CursorMoved { position, .. },
            ..
        } = event
        {
            #[allow(clippy::cast_possible_truncation)]
            self.handle_move(position.x as f32, position.y as f32);
        }
    }

    #[must_use]
    fn fetch_input(&mut self) -> Vec<Input> {
        let (yaw, pitch) = core::mem::take(&mut self.offsets);

        let mut inputs = Vec::with_capacity(2);
        if yaw != 0.0 {
            inputs.push(Input::Yaw(yaw));
        }
        if pitch != 0.0 {
            inputs.push(Input::Pitch(pitch));
        }

        inputs
    }
}

#[cfg(test)]
mod tests {
    use super::super::Controller;
    use super::*;

    #[test]
    fn first_sample_produces_no_offset() {
        let mut cursor = Cursor::default();
        cursor.handle_move(400.0, 300.0);
        assert!(cursor.fetch_input().is_empty());
    }

    #[test]
    fn offsets_are_scaled_and_y_inverted() {
        let mut cursor = Cursor::with_sensitivity(0.05);
        cursor.handle_move(400.0, 300.0);
        cursor.handle_move(410.0, 280.0);

        let inputs = cursor.fetch_input();
        // +10 px right, 20 px up: yaw +0.5°, pitch +1°.
        assert_eq!(inputs, vec![Input::Yaw(0.5), Input::Pitch(1.0)]);
    }

    #[test]
    fn fetching_drains_the_accumulator() {
        let mut cursor = Cursor::default();
        cursor.handle_move(0.0, 0.0);
        cursor.handle_move(10.0, 10.0);

        assert!(!cursor.fetch_input().is_empty());
        assert!(cursor.fetch_input().is_empty());
    }

    #[test]
    fn moves_accumulate_between_fetches() {
        let mut cursor = Cursor::with_sensitivity(1.0);
        cursor.handle_move(0.0, 0.0);
        cursor.handle_move(3.0, 0.0);
        cursor.handle_move(7.0, 0.0);

        assert_eq!(cursor.fetch_input(), vec![Input::Yaw(7.0)]);
    }
}
