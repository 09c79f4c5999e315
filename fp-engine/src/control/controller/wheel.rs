use super::super::Input;

/// Represents the state of a scroll wheel.
///
/// Line deltas map one line to one degree of field-of-view change;
/// pixel deltas are divided down to line units first.
#[derive(Copy, Clone, Debug, Default)]
pub struct Wheel(f32);

impl Wheel {
    const PIXELS_PER_LINE: f32 = 20.0;

    pub fn handle_scroll(&mut self, delta: f32) {
        self.0 += delta;
    }
}

impl super::Controller for Wheel {
    fn handle_event(&mut self, event: &winit::event::Event<()>) {
        if let winit::event::Event::WindowEvent {
            event: winit::event::WindowEvent::MouseWheel { delta, .. },
            ..
        } = event
        {
            let lines = match delta {
                winit::event::MouseScrollDelta::LineDelta(_, y) => *y,
                #[allow(clippy::cast_possible_truncation)]
                winit::event::MouseScrollDelta::PixelDelta(position) => {
                    position.y as f32 / Self::PIXELS_PER_LINE
                }
            };
            self.handle_scroll(lines);
        }
    }

    #[must_use]
    fn fetch_input(&mut self) -> Vec<Input> {
        let zoom = core::mem::take(&mut self.0);
        if zoom == 0.0 {
            Vec::new()
        } else {
            vec![Input::Zoom(zoom)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::Controller;
    use super::*;

    #[test]
    fn scrolls_accumulate_and_drain() {
        let mut wheel = Wheel::default();
        wheel.handle_scroll(2.0);
        wheel.handle_scroll(3.0);

        assert_eq!(wheel.fetch_input(), vec![Input::Zoom(5.0)]);
        assert!(wheel.fetch_input().is_empty());
    }

    #[test]
    fn idle_wheel_emits_nothing() {
        let mut wheel = Wheel::default();
        assert!(wheel.fetch_input().is_empty());
    }
}
