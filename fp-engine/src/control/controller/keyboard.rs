use super::super::{Direction, Input};

/// Represents the state of a keyboard as a bitset of held movement keys.
///
/// Held keys re-emit their movement input every frame until released.
#[derive(Copy, Clone, Debug, Default)]
pub struct Keyboard(u8);

impl Keyboard {
    const FORWARD: u8 = 1 << 0;
    const LEFT: u8 = 1 << 1;
    const RIGHT: u8 = 1 << 2;
    const BACKWARD: u8 = 1 << 3;
    const UP: u8 = 1 << 4;
    const DOWN: u8 = 1 << 5;

    const BINDINGS: [(u8, Direction); 6] = [
        (Self::FORWARD, Direction::Forward),
        (Self::BACKWARD, Direction::Backward),
        (Self::LEFT, Direction::Left),
        (Self::RIGHT, Direction::Right),
        (Self::UP, Direction::Up),
        (Self::DOWN, Direction::Down),
    ];

    // TODO: Configurable key bindings.
    pub fn handle_key(&mut self, key: winit::event::VirtualKeyCode, pressed: bool) {
        let mask = match key {
            winit::event::VirtualKeyCode::W => Self::FORWARD,
            winit::event::VirtualKeyCode::A => Self::LEFT,
            winit::event::VirtualKeyCode::S => Self::BACKWARD,
            winit::event::VirtualKeyCode::D => Self::RIGHT,
            winit::event::VirtualKeyCode::Space => Self::UP,
            winit::event::VirtualKeyCode::LShift => Self::DOWN,
            _ => return,
        };

        if pressed {
            self.0 |= mask;
        } else {
            self.0 &= !mask;
        }
    }
}

impl super::Controller for Keyboard {
    fn handle_event(&mut self, event: &winit::event::Event<()>) {
        if let winit::event::Event::WindowEvent {
            event:
                winit::event::WindowEvent::KeyboardInput {
                    input:
                        winit::event::KeyboardInput {
                            state,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                },
            ..
        } = event
        {
            self.handle_key(*key, *state == winit::event::ElementState::Pressed);
        }
    }

    #[must_use]
    fn fetch_input(&mut self) -> Vec<Input> {
        Self::BINDINGS
            .iter()
            .filter(|(mask, _)| self.0 & mask != 0)
            .map(|&(_, direction)| Input::Move(direction))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::Controller;
    use super::*;
    use winit::event::VirtualKeyCode;

    #[test]
    fn held_keys_emit_until_released() {
        let mut keyboard = Keyboard::default();
        keyboard.handle_key(VirtualKeyCode::W, true);
        keyboard.handle_key(VirtualKeyCode::D, true);

        let inputs = keyboard.fetch_input();
        assert!(inputs.contains(&Input::Move(Direction::Forward)));
        assert!(inputs.contains(&Input::Move(Direction::Right)));
        assert_eq!(inputs.len(), 2);

        // Still held: emitted again next frame.
        assert_eq!(keyboard.fetch_input().len(), 2);

        keyboard.handle_key(VirtualKeyCode::W, false);
        assert_eq!(keyboard.fetch_input(), vec![Input::Move(Direction::Right)]);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut keyboard = Keyboard::default();
        keyboard.handle_key(VirtualKeyCode::F, true);
        assert!(keyboard.fetch_input().is_empty());
    }
}
