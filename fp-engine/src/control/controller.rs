//! This module contains the necessary trait used to handle different kind
//! of controllers, i.e. input sources.
//!
//! To implement a controller, simply create a struct with internal states
//! and implement the `Controller` trait for it. Add it to the list of
//! controllers in the app config and it will be handled by the event loop.

pub mod cursor;
pub mod keyboard;
pub mod wheel;

/// Represents a controller.
///
/// A controller accumulates raw window/device events into camera inputs
/// that the render loop drains once per frame.
pub trait Controller {
    /// Handle an event, usually by filtering by event type and
    /// updating the controller's state accordingly.
    fn handle_event(&mut self, event: &winit::event::Event<()>);

    /// Fetch the inputs accumulated since the last call.
    ///
    /// These are fed to the `Camera` to update its state.
    fn fetch_input(&mut self) -> Vec<super::Input>;
}
