#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod control;
pub mod render;

use control::camera::Camera;
use control::controller::Controller;
use render::window::{Window, WindowDescriptor};
use render::UniformSink;

/// Drives the window event loop: events are dispatched to every
/// controller, accumulated inputs are drained into the camera once per
/// frame, and the resulting matrices are bound on the uniform sink
/// before the frame callback runs.
pub struct App {
    config: AppConfig,
    window: Window,
    event_loop: winit::event_loop::EventLoop<()>,
}

impl App {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let event_loop = winit::event_loop::EventLoop::new();
        let window = Window::new(&event_loop, &config.window);

        tracing::debug!("Successfully initialized");

        Self {
            config,
            window,
            event_loop,
        }
    }

    /// Runs the event loop until the window is closed or Escape is
    /// pressed. `on_frame` runs once per frame, after the camera
    /// uniforms have been bound, so the scene can bind its own values.
    pub fn run(self, mut on_frame: impl FnMut(&mut dyn UniformSink) + 'static) {
        let Self {
            config:
                AppConfig {
                    mut camera,
                    mut controllers,
                    mut sink,
                    ..
                },
            window,
            event_loop,
        } = self;

        let mut start = std::time::Instant::now();

        event_loop.run(move |event, _, control_flow| {
            for controller in &mut controllers {
                controller.handle_event(&event);
            }
            match event {
                winit::event::Event::WindowEvent {
                    event: winit::event::WindowEvent::CloseRequested,
                    ..
                } => {
                    *control_flow = winit::event_loop::ControlFlow::Exit;
                }
                winit::event::Event::WindowEvent {
                    event:
                        winit::event::WindowEvent::KeyboardInput {
                            input:
                                winit::event::KeyboardInput {
                                    state: winit::event::ElementState::Pressed,
                                    virtual_keycode:
                                        Some(winit::event::VirtualKeyCode::Escape),
                                    ..
                                },
                            ..
                        },
                    ..
                } => {
                    tracing::debug!("Escape pressed, exiting");
                    *control_flow = winit::event_loop::ControlFlow::Exit;
                }
                winit::event::Event::MainEventsCleared => {
                    let elapsed = start.elapsed().as_secs_f32();
                    start = std::time::Instant::now();

                    let inputs = controllers
                        .iter_mut()
                        .flat_map(|controller| controller.fetch_input())
                        .collect::<Vec<_>>();
                    camera.process_inputs(&inputs, elapsed);

                    render::bind_camera(camera.as_ref(), window.aspect_ratio(), sink.as_mut());

                    on_frame(sink.as_mut());
                }
                _ => {}
            }
        });
    }
}

pub struct AppConfig {
    pub window: WindowDescriptor,
    pub camera: Box<dyn Camera>,
    pub controllers: Vec<Box<dyn Controller>>,
    pub sink: Box<dyn UniformSink>,
}
