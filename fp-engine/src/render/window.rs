use winit::{dpi::LogicalSize, window::CursorGrabMode};

/// Represents a window.
#[derive(Debug)]
pub struct Window {
    /// Inner `winit` window.
    window: winit::window::Window,
}

impl Window {
    /// Creates a new window.
    ///
    /// ## Panics
    ///
    /// The function will panic if anything goes wrong during window
    /// creation.
    #[must_use]
    pub fn new(
        event_loop: &winit::event_loop::EventLoop<()>,
        window_descriptor: &WindowDescriptor,
    ) -> Self {
        let mut winit_window_builder: winit::window::WindowBuilder =
            winit::window::WindowBuilder::new().with_title(&window_descriptor.title);

        winit_window_builder = match window_descriptor.mode {
            Mode::BorderlessFullscreen => winit_window_builder.with_fullscreen(Some(
                winit::window::Fullscreen::Borderless(event_loop.primary_monitor()),
            )),
            Mode::Fullscreen => {
                winit_window_builder.with_fullscreen(Some(if cfg!(target_os = "macos") {
                    winit::window::Fullscreen::Borderless(event_loop.primary_monitor())
                } else {
                    winit::window::Fullscreen::Exclusive({
                        let video_mode = Self::get_best_videomode(
                            &event_loop
                                .primary_monitor()
                                .expect("could not find primary monitor"),
                        );
                        tracing::debug!(
                            "Best video mode: {}x{} @ {}Hz",
                            video_mode.size().width,
                            video_mode.size().height,
                            video_mode.refresh_rate_millihertz() / 1000
                        );
                        video_mode
                    })
                }))
            }
            Mode::Windowed => {
                let WindowDescriptor {
                    width,
                    height,
                    position,
                    ..
                } = window_descriptor;

                if let Some(position) = position {
                    winit_window_builder =
                        winit_window_builder.with_position(winit::dpi::LogicalPosition::new(
                            f64::from(position[0]),
                            f64::from(position[1]),
                        ));
                }
                winit_window_builder.with_inner_size(LogicalSize::new(*width, *height))
            }
            .with_resizable(window_descriptor.resizable),
        };

        let constraints = window_descriptor.resize_constraints.check_constraints();
        let min_inner_size = LogicalSize {
            width: constraints.min_width,
            height: constraints.min_height,
        };

        winit_window_builder =
            if constraints.max_width < u32::MAX && constraints.max_height < u32::MAX {
                winit_window_builder
                    .with_min_inner_size(min_inner_size)
                    .with_max_inner_size(LogicalSize {
                        width: constraints.max_width,
                        height: constraints.max_height,
                    })
            } else {
                winit_window_builder.with_min_inner_size(min_inner_size)
            };

        let winit_window = winit_window_builder.build(event_loop).unwrap();

        if let Some(monitor) = winit_window.current_monitor() {
            if let Some(name) = monitor.name() {
                tracing::info!("Window created on monitor {}", name);
            }
        }

        if window_descriptor.cursor_locked {
            match winit_window.set_cursor_grab(if cfg!(target_os = "macos") {
                CursorGrabMode::Locked
            } else {
                CursorGrabMode::Confined
            }) {
                Ok(()) => (),
                Err(winit::error::ExternalError::NotSupported(_)) => {
                    tracing::warn!("Cursor confinement is not supported on this platform");
                }
                Err(err) => tracing::error!("Error confining cursor: {err:?}"),
            }
        }

        winit_window.set_cursor_visible(window_descriptor.cursor_visible);

        Self {
            window: winit_window,
        }
    }

    /// Returns the inner size of the window, in physical pixels.
    #[must_use]
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    /// Returns the width-over-height aspect ratio of the window.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        let (width, height) = self.size();
        #[allow(clippy::cast_precision_loss)]
        {
            width as f32 / height.max(1) as f32
        }
    }

    /// Returns the best video mode of the given monitor.
    #[must_use]
    fn get_best_videomode(monitor: &winit::monitor::MonitorHandle) -> winit::monitor::VideoMode {
        monitor
            .video_modes()
            .max_by(|a, b| {
                (a.size().width, a.size().height, a.refresh_rate_millihertz()).cmp(&(
                    b.size().width,
                    b.size().height,
                    b.refresh_rate_millihertz(),
                ))
            })
            .unwrap()
    }
}

#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents the mode of the window.
pub enum Mode {
    Windowed,
    BorderlessFullscreen,
    Fullscreen,
}

#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone)]
/// Represents a window descriptor.
pub struct WindowDescriptor {
    pub width: u32,
    pub height: u32,
    pub position: Option<[f32; 2]>,
    pub resize_constraints: ResizeConstraints,
    pub title: String,
    pub resizable: bool,
    pub cursor_visible: bool,
    pub cursor_locked: bool,
    pub mode: Mode,
}

impl Default for WindowDescriptor {
    fn default() -> Self {
        Self {
            title: "Title".to_string(),
            width: 800,
            height: 600,
            position: None,
            resize_constraints: ResizeConstraints::default(),
            resizable: true,
            cursor_locked: false,
            cursor_visible: true,
            mode: Mode::Windowed,
        }
    }
}

#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, Copy)]
/// Represents the constraints for resizing a window.
pub struct ResizeConstraints {
    pub min_width: u32,
    pub min_height: u32,
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for ResizeConstraints {
    fn default() -> Self {
        Self {
            min_width: 180,
            min_height: 120,
            max_width: u32::MAX,
            max_height: u32::MAX,
        }
    }
}

impl ResizeConstraints {
    /// Checks the constraints and returns a new `ResizeConstraints`
    /// with valid values.
    #[must_use]
    pub fn check_constraints(&self) -> Self {
        let Self {
            mut min_width,
            mut min_height,
            mut max_width,
            mut max_height,
        } = self;
        min_width = min_width.max(1);
        min_height = min_height.max(1);
        if max_width < min_width {
            tracing::debug!(
                "The given maximum width {} is smaller than the minimum width {}",
                max_width,
                min_width
            );
            max_width = min_width;
        }
        if max_height < min_height {
            tracing::debug!(
                "The given maximum height {} is smaller than the minimum height {}",
                max_height,
                min_height
            );
            max_height = min_height;
        }
        Self {
            min_width,
            min_height,
            max_width,
            max_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraints_are_corrected() {
        let constraints = ResizeConstraints {
            min_width: 0,
            min_height: 200,
            max_width: 100,
            max_height: 50,
        }
        .check_constraints();

        assert_eq!(constraints.min_width, 1);
        assert_eq!(constraints.max_width, 100);
        assert_eq!(constraints.min_height, 200);
        assert_eq!(constraints.max_height, 200);
    }
}
