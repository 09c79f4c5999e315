//! Instructional walkthrough scenes sharing a first-person camera.

#![deny(clippy::all)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod lights;
mod scene;
mod sink;

pub use lights::DirectionLight;
pub use scene::SceneObject;
pub use sink::TraceSink;

/// Initializes the fmt subscriber: TRACE in debug builds, INFO in
/// release builds.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_max_level(if cfg!(debug_assertions) {
            tracing::Level::TRACE
        } else {
            tracing::Level::INFO
        })
        .init();
}
