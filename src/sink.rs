use fp_engine::render::UniformSink;
use glam::{Mat4, Vec3};

/// Uniform sink that traces every binding instead of talking to a GPU.
///
/// The demos in this repository are about the camera and the uniform
/// contract, not about draw calls; this sink makes the per-frame
/// uniform stream observable at TRACE level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceSink;

impl UniformSink for TraceSink {
    fn set_mat4(&mut self, name: &str, value: &Mat4) {
        tracing::trace!("{name} = {:?}", value.to_cols_array_2d());
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        tracing::trace!("{name} = {value}");
    }

    fn set_float(&mut self, name: &str, value: f32) {
        tracing::trace!("{name} = {value}");
    }
}
