use fp_engine::render::UniformSink;
use glam::{Mat4, Vec3};

/// A renderable placed in the world.
///
/// Meshes and textures are outside this crate's scope: an object is its
/// model transform plus whatever the sink does with it.
#[derive(Debug, Clone, Copy)]
pub struct SceneObject {
    name: &'static str,
    model: Mat4,
}

impl SceneObject {
    #[must_use]
    pub fn new(name: &'static str, position: Vec3) -> Self {
        Self {
            name,
            model: Mat4::from_translation(position),
        }
    }

    #[must_use]
    pub const fn with_model(name: &'static str, model: Mat4) -> Self {
        Self { name, model }
    }

    /// Binds the object's model matrix on the sink.
    pub fn draw(&self, sink: &mut dyn UniformSink) {
        tracing::trace!("drawing {}", self.name);
        sink.set_mat4("model", &self.model);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink(Vec<Mat4>);

    impl UniformSink for RecordingSink {
        fn set_mat4(&mut self, name: &str, value: &Mat4) {
            assert_eq!(name, "model");
            self.0.push(*value);
        }

        fn set_vec3(&mut self, _name: &str, _value: Vec3) {}

        fn set_float(&mut self, _name: &str, _value: f32) {}
    }

    #[test]
    fn draw_binds_the_translation() {
        let cube = SceneObject::new("cube", Vec3::new(1.0, 0.0, 1.0));
        let mut sink = RecordingSink::default();
        cube.draw(&mut sink);

        assert_eq!(sink.0, vec![Mat4::from_translation(Vec3::new(1.0, 0.0, 1.0))]);
    }
}
