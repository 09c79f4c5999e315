pub mod window;

use glam::{Mat4, Vec3};

use crate::control::camera::Camera;

/// Receives matrices and vectors by uniform name.
///
/// This is the boundary to whatever consumes the camera's output: a
/// shader program, a recording sink in tests, a tracing sink in the
/// demos. The camera never touches the sink directly; the render loop
/// bridges them once per frame.
pub trait UniformSink {
    fn set_mat4(&mut self, name: &str, value: &Mat4);
    fn set_vec3(&mut self, name: &str, value: Vec3);
    fn set_float(&mut self, name: &str, value: f32);
}

/// Binds the per-frame camera uniforms on the sink.
pub fn bind_camera(camera: &dyn Camera, aspect_ratio: f32, sink: &mut dyn UniformSink) {
    sink.set_mat4("view", &camera.mat_view());
    sink.set_mat4("projection", &camera.mat_projection(aspect_ratio));
    sink.set_vec3("camera.position", camera.position());
    sink.set_float("camera.near", camera.near());
    sink.set_float("camera.far", camera.far());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::camera::first_person::FirstPerson;

    #[derive(Default)]
    struct RecordingSink(Vec<String>);

    impl UniformSink for RecordingSink {
        fn set_mat4(&mut self, name: &str, _value: &Mat4) {
            self.0.push(name.to_string());
        }

        fn set_vec3(&mut self, name: &str, _value: Vec3) {
            self.0.push(name.to_string());
        }

        fn set_float(&mut self, name: &str, _value: f32) {
            self.0.push(name.to_string());
        }
    }

    #[test]
    fn binds_the_camera_uniforms_by_name() {
        let camera = FirstPerson::default();
        let mut sink = RecordingSink::default();

        bind_camera(&camera, 800.0 / 600.0, &mut sink);

        assert_eq!(
            sink.0,
            vec![
                "view",
                "projection",
                "camera.position",
                "camera.near",
                "camera.far",
            ]
        );
    }
}
