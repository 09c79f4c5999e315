use fp_engine::render::UniformSink;
use glam::Vec3;

/// A directional light: a position/direction/color triplet whose
/// ambient, diffuse and specular tints derive from the color.
#[derive(Debug, Clone, Copy)]
pub struct DirectionLight {
    pub position: Vec3,
    pub direction: Vec3,
    pub color: Vec3,
}

impl DirectionLight {
    const AMBIENT: f32 = 0.1;
    const DIFFUSE: f32 = 0.8;

    /// Binds the light uniforms on the sink.
    pub fn apply(&self, sink: &mut dyn UniformSink) {
        sink.set_vec3("directionLight.direction", self.direction);
        sink.set_vec3("directionLight.ambient", self.color * Self::AMBIENT);
        sink.set_vec3("directionLight.diffuse", self.color * Self::DIFFUSE);
        sink.set_vec3("directionLight.specular", self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;

    #[derive(Default)]
    struct RecordingSink(Vec<(String, Vec3)>);

    impl UniformSink for RecordingSink {
        fn set_mat4(&mut self, _name: &str, _value: &Mat4) {}

        fn set_vec3(&mut self, name: &str, value: Vec3) {
            self.0.push((name.to_string(), value));
        }

        fn set_float(&mut self, _name: &str, _value: f32) {}
    }

    #[test]
    fn tints_derive_from_the_color() {
        let light = DirectionLight {
            position: Vec3::new(1.2, 1.0, 2.0),
            direction: Vec3::new(-1.0, -0.2, -0.5),
            color: Vec3::ONE,
        };

        let mut sink = RecordingSink::default();
        light.apply(&mut sink);

        assert_eq!(
            sink.0,
            vec![
                ("directionLight.direction".to_string(), light.direction),
                ("directionLight.ambient".to_string(), Vec3::splat(0.1)),
                ("directionLight.diffuse".to_string(), Vec3::splat(0.8)),
                ("directionLight.specular".to_string(), Vec3::ONE),
            ]
        );
    }
}
