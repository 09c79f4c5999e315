//! Depth-test scene: two cubes over a ground plane, explored with a
//! first-person camera (WASD + mouse look + scroll zoom).

// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use camera_demos::{DirectionLight, SceneObject, TraceSink};
use fp_engine::control::camera::first_person::FirstPerson;
use fp_engine::control::controller::{cursor::Cursor, keyboard::Keyboard, wheel::Wheel};
use fp_engine::render::window::WindowDescriptor;
use fp_engine::{App, AppConfig};
use glam::Vec3;

fn main() {
    camera_demos::init_logging();

    let mut camera = FirstPerson::default();
    camera
        .set_position(Vec3::new(0.0, 0.0, 4.0))
        .expect("camera position");
    camera
        .set_clipping_plane(0.1, 10.0)
        .expect("camera clipping planes");

    let light = DirectionLight {
        position: Vec3::new(1.2, 1.0, 2.0),
        direction: Vec3::new(-1.0, -0.2, -0.5),
        color: Vec3::ONE,
    };

    let objects = [
        SceneObject::new("cube1", Vec3::new(0.0, 0.0, 0.0)),
        SceneObject::new("cube2", Vec3::new(1.0, 0.0, 1.0)),
        SceneObject::new("plane1", Vec3::new(0.0, 0.0, 0.0)),
    ];

    let config = AppConfig {
        window: WindowDescriptor {
            width: 800,
            height: 600,
            title: "Depth test".to_string(),
            cursor_visible: false,
            cursor_locked: true,
            resizable: false,
            ..Default::default()
        },
        camera: Box::new(camera),
        controllers: vec![
            Box::new(Keyboard::default()),
            Box::new(Cursor::default()),
            Box::new(Wheel::default()),
        ],
        sink: Box::new(TraceSink),
    };

    let app = App::new(config);

    app.run(move |sink| {
        sink.set_float("shininess", 32.0);
        light.apply(sink);
        for object in &objects {
            object.draw(sink);
        }
    });
}
