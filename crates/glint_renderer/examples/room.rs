//! Offline render of the demo room scene.
//!
//! A room fashioned from giant spheres, an emissive sphere light, and a
//! metallic pillar box. Renders a progressively accumulated full-transport
//! pass and a normals pass, writing both as PNGs.

use anyhow::Result;
use glint_core::{Material, Scene, SceneResult};
use glint_renderer::{render_parallel, Accumulator, CameraState, RenderConfig, RenderMode, Vec3};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 450;
const FRAMES: u64 = 16;

fn main() -> Result<()> {
    env_logger::init();

    let scene = build_scene()?;
    let camera = CameraState::new(Vec3::new(0.0, 0.0, 1.5));
    let config = RenderConfig {
        mode: RenderMode::Full,
        max_bounces: 16,
        sky: false,
    };

    let start = std::time::Instant::now();
    let mut accumulator = Accumulator::new(WIDTH, HEIGHT);
    for frame in 0..FRAMES {
        let image = render_parallel(&scene, &camera, &config, WIDTH, HEIGHT, frame);
        accumulator.add_frame(&image);
    }
    let image = accumulator.resolve();
    log::info!(
        "Rendered {} frames at {}x{} in {:?}",
        FRAMES,
        WIDTH,
        HEIGHT,
        start.elapsed()
    );
    image.save_png("room.png")?;

    let normals = RenderConfig {
        mode: RenderMode::Normals,
        ..config
    };
    render_parallel(&scene, &camera, &normals, WIDTH, HEIGHT, 0).save_png("room_normals.png")?;

    println!("Wrote room.png and room_normals.png");
    Ok(())
}

fn build_scene() -> SceneResult<Scene> {
    let mut builder = Scene::builder();

    let white = builder.add_material(Material::surface(Vec3::splat(0.9), 0.95, 0.05));
    let orange = builder.add_material(Material::surface(Vec3::new(1.0, 0.7, 0.2), 0.8, 0.2));
    let blue = builder.add_material(Material::surface(Vec3::new(0.2, 0.4, 0.9), 0.8, 0.2));
    let green = builder.add_material(Material::surface(Vec3::new(0.62, 0.87, 0.64), 0.5, 0.5));
    let lamp = builder.add_material(Material::emitter(1.0));

    // The light source
    builder.add_sphere(Vec3::new(-0.8, -0.2, 0.4), 0.8, lamp);

    // Room walls: giant spheres curving gently across the view
    builder.add_sphere(Vec3::new(0.0, 1000.0, 0.0), 1000.0, white);
    builder.add_sphere(Vec3::new(1001.5, 0.0, 0.0), 1000.0, orange);
    builder.add_sphere(Vec3::new(0.0, 0.0, 1003.0), 1000.0, white);
    builder.add_sphere(Vec3::new(-1003.0, 0.0, 0.0), 1000.0, blue);
    builder.add_sphere(Vec3::new(0.0, 0.0, -1003.0), 1000.0, white);
    builder.add_sphere(Vec3::new(0.0, -804.0, 0.0), 800.0035, white);

    // Pillar box
    builder.add_aabb(Vec3::new(0.9, -1.5, -0.6), Vec3::new(1.1, 0.1, 0.4), green);

    builder.build()
}
