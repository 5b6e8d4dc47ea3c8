//! Walkthrough demo.
//!
//! Run with: cargo run --example `walkthrough_demo` -- [options.json] [scene.obj]
//!
//! Without arguments the stock "Home" and "Secondary" viewpoints are used. Press `1`
//! or `2` to fly between them, `C` to print the current camera as viewpoint JSON.

use walkthrough::{scene, Options, Result, Vec3, Walkthrough};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let options = match args.next() {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };

    let mut viewer = Walkthrough::new(options)?;
    if let Some(path) = args.next() {
        viewer.set_scene_bounds(scene::load_bounds(path)?)?;
    }

    for (i, viewpoint) in viewer.registry().iter().enumerate() {
        println!("[{}] {}", i + 1, viewpoint.display_label());
    }

    walkthrough::run_with(viewer, |viewer, frame| {
        let camera = viewer.camera();
        let clip_from_world = camera.projection_matrix() * camera.view_matrix();
        log::trace!(
            "{:?} at {:?}, scene origin in NDC {:?}",
            frame.status,
            frame.pose.position,
            clip_from_world.project_point3(Vec3::ZERO)
        );
    })
}
