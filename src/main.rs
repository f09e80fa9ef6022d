use clap::Parser;
use kiss3d::light::Light;
use kiss3d::window::Window;
use nalgebra::Point3;

use solar_orrery::file::read_file;
use solar_orrery::gui::{SceneContext, Simulation};
use solar_orrery::model::system::{reference_bodies, DEFAULT_STAR_SEED};
use solar_orrery::scene::SolarScene;

const WINDOW_TITLE: &str = "Solar Orrery";

#[derive(Debug, Parser)]
struct Args {
    /// Body table to load instead of the built-in planets (see bodies.txt)
    #[arg(long)]
    bodies: Option<String>,
    /// Seed for the starfield scatter
    #[arg(long, default_value_t = DEFAULT_STAR_SEED)]
    seed: u64,
}

fn main() {
    let args = Args::parse();

    let bodies = match &args.bodies {
        Some(filename) => read_file(filename),
        None => reference_bodies(),
    };

    let scene = SolarScene::assemble(&bodies, args.seed);
    println!(
        "Assembled {} bodies into {} scene nodes",
        scene.handles.len(),
        scene.graph.len()
    );
    println!("Drag to orbit, scroll to zoom, Q to quit");

    let mut window = Window::new(WINDOW_TITLE);
    // The point light rides wherever the sun was assembled.
    let sun_position = scene.graph.world_isometry(scene.sun_group) * Point3::origin();
    window.set_light(Light::Absolute(sun_position));
    window.set_framerate_limit(Some(60));

    let ctx = SceneContext::new(scene, window.scale_factor() as f32);
    let simulation = Simulation::new(ctx, &mut window);
    window.render_loop(simulation);
}
