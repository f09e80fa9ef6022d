use kiss3d::camera::Camera;
use kiss3d::event::{Action, EventManager, Key, WindowEvent};
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::window::{State, Window};

mod camera;
mod context;
mod driver;
mod view;
mod viewport;

pub use self::camera::OrbitCamera;
pub use self::context::SceneContext;
pub use self::driver::AnimationDriver;
pub use self::view::View;
pub use self::viewport::{Viewport, MAX_DEVICE_PIXEL_RATIO};

const KEY_QUIT: Key = Key::Q;

pub struct Simulation {
    view: View,
    driver: AnimationDriver,
}

impl Simulation {
    pub fn new(ctx: SceneContext, window: &mut Window) -> Self {
        Self {
            view: View::new(ctx, window),
            driver: AnimationDriver::new(),
        }
    }

    fn process_user_input(&mut self, mut events: EventManager) {
        for event in events.iter() {
            match event.value {
                WindowEvent::FramebufferSize(width, height) => {
                    // kiss3d reports framebuffer pixels; the resize contract
                    // takes logical units.
                    let scale = self.view.context().viewport.host_scale();
                    let width = (width as f32 / scale).round() as u32;
                    let height = (height as f32 / scale).round() as u32;
                    self.view.context_mut().resize(width, height);
                }
                WindowEvent::Key(KEY_QUIT, Action::Press, _) => {
                    println!("Shutting down");
                    self.driver.shutdown();
                }
                _ => {}
            }
        }
    }
}

impl State for Simulation {
    fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        self.view.cameras_and_effect_and_renderer()
    }

    fn step(&mut self, window: &mut Window) {
        self.process_user_input(window.events());
        let dt = self.driver.frame_dt();
        self.driver.tick(self.view.context_mut(), dt);
        self.view.prerender_scene(window);
        if !self.driver.is_running() {
            window.close();
        }
    }
}
