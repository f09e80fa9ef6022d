use crate::scene::SolarScene;

use super::camera::OrbitCamera;
use super::viewport::Viewport;

/// Far enough back that the outermost orbit fits in the opening view.
const START_DISTANCE: f32 = 260.0;

/// Everything the per-frame machinery works on, owned in one place and
/// borrowed out to whoever needs it.
pub struct SceneContext {
    pub scene: SolarScene,
    pub camera: OrbitCamera,
    pub viewport: Viewport,
}

impl SceneContext {
    pub fn new(scene: SolarScene, host_scale: f32) -> Self {
        SceneContext {
            scene,
            camera: OrbitCamera::new(START_DISTANCE),
            viewport: Viewport::new(host_scale),
        }
    }

    /// Viewport size change, in logical units.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport.resize(&mut self.camera, width, height);
    }
}
