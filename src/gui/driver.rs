use std::time::Instant;

use crate::model::system::SUN_SPIN_DEG_PER_SEC;

use super::context::SceneContext;

/// Advances the scene once per display refresh. Every angle accumulates
/// rate times elapsed time, nothing counts frames, so the motion comes out
/// the same at any refresh rate.
pub struct AnimationDriver {
    last_tick: Instant,
    running: bool,
}

impl AnimationDriver {
    pub fn new() -> Self {
        AnimationDriver {
            last_tick: Instant::now(),
            running: true,
        }
    }

    /// Seconds since the previous call, measured on the monotonic clock.
    pub fn frame_dt(&mut self) -> f32 {
        let now = Instant::now();
        let dt = (now - self.last_tick).as_secs_f32();
        self.last_tick = now;
        dt
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ask the loop to stop before it schedules another frame.
    pub fn shutdown(&mut self) {
        self.running = false;
    }

    /// One animation step. Orbit pivots, spins and moon pivots all advance
    /// by their own rate, then the camera eases after them. A stopped driver
    /// ignores the call.
    pub fn tick(&mut self, ctx: &mut SceneContext, dt: f32) {
        if !self.running {
            return;
        }

        let scene = &mut ctx.scene;
        scene
            .graph
            .rotate_y(scene.sun_mesh, (SUN_SPIN_DEG_PER_SEC * dt).to_radians());

        for handle in &scene.handles {
            scene
                .graph
                .rotate_y(handle.orbit_pivot, (handle.orbital_speed * dt).to_radians());
            scene
                .graph
                .rotate_y(handle.mesh, (handle.spin_speed * dt).to_radians());
            for moon in &handle.moons {
                scene
                    .graph
                    .rotate_y(moon.pivot, (moon.orbital_speed * dt).to_radians());
            }
        }

        ctx.camera.update_damping(dt);
    }
}
