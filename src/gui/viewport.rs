use super::camera::OrbitCamera;

/// Largest device-pixel ratio we'll render at. Denser displays get capped
/// here; past 2x the extra pixels cost more than they show.
pub const MAX_DEVICE_PIXEL_RATIO: f32 = 2.0;

/// Tracks the drawable surface. Resizes are plain point-in-time writes with
/// no other state involved, so replaying one is harmless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Scale reported by the host window system.
    host_scale: f32,
    /// The scale we actually render at.
    dpr: f32,
    /// Physical pixels.
    surface: (u32, u32),
}

impl Viewport {
    pub fn new(host_scale: f32) -> Self {
        Viewport {
            host_scale,
            dpr: host_scale.min(MAX_DEVICE_PIXEL_RATIO),
            surface: (0, 0),
        }
    }

    pub fn host_scale(&self) -> f32 {
        self.host_scale
    }

    pub fn device_pixel_ratio(&self) -> f32 {
        self.dpr
    }

    /// Render surface in physical pixels.
    pub fn surface_size(&self) -> (u32, u32) {
        self.surface
    }

    /// Apply a size change, in logical units: the camera aspect follows
    /// width over height, and the surface scales by the capped ratio.
    pub fn resize(&mut self, camera: &mut OrbitCamera, width: u32, height: u32) {
        camera.set_dimensions(width, height);
        self.surface = (
            (width as f32 * self.dpr).round() as u32,
            (height as f32 * self.dpr).round() as u32,
        );
    }
}
