use nalgebra::Point3;

use super::body::{BodyParameters, MoonParameters};

/// 8-bit channels to the unit range, same conversion the body table loader
/// applies to hex colors.
pub fn rgb(r: u8, g: u8, b: u8) -> Point3<f32> {
    Point3::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

// -- sun --
pub const SUN_RADIUS: f32 = 12.0;
pub const SUN_SPIN_DEG_PER_SEC: f32 = 2.0;
pub fn sun_color() -> Point3<f32> {
    rgb(0xfd, 0xb8, 0x13)
}

// -- lights --
// The point light is co-located with the sun; the ambient term keeps night
// sides from going fully black.
pub const SUN_LIGHT_INTENSITY: f32 = 15000.0;
pub const AMBIENT_INTENSITY: f32 = 0.15;
pub fn ambient_color() -> Point3<f32> {
    rgb(0x40, 0x44, 0x50)
}

// -- backdrop --
pub const SKY_RADIUS: f32 = 1000.0;
pub fn sky_color() -> Point3<f32> {
    rgb(0x04, 0x05, 0x0a)
}
pub const STAR_COUNT: usize = 2000;
/// Radial shell the stars scatter over. Inside the sky sphere, outside the
/// orbits.
pub const STAR_SHELL: (f32, f32) = (300.0, 800.0);
pub const STAR_POINT_SIZE: f32 = 2.0;
pub fn star_color() -> Point3<f32> {
    rgb(0xe8, 0xea, 0xf5)
}
pub const DEFAULT_STAR_SEED: u64 = 7;

// -- per-planet extras --
pub const ORBIT_PATH_SEGMENTS: usize = 128;
pub const RING_SEGMENTS: usize = 64;
pub const RING_OPACITY: f32 = 0.6;

/// The built-in six-planet system, inner to outer. `--bodies` swaps in a
/// table from disk instead (see bodies.txt for the same data in file form).
pub fn reference_bodies() -> Vec<BodyParameters> {
    vec![
        BodyParameters::new("mercury", 2.0, rgb(0x80, 0x80, 0x80), 22.0, 47.8, 3.0),
        // retrograde spin
        BodyParameters::new("venus", 3.0, rgb(0xee, 0xe8, 0xaa), 34.0, 35.0, -2.0),
        BodyParameters::new("earth", 3.2, rgb(0x2e, 0x8b, 0x57), 48.0, 29.7, 18.0)
            .with_tilt(23.5)
            .with_moon(MoonParameters::new(0.9, 6.0, 12.0)),
        BodyParameters::new("mars", 2.4, rgb(0xb2, 0x22, 0x22), 62.0, 24.1, 16.0)
            .with_moon(MoonParameters::new(0.6, 4.5, 18.0)),
        // jupiter's moon shares mars's figures in the reference data
        BodyParameters::new("jupiter", 7.0, rgb(0xd2, 0xb4, 0x8c), 95.0, 13.1, 19.0)
            .with_moon(MoonParameters::new(0.6, 4.5, 18.0)),
        BodyParameters::new("saturn", 6.5, rgb(0xf5, 0xde, 0xb3), 115.0, 9.6, 22.0)
            .with_tilt(26.7)
            .with_ring(8.0, 12.0, rgb(0xd2, 0xb4, 0x8c)),
    ]
}
