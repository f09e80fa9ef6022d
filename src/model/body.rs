use nalgebra::Point3;

/// Fallback color for bodies and moons that don't pick one.
pub fn mid_gray() -> Point3<f32> {
    Point3::new(0.5, 0.5, 0.5)
}

/// The immutable inputs describing one planet. Distances and radii share the
/// scene's world unit; angular speeds are degrees per second, positive
/// counter-clockwise when seen from above.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyParameters {
    pub name: String,
    pub radius: f32,
    pub color: Point3<f32>,
    /// Orbit radius, measured from the parent's origin.
    pub distance: f32,
    /// Revolution rate about the parent.
    pub orbital_speed: f32,
    /// Self-rotation rate. Negative spins retrograde.
    pub spin_speed: f32,
    /// Axial tilt, degrees. Applied once at build time, never animated.
    pub axial_tilt_deg: f32,
    pub ring: Option<RingParameters>,
    pub moons: Vec<MoonParameters>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingParameters {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub color: Point3<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonParameters {
    pub radius: f32,
    pub distance: f32,
    pub orbital_speed: f32,
    pub color: Point3<f32>,
}

impl Default for BodyParameters {
    fn default() -> Self {
        BodyParameters {
            name: String::from("body"),
            radius: 2.0,
            color: mid_gray(),
            distance: 25.0,
            orbital_speed: 0.5,
            spin_speed: 15.0,
            axial_tilt_deg: 0.0,
            ring: None,
            moons: vec![],
        }
    }
}

impl BodyParameters {
    pub fn new(
        name: &str,
        radius: f32,
        color: Point3<f32>,
        distance: f32,
        orbital_speed: f32,
        spin_speed: f32,
    ) -> Self {
        BodyParameters {
            name: name.to_owned(),
            radius,
            color,
            distance,
            orbital_speed,
            spin_speed,
            ..Default::default()
        }
    }

    pub fn with_tilt(mut self, degrees: f32) -> Self {
        self.axial_tilt_deg = degrees;
        self
    }

    pub fn with_ring(mut self, inner_radius: f32, outer_radius: f32, color: Point3<f32>) -> Self {
        self.ring = Some(RingParameters {
            inner_radius,
            outer_radius,
            color,
        });
        self
    }

    pub fn with_moon(mut self, moon: MoonParameters) -> Self {
        self.moons.push(moon);
        self
    }
}

impl MoonParameters {
    pub fn new(radius: f32, distance: f32, orbital_speed: f32) -> Self {
        MoonParameters {
            radius,
            distance,
            orbital_speed,
            color: mid_gray(),
        }
    }

    pub fn with_color(mut self, color: Point3<f32>) -> Self {
        self.color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let params = BodyParameters::default();
        assert_relative_eq!(params.radius, 2.0);
        assert_relative_eq!(params.distance, 25.0);
        assert_relative_eq!(params.orbital_speed, 0.5);
        assert_relative_eq!(params.spin_speed, 15.0);
        assert_relative_eq!(params.axial_tilt_deg, 0.0);
        assert_relative_eq!(params.color, mid_gray());
        assert!(params.ring.is_none());
        assert!(params.moons.is_empty());
    }

    #[test]
    fn test_builders_leave_the_rest_alone() {
        let params = BodyParameters::new("x", 1.0, mid_gray(), 10.0, 5.0, 7.0)
            .with_tilt(23.5)
            .with_ring(2.0, 3.0, mid_gray())
            .with_moon(MoonParameters::new(0.5, 4.0, 9.0));

        assert_relative_eq!(params.axial_tilt_deg, 23.5);
        let ring = params.ring.unwrap();
        assert_relative_eq!(ring.inner_radius, 2.0);
        assert_relative_eq!(ring.outer_radius, 3.0);
        assert_eq!(params.moons.len(), 1);
        assert_relative_eq!(params.moons[0].distance, 4.0);
        // untouched by the builders
        assert_relative_eq!(params.radius, 1.0);
        assert_relative_eq!(params.orbital_speed, 5.0);
    }

    #[test]
    fn test_moon_color_defaults_to_gray() {
        let moon = MoonParameters::new(0.5, 4.0, 9.0);
        assert_relative_eq!(moon.color, mid_gray());
        let tinted = moon.with_color(Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(tinted.color, Point3::new(1.0, 0.0, 0.0));
    }
}
