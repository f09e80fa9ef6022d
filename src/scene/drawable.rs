use nalgebra::Point3;

/// Renderable geometry attached to a node. Meshes are generated up front;
/// per-frame work never rebuilds them.
#[derive(Debug, Clone)]
pub enum Geometry {
    /// Unit sphere scaled by `radius`.
    Sphere { radius: f32 },
    /// Flat triangulated ring in the node's local XY plane.
    Annulus {
        positions: Vec<Point3<f32>>,
        indices: Vec<Point3<u16>>,
    },
    /// Line strip through the given points.
    Polyline { points: Vec<Point3<f32>> },
    /// Point sprites, `size` pixels each.
    Points { points: Vec<Point3<f32>>, size: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shading {
    /// Shaded by the scene lights.
    Lit,
    /// Flat color, no lighting applied.
    Unlit,
    /// Acts as if self-luminous.
    Emissive,
}

#[derive(Debug, Clone, Copy)]
pub struct Material {
    pub color: Point3<f32>,
    pub shading: Shading,
    /// 1.0 is fully opaque.
    pub opacity: f32,
    /// Render both faces instead of culling the back one.
    pub double_sided: bool,
}

impl Material {
    pub fn lit(color: Point3<f32>) -> Self {
        Material {
            color,
            shading: Shading::Lit,
            opacity: 1.0,
            double_sided: false,
        }
    }

    pub fn unlit(color: Point3<f32>) -> Self {
        Material {
            shading: Shading::Unlit,
            ..Material::lit(color)
        }
    }

    pub fn emissive(color: Point3<f32>) -> Self {
        Material {
            shading: Shading::Emissive,
            ..Material::lit(color)
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Drawable {
    pub geometry: Geometry,
    pub material: Material,
}
