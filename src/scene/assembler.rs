use nalgebra::Point3;

use crate::model::body::BodyParameters;
use crate::model::system::{
    ambient_color, sky_color, star_color, sun_color, AMBIENT_INTENSITY, SKY_RADIUS,
    STAR_COUNT, STAR_POINT_SIZE, STAR_SHELL, SUN_LIGHT_INTENSITY, SUN_RADIUS,
};

use super::drawable::{Drawable, Geometry, Material};
use super::factory::{create_planet, BodyHandle};
use super::geometry::starfield_points;
use super::{NodeId, SceneGraph};

/// Light levels for the assembled scene.
#[derive(Debug, Clone, Copy)]
pub struct Lighting {
    /// Point light at the sun's position.
    pub sun_intensity: f32,
    pub ambient_color: Point3<f32>,
    pub ambient_intensity: f32,
}

/// The world, assembled once at startup. Per-frame work only rotates nodes
/// that already exist; nothing here is rebuilt while the loop runs.
pub struct SolarScene {
    pub graph: SceneGraph,
    pub handles: Vec<BodyHandle>,
    pub sun_group: NodeId,
    pub sun_mesh: NodeId,
    pub starfield: NodeId,
    pub sky: NodeId,
    pub lighting: Lighting,
}

impl SolarScene {
    /// Build the backdrop, the sun, and one planet subtree per entry of
    /// `bodies`, in order. `star_seed` fixes the starfield scatter.
    pub fn assemble(bodies: &[BodyParameters], star_seed: u64) -> Self {
        let mut graph = SceneGraph::new();
        let root = graph.root();

        // Backdrop: a big sphere turned inside out by the negative x scale,
        // dark and unlit.
        let sky = graph.add_drawable(
            root,
            "sky",
            Drawable {
                geometry: Geometry::Sphere { radius: SKY_RADIUS },
                material: Material::unlit(sky_color()).double_sided(),
            },
        );
        graph.set_scale(sky, -1.0, 1.0, 1.0);

        let starfield = graph.add_drawable(
            root,
            "starfield",
            Drawable {
                geometry: Geometry::Points {
                    points: starfield_points(STAR_COUNT, STAR_SHELL.0, STAR_SHELL.1, star_seed),
                    size: STAR_POINT_SIZE,
                },
                material: Material::unlit(star_color()),
            },
        );

        // The sun group anchors every orbit pivot; the mesh keeps its spin to
        // itself.
        let sun_group = graph.add_node(root, "sun group");
        let sun_mesh = graph.add_drawable(
            sun_group,
            "sun",
            Drawable {
                geometry: Geometry::Sphere { radius: SUN_RADIUS },
                material: Material::emissive(sun_color()),
            },
        );

        let handles = bodies
            .iter()
            .map(|params| create_planet(&mut graph, sun_group, params))
            .collect();

        SolarScene {
            graph,
            handles,
            sun_group,
            sun_mesh,
            starfield,
            sky,
            lighting: Lighting {
                sun_intensity: SUN_LIGHT_INTENSITY,
                ambient_color: ambient_color(),
                ambient_intensity: AMBIENT_INTENSITY,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::system::reference_bodies;
    use crate::scene::Shading;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    #[test]
    fn test_assembles_one_handle_per_body_in_order() {
        let bodies = reference_bodies();
        let scene = SolarScene::assemble(&bodies, 7);

        assert_eq!(scene.handles.len(), bodies.len());
        for (handle, params) in scene.handles.iter().zip(&bodies) {
            assert_eq!(handle.name, params.name);
            assert_eq!(
                scene.graph.node(handle.orbit_pivot).parent(),
                Some(scene.sun_group)
            );
            assert_eq!(handle.moons.len(), params.moons.len());
            assert_eq!(handle.ring.is_some(), params.ring.is_some());
        }
    }

    #[test]
    fn test_empty_body_list_still_gets_sun_and_backdrop() {
        let scene = SolarScene::assemble(&[], 7);
        assert!(scene.handles.is_empty());

        let sun = scene.graph.node(scene.sun_mesh);
        assert_eq!(sun.parent(), Some(scene.sun_group));
        let material = sun.drawable().unwrap().material;
        assert_eq!(material.shading, Shading::Emissive);

        assert!(matches!(
            scene.graph.node(scene.sky).drawable().unwrap().geometry,
            Geometry::Sphere { radius } if radius == SKY_RADIUS
        ));
        assert_eq!(scene.graph.node(scene.starfield).parent(), Some(scene.graph.root()));
    }

    #[test]
    fn test_sky_sphere_is_inverted() {
        let scene = SolarScene::assemble(&[], 7);
        assert_relative_eq!(
            scene.graph.node(scene.sky).scale(),
            Vector3::new(-1.0, 1.0, 1.0)
        );
    }

    #[test]
    fn test_starfield_scatter_follows_the_seed() {
        let scene_a = SolarScene::assemble(&[], 42);
        let scene_b = SolarScene::assemble(&[], 42);

        let points = |scene: &SolarScene| match &scene
            .graph
            .node(scene.starfield)
            .drawable()
            .unwrap()
            .geometry
        {
            Geometry::Points { points, .. } => points.clone(),
            _ => unreachable!(),
        };

        let stars = points(&scene_a);
        assert_eq!(stars.len(), STAR_COUNT);
        assert_eq!(stars, points(&scene_b));
        for star in &stars {
            let r = star.coords.norm();
            assert!(r >= STAR_SHELL.0 * 0.999 && r <= STAR_SHELL.1 * 1.001);
        }
    }

    #[test]
    fn test_lighting_carries_the_scene_levels() {
        let scene = SolarScene::assemble(&[], 7);
        assert_relative_eq!(scene.lighting.sun_intensity, SUN_LIGHT_INTENSITY);
        assert_relative_eq!(scene.lighting.ambient_intensity, AMBIENT_INTENSITY);
        assert_relative_eq!(scene.lighting.ambient_color, ambient_color());
    }
}
