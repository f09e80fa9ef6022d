use std::f32::consts::FRAC_PI_2;

use nalgebra::Point3;

use crate::model::body::BodyParameters;
use crate::model::system::{ORBIT_PATH_SEGMENTS, RING_OPACITY, RING_SEGMENTS};

use super::drawable::{Drawable, Geometry, Material};
use super::geometry::{annulus, circle_polyline};
use super::{NodeId, SceneGraph};

/// What the per-frame update needs to animate one moon.
#[derive(Debug, Clone, Copy)]
pub struct MoonHandle {
    /// Rotating this pivot about y carries the moon around its planet.
    pub pivot: NodeId,
    /// Degrees per second.
    pub orbital_speed: f32,
}

/// Live handle to one assembled planet. Holds the node ids the animation
/// touches every frame plus the rates to drive them with.
#[derive(Debug, Clone)]
pub struct BodyHandle {
    pub name: String,
    /// Rotating this pivot about y revolves the whole subtree around the
    /// parent.
    pub orbit_pivot: NodeId,
    /// Carries the orbital offset and the fixed axial tilt; mesh, ring and
    /// moons all hang off it.
    pub body_group: NodeId,
    /// The sphere itself. Spin lands here, so the ring and moons don't
    /// inherit it.
    pub mesh: NodeId,
    pub ring: Option<NodeId>,
    pub moons: Vec<MoonHandle>,
    /// Degrees per second about the orbit pivot.
    pub orbital_speed: f32,
    /// Degrees per second about the mesh's own axis.
    pub spin_speed: f32,
}

/// Build one planet subtree under `parent`:
///
/// ```text
/// parent -> orbit pivot -> body group -> mesh
///                |              |-> ring        (optional)
///                |              `-> moon pivot -> moon mesh   (per moon)
///                `-> orbit path
/// ```
///
/// The orbit path circle stays under the pivot, where the pivot's own
/// rotation leaves it visually unchanged.
pub fn create_planet(
    graph: &mut SceneGraph,
    parent: NodeId,
    params: &BodyParameters,
) -> BodyHandle {
    let orbit_pivot = graph.add_node(parent, &format!("{} pivot", params.name));

    // Dim the body color for the path line, so it reads as an annotation.
    let path_color = Point3::from(params.color.coords * 0.5);
    graph.add_drawable(
        orbit_pivot,
        &format!("{} orbit", params.name),
        Drawable {
            geometry: Geometry::Polyline {
                points: circle_polyline(params.distance, ORBIT_PATH_SEGMENTS),
            },
            material: Material::unlit(path_color),
        },
    );

    let body_group = graph.add_node(orbit_pivot, &format!("{} group", params.name));
    graph.set_translation(body_group, params.distance, 0.0, 0.0);
    graph.set_rotation(body_group, 0.0, 0.0, params.axial_tilt_deg.to_radians());

    let mesh = graph.add_drawable(
        body_group,
        &params.name,
        Drawable {
            geometry: Geometry::Sphere {
                radius: params.radius,
            },
            material: Material::lit(params.color),
        },
    );

    let ring = params.ring.map(|ring| {
        let (positions, indices) = annulus(ring.inner_radius, ring.outer_radius, RING_SEGMENTS);
        let id = graph.add_drawable(
            body_group,
            &format!("{} ring", params.name),
            Drawable {
                geometry: Geometry::Annulus { positions, indices },
                material: Material::unlit(ring.color)
                    .with_opacity(RING_OPACITY)
                    .double_sided(),
            },
        );
        // The annulus is generated flat in XY; lay it into the orbital plane.
        graph.set_rotation(id, -FRAC_PI_2, 0.0, 0.0);
        id
    });

    let moons = params
        .moons
        .iter()
        .enumerate()
        .map(|(i, moon)| {
            let pivot = graph.add_node(body_group, &format!("{} moon {} pivot", params.name, i));
            let moon_mesh = graph.add_drawable(
                pivot,
                &format!("{} moon {}", params.name, i),
                Drawable {
                    geometry: Geometry::Sphere {
                        radius: moon.radius,
                    },
                    material: Material::lit(moon.color),
                },
            );
            graph.set_translation(moon_mesh, moon.distance, 0.0, 0.0);
            MoonHandle {
                pivot,
                orbital_speed: moon.orbital_speed,
            }
        })
        .collect();

    BodyHandle {
        name: params.name.clone(),
        orbit_pivot,
        body_group,
        mesh,
        ring,
        moons,
        orbital_speed: params.orbital_speed,
        spin_speed: params.spin_speed,
    }
}
