use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use kiss3d::camera::Camera;
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::resource::Mesh;
use kiss3d::scene::SceneNode;
use kiss3d::window::Window;
use nalgebra::Vector3;

use super::context::SceneContext;
use crate::scene::{Geometry, Material, Node, NodeId, Shading};

/// Mirrors the scene graph into kiss3d. Spheres and ring meshes become
/// retained scene nodes, created once up front; orbit paths and the starfield
/// go through the immediate-mode line and point calls every frame.
pub struct View {
    ctx: SceneContext,
    object_nodes: HashMap<NodeId, SceneNode>,
    path_nodes: Vec<NodeId>,
    point_nodes: Vec<NodeId>,
}

impl View {
    pub fn new(ctx: SceneContext, window: &mut Window) -> Self {
        let mut object_nodes = HashMap::new();
        let mut path_nodes = vec![];
        let mut point_nodes = vec![];

        for (id, node) in ctx.scene.graph.nodes() {
            let drawable = match node.drawable() {
                Some(drawable) => drawable,
                None => continue,
            };
            match &drawable.geometry {
                Geometry::Sphere { radius } => {
                    let mut sphere = Self::create_sphere_object(window, *radius, node);
                    Self::apply_material(&mut sphere, &drawable.material);
                    object_nodes.insert(id, sphere);
                }
                Geometry::Annulus { positions, indices } => {
                    let mut ring = Self::create_mesh_object(window, positions, indices);
                    Self::apply_material(&mut ring, &drawable.material);
                    object_nodes.insert(id, ring);
                }
                Geometry::Polyline { .. } => path_nodes.push(id),
                Geometry::Points { .. } => point_nodes.push(id),
            }
        }

        let mut view = Self {
            ctx,
            object_nodes,
            path_nodes,
            point_nodes,
        };
        view.sync_objects();

        view
    }

    fn create_sphere_object(window: &mut Window, radius: f32, node: &Node) -> SceneNode {
        let mut sphere = window.add_sphere(radius);
        // add_sphere bakes the radius into the node's scale, so a non-unit
        // graph scale has to be folded in rather than set on its own.
        let scale = node.scale();
        if scale != Vector3::new(1.0, 1.0, 1.0) {
            sphere.set_local_scale(radius * scale.x, radius * scale.y, radius * scale.z);
        }
        sphere
    }

    fn create_mesh_object(
        window: &mut Window,
        positions: &[nalgebra::Point3<f32>],
        indices: &[nalgebra::Point3<u16>],
    ) -> SceneNode {
        let mesh = Mesh::new(positions.to_vec(), indices.to_vec(), None, None, false);
        window.add_mesh(Rc::new(RefCell::new(mesh)), Vector3::new(1.0, 1.0, 1.0))
    }

    fn apply_material(object: &mut SceneNode, material: &Material) {
        let color = Self::mirror_color(material);
        object.set_color(color.x, color.y, color.z);
        if material.double_sided {
            object.enable_backface_culling(false);
        }
    }

    /// Color to upload for a mirrored node. The stock kiss3d material has
    /// no per-node alpha or emissive term, so opacity dims the color, and
    /// unlit or self-luminous surfaces upload triple the target: the stock
    /// shader draws a flat color/3 plus Lambertian and specular thirds,
    /// and the light sits inside the sun and the sky, so on those the flat
    /// third is all that survives. The ring's sunward face picks up a
    /// little extra, which reads fine for a translucent ring.
    fn mirror_color(material: &Material) -> Vector3<f32> {
        let color = material.color.coords * material.opacity;
        match material.shading {
            Shading::Lit => color,
            Shading::Unlit | Shading::Emissive => color * 3.0,
        }
    }

    pub fn context(&self) -> &SceneContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut SceneContext {
        &mut self.ctx
    }

    /// Push current world transforms into the retained kiss3d nodes.
    fn sync_objects(&mut self) {
        for (id, object) in self.object_nodes.iter_mut() {
            object.set_local_transformation(self.ctx.scene.graph.world_isometry(*id));
        }
    }

    fn draw_paths(&self, window: &mut Window) {
        for &id in &self.path_nodes {
            let node = self.ctx.scene.graph.node(id);
            let drawable = match node.drawable() {
                Some(drawable) => drawable,
                None => continue,
            };
            if let Geometry::Polyline { points } = &drawable.geometry {
                let transform = self.ctx.scene.graph.world_isometry(id);
                let mut prev_pt = None;
                for pt in points {
                    let pt = transform * pt;
                    if let Some(prev_pt) = prev_pt {
                        window.draw_line(&prev_pt, &pt, &drawable.material.color);
                    }
                    prev_pt = Some(pt);
                }
            }
        }
    }

    fn draw_points(&self, window: &mut Window) {
        for &id in &self.point_nodes {
            let node = self.ctx.scene.graph.node(id);
            let drawable = match node.drawable() {
                Some(drawable) => drawable,
                None => continue,
            };
            if let Geometry::Points { points, size } = &drawable.geometry {
                window.set_point_size(*size);
                let transform = self.ctx.scene.graph.world_isometry(id);
                for pt in points {
                    window.draw_point(&(transform * pt), &drawable.material.color);
                }
            }
        }
    }

    pub fn prerender_scene(&mut self, window: &mut Window) {
        self.sync_objects();
        self.draw_paths(window);
        self.draw_points(window);
    }

    pub fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        (Some(&mut self.ctx.camera), None, None, None)
    }
}
