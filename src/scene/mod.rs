use nalgebra::{Isometry3, Translation3, UnitQuaternion, Vector3};

mod assembler;
mod drawable;
mod factory;
mod geometry;

pub use assembler::{Lighting, SolarScene};
pub use drawable::{Drawable, Geometry, Material, Shading};
pub use factory::{create_planet, BodyHandle, MoonHandle};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// One transform in the scene tree. Rotation is stored as per-axis Euler
/// angles (radians) so the per-frame increments accumulate linearly; in this
/// scene no node ever rotates about more than one axis.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    translation: Translation3<f32>,
    rotation: Vector3<f32>,
    scale: Vector3<f32>,
    drawable: Option<Drawable>,
}

impl Node {
    fn new(name: &str, parent: Option<NodeId>) -> Self {
        Node {
            name: name.to_owned(),
            parent,
            children: vec![],
            translation: Translation3::identity(),
            rotation: Vector3::zeros(),
            scale: Vector3::new(1.0, 1.0, 1.0),
            drawable: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn translation(&self) -> Translation3<f32> {
        self.translation
    }

    /// Euler angles about x, y, z, in radians.
    pub fn rotation(&self) -> Vector3<f32> {
        self.rotation
    }

    /// Non-uniform scale. Cosmetic only: world transforms stay rigid, the
    /// renderer applies scale when it mirrors the node.
    pub fn scale(&self) -> Vector3<f32> {
        self.scale
    }

    pub fn drawable(&self) -> Option<&Drawable> {
        self.drawable.as_ref()
    }

    pub fn local_isometry(&self) -> Isometry3<f32> {
        let rotation =
            UnitQuaternion::from_euler_angles(self.rotation.x, self.rotation.y, self.rotation.z);
        Isometry3::from_parts(self.translation, rotation)
    }
}

/// Tree of nodes in a flat arena. Ids are never reused; nothing is removed
/// after assembly.
pub struct SceneGraph {
    nodes: Vec<Node>,
}

impl SceneGraph {
    pub fn new() -> Self {
        SceneGraph {
            nodes: vec![Node::new("scene", None)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn add_node(&mut self, parent: NodeId, name: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(name, Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn add_drawable(&mut self, parent: NodeId, name: &str, drawable: Drawable) -> NodeId {
        let id = self.add_node(parent, name);
        self.nodes[id.0].drawable = Some(drawable);
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn set_translation(&mut self, id: NodeId, x: f32, y: f32, z: f32) {
        self.nodes[id.0].translation = Translation3::new(x, y, z);
    }

    /// Set the Euler angles (radians) outright. Build-time only; animation
    /// goes through [`SceneGraph::rotate_y`].
    pub fn set_rotation(&mut self, id: NodeId, x: f32, y: f32, z: f32) {
        self.nodes[id.0].rotation = Vector3::new(x, y, z);
    }

    pub fn set_scale(&mut self, id: NodeId, x: f32, y: f32, z: f32) {
        self.nodes[id.0].scale = Vector3::new(x, y, z);
    }

    /// Advance the node's rotation about its vertical axis. Increments add,
    /// so two quarter turns land exactly where one half turn does.
    pub fn rotate_y(&mut self, id: NodeId, radians: f32) {
        self.nodes[id.0].rotation.y += radians;
    }

    /// Rigid transform from node space to world space.
    pub fn world_isometry(&self, id: NodeId) -> Isometry3<f32> {
        let node = self.node(id);
        match node.parent {
            Some(parent) => self.world_isometry(parent) * node.local_isometry(),
            None => node.local_isometry(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_nodes_attach_under_their_parent() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let a = graph.add_node(root, "a");
        let b = graph.add_node(a, "b");

        assert_eq!(graph.node(a).parent(), Some(root));
        assert_eq!(graph.node(b).parent(), Some(a));
        assert_eq!(graph.node(root).children(), &[a]);
        assert_eq!(graph.node(a).children(), &[b]);
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.node(b).name(), "b");
    }

    #[test]
    fn test_child_translation_rides_parent_rotation() {
        let mut graph = SceneGraph::new();
        let pivot = graph.add_node(graph.root(), "pivot");
        let child = graph.add_node(pivot, "child");
        graph.set_translation(child, 5.0, 0.0, 0.0);

        // A quarter turn about +y carries +x onto -z.
        graph.rotate_y(pivot, FRAC_PI_2);
        let world = graph.world_isometry(child);
        assert_relative_eq!(
            world.translation.vector,
            Vector3::new(0.0, 0.0, -5.0),
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_rotations_accumulate_additively() {
        let mut graph = SceneGraph::new();
        let node = graph.add_node(graph.root(), "spinner");

        graph.rotate_y(node, FRAC_PI_2);
        graph.rotate_y(node, FRAC_PI_2);
        assert_relative_eq!(graph.node(node).rotation().y, PI);

        // Keeps counting past a full turn instead of wrapping.
        graph.rotate_y(node, PI);
        graph.rotate_y(node, PI);
        assert_relative_eq!(graph.node(node).rotation().y, 3.0 * PI);
    }

    #[test]
    fn test_world_isometry_composes_down_the_chain() {
        let mut graph = SceneGraph::new();
        let pivot = graph.add_node(graph.root(), "pivot");
        let group = graph.add_node(pivot, "group");
        graph.set_translation(group, 10.0, 0.0, 0.0);
        let moon_pivot = graph.add_node(group, "moon pivot");
        let moon = graph.add_node(moon_pivot, "moon");
        graph.set_translation(moon, 2.0, 0.0, 0.0);

        // Half a turn of the planet pivot puts the group at -x; half a turn
        // of the moon pivot folds the moon back toward the origin.
        graph.rotate_y(pivot, PI);
        graph.rotate_y(moon_pivot, PI);
        let world = graph.world_isometry(moon);
        assert_relative_eq!(
            world.translation.vector,
            Vector3::new(-8.0, 0.0, 0.0),
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_negative_rates_turn_the_other_way() {
        let mut graph = SceneGraph::new();
        let pivot = graph.add_node(graph.root(), "pivot");
        let child = graph.add_node(pivot, "child");
        graph.set_translation(child, 5.0, 0.0, 0.0);

        graph.rotate_y(pivot, -FRAC_PI_2);
        let world = graph.world_isometry(child);
        assert_relative_eq!(
            world.translation.vector,
            Vector3::new(0.0, 0.0, 5.0),
            epsilon = 1e-5
        );
    }
}
