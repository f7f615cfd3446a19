//! Minimal scene graph: a forest of nodes with translation, per-axis scale
//! and an optional surface material.

use glam::Vec3;

/// A coordinate in the room's rendering space.
pub type WorldPoint = Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

/// Which faces of a surface are drawn and can be hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Front,
    Back,
    Double,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
    pub opacity: f32,
    pub wireframe: bool,
    pub side: Side,
    pub lit: bool,
}

impl Material {
    pub fn basic(color: [f32; 3]) -> Self {
        Self {
            color,
            opacity: 1.0,
            wireframe: false,
            side: Side::Front,
            lit: false,
        }
    }

    pub fn transparent(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn wireframe(mut self) -> Self {
        self.wireframe = true;
        self
    }

    pub fn lit(mut self) -> Self {
        self.lit = true;
        self
    }

    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Group,
    RoomBox { size: Vec3 },
    Grid { width: f32, depth: f32, divisions: (u32, u32) },
    AmbientLight { color: [f32; 3], intensity: f32 },
    PointLight { color: [f32; 3], intensity: f32 },
    Marker { radius: f32 },
    Wave { radius: f32 },
}

#[derive(Clone, Debug)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub position: Vec3,
    pub scale: Vec3,
    pub material: Option<Material>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            id: NodeId(0),
            kind,
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            material: None,
            children: Vec::new(),
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }
}

/// Accumulated translation and scale of a node in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldTransform {
    pub offset: Vec3,
    pub scale: Vec3,
}

impl WorldTransform {
    pub const IDENTITY: Self = Self {
        offset: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    fn then(&self, node: &Node) -> Self {
        Self {
            offset: self.offset + self.scale * node.position,
            scale: self.scale * node.scale,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    roots: Vec<Node>,
    next_id: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node at the top level and return its id.
    pub fn add(&mut self, mut node: Node) -> NodeId {
        let id = self.allocate(&mut node);
        self.roots.push(node);
        id
    }

    /// Add a node under `parent`; `None` when the parent does not exist.
    pub fn add_to(&mut self, parent: NodeId, mut node: Node) -> Option<NodeId> {
        let id = self.allocate(&mut node);
        let parent = find_mut(&mut self.roots, parent)?;
        parent.children.push(node);
        Some(id)
    }

    /// Detach a node (and its subtree). Returns whether anything was removed.
    pub fn remove(&mut self, id: NodeId) -> bool {
        remove_from(&mut self.roots, id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        find(&self.roots, id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        find_mut(&mut self.roots, id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Every node, depth first, with its world transform.
    pub fn flatten(&self) -> Vec<(&Node, WorldTransform)> {
        let mut out = Vec::new();
        for root in &self.roots {
            collect(root, WorldTransform::IDENTITY, &mut out);
        }
        out
    }

    /// First node (depth first) matching `pred`.
    pub fn find_kind(&self, pred: impl Fn(&NodeKind) -> bool) -> Option<(&Node, WorldTransform)> {
        self.flatten().into_iter().find(|(n, _)| pred(&n.kind))
    }

    pub fn count(&self, pred: impl Fn(&NodeKind) -> bool) -> usize {
        self.flatten().iter().filter(|(n, _)| pred(&n.kind)).count()
    }

    pub fn len(&self) -> usize {
        self.flatten().len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    fn allocate(&mut self, node: &mut Node) -> NodeId {
        self.next_id += 1;
        node.id = NodeId(self.next_id);
        node.id
    }
}

fn collect<'a>(node: &'a Node, parent: WorldTransform, out: &mut Vec<(&'a Node, WorldTransform)>) {
    let xf = parent.then(node);
    out.push((node, xf));
    for child in &node.children {
        collect(child, xf, out);
    }
}

fn find(nodes: &[Node], id: NodeId) -> Option<&Node> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find(&node.children, id) {
            return Some(found);
        }
    }
    None
}

fn find_mut(nodes: &mut [Node], id: NodeId) -> Option<&mut Node> {
    for node in nodes.iter_mut() {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_mut(&mut node.children, id) {
            return Some(found);
        }
    }
    None
}

fn remove_from(nodes: &mut Vec<Node>, id: NodeId) -> bool {
    if let Some(idx) = nodes.iter().position(|n| n.id == id) {
        nodes.remove(idx);
        return true;
    }
    nodes.iter_mut().any(|n| remove_from(&mut n.children, id))
}
