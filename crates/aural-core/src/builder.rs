use crate::camera::Camera;
use crate::constants::{
    AMBIENT_INTENSITY, GRID_COLOR, LIGHT_COLOR, MARKER_COLOR, MARKER_RADIUS, POINT_LIGHT_INTENSITY,
    ROOM_COLOR, ROOM_OPACITY, WAVE_COLOR, WAVE_START_OPACITY,
};
use crate::room::RoomDimensions;
use crate::scene::{Material, Node, NodeKind, Scene, Side, WorldPoint};
use glam::Vec3;

/// Room walls (seen from inside), floor grid, ambient and point light.
pub fn build_scene(dims: &RoomDimensions) -> Scene {
    let mut scene = Scene::new();

    let room = scene.add(Node::new(NodeKind::Group));
    let walls = Node::new(NodeKind::RoomBox { size: dims.size() }).with_material(
        Material::basic(ROOM_COLOR)
            .transparent(ROOM_OPACITY)
            .side(Side::Back)
            .lit(),
    );
    let grid = Node::new(NodeKind::Grid {
        width: dims.width(),
        depth: dims.depth(),
        divisions: dims.grid_divisions(),
    })
    .at(Vec3::new(0.0, dims.floor_y(), 0.0))
    .with_material(Material::basic(GRID_COLOR));
    scene.add_to(room, walls);
    scene.add_to(room, grid);

    scene.add(Node::new(NodeKind::AmbientLight {
        color: LIGHT_COLOR,
        intensity: AMBIENT_INTENSITY,
    }));
    scene.add(
        Node::new(NodeKind::PointLight {
            color: LIGHT_COLOR,
            intensity: POINT_LIGHT_INTENSITY,
        })
        .at(dims.point_light_position()),
    );
    scene
}

/// Camera outside the box, looking at its center.
pub fn build_camera(dims: &RoomDimensions, aspect: f32) -> Camera {
    Camera::looking_at(dims.camera_home(), Vec3::ZERO, aspect)
}

pub fn marker_node(point: WorldPoint) -> Node {
    Node::new(NodeKind::Marker {
        radius: MARKER_RADIUS,
    })
    .at(point)
    .with_material(Material::basic(MARKER_COLOR))
}

pub fn wave_node(point: WorldPoint) -> Node {
    Node::new(NodeKind::Wave {
        radius: MARKER_RADIUS,
    })
    .at(point)
    .with_material(
        Material::basic(WAVE_COLOR)
            .transparent(WAVE_START_OPACITY)
            .wireframe(),
    )
}
