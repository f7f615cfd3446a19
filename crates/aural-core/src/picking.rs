use crate::camera::{Camera, Ray};
use crate::scene::{Node, NodeId, NodeKind, Scene, Side, WorldPoint, WorldTransform};
use glam::{Vec2, Vec3};

/// Screen rectangle of the drawing surface in client (CSS) pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClientRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// A ray/surface intersection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub node: NodeId,
    pub distance: f32,
    pub point: WorldPoint,
}

/// Map a pointer position to normalized device coordinates, y up.
#[inline]
pub fn pointer_ndc(client_x: f32, client_y: f32, rect: ClientRect) -> Option<Vec2> {
    if !(rect.width > 0.0 && rect.height > 0.0) {
        return None;
    }
    let x = (client_x - rect.left) / rect.width * 2.0 - 1.0;
    let y = -((client_y - rect.top) / rect.height) * 2.0 + 1.0;
    Some(Vec2::new(x, y))
}

/// Distance to the front face of a sphere, if the ray enters it ahead of
/// the origin.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Slab-method ray/AABB test returning the entry and exit distances along
/// the ray. Either may be negative when the origin is inside or past the box.
pub fn ray_aabb(ray_origin: Vec3, ray_dir: Vec3, min: Vec3, max: Vec3) -> Option<(f32, f32)> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    for axis in 0..3 {
        let o = ray_origin[axis];
        let d = ray_dir[axis];
        if d.abs() < f32::EPSILON {
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let (mut t0, mut t1) = ((min[axis] - o) * inv, (max[axis] - o) * inv);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_enter = t_enter.max(t0);
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return None;
        }
    }
    (t_exit >= 0.0).then_some((t_enter, t_exit))
}

fn hit_box(ray: &Ray, xf: WorldTransform, size: Vec3, side: Side) -> Option<f32> {
    let half = xf.scale * size * 0.5;
    let (t_enter, t_exit) = ray_aabb(ray.origin, ray.direction, xf.offset - half, xf.offset + half)?;
    // Front faces are crossed on entry, back faces on exit.
    let front = (t_enter >= 0.0).then_some(t_enter);
    match side {
        Side::Front => front,
        Side::Back => Some(t_exit),
        Side::Double => front.or(Some(t_exit)),
    }
}

fn hit_node(ray: &Ray, node: &Node, xf: WorldTransform) -> Option<f32> {
    let side = node.material.map(|m| m.side).unwrap_or(Side::Front);
    match node.kind {
        NodeKind::RoomBox { size } => hit_box(ray, xf, size, side),
        NodeKind::Marker { radius } | NodeKind::Wave { radius } => {
            ray_sphere(ray.origin, ray.direction, xf.offset, radius * xf.scale.max_element())
        }
        NodeKind::Group
        | NodeKind::Grid { .. }
        | NodeKind::AmbientLight { .. }
        | NodeKind::PointLight { .. } => None,
    }
}

/// All surfaces the ray hits, nearest first.
pub fn intersect_scene(ray: &Ray, scene: &Scene) -> Vec<Hit> {
    let mut hits: Vec<Hit> = scene
        .flatten()
        .into_iter()
        .filter_map(|(node, xf)| {
            hit_node(ray, node, xf).map(|distance| Hit {
                node: node.id,
                distance,
                point: ray.at(distance),
            })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

/// Nearest surface point under a pointer, or `None` on a miss.
pub fn resolve_point(ndc: Vec2, camera: &Camera, scene: &Scene) -> Option<WorldPoint> {
    let ray = camera.ray_from_ndc(ndc);
    intersect_scene(&ray, scene).first().map(|hit| hit.point)
}
