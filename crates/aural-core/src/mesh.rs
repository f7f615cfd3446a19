//! CPU-side geometry for the room box, grid and spheres.
//!
//! Meshes are unit sized where possible (box edge 1, sphere radius 1) and
//! scaled per instance by the renderer.

use crate::constants::GRID_MAX_DIVISIONS;
use glam::Vec3;
use std::collections::BTreeSet;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn line_count(&self) -> usize {
        self.indices.len() / 2
    }
}

/// Axis-aligned box of edge 1 centered on the origin, outward normals,
/// counter-clockwise front faces.
pub fn unit_box() -> MeshData {
    // (normal, u axis, v axis) per face; u x v == normal
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    let mut mesh = MeshData::default();
    for (normal, u, v) in faces {
        let base = mesh.vertices.len() as u32;
        let center = normal * 0.5;
        for (su, sv) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
            mesh.vertices
                .push(MeshVertex::new(center + u * su + v * sv, normal));
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// Latitude/longitude sphere of radius 1.
pub fn uv_sphere(width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut mesh = MeshData::default();
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let p = Vec3::new(
                -(u * TAU).cos() * (v * PI).sin(),
                (v * PI).cos(),
                (u * TAU).sin() * (v * PI).sin(),
            );
            mesh.vertices.push(MeshVertex::new(p, p.normalize_or_zero()));
        }
    }
    let row = ws + 1;
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

/// Unique triangle edges as a line list over the same vertices.
pub fn wireframe(mesh: &MeshData) -> MeshData {
    let mut edges = BTreeSet::new();
    for tri in mesh.indices.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let pa = mesh.vertices[a as usize].position;
            let pb = mesh.vertices[b as usize].position;
            // seam and pole vertices are duplicated; skip degenerate edges
            if pa == pb {
                continue;
            }
            edges.insert((a.min(b), a.max(b)));
        }
    }
    MeshData {
        vertices: mesh.vertices.clone(),
        indices: edges.into_iter().flat_map(|(a, b)| [a, b]).collect(),
    }
}

/// Floor grid on the XZ plane covering `width x depth`, centered on the
/// origin, as a line list. Divisions are clamped to `1..=GRID_MAX_DIVISIONS`.
pub fn grid_lines(width: f32, depth: f32, divisions: (u32, u32)) -> MeshData {
    let (dx, dz) = (
        divisions.0.clamp(1, GRID_MAX_DIVISIONS),
        divisions.1.clamp(1, GRID_MAX_DIVISIONS),
    );
    let (hw, hd) = (width / 2.0, depth / 2.0);
    let mut mesh = MeshData::default();
    let mut segment = |a: Vec3, b: Vec3| {
        let base = mesh.vertices.len() as u32;
        mesh.vertices.push(MeshVertex::new(a, Vec3::Y));
        mesh.vertices.push(MeshVertex::new(b, Vec3::Y));
        mesh.indices.extend_from_slice(&[base, base + 1]);
    };
    for i in 0..=dx {
        let x = -hw + width * i as f32 / dx as f32;
        segment(Vec3::new(x, 0.0, -hd), Vec3::new(x, 0.0, hd));
    }
    for i in 0..=dz {
        let z = -hd + depth * i as f32 / dz as f32;
        segment(Vec3::new(-hw, 0.0, z), Vec3::new(hw, 0.0, z));
    }
    mesh
}
