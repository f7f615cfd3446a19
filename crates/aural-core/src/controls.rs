//! Orbit-style camera controls: rotate around a target, pan it, dolly in
//! and out. Input only accumulates deltas; `update` applies them once per
//! frame.

use crate::camera::{Camera, Viewport};
use crate::constants::{
    ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_POLAR_EPSILON, ORBIT_ROTATE_SPEED,
    ORBIT_ZOOM_STEP,
};
use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragMode {
    #[default]
    None,
    Rotate,
    Pan,
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub rotate_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    // (azimuth, polar) in radians
    rotate_delta: Vec2,
    pan_offset: Vec3,
    zoom_scale: f32,
    drag: DragMode,
    last_pointer: Option<Vec2>,
    travel_px: f32,
}

impl OrbitControls {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            rotate_speed: ORBIT_ROTATE_SPEED,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            rotate_delta: Vec2::ZERO,
            pan_offset: Vec3::ZERO,
            zoom_scale: 1.0,
            drag: DragMode::None,
            last_pointer: None,
            travel_px: 0.0,
        }
    }

    pub fn drag_mode(&self) -> DragMode {
        self.drag
    }

    /// Pixels the pointer moved during the current or most recent drag.
    pub fn drag_travel(&self) -> f32 {
        self.travel_px
    }

    pub fn begin_drag(&mut self, mode: DragMode, pointer: Vec2) {
        self.drag = mode;
        self.last_pointer = Some(pointer);
        self.travel_px = 0.0;
    }

    pub fn drag_to(&mut self, pointer: Vec2, camera: &Camera, viewport: Viewport) {
        let Some(last) = self.last_pointer else {
            return;
        };
        let delta = pointer - last;
        self.last_pointer = Some(pointer);
        self.travel_px += delta.length();
        let h = viewport.height.max(1.0);
        match self.drag {
            DragMode::None => {}
            DragMode::Rotate => {
                self.rotate_delta.x -= TAU * delta.x / h * self.rotate_speed;
                self.rotate_delta.y -= TAU * delta.y / h * self.rotate_speed;
            }
            DragMode::Pan => {
                let distance = (camera.eye - self.target).length() * (camera.fovy_radians / 2.0).tan();
                let (right, up) = camera.basis();
                self.pan_offset += -right * (2.0 * delta.x * distance / h);
                self.pan_offset += up * (2.0 * delta.y * distance / h);
            }
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = DragMode::None;
        self.last_pointer = None;
    }

    /// Wheel input; negative `delta_y` dollies in.
    pub fn zoom(&mut self, delta_y: f32) {
        if delta_y < 0.0 {
            self.zoom_scale *= ORBIT_ZOOM_STEP;
        } else if delta_y > 0.0 {
            self.zoom_scale /= ORBIT_ZOOM_STEP;
        }
    }

    /// Apply pending input to `camera`. Returns whether the camera moved.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let pending = self.rotate_delta != Vec2::ZERO
            || self.pan_offset != Vec3::ZERO
            || self.zoom_scale != 1.0
            || camera.target != self.target;
        if !pending {
            return false;
        }

        let offset = camera.eye - self.target;
        let radius = offset.length();
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = if radius > 0.0 {
            (offset.y / radius).clamp(-1.0, 1.0).acos()
        } else {
            PI / 2.0
        };

        theta += self.rotate_delta.x;
        phi = (phi + self.rotate_delta.y).clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);
        let radius = (radius * self.zoom_scale).clamp(self.min_distance, self.max_distance);
        self.target += self.pan_offset;

        let offset = Vec3::new(
            radius * phi.sin() * theta.sin(),
            radius * phi.cos(),
            radius * phi.sin() * theta.cos(),
        );
        camera.eye = self.target + offset;
        camera.target = self.target;

        self.rotate_delta = Vec2::ZERO;
        self.pan_offset = Vec3::ZERO;
        self.zoom_scale = 1.0;
        true
    }
}
