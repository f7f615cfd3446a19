//! Room extents and the positions derived from them.

use crate::constants::{
    CAMERA_DEPTH_FACTOR, DEFAULT_ROOM, GRID_CELL_SIZE, GRID_MAX_DIVISIONS,
};
use crate::error::AuralError;
use glam::Vec3;

/// Width (x), height (y) and depth (z) of the room box, all positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomDimensions {
    width: f32,
    height: f32,
    depth: f32,
}

impl Default for RoomDimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_ROOM[0],
            height: DEFAULT_ROOM[1],
            depth: DEFAULT_ROOM[2],
        }
    }
}

impl RoomDimensions {
    pub fn new(width: f32, height: f32, depth: f32) -> Result<Self, AuralError> {
        Ok(Self {
            width: check_axis("width", width)?,
            height: check_axis("height", height)?,
            depth: check_axis("depth", depth)?,
        })
    }

    /// Parse the three raw input field values.
    pub fn parse(width: &str, height: &str, depth: &str) -> Result<Self, AuralError> {
        Self::new(
            parse_axis("width", width)?,
            parse_axis("height", height)?,
            parse_axis("depth", depth)?,
        )
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn size(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth)
    }

    /// Floor level; the room box is centered on the origin.
    pub fn floor_y(&self) -> f32 {
        -self.height / 2.0
    }

    /// Grid divisions along x and z, one per metre, at least one and at most
    /// `GRID_MAX_DIVISIONS` each.
    pub fn grid_divisions(&self) -> (u32, u32) {
        let along = |len: f32| {
            (len / GRID_CELL_SIZE)
                .round()
                .clamp(1.0, GRID_MAX_DIVISIONS as f32) as u32
        };
        (along(self.width), along(self.depth))
    }

    /// Camera starting position: outside the box, in front and above.
    pub fn camera_home(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth * CAMERA_DEPTH_FACTOR)
    }

    /// Point light near the upper front of the room.
    pub fn point_light_position(&self) -> Vec3 {
        Vec3::new(self.width / 2.0, self.height, self.depth / 2.0)
    }
}

fn check_axis(axis: &'static str, value: f32) -> Result<f32, AuralError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AuralError::InvalidDimension { axis, value })
    }
}

fn parse_axis(axis: &'static str, raw: &str) -> Result<f32, AuralError> {
    raw.trim()
        .parse::<f32>()
        .map_err(|_| AuralError::UnparsableDimension {
            axis,
            raw: raw.to_string(),
        })
}
