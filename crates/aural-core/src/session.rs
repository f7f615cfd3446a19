//! Whole-app state: `Uninitialized` until the first build, then `Active`
//! with one `Stage` that every later build replaces wholesale.

use crate::builder::{build_camera, build_scene, marker_node, wave_node};
use crate::camera::{Camera, Viewport};
use crate::controls::{DragMode, OrbitControls};
use crate::picking::resolve_point;
use crate::room::RoomDimensions;
use crate::scene::{NodeId, NodeKind, Scene, WorldPoint};
use crate::tone::{ToneSink, ToneSpec};
use crate::wave::{WaveAnimator, WaveEffect, WaveTick};
use glam::Vec2;
use instant::Instant;

/// Everything one build produces.
#[derive(Clone, Debug)]
pub struct Stage {
    pub dims: RoomDimensions,
    pub scene: Scene,
    pub camera: Camera,
    pub controls: OrbitControls,
    pub waves: WaveAnimator,
    pub revision: u64,
}

impl Stage {
    pub fn marker_count(&self) -> usize {
        self.scene.count(|k| matches!(k, NodeKind::Marker { .. }))
    }
}

/// Nodes created by one successful click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub point: WorldPoint,
    pub marker: NodeId,
    pub wave: NodeId,
}

#[derive(Clone, Debug)]
pub enum Phase {
    Uninitialized,
    Active(Box<Stage>),
}

#[derive(Clone, Debug)]
pub struct Session {
    phase: Phase,
    viewport: Viewport,
    builds: u64,
}

impl Session {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            phase: Phase::Uninitialized,
            viewport,
            builds: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active(_))
    }

    pub fn stage(&self) -> Option<&Stage> {
        match &self.phase {
            Phase::Active(stage) => Some(&**stage),
            Phase::Uninitialized => None,
        }
    }

    pub fn stage_mut(&mut self) -> Option<&mut Stage> {
        match &mut self.phase {
            Phase::Active(stage) => Some(&mut **stage),
            Phase::Uninitialized => None,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Build (or rebuild) the room. Returns the new stage revision.
    pub fn build(&mut self, dims: RoomDimensions) -> u64 {
        self.builds += 1;
        let camera = build_camera(&dims, self.viewport.aspect());
        let stage = Stage {
            dims,
            scene: build_scene(&dims),
            controls: OrbitControls::new(camera.target),
            camera,
            waves: WaveAnimator::new(),
            revision: self.builds,
        };
        log::info!(
            "[build] room {:.2} x {:.2} x {:.2} (revision {})",
            dims.width(),
            dims.height(),
            dims.depth(),
            self.builds
        );
        self.phase = Phase::Active(Box::new(stage));
        self.builds
    }

    /// Track a new surface size; the camera follows when a stage exists.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        self.viewport = viewport;
        match self.stage_mut() {
            Some(stage) => {
                stage.camera.set_aspect(viewport.aspect());
                true
            }
            None => false,
        }
    }

    /// Resolve a click and, on a hit, place marker + wave and voice the tone.
    pub fn handle_click(
        &mut self,
        ndc: Vec2,
        now: Instant,
        tones: &mut dyn ToneSink,
    ) -> Option<Placement> {
        let stage = self.stage()?;
        let point = resolve_point(ndc, &stage.camera, &stage.scene)?;
        self.place_at(point, now, tones)
    }

    /// Marker, wave and tone at an already resolved point.
    pub fn place_at(
        &mut self,
        point: WorldPoint,
        now: Instant,
        tones: &mut dyn ToneSink,
    ) -> Option<Placement> {
        let stage = self.stage_mut()?;
        let marker = stage.scene.add(marker_node(point));
        let wave = stage.scene.add(wave_node(point));
        stage.waves.push(WaveEffect::new(wave, now));
        tones.play(&ToneSpec::at(point));
        log::info!(
            "[click] marker at ({:.2},{:.2},{:.2})",
            point.x,
            point.y,
            point.z
        );
        Some(Placement {
            point,
            marker,
            wave,
        })
    }

    /// Per-frame update: apply camera input, then advance waves.
    pub fn frame(&mut self, now: Instant) -> WaveTick {
        match self.stage_mut() {
            Some(stage) => {
                stage.controls.update(&mut stage.camera);
                stage.waves.tick(now, &mut stage.scene)
            }
            None => WaveTick::default(),
        }
    }

    pub fn pointer_down(&mut self, mode: DragMode, pointer: Vec2) {
        if let Some(stage) = self.stage_mut() {
            stage.controls.begin_drag(mode, pointer);
        }
    }

    pub fn pointer_move(&mut self, pointer: Vec2) {
        let viewport = self.viewport;
        if let Some(stage) = self.stage_mut() {
            stage.controls.drag_to(pointer, &stage.camera, viewport);
        }
    }

    pub fn pointer_up(&mut self) {
        if let Some(stage) = self.stage_mut() {
            stage.controls.end_drag();
        }
    }

    pub fn wheel(&mut self, delta_y: f32) {
        if let Some(stage) = self.stage_mut() {
            stage.controls.zoom(delta_y);
        }
    }

    /// Whether the last press moved far enough to count as a camera drag.
    pub fn was_dragged(&self, tolerance_px: f32) -> bool {
        self.stage()
            .map(|s| s.controls.drag_travel() > tolerance_px)
            .unwrap_or(false)
    }

    pub fn camera(&self) -> Option<&Camera> {
        self.stage().map(|s| &s.camera)
    }
}
