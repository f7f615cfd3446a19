use std::time::Duration;

// Shared scene/audio tuning constants used by the web frontend.

// Room defaults (metres)
pub const DEFAULT_ROOM: [f32; 3] = [5.0, 3.0, 5.0];
pub const ROOM_COLOR: [f32; 3] = [0.333, 0.588, 0.902]; // 0x5596e6
pub const ROOM_OPACITY: f32 = 0.2;
pub const GRID_COLOR: [f32; 3] = [0.533, 0.533, 0.533];
pub const GRID_CELL_SIZE: f32 = 1.0;
// Past this, cells widen instead of multiplying
pub const GRID_MAX_DIVISIONS: u32 = 200;

// Markers and waves share the same base sphere
pub const MARKER_RADIUS: f32 = 0.1;
pub const MARKER_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
pub const WAVE_COLOR: [f32; 3] = [1.0, 1.0, 0.0];
pub const SPHERE_WIDTH_SEGMENTS: u32 = 16;
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 16;

// Wave animation
pub const WAVE_DURATION: Duration = Duration::from_millis(300);
pub const WAVE_SCALE_GROWTH: f32 = 5.0; // 1x -> 6x over the duration
pub const WAVE_START_OPACITY: f32 = 0.5;

// Tone
pub const TONE_FREQUENCY_HZ: f32 = 440.0;
pub const TONE_DURATION_SEC: f64 = 0.3;
pub const TONE_START_GAIN: f32 = 1.0;
pub const TONE_END_GAIN: f32 = 0.0;

// Camera
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_DEPTH_FACTOR: f32 = 1.5; // eye z = depth * factor

// Orbit controls
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // per wheel notch
pub const ORBIT_MIN_DISTANCE: f32 = 0.2;
pub const ORBIT_MAX_DISTANCE: f32 = 500.0;
pub const ORBIT_POLAR_EPSILON: f32 = 1e-6;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.4;
pub const POINT_LIGHT_INTENSITY: f32 = 0.8;
pub const LIGHT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

// Fog (linear, black)
pub const FOG_COLOR: [f32; 3] = [0.0, 0.0, 0.0];
pub const FOG_NEAR: f32 = 10.0;
pub const FOG_FAR: f32 = 50.0;
