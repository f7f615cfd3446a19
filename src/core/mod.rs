pub use aural_core::*;

// Shader bundled as a string constant
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
