// Page wiring and interaction tuning for the web front-end.
//
// Scene, audio and camera tuning lives in `aural_core::constants`; this
// module only holds what the browser side needs.

// DOM element ids
pub const CANVAS_CONTAINER_ID: &str = "canvas-container";
pub const RENDER_BUTTON_ID: &str = "render-btn";
pub const DIM_X_ID: &str = "dim-x";
pub const DIM_Y_ID: &str = "dim-y";
pub const DIM_Z_ID: &str = "dim-z";

// Inline style for the canvas created inside the container
pub const CANVAS_STYLE: &str = "width:100%;height:100%;display:block;touch-action:none";

// Pointer
// A press that travels further than this (CSS px) is a camera drag, not a click.
pub const CLICK_DRAG_TOLERANCE_PX: f32 = 4.0;
pub const BUTTON_PRIMARY: i16 = 0;
pub const BUTTON_SECONDARY: i16 = 2;

// Rendering
pub const MSAA_SAMPLES: u32 = 4;
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 1.0];
// Initial instance capacity per draw batch; batches grow by doubling.
pub const INSTANCE_BATCH_CAPACITY: usize = 16;
