// Browser-side constants: DOM ids and draw sizes.
// Scene and animation tuning lives in `stage_core::constants`.

// DOM
pub const CANVAS_ID: &str = "renderCanvas";
pub const STATUS_OVERLAY_ID: &str = "status-overlay";
pub const HIDDEN_CLASS: &str = "hidden";

// Draw sizes
pub const PLANE_VERTICES: u32 = 6; // two triangles
pub const SPLAT_QUAD_VERTICES: u32 = 6; // one billboard per splat instance
pub const SPLAT_EXTENT_SIGMAS: f32 = 3.0; // quad half-extent in standard deviations

// Canvas backing store never drops below one pixel per side
pub const MIN_BACKING_PX: u32 = 1;
