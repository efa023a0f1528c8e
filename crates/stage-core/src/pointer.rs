/// Last known pointer position, normalized to the viewport.
///
/// Both axes are in `[-1, 1]`: `(-1, -1)` is the top-left corner and
/// `(1, 1)` the bottom-right, matching client coordinates (y grows down).
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(-1.0, 1.0),
            y: y.clamp(-1.0, 1.0),
        }
    }

    /// Normalize client-space pointer coordinates against the viewport size.
    ///
    /// Returns `None` when the viewport has no usable extent, so callers can
    /// keep the previous state instead of storing NaN or infinity.
    pub fn from_client(client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) -> Option<Self> {
        if !(viewport_w.is_finite() && viewport_h.is_finite()) || viewport_w <= 0.0 || viewport_h <= 0.0 {
            return None;
        }
        if !(client_x.is_finite() && client_y.is_finite()) {
            return None;
        }
        Some(Self::new(
            (client_x / viewport_w) * 2.0 - 1.0,
            (client_y / viewport_h) * 2.0 - 1.0,
        ))
    }
}
