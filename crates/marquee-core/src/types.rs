// File: crates/marquee-core/src/types.rs
// Summary: Shared constants and engine configuration (sizes, paddings, affordances).

/// Length of a resting corner affordance arm, in pixels.
pub const RESTING_CORNER_LENGTH_PX: f64 = 12.0;

/// Smallest width/height a post-selection box may reach, in pixels.
/// Two resting corners must never overlap along an edge.
pub const MIN_BOX_SIZE: f64 = RESTING_CORNER_LENGTH_PX * 2.0;

/// Minimum gap kept between every box edge and the parent bounds, in pixels.
pub const PERIMETER_SELECTION_PADDING_PX: f64 = 4.0;

/// Radius around a corner within which a down gesture grabs that corner,
/// in pixels.
pub const CORNER_GRAB_RADIUS_PX: f64 = 16.0;

/// Engine configuration. Host-tunable, fixed for the engine's lifetime.
/// Contract: all lengths are non-negative pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PostSelectionOptions {
    pub min_box_size: f64,
    pub perimeter_padding: f64,
    pub corner_grab_radius: f64,
    /// Whether a down gesture on the box body starts a whole-box drag.
    pub enable_body_drag: bool,
}

impl Default for PostSelectionOptions {
    fn default() -> Self {
        Self {
            min_box_size: MIN_BOX_SIZE,
            perimeter_padding: PERIMETER_SELECTION_PADDING_PX,
            corner_grab_radius: CORNER_GRAB_RADIUS_PX,
            enable_body_drag: true,
        }
    }
}
