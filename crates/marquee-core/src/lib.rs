// File: crates/marquee-core/src/lib.rs
// Summary: Core library entry point; exports the selection-geometry engine API.

pub mod drag;
pub mod easing;
pub mod geometry;
pub mod polygon;
pub mod region;
pub mod text;
pub mod types;

pub use drag::{DragResizeEngine, DragTarget, GestureSample, GestureState, SelectionRect};
pub use easing::CubicBezier;
pub use geometry::{CenterRotatedBox, CoordinateType, OverlayBounds, Point, SelectionBounds};
pub use polygon::{area_of_polygon, clip, rotate, to_polygon, ClipEdge};
pub use region::{find_words_in_region, RegionMatch};
pub use text::{Line, Paragraph, TextLayout, Word};
pub use types::PostSelectionOptions;
