// File: crates/marquee-core/src/drag.rs
// Summary: Post-selection drag/resize engine: one mutable box, corner and body
// drags under min-size and perimeter-padding constraints.

use serde::{Deserialize, Serialize};

use crate::geometry::OverlayBounds;
use crate::types::PostSelectionOptions;

/// Gesture lifecycle tag carried by host pointer samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureState {
    #[default]
    NotStarted,
    Starting,
    Dragging,
    Finished,
}

/// One pointer sample, in the host's client coordinate space.
/// `start_*` is where the gesture went down; `client_*` is the current
/// pointer position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GestureSample {
    pub state: GestureState,
    pub start_x: f64,
    pub start_y: f64,
    pub client_x: f64,
    pub client_y: f64,
}

/// What a down gesture grabbed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragTarget {
    Body,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// The committed selection box, normalized to the parent bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SelectionRect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// A negative extent is the host's "no selection" sentinel.
    pub fn is_degenerate(&self) -> bool {
        !(self.width >= 0.0 && self.height >= 0.0)
            || !self.left.is_finite()
            || !self.top.is_finite()
    }
}

/// Working rectangle in parent-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PixelRect {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl PixelRect {
    fn from_normalized(rect: &SelectionRect, bounds: &OverlayBounds) -> Self {
        Self {
            left: rect.left * bounds.width,
            top: rect.top * bounds.height,
            right: (rect.left + rect.width) * bounds.width,
            bottom: (rect.top + rect.height) * bounds.height,
        }
    }

    fn to_normalized(self, bounds: &OverlayBounds) -> SelectionRect {
        SelectionRect {
            left: self.left / bounds.width,
            top: self.top / bounds.height,
            width: (self.right - self.left) / bounds.width,
            height: (self.bottom - self.top) / bounds.height,
        }
    }

    fn width(&self) -> f64 {
        self.right - self.left
    }

    fn height(&self) -> f64 {
        self.bottom - self.top
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Session state for exactly one gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
enum DragPhase {
    Idle,
    Dragging { target: DragTarget, origin: PixelRect, current: PixelRect },
}

/// Keeps one post-selection box valid while the user drags its corners or
/// body.
///
/// The host serializes `handle_down_gesture` / `handle_drag_gesture` /
/// `handle_up_gesture` for a single logical drag (pointer capture is the
/// host's responsibility). Out-of-order calls are ignored, never an error.
#[derive(Debug)]
pub struct DragResizeEngine {
    options: PostSelectionOptions,
    bounds: OverlayBounds,
    phase: DragPhase,
    selection: Option<SelectionRect>,
}

impl DragResizeEngine {
    pub fn new(bounds: OverlayBounds) -> Self {
        Self::with_options(bounds, PostSelectionOptions::default())
    }

    pub fn with_options(bounds: OverlayBounds, options: PostSelectionOptions) -> Self {
        Self { options, bounds, phase: DragPhase::Idle, selection: None }
    }

    /// Update the parent viewport (host resize). Applies immediately: an
    /// in-flight gesture clamps and normalizes against the new bounds from
    /// its next sample on.
    pub fn set_bounds(&mut self, bounds: OverlayBounds) {
        self.bounds = bounds;
    }

    /// Host-driven render call. A degenerate rect hides the box and makes
    /// every gesture a non-starter until a valid rect arrives.
    pub fn render_selection(&mut self, rect: SelectionRect) {
        if rect.is_degenerate() {
            log::debug!("render with degenerate rect, hiding selection");
            self.phase = DragPhase::Idle;
            self.selection = None;
        } else {
            self.selection = Some(rect);
        }
    }

    pub fn selection(&self) -> Option<SelectionRect> {
        self.selection
    }

    pub fn has_selection(&self) -> bool {
        self.selection.is_some()
    }

    /// Begin a gesture. Returns false, leaving all state unchanged, when
    /// the sample is not tagged `Starting`, there is no visible box, a
    /// gesture is already in flight, or the sample lands on nothing
    /// draggable.
    pub fn handle_down_gesture(&mut self, gesture: &GestureSample) -> bool {
        if gesture.state != GestureState::Starting {
            return false;
        }
        let Some(selection) = self.selection else {
            return false;
        };
        if !matches!(self.phase, DragPhase::Idle) {
            return false;
        }
        let rect = PixelRect::from_normalized(&selection, &self.bounds);
        let x = gesture.client_x - self.bounds.left;
        let y = gesture.client_y - self.bounds.top;

        let Some(target) = self.hit_target(&rect, x, y) else {
            return false;
        };
        log::debug!("drag start: {target:?} at ({x:.1}, {y:.1})");
        self.phase = DragPhase::Dragging { target, origin: rect, current: rect };
        true
    }

    /// Advance an in-flight gesture. Ignored while idle.
    pub fn handle_drag_gesture(&mut self, gesture: &GestureSample) {
        let DragPhase::Dragging { target, origin, .. } = self.phase else {
            log::trace!("drag move while idle, ignored");
            return;
        };
        let dx = gesture.client_x - gesture.start_x;
        let dy = gesture.client_y - gesture.start_y;
        let moved = self.apply_transform(target, &origin, dx, dy);
        log::trace!("drag move: {target:?} delta ({dx:.1}, {dy:.1})");
        self.selection = Some(moved.to_normalized(&self.bounds));
        self.phase = DragPhase::Dragging { target, origin, current: moved };
    }

    /// End the gesture, committing the box as the next gesture's origin.
    /// Returns the normalized box to request a selection for, or `None`
    /// when the gesture moved nothing (no redundant request) or no gesture
    /// was in flight.
    pub fn handle_up_gesture(&mut self) -> Option<SelectionRect> {
        let DragPhase::Dragging { origin, current, .. } = self.phase else {
            return None;
        };
        self.phase = DragPhase::Idle;
        if current == origin {
            log::debug!("drag end: no net change, not requesting");
            return None;
        }
        let committed = current.to_normalized(&self.bounds);
        self.selection = Some(committed);
        log::debug!("drag end: committing {committed:?}");
        Some(committed)
    }

    /// Abandon an in-flight gesture, restoring the box it started from.
    /// Host-driven, e.g. on pointer-capture loss.
    pub fn cancel_gesture(&mut self) {
        if let DragPhase::Dragging { origin, .. } = self.phase {
            log::debug!("drag cancelled, restoring origin box");
            self.selection = Some(origin.to_normalized(&self.bounds));
            self.phase = DragPhase::Idle;
        }
    }

    /// Force idle and hide the box regardless of gesture state.
    pub fn clear_selection(&mut self) {
        log::debug!("selection cleared");
        self.phase = DragPhase::Idle;
        self.selection = None;
    }

    fn hit_target(&self, rect: &PixelRect, x: f64, y: f64) -> Option<DragTarget> {
        let r = self.options.corner_grab_radius;
        let corners = [
            (DragTarget::TopLeft, rect.left, rect.top),
            (DragTarget::TopRight, rect.right, rect.top),
            (DragTarget::BottomLeft, rect.left, rect.bottom),
            (DragTarget::BottomRight, rect.right, rect.bottom),
        ];
        for (target, cx, cy) in corners {
            if (x - cx).hypot(y - cy) <= r {
                return Some(target);
            }
        }
        if rect.contains(x, y) && self.options.enable_body_drag {
            return Some(DragTarget::Body);
        }
        None
    }

    /// Corner drags move exactly the two adjacent edges; the body drag
    /// translates. Each moving edge is clamped first against the minimum
    /// size (anchored at the opposite, fixed edge) and then against the
    /// padded perimeter of the parent bounds.
    fn apply_transform(&self, target: DragTarget, origin: &PixelRect, dx: f64, dy: f64) -> PixelRect {
        let min = self.options.min_box_size;
        let pad = self.options.perimeter_padding;
        let max_right = self.bounds.width - pad;
        let max_bottom = self.bounds.height - pad;
        let mut rect = *origin;
        match target {
            DragTarget::Body => {
                let width = origin.width();
                let height = origin.height();
                rect.left = (origin.left + dx).clamp(pad, (max_right - width).max(pad));
                rect.top = (origin.top + dy).clamp(pad, (max_bottom - height).max(pad));
                rect.right = rect.left + width;
                rect.bottom = rect.top + height;
            }
            DragTarget::TopLeft => {
                rect.left = (origin.left + dx).min(origin.right - min).max(pad);
                rect.top = (origin.top + dy).min(origin.bottom - min).max(pad);
            }
            DragTarget::TopRight => {
                rect.right = (origin.right + dx).max(origin.left + min).min(max_right);
                rect.top = (origin.top + dy).min(origin.bottom - min).max(pad);
            }
            DragTarget::BottomLeft => {
                rect.left = (origin.left + dx).min(origin.right - min).max(pad);
                rect.bottom = (origin.bottom + dy).max(origin.top + min).min(max_bottom);
            }
            DragTarget::BottomRight => {
                rect.right = (origin.right + dx).max(origin.left + min).min(max_right);
                rect.bottom = (origin.bottom + dy).max(origin.top + min).min(max_bottom);
            }
        }
        rect
    }
}
