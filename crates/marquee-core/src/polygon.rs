// File: crates/marquee-core/src/polygon.rs
// Summary: Rotated-box polygon construction, shoelace area, Sutherland-Hodgman clipping.

use crate::geometry::{CenterRotatedBox, CoordinateType, OverlayBounds, Point, SelectionBounds};

/// One edge of an axis-aligned clip window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipEdge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Clip order is fixed; results depend on it only in vertex ordering.
const CLIP_EDGES: [ClipEdge; 4] = [ClipEdge::Left, ClipEdge::Right, ClipEdge::Top, ClipEdge::Bottom];

/// Rotate `target` around `anchor` by `angle` radians (clockwise in screen
/// coordinates), in normalized space over an image of `bounds` aspect.
///
/// Normalized axes are anisotropic whenever the displayed image is not
/// square, so offsets are taken to physical units, rotated there, and taken
/// back. A square rotation then reads correctly on any image.
pub fn rotate(anchor: Point, angle: f64, target: Point, bounds: OverlayBounds) -> Point {
    let (sin, cos) = angle.sin_cos();
    let dx = (target.x - anchor.x) * bounds.width;
    let dy = (target.y - anchor.y) * bounds.height;
    let rx = dx * cos - dy * sin;
    let ry = dx * sin + dy * cos;
    Point::new(anchor.x + rx / bounds.width, anchor.y + ry / bounds.height)
}

/// Convert a rotated box to its 4-vertex pixel-space polygon.
///
/// Vertex order is fixed: top-left, top-right, bottom-right, bottom-left
/// (pre-rotation labels; after rotation the labels are nominal). Normalized
/// boxes rotate with aspect correction and are then scaled to pixels; pixel
/// boxes rotate isotropically as-is.
pub fn to_polygon(box_: &CenterRotatedBox, bounds: OverlayBounds) -> [Point; 4] {
    let half_w = box_.width / 2.0;
    let half_h = box_.height / 2.0;
    let c = box_.center;
    let corners = [
        Point::new(c.x - half_w, c.y - half_h),
        Point::new(c.x + half_w, c.y - half_h),
        Point::new(c.x + half_w, c.y + half_h),
        Point::new(c.x - half_w, c.y + half_h),
    ];
    match box_.coordinate_type {
        CoordinateType::Normalized => corners.map(|p| {
            let r = rotate(c, box_.rotation, p, bounds);
            Point::new(r.x * bounds.width, r.y * bounds.height)
        }),
        // Pixel units are already isotropic; rotate against unit bounds.
        CoordinateType::Pixel => {
            corners.map(|p| rotate(c, box_.rotation, p, OverlayBounds::sized(1.0, 1.0)))
        }
    }
}

/// Signed shoelace area of `polygon`. Positive for clockwise winding in
/// screen coordinates; callers comparing magnitudes take `abs`. Degenerate
/// input (fewer than 3 vertices, collinear, zero extent) yields 0.
pub fn area_of_polygon(polygon: &[Point]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let mut doubled = 0.0;
    for (i, v) in polygon.iter().enumerate() {
        let w = polygon[(i + 1) % polygon.len()];
        doubled += v.x * w.y - w.x * v.y;
    }
    doubled / 2.0
}

/// True iff `point` is on the keep side of `edge`, boundary inclusive.
pub fn is_inside_edge(point: Point, bounds: &SelectionBounds, edge: ClipEdge) -> bool {
    match edge {
        ClipEdge::Left => point.x >= bounds.left,
        ClipEdge::Right => point.x <= bounds.right,
        ClipEdge::Top => point.y >= bounds.top,
        ClipEdge::Bottom => point.y <= bounds.bottom,
    }
}

/// Point where segment v0->v1 meets the line of `edge`.
///
/// The caller guarantees v0 and v1 lie on opposite sides of the edge; the
/// interpolation divides by the corresponding coordinate span.
pub fn intersection_with_edge(
    v0: Point,
    v1: Point,
    bounds: &SelectionBounds,
    edge: ClipEdge,
) -> Point {
    match edge {
        ClipEdge::Left | ClipEdge::Right => {
            let x = if edge == ClipEdge::Left { bounds.left } else { bounds.right };
            let t = (x - v0.x) / (v1.x - v0.x);
            Point::new(x, v0.y + t * (v1.y - v0.y))
        }
        ClipEdge::Top | ClipEdge::Bottom => {
            let y = if edge == ClipEdge::Top { bounds.top } else { bounds.bottom };
            let t = (y - v0.y) / (v1.y - v0.y);
            Point::new(v0.x + t * (v1.x - v0.x), y)
        }
    }
}

fn clip_against_edge(polygon: &[Point], bounds: &SelectionBounds, edge: ClipEdge) -> Vec<Point> {
    let mut out = Vec::with_capacity(polygon.len() + 1);
    for (i, &current) in polygon.iter().enumerate() {
        let previous = polygon[(i + polygon.len() - 1) % polygon.len()];
        let current_inside = is_inside_edge(current, bounds, edge);
        let previous_inside = is_inside_edge(previous, bounds, edge);
        if current_inside {
            if !previous_inside {
                out.push(intersection_with_edge(previous, current, bounds, edge));
            }
            out.push(current);
        } else if previous_inside {
            out.push(intersection_with_edge(previous, current, bounds, edge));
        }
    }
    out
}

/// Sutherland-Hodgman clip of `polygon` against `bounds`.
///
/// Edges are applied Left, Right, Top, Bottom. The result keeps the input's
/// winding, may grow to 8 vertices (quad against rectangle), and is empty
/// when the polygon lies entirely outside.
pub fn clip(polygon: &[Point], bounds: &SelectionBounds) -> Vec<Point> {
    let mut current: Vec<Point> = polygon.to_vec();
    for edge in CLIP_EDGES {
        if current.is_empty() {
            break;
        }
        current = clip_against_edge(&current, bounds, edge);
    }
    current
}
