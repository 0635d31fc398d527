// File: crates/marquee-core/src/geometry.rs
// Summary: Core value types: points, rotated boxes, clip windows, overlay bounds.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A 2D point. Units (normalized fraction vs. pixels) are stated per function.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Unit space of a box's coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateType {
    /// Fractions of the displayed image, in [0, 1].
    #[default]
    Normalized,
    /// Absolute pixels of the displayed image.
    Pixel,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown coordinate type '{0}', expected 'normalized' or 'pixel'")]
pub struct ParseCoordinateTypeError(pub String);

impl FromStr for CoordinateType {
    type Err = ParseCoordinateTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normalized" => Ok(CoordinateType::Normalized),
            "pixel" => Ok(CoordinateType::Pixel),
            other => Err(ParseCoordinateTypeError(other.to_string())),
        }
    }
}

/// A rectangle parameterized by center, extent, and rotation about the center.
/// Rotation is in radians, clockwise in screen coordinates (y grows down).
///
/// Contract: `width >= 0 && height >= 0` for any box handed to clipping or
/// area code. A negative extent is the "no selection" sentinel, not an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CenterRotatedBox {
    pub center: Point,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub coordinate_type: CoordinateType,
}

impl CenterRotatedBox {
    pub const fn new(center: Point, width: f64, height: f64) -> Self {
        Self { center, width, height, rotation: 0.0, coordinate_type: CoordinateType::Normalized }
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_coordinate_type(mut self, coordinate_type: CoordinateType) -> Self {
        self.coordinate_type = coordinate_type;
        self
    }

    /// True when this box cannot describe a selection (the sentinel state,
    /// or NaN-poisoned input).
    pub fn is_degenerate(&self) -> bool {
        !(self.width >= 0.0 && self.height >= 0.0)
            || !self.center.x.is_finite()
            || !self.center.y.is_finite()
    }
}

/// Axis-aligned clip window, same unit space as the polygon being clipped.
/// Contract: `left <= right && top <= bottom`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionBounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl SelectionBounds {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }

    /// Tight axis-aligned bounds of a vertex list. Empty input yields the
    /// zero bounds.
    pub fn around(points: &[Point]) -> Self {
        let mut b = match points.first() {
            Some(p) => Self::new(p.x, p.x, p.y, p.y),
            None => return Self::default(),
        };
        for p in &points[1..] {
            b.left = b.left.min(p.x);
            b.right = b.right.max(p.x);
            b.top = b.top.min(p.y);
            b.bottom = b.bottom.max(p.y);
        }
        b
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Boundary-inclusive containment test.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

/// Host-supplied viewport record of the displayed image: size in pixels and
/// offset of its top-left corner within the host's coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlayBounds {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub top: f64,
}

impl OverlayBounds {
    pub const fn new(width: f64, height: f64, left: f64, top: f64) -> Self {
        Self { width, height, left, top }
    }

    pub const fn sized(width: f64, height: f64) -> Self {
        Self::new(width, height, 0.0, 0.0)
    }
}
