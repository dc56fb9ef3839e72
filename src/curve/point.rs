//! Value types shared by every curve: points, colors, kinds and bounds.

use serde::Deserialize;
use std::fmt;

/// A point in value space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate; curves are ordered by it.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<[f32; 2]> for Point {
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// How an editor should interpolate between the points of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    /// Not drawn.
    None,
    /// Held value until the next point.
    Discrete,
    /// Straight segments.
    Linear,
    /// Eased segments.
    #[default]
    Smooth,
    /// Bezier segments.
    Bezier,
}

impl CurveKind {
    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            CurveKind::None => "none",
            CurveKind::Discrete => "discrete",
            CurveKind::Linear => "linear",
            CurveKind::Smooth => "smooth",
            CurveKind::Bezier => "bezier",
        }
    }
}

/// Packed 32-bit color, `0xAABBGGRR` (red in the low byte).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(transparent)]
pub struct CurveColor(pub u32);

impl CurveColor {
    /// Fully transparent.
    pub const TRANSPARENT: CurveColor = CurveColor(0);
    /// Opaque red.
    pub const RED: CurveColor = CurveColor(0xFF00_00FF);
    /// Opaque green.
    pub const GREEN: CurveColor = CurveColor(0xFF00_FF00);
    /// Opaque blue.
    pub const BLUE: CurveColor = CurveColor(0xFFFF_0000);

    /// Colors handed out to curves that don't name one, by curve index.
    pub const PALETTE: [CurveColor; 3] = [Self::RED, Self::GREEN, Self::BLUE];

    /// Palette color for a curve index, wrapping around.
    pub fn for_index(index: usize) -> Self {
        Self::PALETTE[index % Self::PALETTE.len()]
    }

    /// Unpack into `(r, g, b, a)`.
    pub fn rgba(self) -> (u8, u8, u8, u8) {
        let [r, g, b, a] = self.0.to_le_bytes();
        (r, g, b, a)
    }

    /// Alpha channel is zero.
    pub fn is_transparent(self) -> bool {
        self.rgba().3 == 0
    }
}

impl fmt::Display for CurveColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

/// Bounding box shared by all curves of a set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueSpace {
    /// Lower-left corner.
    pub min: Point,
    /// Upper-right corner.
    pub max: Point,
}

impl ValueSpace {
    /// Create a new value space.
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Horizontal extent.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Vertical extent.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Finite and non-empty on both axes, with finite extents.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.width().is_finite()
            && self.height().is_finite()
            && self.width() > 0.0
            && self.height() > 0.0
    }
}

impl Default for ValueSpace {
    fn default() -> Self {
        Self {
            min: Point::new(0.0, 0.0),
            max: Point::new(1.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_unpacks_red_from_low_byte() {
        assert_eq!(CurveColor::RED.rgba(), (255, 0, 0, 255));
        assert_eq!(CurveColor::GREEN.rgba(), (0, 255, 0, 255));
        assert_eq!(CurveColor::BLUE.rgba(), (0, 0, 255, 255));
        assert!(CurveColor::TRANSPARENT.is_transparent());
    }

    #[test]
    fn test_palette_wraps() {
        assert_eq!(CurveColor::for_index(0), CurveColor::RED);
        assert_eq!(CurveColor::for_index(4), CurveColor::GREEN);
    }

    #[test]
    fn test_value_space_validity() {
        assert!(ValueSpace::default().is_valid());
        let flat = ValueSpace::new(Point::new(0.0, 1.0), Point::new(10.0, 1.0));
        assert!(!flat.is_valid());
        let inf = ValueSpace::new(Point::new(f32::NEG_INFINITY, 0.0), Point::new(1.0, 1.0));
        assert!(!inf.is_valid());
        let huge = ValueSpace::new(Point::new(-f32::MAX, 0.0), Point::new(f32::MAX, 1.0));
        assert!(!huge.is_valid());
    }
}
