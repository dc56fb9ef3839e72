//! The capability contract an editor widget consumes.

use super::{CurveColor, CurveKind, CurveSet, Point, ValueSpace};
use crate::error::Result;

/// Supplies curve data to an editor and receives its edits.
///
/// An editor queries the delegate every frame and calls back into
/// [`edit_point`](CurveDelegate::edit_point) and
/// [`add_point`](CurveDelegate::add_point) when the user changes a curve.
pub trait CurveDelegate {
    /// Number of curves.
    fn curve_count(&self) -> usize;

    /// Whether a curve should be drawn.
    fn is_visible(&self, curve: usize) -> Result<bool>;

    /// Points of a curve, ascending by `x`.
    fn points(&self, curve: usize) -> Result<&[Point]>;

    /// Display color of a curve.
    fn curve_color(&self, curve: usize) -> Result<CurveColor>;

    /// Interpolation kind of a curve.
    fn curve_kind(&self, curve: usize) -> Result<CurveKind>;

    /// Replace a point and return its index after re-sorting.
    fn edit_point(&mut self, curve: usize, index: usize, value: Point) -> Result<usize>;

    /// Insert a point.
    fn add_point(&mut self, curve: usize, value: Point) -> Result<()>;

    /// Remove a point.
    fn remove_point(&mut self, curve: usize, index: usize) -> Result<Point>;

    /// Shared bounds of all curves.
    fn value_space(&self) -> ValueSpace;

    /// Mutable lower bound.
    fn value_min_mut(&mut self) -> &mut Point;

    /// Mutable upper bound.
    fn value_max_mut(&mut self) -> &mut Point;

    /// Editor background color.
    fn background_color(&self) -> CurveColor {
        CurveColor::TRANSPARENT
    }
}

impl CurveDelegate for CurveSet {
    fn curve_count(&self) -> usize {
        CurveSet::curve_count(self)
    }

    fn is_visible(&self, curve: usize) -> Result<bool> {
        CurveSet::is_visible(self, curve)
    }

    fn points(&self, curve: usize) -> Result<&[Point]> {
        CurveSet::points(self, curve)
    }

    fn curve_color(&self, curve: usize) -> Result<CurveColor> {
        CurveSet::curve_color(self, curve)
    }

    fn curve_kind(&self, curve: usize) -> Result<CurveKind> {
        CurveSet::curve_kind(self, curve)
    }

    fn edit_point(&mut self, curve: usize, index: usize, value: Point) -> Result<usize> {
        CurveSet::edit_point(self, curve, index, value)
    }

    fn add_point(&mut self, curve: usize, value: Point) -> Result<()> {
        CurveSet::add_point(self, curve, value)
    }

    fn remove_point(&mut self, curve: usize, index: usize) -> Result<Point> {
        CurveSet::remove_point(self, curve, index)
    }

    fn value_space(&self) -> ValueSpace {
        *CurveSet::value_space(self)
    }

    fn value_min_mut(&mut self) -> &mut Point {
        CurveSet::value_min_mut(self)
    }

    fn value_max_mut(&mut self) -> &mut Point {
        CurveSet::value_max_mut(self)
    }

    fn background_color(&self) -> CurveColor {
        CurveSet::background_color(self)
    }
}
