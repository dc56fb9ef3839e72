//! The curve point store.

use super::{CurveColor, CurveKind, Point, ValueSpace};
use crate::error::{RampEditError, Result};
use std::ops::{Deref, DerefMut};

/// One named curve and its display attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    /// Display name.
    pub name: String,
    /// Display color.
    pub color: CurveColor,
    /// Interpolation kind.
    pub kind: CurveKind,
    /// Whether an editor should draw the curve.
    pub visible: bool,
    points: Vec<Point>,
}

impl Curve {
    /// Create a visible curve; the points are sorted by `x`.
    pub fn new(
        name: impl Into<String>,
        color: CurveColor,
        kind: CurveKind,
        points: Vec<Point>,
    ) -> Self {
        let mut curve = Self {
            name: name.into(),
            color,
            kind,
            visible: true,
            points,
        };
        curve.sort();
        curve
    }

    /// Set the initial visibility.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Points in ascending `x` order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    fn sort(&mut self) {
        sort_by_x(&mut self.points);
    }
}

fn sort_by_x(points: &mut [Point]) {
    // Stable, so equal-x points keep their relative order.
    points.sort_by(|a, b| a.x.total_cmp(&b.x));
}

/// A fixed set of curves sharing one value space.
///
/// Every mutation made through the set leaves each curve's points sorted
/// ascending by `x`. The number of curves never changes after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSet {
    curves: Vec<Curve>,
    value_space: ValueSpace,
}

impl CurveSet {
    /// Create a set with the default `(0, 0)..(1, 1)` value space.
    pub fn new(curves: Vec<Curve>) -> Self {
        Self::with_value_space(curves, ValueSpace::default())
    }

    /// Create a set with an explicit value space.
    pub fn with_value_space(curves: Vec<Curve>, value_space: ValueSpace) -> Self {
        tracing::debug!(curves = curves.len(), "Curve set created");
        Self {
            curves,
            value_space,
        }
    }

    /// Build a set from parallel point, visibility and color lists.
    ///
    /// All curves get `kind` and a generated name. Fails with
    /// [`RampEditError::ShapeMismatch`] when the lists differ in length.
    pub fn from_parts(
        points: Vec<Vec<Point>>,
        visible: Vec<bool>,
        colors: Vec<CurveColor>,
        kind: CurveKind,
        value_space: ValueSpace,
    ) -> Result<Self> {
        let count = points.len();
        if visible.len() != count {
            return Err(RampEditError::ShapeMismatch {
                what: "visibility flags",
                expected: count,
                found: visible.len(),
            });
        }
        if colors.len() != count {
            return Err(RampEditError::ShapeMismatch {
                what: "colors",
                expected: count,
                found: colors.len(),
            });
        }

        let curves = points
            .into_iter()
            .zip(visible)
            .zip(colors)
            .enumerate()
            .map(|(i, ((pts, vis), color))| {
                Curve::new(format!("Curve {}", i), color, kind, pts).with_visible(vis)
            })
            .collect();

        Ok(Self::with_value_space(curves, value_space))
    }

    /// Number of curves.
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// All curves.
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Get a curve by index.
    pub fn curve(&self, curve: usize) -> Result<&Curve> {
        self.curves
            .get(curve)
            .ok_or_else(|| RampEditError::curve_out_of_range(curve, self.curves.len()))
    }

    fn curve_mut(&mut self, curve: usize) -> Result<&mut Curve> {
        let count = self.curves.len();
        self.curves
            .get_mut(curve)
            .ok_or_else(|| RampEditError::curve_out_of_range(curve, count))
    }

    /// Curve name.
    pub fn curve_name(&self, curve: usize) -> Result<&str> {
        Ok(&self.curve(curve)?.name)
    }

    /// Whether the curve is visible.
    pub fn is_visible(&self, curve: usize) -> Result<bool> {
        Ok(self.curve(curve)?.visible)
    }

    /// Show or hide a curve.
    pub fn set_visible(&mut self, curve: usize, visible: bool) -> Result<()> {
        self.curve_mut(curve)?.visible = visible;
        Ok(())
    }

    /// Flip a curve's visibility and return the new value.
    pub fn toggle_visible(&mut self, curve: usize) -> Result<bool> {
        let c = self.curve_mut(curve)?;
        c.visible = !c.visible;
        Ok(c.visible)
    }

    /// Curve color.
    pub fn curve_color(&self, curve: usize) -> Result<CurveColor> {
        Ok(self.curve(curve)?.color)
    }

    /// Curve interpolation kind.
    pub fn curve_kind(&self, curve: usize) -> Result<CurveKind> {
        Ok(self.curve(curve)?.kind)
    }

    /// Points of a curve, ascending by `x`.
    pub fn points(&self, curve: usize) -> Result<&[Point]> {
        Ok(self.curve(curve)?.points())
    }

    /// Number of points in a curve.
    pub fn point_count(&self, curve: usize) -> Result<usize> {
        Ok(self.curve(curve)?.points.len())
    }

    /// A single point.
    pub fn point(&self, curve: usize, index: usize) -> Result<Point> {
        let points = self.points(curve)?;
        points
            .get(index)
            .copied()
            .ok_or_else(|| RampEditError::point_out_of_range(curve, index, points.len()))
    }

    /// In-place access to a curve's points.
    ///
    /// The returned guard derefs to the point slice, so points can be moved
    /// but not added or removed. The curve is re-sorted when the guard drops.
    pub fn points_mut(&mut self, curve: usize) -> Result<PointsMut<'_>> {
        let curve = self.curve_mut(curve)?;
        Ok(PointsMut {
            points: &mut curve.points,
        })
    }

    /// Replace a point, re-sort, and return where a point with the new `x` ended up.
    ///
    /// When several points share that `x`, the smallest index wins, which is
    /// not necessarily the point that was moved.
    pub fn edit_point(&mut self, curve: usize, index: usize, value: Point) -> Result<usize> {
        let c = self.curve_mut(curve)?;
        let len = c.points.len();
        let slot = c
            .points
            .get_mut(index)
            .ok_or_else(|| RampEditError::point_out_of_range(curve, index, len))?;
        *slot = value;
        c.sort();

        let new_index = c
            .points
            .iter()
            .position(|p| p.x == value.x)
            .unwrap_or(index);
        tracing::trace!(curve, from = index, to = new_index, "Point edited");
        Ok(new_index)
    }

    /// Append a point and re-sort.
    pub fn add_point(&mut self, curve: usize, value: Point) -> Result<()> {
        let c = self.curve_mut(curve)?;
        c.points.push(value);
        c.sort();
        tracing::trace!(curve, x = value.x, y = value.y, "Point added");
        Ok(())
    }

    /// Remove and return a point. Remaining points stay sorted.
    pub fn remove_point(&mut self, curve: usize, index: usize) -> Result<Point> {
        let c = self.curve_mut(curve)?;
        if index >= c.points.len() {
            return Err(RampEditError::point_out_of_range(
                curve,
                index,
                c.points.len(),
            ));
        }
        Ok(c.points.remove(index))
    }

    /// Re-sort a curve's points.
    pub fn normalize(&mut self, curve: usize) -> Result<()> {
        self.curve_mut(curve)?.sort();
        Ok(())
    }

    /// Shared value-space bounds.
    pub fn value_space(&self) -> &ValueSpace {
        &self.value_space
    }

    /// Mutable value-space bounds.
    pub fn value_space_mut(&mut self) -> &mut ValueSpace {
        &mut self.value_space
    }

    /// Mutable lower-left corner of the value space.
    pub fn value_min_mut(&mut self) -> &mut Point {
        &mut self.value_space.min
    }

    /// Mutable upper-right corner of the value space.
    pub fn value_max_mut(&mut self) -> &mut Point {
        &mut self.value_space.max
    }

    /// Editor background color; always transparent.
    pub fn background_color(&self) -> CurveColor {
        CurveColor::TRANSPARENT
    }
}

/// Mutable view of one curve's points that re-sorts on drop.
#[derive(Debug)]
pub struct PointsMut<'a> {
    points: &'a mut Vec<Point>,
}

impl Deref for PointsMut<'_> {
    type Target = [Point];

    fn deref(&self) -> &[Point] {
        self.points.as_slice()
    }
}

impl DerefMut for PointsMut<'_> {
    fn deref_mut(&mut self) -> &mut [Point] {
        self.points.as_mut_slice()
    }
}

impl Drop for PointsMut<'_> {
    fn drop(&mut self) {
        sort_by_x(self.points.as_mut_slice());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(f32, f32)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    fn ramp() -> CurveSet {
        CurveSet::new(vec![Curve::new(
            "ramp",
            CurveColor::RED,
            CurveKind::Smooth,
            pts(&[(-10.0, 0.0), (20.0, 0.6), (25.0, 0.2), (70.0, 0.4), (120.0, 1.0)]),
        )])
    }

    fn is_sorted(points: &[Point]) -> bool {
        points.windows(2).all(|w| w[0].x <= w[1].x)
    }

    #[test]
    fn test_new_curve_is_sorted() {
        let curve = Curve::new(
            "c",
            CurveColor::RED,
            CurveKind::Linear,
            pts(&[(3.0, 0.0), (1.0, 0.0), (2.0, 0.0)]),
        );
        assert_eq!(curve.points(), pts(&[(1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]).as_slice());
    }

    #[test]
    fn test_edit_point_moves_past_neighbours() {
        let mut set = ramp();
        let idx = set.edit_point(0, 1, Point::new(130.0, 0.9)).unwrap();
        assert_eq!(idx, 4);
        assert_eq!(
            set.points(0).unwrap(),
            pts(&[(-10.0, 0.0), (25.0, 0.2), (70.0, 0.4), (120.0, 1.0), (130.0, 0.9)]).as_slice()
        );
    }

    #[test]
    fn test_edit_point_in_place() {
        let mut set = ramp();
        let idx = set.edit_point(0, 2, Point::new(26.0, 0.3)).unwrap();
        assert_eq!(idx, 2);
        assert_eq!(set.point(0, 2).unwrap(), Point::new(26.0, 0.3));
    }

    #[test]
    fn test_edit_point_tie_returns_first_match() {
        let mut set = ramp();
        // Move the last point onto x = 20, which point 1 already has.
        let idx = set.edit_point(0, 4, Point::new(20.0, 0.9)).unwrap();
        assert_eq!(idx, 1);
        let points = set.points(0).unwrap();
        assert_eq!(points[1], Point::new(20.0, 0.6));
        assert_eq!(points[2], Point::new(20.0, 0.9));
    }

    #[test]
    fn test_edit_point_nan_falls_back_to_original_index() {
        let mut set = ramp();
        let idx = set.edit_point(0, 2, Point::new(f32::NAN, 0.0)).unwrap();
        assert_eq!(idx, 2);
    }

    #[test]
    fn test_add_point_inserts_in_order() {
        let mut set = ramp();
        set.add_point(0, Point::new(50.0, 0.5)).unwrap();
        let points = set.points(0).unwrap();
        assert_eq!(points.len(), 6);
        assert_eq!(points[2], Point::new(25.0, 0.2));
        assert_eq!(points[3], Point::new(50.0, 0.5));
        assert_eq!(points[4], Point::new(70.0, 0.4));
    }

    #[test]
    fn test_out_of_range_indices() {
        let mut set = ramp();
        assert!(matches!(
            set.is_visible(3),
            Err(RampEditError::CurveIndexOutOfRange { index: 3, count: 1 })
        ));
        assert!(matches!(
            set.edit_point(0, 5, Point::new(0.0, 0.0)),
            Err(RampEditError::PointIndexOutOfRange { curve: 0, index: 5, len: 5 })
        ));
        assert!(set.add_point(1, Point::default()).is_err());
        assert!(set.remove_point(0, 9).is_err());
        assert_eq!(set.point_count(0).unwrap(), 5);
    }

    #[test]
    fn test_points_mut_resorts_on_drop() {
        let mut set = ramp();
        {
            let mut points = set.points_mut(0).unwrap();
            points[0].x = 500.0;
        }
        let points = set.points(0).unwrap();
        assert!(is_sorted(points));
        assert_eq!(points[4], Point::new(500.0, 0.0));
    }

    #[test]
    fn test_normalize_and_remove() {
        let mut set = ramp();
        set.normalize(0).unwrap();
        assert!(is_sorted(set.points(0).unwrap()));
        assert!(set.normalize(1).is_err());

        assert_eq!(set.remove_point(0, 0).unwrap(), Point::new(-10.0, 0.0));
        assert_eq!(set.point(0, 0).unwrap(), Point::new(20.0, 0.6));
    }

    #[test]
    fn test_visibility_does_not_touch_data() {
        let mut set = ramp();
        let before = set.curve(0).unwrap().clone();
        assert!(!set.toggle_visible(0).unwrap());
        assert!(!set.is_visible(0).unwrap());
        assert_eq!(set.points(0).unwrap(), before.points());
        assert_eq!(set.curve_color(0).unwrap(), before.color);
        assert_eq!(set.curve_kind(0).unwrap(), before.kind);
        set.set_visible(0, true).unwrap();
        assert!(set.is_visible(0).unwrap());
    }

    #[test]
    fn test_from_parts_rejects_mismatch() {
        let err = CurveSet::from_parts(
            vec![vec![Point::default()], vec![Point::default()]],
            vec![true],
            vec![CurveColor::RED, CurveColor::GREEN],
            CurveKind::Smooth,
            ValueSpace::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            RampEditError::ShapeMismatch { what: "visibility flags", expected: 2, found: 1 }
        ));

        let err = CurveSet::from_parts(
            vec![vec![Point::default()]],
            vec![true],
            vec![],
            CurveKind::Smooth,
            ValueSpace::default(),
        )
        .unwrap_err();
        assert!(matches!(err, RampEditError::ShapeMismatch { what: "colors", .. }));
    }

    #[test]
    fn test_from_parts_builds_sorted_curves() {
        let set = CurveSet::from_parts(
            vec![pts(&[(2.0, 0.0), (1.0, 1.0)])],
            vec![false],
            vec![CurveColor::BLUE],
            CurveKind::Linear,
            ValueSpace::default(),
        )
        .unwrap();
        assert_eq!(set.curve_count(), 1);
        assert!(!set.is_visible(0).unwrap());
        assert_eq!(set.points(0).unwrap()[0], Point::new(1.0, 1.0));
        assert_eq!(set.curve_name(0).unwrap(), "Curve 0");
    }

    #[test]
    fn test_value_space_is_mutable() {
        let mut set = ramp();
        *set.value_min_mut() = Point::new(-100.0, 0.0);
        set.value_max_mut().x = 300.0;
        assert_eq!(set.value_space().min, Point::new(-100.0, 0.0));
        assert_eq!(set.value_space().max, Point::new(300.0, 1.0));
        assert_eq!(set.background_color(), CurveColor::TRANSPARENT);
    }

    #[test]
    fn test_edit_sequence_keeps_order() {
        let mut set = ramp();
        let moves = [(0, 90.0), (3, -40.0), (1, 10.0), (4, 0.0), (2, 200.0)];
        for (i, x) in moves {
            let j = set.edit_point(0, i, Point::new(x, 0.5)).unwrap();
            assert_eq!(set.point(0, j).unwrap().x, x);
            set.add_point(0, Point::new(x / 2.0, 0.1)).unwrap();
            assert!(is_sorted(set.points(0).unwrap()));
        }
        assert_eq!(set.curve_count(), 1);
    }
}
