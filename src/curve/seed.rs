//! Built-in demo curves.

use super::{Curve, CurveColor, CurveKind, CurveSet, Point, ValueSpace};

const RAMP_A: [(f32, f32); 5] = [(-10.0, 0.0), (20.0, 0.6), (25.0, 0.2), (70.0, 0.4), (120.0, 1.0)];

const RAMP_B: [(f32, f32); 4] = [(-50.0, 0.2), (33.0, 0.7), (80.0, 0.2), (82.0, 0.8)];

const RAMP_C: [(f32, f32); 6] = [
    (40.0, 0.0),
    (60.0, 0.1),
    (90.0, 0.82),
    (150.0, 0.24),
    (200.0, 0.34),
    (250.0, 0.12),
];

/// Value space the demo opens with.
pub const DEMO_VALUE_SPACE: ValueSpace =
    ValueSpace::new(Point::new(-100.0, 0.0), Point::new(300.0, 1.0));

fn points(raw: &[(f32, f32)]) -> Vec<Point> {
    raw.iter().copied().map(Point::from).collect()
}

/// The three demo curves, all smooth and visible.
pub fn demo_curves() -> Vec<Curve> {
    [&RAMP_A[..], &RAMP_B[..], &RAMP_C[..]]
        .into_iter()
        .enumerate()
        .map(|(i, raw)| {
            Curve::new(
                format!("Curve {}", i),
                CurveColor::for_index(i),
                CurveKind::Smooth,
                points(raw),
            )
        })
        .collect()
}

/// The demo set in its demo value space.
pub fn demo_set() -> CurveSet {
    CurveSet::with_value_space(demo_curves(), DEMO_VALUE_SPACE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_set_shape() {
        let set = demo_set();
        assert_eq!(set.curve_count(), 3);
        assert_eq!(set.point_count(0).unwrap(), 5);
        assert_eq!(set.point_count(1).unwrap(), 4);
        assert_eq!(set.point_count(2).unwrap(), 6);
        for i in 0..3 {
            assert!(set.is_visible(i).unwrap());
            assert_eq!(set.curve_kind(i).unwrap(), CurveKind::Smooth);
        }
        assert_eq!(set.curve_color(0).unwrap(), CurveColor(0xFF0000FF));
        assert_eq!(set.curve_color(1).unwrap(), CurveColor(0xFF00FF00));
        assert_eq!(set.curve_color(2).unwrap(), CurveColor(0xFFFF0000));
        assert_eq!(*set.value_space(), DEMO_VALUE_SPACE);
    }
}
