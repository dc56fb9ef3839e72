//! Turning curve points into drawable polylines.

use crate::curve::{CurveKind, Point};

/// Ease used between the points of smooth curves.
fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Sample a curve into chart coordinates.
///
/// `Linear` returns the points themselves, `Discrete` a staircase that holds
/// each value until the next point, and `Smooth`/`Bezier` an eased segment
/// with `samples` steps between each pair of points. `None` yields nothing.
pub fn sample_curve(points: &[Point], kind: CurveKind, samples: usize) -> Vec<(f64, f64)> {
    let as_f64 = |p: &Point| (f64::from(p.x), f64::from(p.y));

    match kind {
        CurveKind::None => Vec::new(),
        CurveKind::Linear => points.iter().map(as_f64).collect(),
        CurveKind::Discrete => {
            let mut out = Vec::with_capacity(points.len() * 2);
            for pair in points.windows(2) {
                let (x0, y0) = as_f64(&pair[0]);
                let (x1, _) = as_f64(&pair[1]);
                out.push((x0, y0));
                out.push((x1, y0));
            }
            if let Some(last) = points.last() {
                out.push(as_f64(last));
            }
            out
        },
        CurveKind::Smooth | CurveKind::Bezier => {
            let samples = samples.max(1);
            let mut out = Vec::with_capacity(points.len().saturating_sub(1) * samples + 1);
            for pair in points.windows(2) {
                let (x0, y0) = as_f64(&pair[0]);
                let (x1, y1) = as_f64(&pair[1]);
                for s in 0..samples {
                    let t = s as f64 / samples as f64;
                    let e = smoothstep(t);
                    out.push((x0 + (x1 - x0) * t, y0 + (y1 - y0) * e));
                }
            }
            if let Some(last) = points.last() {
                out.push(as_f64(last));
            }
            out
        },
    }
}
