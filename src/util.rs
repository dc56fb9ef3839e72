//! Utility functions for Rampedit.

use crate::clipboard;
use crate::curve::CurveSet;
use crate::error::Result;

/// Copy a curve's points to clipboard.
pub fn copy_curve_points(set: &CurveSet, curve: usize) -> Result<()> {
    let text = format_curve_points(set, curve)?;
    clipboard::copy_to_clipboard(&text)
}

/// A curve's points as `x, y` lines under a `# name` header.
pub fn format_curve_points(set: &CurveSet, curve: usize) -> Result<String> {
    let mut text = format!("# {}\n", set.curve_name(curve)?);
    for p in set.points(curve)? {
        text.push_str(&format!("{}, {}\n", p.x, p.y));
    }
    Ok(text)
}

/// Human-readable summary of a whole set.
pub fn format_summary(set: &CurveSet) -> Result<String> {
    let space = set.value_space();
    let mut text = format!("Value space: {} .. {}\n", space.min, space.max);

    for (i, curve) in set.curves().iter().enumerate() {
        text.push_str(&format!(
            "\n[{}] {}  {}  {}  {}  {} points\n",
            i,
            curve.name,
            curve.kind.name(),
            curve.color,
            if curve.visible { "visible" } else { "hidden" },
            curve.points().len()
        ));
        for p in set.points(i)? {
            text.push_str(&format!("    {}\n", p));
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::demo_set;

    #[test]
    fn test_format_curve_points() {
        let set = demo_set();
        let text = format_curve_points(&set, 1).unwrap();
        assert_eq!(text, "# Curve 1\n-50, 0.2\n33, 0.7\n80, 0.2\n82, 0.8\n");
        assert!(format_curve_points(&set, 3).is_err());
    }

    #[test]
    fn test_format_summary() {
        let text = format_summary(&demo_set()).unwrap();
        assert!(text.starts_with("Value space: (-100, 0) .. (300, 1)\n"));
        assert!(text.contains("[0] Curve 0  smooth  0xFF0000FF  visible  5 points"));
        assert!(text.contains("    (250, 0.12)\n"));
    }
}
