//! Curve editor feature - selection and keyboard editing of curve points.
//!
//! The editor never touches curve storage directly. It reads curves and
//! writes edits through [`CurveDelegate`], so the store re-sorts after every
//! change and the selection follows the point to its new index.

pub mod sample;
pub mod ui;

use crate::config::EditorConfig;
use crate::curve::{CurveDelegate, Point, ValueSpace};
use crate::error::{RampEditError, Result};

/// Selection state for the curve editor.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Selected curve index.
    pub curve: usize,
    /// Selected point index within the curve.
    pub point: usize,
    /// Tuning constants.
    pub config: EditorConfig,
}

impl EditorState {
    /// Create a new editor state with the first point of the first curve selected.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            curve: 0,
            point: 0,
            config,
        }
    }

    /// Pull the selection back inside the delegate's curves and points.
    pub fn clamp<D: CurveDelegate + ?Sized>(&mut self, delegate: &D) {
        let count = delegate.curve_count();
        if count == 0 {
            self.curve = 0;
            self.point = 0;
            return;
        }
        self.curve = self.curve.min(count - 1);
        let len = delegate.points(self.curve).map(|p| p.len()).unwrap_or(0);
        self.point = self.point.min(len.saturating_sub(1));
    }

    /// Select the next curve, wrapping around.
    pub fn select_next_curve<D: CurveDelegate + ?Sized>(&mut self, delegate: &D) {
        let count = delegate.curve_count();
        if count > 0 {
            self.curve = (self.curve + 1) % count;
        }
        self.clamp(delegate);
    }

    /// Select the previous curve, wrapping around.
    pub fn select_prev_curve<D: CurveDelegate + ?Sized>(&mut self, delegate: &D) {
        let count = delegate.curve_count();
        if count > 0 {
            self.curve = (self.curve + count - 1) % count;
        }
        self.clamp(delegate);
    }

    /// Select the point to the right.
    pub fn select_next_point<D: CurveDelegate + ?Sized>(&mut self, delegate: &D) {
        self.point += 1;
        self.clamp(delegate);
    }

    /// Select the point to the left.
    pub fn select_prev_point<D: CurveDelegate + ?Sized>(&mut self, delegate: &D) {
        self.point = self.point.saturating_sub(1);
        self.clamp(delegate);
    }

    /// The selected point.
    pub fn selected<D: CurveDelegate + ?Sized>(&self, delegate: &D) -> Option<Point> {
        delegate
            .points(self.curve)
            .ok()
            .and_then(|points| points.get(self.point).copied())
    }

    /// Value-space distance of one nudge on each axis.
    pub fn step<D: CurveDelegate + ?Sized>(&self, delegate: &D) -> (f32, f32) {
        let space = delegate.value_space();
        (
            space.width() * self.config.nudge_fraction,
            space.height() * self.config.nudge_fraction,
        )
    }

    /// Move the selected point by whole nudge steps and follow it.
    ///
    /// A move that would overflow to a non-finite coordinate is refused and
    /// leaves the curve untouched.
    pub fn nudge<D: CurveDelegate + ?Sized>(
        &mut self,
        delegate: &mut D,
        dx: f32,
        dy: f32,
    ) -> Result<Point> {
        let (sx, sy) = self.step(&*delegate);
        let current = delegate
            .points(self.curve)?
            .get(self.point)
            .copied()
            .unwrap_or_default();
        let moved = Point::new(current.x + dx * sx, current.y + dy * sy);
        if !moved.is_finite() {
            return Err(RampEditError::NonFinitePoint(moved));
        }
        self.point = delegate.edit_point(self.curve, self.point, moved)?;
        Ok(moved)
    }

    /// Insert a point after the selected one and select it.
    ///
    /// The new point sits half way to the right neighbour, or one nudge step
    /// to the right of the last point.
    pub fn insert_point<D: CurveDelegate + ?Sized>(&mut self, delegate: &mut D) -> Result<Point> {
        let (sx, _) = self.step(&*delegate);
        let points = delegate.points(self.curve)?;
        let new_point = match (points.get(self.point), points.get(self.point + 1)) {
            (Some(a), Some(b)) => Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0),
            (Some(a), None) => Point::new(a.x + sx, a.y),
            _ => {
                let space = delegate.value_space();
                Point::new(
                    (space.min.x + space.max.x) / 2.0,
                    (space.min.y + space.max.y) / 2.0,
                )
            },
        };
        if !new_point.is_finite() {
            return Err(RampEditError::NonFinitePoint(new_point));
        }

        delegate.add_point(self.curve, new_point)?;
        // Pushed then stable-sorted: last among points sharing its x.
        if let Some(idx) = delegate
            .points(self.curve)?
            .iter()
            .rposition(|p| p.x == new_point.x)
        {
            self.point = idx;
        }
        Ok(new_point)
    }

    /// Remove the selected point, keeping at least one point per curve.
    pub fn delete_point<D: CurveDelegate + ?Sized>(
        &mut self,
        delegate: &mut D,
    ) -> Result<Option<Point>> {
        if delegate.points(self.curve)?.len() <= 1 {
            return Ok(None);
        }
        let removed = delegate.remove_point(self.curve, self.point)?;
        self.clamp(&*delegate);
        Ok(Some(removed))
    }

    /// Scale the value space around its center.
    ///
    /// Factors below one zoom in, above one zoom out. The value space is
    /// left unchanged when the result would overflow, or shrink below
    /// `min_relative_extent` of the center's magnitude on either axis.
    pub fn zoom<D: CurveDelegate + ?Sized>(
        &self,
        delegate: &mut D,
        factor: f32,
    ) -> Result<ValueSpace> {
        let space = delegate.value_space();
        let cx = (space.min.x + space.max.x) / 2.0;
        let cy = (space.min.y + space.max.y) / 2.0;
        let hw = space.width() / 2.0 * factor;
        let hh = space.height() / 2.0 * factor;
        let candidate = ValueSpace::new(Point::new(cx - hw, cy - hh), Point::new(cx + hw, cy + hh));

        if !candidate.is_valid() {
            return Err(RampEditError::InvalidValueSpace(format!(
                "zoom by {} gives {} .. {}",
                factor, candidate.min, candidate.max
            )));
        }
        let rel = self.config.min_relative_extent;
        if candidate.width() <= cx.abs().max(1.0) * rel
            || candidate.height() <= cy.abs().max(1.0) * rel
        {
            return Err(RampEditError::InvalidValueSpace(format!(
                "zoom by {} is below the minimum extent",
                factor
            )));
        }

        *delegate.value_min_mut() = candidate.min;
        *delegate.value_max_mut() = candidate.max;
        Ok(candidate)
    }
}
