//! Application state and logic.

use std::path::PathBuf;

use crate::config::EditorConfig;
use crate::curve::{CurveSet, ValueSpace};
use crate::editor::EditorState;
use crate::util;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
///
/// Owned by the run loop and handed to every frame's draw call, so curve
/// edits persist from one frame to the next.
#[derive(Debug)]
pub struct App {
    /// File the curves were loaded from, if any.
    pub file_path: Option<PathBuf>,
    /// The curves being edited.
    pub curves: CurveSet,
    /// Editor selection state.
    pub editor: EditorState,
    /// Value space at startup, restored by [`App::reset_view`].
    pub initial_view: ValueSpace,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
}

impl App {
    /// Create a new application instance.
    pub fn new(curves: CurveSet, file_path: Option<PathBuf>) -> Self {
        let initial_view = *curves.value_space();
        let mut editor = EditorState::new(EditorConfig::default());
        editor.clamp(&curves);
        Self {
            file_path,
            curves,
            editor,
            initial_view,
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
        }
    }

    /// Toggle visibility of a curve.
    pub fn toggle_visibility(&mut self, curve: usize) {
        match self.curves.toggle_visible(curve) {
            Ok(visible) => {
                self.status = format!(
                    "Curve {}: {}",
                    curve,
                    if visible { "visible" } else { "hidden" }
                );
            },
            Err(e) => {
                tracing::debug!("Ignoring visibility toggle: {}", e);
                self.status = format!("No curve {}", curve);
            },
        }
    }

    /// Select the next curve.
    pub fn next_curve(&mut self) {
        self.editor.select_next_curve(&self.curves);
        self.status = self.selection_status();
    }

    /// Select the previous curve.
    pub fn prev_curve(&mut self) {
        self.editor.select_prev_curve(&self.curves);
        self.status = self.selection_status();
    }

    /// Select the next point.
    pub fn next_point(&mut self) {
        self.editor.select_next_point(&self.curves);
    }

    /// Select the previous point.
    pub fn prev_point(&mut self) {
        self.editor.select_prev_point(&self.curves);
    }

    /// Move the selected point by nudge steps.
    pub fn nudge(&mut self, dx: f32, dy: f32, coarse: bool) {
        let scale = if coarse {
            self.editor.config.coarse_multiplier
        } else {
            1.0
        };
        match self.editor.nudge(&mut self.curves, dx * scale, dy * scale) {
            Ok(p) => self.status = format!("Moved to {}", p),
            Err(e) => self.report(e),
        }
    }

    /// Insert a point after the selected one.
    pub fn insert_point(&mut self) {
        match self.editor.insert_point(&mut self.curves) {
            Ok(p) => self.status = format!("Added {}", p),
            Err(e) => self.report(e),
        }
    }

    /// Delete the selected point.
    pub fn delete_point(&mut self) {
        match self.editor.delete_point(&mut self.curves) {
            Ok(Some(p)) => self.status = format!("Removed {}", p),
            Ok(None) => self.status = "A curve needs at least one point".to_string(),
            Err(e) => self.report(e),
        }
    }

    /// Zoom the view in or out around its center.
    pub fn zoom(&mut self, factor: f32) {
        match self.editor.zoom(&mut self.curves, factor) {
            Ok(space) => self.status = format!("View {} .. {}", space.min, space.max),
            Err(e) => {
                tracing::warn!("Zoom refused: {}", e);
                self.status = "Zoom limit reached".to_string();
            },
        }
    }

    /// Restore the startup value space.
    pub fn reset_view(&mut self) {
        *self.curves.value_space_mut() = self.initial_view;
        self.status = "View reset".to_string();
    }

    /// Copy the selected curve's points to the clipboard.
    pub fn copy_points(&mut self) {
        match util::copy_curve_points(&self.curves, self.editor.curve) {
            Ok(_) => self.status = format!("Copied curve {}!", self.editor.curve),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    fn selection_status(&self) -> String {
        let name = self
            .curves
            .curve_name(self.editor.curve)
            .unwrap_or("?");
        format!("Selected {}", name)
    }

    fn report(&mut self, err: crate::error::RampEditError) {
        tracing::error!("Edit failed: {}", err);
        self.status = format!("Error: {}", err);
    }
}
