//! Curve definition files and editor tuning.
//!
//! A curve file is TOML:
//!
//! ```toml
//! [value_space]
//! min = [-100.0, 0.0]
//! max = [300.0, 1.0]
//!
//! [[curve]]
//! name = "attack"
//! color = 0xFF0000FF
//! kind = "smooth"
//! points = [[-10.0, 0.0], [20.0, 0.6]]
//! ```

use crate::curve::{Curve, CurveColor, CurveKind, CurveSet, Point, ValueSpace, DEMO_VALUE_SPACE};
use crate::error::{RampEditError, Result};
use serde::Deserialize;
use std::path::Path;

/// Value-space section of a curve file.
#[derive(Debug, Clone, Deserialize)]
pub struct ValueSpaceDef {
    /// Lower-left corner as `[x, y]`.
    pub min: [f32; 2],
    /// Upper-right corner as `[x, y]`.
    pub max: [f32; 2],
}

impl From<&ValueSpaceDef> for ValueSpace {
    fn from(def: &ValueSpaceDef) -> Self {
        ValueSpace::new(def.min.into(), def.max.into())
    }
}

/// One `[[curve]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CurveDef {
    /// Display name; defaults to `Curve <index>`.
    pub name: Option<String>,
    /// Packed `0xAABBGGRR` color; defaults to the palette.
    pub color: Option<CurveColor>,
    /// Interpolation kind.
    #[serde(default)]
    pub kind: CurveKind,
    /// Initial visibility.
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Points as `[x, y]` pairs, in any order.
    pub points: Vec<[f32; 2]>,
}

fn default_visible() -> bool {
    true
}

/// A whole curve file.
#[derive(Debug, Clone, Deserialize)]
pub struct CurveFile {
    /// Shared bounds; defaults to the demo value space.
    pub value_space: Option<ValueSpaceDef>,
    /// Curve entries, in display order.
    #[serde(default, rename = "curve")]
    pub curves: Vec<CurveDef>,
}

impl CurveFile {
    /// Parse a curve file from TOML text.
    pub fn parse(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Validate the definitions and build the set.
    pub fn into_set(self) -> Result<CurveSet> {
        if self.curves.is_empty() {
            return Err(RampEditError::invalid_curve(
                "<file>",
                "at least one [[curve]] entry is required",
            ));
        }

        let value_space = self
            .value_space
            .as_ref()
            .map(ValueSpace::from)
            .unwrap_or(DEMO_VALUE_SPACE);
        if !value_space.is_valid() {
            return Err(RampEditError::InvalidValueSpace(format!(
                "min {} must be finite and below max {} on both axes",
                value_space.min, value_space.max
            )));
        }

        let curves = self
            .curves
            .into_iter()
            .enumerate()
            .map(|(i, def)| def.into_curve(i))
            .collect::<Result<Vec<_>>>()?;

        Ok(CurveSet::with_value_space(curves, value_space))
    }
}

impl CurveDef {
    fn into_curve(self, index: usize) -> Result<Curve> {
        let name = self.name.unwrap_or_else(|| format!("Curve {}", index));
        if self.points.is_empty() {
            return Err(RampEditError::invalid_curve(name, "curve has no points"));
        }

        let points: Vec<Point> = self.points.into_iter().map(Point::from).collect();
        if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
            return Err(RampEditError::invalid_curve(
                name,
                format!("non-finite point {}", bad),
            ));
        }

        let color = self.color.unwrap_or_else(|| CurveColor::for_index(index));
        Ok(Curve::new(name, color, self.kind, points).with_visible(self.visible))
    }
}

/// Load and validate a curve file.
pub fn load_curve_file(path: &Path) -> Result<CurveSet> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| RampEditError::file_open(path.to_path_buf(), e))?;
    let file = CurveFile::parse(&text).map_err(|source| RampEditError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    let set = file.into_set()?;
    tracing::info!(
        "Loaded {} curves from {}",
        set.curve_count(),
        path.display()
    );
    Ok(set)
}

/// Editor tuning constants.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Fraction of the value-space extent moved per nudge.
    pub nudge_fraction: f32,
    /// Multiplier applied to a nudge with the shift modifier.
    pub coarse_multiplier: f32,
    /// Samples drawn per segment for eased curve kinds.
    pub samples_per_segment: usize,
    /// Smallest zoomed extent, relative to the magnitude of the view center.
    pub min_relative_extent: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            nudge_fraction: 0.01,
            coarse_multiplier: 10.0,
            samples_per_segment: 16,
            min_relative_extent: 1e-4,
        }
    }
}
