//! Error types for Rampedit.
//!
//! This module provides a unified error handling approach using `thiserror`.

use crate::curve::Point;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Rampedit operations.
pub type Result<T> = std::result::Result<T, RampEditError>;

/// Errors that can occur in Rampedit.
#[derive(Debug, Error)]
pub enum RampEditError {
    /// A curve index outside `0..count`.
    #[error("Curve index {index} out of range (curve count is {count})")]
    CurveIndexOutOfRange {
        /// Requested curve index.
        index: usize,
        /// Number of curves in the set.
        count: usize,
    },

    /// A point index outside the curve's point list.
    #[error("Point index {index} out of range for curve {curve} ({len} points)")]
    PointIndexOutOfRange {
        /// Curve the point was looked up in.
        curve: usize,
        /// Requested point index.
        index: usize,
        /// Number of points in the curve.
        len: usize,
    },

    /// Parallel curve inputs of different lengths.
    #[error("Shape mismatch: expected {expected} {what}, found {found}")]
    ShapeMismatch {
        /// Which input was the wrong length.
        what: &'static str,
        /// Number of curves.
        expected: usize,
        /// Length of the offending input.
        found: usize,
    },

    /// A curve definition that cannot be used.
    #[error("Invalid curve '{name}': {reason}")]
    InvalidCurve {
        /// Curve name.
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A value space with an empty or inverted extent.
    #[error("Invalid value space: {0}")]
    InvalidValueSpace(String),

    /// Failed to open a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a curve file.
    #[error("Failed to parse curve file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// An edit that would put a non-finite coordinate into a curve.
    #[error("Point {0} is not finite")]
    NonFinitePoint(Point),
}

impl RampEditError {
    /// Create a CurveIndexOutOfRange error.
    pub fn curve_out_of_range(index: usize, count: usize) -> Self {
        Self::CurveIndexOutOfRange { index, count }
    }

    /// Create a PointIndexOutOfRange error.
    pub fn point_out_of_range(curve: usize, index: usize, len: usize) -> Self {
        Self::PointIndexOutOfRange { curve, index, len }
    }

    /// Create an InvalidCurve error.
    pub fn invalid_curve(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCurve {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }
}
