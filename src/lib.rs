//! Rampedit - a terminal curve editor.
//!
//! Rampedit keeps a small set of named, colored curves in a [`CurveSet`]
//! whose points stay sorted by `x` through every edit, and hosts them in an
//! interactive terminal editor.
//!
//! # Features
//!
//! - Order-preserving curve point store with bounds-checked access
//! - Editor contract ([`CurveDelegate`]) separating storage from display
//! - Curve definitions loaded from TOML files
//! - Keyboard point editing with per-curve visibility toggles
//! - Gruvbox color themes
//! - Clipboard export
//!
//! # Example
//!
//! ```
//! use rampedit::curve::{demo_set, Point};
//!
//! let mut curves = demo_set();
//!
//! // Drag the second point of curve 0 past its neighbours.
//! let index = curves.edit_point(0, 1, Point::new(130.0, 0.9))?;
//! assert_eq!(index, 4);
//!
//! curves.add_point(0, Point::new(50.0, 0.5))?;
//! assert_eq!(curves.point_count(0)?, 6);
//! # Ok::<(), rampedit::RampEditError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod config;
pub mod curve;
pub mod editor;
pub mod error;
pub mod ui;
pub mod util;

pub use curve::{CurveDelegate, CurveSet};
pub use error::{RampEditError, Result};
