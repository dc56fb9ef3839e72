//! Curve data and its order-preserving store.
//!
//! This module holds the point, color and kind types, the [`CurveSet`]
//! store that keeps every curve sorted by `x`, and the [`CurveDelegate`]
//! contract through which an editor reads and edits curves.

mod delegate;
mod point;
mod seed;
mod set;

pub use delegate::CurveDelegate;
pub use point::{CurveColor, CurveKind, Point, ValueSpace};
pub use seed::{demo_curves, demo_set, DEMO_VALUE_SPACE};
pub use set::{Curve, CurveSet, PointsMut};
