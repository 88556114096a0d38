//! Category wheel: sector geometry and the spin state machine.
//!
//! Angles are radians measured from the positive x-axis and grow clockwise in
//! screen coordinates (y points down). Rotating the wheel by `r` moves a point
//! at wheel angle `a` to screen angle `a + r`.

mod geometry;
mod spin;

use thiserror::Error;

pub use geometry::{
    LABEL_MAX_CHARS, MAX_SURFACE_SIZE, PALETTE, POINTER_ANGLE, Sector, WHEEL_MARGIN,
    WheelGeometry, WheelLayout, responsive_surface_size, truncate_label,
};
pub use spin::{
    MAX_DURATION_MS, MAX_TURNS, MIN_DURATION_MS, MIN_TURNS, SpinPhase, SpinPlan, ease_out_cubic,
};

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum WheelError {
    #[error("no categories available")]
    NoCategories,
    #[error("no category has been selected yet")]
    NothingResolved,
    #[error("drawing surface of size {size} is too small for the wheel")]
    InvalidSurface { size: f64 },
}
