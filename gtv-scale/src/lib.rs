//! Scale primitives for laying out charts.
//!
//! These follow the semantics of the d3 scale family the heat map was
//! designed against, so pixel offsets, tick values and colors line up with
//! a browser rendering of the same data:
//!
//! - [`band::BandScale`]: discrete domain to evenly spaced slots
//! - [`linear::LinearScale`]: affine mapping with nice ticks
//! - [`sequential::SequentialScale`]: continuous domain to a color ramp
//! - [`color`]: RGB values and the RdYlBu ramp
//! - [`ticks`]: the 1/2/5 tick increment algorithm

pub mod band;
pub mod color;
pub mod linear;
pub mod sequential;
pub mod ticks;

pub use band::BandScale;
pub use color::Rgb;
pub use linear::LinearScale;
pub use sequential::SequentialScale;

/// Round half toward positive infinity, matching `Math.round`.
pub(crate) fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}
