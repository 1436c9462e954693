//! RGB colors and the diverging RdYlBu ramp.

use std::fmt;

use serde::Serialize;

use crate::round_half_up;

/// An RGB color with unclamped floating-point channels.
///
/// Interpolation can overshoot 0-255 slightly; channels are rounded and
/// clamped only when formatted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    fn clamp_channel(v: f64) -> u8 {
        if v.is_nan() {
            return 0;
        }
        round_half_up(v).clamp(0.0, 255.0) as u8
    }

    /// Channels rounded and clamped to bytes.
    pub fn to_bytes(&self) -> (u8, u8, u8) {
        (
            Self::clamp_channel(self.r),
            Self::clamp_channel(self.g),
            Self::clamp_channel(self.b),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.to_bytes();
        write!(f, "rgb({}, {}, {})", r, g, b)
    }
}

/// The 11-class RdYlBu scheme, red through yellow to blue.
pub const RD_YL_BU: [Rgb; 11] = [
    Rgb::new(165.0, 0.0, 38.0),
    Rgb::new(215.0, 48.0, 39.0),
    Rgb::new(244.0, 109.0, 67.0),
    Rgb::new(253.0, 174.0, 97.0),
    Rgb::new(254.0, 224.0, 144.0),
    Rgb::new(255.0, 255.0, 191.0),
    Rgb::new(224.0, 243.0, 248.0),
    Rgb::new(171.0, 217.0, 233.0),
    Rgb::new(116.0, 173.0, 209.0),
    Rgb::new(69.0, 117.0, 180.0),
    Rgb::new(49.0, 54.0, 149.0),
];

fn basis(t1: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    ((1.0 - 3.0 * t1 + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t1 + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}

/// Uniform cubic B-spline through `values`, evaluated at `t` in [0, 1].
///
/// The curve starts exactly at the first value and ends exactly at the
/// last; interior control points are approached but not hit.
pub fn interpolate_basis(values: &[f64], t: f64) -> f64 {
    match values.len() {
        0 => return f64::NAN,
        1 => return values[0],
        _ => {}
    }
    let n = values.len() - 1;
    let (t, i) = if t.is_nan() || t <= 0.0 {
        (0.0, 0)
    } else if t >= 1.0 {
        (1.0, n - 1)
    } else {
        (t, (t * n as f64).floor() as usize)
    };
    let v1 = values[i];
    let v2 = values[i + 1];
    let v0 = if i > 0 { values[i - 1] } else { 2.0 * v1 - v2 };
    let v3 = if i < n - 1 {
        values[i + 2]
    } else {
        2.0 * v2 - v1
    };
    basis((t - i as f64 / n as f64) * n as f64, v0, v1, v2, v3)
}

/// Per-channel B-spline through a list of colors.
pub fn interpolate_rgb_basis(colors: &[Rgb], t: f64) -> Rgb {
    let channel = |pick: fn(&Rgb) -> f64| {
        let values: Vec<f64> = colors.iter().map(pick).collect();
        interpolate_basis(&values, t)
    };
    Rgb::new(channel(|c| c.r), channel(|c| c.g), channel(|c| c.b))
}

/// RdYlBu ramp: 0 is deep red, 1 is deep blue.
pub fn interpolate_rd_yl_bu(t: f64) -> Rgb {
    interpolate_rgb_basis(&RD_YL_BU, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_endpoints() {
        assert_eq!(interpolate_rd_yl_bu(0.0).to_string(), "rgb(165, 0, 38)");
        assert_eq!(interpolate_rd_yl_bu(1.0).to_string(), "rgb(49, 54, 149)");
    }

    #[test]
    fn test_ramp_midpoint() {
        // (c4 + 4*c5 + c6) / 6
        assert_eq!(interpolate_rd_yl_bu(0.5).to_string(), "rgb(250, 248, 193)");
    }

    #[test]
    fn test_ramp_clamps_outside_unit_interval() {
        assert_eq!(interpolate_rd_yl_bu(-3.0), interpolate_rd_yl_bu(0.0));
        assert_eq!(interpolate_rd_yl_bu(7.5), interpolate_rd_yl_bu(1.0));
    }

    #[test]
    fn test_display_clamps_channels() {
        let c = Rgb::new(-4.2, 255.6, 127.5);
        assert_eq!(c.to_string(), "rgb(0, 255, 128)");
    }
}
