use crate::color::Rgb;

/// A function from `[0, 1]` to a color.
pub type Interpolator = fn(f64) -> Rgb;

/// Maps a continuous domain onto an interpolator's unit input.
///
/// The domain may be given high-to-low, in which case larger values land
/// nearer the start of the ramp.
#[derive(Debug, Clone, Copy)]
pub struct SequentialScale {
    domain: (f64, f64),
    interpolator: Interpolator,
}

impl SequentialScale {
    pub fn new(domain: (f64, f64), interpolator: Interpolator) -> Self {
        Self {
            domain,
            interpolator,
        }
    }

    /// Position of `x` along the ramp; 0.5 when the domain is a single point.
    pub fn normalize(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        if d0 == d1 {
            return 0.5;
        }
        (x - d0) / (d1 - d0)
    }

    pub fn scale(&self, x: f64) -> Rgb {
        (self.interpolator)(self.normalize(x))
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }
}
