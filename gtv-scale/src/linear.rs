use crate::ticks::{precision_fixed, tick_step, ticks};

/// Affine mapping from a continuous domain to a continuous range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to the range. A single-point domain maps
    /// everything to the middle of the range.
    pub fn scale(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if d0 == d1 { 0.5 } else { (x - d0) / (d1 - d0) };
        r0 + (r1 - r0) * t
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }

    /// Format a tick value with just enough decimals for the tick step.
    ///
    /// Negative values use the typographic minus sign.
    pub fn tick_format(&self, count: usize, value: f64) -> String {
        let precision = precision_fixed(tick_step(self.domain.0, self.domain.1, count));
        let text = format!("{:.*}", precision, value);
        match text.strip_prefix('-') {
            Some(rest) if value != 0.0 && rest.chars().any(|c| c != '0' && c != '.') => {
                format!("\u{2212}{}", rest)
            }
            Some(rest) => rest.to_string(),
            None => text,
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale() {
        let scale = LinearScale::new((2.0, 12.0), (0.0, 400.0));
        assert_eq!(scale.scale(2.0), 0.0);
        assert_eq!(scale.scale(7.0), 200.0);
        assert_eq!(scale.scale(12.0), 400.0);
        assert_eq!(scale.scale(17.0), 600.0);
    }

    #[test]
    fn test_degenerate_domain_maps_to_midpoint() {
        let scale = LinearScale::new((5.0, 5.0), (0.0, 400.0));
        assert_eq!(scale.scale(9.0), 200.0);
    }

    #[test]
    fn test_tick_format_precision() {
        let scale = LinearScale::new((5.726, 10.483), (0.0, 400.0));
        assert_eq!(scale.tick_format(10, 6.5), "6.5");
        assert_eq!(scale.tick_format(10, 10.0), "10.0");

        let wide = LinearScale::new((0.0, 100.0), (0.0, 400.0));
        assert_eq!(wide.tick_format(10, 40.0), "40");
    }

    #[test]
    fn test_tick_format_negative() {
        let scale = LinearScale::new((-2.0, 2.0), (0.0, 100.0));
        assert_eq!(scale.tick_format(10, -1.5), "\u{2212}1.5");
        assert_eq!(scale.tick_format(10, -0.0), "0.0");
    }
}
