use serde::{Deserialize, Serialize};

use crate::month::month_name;

/// One month of the temperature series.
///
/// `month` is zero-based (0 = January). Records are only built through
/// [`crate::Dataset`], which performs the shift from the source's 1-12
/// convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRecord {
    pub year: i32,
    pub month: u32,
    /// Delta from the dataset's base temperature, in °C.
    pub variance: f64,
}

impl TemperatureRecord {
    /// Total temperature for this month given the dataset base.
    pub fn temperature(&self, base_temperature: f64) -> f64 {
        base_temperature + self.variance
    }

    /// Total temperature rounded to two decimals, as exposed in `data-temp`.
    pub fn temperature_label(&self, base_temperature: f64) -> String {
        fixed_two(self.temperature(base_temperature))
    }

    pub fn month_name(&self) -> String {
        month_name(self.month)
    }
}

/// Two-decimal string of `value`. Exact halfway cases round away from zero;
/// everything else is the correctly rounded decimal expansion.
fn fixed_two(value: f64) -> String {
    // A double lies exactly halfway between two hundredths only when it is an
    // odd multiple of 1/8 (x.125, x.375, x.625, x.875).
    let is_tie = (value * 8.0).fract() == 0.0 && (value * 4.0).fract() != 0.0;
    if is_tie {
        format!("{:.2}", (value * 100.0).round() / 100.0)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_label_two_decimals() {
        let record = TemperatureRecord {
            year: 2000,
            month: 0,
            variance: 1.5,
        };
        assert_eq!(record.temperature_label(8.0), "9.50");
        assert_eq!(record.month_name(), "January");
    }

    #[test]
    fn test_negative_variance() {
        let record = TemperatureRecord {
            year: 1753,
            month: 0,
            variance: -1.366,
        };
        assert_eq!(record.temperature_label(8.66), "7.29");
    }

    #[test]
    fn test_halfway_total_rounds_up() {
        // 8.66 - 0.535 is exactly 8.125
        let record = TemperatureRecord {
            year: 1800,
            month: 3,
            variance: -0.535,
        };
        assert_eq!(record.temperature(8.66), 8.125);
        assert_eq!(record.temperature_label(8.66), "8.13");
    }

    #[test]
    fn test_fixed_two_ties_and_non_ties() {
        assert_eq!(fixed_two(2.375), "2.38");
        assert_eq!(fixed_two(0.625), "0.63");
        assert_eq!(fixed_two(-0.625), "-0.63");
        assert_eq!(fixed_two(8.25), "8.25");
        assert_eq!(fixed_two(1.005), "1.00");
        assert_eq!(fixed_two(7.294), "7.29");
    }
}
