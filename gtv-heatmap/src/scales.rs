//! The four scales the chart is drawn with, derived once per dataset.

use gtv_data::month::MONTH_INDICES;
use gtv_data::Dataset;
use gtv_scale::color::interpolate_rd_yl_bu;
use gtv_scale::{BandScale, LinearScale, Rgb, SequentialScale};

use crate::layout::{ChartDimensions, LEGEND_WIDTH};

/// Scales built from one dataset and threaded explicitly to every renderer.
#[derive(Debug, Clone)]
pub struct ChartScales {
    /// Distinct years, sorted, across the plot width. Cells touch.
    pub years: BandScale<i32>,
    /// Month indices 0-11 down the plot height.
    pub months: BandScale<u32>,
    /// Temperature to color over `[max_temp, min_temp]`: warmer is nearer
    /// the red start of the ramp.
    pub color: SequentialScale,
    /// Temperature to legend x over `[min_temp, max_temp]`.
    pub legend: LinearScale,
    pub base_temperature: f64,
    pub min_temp: f64,
    pub max_temp: f64,
}

impl ChartScales {
    pub fn from_dataset(dataset: &Dataset, dimensions: &ChartDimensions) -> Self {
        let (min_temp, max_temp) = dataset.temperature_extent();
        Self {
            years: BandScale::new(dataset.years(), (0.0, dimensions.width)).with_padding(0.0),
            months: BandScale::new(MONTH_INDICES, (0.0, dimensions.height)),
            color: SequentialScale::new((max_temp, min_temp), interpolate_rd_yl_bu),
            legend: LinearScale::new((min_temp, max_temp), (0.0, LEGEND_WIDTH)),
            base_temperature: dataset.base_temperature(),
            min_temp,
            max_temp,
        }
    }

    /// Fill for a total temperature.
    pub fn fill(&self, temperature: f64) -> Rgb {
        self.color.scale(temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtv_data::TemperatureRecord;

    fn dataset() -> Dataset {
        let records = vec![
            TemperatureRecord { year: 1900, month: 0, variance: -2.0 },
            TemperatureRecord { year: 1901, month: 5, variance: 0.0 },
            TemperatureRecord { year: 1902, month: 11, variance: 2.0 },
            TemperatureRecord { year: 1903, month: 3, variance: 1.0 },
        ];
        Dataset::new(8.0, records).unwrap()
    }

    #[test]
    fn test_temperature_bounds() {
        let ds = dataset();
        let scales = ChartScales::from_dataset(&ds, &ChartDimensions::for_record_count(ds.len()));
        assert_eq!(scales.min_temp, 6.0);
        assert_eq!(scales.max_temp, 10.0);
        assert_eq!(scales.color.domain(), (10.0, 6.0));
        assert_eq!(scales.legend.domain(), (6.0, 10.0));
        assert_eq!(scales.legend.range(), (0.0, 400.0));
    }

    #[test]
    fn test_color_is_inverted() {
        let ds = dataset();
        let scales = ChartScales::from_dataset(&ds, &ChartDimensions::for_record_count(ds.len()));
        assert_eq!(scales.fill(10.0).to_string(), "rgb(165, 0, 38)");
        assert_eq!(scales.fill(6.0).to_string(), "rgb(49, 54, 149)");
    }

    #[test]
    fn test_every_year_positionable() {
        let ds = dataset();
        let dims = ChartDimensions {
            width: 400.0,
            ..ChartDimensions::for_record_count(ds.len())
        };
        let scales = ChartScales::from_dataset(&ds, &dims);
        assert!(ds.records().iter().all(|r| scales.years.scale(&r.year).is_some()));
        assert_eq!(scales.years.bandwidth(), 100.0);
        assert_eq!(scales.years.scale(&1903), Some(300.0));
    }

    #[test]
    fn test_month_rows() {
        let ds = dataset();
        let scales = ChartScales::from_dataset(&ds, &ChartDimensions::for_record_count(ds.len()));
        assert_eq!(scales.months.bandwidth(), 40.0);
        assert_eq!(scales.months.scale(&11), Some(440.0));
    }
}
