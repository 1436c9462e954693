//! One positioned, colored rectangle per record.

use gtv_data::Dataset;
use log::warn;
use serde::Serialize;

use crate::scales::ChartScales;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub year: i32,
    /// Zero-based, as exposed in `data-month`.
    pub month: u32,
    pub month_name: String,
    pub variance: f64,
    pub temperature: f64,
    /// Total temperature to two decimals, as exposed in `data-temp`.
    pub data_temp: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Color-scale fill; what the cell returns to when the pointer leaves.
    pub fill: String,
}

pub fn build_cells(dataset: &Dataset, scales: &ChartScales) -> Vec<Cell> {
    let base = dataset.base_temperature();
    dataset
        .records()
        .iter()
        .filter_map(|record| {
            let (Some(x), Some(y)) = (
                scales.years.scale(&record.year),
                scales.months.scale(&record.month),
            ) else {
                warn!(
                    "Skipping unpositionable record {}-{}",
                    record.year, record.month
                );
                return None;
            };
            let temperature = record.temperature(base);
            Some(Cell {
                year: record.year,
                month: record.month,
                month_name: record.month_name(),
                variance: record.variance,
                temperature,
                data_temp: record.temperature_label(base),
                x,
                y,
                width: scales.years.bandwidth(),
                height: scales.months.bandwidth(),
                fill: scales.fill(temperature).to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::ChartDimensions;
    use gtv_data::TemperatureRecord;

    const SAMPLE_JSON: &str = include_str!("../../fixtures/global-temperature-sample.json");

    fn cells() -> (Dataset, Vec<Cell>) {
        let ds = Dataset::from_json(SAMPLE_JSON).unwrap();
        let dims = ChartDimensions::for_record_count(ds.len());
        let scales = ChartScales::from_dataset(&ds, &dims);
        let cells = build_cells(&ds, &scales);
        (ds, cells)
    }

    #[test]
    fn test_one_cell_per_record() {
        let (ds, cells) = cells();
        assert_eq!(cells.len(), ds.len());
    }

    #[test]
    fn test_data_temp_matches_rounded_total() {
        let (ds, cells) = cells();
        for (cell, record) in cells.iter().zip(ds.records()) {
            assert_eq!(cell.data_temp, record.temperature_label(ds.base_temperature()));
            assert!(cell.month <= 11);
        }
    }

    #[test]
    fn test_cells_tile_the_plot() {
        let (_, cells) = cells();
        // 3 years over 15px, 12 months over 480px
        let first = &cells[0];
        assert_eq!((first.x, first.y), (0.0, 0.0));
        assert_eq!((first.width, first.height), (5.0, 40.0));
        let last = cells.last().unwrap();
        assert_eq!((last.x, last.y), (10.0, 440.0));
        assert_eq!(last.month_name, "December");
    }

    #[test]
    fn test_extreme_cells_take_ramp_ends() {
        let (_, cells) = cells();
        let warmest = cells.iter().find(|c| c.year == 1761 && c.month == 6).unwrap();
        assert_eq!(warmest.fill, "rgb(165, 0, 38)");
        let coldest = cells.iter().find(|c| c.year == 1759 && c.month == 4).unwrap();
        assert_eq!(coldest.fill, "rgb(49, 54, 149)");
    }

    #[test]
    fn test_halfway_total_in_data_temp() {
        let records = vec![TemperatureRecord {
            year: 1800,
            month: 3,
            variance: -0.535,
        }];
        let ds = Dataset::new(8.66, records).unwrap();
        let dims = ChartDimensions::for_record_count(ds.len());
        let scales = ChartScales::from_dataset(&ds, &dims);
        let cells = build_cells(&ds, &scales);
        assert_eq!(cells[0].data_temp, "8.13");
    }
}
