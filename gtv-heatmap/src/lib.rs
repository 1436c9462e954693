//! Heat map layout model for the global temperature variance chart.
//!
//! Rendering is split in two: [`HeatMap::build`] turns a [`Dataset`] into a
//! plain model of positioned cells, axes and legend swatches, and the
//! renderers (the Dioxus components in `gtv-chart-ui`, or [`svg`] for a
//! standalone document) only read that model.
//!
//! # Usage
//!
//! ```rust
//! use gtv_data::Dataset;
//! use gtv_heatmap::HeatMap;
//!
//! let body = r#"{"baseTemperature": 8.0, "monthlyVariance": [{"year": 2000, "month": 1, "variance": 1.5}]}"#;
//! let dataset = Dataset::from_json(body).unwrap();
//! let heat_map = HeatMap::build(&dataset);
//! assert_eq!(heat_map.cells[0].data_temp, "9.50");
//! ```

pub mod axis;
pub mod grid;
pub mod hover;
pub mod layout;
pub mod legend;
pub mod scales;
pub mod svg;

use gtv_data::Dataset;
use log::debug;
use serde::Serialize;

use crate::axis::Axis;
use crate::grid::Cell;
use crate::layout::ChartDimensions;
use crate::legend::Legend;
use crate::scales::ChartScales;

/// Everything the renderers need, positioned and colored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatMap {
    pub title: String,
    pub description: String,
    pub dimensions: ChartDimensions,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub cells: Vec<Cell>,
    pub legend: Legend,
}

impl HeatMap {
    pub fn build(dataset: &Dataset) -> Self {
        let dimensions = ChartDimensions::for_record_count(dataset.len());
        let scales = ChartScales::from_dataset(dataset, &dimensions);
        let cells = grid::build_cells(dataset, &scales);
        debug!(
            "Built heat map: {} cells, {}x{} plot, temperature {:.3}..{:.3}",
            cells.len(),
            dimensions.width,
            dimensions.height,
            scales.min_temp,
            scales.max_temp
        );
        Self {
            title: layout::TITLE.to_string(),
            description: layout::description(dataset),
            x_axis: axis::x_axis(&scales, &dimensions),
            y_axis: axis::y_axis(&scales, &dimensions),
            legend: legend::build_legend(&scales),
            dimensions,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JSON: &str = include_str!("../../fixtures/global-temperature-sample.json");

    #[test]
    fn test_build_sample() {
        let dataset = Dataset::from_json(SAMPLE_JSON).unwrap();
        let heat_map = HeatMap::build(&dataset);
        assert_eq!(heat_map.cells.len(), 36);
        assert_eq!(heat_map.title, "Global Monthly Temperature");
        assert_eq!(heat_map.description, "1759 - 1761: base temperature 8.66℃");
        assert_eq!(heat_map.dimensions.width, 15.0);
        assert_eq!(heat_map.legend.swatches.len(), 12);
    }

    #[test]
    fn test_single_record_cell_attributes() {
        let body = r#"{"baseTemperature": 8.0, "monthlyVariance": [{"year": 2000, "month": 1, "variance": 1.5}]}"#;
        let dataset = Dataset::from_json(body).unwrap();
        let heat_map = HeatMap::build(&dataset);
        let cell = &heat_map.cells[0];
        assert_eq!(cell.month, 0);
        assert_eq!(cell.year, 2000);
        assert_eq!(cell.data_temp, "9.50");
    }
}
