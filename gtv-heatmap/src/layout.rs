//! Fixed chart geometry, colors and copy.

use gtv_data::Dataset;
use serde::Serialize;

pub const TITLE: &str = "Global Monthly Temperature";

/// Shown until the dataset arrives.
pub const DEFAULT_DESCRIPTION: &str = "1753 - 2015: base temperature";

/// Horizontal pixels per year column.
pub const YEAR_COLUMN_WIDTH: f64 = 5.0;
/// Vertical pixels per month row.
pub const MONTH_ROW_HEIGHT: f64 = 40.0;

/// Fill of a cell under the pointer.
pub const HIGHLIGHT_FILL: &str = "rgb(0, 209, 84)";
/// Tooltip opacity while shown.
pub const TOOLTIP_OPACITY: f64 = 0.8;

pub const LEGEND_WIDTH: f64 = 400.0;
pub const LEGEND_RECT_SIZE: f64 = 33.0;
pub const LEGEND_TICK_SIZE: f64 = 20.0;
pub const LEGEND_TICK_PADDING: f64 = 5.0;
/// Illustrative temperature buckets; not derived from the data.
pub const LEGEND_BUCKETS: [f64; 12] = [
    2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0,
];
/// Where the legend svg is nudged to, relative to its flow position.
pub const LEGEND_OFFSET: (f64, f64) = (100.0, 50.0);
pub const LEGEND_SVG_WIDTH: f64 = 460.0;
pub const LEGEND_SVG_HEIGHT: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

pub const MARGIN: Margin = Margin {
    top: 30.0,
    right: 30.0,
    bottom: 30.0,
    left: 30.0,
};

/// Plot area size plus the derived outer svg size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl ChartDimensions {
    /// One column per twelve records, one row per month.
    pub fn for_record_count(records: usize) -> Self {
        Self {
            width: YEAR_COLUMN_WIDTH * records.div_ceil(12) as f64,
            height: MONTH_ROW_HEIGHT * 12.0,
            margin: MARGIN,
        }
    }

    pub fn svg_width(&self) -> f64 {
        self.width + self.margin.left + self.margin.right
    }

    pub fn svg_height(&self) -> f64 {
        self.height + self.margin.top + self.margin.bottom
    }

    /// Horizontal shift applied to the axes and the cell group.
    pub fn plot_offset_x(&self) -> f64 {
        self.margin.left + self.margin.right
    }
}

/// Heading text once the dataset is known.
pub fn description(dataset: &Dataset) -> String {
    let (first, last) = dataset.year_span();
    format!(
        "{} - {}: base temperature {}℃",
        first,
        last,
        dataset.base_temperature()
    )
}
