//! Legend strip: fixed illustrative buckets plus a linear axis.

use serde::Serialize;

use crate::axis::{legend_axis, Axis};
use crate::layout::{LEGEND_BUCKETS, LEGEND_RECT_SIZE};
use crate::scales::ChartScales;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendSwatch {
    pub bucket: f64,
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub swatches: Vec<LegendSwatch>,
    pub axis: Axis,
}

/// Swatches always cover buckets 2 through 13, whatever the data range;
/// each is placed by the legend scale and filled by the color scale.
pub fn build_legend(scales: &ChartScales) -> Legend {
    let swatches = LEGEND_BUCKETS
        .iter()
        .map(|&bucket| LegendSwatch {
            bucket,
            x: scales.legend.scale(bucket),
            width: LEGEND_RECT_SIZE,
            height: LEGEND_RECT_SIZE,
            fill: scales.fill(bucket).to_string(),
        })
        .collect();
    Legend {
        swatches,
        axis: legend_axis(scales),
    }
}
