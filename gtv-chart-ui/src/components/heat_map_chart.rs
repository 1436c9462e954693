//! The chart svg: both axes and the cell grid.

use dioxus::prelude::*;
use gtv_heatmap::HeatMap;

use super::{AxisGroup, HeatMapGrid};

#[derive(Props, Clone, PartialEq)]
pub struct HeatMapChartProps {
    pub heat_map: HeatMap,
}

#[component]
pub fn HeatMapChart(props: HeatMapChartProps) -> Element {
    let dims = props.heat_map.dimensions;
    let svg_width = dims.svg_width();
    let svg_height = dims.svg_height();
    let transform = format!("translate({},{})", dims.margin.left, dims.margin.top);

    rsx! {
        svg {
            width: "{svg_width}",
            height: "{svg_height}",
            "transform": transform,
            AxisGroup {
                axis: props.heat_map.x_axis.clone(),
                id: "x-axis".to_string(),
            }
            AxisGroup {
                axis: props.heat_map.y_axis.clone(),
                id: "y-axis".to_string(),
            }
            HeatMapGrid {
                cells: props.heat_map.cells.clone(),
                offset_x: dims.plot_offset_x(),
            }
        }
    }
}
