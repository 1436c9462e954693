//! Legend svg: fixed swatches over a linear temperature axis.

use dioxus::prelude::*;
use gtv_heatmap::layout::{LEGEND_OFFSET, LEGEND_SVG_HEIGHT, LEGEND_SVG_WIDTH};
use gtv_heatmap::legend::Legend as LegendModel;

use super::AxisGroup;

#[derive(Props, Clone, PartialEq)]
pub struct LegendProps {
    pub legend: LegendModel,
}

#[component]
pub fn Legend(props: LegendProps) -> Element {
    let transform = format!("translate({}, {})", LEGEND_OFFSET.0, LEGEND_OFFSET.1);

    rsx! {
        svg {
            id: "legendSvg",
            class: "legendSvg",
            width: "{LEGEND_SVG_WIDTH}",
            height: "{LEGEND_SVG_HEIGHT}",
            "overflow": "visible",
            "transform": transform,
            g {
                id: "legend",
                class: "legend",
                g {
                    for swatch in props.legend.swatches.iter() {
                        rect {
                            x: "{swatch.x}",
                            style: "width: {swatch.width}px; height: {swatch.height}px; fill: {swatch.fill};",
                        }
                    }
                }
                AxisGroup { axis: props.legend.axis.clone() }
            }
        }
    }
}
