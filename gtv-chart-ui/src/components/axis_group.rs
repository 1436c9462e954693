//! An axis drawn from its model: domain path plus one group per tick.

use dioxus::prelude::*;
use gtv_heatmap::axis::Axis;

#[derive(Props, Clone, PartialEq)]
pub struct AxisGroupProps {
    pub axis: Axis,
    /// DOM id of the axis group, e.g. `x-axis`
    #[props(default)]
    pub id: Option<String>,
}

#[component]
pub fn AxisGroup(props: AxisGroupProps) -> Element {
    let axis = &props.axis;
    let (x2, y2) = axis.tick_line();
    let label = axis.label_placement();
    let ticks = axis
        .ticks
        .iter()
        .map(|tick| (axis.tick_transform(tick), tick.label.clone()))
        .collect::<Vec<_>>();

    rsx! {
        g {
            id: props.id.clone(),
            "transform": axis.transform_attr(),
            "fill": "none",
            "font-size": "10",
            "font-family": "sans-serif",
            "text-anchor": label.anchor,
            path {
                class: "domain",
                "stroke": "currentColor",
                d: axis.domain_path(),
            }
            for (transform, text) in ticks {
                g {
                    class: "tick",
                    "opacity": "1",
                    "transform": transform,
                    line {
                        "stroke": "currentColor",
                        x2: "{x2}",
                        y2: "{y2}",
                    }
                    text {
                        "fill": "currentColor",
                        x: "{label.x}",
                        y: "{label.y}",
                        "dy": label.dy,
                        "{text}"
                    }
                }
            }
        }
    }
}
