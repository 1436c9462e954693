//! The `.map` group of `.cell` rectangles with their hover handlers.

use dioxus::prelude::*;
use gtv_heatmap::grid::Cell;
use gtv_heatmap::hover::cell_fill;

use crate::handlers::{on_cell_enter, on_cell_leave};
use crate::state::AppState;

#[derive(Props, Clone, PartialEq)]
pub struct HeatMapGridProps {
    pub cells: Vec<Cell>,
    /// Horizontal shift of the group past the y-axis
    pub offset_x: f64,
}

#[component]
pub fn HeatMapGrid(props: HeatMapGridProps) -> Element {
    let transform = format!("translate({},0)", props.offset_x);

    rsx! {
        g {
            class: "map",
            "transform": transform,
            for (index, cell) in props.cells.iter().enumerate() {
                HeatMapCell {
                    key: "{cell.year}-{cell.month}",
                    index,
                    cell: cell.clone(),
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct HeatMapCellProps {
    pub index: usize,
    pub cell: Cell,
}

/// One cell. Re-renders only when its own highlight flips.
#[component]
pub fn HeatMapCell(props: HeatMapCellProps) -> Element {
    let state = use_context::<AppState>();
    let index = props.index;
    let highlighted = use_memo(move || state.hover.read().is_hovered(index));

    let cell = props.cell.clone();
    let fill = cell_fill(&props.cell, highlighted()).to_string();

    rsx! {
        rect {
            class: "cell",
            "data-month": "{props.cell.month}",
            "data-year": "{props.cell.year}",
            "data-temp": "{props.cell.data_temp}",
            x: "{props.cell.x}",
            y: "{props.cell.y}",
            width: "{props.cell.width}",
            height: "{props.cell.height}",
            "fill": fill,
            onmouseenter: move |evt: MouseEvent| {
                let point = evt.page_coordinates();
                on_cell_enter(state.hover, index, &cell, point.x, point.y);
            },
            onmouseleave: move |_| on_cell_leave(state.hover, index),
        }
    }
}
