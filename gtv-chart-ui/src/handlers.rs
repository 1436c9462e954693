//! Hover handlers registered on each cell, keyed by its index.

use dioxus::prelude::*;
use gtv_heatmap::grid::Cell;
use gtv_heatmap::hover::HoverState;

pub fn on_cell_enter(
    mut hover: Signal<HoverState>,
    index: usize,
    cell: &Cell,
    page_x: f64,
    page_y: f64,
) {
    hover.write().on_cell_enter(index, cell, page_x, page_y);
}

pub fn on_cell_leave(mut hover: Signal<HoverState>, index: usize) {
    hover.write().on_cell_leave(index);
}
