//! Pointer hover state: which cell is highlighted and what the tooltip shows.
//!
//! Handlers are keyed by cell index. Leaving a cell always hides the
//! tooltip; the tooltip element itself stays mounted and only its opacity
//! changes.

use crate::grid::Cell;
use crate::layout::{HIGHLIGHT_FILL, TOOLTIP_OPACITY};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipState {
    pub visible: bool,
    /// Page coordinates of the pointer when last shown.
    pub left: f64,
    pub top: f64,
    pub data_year: Option<i32>,
    pub lines: Vec<String>,
}

impl TooltipState {
    pub fn opacity(&self) -> f64 {
        if self.visible {
            TOOLTIP_OPACITY
        } else {
            0.0
        }
    }

    /// Inline style positioning the tooltip at the pointer.
    pub fn style(&self) -> String {
        format!(
            "left: {}px; top: {}px; opacity: {};",
            self.left,
            self.top,
            self.opacity()
        )
    }
}

/// Tooltip text for a cell.
pub fn tooltip_lines(cell: &Cell) -> Vec<String> {
    vec![
        format!("Year: {}", cell.year),
        format!("Month: {}", cell.month_name),
        format!("Total Temperature: {}", cell.data_temp),
        format!("Variance: {}", cell.variance),
    ]
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoverState {
    pub hovered: Option<usize>,
    pub tooltip: TooltipState,
}

impl HoverState {
    /// Pointer entered cell `index` at page position `(page_x, page_y)`.
    pub fn on_cell_enter(&mut self, index: usize, cell: &Cell, page_x: f64, page_y: f64) {
        self.hovered = Some(index);
        self.tooltip = TooltipState {
            visible: true,
            left: page_x,
            top: page_y,
            data_year: Some(cell.year),
            lines: tooltip_lines(cell),
        };
    }

    /// Pointer left cell `index`.
    pub fn on_cell_leave(&mut self, index: usize) {
        if self.hovered == Some(index) {
            self.hovered = None;
        }
        self.tooltip.visible = false;
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.hovered == Some(index)
    }

    /// Fill to draw cell `index` with right now.
    pub fn fill_for<'a>(&self, index: usize, cell: &'a Cell) -> &'a str {
        cell_fill(cell, self.is_hovered(index))
    }
}

/// Highlight color while hovered, the cell's own color-scale fill otherwise.
pub fn cell_fill(cell: &Cell, highlighted: bool) -> &str {
    if highlighted {
        HIGHLIGHT_FILL
    } else {
        &cell.fill
    }
}
