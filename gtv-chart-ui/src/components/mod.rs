//! Reusable Dioxus RSX components for the heat map page.

mod axis_group;
mod chart_header;
mod heat_map_chart;
mod heat_map_grid;
mod legend;
mod loading_spinner;
mod tooltip;

pub use axis_group::AxisGroup;
pub use chart_header::ChartHeader;
pub use heat_map_chart::HeatMapChart;
pub use heat_map_grid::{HeatMapCell, HeatMapGrid};
pub use legend::Legend;
pub use loading_spinner::LoadingSpinner;
pub use tooltip::Tooltip;
