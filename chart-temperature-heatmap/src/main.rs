//! Global Monthly Temperature Heat Map
//!
//! Plots every month from 1753 to 2015 as one cell: years across, months
//! down, colored by total temperature (base temperature plus that month's
//! variance). Hovering a cell highlights it and shows its values in a
//! tooltip.
//!
//! Data flow:
//! 1. On mount, the dataset JSON is fetched once from `DATASET_URL`.
//! 2. `Dataset::from_json` parses it and shifts months to 0-11.
//! 3. `HeatMap::build` derives the scales and lays out axes, cells and
//!    legend.
//! 4. The components render that model; hover only touches the tooltip and
//!    the two cells whose highlight changes.
//!
//! A failed fetch is logged and leaves the page without a chart.

use dioxus::prelude::*;
use gtv_chart_ui::components::{
    ChartHeader, HeatMapChart, Legend, LoadingSpinner, Tooltip,
};
use gtv_chart_ui::js_bridge;
use gtv_chart_ui::state::{AppState, PageBody};
use gtv_data::DATASET_URL;
use gtv_heatmap::layout::{DEFAULT_DESCRIPTION, TITLE};
use gtv_heatmap::HeatMap;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("heatmap-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Fetch the dataset once on mount
    use_effect(move || {
        spawn(async move {
            // A failure is already logged by the bridge; the page stays at
            // the headings.
            if let Ok(dataset) = js_bridge::fetch_dataset(DATASET_URL).await {
                let heat_map = HeatMap::build(&dataset);
                web_sys::console::log_1(
                    &format!("[GTV] rendering {} cells", heat_map.cells.len()).into(),
                );
                state.heat_map.set(Some(heat_map));
            }
            state.loading.set(false);
        });
    });

    let description = state
        .heat_map
        .read()
        .as_ref()
        .map(|hm| hm.description.clone())
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

    let body = match PageBody::from_status((state.loading)(), (state.heat_map)()) {
        PageBody::Loading => rsx! { LoadingSpinner {} },
        PageBody::Chart(heat_map) => rsx! {
            HeatMapChart { heat_map: heat_map.clone() }
            Tooltip {}
            Legend { legend: heat_map.legend }
        },
        PageBody::Blank => rsx! {},
    };

    rsx! {
        div {
            class: "container",
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: TITLE.to_string(),
                description,
            }

            {body}
        }
    }
}
