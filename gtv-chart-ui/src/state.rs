//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use gtv_heatmap::hover::HoverState;
use gtv_heatmap::HeatMap;

/// Shared application state for the heat map page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Laid-out chart (None until the dataset arrives)
    pub heat_map: Signal<Option<HeatMap>>,
    /// Whether the dataset fetch is still pending
    pub loading: Signal<bool>,
    /// Highlighted cell and tooltip contents
    pub hover: Signal<HoverState>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            heat_map: Signal::new(None),
            loading: Signal::new(true),
            hover: Signal::new(HoverState::default()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// What the page shows under the headings.
///
/// A failed fetch leaves nothing there; the failure only goes to the log.
#[derive(Debug, Clone, PartialEq)]
pub enum PageBody {
    Loading,
    Chart(HeatMap),
    Blank,
}

impl PageBody {
    pub fn from_status(loading: bool, heat_map: Option<HeatMap>) -> Self {
        match (loading, heat_map) {
            (true, _) => PageBody::Loading,
            (false, Some(heat_map)) => PageBody::Chart(heat_map),
            (false, None) => PageBody::Blank,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtv_data::{Dataset, TemperatureRecord};

    fn heat_map() -> HeatMap {
        let records = vec![TemperatureRecord {
            year: 2000,
            month: 0,
            variance: 1.5,
        }];
        HeatMap::build(&Dataset::new(8.0, records).unwrap())
    }

    #[test]
    fn test_spinner_while_loading() {
        assert_eq!(PageBody::from_status(true, None), PageBody::Loading);
    }

    #[test]
    fn test_chart_once_loaded() {
        let hm = heat_map();
        assert_eq!(
            PageBody::from_status(false, Some(hm.clone())),
            PageBody::Chart(hm)
        );
    }

    #[test]
    fn test_failed_fetch_leaves_page_blank() {
        assert_eq!(PageBody::from_status(false, None), PageBody::Blank);
    }
}
