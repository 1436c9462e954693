//! Tooltip div. Always mounted; shown and hidden through opacity.

use dioxus::prelude::*;

use crate::state::AppState;

const TOOLTIP_BASE_STYLE: &str = "position: absolute; pointer-events: none; padding: 6px 10px; \
     background: #222; color: #fff; border-radius: 4px; font-size: 12px;";

#[component]
pub fn Tooltip() -> Element {
    let state = use_context::<AppState>();
    let tooltip = state.hover.read().tooltip.clone();
    let style = format!("{} {}", TOOLTIP_BASE_STYLE, tooltip.style());

    rsx! {
        div {
            id: "tooltip",
            class: "tooltip",
            "data-year": tooltip.data_year.map(|year| year.to_string()),
            style: "{style}",
            for line in tooltip.lines.iter() {
                p { style: "margin: 2px 0;", "{line}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_style_does_not_offset_from_pointer() {
        assert!(TOOLTIP_BASE_STYLE.contains("position: absolute"));
        assert!(!TOOLTIP_BASE_STYLE.contains("transform"));
        assert!(!TOOLTIP_BASE_STYLE.contains("margin"));
    }
}
