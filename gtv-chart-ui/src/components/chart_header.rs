//! Page headings: `#title` and `#description`.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// Year span and base temperature, or a placeholder before data arrives
    pub description: String,
}

/// Header for the chart showing title and description.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px; text-align: center;",
            h1 {
                id: "title",
                style: "margin: 0 0 4px 0; font-size: 28px;",
                "{props.title}"
            }
            h3 {
                id: "description",
                style: "margin: 0; font-size: 16px; font-weight: normal; color: #444;",
                "{props.description}"
            }
        }
    }
}
