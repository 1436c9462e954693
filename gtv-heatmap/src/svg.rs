//! Standalone SVG document for a [`HeatMap`].
//!
//! Carries the same ids, classes and `data-*` attributes as the page, so a
//! static export can be checked with the same selectors. No tooltip and no
//! hover: the document is inert.

use crate::axis::Axis;
use crate::layout::{LEGEND_OFFSET, LEGEND_SVG_HEIGHT, LEGEND_SVG_WIDTH};
use crate::HeatMap;

/// Vertical space reserved above the chart for the headings.
const HEADER_HEIGHT: f64 = 70.0;
const FOOTER_GAP: f64 = 20.0;

/// Escape text content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Axis group contents: the domain path followed by one `g.tick` per tick.
pub fn render_axis(axis: &Axis, id: Option<&str>) -> String {
    let id_attr = id.map(|id| format!(" id=\"{}\"", id)).unwrap_or_default();
    let (x2, y2) = axis.tick_line();
    let label = axis.label_placement();
    let mut out = format!(
        "<g{} transform=\"{}\" fill=\"none\" font-size=\"10\" font-family=\"sans-serif\" text-anchor=\"{}\">\n",
        id_attr,
        axis.transform_attr(),
        label.anchor
    );
    out.push_str(&format!(
        "<path class=\"domain\" stroke=\"currentColor\" d=\"{}\"/>\n",
        axis.domain_path()
    ));
    for tick in &axis.ticks {
        out.push_str(&format!(
            "<g class=\"tick\" opacity=\"1\" transform=\"{}\"><line stroke=\"currentColor\" x2=\"{}\" y2=\"{}\"/><text fill=\"currentColor\" x=\"{}\" y=\"{}\" dy=\"{}\">{}</text></g>\n",
            axis.tick_transform(tick),
            x2,
            y2,
            label.x,
            label.y,
            label.dy,
            escape(&tick.label)
        ));
    }
    out.push_str("</g>\n");
    out
}

fn render_cells(heat_map: &HeatMap) -> String {
    let mut out = format!(
        "<g class=\"map\" transform=\"translate({},0)\">\n",
        heat_map.dimensions.plot_offset_x()
    );
    for cell in &heat_map.cells {
        out.push_str(&format!(
            "<rect class=\"cell\" data-month=\"{}\" data-year=\"{}\" data-temp=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
            cell.month, cell.year, cell.data_temp, cell.x, cell.y, cell.width, cell.height, cell.fill
        ));
    }
    out.push_str("</g>\n");
    out
}

fn render_legend(heat_map: &HeatMap, y: f64) -> String {
    let mut out = format!(
        "<svg id=\"legendSvg\" class=\"legendSvg\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" overflow=\"visible\">\n<g id=\"legend\" class=\"legend\">\n<g>\n",
        LEGEND_OFFSET.0, y, LEGEND_SVG_WIDTH, LEGEND_SVG_HEIGHT
    );
    for swatch in &heat_map.legend.swatches {
        out.push_str(&format!(
            "<rect x=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
            swatch.x, swatch.width, swatch.height, swatch.fill
        ));
    }
    out.push_str("</g>\n");
    out.push_str(&render_axis(&heat_map.legend.axis, None));
    out.push_str("</g>\n</svg>\n");
    out
}

/// Render the whole chart: headings, axes, cells and legend.
pub fn render_document(heat_map: &HeatMap) -> String {
    let dims = &heat_map.dimensions;
    let width = dims.svg_width().max(LEGEND_OFFSET.0 + LEGEND_SVG_WIDTH);
    let legend_y = HEADER_HEIGHT + dims.svg_height();
    let height = legend_y + LEGEND_SVG_HEIGHT + FOOTER_GAP;

    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" font-family=\"sans-serif\">\n",
        width, height
    );
    out.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");
    out.push_str(&format!(
        "<text id=\"title\" x=\"{}\" y=\"30\" text-anchor=\"middle\" font-size=\"24\">{}</text>\n",
        width / 2.0,
        escape(&heat_map.title)
    ));
    out.push_str(&format!(
        "<text id=\"description\" x=\"{}\" y=\"56\" text-anchor=\"middle\" font-size=\"16\">{}</text>\n",
        width / 2.0,
        escape(&heat_map.description)
    ));
    out.push_str(&format!(
        "<svg x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" overflow=\"visible\">\n",
        dims.margin.left,
        HEADER_HEIGHT,
        dims.svg_width(),
        dims.svg_height()
    ));
    out.push_str(&render_axis(&heat_map.x_axis, Some("x-axis")));
    out.push_str(&render_axis(&heat_map.y_axis, Some("y-axis")));
    out.push_str(&render_cells(heat_map));
    out.push_str("</svg>\n");
    out.push_str(&render_legend(heat_map, legend_y));
    out.push_str("</svg>\n");
    out
}
