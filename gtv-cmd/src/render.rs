//! `render`: write the heat map as a standalone SVG document.

use gtv_data::Dataset;
use gtv_heatmap::{svg, HeatMap};
use log::info;

pub fn run_render(dataset: &Dataset, output: &str) -> anyhow::Result<()> {
    let heat_map = HeatMap::build(dataset);
    let document = svg::render_document(&heat_map);
    std::fs::write(output, &document)?;
    info!(
        "Rendered {} cells ({} bytes) to {}",
        heat_map.cells.len(),
        document.len(),
        output
    );
    Ok(())
}
