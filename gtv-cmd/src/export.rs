//! `export`: one CSV row per heat map cell.

use gtv_data::Dataset;
use gtv_heatmap::HeatMap;
use log::info;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct CellRow<'a> {
    year: i32,
    month: u32,
    month_name: &'a str,
    temperature: &'a str,
    variance: f64,
    fill: &'a str,
}

/// Write the header and one row per cell to `writer`. Returns the row count.
pub fn write_cells_csv<W: std::io::Write>(heat_map: &HeatMap, writer: W) -> anyhow::Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    for cell in &heat_map.cells {
        wtr.serialize(CellRow {
            year: cell.year,
            month: cell.month,
            month_name: &cell.month_name,
            temperature: &cell.data_temp,
            variance: cell.variance,
            fill: &cell.fill,
        })?;
    }
    wtr.flush()?;
    Ok(heat_map.cells.len())
}

pub fn run_export(dataset: &Dataset, output: &str) -> anyhow::Result<()> {
    let heat_map = HeatMap::build(dataset);
    let file = std::fs::File::create(output)?;
    let rows = write_cells_csv(&heat_map, file)?;
    info!("Exported {} cells to {}", rows, output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_record_row() {
        let body = r#"{"baseTemperature": 8.0, "monthlyVariance": [{"year": 2000, "month": 1, "variance": 1.5}]}"#;
        let dataset = Dataset::from_json(body).unwrap();
        let heat_map = HeatMap::build(&dataset);
        let mut out = Vec::new();
        let rows = write_cells_csv(&heat_map, &mut out).unwrap();
        assert_eq!(rows, 1);

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("year,month,month_name,temperature,variance,fill")
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("2000,0,January,9.50,1.5,"));
        assert_eq!(lines.next(), None);
    }
}
