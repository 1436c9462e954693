//! `summary`: headline numbers for a dataset.

use std::fmt;

use gtv_data::{Dataset, TemperatureRecord};
use log::info;

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub records: usize,
    pub first_year: i32,
    pub last_year: i32,
    pub base_temperature: f64,
    pub min_temp: f64,
    pub max_temp: f64,
    pub warmest: Option<TemperatureRecord>,
    pub coldest: Option<TemperatureRecord>,
}

impl Summary {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let (first_year, last_year) = dataset.year_span();
        let (min_temp, max_temp) = dataset.temperature_extent();
        Self {
            records: dataset.len(),
            first_year,
            last_year,
            base_temperature: dataset.base_temperature(),
            min_temp,
            max_temp,
            warmest: dataset.warmest().copied(),
            coldest: dataset.coldest().copied(),
        }
    }
}

fn describe(record: &Option<TemperatureRecord>, base: f64) -> String {
    match record {
        Some(r) => format!("{} {} ({}℃)", r.month_name(), r.year, r.temperature_label(base)),
        None => "n/a".to_string(),
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Records: {}", self.records)?;
        writeln!(f, "Years: {} - {}", self.first_year, self.last_year)?;
        writeln!(f, "Base temperature: {}℃", self.base_temperature)?;
        writeln!(
            f,
            "Temperature range: {:.2}℃ - {:.2}℃",
            self.min_temp, self.max_temp
        )?;
        writeln!(f, "Warmest month: {}", describe(&self.warmest, self.base_temperature))?;
        write!(f, "Coldest month: {}", describe(&self.coldest, self.base_temperature))
    }
}

pub fn run_summary(dataset: &Dataset) {
    let summary = Summary::from_dataset(dataset);
    for line in summary.to_string().lines() {
        info!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JSON: &str = include_str!("../../fixtures/global-temperature-sample.json");

    #[test]
    fn test_summary_of_sample() {
        let dataset = Dataset::from_json(SAMPLE_JSON).unwrap();
        let summary = Summary::from_dataset(&dataset);
        assert_eq!(summary.records, 36);
        assert_eq!((summary.first_year, summary.last_year), (1759, 1761));

        let text = summary.to_string();
        assert!(text.contains("Years: 1759 - 1761"));
        assert!(text.contains("Temperature range: 5.73℃ - 10.48℃"));
        assert!(text.contains("Warmest month: July 1761 (10.48℃)"));
        assert!(text.contains("Coldest month: May 1759 (5.73℃)"));
    }
}
