use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::record::TemperatureRecord;

#[cfg(feature = "api")]
use log::{error, info};
#[cfg(feature = "api")]
use reqwest::Client;

/// Wire shape of a source record, month still 1-based.
#[derive(Debug, Deserialize)]
struct RawRecord {
    year: i32,
    month: u32,
    variance: f64,
}

/// Wire shape of the whole document, before the month shift.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDataset {
    base_temperature: f64,
    monthly_variance: Vec<RawRecord>,
}

/// The loaded temperature series.
///
/// Held in memory for the lifetime of the page; never mutated after
/// construction. Always holds at least one record, and every record's
/// month lies in `0..=11`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    base_temperature: f64,
    monthly_variance: Vec<TemperatureRecord>,
}

impl TryFrom<RawDataset> for Dataset {
    type Error = DatasetError;

    fn try_from(raw: RawDataset) -> Result<Self, Self::Error> {
        let records = raw
            .monthly_variance
            .into_iter()
            .map(|r| {
                if !(1..=12).contains(&r.month) {
                    return Err(DatasetError::MonthOutOfRange {
                        year: r.year,
                        month: r.month,
                    });
                }
                Ok(TemperatureRecord {
                    year: r.year,
                    month: r.month - 1,
                    variance: r.variance,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Dataset::new(raw.base_temperature, records)
    }
}

impl Dataset {
    /// Build a dataset from records whose months are already zero-based.
    pub fn new(
        base_temperature: f64,
        monthly_variance: Vec<TemperatureRecord>,
    ) -> Result<Self, DatasetError> {
        if monthly_variance.is_empty() {
            return Err(DatasetError::Empty);
        }
        if let Some(bad) = monthly_variance.iter().find(|r| r.month > 11) {
            return Err(DatasetError::MonthOutOfRange {
                year: bad.year,
                month: bad.month,
            });
        }
        Ok(Self {
            base_temperature,
            monthly_variance,
        })
    }

    /// Parse the source JSON document and shift months to zero-based.
    pub fn from_json(body: &str) -> Result<Self, DatasetError> {
        let raw: RawDataset = serde_json::from_str(body)?;
        raw.try_into()
    }

    /// Fetch and parse the dataset from `url`. A single attempt, no retry.
    #[cfg(feature = "api")]
    pub async fn fetch(client: &Client, url: &str) -> anyhow::Result<Self> {
        info!("Fetching temperature dataset from {}", url);
        let response = client.get(url).send().await?;
        if !response.status().is_success() {
            error!("Bad response status for {}: {}", url, response.status());
            anyhow::bail!("Dataset request failed with status {}", response.status());
        }
        let body = response.text().await?;
        let dataset = Dataset::from_json(&body).map_err(|e| {
            error!("Failed to parse dataset from {}: {}", url, e);
            e
        })?;
        info!("Loaded {} monthly records", dataset.len());
        Ok(dataset)
    }

    pub fn base_temperature(&self) -> f64 {
        self.base_temperature
    }

    pub fn records(&self) -> &[TemperatureRecord] {
        &self.monthly_variance
    }

    pub fn len(&self) -> usize {
        self.monthly_variance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monthly_variance.is_empty()
    }

    /// Sorted distinct years present in the series.
    pub fn years(&self) -> Vec<i32> {
        self.monthly_variance
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<i32>>()
            .into_iter()
            .collect()
    }

    /// First and last year present.
    pub fn year_span(&self) -> (i32, i32) {
        let years = self.monthly_variance.iter().map(|r| r.year);
        let first = years.clone().min().unwrap_or_default();
        let last = years.max().unwrap_or_default();
        (first, last)
    }

    /// Smallest and largest variance across all records.
    pub fn variance_extent(&self) -> (f64, f64) {
        self.monthly_variance.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), r| (lo.min(r.variance), hi.max(r.variance)),
        )
    }

    /// Coldest and warmest total temperature: base plus the extreme variances.
    pub fn temperature_extent(&self) -> (f64, f64) {
        let (lo, hi) = self.variance_extent();
        (self.base_temperature + lo, self.base_temperature + hi)
    }

    pub fn warmest(&self) -> Option<&TemperatureRecord> {
        self.monthly_variance
            .iter()
            .max_by(|a, b| a.variance.total_cmp(&b.variance))
    }

    pub fn coldest(&self) -> Option<&TemperatureRecord> {
        self.monthly_variance
            .iter()
            .min_by(|a, b| a.variance.total_cmp(&b.variance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_JSON: &str = include_str!("../../fixtures/global-temperature-sample.json");

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_from_json_shifts_months() {
        let dataset = Dataset::from_json(SAMPLE_JSON).unwrap();
        assert_eq!(dataset.len(), 36);
        assert!(dataset.records().iter().all(|r| r.month <= 11));
        assert_eq!(dataset.records()[0].month, 0);
        assert_eq!(dataset.records()[11].month, 11);
    }

    #[test]
    fn test_single_record_adjustment() {
        let body = r#"{"baseTemperature": 8.0, "monthlyVariance": [{"year": 2000, "month": 1, "variance": 1.5}]}"#;
        let dataset = Dataset::from_json(body).unwrap();
        let record = dataset.records()[0];
        assert_eq!(record.month, 0);
        assert_eq!(record.year, 2000);
        assert_eq!(record.temperature_label(dataset.base_temperature()), "9.50");
    }

    #[test]
    fn test_month_out_of_range_rejected() {
        let body = r#"{"baseTemperature": 8.0, "monthlyVariance": [{"year": 1999, "month": 13, "variance": 0.1}]}"#;
        assert_eq!(
            Dataset::from_json(body),
            Err(DatasetError::MonthOutOfRange {
                year: 1999,
                month: 13
            })
        );

        let zero = r#"{"baseTemperature": 8.0, "monthlyVariance": [{"year": 1999, "month": 0, "variance": 0.1}]}"#;
        assert!(matches!(
            Dataset::from_json(zero),
            Err(DatasetError::MonthOutOfRange { .. })
        ));
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let body = r#"{"baseTemperature": 8.0, "monthlyVariance": []}"#;
        assert_eq!(Dataset::from_json(body), Err(DatasetError::Empty));
    }

    #[test]
    fn test_malformed_json() {
        let result = Dataset::from_json("{\"baseTemperature\": \"warm\"}");
        assert!(matches!(result, Err(DatasetError::Json(_))));
    }

    #[test]
    fn test_years_sorted_distinct() {
        let dataset = Dataset::from_json(SAMPLE_JSON).unwrap();
        assert_eq!(dataset.years(), vec![1759, 1760, 1761]);
        assert_eq!(dataset.year_span(), (1759, 1761));
    }

    #[test]
    fn test_temperature_extent() {
        let dataset = Dataset::from_json(SAMPLE_JSON).unwrap();
        let (lo, hi) = dataset.temperature_extent();
        assert!(approx(lo, 8.66 - 2.934));
        assert!(approx(hi, 8.66 + 1.823));
    }

    #[test]
    fn test_warmest_and_coldest() {
        let dataset = Dataset::from_json(SAMPLE_JSON).unwrap();
        let warmest = dataset.warmest().unwrap();
        assert_eq!((warmest.year, warmest.month), (1761, 6));
        let coldest = dataset.coldest().unwrap();
        assert_eq!((coldest.year, coldest.month), (1759, 4));
    }

    #[test]
    fn test_new_rejects_unshifted_month() {
        let records = vec![TemperatureRecord {
            year: 1800,
            month: 12,
            variance: 0.0,
        }];
        assert!(Dataset::new(8.0, records).is_err());
    }
}
