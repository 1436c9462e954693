//! Dataset types and fetcher for the global temperature variance heat map.
//!
//! The dataset is a single JSON document holding a base temperature and one
//! variance record per month. Months arrive 1-based and are shifted to
//! 0-based indices once, at load time; everything downstream of
//! [`Dataset::from_json`] only ever sees `0..=11`.

pub mod dataset;
pub mod error;
pub mod month;
pub mod record;

pub use dataset::Dataset;
pub use error::DatasetError;
pub use record::TemperatureRecord;

/// Remote location of the monthly global land-surface temperature dataset.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/FreeCodeCamp/ProjectReferenceData/master/global-temperature.json";
