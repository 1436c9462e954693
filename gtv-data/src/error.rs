//! Errors raised while turning the source JSON into a [`crate::Dataset`].

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum DatasetError {
    /// The body was not valid JSON or did not match the expected shape.
    Json(String),
    /// A source record carried a month outside the 1-12 convention.
    MonthOutOfRange { year: i32, month: u32 },
    /// `monthlyVariance` held no records, so there is no extent to scale.
    Empty,
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Json(msg) => write!(f, "Malformed dataset: {}", msg),
            DatasetError::MonthOutOfRange { year, month } => {
                write!(f, "Month {} out of range for year {}", month, year)
            }
            DatasetError::Empty => write!(f, "Dataset has no monthly records"),
        }
    }
}

impl std::error::Error for DatasetError {}

impl From<serde_json::Error> for DatasetError {
    fn from(e: serde_json::Error) -> Self {
        DatasetError::Json(e.to_string())
    }
}
