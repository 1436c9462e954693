//! Where a command's dataset comes from.

use gtv_data::Dataset;
use log::info;

/// Timeout for the single dataset request.
const FETCH_TIMEOUT_SECS: u64 = 60;

/// Read and parse a dataset JSON file from disk.
pub fn read_dataset_file(path: &str) -> anyhow::Result<Dataset> {
    info!("Reading temperature dataset from {}", path);
    let body = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path, e))?;
    Ok(Dataset::from_json(&body)?)
}

/// Local file when `input` is set, otherwise one GET of `url`.
pub async fn load_dataset(input: Option<&str>, url: &str) -> anyhow::Result<Dataset> {
    match input {
        Some(path) => read_dataset_file(path),
        None => {
            let client = reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
                .build()?;
            Dataset::fetch(&client, url).await
        }
    }
}
