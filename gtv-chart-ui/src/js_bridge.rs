//! Browser interop via `web_sys` and `wasm_bindgen_futures`.
//!
//! The dataset is fetched once per page load. Failures are logged to the
//! console and come back as plain strings; nothing here retries.

use gtv_data::Dataset;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Best-effort message from a rejected JS promise or thrown value.
fn js_error(value: JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// GET `url` and return the body as text. Non-2xx statuses are errors.
pub async fn fetch_text(url: &str) -> Result<String, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    let window = web_sys::window().ok_or_else(|| "No global window".to_string())?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = resp_value.dyn_into().map_err(js_error)?;

    if !response.ok() {
        return Err(format!(
            "HTTP {} {} fetching {}",
            response.status(),
            response.status_text(),
            url
        ));
    }

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    text.as_string()
        .ok_or_else(|| format!("Response body from {} was not text", url))
}

/// Fetch and parse the temperature dataset. The error is logged here.
pub async fn fetch_dataset(url: &str) -> Result<Dataset, String> {
    let result = match fetch_text(url).await {
        Ok(body) => Dataset::from_json(&body).map_err(|e| e.to_string()),
        Err(e) => Err(e),
    };
    match &result {
        Ok(dataset) => log::info!("Loaded {} monthly records from {}", dataset.len(), url),
        Err(e) => {
            log::error!("Failed to load dataset from {}: {}", url, e);
            web_sys::console::error_1(&format!("[GTV] dataset fetch failed: {}", e).into());
        }
    }
    result
}
