use log::debug;
use crate::error::NicotubeError;
use crate::search::{create_fetch_error, create_read_error};
use crate::status_err_res;

/// Downloads a watch page for title extraction.
pub async fn fetch_watch_page(client: &reqwest::Client, page_url: &str) -> Result<String, NicotubeError> {
    debug!("Fetching watch page {page_url}");
    let response = client
        .get(page_url)
        .header(reqwest::header::ACCEPT_LANGUAGE, "ja,en;q=0.8")
        .send()
        .await
        .map_err(|e| create_fetch_error(page_url, &e))?;
    let status = response.status();
    if !status.is_success() {
        return status_err_res!("Watch page {page_url} answered {status}");
    }
    response.text().await.map_err(|e| create_read_error(&e))
}
