use reqwest::StatusCode;
use crate::error::NicotubeError;
use crate::model::SearchResponseMeta;
use crate::{decode_err, status_err, transport_err};

/// Convert a non-success snapshot API status into an error, with the reason the api put into `meta`
pub fn search_api_error(status: StatusCode, query: &str, meta: &SearchResponseMeta) -> NicotubeError {
    let detail = match (meta.error_code.as_deref(), meta.error_message.as_deref()) {
        (Some(code), Some(message)) => format!(" ({code}: {message})"),
        (Some(reason), None) | (None, Some(reason)) => format!(" ({reason})"),
        (None, None) => String::new(),
    };
    match status.as_u16() {
        400 => status_err!("Search API rejected query '{query}'{detail}"),
        429 => status_err!("Search API rate limit exceeded{detail}"),
        500 | 503 => status_err!("Search API unavailable ({status}), probably in maintenance{detail}"),
        _ => status_err!("Search API error {status}: {}{detail}", status.canonical_reason().unwrap_or("Unknown"))
    }
}

pub fn create_fetch_error(url: &str, error: &reqwest::Error) -> NicotubeError {
    transport_err!("Failed to fetch {url}: {error}")
}

pub fn create_read_error(error: &reqwest::Error) -> NicotubeError {
    transport_err!("Failed to read response: {error}")
}

pub fn create_parse_error(error: &serde_json::Error) -> NicotubeError {
    decode_err!("Failed to parse response: {error}")
}
