use serde::Serialize;
use crate::decode_err;
use crate::error::NicotubeError;
use crate::model::{SearchOutcome, SearchResult};
use crate::utils::group_thousands;

pub const NO_MATCH_MESSAGE: &str = "ニコニコ動画に該当する動画が見つかりませんでした";
const TEN_THOUSAND: u64 = 10_000;

#[allow(clippy::cast_precision_loss)]
pub fn format_view_count(views: u64) -> String {
    if views >= TEN_THOUSAND {
        format!("{:.1}万", views as f64 / TEN_THOUSAND as f64)
    } else {
        group_thousands(views)
    }
}

pub fn render_text(outcome: &SearchOutcome) -> String {
    if outcome.is_empty() {
        return NO_MATCH_MESSAGE.to_string();
    }
    outcome.results().iter()
        .map(|video| format!("{}  {} 再生  {}", video.title, format_view_count(video.view_count), video.watch_url()))
        .collect::<Vec<String>>()
        .join("\n")
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderedVideo<'a> {
    id: &'a str,
    title: &'a str,
    view_count: u64,
    thumbnail_url: &'a str,
    watch_url: String,
}

impl<'a> From<&'a SearchResult> for RenderedVideo<'a> {
    fn from(video: &'a SearchResult) -> Self {
        Self {
            id: &video.id,
            title: &video.title,
            view_count: video.view_count,
            thumbnail_url: &video.thumbnail_url,
            watch_url: video.watch_url(),
        }
    }
}

pub fn render_json(outcome: &SearchOutcome) -> Result<String, NicotubeError> {
    let videos: Vec<RenderedVideo> = outcome.results().iter().map(RenderedVideo::from).collect();
    serde_json::to_string_pretty(&videos).map_err(|err| decode_err!("Can't serialize results: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome() -> SearchOutcome {
        SearchOutcome::new(vec![
            SearchResult { id: "sm9".to_string(), title: "千本桜".to_string(), view_count: 12_345, thumbnail_url: "https://t/9".to_string() },
            SearchResult { id: "sm10".to_string(), title: "b".to_string(), view_count: 1234, thumbnail_url: String::new() },
        ])
    }

    #[test]
    fn test_format_view_count() {
        assert_eq!(format_view_count(0), "0");
        assert_eq!(format_view_count(9_999), "9,999");
        assert_eq!(format_view_count(10_000), "1.0万");
        assert_eq!(format_view_count(12_345), "1.2万");
        assert_eq!(format_view_count(21_000_000), "2100.0万");
    }

    #[test]
    fn test_render_text() {
        assert_eq!(render_text(&SearchOutcome::empty()), NO_MATCH_MESSAGE);
        assert_eq!(render_text(&outcome()),
                   "千本桜  1.2万 再生  https://www.nicovideo.jp/watch/sm9\nb  1,234 再生  https://www.nicovideo.jp/watch/sm10");
    }

    #[test]
    fn test_render_json() {
        let json: serde_json::Value = serde_json::from_str(&render_json(&outcome()).unwrap()).unwrap();
        assert_eq!(json[0]["viewCount"], 12_345);
        assert_eq!(json[0]["watchUrl"], "https://www.nicovideo.jp/watch/sm9");
        assert_eq!(json[1]["thumbnailUrl"], "");
        assert_eq!(render_json(&SearchOutcome::empty()).unwrap(), "[]");
    }
}
