use url::Url;

const WATCH_HOSTS: &[&str] = &["youtube.com", "www.youtube.com", "m.youtube.com", "music.youtube.com"];
const SHORT_HOST: &str = "youtu.be";
const WATCH_PATH: &str = "/watch";

/// The video id of a youtube watch url, `None` for any other page.
pub fn video_id_from_url(page_url: &str) -> Option<String> {
    let url = Url::parse(page_url.trim()).ok()?;
    let host = url.host_str()?.to_lowercase();
    let id = if host == SHORT_HOST {
        url.path_segments()?.next().map(ToString::to_string)
    } else if WATCH_HOSTS.contains(&host.as_str()) && url.path().starts_with(WATCH_PATH) {
        url.query_pairs().find(|(key, _)| key == "v").map(|(_, value)| value.into_owned())
    } else {
        None
    };
    id.filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_urls() {
        assert_eq!(video_id_from_url("https://www.youtube.com/watch?v=x8VYWazR5mE&t=10s").as_deref(), Some("x8VYWazR5mE"));
        assert_eq!(video_id_from_url("https://m.youtube.com/watch?feature=share&v=abc").as_deref(), Some("abc"));
        assert_eq!(video_id_from_url("https://youtu.be/x8VYWazR5mE?si=foo").as_deref(), Some("x8VYWazR5mE"));
    }

    #[test]
    fn test_non_watch_urls() {
        assert_eq!(video_id_from_url("https://www.youtube.com/"), None);
        assert_eq!(video_id_from_url("https://www.youtube.com/results?search_query=a"), None);
        assert_eq!(video_id_from_url("https://www.youtube.com/watch?v="), None);
        assert_eq!(video_id_from_url("https://example.com/watch?v=abc"), None);
        assert_eq!(video_id_from_url("not a url"), None);
    }
}
