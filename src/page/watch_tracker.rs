use crate::page::video_id_from_url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    NotWatchPage,
    SameVideo,
    NewVideo(String),
}

/// Remembers the video of the last navigation, so a search runs once per video.
#[derive(Debug, Default)]
pub struct WatchTracker {
    current_video_id: Option<String>,
}

impl WatchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_video_id(&self) -> Option<&str> {
        self.current_video_id.as_deref()
    }

    pub fn observe(&mut self, page_url: &str) -> Navigation {
        let Some(video_id) = video_id_from_url(page_url) else {
            return Navigation::NotWatchPage;
        };
        if self.current_video_id.as_deref() == Some(video_id.as_str()) {
            return Navigation::SameVideo;
        }
        self.current_video_id = Some(video_id.clone());
        Navigation::NewVideo(video_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_sequence() {
        let mut tracker = WatchTracker::new();
        assert_eq!(tracker.observe("https://www.youtube.com/watch?v=a1"), Navigation::NewVideo("a1".to_string()));
        assert_eq!(tracker.observe("https://www.youtube.com/watch?v=a1&t=30"), Navigation::SameVideo);
        assert_eq!(tracker.observe("https://www.youtube.com/feed/subscriptions"), Navigation::NotWatchPage);
        // leaving the watch page keeps the last video
        assert_eq!(tracker.current_video_id(), Some("a1"));
        assert_eq!(tracker.observe("https://www.youtube.com/watch?v=a1"), Navigation::SameVideo);
        assert_eq!(tracker.observe("https://youtu.be/b2"), Navigation::NewVideo("b2".to_string()));
    }
}
