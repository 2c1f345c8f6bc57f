use log::{debug, info};
use crate::model::SearchOutcome;
use crate::normalize::TitleNormalizer;
use crate::search::{search_with_fallback, SearchBackend};
use crate::utils::get_trimmed_string;

/// Page title in, ranked videos out. Holds no state between runs.
pub struct MatchPipeline<B: SearchBackend> {
    normalizer: TitleNormalizer,
    backend: B,
}

impl<B: SearchBackend> MatchPipeline<B> {
    pub fn new(normalizer: TitleNormalizer, backend: B) -> Self {
        Self { normalizer, backend }
    }

    pub fn normalizer(&self) -> &TitleNormalizer {
        &self.normalizer
    }

    pub async fn run(&self, title: Option<&str>) -> SearchOutcome {
        let Some(title) = get_trimmed_string(title) else {
            debug!("No page title, skipping search");
            return SearchOutcome::empty();
        };
        info!("Searching for: {title}");
        let queries = self.normalizer.derive_queries(&title);
        search_with_fallback(&self.backend, &queries).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NicotubeError;
    use crate::model::SearchResult;
    use futures::future::BoxFuture;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingBackend {
        hit: &'static str,
        calls: Mutex<Vec<String>>,
    }

    impl SearchBackend for RecordingBackend {
        fn lookup<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<SearchOutcome, NicotubeError>> {
            self.calls.lock().unwrap().push(query.to_string());
            let outcome = if query == self.hit {
                SearchOutcome::new(vec![SearchResult {
                    id: "sm1".to_string(),
                    title: query.to_string(),
                    view_count: 1,
                    thumbnail_url: String::new(),
                }])
            } else {
                SearchOutcome::empty()
            };
            Box::pin(async move { Ok(outcome) })
        }
    }

    #[tokio::test]
    async fn test_missing_title_skips_search() {
        let pipeline = MatchPipeline::new(TitleNormalizer::default(), RecordingBackend::default());
        assert!(pipeline.run(None).await.is_empty());
        assert!(pipeline.run(Some("   ")).await.is_empty());
        assert!(pipeline.backend.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_falls_back_to_second_query() {
        let backend = RecordingBackend { hit: "Song Name Artist", ..RecordingBackend::default() };
        let pipeline = MatchPipeline::new(TitleNormalizer::default(), backend);
        let outcome = pipeline.run(Some("【official】Song Name / Artist Name (MV)")).await;
        assert_eq!(outcome.results()[0].title, "Song Name Artist");
        assert_eq!(*pipeline.backend.calls.lock().unwrap(), vec!["Song Name", "Song Name Artist"]);

        // same input, same queries
        let again = pipeline.run(Some("【official】Song Name / Artist Name (MV)")).await;
        assert_eq!(outcome, again);
    }
}
