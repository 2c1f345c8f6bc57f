use log::{debug, error, info, warn};
use crate::error::NicotubeErrorKind;
use crate::model::{QueryCandidate, SearchOutcome};
use crate::search::SearchBackend;

/// Runs one lookup, every failure degrades to an empty outcome.
pub async fn search_once<B>(backend: &B, query: &str) -> SearchOutcome
where
    B: SearchBackend + ?Sized,
{
    match backend.lookup(query).await {
        Ok(outcome) => {
            if outcome.is_empty() {
                debug!("No match for query '{query}'");
            }
            outcome
        }
        Err(err) => {
            match err.kind {
                NicotubeErrorKind::Status => warn!("Search for '{query}' failed: {}", err.message),
                _ => error!("Search for '{query}' failed: {}", err.message),
            }
            SearchOutcome::empty()
        }
    }
}

/// Tries the queries in order and returns the first non-empty outcome.
/// Queries are sent one after another, never concurrently.
pub async fn search_with_fallback<B>(backend: &B, queries: &[QueryCandidate]) -> SearchOutcome
where
    B: SearchBackend + ?Sized,
{
    for (idx, query) in queries.iter().enumerate() {
        let outcome = search_once(backend, query.as_str()).await;
        if !outcome.is_empty() {
            info!("Query {}/{} '{query}' matched {} videos", idx + 1, queries.len(), outcome.len());
            return outcome;
        }
    }
    debug!("None of {} queries matched", queries.len());
    SearchOutcome::empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NicotubeError;
    use crate::model::SearchResult;
    use crate::transport_err;
    use futures::future::BoxFuture;
    use std::collections::HashMap;
    use std::sync::Mutex;

    enum Answer {
        Results(usize),
        Fail,
    }

    #[derive(Default)]
    struct FakeBackend {
        answers: HashMap<String, Answer>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeBackend {
        fn with(mut self, query: &str, answer: Answer) -> Self {
            self.answers.insert(query.to_string(), answer);
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    fn results(query: &str, count: usize) -> Vec<SearchResult> {
        (0..count).map(|i| SearchResult {
            id: format!("sm{i}"),
            title: format!("{query} {i}"),
            view_count: 1000 - i as u64,
            thumbnail_url: String::new(),
        }).collect()
    }

    impl SearchBackend for FakeBackend {
        fn lookup<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<SearchOutcome, NicotubeError>> {
            self.calls.lock().unwrap().push(query.to_string());
            let answer = match self.answers.get(query) {
                Some(Answer::Results(count)) => Ok(SearchOutcome::new(results(query, *count))),
                Some(Answer::Fail) => Err(transport_err!("connection reset")),
                None => Ok(SearchOutcome::empty()),
            };
            Box::pin(async move { answer })
        }
    }

    fn candidates(queries: &[&str]) -> Vec<QueryCandidate> {
        queries.iter().filter_map(|q| QueryCandidate::new(q)).collect()
    }

    #[tokio::test]
    async fn test_first_non_empty_wins_in_order() {
        let backend = FakeBackend::default().with("q3", Answer::Results(2));
        let outcome = search_with_fallback(&backend, &candidates(&["q1", "q2", "q3"])).await;
        assert_eq!(outcome.len(), 2);
        assert_eq!(outcome.results()[0].title, "q3 0");
        assert_eq!(backend.calls(), vec!["q1", "q2", "q3"]);
    }

    #[tokio::test]
    async fn test_short_circuit() {
        let backend = FakeBackend::default().with("q1", Answer::Results(1)).with("q2", Answer::Results(3));
        let outcome = search_with_fallback(&backend, &candidates(&["q1", "q2"])).await;
        assert_eq!(outcome.len(), 1);
        assert_eq!(backend.calls(), vec!["q1"]);
    }

    #[tokio::test]
    async fn test_failure_does_not_abort() {
        let backend = FakeBackend::default().with("q1", Answer::Fail).with("q2", Answer::Results(1));
        let outcome = search_with_fallback(&backend, &candidates(&["q1", "q2"])).await;
        assert_eq!(outcome.len(), 1);
        assert_eq!(backend.calls(), vec!["q1", "q2"]);
    }

    #[tokio::test]
    async fn test_all_fail_or_empty() {
        let backend = FakeBackend::default().with("q1", Answer::Fail);
        assert!(search_with_fallback(&backend, &candidates(&["q1", "q2"])).await.is_empty());
        assert!(search_with_fallback(&backend, &[]).await.is_empty());
        assert_eq!(backend.calls(), vec!["q1", "q2"]);
    }

    #[tokio::test]
    async fn test_search_once_swallows_errors() {
        let backend = FakeBackend::default().with("q1", Answer::Fail).with("q2", Answer::Results(7));
        assert!(search_once(&backend, "q1").await.is_empty());
        assert_eq!(search_once(&backend, "q2").await.len(), 5);
    }
}
