use futures::future::BoxFuture;
use crate::error::NicotubeError;
use crate::model::SearchOutcome;

/// A single fallible remote lookup for one query string.
pub trait SearchBackend: Send + Sync {
    fn lookup<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<SearchOutcome, NicotubeError>>;
}
