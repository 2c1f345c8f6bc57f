use std::sync::LazyLock;
use crate::model::QueryCandidate;

mod constants;
mod normalizer;
mod rules;

pub use self::constants::{collapse_whitespace, to_halfwidth_alnum};
pub use self::normalizer::TitleNormalizer;
pub use self::rules::*;

static TITLE_NORMALIZER: LazyLock<TitleNormalizer> = LazyLock::new(TitleNormalizer::default);

pub fn derive_queries(raw_title: &str) -> Vec<QueryCandidate> {
    TITLE_NORMALIZER.derive_queries(raw_title)
}
