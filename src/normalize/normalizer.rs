use log::debug;
use crate::config_err;
use crate::error::NicotubeError;
use crate::model::{NormalizerConfig, QueryCandidate};
use crate::normalize::constants::{collapse_whitespace, NORMALIZE_CONSTANTS};
use crate::normalize::rules::{bracket_rules, default_rules, noise_token_rule, whitespace_rule, RewriteRule, RULE_SYNTH_ENGINES};
use crate::utils::{char_len, trace_if_enabled};

// below this the cleaned title is considered over-stripped
const MIN_CLEANED_CHARS: usize = 3;
const SONG_ARTIST_DELIMITERS: [char; 2] = ['/', '／'];

/// Turns a scraped video title into an ordered list of search queries, most specific first.
#[derive(Debug)]
pub struct TitleNormalizer {
    rules: Vec<RewriteRule>,
    minimal_rules: Vec<RewriteRule>,
}

impl Default for TitleNormalizer {
    fn default() -> Self {
        let mut minimal_rules = bracket_rules();
        minimal_rules.push(whitespace_rule());
        Self {
            rules: default_rules(),
            minimal_rules,
        }
    }
}

impl TitleNormalizer {
    pub fn from_config(config: &NormalizerConfig) -> Result<Self, NicotubeError> {
        let mut normalizer = Self::default();
        let noise_rule = noise_token_rule(&config.extra_noise_tokens)
            .map_err(|err| config_err!("can't build pattern for extra noise tokens: {err}"))?;
        if let Some(rule) = noise_rule {
            normalizer.insert_rule_after(RULE_SYNTH_ENGINES, rule);
        }
        Ok(normalizer)
    }

    pub fn add_rule(&mut self, rule: RewriteRule) {
        self.rules.push(rule);
    }

    /// Inserts behind the named rule, or appends when no rule has that name.
    pub fn insert_rule_after(&mut self, name: &str, rule: RewriteRule) {
        match self.rules.iter().position(|r| r.name() == name) {
            Some(idx) => self.rules.insert(idx + 1, rule),
            None => self.rules.push(rule),
        }
    }

    pub fn remove_rule(&mut self, name: &str) -> bool {
        let len = self.rules.len();
        self.rules.retain(|r| r.name() != name);
        len != self.rules.len()
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(RewriteRule::name).collect()
    }

    pub fn clean(&self, raw_title: &str) -> String {
        apply_rules(&self.rules, raw_title)
    }

    pub fn clean_minimal(&self, raw_title: &str) -> String {
        apply_rules(&self.minimal_rules, raw_title)
    }

    pub fn derive_queries(&self, raw_title: &str) -> Vec<QueryCandidate> {
        let mut cleaned = self.clean(raw_title);
        if char_len(&cleaned) < MIN_CLEANED_CHARS {
            debug!("Cleaned title too short, using raw title: {raw_title}");
            cleaned = collapse_whitespace(raw_title);
        }

        let mut candidates: Vec<QueryCandidate> = Vec::new();

        if let Some((song, artist)) = split_song_artist(&cleaned) {
            push_unique(&mut candidates, QueryCandidate::new(song));
            if let Some(token) = artist.split_whitespace().next() {
                if char_len(token) >= 2 {
                    push_unique(&mut candidates, QueryCandidate::new(&format!("{song} {token}")));
                }
            }
        }

        if let Some(prefix) = NORMALIZE_CONSTANTS.leading_title_run.find(&cleaned) {
            push_unique(&mut candidates, QueryCandidate::new(prefix.as_str()));
        }

        push_unique(&mut candidates, QueryCandidate::with_min_chars(&cleaned, MIN_CLEANED_CHARS));
        push_unique(&mut candidates, QueryCandidate::with_min_chars(&self.clean_minimal(raw_title), MIN_CLEANED_CHARS));

        if candidates.is_empty() {
            candidates.push(QueryCandidate::fallback(raw_title));
        }
        debug!("Derived {} queries from '{raw_title}': {candidates:?}", candidates.len());
        candidates
    }
}

fn apply_rules(rules: &[RewriteRule], input: &str) -> String {
    rules.iter().fold(input.to_string(), |title, rule| {
        let rewritten = rule.apply(&title);
        if rewritten != title {
            trace_if_enabled!("rule {} rewrote '{}' to '{}'", rule.name(), title, rewritten);
        }
        rewritten
    })
}

// "Song Title / Artist Name", only when there are exactly two non-empty parts
fn split_song_artist(title: &str) -> Option<(&str, &str)> {
    let parts: Vec<&str> = title.split(SONG_ARTIST_DELIMITERS).map(str::trim).collect();
    match parts.as_slice() {
        [song, artist] if !song.is_empty() && !artist.is_empty() => Some((song, artist)),
        _ => None,
    }
}

fn push_unique(candidates: &mut Vec<QueryCandidate>, candidate: Option<QueryCandidate>) {
    if let Some(candidate) = candidate {
        if !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::rules::RULE_UPPERCASE_RUNS;

    fn queries(title: &str) -> Vec<String> {
        TitleNormalizer::default().derive_queries(title).into_iter().map(|q| q.to_string()).collect()
    }

    #[test]
    fn test_song_artist_title() {
        assert_eq!(queries("【official】Song Name / Artist Name (MV)"), vec![
            "Song Name",
            "Song Name Artist",
            "Song Name / Artist Name",
            "Song Name / Artist Name (MV)",
        ]);
    }

    #[test]
    fn test_credits_and_engines_removed() {
        assert_eq!(queries("ロキ / みきとP feat. 鏡音リン・初音ミク"), vec![
            "ロキ",
            "ロキ みきとP",
            "ロキ / みきとP",
            "ロキ / みきとP feat. 鏡音リン・初音ミク",
        ]);
        assert_eq!(queries("【初音ミク】千本桜【オリジナル】"), vec!["千本桜"]);
    }

    #[test]
    fn test_tags_glued_to_japanese() {
        assert_eq!(queries("千本桜feat.初音ミク"), vec!["千本桜", "千本桜feat.初音ミク"]);
        assert_eq!(queries("夜に駆けるMV"), vec!["夜に駆ける", "夜に駆けるMV"]);
        assert_eq!(TitleNormalizer::default().clean("ロキfeat.鏡音リン"), "ロキ");
    }

    #[test]
    fn test_short_title_kept() {
        assert!(queries("short").contains(&"short".to_string()));
    }

    #[test]
    fn test_japanese_prefix() {
        assert_eq!(queries("シャルル！ バルーン"), vec!["シャルル", "シャルル！ バルーン"]);
    }

    #[test]
    fn test_fullwidth_normalized() {
        let result = queries("ＡＢＣの歌 ２０２４");
        assert_eq!(result.first().map(String::as_str), Some("ABCの歌 2024"));
        assert!(result.contains(&"ＡＢＣの歌 ２０２４".to_string()));
    }

    #[test]
    fn test_over_stripped_title_uses_raw() {
        assert_eq!(queries("【MV】ab"), vec!["【MV】ab"]);
        assert_eq!(queries("!!"), vec!["!!"]);
    }

    #[test]
    fn test_three_segments_not_split() {
        let result = queries("A1 / B2 / C3");
        assert_eq!(result, vec!["A1", "A1 / B2 / C3"]);
    }

    #[test]
    fn test_queries_invariants() {
        let normalizer = TitleNormalizer::default();
        let titles = [
            "【MV】夜に駆ける / YOASOBI",
            "[Official Video] Something - Lyrics",
            "Ｌｅｍｏｎ 米津玄師 MV",
            "曲名（テレビアニメ「なにか」オープニングテーマ）",
            "  spaced    title  ",
            "ab",
            "【】",
            "/ /",
            "DECO*27 - ヴァンパイア feat. 初音ミク",
        ];
        for title in titles {
            let first = normalizer.derive_queries(title);
            assert!(!first.is_empty(), "{title}");
            for (idx, q) in first.iter().enumerate() {
                assert!(q.as_str().trim().chars().count() >= 2, "{title}: {q}");
                assert!(!first[idx + 1..].contains(q), "duplicate {q} for {title}");
            }
            assert_eq!(first, normalizer.derive_queries(title));
        }
    }

    #[test]
    fn test_rule_management() {
        let mut normalizer = TitleNormalizer::default();
        assert!(normalizer.remove_rule(RULE_UPPERCASE_RUNS));
        assert!(!normalizer.remove_rule(RULE_UPPERCASE_RUNS));
        assert_eq!(normalizer.clean("Song YOASOBI AYASE"), "Song YOASOBI AYASE");
        normalizer.add_rule(RewriteRule::transform("lower", |s| s.to_lowercase()));
        assert_eq!(normalizer.rule_names().last(), Some(&"lower"));
        assert_eq!(normalizer.clean("Song"), "song");
    }

    #[test]
    fn test_from_config_noise_tokens() {
        let config = NormalizerConfig { extra_noise_tokens: vec!["ずんだもん".to_string()] };
        let normalizer = TitleNormalizer::from_config(&config).unwrap();
        let names = normalizer.rule_names();
        let pos = names.iter().position(|n| *n == RULE_SYNTH_ENGINES).unwrap();
        assert_eq!(names[pos + 1], "extra_noise");
        assert_eq!(normalizer.clean("ずんだもん 曲名"), "曲名");
    }
}
