use regex::Regex;
use std::fmt::{Debug, Formatter};
use crate::normalize::constants::{collapse_whitespace, to_halfwidth_alnum, NORMALIZE_CONSTANTS};

pub type TransformFn = Box<dyn Fn(&str) -> String + Send + Sync>;

pub enum RewriteAction {
    Replace { pattern: Regex, replacement: String },
    Transform(TransformFn),
}

/// A single named rewrite step of the title cleaning pipeline.
pub struct RewriteRule {
    name: String,
    action: RewriteAction,
}

impl RewriteRule {
    pub fn regex(name: &str, pattern: Regex, replacement: &str) -> Self {
        Self {
            name: name.to_string(),
            action: RewriteAction::Replace { pattern, replacement: replacement.to_string() },
        }
    }

    pub fn transform<F>(name: &str, transform: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            action: RewriteAction::Transform(Box::new(transform)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn apply(&self, input: &str) -> String {
        match &self.action {
            RewriteAction::Replace { pattern, replacement } => pattern.replace_all(input, replacement.as_str()).into_owned(),
            RewriteAction::Transform(transform) => transform(input),
        }
    }
}

impl Debug for RewriteRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let kind = match &self.action {
            RewriteAction::Replace { pattern, .. } => pattern.as_str().to_string(),
            RewriteAction::Transform(_) => "<fn>".to_string(),
        };
        f.debug_struct("RewriteRule").field("name", &self.name).field("action", &kind).finish()
    }
}

pub const RULE_FULLWIDTH_BRACKETS: &str = "fullwidth_brackets";
pub const RULE_SQUARE_BRACKETS: &str = "square_brackets";
pub const RULE_SYNTH_ENGINES: &str = "synth_engines";
pub const RULE_EXTRA_NOISE: &str = "extra_noise";
pub const RULE_CREDITS: &str = "credits";
pub const RULE_LONG_PARENTHESES: &str = "long_parentheses";
pub const RULE_RELEASE_TAGS: &str = "release_tags";
pub const RULE_EMPTY_BRACKETS: &str = "empty_brackets";
pub const RULE_FULLWIDTH_ALNUM: &str = "fullwidth_alnum";
pub const RULE_UPPERCASE_RUNS: &str = "uppercase_runs";
pub const RULE_WHITESPACE: &str = "whitespace";

pub fn bracket_rules() -> Vec<RewriteRule> {
    vec![
        RewriteRule::regex(RULE_FULLWIDTH_BRACKETS, NORMALIZE_CONSTANTS.fullwidth_brackets.clone(), " "),
        RewriteRule::regex(RULE_SQUARE_BRACKETS, NORMALIZE_CONSTANTS.square_brackets.clone(), " "),
    ]
}

pub fn whitespace_rule() -> RewriteRule {
    RewriteRule::transform(RULE_WHITESPACE, collapse_whitespace)
}

/// The full cleaning pipeline in application order.
pub fn default_rules() -> Vec<RewriteRule> {
    let c = &*NORMALIZE_CONSTANTS;
    let mut rules = bracket_rules();
    rules.extend([
        RewriteRule::regex(RULE_SYNTH_ENGINES, c.synth_engines.clone(), " "),
        RewriteRule::regex(RULE_CREDITS, c.credits.clone(), " "),
        RewriteRule::regex(RULE_LONG_PARENTHESES, c.long_parentheses.clone(), " "),
        RewriteRule::regex(RULE_RELEASE_TAGS, c.release_tags.clone(), " "),
        RewriteRule::regex(RULE_EMPTY_BRACKETS, c.empty_brackets.clone(), " "),
        RewriteRule::transform(RULE_FULLWIDTH_ALNUM, to_halfwidth_alnum),
        RewriteRule::regex(RULE_UPPERCASE_RUNS, c.uppercase_runs.clone(), " "),
        whitespace_rule(),
    ]);
    rules
}

/// Literal noise tokens from the configuration, matched case-insensitive.
pub fn noise_token_rule(tokens: &[String]) -> Result<Option<RewriteRule>, regex::Error> {
    if tokens.is_empty() {
        return Ok(None);
    }
    let alternatives = tokens.iter().map(|t| regex::escape(t)).collect::<Vec<_>>().join("|");
    let pattern = Regex::new(&format!("(?i)(?:{alternatives})"))?;
    Ok(Some(RewriteRule::regex(RULE_EXTRA_NOISE, pattern, " ")))
}
