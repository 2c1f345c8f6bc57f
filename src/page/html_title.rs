use log::{debug, warn};
use lol_html::{element, text, RewriteStrSettings, Selector};
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use crate::config_err;
use crate::error::NicotubeError;
use crate::page::PageTitleSource;
use crate::utils::get_trimmed_string;

const YOUTUBE_TITLE_SUFFIX: &str = " - YouTube";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleExtract {
    Text,
    Attribute(String),
}

/// A css selector and how to read the title from the matched element.
#[derive(Debug, Clone)]
pub struct TitleStrategy {
    selector: String,
    extract: TitleExtract,
}

impl TitleStrategy {
    pub fn new(selector: &str, extract: TitleExtract) -> Result<Self, NicotubeError> {
        // the lol_html macros parse again, a selector validated here can't fail there
        selector.parse::<Selector>().map_err(|e| config_err!("invalid title selector '{selector}': {e}"))?;
        Ok(Self { selector: selector.to_string(), extract })
    }
}

pub fn default_title_strategies() -> Vec<TitleStrategy> {
    [
        ("h1.ytd-watch-metadata yt-formatted-string", TitleExtract::Text),
        ("h1.title.ytd-video-primary-info-renderer yt-formatted-string", TitleExtract::Text),
        ("#title h1 yt-formatted-string", TitleExtract::Text),
        ("meta[name=\"title\"]", TitleExtract::Attribute("content".to_string())),
        ("meta[property=\"og:title\"]", TitleExtract::Attribute("content".to_string())),
        ("title", TitleExtract::Text),
    ]
        .into_iter()
        .filter_map(|(selector, extract)| TitleStrategy::new(selector, extract).ok())
        .collect()
}

/// Reads the video title out of a watch page document.
pub struct HtmlTitleSource {
    html: String,
    strategies: Vec<TitleStrategy>,
}

impl HtmlTitleSource {
    pub fn new(html: String) -> Self {
        Self::with_strategies(html, default_title_strategies())
    }

    pub fn with_strategies(html: String, strategies: Vec<TitleStrategy>) -> Self {
        Self { html, strategies }
    }
}

impl PageTitleSource for HtmlTitleSource {
    fn get_page_title(&self) -> Option<String> {
        extract_title(&self.html, &self.strategies)
    }
}

/// Watch page saved to disk, read again on every call so it can be polled while it is written.
pub struct HtmlFileTitleSource {
    path: PathBuf,
    strategies: Vec<TitleStrategy>,
}

impl HtmlFileTitleSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path, strategies: default_title_strategies() }
    }
}

impl PageTitleSource for HtmlFileTitleSource {
    fn get_page_title(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(html) => extract_title(&html, &self.strategies),
            Err(err) => {
                debug!("Can't read page {}: {err}", self.path.display());
                None
            }
        }
    }
}

/// First strategy with a non-empty value wins, in list order.
pub fn extract_title(html: &str, strategies: &[TitleStrategy]) -> Option<String> {
    // one slot per strategy, one entry per matched element
    let found: Rc<RefCell<Vec<Vec<String>>>> = Rc::new(RefCell::new(vec![Vec::new(); strategies.len()]));

    let mut handlers = Vec::with_capacity(strategies.len() * 2);
    for (idx, strategy) in strategies.iter().enumerate() {
        let slots = Rc::clone(&found);
        match &strategy.extract {
            TitleExtract::Attribute(name) => {
                let name = name.clone();
                handlers.push(element!(strategy.selector.as_str(), move |el| {
                    if let Some(value) = el.get_attribute(&name) {
                        slots.borrow_mut()[idx].push(value);
                    }
                    Ok(())
                }));
            }
            TitleExtract::Text => {
                let text_slots = Rc::clone(&found);
                handlers.push(element!(strategy.selector.as_str(), move |_el| {
                    slots.borrow_mut()[idx].push(String::new());
                    Ok(())
                }));
                handlers.push(text!(strategy.selector.as_str(), move |chunk| {
                    if let Some(last) = text_slots.borrow_mut()[idx].last_mut() {
                        last.push_str(chunk.as_str());
                    }
                    Ok(())
                }));
            }
        }
    }

    let settings = RewriteStrSettings {
        element_content_handlers: handlers,
        ..RewriteStrSettings::default()
    };
    if let Err(err) = lol_html::rewrite_str(html, settings) {
        warn!("Failed to parse watch page: {err}");
    }

    let found = found.borrow();
    strategies.iter().zip(found.iter()).find_map(|(strategy, values)| {
        values.iter()
            .find_map(|value| get_trimmed_string(Some(&decode_html_entities(value))))
            .map(|title| {
                debug!("Page title found with selector {}", strategy.selector);
                strip_site_suffix(&title)
            })
            .filter(|title| !title.is_empty())
    })
}

fn strip_site_suffix(title: &str) -> String {
    title.strip_suffix(YOUTUBE_TITLE_SUFFIX).unwrap_or(title).trim().to_string()
}

/// Decodes the named entities a title realistically contains plus numeric references.
pub fn decode_html_entities(input: &str) -> String {
    if !input.contains('&') {
        return input.to_string();
    }
    let mut result = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find('&') {
        result.push_str(&rest[..start]);
        let tail = &rest[start..];
        let decoded = tail.find(';')
            .filter(|end| *end <= 10)
            .and_then(|end| decode_entity(&tail[1..end]).map(|c| (c, end)));
        match decoded {
            Some((ch, end)) => {
                result.push(ch);
                rest = &tail[end + 1..];
            }
            None => {
                result.push('&');
                rest = &tail[1..];
            }
        }
    }
    result.push_str(rest);
    result
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let number = entity.strip_prefix('#')?;
            let code = match number.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendered_heading_wins() {
        let html = r#"<html><head><title>Other - YouTube</title><meta name="title" content="Meta Title"></head>
            <body><div id="title"><h1 class="style-scope ytd-watch-metadata"><yt-formatted-string class="style-scope">Song &amp; Dance</yt-formatted-string></h1></div></body></html>"#;
        assert_eq!(HtmlTitleSource::new(html.to_string()).get_page_title().as_deref(), Some("Song & Dance"));
    }

    #[test]
    fn test_meta_before_document_title() {
        let html = r#"<html><head><title>夜に駆ける - YouTube</title>
            <meta property="og:title" content="OG Title"><meta name="title" content="【MV】夜に駆ける / YOASOBI"></head><body></body></html>"#;
        assert_eq!(HtmlTitleSource::new(html.to_string()).get_page_title().as_deref(), Some("【MV】夜に駆ける / YOASOBI"));
    }

    #[test]
    fn test_document_title_suffix_removed() {
        let html = "<html><head><title>千本桜 - YouTube</title></head><body><h1 class=\"ytd-watch-metadata\"><yt-formatted-string>  </yt-formatted-string></h1></body></html>";
        assert_eq!(extract_title(html, &default_title_strategies()).as_deref(), Some("千本桜"));
    }

    #[test]
    fn test_no_title() {
        assert_eq!(extract_title("<html><body><p>nothing</p></body></html>", &default_title_strategies()), None);
        assert_eq!(extract_title("", &default_title_strategies()), None);
    }

    #[test]
    fn test_invalid_selector() {
        assert!(TitleStrategy::new("h1[", TitleExtract::Text).is_err());
        assert_eq!(default_title_strategies().len(), 6);
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_html_entities("a &lt;b&gt; &#39;c&#x27; &amp;amp; & d"), "a <b> 'c' &amp; & d");
        assert_eq!(decode_html_entities("&unknown; &#xZZ;"), "&unknown; &#xZZ;");
    }
}
