use regex::Regex;
use std::sync::LazyLock;

/// Product names of vocal synthesis engines and their stock voices.
pub const SYNTH_ENGINE_NAMES_JA: &[&str] = &[
    "初音ミク",
    "鏡音リン",
    "鏡音レン",
    "巡音ルカ",
    "重音テト",
    "結月ゆかり",
    "東北きりたん",
    "可不",
];

pub const SYNTH_ENGINE_NAMES_ASCII: &[&str] = &[
    r"VOCALOID\d*",
    "UTAU",
    r"Synthesizer\s?V",
    "SynthV",
    r"CeVIO(?:\s?AI)?",
    "NEUTRINO",
    r"Hatsune\s+Miku",
    "GUMI",
    "KAITO",
    "MEIKO",
];

pub const RELEASE_TAGS_JA: &[&str] = &["公式", "歌詞", "字幕", "歌ってみた", "カバー"];

// longer alternatives first, the regex engine takes the leftmost-first branch
pub const RELEASE_TAGS_ASCII: &[&str] = &[
    "Official",
    r"Music\s+Video",
    r"Lyric\s+Video",
    "MV",
    "PV",
    "Full",
    "HD",
    "4K",
    "Lyrics?",
    "Audio",
    "cover",
    "subtitles?",
    "sub",
];

const FULLWIDTH_OFFSET: u32 = 0xFEE0;

// unicode \b finds no boundary in "曲名MV", the ascii one does
const ASCII_WORD_BOUNDARY: &str = r"(?-u:\b)";

pub struct NormalizeConstants {
    pub fullwidth_brackets: Regex,
    pub square_brackets: Regex,
    pub synth_engines: Regex,
    pub credits: Regex,
    pub long_parentheses: Regex,
    pub release_tags: Regex,
    pub empty_brackets: Regex,
    pub uppercase_runs: Regex,
    pub whitespace: Regex,
    pub leading_title_run: Regex,
}

pub static NORMALIZE_CONSTANTS: LazyLock<NormalizeConstants> = LazyLock::new(|| {
    let synth_ja = SYNTH_ENGINE_NAMES_JA.iter().map(|n| regex::escape(n)).collect::<Vec<_>>().join("|");
    let synth_ascii = SYNTH_ENGINE_NAMES_ASCII.join("|");
    let tags_ja = RELEASE_TAGS_JA.join("|");
    let tags_ascii = RELEASE_TAGS_ASCII.join("|");
    NormalizeConstants {
        fullwidth_brackets: Regex::new(r"【[^】]*】").unwrap(),
        square_brackets: Regex::new(r"\[[^\]]*\]").unwrap(),
        synth_engines: Regex::new(&format!(r"(?i)(?:{synth_ja})|{ASCII_WORD_BOUNDARY}(?:{synth_ascii}){ASCII_WORD_BOUNDARY}")).unwrap(),
        credits: Regex::new(r"(?i)(?:(?-u:\b)(?:covered\s+by|cover\s+by|vocals?\s*[:：]|vo\.|feat\.|featuring(?-u:\b)|ft\.)|歌\s*[:：])[^/／|｜()（）\[\]【】]*").unwrap(),
        long_parentheses: Regex::new(r"\([^()]{10,}\)|（[^（）]{10,}）").unwrap(),
        release_tags: Regex::new(&format!(r"(?i)(?:\s*[-|｜]\s*)?(?:(?:{tags_ja})|{ASCII_WORD_BOUNDARY}(?:{tags_ascii}){ASCII_WORD_BOUNDARY})")).unwrap(),
        empty_brackets: Regex::new(r"\(\s*\)|（\s*）|\[\s*\]|「\s*」|【\s*】").unwrap(),
        uppercase_runs: Regex::new(r"(?-u:\b)[A-Z][A-Z0-9]+(?:\s+[A-Z][A-Z0-9]+)+(?-u:\b)").unwrap(),
        whitespace: Regex::new(r"\s+").unwrap(),
        leading_title_run: Regex::new(r"^[\p{Hiragana}\p{Katakana}\p{Han}\w\s\-ー]+").unwrap(),
    }
});

/// Maps full-width digits and latin letters to their ASCII counterparts, other characters pass through.
pub fn to_halfwidth_alnum(input: &str) -> String {
    input.chars()
        .map(|c| match c {
            '０'..='９' | 'Ａ'..='Ｚ' | 'ａ'..='ｚ' => char::from_u32(c as u32 - FULLWIDTH_OFFSET).unwrap_or(c),
            _ => c,
        })
        .collect()
}

pub fn collapse_whitespace(input: &str) -> String {
    NORMALIZE_CONSTANTS.whitespace.replace_all(input, " ").trim().to_string()
}
