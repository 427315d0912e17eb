//! Text normalization shared by the extractor and the synthesizer.

use regex::Regex;
use scraper::{Html, Node};
use std::sync::OnceLock;

const BLOCK_TAGS: &[&str] = &[
    "p", "div", "br", "li", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6", "tr", "td", "th",
    "section", "article", "header", "footer", "blockquote", "pre", "figure", "figcaption",
];

const INLINE_TAGS: &[&str] = &[
    "a", "b", "i", "em", "strong", "span", "img", "code", "small", "sub", "sup", "mark", "hr",
    "table", "thead", "tbody", "script", "style", "noscript",
];

/// Returns the text content of `content` if it contains HTML markup, otherwise the input
/// unchanged. Block elements become line breaks; `script` and `style` bodies are dropped.
///
/// Only lowercase known tag names count as markup, so markdown such as `<Phillips>` or
/// `Vec<String>` passes through untouched.
pub fn to_plain_text(content: &str) -> String {
    static TAG: OnceLock<Regex> = OnceLock::new();
    let tag = TAG.get_or_init(|| {
        let names = BLOCK_TAGS
            .iter()
            .chain(INLINE_TAGS)
            .copied()
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"</?(?:{names})(?:\s[^<>]*)?/?>")).unwrap()
    });

    if !tag.is_match(content) {
        return content.to_string();
    }

    let fragment = Html::parse_fragment(content);
    let mut out = String::with_capacity(content.len());

    for node in fragment.root_element().descendants() {
        match node.value() {
            Node::Text(text) => {
                let hidden = node.ancestors().any(|ancestor| {
                    ancestor
                        .value()
                        .as_element()
                        .map(|el| matches!(el.name(), "script" | "style" | "noscript"))
                        .unwrap_or(false)
                });
                if !hidden {
                    out.push_str(text);
                }
            }
            Node::Element(el) if BLOCK_TAGS.contains(&el.name()) => out.push('\n'),
            _ => {}
        }
    }

    out.trim().to_string()
}

/// Removes markdown heading, list, link and emphasis syntax, keeping the words.
pub fn strip_markdown(content: &str) -> String {
    static IMAGE: OnceLock<Regex> = OnceLock::new();
    static LINK: OnceLock<Regex> = OnceLock::new();
    static HEADING: OnceLock<Regex> = OnceLock::new();
    static LIST: OnceLock<Regex> = OnceLock::new();
    static EMPHASIS: OnceLock<Regex> = OnceLock::new();

    let image = IMAGE.get_or_init(|| Regex::new(r"!\[([^\]]*)\]\([^)]*\)").unwrap());
    let link = LINK.get_or_init(|| Regex::new(r"\[([^\]]+)\]\([^)]*\)").unwrap());
    let heading = HEADING.get_or_init(|| Regex::new(r"(?m)^[ \t]{0,3}#{1,6}[ \t]*").unwrap());
    let list = LIST.get_or_init(|| Regex::new(r"(?m)^[ \t]*(?:[-+*]|\d+\.)[ \t]+").unwrap());
    let emphasis = EMPHASIS.get_or_init(|| Regex::new(r"\*{1,3}|_{2,3}|`+").unwrap());

    let text = image.replace_all(content, "$1");
    let text = link.replace_all(&text, "$1");
    let text = heading.replace_all(&text, "");
    let text = list.replace_all(&text, "");
    emphasis.replace_all(&text, "").into_owned()
}

/// Lowercases, drops every character that is neither an ASCII word character nor
/// whitespace, and collapses runs of whitespace to single spaces.
pub fn clean_text(text: &str) -> String {
    let lowered: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collapses runs of whitespace (including newlines) to single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Case-insensitive substring test. An empty needle is always contained.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
