//! HTML content extraction: strips markup and boilerplate, returns visible text.
//!
//! Walks the parsed DOM, skips non-content elements (scripts, styles,
//! navigation), turns block elements into line breaks, and normalises
//! whitespace. Line breaks in the output are hard sentence boundaries for
//! [`crate::summariser::text::split_sentences`].

use crate::types::PageContent;
use scraper::{ElementRef, Html, Selector};

/// Default maximum characters of extracted text kept per page.
pub const DEFAULT_MAX_CHARS: usize = 100_000;

/// Elements whose content is never visible text.
const SKIPPED_TAGS: &[&str] = &[
    "script", "style", "noscript", "svg", "iframe", "template", "head", "nav", "header",
    "footer", "aside", "form", "button",
];

/// Elements that start a new line of text.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "blockquote", "br", "caption", "dd", "div", "dl", "dt",
    "figcaption", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "li", "main", "ol", "p", "pre",
    "section", "table", "td", "th", "tr", "ul",
];

/// Extract visible text from raw HTML.
///
/// Prefers the first `article`, `main` or `[role="main"]` element that has
/// visible text, falling back to `<body>`. Never fails: a page with nothing
/// visible yields an empty string.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    extract_main_text(&document)
}

/// Extract visible text plus title and word count from raw HTML.
///
/// The text is cut to at most `max_chars` bytes, on a word boundary where
/// one exists.
pub fn extract_page(html: &str, url: &str, max_chars: usize) -> PageContent {
    let document = Html::parse_document(html);
    let title = extract_title(&document);
    let text = truncate_to_limit(&extract_main_text(&document), max_chars).to_owned();
    let word_count = text.split_whitespace().count();

    PageContent {
        url: url.to_owned(),
        title,
        text,
        word_count,
    }
}

/// Extract the page title from the `<title>` element.
fn extract_title(document: &Html) -> String {
    let Ok(selector) = Selector::parse("title") else {
        return String::new();
    };
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of the main content area of the document.
fn extract_main_text(document: &Html) -> String {
    let content_selectors = ["article", "main", "[role=\"main\"]", "body"];

    for selector_str in &content_selectors {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            let text = visible_text(element);
            if !text.is_empty() {
                return text;
            }
        }
    }

    String::new()
}

/// Visible text below `root` with whitespace normalised.
fn visible_text(root: ElementRef<'_>) -> String {
    let mut raw = String::new();
    collect_text(root, &mut raw);
    normalise_whitespace(&raw)
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(child_el) = ElementRef::wrap(child) {
            let name = child_el.value().name();
            if SKIPPED_TAGS.contains(&name) {
                continue;
            }
            let block = BLOCK_TAGS.contains(&name);
            if block {
                out.push('\n');
            }
            collect_text(child_el, out);
            if block {
                out.push('\n');
            }
        } else if let Some(text) = child.value().as_text() {
            out.push_str(text);
        }
    }
}

/// Collapse runs of spaces to one and drop blank lines.
fn normalise_whitespace(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cut `text` to at most `max_chars` bytes, preferring a whitespace boundary.
fn truncate_to_limit(text: &str, max_chars: usize) -> &str {
    if text.len() <= max_chars {
        return text;
    }

    let mut end = max_chars;
    while !text.is_char_boundary(end) && end > 0 {
        end -= 1;
    }

    let cut = &text[..end];
    match cut.rfind(char::is_whitespace) {
        Some(ws) if ws > 0 => cut[..ws].trim_end(),
        _ => cut,
    }
}
