//! Sentence splitting and tokenisation.
//!
//! Sentences are returned as slices of the input so anything selected from
//! them is verbatim page text.

/// Characters that may trail a sentence terminator (closing quotes and brackets).
const CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '\u{201d}', '\u{2019}', '\u{bb}'];

/// Split `text` into sentences.
///
/// Line breaks are hard boundaries. Within a line, `.`, `!` or `?`
/// (optionally followed by more terminators or closing quotes/brackets)
/// ends a sentence when whitespace follows. Fragments without any letter
/// or digit are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    for line in text.lines() {
        split_line(line, &mut sentences);
    }
    sentences
}

fn split_line<'a>(line: &'a str, out: &mut Vec<&'a str>) {
    let mut start = 0;
    let mut chars = line.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if !is_terminator(c) {
            continue;
        }
        while let Some(&(_, next)) = chars.peek() {
            if is_terminator(next) || CLOSERS.contains(&next) {
                chars.next();
            } else {
                break;
            }
        }
        if let Some(&(idx, next)) = chars.peek() {
            if next.is_whitespace() {
                push_sentence(&line[start..idx], out);
                start = idx;
            }
        }
    }

    push_sentence(&line[start..], out);
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn push_sentence<'a>(candidate: &'a str, out: &mut Vec<&'a str>) {
    let sentence = candidate.trim();
    if sentence.chars().any(char::is_alphanumeric) {
        out.push(sentence);
    }
}

/// Lowercased terms of `text` for vectorisation.
///
/// Anything that is not a letter separates terms; terms shorter than two
/// characters are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|term| term.chars().nth(1).is_some())
        .map(str::to_lowercase)
        .collect()
}

/// Byte ranges of the whitespace-separated words in `text`.
pub fn word_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;

    for (idx, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                spans.push((s, idx));
                start = None;
            }
            (false, None) => start = Some(idx),
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, text.len()));
    }
    spans
}

/// Lowercase a word and keep only its letters and digits, for matching.
pub fn normalise_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
