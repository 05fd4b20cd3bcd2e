//! Forum markup to terminal text.
//!
//! Post bodies arrive as HTML fragments. [`format_html`] turns them into plain
//! text in three ordered steps:
//!
//! 1. line-break tags become `\n` (optionally followed by a tab),
//! 2. every remaining tag is stripped, attributes included,
//! 3. character entities are decoded.
//!
//! Decoding runs last so that an encoded `&lt;b&gt;` survives as the literal
//! text `<b>` instead of being stripped as markup.

use once_cell::sync::Lazy;
use regex::Regex;

static BREAK_TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\s*/?\s*>").expect("Invalid break tag regex"));

/// Elements whose text content is dropped together with the tags.
static RAW_TEXT_ELEMENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>")
        .expect("Invalid raw text element regex")
});

static COMMENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("Invalid comment regex"));

/// A tag starts with `<` followed by a letter, `/`, `!` or `?`. A bare `<`
/// followed by anything else is text.
static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[A-Za-z/!?][^>]*>").expect("Invalid tag regex"));

/// Convert forum HTML into plain text.
///
/// With `indent_continuations` every line after the first starts with a tab,
/// which keeps multi-line bodies grouped under a leading label in list output.
pub fn format_html(raw: &str, indent_continuations: bool) -> String {
    let separator = if indent_continuations { "\n\t" } else { "\n" };

    let text = BREAK_TAG_REGEX.replace_all(raw, separator);
    let text = strip_tags(&text);
    decode_entities(&text)
}

/// Remove all markup, keeping the text between tags.
///
/// Stripping repeats until no tag is left, so fragments such as `<<b>br>`
/// cannot reassemble into a tag.
pub fn strip_tags(html: &str) -> String {
    let text = COMMENT_REGEX.replace_all(html, "");
    let mut text = RAW_TEXT_ELEMENT_REGEX.replace_all(&text, "").into_owned();

    while TAG_REGEX.is_match(&text) {
        text = TAG_REGEX.replace_all(&text, "").into_owned();
    }

    text
}

/// Decode HTML character entities, named and numeric.
///
/// Unknown names are kept verbatim. A decoded `&` is never re-read, so
/// `&amp;lt;` yields `&lt;`.
pub fn decode_entities(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

/// Collapse all whitespace runs (newlines and tabs included) into single spaces.
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cut `text` after `max_chars` characters, never splitting a character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// One-line preview of a post body for compact list rows.
pub fn preview(raw: &str, max_chars: usize) -> String {
    let full = single_line(&format_html(raw, false));
    truncate_chars(&full, max_chars).to_string()
}
