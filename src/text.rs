//! Plain-text rendering of the HTML fragments the API returns.
//!
//! Story text, comment bodies and user "about" fields are small HTML
//! snippets: `<p>` separated paragraphs, `<a>`, `<i>`, `<pre><code>` and
//! HTML entities. The TUI shows them as plain text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Paragraph and line-break tags.
static BREAK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<\s*(p|br)\s*/?\s*>|<\s*/\s*p\s*>").expect("Invalid break regex")
});

/// Any remaining tag.
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"));

/// Named, decimal and hex entities.
static ENTITY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);").expect("Invalid entity regex")
});

/// Runs of three or more newlines.
static BLANK_RUN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("Invalid blank run regex"));

/// Convert an HTML fragment to plain text.
///
/// `<p>` starts a new paragraph (blank line), `<br>` a new line. All other
/// tags are dropped and entities are decoded.
pub fn html_to_text(html: &str) -> String {
    let with_breaks = BREAK_REGEX.replace_all(html, |caps: &regex::Captures<'_>| {
        match caps.get(1).map(|m| m.as_str().to_ascii_lowercase()) {
            Some(tag) if tag == "br" => "\n",
            _ => "\n\n",
        }
    });
    let stripped = TAG_REGEX.replace_all(&with_breaks, "");
    let decoded = decode_entities(&stripped);
    let collapsed = BLANK_RUN_REGEX.replace_all(&decoded, "\n\n");
    collapsed.trim().to_string()
}

/// Decode HTML entities. Unknown entities are kept verbatim.
pub fn decode_entities(text: &str) -> String {
    ENTITY_REGEX
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let whole = &caps[0];
            let name = &caps[1];
            decode_entity(name).unwrap_or_else(|| whole.to_string())
        })
        .into_owned()
}

fn decode_entity(name: &str) -> Option<String> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse().ok()?,
        };
        return char::from_u32(code).map(String::from);
    }

    let decoded = match name {
        "quot" => "\"",
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "apos" => "'",
        "nbsp" => " ",
        "hellip" => "…",
        "mdash" => "—",
        "ndash" => "–",
        _ => return None,
    };
    Some(decoded.to_string())
}
