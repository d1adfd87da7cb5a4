use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CONTROL_RE: Regex = Regex::new(r"\p{Cc}").unwrap();
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// Normalises a player name before it is stored.
///
/// Control characters become spaces, whitespace runs collapse to one space,
/// the ends are trimmed and HTML metacharacters are escaped so a stored name
/// is always safe to render.
pub fn clean_name(raw: &str) -> String {
    let without_controls = CONTROL_RE.replace_all(raw, " ");
    let collapsed = WHITESPACE_RE.replace_all(&without_controls, " ");
    escape_html(collapsed.trim())
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
#[path = "sanitize_tests.rs"]
mod sanitize_tests;
