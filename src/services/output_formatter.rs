//! Turns model prose into the HTML fragment the web client renders.
//!
//! The steps run in a fixed order. Escaping happens before any markup is
//! produced, and bold must be handled before italic because `**` would
//! otherwise be read as two empty italic markers.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static ALLOWED_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)&lt;(/?)(strong|em|br|p|ul|ol|li)\s*/?&gt;").expect("allowed tag pattern")
});
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*\n]+?)\*").expect("italic pattern"));

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Single-line, HTML-escaped form of a user supplied value for prompt interpolation.
pub fn inline_text(text: &str) -> String {
    let single_line = text
        .split(|c: char| c.is_control())
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    escape_html(&single_line)
}

pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n").trim().to_string()
}

pub fn restore_allowed_tags(text: &str) -> String {
    ALLOWED_TAG
        .replace_all(text, |caps: &Captures| {
            let tag = caps[2].to_ascii_lowercase();
            if tag == "br" {
                "<br/>".to_string()
            } else {
                format!("<{}{}>", &caps[1], tag)
            }
        })
        .into_owned()
}

pub fn bold_to_html(text: &str) -> String {
    BOLD.replace_all(text, "<strong>$1</strong>").into_owned()
}

pub fn italic_to_html(text: &str) -> String {
    ITALIC.replace_all(text, "<em>$1</em>").into_owned()
}

pub fn paragraphs_to_html(text: &str) -> String {
    text.replace("\n\n", "<br/><br/>")
}

pub fn line_breaks_to_html(text: &str) -> String {
    text.replace('\n', "<br/>")
}

/// Runs every step of the prose to HTML pipeline in order.
pub fn prose_to_html(text: &str) -> String {
    let steps: [fn(&str) -> String; 7] = [
        normalize_newlines,
        escape_html,
        restore_allowed_tags,
        bold_to_html,
        italic_to_html,
        paragraphs_to_html,
        line_breaks_to_html,
    ];

    steps
        .iter()
        .fold(text.to_string(), |current, step| step(&current))
}
