//! Structural normalization of model-produced HTML.
//!
//! The contract is "structurally plausible", not "valid": checks are
//! case-insensitive pattern matches on the raw text, never a DOM. A document
//! lacking any part of the shell is rebuilt around whatever content it has.

use once_cell::sync::Lazy;
use regex::Regex;

/// Title used when the input carries no `<title>` element.
pub const DEFAULT_TITLE: &str = "Landing Page";

/// Stylesheet used when the input carries no `<style>` block.
pub const DEFAULT_STYLES: &str = "* {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
            line-height: 1.6;
            color: #333;
        }";

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("static HTML pattern must compile")
}

static OPENING_FENCE: Lazy<Regex> = Lazy::new(|| pattern(r"^```[A-Za-z0-9_+.\-]*[ \t]*(?:\r?\n)?"));

static DOCTYPE_PREFIX: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)^\s*<!doctype"));
static HTML_OPEN_TAG: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)<html[\s>]"));
static HEAD_TAG: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)<head[\s>]"));
static BODY_TAG: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)<body[\s>]"));

static TITLE_CONTENT: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?is)<title(?:\s[^>]*)?>(.*?)</title\s*>"));
static STYLE_CONTENT: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?is)<style(?:\s[^>]*)?>(.*?)</style\s*>"));

static DOCTYPE_DECL: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)<!doctype[^>]*>"));
static HTML_TAGS: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)</?html(?:\s[^>]*)?>"));
static HEAD_BLOCK: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?is)<head(?:\s[^>]*)?>.*?</head\s*>"));
static BODY_TAGS: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)</?body(?:\s[^>]*)?>"));
static STYLE_BLOCKS: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?is)<style(?:\s[^>]*)?>.*?</style\s*>"));

/// Removes a surrounding markdown code fence, with or without language tag.
///
/// Everything after the last closing fence is dropped. Text that does not
/// start with a fence is returned trimmed.
pub fn strip_code_fences(raw: &str) -> String {
    let trimmed = raw.trim();
    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }

    let without_opening = OPENING_FENCE.replace(trimmed, "");
    let inner = match without_opening.rfind("```") {
        Some(closing) => &without_opening[..closing],
        None => &without_opening[..],
    };

    inner.trim().to_string()
}

/// True when the text starts with a doctype and has `html`, `head` and `body` tags.
pub fn is_complete(text: &str) -> bool {
    DOCTYPE_PREFIX.is_match(text)
        && HTML_OPEN_TAG.is_match(text)
        && HEAD_TAG.is_match(text)
        && BODY_TAG.is_match(text)
}

/// Guarantees a complete document shell.
///
/// Complete input is returned unchanged. Otherwise a new shell is emitted
/// carrying the first title and first stylesheet found (or defaults) and the
/// remaining markup as body content. Idempotent.
pub fn ensure_complete(raw: &str) -> String {
    if is_complete(raw) {
        return raw.to_string();
    }

    let title = first_capture(&TITLE_CONTENT, raw).unwrap_or(DEFAULT_TITLE);
    let styles = first_capture(&STYLE_CONTENT, raw).unwrap_or(DEFAULT_STYLES);
    let body = extract_body_content(raw);

    wrap_document(title, styles, &body)
}

/// Emits the canonical document shell. Arguments are inserted verbatim.
pub(crate) fn wrap_document(title: &str, styles: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        {styles}
    </style>
</head>
<body>
{body}
</body>
</html>"#
    )
}

fn first_capture<'a>(re: &Regex, text: &'a str) -> Option<&'a str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
}

fn extract_body_content(raw: &str) -> String {
    let content = DOCTYPE_DECL.replace_all(raw, "");
    let content = HTML_TAGS.replace_all(&content, "");
    let content = HEAD_BLOCK.replace_all(&content, "");
    let content = BODY_TAGS.replace_all(&content, "");
    let content = STYLE_BLOCKS.replace_all(&content, "");

    content.trim().to_string()
}
