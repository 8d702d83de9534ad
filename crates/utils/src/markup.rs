// ABOUTME: Best-effort closing of unbalanced HTML tags in truncated markup.
// ABOUTME: Counts opening and closing tags per name and appends missing closers at the end.

//! Heuristic tag balancing.
//!
//! This is not a parser. Each opening tag found in a left-to-right scan
//! triggers a recount of that tag name over the whole string; if there are
//! more openings than closings, one closing tag is appended. Nesting order is
//! not tracked, so the appended closers are in scan order rather than stack
//! order. Structures such as tables cut in the middle of a row still come out
//! as a half-built row.
//!
//! The input is assumed to be well formed HTML5 or XHTML up to the cut point
//! (every `<p>` has a `</p>`, unary tags end in `/>`).

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Unary tags that people commonly write without the trailing `/>`.
pub const VOID_TAGS: &[&str] = &["img", "br", "hr", "input"];

static OPEN_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<([a-z]+)\b[^>]*>").unwrap());

/// Options for [`close_markup_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CloseOptions {
    /// Skip self-closing tags and [`VOID_TAGS`] when balancing.
    ///
    /// Off by default: `<br>` is balanced like any other tag and gets a
    /// `</br>` appended.
    pub skip_void_tags: bool,
}

impl CloseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skip_void_tags(mut self, skip: bool) -> Self {
        self.skip_void_tags = skip;
        self
    }
}

/// Per-name counters, compiled once per call.
struct TagCounter {
    open: Regex,
    close: Regex,
}

impl TagCounter {
    fn new(tag: &str) -> Self {
        let tag = regex::escape(tag);
        // Both patterns are built from an escaped [a-z] name.
        Self {
            open: Regex::new(&format!(r"(?i)<{tag}\b[^>]*>")).unwrap(),
            close: Regex::new(&format!(r"(?i)</{tag}>")).unwrap(),
        }
    }

    fn is_unbalanced(&self, haystack: &str) -> bool {
        self.open.find_iter(haystack).count() > self.close.find_iter(haystack).count()
    }
}

/// Closes unbalanced tags using the default [`CloseOptions`].
pub fn close_markup(input: &str) -> String {
    close_markup_with(input, &CloseOptions::default())
}

/// Drops a trailing partial entity and a trailing partial tag, then appends a
/// closing tag for each opening tag occurrence that leaves its name unbalanced.
pub fn close_markup_with(input: &str, opts: &CloseOptions) -> String {
    let mut out = strip_dangling(input).to_string();
    let mut counters: HashMap<String, TagCounter> = HashMap::new();
    let mut pos = 0;

    while let Some(caps) = OPEN_TAG_RE.captures_at(&out, pos) {
        let whole = caps.get(0).map_or("", |m| m.as_str());
        pos = caps.get(0).map_or(out.len(), |m| m.end());
        let tag = caps
            .get(1)
            .map_or(String::new(), |m| m.as_str().to_ascii_lowercase());

        if opts.skip_void_tags && (whole.ends_with("/>") || VOID_TAGS.contains(&tag.as_str())) {
            continue;
        }

        let counter = counters
            .entry(tag.clone())
            .or_insert_with(|| TagCounter::new(&tag));

        if counter.is_unbalanced(&out) {
            trace!(tag = %tag, "appending closing tag");
            out.push_str("</");
            out.push_str(&tag);
            out.push('>');
        }
    }

    out
}

/// Removes an unterminated entity (`&` with no later `;`) and then an
/// unterminated tag (`<` with no later `>`) from the end of the string.
fn strip_dangling(input: &str) -> &str {
    let mut s = input;
    if let Some(idx) = s.rfind('&') {
        if !s[idx..].contains(';') {
            s = &s[..idx];
        }
    }
    if let Some(idx) = s.rfind('<') {
        if !s[idx..].contains('>') {
            s = &s[..idx];
        }
    }
    s
}
