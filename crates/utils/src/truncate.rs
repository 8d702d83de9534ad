// ABOUTME: Length-limited truncation with an ellipsis for plain text and markup.
// ABOUTME: Optionally breaks on word boundaries, encodes output, and closes tags left open by the cut.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::html::encode;
use crate::markup::close_markup;

/// Suffix for plain, unencoded text.
pub const PLAIN_ELLIPSIS: &str = "...";

/// Suffix for encoded text and markup.
pub const ELLIPSIS: char = '\u{2026}';

/// Room reserved for the ellipsis when cutting.
const ELLIPSIS_ROOM: usize = 3;

static TRAILING_CLOSERS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:</[^>]+>)+$").unwrap());

/// Options for [`truncate_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TruncateOptions {
    /// HTML-encode the result.
    pub encode_output: bool,
    /// Cut mid-word instead of backing up to the previous space.
    pub break_anywhere: bool,
    /// The input is markup: close tags left open by the cut and put the
    /// ellipsis before the trailing closing tags.
    pub is_markup: bool,
}

impl TruncateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn encode_output(mut self, encode: bool) -> Self {
        self.encode_output = encode;
        self
    }

    pub fn break_anywhere(mut self, anywhere: bool) -> Self {
        self.break_anywhere = anywhere;
        self
    }

    pub fn is_markup(mut self, markup: bool) -> Self {
        self.is_markup = markup;
        self
    }
}

/// Truncates plain text to `max_length` characters with default options.
pub fn truncate(input: &str, max_length: usize) -> String {
    truncate_with(input, max_length, &TruncateOptions::default())
}

/// Trims `input` and, if it is longer than `max_length` characters, shortens
/// it to leave room for an ellipsis.
///
/// Strings that already fit are returned trimmed (and encoded if requested)
/// with no ellipsis. Lengths count `char`s, not bytes.
pub fn truncate_with(input: &str, max_length: usize, opts: &TruncateOptions) -> String {
    let original = input.trim();

    if original.chars().count() <= max_length {
        return if opts.encode_output {
            encode(original)
        } else {
            original.to_string()
        };
    }

    let cut: String = original
        .chars()
        .take(max_length.saturating_sub(ELLIPSIS_ROOM))
        .collect();
    let mut candidate = cut.trim_end().to_string();

    if !opts.break_anywhere && !lands_on_word_boundary(original, &candidate) {
        let end = candidate.rfind(' ').unwrap_or(0);
        candidate.truncate(end);
    }

    debug!(
        max_length,
        kept = candidate.chars().count(),
        "truncated input"
    );

    if opts.is_markup {
        candidate = close_markup(&candidate);
    }

    if opts.encode_output {
        let mut out = encode(&candidate);
        out.push(ELLIPSIS);
        out
    } else if opts.is_markup {
        insert_before_trailing_closers(&candidate)
    } else {
        candidate.push_str(PLAIN_ELLIPSIS);
        candidate
    }
}

/// True when the cut ends exactly where a word ends in the original.
fn lands_on_word_boundary(original: &str, candidate: &str) -> bool {
    original
        .strip_prefix(candidate)
        .is_some_and(|rest| rest.starts_with(' '))
}

/// Puts the ellipsis inside the markup, ahead of the closing tags at the end.
/// Markup that does not end in a closing tag gets no ellipsis.
fn insert_before_trailing_closers(markup: &str) -> String {
    match TRAILING_CLOSERS_RE.find(markup) {
        Some(m) => {
            let mut out = String::with_capacity(markup.len() + ELLIPSIS.len_utf8());
            out.push_str(&markup[..m.start()]);
            out.push(ELLIPSIS);
            out.push_str(m.as_str());
            out
        }
        None => markup.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_short_input_is_only_trimmed() {
        assert_eq!(truncate("  hello  ", 10), "hello");
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn test_short_input_encoded_without_ellipsis() {
        let opts = TruncateOptions::new().encode_output(true);
        assert_eq!(truncate_with("a & b", 10, &opts), "a &amp; b");
    }

    #[test]
    fn test_backs_up_to_word_boundary() {
        // cut at 12 chars: "The quick br"
        assert_eq!(truncate("The quick brown fox", 15), "The quick...");
    }

    #[test]
    fn test_keeps_cut_on_exact_word_end() {
        // cut at 9 chars: "The quick", followed by a space in the original
        assert_eq!(truncate("The quick brown fox", 12), "The quick...");
    }

    #[test]
    fn test_break_anywhere() {
        let opts = TruncateOptions::new().break_anywhere(true);
        assert_eq!(
            truncate_with("The quick brown fox", 15, &opts),
            "The quick br..."
        );
    }

    #[test]
    fn test_single_long_word_collapses() {
        assert_eq!(truncate("Supercalifragilistic", 10), "...");
    }

    #[test]
    fn test_tiny_max_length() {
        assert_eq!(truncate("abcdef", 2), "...");
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let opts = TruncateOptions::new().break_anywhere(true);
        assert_eq!(truncate_with("héllo wörld", 11, &opts), "héllo wörld");
        assert_eq!(truncate_with("héllo wörld", 8, &opts), "héllo...");
    }

    #[test]
    fn test_encoded_output() {
        let opts = TruncateOptions::new().encode_output(true);
        assert_eq!(
            truncate_with("Fish & Chips & Peas", 15, &opts),
            "Fish &amp; Chips\u{2026}"
        );
    }

    #[test]
    fn test_markup_closes_and_places_ellipsis_inside() {
        let opts = TruncateOptions::new().is_markup(true);
        assert_eq!(
            truncate_with("<p>The quick brown fox jumps</p>", 20, &opts),
            "<p>The quick\u{2026}</p>"
        );
    }

    #[test]
    fn test_markup_without_trailing_closer_has_no_ellipsis() {
        let opts = TruncateOptions::new().is_markup(true);
        assert_eq!(
            truncate_with("plain words go here and here", 15, &opts),
            "plain words"
        );
    }

    #[test]
    fn test_back_up_keeps_inner_spaces() {
        assert_eq!(truncate("a  bcdefgh", 7), "a ...");
    }
}
