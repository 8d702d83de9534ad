// ABOUTME: String helpers for sort keys and human-readable byte sizes.
// ABOUTME: Moves leading articles to the end of titles and scales byte counts to KB/MB/GB.

use once_cell::sync::Lazy;
use regex::Regex;

/// Decimal places used by callers that have no preference.
pub const DEFAULT_PRECISION: usize = 1;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;
const GIB: u64 = 1024 * MIB;

static LEADING_ARTICLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(The|A|An)\s+(.+)$").unwrap());

/// Builds a sort key for a title, with quotes removed.
///
/// `"The Great Gatsby"` becomes `"Great Gatsby, The"`.
pub fn title_sort_key(title: &str) -> String {
    title_sort_key_with(title, true)
}

/// Moves a leading "The", "A" or "An" to the end after a comma.
///
/// Matching is case-sensitive. When `remove_quotes` is set, single and double
/// quotes are dropped first since titles often start with one. Titles with no
/// leading article come back unchanged apart from quote removal.
pub fn title_sort_key_with(title: &str, remove_quotes: bool) -> String {
    let title = if remove_quotes {
        title.replace(['"', '\''], "")
    } else {
        title.to_string()
    };

    match LEADING_ARTICLE_RE.captures(&title) {
        Some(caps) => format!("{}, {}", &caps[2], &caps[1]),
        None => title,
    }
}

/// Formats a byte count in GB, MB or KB, or as a bare number below 1 KiB.
///
/// Units are binary (1024-based) even though the suffixes are the short
/// decimal ones. Each threshold is exclusive: exactly 1024 bytes is `"1024"`.
/// Ties round up, so 1280 bytes at one decimal is `"1.3KB"`.
pub fn byte_size_human(bytes: u64, precision: usize) -> String {
    let (divisor, suffix) = if bytes > GIB {
        (GIB, "GB")
    } else if bytes > MIB {
        (MIB, "MB")
    } else if bytes > KIB {
        (KIB, "KB")
    } else {
        return bytes.to_string();
    };

    format!("{}{}", fixed_decimal(bytes, divisor, precision), suffix)
}

/// Writes `numer / denom` with exactly `precision` decimals, rounding the
/// last digit half away from zero.
fn fixed_decimal(numer: u64, denom: u64, precision: usize) -> String {
    let mut whole = numer / denom;
    let mut rem = numer % denom;
    let mut digits: Vec<u8> = Vec::with_capacity(precision);
    for _ in 0..precision {
        rem *= 10;
        digits.push((rem / denom) as u8);
        rem %= denom;
    }

    if rem * 2 >= denom {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            whole += 1;
        }
    }

    if digits.is_empty() {
        return whole.to_string();
    }
    let fraction: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    format!("{}.{}", whole, fraction)
}
