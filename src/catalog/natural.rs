//! Natural (alphanumeric) ordering of record names
//!
//! `item2` sorts before `item10`: names are split into alternating
//! non-digit and digit runs, digit runs compare by value and text runs
//! compare case-insensitively.
//!
//! @module catalog/natural

use std::cmp::Ordering;

/// Alternating text and digit runs; always starts and ends with a text run
/// (possibly empty), so two splits line up index by index.
fn runs(s: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_digits = false;

    for (i, c) in s.char_indices() {
        let is_digit = c.is_ascii_digit();
        if is_digit != in_digits {
            out.push(&s[start..i]);
            start = i;
            in_digits = is_digit;
        }
    }
    out.push(&s[start..]);
    if in_digits {
        out.push("");
    }
    out
}

/// Compare two digit runs by numeric value without parsing into an integer
fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Natural ordering of two names
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let ra = runs(a);
    let rb = runs(b);

    for (i, (x, y)) in ra.iter().zip(rb.iter()).enumerate() {
        let ord = if i % 2 == 1 {
            cmp_digits(x, y)
        } else {
            x.to_lowercase().cmp(&y.to_lowercase())
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    ra.len().cmp(&rb.len())
}

/// Stable natural sort
pub fn sort_natural<S: AsRef<str>>(names: &mut [S]) {
    names.sort_by(|a, b| natural_cmp(a.as_ref(), b.as_ref()));
}
