//! Parenthetical-list layout and design-file header
//!
//! A design file looks like:
//!
//! ```text
//! SAW MPS/42_LT V2.5 ...
//! Tracking ID : TRK-0012
//! stack (Mo=140n/Al=400nm/SiN=10n)
//! ```
//!
//! @module extract/design

use crate::stack::{coerce_number, StackRecord};
use once_cell::sync::Lazy;
use regex::Regex;

/// First parenthesized group anywhere in the text
static PAREN_GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]*)\)").unwrap());

/// Trailing thickness unit (`n` or `nm`)
static UNIT_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(?:nm|n)$").unwrap());

static PIEZO: Lazy<Regex> = Lazy::new(|| Regex::new(r"MPS/([A-Za-z0-9_]+)").unwrap());

static VERSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"V([0-9]+(?:\.[0-9]+)?)").unwrap());

static TRACKING_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Tracking ID\s*:\s*([^\n\r]+)").unwrap());

/// Metadata carried on the first line of a design file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesignHeader {
    /// Piezo class following `MPS/`, empty when absent
    pub piezo: String,
    /// Technology version following `V`, empty when absent
    pub tech_version: String,
}

/// Parse piezo and version from the first line only
pub fn parse_header(text: &str) -> DesignHeader {
    let header_line = text.lines().next().unwrap_or("");

    DesignHeader {
        piezo: first_capture(&PIEZO, header_line),
        tech_version: first_capture(&VERSION, header_line),
    }
}

fn first_capture(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// First `Tracking ID : <value>` anywhere in the text
pub fn tracking_id(text: &str) -> String {
    first_capture(&TRACKING_ID, text).trim().to_string()
}

/// Stack from the first `(key=value/key=value/...)` group
pub fn parenthetical_stack(text: &str) -> StackRecord {
    let Some(inside) = PAREN_GROUP.captures(text).and_then(|c| c.get(1)) else {
        return StackRecord::new();
    };

    let mut stack = StackRecord::new();
    for item in inside.as_str().split('/') {
        let Some((key, value)) = item.trim().split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        let value = UNIT_SUFFIX.replace(value.trim(), "");
        if let Some(number) = coerce_number(value.trim()) {
            stack.insert(key, number);
        }
    }
    stack
}
