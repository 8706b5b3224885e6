//! `#parameter` / `#range` layout (measurement files without `#common`)
//!
//! The parameter section holds one quoted string: either a design-file name
//! or a `key=value, key=value` list. The range section holds `key:` header
//! lines each followed by comma-separated data rows.
//!
//! @module extract/parameter

use super::{keep_numeric, LEFTMOST_ALLOWED};
use crate::core::config::DESIGN_SUFFIX;
use crate::stack::{coerce_number, StackRecord};
use once_cell::sync::Lazy;
use regex::Regex;

/// First quoted string after the marker, on the marker line or a later one
static PARAMETER: Lazy<Regex> = Lazy::new(|| Regex::new(r#"#parameter[^"]*"([^"]*)""#).unwrap());

/// Parenthesized annotations such as `(typ)` in a parameter value
static ANNOTATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(.*?\)").unwrap());

/// Parameter values carry no exponent notation
const PARAMETER_ALLOWED: &[char] = &['.', '+', '-'];

/// What the quoted parameter string turned out to be
#[derive(Debug, Clone, PartialEq)]
pub enum Parameter {
    /// The string names a design file
    DesignRef(String),
    /// The string is a `key=value` list
    Stack(StackRecord),
}

/// Interpret the quoted string following `#parameter`
pub fn extract_parameter(text: &str) -> Option<Parameter> {
    let quoted = PARAMETER
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())?;

    if quoted.contains(&format!(".{}", DESIGN_SUFFIX)) {
        return Some(Parameter::DesignRef(quoted.to_string()));
    }
    Some(Parameter::Stack(stack_from_pairs(quoted)))
}

fn stack_from_pairs(list: &str) -> StackRecord {
    let mut stack = StackRecord::new();
    for item in list.split(',') {
        let Some((key, value)) = item.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = ANNOTATION.replace_all(value, "");
        let cleaned = keep_numeric(value.trim(), PARAMETER_ALLOWED);
        if key.is_empty() || cleaned.is_empty() {
            continue;
        }
        if let Some(number) = coerce_number(&cleaned) {
            stack.insert(key, number);
        }
    }
    stack
}

/// Stack from the `#range` section.
///
/// Only the first data row under each `key:` header is read; later rows
/// under the same header are ignored.
pub fn extract_range(text: &str) -> StackRecord {
    let mut in_range = false;
    let mut current_key: Option<String> = None;
    let mut stack = StackRecord::new();

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('#') {
            in_range = line.to_lowercase() == "#range";
            current_key = None;
            continue;
        }
        if !in_range {
            continue;
        }

        if let Some(key) = line.strip_suffix(':') {
            current_key = Some(key.trim().to_string());
            continue;
        }

        if let Some(key) = current_key.take() {
            let first = line.split(',').map(str::trim).find(|p| !p.is_empty());
            if let Some(first) = first {
                if let Some(number) = coerce_number(&keep_numeric(first, LEFTMOST_ALLOWED)) {
                    stack.insert(key, number);
                }
            }
        }
    }

    stack
}
