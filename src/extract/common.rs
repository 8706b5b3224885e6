//! `#common` section layout (measurement files)
//!
//! ```text
//! #common
//! 1S: "MPS2.5_R042_Mo140_Al400.mpar"
//! Mo: 140, nm
//! freq range: 1.8e9, 2.2e9
//! #range
//! ```
//!
//! @module extract/common

use super::{keep_numeric, LEFTMOST_ALLOWED};
use crate::core::config::DESIGN_SUFFIX;
use crate::stack::{coerce_number, StackRecord};
use once_cell::sync::Lazy;
use regex::Regex;

/// Key whose value names the design file
const DESIGN_REF_KEY: &str = "1S";

/// Quoted design-file name inside the `1S` value
static DESIGN_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r#""([^"]+\.{})""#, regex::escape(DESIGN_SUFFIX))).unwrap()
});

/// Extract the design reference and stack from the `#common` section
pub fn extract(text: &str) -> (String, StackRecord) {
    let mut in_common = false;
    let mut design_ref = String::new();
    let mut stack = StackRecord::new();

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('#') {
            in_common = line.to_lowercase() == "#common";
            continue;
        }
        if !in_common {
            continue;
        }

        let Some((key, rest)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let rest = rest.trim();

        if is_freq_range(key) {
            continue;
        }

        if key == DESIGN_REF_KEY {
            if design_ref.is_empty() {
                if let Some(m) = DESIGN_REF.captures(rest).and_then(|c| c.get(1)) {
                    design_ref = m.as_str().trim().to_string();
                }
            }
            continue;
        }

        let first = rest.split(',').next().unwrap_or("").trim();
        let cleaned = keep_numeric(first, LEFTMOST_ALLOWED);
        if cleaned.is_empty() {
            continue;
        }
        if let Some(number) = coerce_number(&cleaned) {
            stack.insert(key, number);
        }
    }

    (design_ref, stack)
}

fn is_freq_range(key: &str) -> bool {
    key.to_lowercase().replace(' ', "") == "freqrange"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::StackValue;
    use indoc::indoc;

    const SAMPLE: &str = indoc! {r#"
        #header
        Mo: 999
        #Common
        1S: "MPS2.5_R042_Mo140_Al400.mpar", rev 2
        Mo: 140, nm
        Al : 400nm
        Freq Range: 1.8e9, 2.2e9
        fc: 1.95e9 Hz
        note without colon
        label: n/a
        #range
        W:
        20
    "#};

    #[test]
    fn test_common_section_only() {
        let (design_ref, stack) = extract(SAMPLE);

        assert_eq!(design_ref, "MPS2.5_R042_Mo140_Al400.mpar");
        assert_eq!(stack.keys().collect::<Vec<_>>(), vec!["Mo", "Al", "fc"]);
        assert_eq!(stack.get("Mo"), Some(&StackValue::Int(140)));
        assert_eq!(stack.get("Al"), Some(&StackValue::Int(400)));
        assert_eq!(stack.get("fc"), Some(&StackValue::Int(1_950_000_000)));
    }

    #[test]
    fn test_design_ref_does_not_enter_stack() {
        let (_, stack) = extract(SAMPLE);
        assert!(!stack.contains_key("1S"));
        assert!(!stack.contains_key("Freq Range"));
    }

    #[test]
    fn test_first_design_ref_wins() {
        let text = "#common\n1S: \"first.mpar\"\n1S: \"second.mpar\"\n";
        assert_eq!(extract(text).0, "first.mpar");
    }

    #[test]
    fn test_ref_without_suffix_is_ignored() {
        let text = "#common\n1S: \"first.txt\"\nMo: 1\n";
        let (design_ref, stack) = extract(text);
        assert_eq!(design_ref, "");
        assert_eq!(stack.len(), 1);
    }
}
