//! Known data-quality patches
//!
//! Some design files in the `R036` revision family carry a wrong piezo in
//! their header. The correction is tied to that filename token only and is
//! not a general inference rule; it lives here so it can be dropped without
//! touching the parsers.
//!
//! @module extract/fixups

/// Filename token of the affected revision family
const R036_MARKER: &str = "R036";

/// Canonical piezo of the 36-class stacks
pub const R036_PIEZO: &str = "36_LT";

/// Override the header piezo for mislabelled `R036` design files
pub fn correct_piezo(file_name: &str, piezo: String) -> String {
    if file_name.contains(R036_MARKER) && !piezo.contains("36") {
        return R036_PIEZO.to_string();
    }
    piezo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_r036_without_36_is_corrected() {
        assert_eq!(correct_piezo("MPS2.5_R036_Mo140.mpar", "42_LT".into()), R036_PIEZO);
        assert_eq!(correct_piezo("MPS2.5_R036_Mo140.mpar", String::new()), R036_PIEZO);
    }

    #[test]
    fn test_r036_with_36_is_kept() {
        assert_eq!(correct_piezo("MPS_R036.mpar", "36Y_LT".into()), "36Y_LT");
    }

    #[test]
    fn test_other_revisions_untouched() {
        assert_eq!(correct_piezo("MPS2.5_R042_Mo140.mpar", "42_LT".into()), "42_LT");
        assert_eq!(correct_piezo("MPS2.5_r036.mpar", "42_LT".into()), "42_LT");
    }
}
