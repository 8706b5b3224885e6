//! Longest-name containment filter for discovered paths
//!
//! Design files come in families where a short name is a less specific copy
//! of a longer sibling (`MPS2.5_R042` vs `MPS2.5_R042_Mo140_Al400`). Only the
//! most specific name of each family is kept.
//!
//! @module catalog/dedup

use std::path::{Path, PathBuf};

fn stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Keep a path only if its stem is not contained in an already kept stem.
///
/// Candidates are visited longest stem first, so every kept stem is at least
/// as long as the one being tested. Identical stems collapse to the first
/// discovered path. The result is in visiting order.
pub fn dedup_by_containment(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut items: Vec<(PathBuf, String)> = paths
        .into_iter()
        .map(|p| {
            let s = stem(&p);
            (p, s)
        })
        .collect();
    items.sort_by(|a, b| b.1.chars().count().cmp(&a.1.chars().count()));

    let mut kept: Vec<(PathBuf, String)> = Vec::with_capacity(items.len());
    for (path, stem) in items {
        if kept.iter().any(|(_, longer)| longer.contains(stem.as_str())) {
            continue;
        }
        kept.push((path, stem));
    }

    kept.into_iter().map(|(p, _)| p).collect()
}
