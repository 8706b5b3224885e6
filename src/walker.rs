//! File discovery

use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Walks a directory tree for files of one extension
pub struct FileWalker {
    root: PathBuf,
    extension: String,
}

impl FileWalker {
    pub fn new(root: &Path, extension: &str) -> Self {
        Self {
            root: root.to_path_buf(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// All matching files below the root, or the root itself when it is a
    /// matching file. Directory entries are visited in file-name order.
    pub fn walk(&self) -> Vec<PathBuf> {
        if self.root.is_file() {
            return if self.matches(&self.root) {
                vec![self.root.clone()]
            } else {
                Vec::new()
            };
        }

        if !self.root.is_dir() {
            warn!(root = %self.root.display(), "Scan root does not exist");
            return Vec::new();
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable directory entry");
                    continue;
                }
            };
            if entry.file_type().is_file() && self.matches(entry.path()) {
                files.push(entry.into_path());
            }
        }
        files
    }

    /// Check the final extension
    fn matches(&self, path: &Path) -> bool {
        path.extension().and_then(|e| e.to_str()) == Some(self.extension.as_str())
    }
}
