// Charged-word dictionary.
//
// The dictionary lives in a directory of plain UTF-8 files, one word per
// line. All files are merged into a single deduplicated, lower-cased set
// which is loaded once and then shared read-only across pipelines.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

/// Deduplicated set of normalized charged words.
#[derive(Debug, Clone, Default)]
pub struct ChargedWordSet {
    words: HashSet<String>,
}

impl ChargedWordSet {
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ChargedWordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }
}

/// Load every file in `dir` into one charged-word set.
///
/// An empty directory gives an empty set. A missing directory or an
/// unreadable file is an error: scoring against a silently partial
/// dictionary would produce misleading rates.
pub fn load_charged_words(dir: &Path) -> Result<ChargedWordSet> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read charged-word directory {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        // Follows symlinks, unlike DirEntry::file_type.
        let path = entry.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut lines = Vec::new();
    for path in &paths {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read charged-word file {}", path.display()))?;
        debug!(path = %path.display(), "Read charged-word file");
        lines.extend(contents.lines().map(str::to_owned));
    }

    let set: ChargedWordSet = lines.into_iter().collect();
    info!(
        dir = %dir.display(),
        files = paths.len(),
        words = set.len(),
        "Loaded charged-word dictionary"
    );
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_directory_gives_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let set = load_charged_words(dir.path()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn merges_files_trims_and_dedups() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("negative_words.txt"), "побег\n  аутсайдер \n\n").unwrap();
        std::fs::write(dir.path().join("positive_words.txt"), "Побег\nвосторг\n").unwrap();

        let set = load_charged_words(dir.path()).unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains("побег"));
        assert!(set.contains("аутсайдер"));
        assert!(set.contains("восторг"));
    }

    #[test]
    fn subdirectories_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("words.txt"), "побег\n").unwrap();
        assert_eq!(load_charged_words(dir.path()).unwrap().len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_files_are_loaded() {
        let store = tempfile::tempdir().unwrap();
        let target = store.path().join("shared.txt");
        std::fs::write(&target, "сенсация\nпобег\n").unwrap();

        let dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("linked.txt")).unwrap();

        let set = load_charged_words(dir.path()).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("сенсация"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        assert!(load_charged_words(Path::new("/nonexistent/charged_dict")).is_err());
    }
}
