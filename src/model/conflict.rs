//! Conflict listing data model

/// Output of `jj resolve --list`
///
/// jj prints each conflicted path followed by a free-form description
/// (e.g. `src/main.rs    2-sided conflict`) without quoting or a fixed
/// delimiter, so membership is decided by prefix comparison against a
/// known candidate path. A path that is a prefix of another conflicted
/// path (`a.txt` vs `a.txt.orig`) will match too; that is a limitation of
/// the output format.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConflictListing {
    /// Non-empty output lines, unmodified
    pub lines: Vec<String>,
}

impl ConflictListing {
    /// Listing with no conflicts
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Does any listed line start with `path`?
    pub fn contains(&self, path: &str) -> bool {
        !path.is_empty() && self.lines.iter().any(|line| line.starts_with(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(lines: &[&str]) -> ConflictListing {
        ConflictListing {
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_contains_by_prefix() {
        let conflicts = listing(&["src/main.rs    2-sided conflict"]);
        assert!(conflicts.contains("src/main.rs"));
        assert!(!conflicts.contains("src/lib.rs"));
    }

    #[test]
    fn test_empty_path_never_matches() {
        let conflicts = listing(&["a.txt    2-sided conflict"]);
        assert!(!conflicts.contains(""));
    }

    #[test]
    fn test_empty_listing() {
        let conflicts = ConflictListing::empty();
        assert!(conflicts.is_empty());
        assert!(!conflicts.contains("a.txt"));
    }
}
