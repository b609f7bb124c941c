//! Name-based entry filtering

use glob::Pattern;
use tracing::warn;

/// Compiled set of ignore patterns matched against entry names.
#[derive(Debug, Clone, Default)]
pub struct NameFilter {
    patterns: Vec<(String, Option<Pattern>)>,
}

impl NameFilter {
    /// Compile `patterns`. A pattern that is not valid glob syntax still
    /// matches names equal to it literally.
    pub fn new(patterns: &[String]) -> Self {
        let patterns = patterns
            .iter()
            .map(|raw| {
                let compiled = Pattern::new(raw)
                    .inspect_err(|e| warn!("ignore pattern '{}' is not a valid glob: {}", raw, e))
                    .ok();
                (raw.clone(), compiled)
            })
            .collect();
        Self { patterns }
    }

    /// Check if an entry with this name should be left out.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.patterns.iter().any(|(raw, compiled)| {
            raw == name || compiled.as_ref().is_some_and(|p| p.matches(name))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(patterns: &[&str]) -> NameFilter {
        let owned: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
        NameFilter::new(&owned)
    }

    #[test]
    fn test_glob_patterns() {
        let f = filter(&["*.log", "target", "[ab].txt"]);
        assert!(f.is_ignored("debug.log"));
        assert!(f.is_ignored("target"));
        assert!(f.is_ignored("a.txt"));
        assert!(!f.is_ignored("c.txt"));
        assert!(!f.is_ignored("main.rs"));
    }

    #[test]
    fn test_invalid_glob_matches_literally() {
        let f = filter(&["[oops"]);
        assert!(f.is_ignored("[oops"));
        assert!(!f.is_ignored("oops"));
    }

    #[test]
    fn test_empty_filter_ignores_nothing() {
        let f = NameFilter::default();
        assert!(!f.is_ignored(".git"));
    }
}
