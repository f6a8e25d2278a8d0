//! Offline word-list source
//!
//! Fuzzy-filters a fixed list of words, best match first.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use super::SourceError;

#[derive(Clone)]
pub struct WordList {
    words: Arc<Vec<String>>,
    limit: usize,
}

impl fmt::Debug for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordList")
            .field("words", &self.words.len())
            .field("limit", &self.limit)
            .finish()
    }
}

impl WordList {
    pub fn new(words: Vec<String>, limit: usize) -> Self {
        Self {
            words: Arc::new(words),
            limit,
        }
    }

    /// One word per line; blank lines are skipped
    pub fn parse(content: &str, limit: usize) -> Self {
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self::new(words, limit)
    }

    pub fn from_path(path: &Path, limit: usize) -> Result<Self, SourceError> {
        let content = fs::read_to_string(path)
            .map_err(|e| SourceError::WordList(format!("{}: {}", path.display(), e)))?;
        let list = Self::parse(&content, limit);
        if list.is_empty() {
            log::warn!("word list {} has no words", path.display());
        } else {
            log::info!("loaded {} words from {}", list.len(), path.display());
        }
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words matching `query`, best score first, at most `limit`
    ///
    /// Equal scores keep list order.
    pub fn suggest(&self, query: &str) -> Vec<String> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(usize, i64)> = self
            .words
            .iter()
            .enumerate()
            .filter_map(|(idx, word)| matcher.fuzzy_match(word, query).map(|score| (idx, score)))
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));

        scored
            .into_iter()
            .take(self.limit)
            .map(|(idx, _)| self.words[idx].clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const WORDS: &str = "cat\ncatalog\n\ndog\nconcatenate\n  caterpillar  \n";

    #[test]
    fn test_parse_skips_blank_lines() {
        let list = WordList::parse(WORDS, 10);
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn test_suggest_filters_non_matches() {
        let list = WordList::parse(WORDS, 10);
        let suggestions = list.suggest("cat");
        assert!(!suggestions.contains(&"dog".to_string()));
        assert!(suggestions.contains(&"cat".to_string()));
        assert!(suggestions.contains(&"caterpillar".to_string()));
    }

    #[test]
    fn test_suggest_respects_limit() {
        let list = WordList::parse(WORDS, 2);
        assert_eq!(list.suggest("cat").len(), 2);
    }

    #[test]
    fn test_suggest_empty_query() {
        let list = WordList::parse(WORDS, 10);
        assert!(list.suggest("   ").is_empty());
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", WORDS).unwrap();
        let list = WordList::from_path(file.path(), 10).unwrap();
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn test_from_blank_file_is_empty() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "\n  \n").unwrap();
        let list = WordList::from_path(file.path(), 10).unwrap();
        assert!(list.is_empty());
        assert!(list.suggest("cat").is_empty());
    }

    #[test]
    fn test_from_missing_path() {
        let err = WordList::from_path(Path::new("/nonexistent/words"), 10).unwrap_err();
        assert!(matches!(err, SourceError::WordList(_)));
    }
}
