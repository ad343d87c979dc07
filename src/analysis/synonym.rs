//! Synonym map used by the synonym graph filter.
//!
//! A source is a sequence of one or more words; each source maps to the list
//! of single-token synonyms that should be stacked on it. Lookup is by the
//! already-normalized token text.

use std::path::Path;

use ahash::AHashMap;

use crate::error::{Result, SynparseError};

/// Mapping from (possibly multi-word) sources to synonym terms.
#[derive(Debug, Clone, Default)]
pub struct SynonymMap {
    entries: AHashMap<Vec<String>, Vec<String>>,
    max_source_words: usize,
}

impl SynonymMap {
    /// Create an empty synonym map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a one-way mapping: `source` gains `targets` as synonyms.
    ///
    /// `source` is split on whitespace, so `"guinea pig"` is a two-word
    /// source.
    pub fn add_mapping<S, I, T>(&mut self, source: S, targets: I)
    where
        S: AsRef<str>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let words: Vec<String> = source
            .as_ref()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        if words.is_empty() {
            return;
        }

        self.max_source_words = self.max_source_words.max(words.len());
        let entry = self.entries.entry(words).or_default();
        for target in targets {
            let target = target.into();
            if !entry.contains(&target) {
                entry.push(target);
            }
        }
    }

    /// Add an equivalence group: every member maps to every other member.
    pub fn add_group<I, S>(&mut self, group: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let members: Vec<String> = group.into_iter().map(Into::into).collect();
        for (i, member) in members.iter().enumerate() {
            let others = members
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, other)| other.clone());
            self.add_mapping(member, others);
        }
    }

    /// Build a map from equivalence groups.
    pub fn from_groups(groups: Vec<Vec<String>>) -> Self {
        let mut map = Self::new();
        for group in groups {
            map.add_group(group);
        }
        map
    }

    /// Load equivalence groups from a JSON file.
    ///
    /// ```json
    /// [
    ///   ["cavy", "guinea pig"],
    ///   ["dog", "dogs"]
    /// ]
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SynparseError::analysis(format!(
                "Failed to read synonym file '{}': {e}",
                path.display()
            ))
        })?;
        let groups: Vec<Vec<String>> = serde_json::from_str(&content)?;
        Ok(Self::from_groups(groups))
    }

    /// Synonyms registered for the given word sequence.
    pub fn get(&self, words: &[&str]) -> Option<&[String]> {
        let key: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        self.entries.get(&key).map(Vec::as_slice)
    }

    /// Length in words of the longest source.
    pub fn max_source_words(&self) -> usize {
        self.max_source_words
    }

    /// Check whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
