//! Phrase queries for matching terms at relative positions.

use serde::{Deserialize, Serialize};

use crate::query::field_prefix;

/// A query matching a sequence of terms at given relative positions.
///
/// Positions may have gaps, e.g. where a stop word was removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseQuery {
    field: String,
    terms: Vec<String>,
    positions: Vec<usize>,
    slop: u32,
}

impl PhraseQuery {
    /// Create a phrase query with consecutive positions.
    pub fn new<S: Into<String>>(field: S, terms: Vec<String>) -> Self {
        let positions = (0..terms.len()).collect();
        PhraseQuery {
            field: field.into(),
            terms,
            positions,
            slop: 0,
        }
    }

    /// Create an empty phrase query to be filled with [`add`](Self::add).
    pub fn builder<S: Into<String>>(field: S) -> Self {
        PhraseQuery {
            field: field.into(),
            terms: Vec::new(),
            positions: Vec::new(),
            slop: 0,
        }
    }

    /// Add a term at an explicit position.
    pub fn add<S: Into<String>>(mut self, term: S, position: usize) -> Self {
        self.terms.push(term.into());
        self.positions.push(position);
        self
    }

    /// Set the slop (maximum edit distance between positions).
    pub fn with_slop(mut self, slop: u32) -> Self {
        self.slop = slop;
        self
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the terms.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Get the term positions.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Get the slop.
    pub fn slop(&self) -> u32 {
        self.slop
    }

    /// Render as `field:"a b"~slop`; missing positions print as `?`.
    pub fn to_string_with_field(&self, default_field: &str) -> String {
        let max_position = self.positions.iter().copied().max();
        let mut pieces: Vec<Option<String>> = vec![None; max_position.map_or(0, |p| p + 1)];
        for (term, &position) in self.terms.iter().zip(&self.positions) {
            let piece = &mut pieces[position];
            *piece = Some(match piece.take() {
                Some(existing) => format!("{existing}|{term}"),
                None => term.clone(),
            });
        }

        let body: Vec<String> = pieces
            .into_iter()
            .map(|piece| piece.unwrap_or_else(|| "?".to_string()))
            .collect();

        let mut out = format!("{}\"{}\"", field_prefix(&self.field, default_field), body.join(" "));
        if self.slop != 0 {
            out.push_str(&format!("~{}", self.slop));
        }
        out
    }
}

/// A phrase query where some positions accept several alternative terms.
///
/// Equality compares each position's alternatives in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiPhraseQuery {
    field: String,
    term_arrays: Vec<Vec<String>>,
    positions: Vec<usize>,
    slop: u32,
}

impl MultiPhraseQuery {
    /// Create an empty multi-phrase query.
    pub fn new<S: Into<String>>(field: S) -> Self {
        MultiPhraseQuery {
            field: field.into(),
            term_arrays: Vec::new(),
            positions: Vec::new(),
            slop: 0,
        }
    }

    /// Add alternatives at the position after the last one added.
    pub fn add_terms<I, T>(self, terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let position = self.positions.last().map_or(0, |p| p + 1);
        self.add_terms_at(terms, position)
    }

    /// Add alternatives at an explicit position.
    pub fn add_terms_at<I, T>(mut self, terms: I, position: usize) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.term_arrays
            .push(terms.into_iter().map(Into::into).collect());
        self.positions.push(position);
        self
    }

    /// Set the slop.
    pub fn with_slop(mut self, slop: u32) -> Self {
        self.slop = slop;
        self
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the alternatives per position.
    pub fn term_arrays(&self) -> &[Vec<String>] {
        &self.term_arrays
    }

    /// Get the positions.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Get the slop.
    pub fn slop(&self) -> u32 {
        self.slop
    }

    /// Render as `field:"(a b) c"~slop`.
    pub fn to_string_with_field(&self, default_field: &str) -> String {
        let mut out = format!("{}\"", field_prefix(&self.field, default_field));
        let mut last_position: Option<usize> = None;

        for (terms, &position) in self.term_arrays.iter().zip(&self.positions) {
            if let Some(last) = last_position {
                out.push(' ');
                for _ in 1..position.saturating_sub(last) {
                    out.push_str("? ");
                }
            }
            if terms.len() > 1 {
                out.push_str(&format!("({})", terms.join(" ")));
            } else if let Some(term) = terms.first() {
                out.push_str(term);
            }
            last_position = Some(position);
        }

        out.push('"');
        if self.slop != 0 {
            out.push_str(&format!("~{}", self.slop));
        }
        out
    }
}
