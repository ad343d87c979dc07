//! Synonym graph filter with multi-word synonym support.
//!
//! Synonyms are stacked on the first token of their source with a position
//! increment of 0. A synonym for a multi-word source gets a position length
//! equal to the number of source words, so downstream consumers can tell it
//! spans several positions.

use std::sync::Arc;

use crate::analysis::synonym::SynonymMap;
use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::error::Result;

use super::Filter;

/// Synonym graph filter driven by a [`SynonymMap`].
#[derive(Debug, Clone)]
pub struct SynonymGraphFilter {
    synonyms: Arc<SynonymMap>,
    keep_original: bool,
}

impl SynonymGraphFilter {
    /// Create a new synonym graph filter.
    ///
    /// # Arguments
    /// * `synonyms` - The synonym map to use
    /// * `keep_original` - If true, keep original tokens alongside synonyms
    pub fn new(synonyms: SynonymMap, keep_original: bool) -> Self {
        Self {
            synonyms: Arc::new(synonyms),
            keep_original,
        }
    }

    /// Longest source starting at `start`: (word count, synonyms).
    fn longest_match<'a>(&'a self, tokens: &[Token], start: usize) -> Option<(usize, &'a [String])> {
        let limit = self.synonyms.max_source_words().min(tokens.len() - start);
        (1..=limit).rev().find_map(|len| {
            let window = &tokens[start..start + len];
            // Stacked or stopped tokens break a word sequence.
            if window.iter().any(Token::is_stopped) || window.iter().skip(1).any(Token::is_stacked) {
                return None;
            }
            let words: Vec<&str> = window.iter().map(|t| t.text.as_str()).collect();
            self.synonyms.get(&words).map(|found| (len, found))
        })
    }

    fn synonym_token(source: &[Token], text: &str, increment: usize) -> Token {
        let first = &source[0];
        let last = &source[source.len() - 1];
        Token::new(text, first.position)
            .with_offsets(first.start_offset, last.end_offset)
            .with_position_increment(increment)
            .with_position_length(source.len())
            .with_token_type(TokenType::Synonym)
    }
}

impl Filter for SynonymGraphFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let input: Vec<Token> = tokens.collect();
        let mut output = Vec::with_capacity(input.len());
        let mut i = 0;

        while i < input.len() {
            let Some((len, synonyms)) = self.longest_match(&input, i) else {
                output.push(input[i].clone());
                i += 1;
                continue;
            };

            let source = &input[i..i + len];
            if self.keep_original {
                output.push(input[i].clone());
                output.extend(synonyms.iter().map(|s| Self::synonym_token(source, s, 0)));
                i += 1;
            } else {
                let increment = input[i].position_increment;
                output.extend(synonyms.iter().enumerate().map(|(n, s)| {
                    Self::synonym_token(source, s, if n == 0 { increment } else { 0 })
                }));
                i += len;
            }
        }

        Ok(Box::new(output.into_iter()))
    }

    fn name(&self) -> &'static str {
        "synonym_graph"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> TokenStream {
        let tokens: Vec<Token> = text
            .split_whitespace()
            .enumerate()
            .map(|(i, w)| Token::new(w, i))
            .collect();
        Box::new(tokens.into_iter())
    }

    fn mock_map() -> SynonymMap {
        let mut map = SynonymMap::new();
        map.add_mapping("dogs", ["dog"]);
        map.add_mapping("guinea pig", ["cavy"]);
        map
    }

    #[test]
    fn test_single_word_synonym() {
        let filter = SynonymGraphFilter::new(mock_map(), true);
        let result: Vec<Token> = filter.filter(words("old dogs")).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[1].text, "dogs");
        assert_eq!(result[2].text, "dog");
        assert_eq!(result[2].position_increment, 0);
        assert_eq!(result[2].position_length, 1);
    }

    #[test]
    fn test_multi_word_synonym_spans_source() {
        let filter = SynonymGraphFilter::new(mock_map(), true);
        let result: Vec<Token> = filter.filter(words("guinea pig")).unwrap().collect();

        let texts: Vec<&str> = result.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["guinea", "cavy", "pig"]);
        assert_eq!(result[1].position_increment, 0);
        assert_eq!(result[1].position_length, 2);
        assert_eq!(result[2].position_increment, 1);
    }

    #[test]
    fn test_multi_word_source_split_by_query_does_not_match() {
        let filter = SynonymGraphFilter::new(mock_map(), true);
        let result: Vec<Token> = filter.filter(words("guinea")).unwrap().collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "guinea");
    }

    #[test]
    fn test_replace_original() {
        let filter = SynonymGraphFilter::new(mock_map(), false);
        let result: Vec<Token> = filter.filter(words("small guinea pig")).unwrap().collect();

        let texts: Vec<&str> = result.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["small", "cavy"]);
        assert_eq!(result[1].position_increment, 1);
        assert_eq!(result[1].position_length, 2);
    }

    #[test]
    fn test_stopped_token_breaks_source() {
        let filter = SynonymGraphFilter::new(mock_map(), true);
        let tokens = vec![Token::new("guinea", 0), Token::new("pig", 1).stop()];
        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert!(result[1].is_stopped());
    }
}
