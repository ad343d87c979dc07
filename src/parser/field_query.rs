//! Builds the query for one field atom from its analyzed tokens.
//!
//! ```text
//! "dogs"             → dogs                    (one token)
//! "dogs" + synonym   → Synonym(dog dogs)       (one position)
//! "old dogs"         → old dogs                (several positions)
//! "\"old dogs\""     → "old (dog dogs)"        (phrase context)
//! ```

use tracing::trace;

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;
use crate::parser::config::QueryParserConfig;
use crate::parser::position::{self, PositionSlot};
use crate::parser::token_stream::TokenStreamAdapter;
use crate::query::{
    BooleanClause, BooleanQuery, MultiPhraseQuery, PhraseQuery, Query, SynonymQuery, TermQuery,
};

/// Turns analyzed text into term, synonym, phrase or boolean queries.
///
/// A builder borrows the parser's analyzer and configuration for the
/// duration of one compile; query factories receive it to reuse the default
/// construction.
#[derive(Clone, Copy)]
pub struct FieldQueryBuilder<'a> {
    analyzer: &'a dyn Analyzer,
    config: &'a QueryParserConfig,
}

impl<'a> FieldQueryBuilder<'a> {
    pub fn new(analyzer: &'a dyn Analyzer, config: &'a QueryParserConfig) -> Self {
        FieldQueryBuilder { analyzer, config }
    }

    /// The parser's analyzer.
    pub fn analyzer(&self) -> &'a dyn Analyzer {
        self.analyzer
    }

    /// The parser's configuration.
    pub fn config(&self) -> &'a QueryParserConfig {
        self.config
    }

    /// Analyze `text` for `field` and build its query.
    ///
    /// `quoted` marks phrase text. Returns `None` when analysis produced no
    /// tokens.
    pub fn field_query(&self, field: &str, text: &str, quoted: bool) -> Result<Option<Query>> {
        self.field_query_with(self.analyzer, field, text, quoted)
    }

    /// Like [`field_query`](Self::field_query), with a different analyzer.
    pub fn field_query_with(
        &self,
        analyzer: &dyn Analyzer,
        field: &str,
        text: &str,
        quoted: bool,
    ) -> Result<Option<Query>> {
        let tokens = TokenStreamAdapter::new(analyzer).analyze(field, text)?;
        let slots = position::group(&tokens);
        trace!(
            field,
            text,
            tokens = tokens.len(),
            slots = slots.len(),
            "analyzed field text"
        );

        let phrase = quoted || self.config.auto_generate_phrase_queries;
        Ok(self.build(field, &slots, phrase))
    }

    /// Build the minimal query for already grouped slots.
    pub fn build(&self, field: &str, slots: &[PositionSlot], phrase: bool) -> Option<Query> {
        match slots {
            [] => None,
            [slot] if !slot.has_synonyms() => {
                Some(TermQuery::new(field, slot.alternatives()[0].as_str()).into())
            }
            [slot] => Some(SynonymQuery::new(field, slot.alternatives().iter()).into()),
            _ if phrase => Some(self.phrase_query(field, slots)),
            _ => {
                let occur = self.config.default_operator.occur();
                let clauses = slots
                    .iter()
                    .map(|slot| BooleanClause::new(slot_query(field, slot), occur))
                    .collect();
                Some(BooleanQuery::from_clauses(clauses).into())
            }
        }
    }

    fn phrase_query(&self, field: &str, slots: &[PositionSlot]) -> Query {
        let slop = self.config.phrase_slop;

        if slots.iter().any(PositionSlot::has_synonyms) {
            slots
                .iter()
                .fold(MultiPhraseQuery::new(field), |query, slot| {
                    query.add_terms_at(slot.alternatives().iter(), slot.position())
                })
                .with_slop(slop)
                .into()
        } else {
            slots
                .iter()
                .fold(PhraseQuery::builder(field), |query, slot| {
                    query.add(slot.alternatives()[0].as_str(), slot.position())
                })
                .with_slop(slop)
                .into()
        }
    }

    /// Normalize a term that is not tokenized with the field's analyzer.
    pub fn normalize(&self, field: &str, text: &str) -> Result<String> {
        TokenStreamAdapter::new(self.analyzer).normalize(field, text)
    }
}

fn slot_query(field: &str, slot: &PositionSlot) -> Query {
    if slot.has_synonyms() {
        SynonymQuery::new(field, slot.alternatives().iter()).into()
    } else {
        TermQuery::new(field, slot.alternatives()[0].as_str()).into()
    }
}

/// Apply an explicit `~N` to a phrase or multi-phrase; other queries are
/// returned unchanged.
pub fn apply_slop(query: Query, slop: u32) -> Query {
    match query {
        Query::Phrase(phrase) => phrase.with_slop(slop).into(),
        Query::MultiPhrase(phrase) => phrase.with_slop(slop).into(),
        other => other,
    }
}
