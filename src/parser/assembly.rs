//! Boolean assembly of one clause level.
//!
//! Occurs are decided from the modifier, the conjunction and the default
//! operator:
//!
//! | Default | `+a` | `-a` | `a AND b` | `a OR b` | `a b` |
//! |---------|------|------|-----------|----------|-------|
//! | OR      | Must | MustNot | +a +b  | a b      | a b   |
//! | AND     | Must | MustNot | +a +b  | a b      | +a +b |

use crate::parser::ast::{Conjunction, Modifier};
use crate::parser::config::Operator;
use crate::query::{BooleanClause, BooleanQuery, Occur, Query};

/// Collects the clauses of one level into a boolean query.
#[derive(Debug)]
pub struct BooleanAssembler {
    operator: Operator,
    clauses: Vec<BooleanClause>,
    /// Whether the only clause so far was added without a modifier.
    collapsible: bool,
}

impl BooleanAssembler {
    pub fn new(operator: Operator) -> Self {
        BooleanAssembler {
            operator,
            clauses: Vec::new(),
            collapsible: false,
        }
    }

    /// Add a clause introduced by `conjunction` and marked by `modifier`.
    ///
    /// The conjunction may change the occur of the previous clause even
    /// when `query` is `None` and nothing is added.
    pub fn add_clause(&mut self, conjunction: Conjunction, modifier: Modifier, query: Option<Query>) {
        if let Some(last) = self.clauses.last_mut() {
            if !last.is_prohibited() {
                match conjunction {
                    Conjunction::And => last.occur = Occur::Must,
                    Conjunction::Or if self.operator == Operator::And => last.occur = Occur::Should,
                    _ => {}
                }
            }
        }

        let Some(query) = query else { return };

        let prohibited = modifier == Modifier::Prohibited;
        let occur = match self.operator {
            Operator::Or => {
                let required = modifier == Modifier::Required || conjunction == Conjunction::And;
                match (required, prohibited) {
                    (_, true) => Occur::MustNot,
                    (true, false) => Occur::Must,
                    (false, false) => Occur::Should,
                }
            }
            Operator::And => match (prohibited, conjunction) {
                (true, _) => Occur::MustNot,
                (false, Conjunction::Or) => Occur::Should,
                (false, _) => Occur::Must,
            },
        };

        self.push(BooleanClause::new(query, occur), modifier == Modifier::None);
    }

    /// Add the query compiled from a run of stitched words.
    ///
    /// A boolean of plain terms is flattened with its own occurs; any other
    /// boolean is flattened with the default operator's occur; anything else
    /// is one clause with the default operator's occur.
    pub fn add_multi_term_clauses(&mut self, query: Option<Query>) {
        let occur = self.operator.occur();

        match query {
            None => {}
            Some(Query::Boolean(boolean)) => {
                let only_terms = boolean
                    .clauses()
                    .iter()
                    .all(|clause| matches!(clause.query, Query::Term(_)));
                for clause in boolean.into_clauses() {
                    let clause = if only_terms {
                        clause
                    } else {
                        BooleanClause::new(clause.query, occur)
                    };
                    self.push(clause, true);
                }
            }
            Some(query) => self.push(BooleanClause::new(query, occur), true),
        }
    }

    fn push(&mut self, clause: BooleanClause, unmodified: bool) {
        self.collapsible = self.clauses.is_empty() && unmodified;
        self.clauses.push(clause);
    }

    /// Number of clauses collected so far.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Finish the level.
    ///
    /// No clauses gives `None`; a single unmodified clause collapses to its
    /// query; otherwise a boolean query.
    pub fn finish(self) -> Option<Query> {
        match self.clauses.len() {
            0 => None,
            1 if self.collapsible => self.clauses.into_iter().next().map(|c| c.query),
            _ => Some(BooleanQuery::from_clauses(self.clauses).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{SynonymQuery, TermQuery};

    fn term(text: &str) -> Option<Query> {
        Some(TermQuery::new("field", text).into())
    }

    fn render(query: Option<Query>) -> String {
        query.map(|q| q.to_string_with_field("field")).unwrap_or_default()
    }

    #[test]
    fn test_default_or() {
        let mut assembler = BooleanAssembler::new(Operator::Or);
        assembler.add_clause(Conjunction::None, Modifier::None, term("a"));
        assembler.add_clause(Conjunction::None, Modifier::Required, term("b"));
        assembler.add_clause(Conjunction::None, Modifier::Prohibited, term("c"));
        assembler.add_clause(Conjunction::None, Modifier::None, term("d"));

        assert_eq!(render(assembler.finish()), "a +b -c d");
    }

    #[test]
    fn test_and_conjunction_upgrades_previous() {
        let mut assembler = BooleanAssembler::new(Operator::Or);
        assembler.add_clause(Conjunction::None, Modifier::None, term("a"));
        assembler.add_clause(Conjunction::And, Modifier::None, term("b"));
        assembler.add_clause(Conjunction::None, Modifier::None, term("c"));

        assert_eq!(render(assembler.finish()), "+a +b c");
    }

    #[test]
    fn test_and_conjunction_keeps_prohibited() {
        let mut assembler = BooleanAssembler::new(Operator::Or);
        assembler.add_clause(Conjunction::None, Modifier::Prohibited, term("a"));
        assembler.add_clause(Conjunction::And, Modifier::None, term("b"));

        assert_eq!(render(assembler.finish()), "-a +b");
    }

    #[test]
    fn test_default_and() {
        let mut assembler = BooleanAssembler::new(Operator::And);
        assembler.add_clause(Conjunction::None, Modifier::None, term("a"));
        assembler.add_clause(Conjunction::None, Modifier::None, term("b"));
        assembler.add_clause(Conjunction::Or, Modifier::None, term("c"));
        assembler.add_clause(Conjunction::None, Modifier::Prohibited, term("d"));

        assert_eq!(render(assembler.finish()), "+a b c -d");
    }

    #[test]
    fn test_conjunction_applies_when_query_is_none() {
        let mut assembler = BooleanAssembler::new(Operator::Or);
        assembler.add_clause(Conjunction::None, Modifier::None, term("a"));
        assembler.add_clause(Conjunction::None, Modifier::None, term("b"));
        assembler.add_clause(Conjunction::And, Modifier::None, None);

        assert_eq!(assembler.len(), 2);
        assert_eq!(render(assembler.finish()), "a +b");
    }

    #[test]
    fn test_collapse() {
        let mut assembler = BooleanAssembler::new(Operator::Or);
        assembler.add_clause(Conjunction::None, Modifier::None, term("a"));
        assert_eq!(assembler.finish(), term("a"));

        let mut assembler = BooleanAssembler::new(Operator::Or);
        assembler.add_clause(Conjunction::None, Modifier::Required, term("a"));
        let query = assembler.finish().unwrap();
        assert!(query.as_boolean().is_some());
        assert_eq!(query.to_string_with_field("field"), "+a");

        assert_eq!(BooleanAssembler::new(Operator::Or).finish(), None);
    }

    #[test]
    fn test_multi_term_clauses() {
        let boolean: Query = BooleanQuery::from_clauses(vec![
            BooleanClause::should(SynonymQuery::new("field", ["cavy", "guinea"]).into()),
            BooleanClause::should(TermQuery::new("field", "pig").into()),
        ])
        .into();

        let mut assembler = BooleanAssembler::new(Operator::And);
        assembler.add_multi_term_clauses(Some(boolean));
        assert_eq!(
            render(assembler.finish()),
            "+Synonym(cavy guinea) +pig"
        );

        let terms: Query = BooleanQuery::from_clauses(vec![
            BooleanClause::should(TermQuery::new("field", "a").into()),
            BooleanClause::should(TermQuery::new("field", "b").into()),
        ])
        .into();
        let mut assembler = BooleanAssembler::new(Operator::And);
        assembler.add_multi_term_clauses(Some(terms));
        assert_eq!(render(assembler.finish()), "a b");
    }

    #[test]
    fn test_single_multi_term_collapses() {
        let mut assembler = BooleanAssembler::new(Operator::Or);
        assembler.add_multi_term_clauses(Some(SynonymQuery::new("field", ["cavy"]).into()));

        assert!(matches!(assembler.finish(), Some(Query::Synonym(_))));
    }
}
