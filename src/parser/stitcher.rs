//! Merges runs of plain words so multi-word synonyms can match.
//!
//! With `split_on_whitespace` off, `guinea pig dogs` is analyzed as one text
//! instead of three, letting a `guinea pig => cavy` rule fire:
//!
//! ```text
//! guinea pig +dogs   → Run("guinea pig"), Clause(+dogs)
//! guinea pig AND dogs → Clause(guinea), Clause(pig), Clause(AND dogs)
//! ```
//!
//! A word directly before an `AND`/`OR` or a `*` clause binds to that clause
//! and ends the run.

use crate::parser::ast::{Clause, Conjunction, Modifier};

/// One unit of a clause level after stitching.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'a> {
    /// A clause compiled on its own.
    Clause(&'a Clause),
    /// Two or more plain words analyzed together, joined by spaces.
    Run(String),
}

fn is_bare_word(clause: &Clause) -> Option<&str> {
    if clause.conjunction != Conjunction::None || clause.modifier != Modifier::None {
        return None;
    }
    clause.plain_word()
}

fn binds_forward(next: Option<&Clause>) -> bool {
    next.is_some_and(|next| next.conjunction != Conjunction::None || next.starts_with_star())
}

/// Split one level into segments. Nested groups are not visited; the
/// compiler stitches each level as it descends.
pub fn stitch(clauses: &[Clause], split_on_whitespace: bool) -> Vec<Segment<'_>> {
    if split_on_whitespace {
        return clauses.iter().map(Segment::Clause).collect();
    }

    let mut segments = Vec::with_capacity(clauses.len());
    let mut i = 0;

    while i < clauses.len() {
        let Some(head) = is_bare_word(&clauses[i]) else {
            segments.push(Segment::Clause(&clauses[i]));
            i += 1;
            continue;
        };

        let mut words = vec![head];
        let mut end = i + 1;
        while let Some(word) = clauses.get(end).and_then(is_bare_word) {
            if binds_forward(clauses.get(end + 1)) {
                break;
            }
            words.push(word);
            end += 1;
        }

        if words.len() > 1 {
            segments.push(Segment::Run(words.join(" ")));
            i = end;
        } else {
            segments.push(Segment::Clause(&clauses[i]));
            i += 1;
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::syntax::parse_query;

    fn shape(input: &str) -> Vec<String> {
        let tree = parse_query(input).unwrap();
        stitch(&tree.clauses, false)
            .into_iter()
            .map(|segment| match segment {
                Segment::Clause(clause) => format!("clause:{:?}", clause.plain_word()),
                Segment::Run(text) => format!("run:{text}"),
            })
            .collect()
    }

    #[test]
    fn test_run_of_plain_words() {
        assert_eq!(shape("guinea pig dogs"), vec!["run:guinea pig dogs"]);
    }

    #[test]
    fn test_modifier_breaks_run() {
        assert_eq!(
            shape("guinea pig +dogs"),
            vec!["run:guinea pig", "clause:None"]
        );
        assert_eq!(
            shape("+guinea pig dogs"),
            vec!["clause:None", "run:pig dogs"]
        );
    }

    #[test]
    fn test_word_before_conjunction_binds_forward() {
        assert_eq!(
            shape("guinea pig AND dogs"),
            vec!["clause:Some(\"guinea\")", "clause:Some(\"pig\")", "clause:Some(\"dogs\")"]
        );
        assert_eq!(
            shape("dogs guinea pig OR cats"),
            vec![
                "run:dogs guinea",
                "clause:Some(\"pig\")",
                "clause:Some(\"cats\")"
            ]
        );
    }

    #[test]
    fn test_star_clause_ends_run() {
        assert_eq!(
            shape("guinea pig *:*"),
            vec!["clause:Some(\"guinea\")", "clause:Some(\"pig\")", "clause:None"]
        );
    }

    #[test]
    fn test_non_plain_atoms_break_run() {
        assert_eq!(
            shape("guinea pig* dogs^2 field:cats \"a b\""),
            vec![
                "clause:Some(\"guinea\")",
                "clause:None",
                "clause:None",
                "clause:None",
                "clause:None"
            ]
        );
    }

    #[test]
    fn test_split_on_whitespace_keeps_clauses() {
        let tree = parse_query("guinea pig dogs").unwrap();
        let segments = stitch(&tree.clauses, true);

        assert_eq!(segments.len(), 3);
        assert!(segments.iter().all(|s| matches!(s, Segment::Clause(_))));
    }
}
