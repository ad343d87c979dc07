//! Raw parse tree consumed by the query compiler.
//!
//! The tree records what the user wrote, before any analysis: clauses with
//! their conjunction and modifier, nested groups, and field atoms with an
//! optional field qualifier and boost. A front end other than
//! [`syntax`](super::syntax) can build it directly.

use serde::{Deserialize, Serialize};

/// A sequence of clauses at one grouping level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryTree {
    pub clauses: Vec<Clause>,
}

impl QueryTree {
    /// Create a tree from clauses.
    pub fn new(clauses: Vec<Clause>) -> Self {
        QueryTree { clauses }
    }

    /// Check if the tree has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

/// The explicit operator that introduced a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Conjunction {
    /// No operator; the clauses were just adjacent.
    #[default]
    None,
    /// `AND` or `&&`.
    And,
    /// `OR` or `||`.
    Or,
}

/// The modifier written in front of a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Modifier {
    #[default]
    None,
    /// `+`
    Required,
    /// `-`, `!` or `NOT`
    Prohibited,
}

/// One clause of a level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    pub conjunction: Conjunction,
    pub modifier: Modifier,
    pub node: Node,
}

impl Clause {
    /// Create an unmodified clause with no conjunction.
    pub fn new(node: Node) -> Self {
        Clause {
            conjunction: Conjunction::None,
            modifier: Modifier::None,
            node,
        }
    }

    /// Set the conjunction.
    pub fn with_conjunction(mut self, conjunction: Conjunction) -> Self {
        self.conjunction = conjunction;
        self
    }

    /// Set the modifier.
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = modifier;
        self
    }

    /// The text of a plain word: an unqualified, unboosted term.
    ///
    /// Modifiers and conjunctions are checked by the caller.
    pub fn plain_word(&self) -> Option<&str> {
        match &self.node {
            Node::Atom(FieldAtom {
                field: None,
                boost: None,
                kind: AtomKind::Term(text),
            }) => Some(text),
            _ => None,
        }
    }

    /// Whether the clause begins with a bare `*`, as in `*:foo` or `*`.
    pub fn starts_with_star(&self) -> bool {
        match &self.node {
            Node::Atom(atom) => match atom.field.as_deref() {
                Some("*") => true,
                Some(_) => false,
                None => matches!(&atom.kind, AtomKind::Wildcard(p) if p == "*"),
            },
            Node::Group(group) => group.field.as_deref() == Some("*"),
        }
    }
}

/// A clause body: an atom or a parenthesized group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Atom(FieldAtom),
    Group(Group),
}

/// A parenthesized group, optionally qualified (`field:(a b)`) and boosted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub field: Option<String>,
    pub tree: QueryTree,
    pub boost: Option<f32>,
}

/// A single unit of query text before analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldAtom {
    /// Explicit field qualifier.
    pub field: Option<String>,
    pub kind: AtomKind,
    /// Boost from `^N`.
    pub boost: Option<f32>,
}

impl FieldAtom {
    /// Create an unqualified atom without boost.
    pub fn new(kind: AtomKind) -> Self {
        FieldAtom {
            field: None,
            kind,
            boost: None,
        }
    }

    /// Create an unqualified term atom.
    pub fn term<S: Into<String>>(text: S) -> Self {
        Self::new(AtomKind::Term(text.into()))
    }

    /// Set the field qualifier.
    pub fn with_field<S: Into<String>>(mut self, field: S) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Set the boost.
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = Some(boost);
        self
    }
}

/// The kinds of field atoms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AtomKind {
    /// A word, escapes already removed.
    Term(String),
    /// A lone `+`, `-` or `!` followed by whitespace, searched as a word.
    BareOperator(String),
    /// Quoted text with an optional `~N` slop.
    Phrase { text: String, slop: Option<u32> },
    /// `[a TO b]` or `{a TO b}`; `None` is an open bound.
    Range {
        lower: Option<String>,
        upper: Option<String>,
        include_lower: bool,
        include_upper: bool,
    },
    /// A pattern containing `*` or `?`, escapes kept.
    Wildcard(String),
    /// A word with one trailing `*`, stored without it.
    Prefix(String),
    /// `term~` or `term~N`.
    Fuzzy { term: String, similarity: Option<f32> },
    /// `/regexp/`, stored without the slashes.
    Regexp(String),
}
