//! Query string front end.
//!
//! Turns Lucene-style query syntax into a [`QueryTree`]:
//!
//! - Terms and field qualifiers: `hello`, `title:hello`, `*:*`
//! - Phrases with slop: `"hello world"~2`
//! - Boolean operators: `AND`, `&&`, `OR`, `||`, `NOT`, `!`, `+`, `-`
//! - Grouping: `title:(hello world)^2`
//! - Wildcards, prefixes, fuzzy terms and regular expressions:
//!   `te?t`, `test*`, `roam~1`, `/ro[a-z]m/`
//! - Ranges: `[a TO b]`, `{a TO b}`, `[* TO 10]`
//! - Boosts: `jakarta^4`
//! - Backslash escapes: `a\:b`, `A`
//!
//! No analysis happens here; the tree records what was written.

use crate::error::{Result, SynparseError};
use crate::parser::ast::{AtomKind, Clause, Conjunction, FieldAtom, Group, Modifier, Node, QueryTree};

/// Parse a query string into a raw tree. Blank input yields an empty tree.
pub fn parse_query(input: &str) -> Result<QueryTree> {
    let tokens = Lexer::new(input).tokenize()?;
    if tokens.is_empty() {
        return Ok(QueryTree::default());
    }

    let mut parser = QueryStringParser {
        input,
        tokens,
        pos: 0,
    };
    let tree = parser.parse_level()?;

    match parser.peek() {
        None => Ok(tree),
        Some(tok) => Err(parser.unexpected(tok)),
    }
}

/// Remove backslash escapes, decoding `\uXXXX`.
pub fn discard_escape_chars(text: &str) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let code = (hex.len() == 4)
                    .then(|| u32::from_str_radix(&hex, 16).ok())
                    .flatten()
                    .and_then(char::from_u32)
                    .ok_or_else(|| {
                        SynparseError::syntax(format!("Truncated unicode escape sequence in '{text}'"))
                    })?;
                out.push(code);
            }
            Some(escaped) => out.push(escaped),
            None => {
                return Err(SynparseError::syntax(format!(
                    "Term can not end with escape character: '{text}'"
                )));
            }
        }
    }

    Ok(out)
}

#[derive(Debug, Clone, PartialEq)]
enum Tok {
    And,
    Or,
    Not,
    Plus,
    Minus,
    BareOper(char),
    LParen,
    RParen,
    Colon,
    Star,
    Boost(f32),
    Slop(Option<f32>),
    Quoted(String),
    Term(String),
    Prefix(String),
    Wild(String),
    Regexp(String),
    RangeStart(bool),
    RangeEnd(bool),
    RangeTo,
    RangeGoop(String),
    RangeQuoted(String),
}

impl Tok {
    fn describe(&self) -> String {
        match self {
            Tok::And => "AND".to_string(),
            Tok::Or => "OR".to_string(),
            Tok::Not => "NOT".to_string(),
            Tok::Plus => "'+'".to_string(),
            Tok::Minus => "'-'".to_string(),
            Tok::BareOper(c) => format!("'{c}'"),
            Tok::LParen => "'('".to_string(),
            Tok::RParen => "')'".to_string(),
            Tok::Colon => "':'".to_string(),
            Tok::Star => "'*'".to_string(),
            Tok::Boost(b) => format!("'^{b}'"),
            Tok::Slop(_) => "'~'".to_string(),
            Tok::Quoted(t) => format!("\"{t}\""),
            Tok::Term(t) | Tok::Prefix(t) | Tok::Wild(t) | Tok::RangeGoop(t) => format!("'{t}'"),
            Tok::Regexp(t) => format!("/{t}/"),
            Tok::RangeStart(_) | Tok::RangeEnd(_) => "range bracket".to_string(),
            Tok::RangeTo => "TO".to_string(),
            Tok::RangeQuoted(t) => format!("\"{t}\""),
        }
    }
}

fn is_special(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '!' | '(' | ')' | ':' | '^' | '[' | ']' | '"' | '{' | '}' | '~' | '*' | '?' | '\\' | '/'
    )
}

fn is_term_start(c: char) -> bool {
    !c.is_whitespace() && !is_special(c)
}

fn is_term_char(c: char) -> bool {
    is_term_start(c) || c == '-' || c == '+'
}

struct Lexer<'a> {
    input: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Lexer {
            input,
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn error(&self, msg: &str) -> SynparseError {
        SynparseError::syntax(format!("Cannot parse '{}': {msg}", self.input))
    }

    fn skip_whitespace(&mut self) {
        while self.peek_at(0).is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn tokenize(mut self) -> Result<Vec<Tok>> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();
            let Some(c) = self.peek_at(0) else { break };
            let next = self.peek_at(1);

            let tok = match c {
                '&' if next == Some('&') => {
                    self.pos += 2;
                    Tok::And
                }
                '|' if next == Some('|') => {
                    self.pos += 2;
                    Tok::Or
                }
                '+' | '-' | '!' if next.is_some_and(char::is_whitespace) => {
                    self.pos += 1;
                    Tok::BareOper(c)
                }
                '+' => self.single(Tok::Plus),
                '-' => self.single(Tok::Minus),
                '!' => self.single(Tok::Not),
                '(' => self.single(Tok::LParen),
                ')' => self.single(Tok::RParen),
                ':' => self.single(Tok::Colon),
                '^' => self.lex_boost()?,
                '~' => self.lex_slop(),
                '"' => Tok::Quoted(self.lex_quoted()?),
                '/' => self.lex_regexp()?,
                '[' | '{' => {
                    self.pos += 1;
                    tokens.push(Tok::RangeStart(c == '['));
                    self.lex_range(&mut tokens)?;
                    continue;
                }
                ']' | '}' => return Err(self.error(&format!("unexpected '{c}'"))),
                _ => self.lex_word()?,
            };
            tokens.push(tok);
        }

        Ok(tokens)
    }

    fn single(&mut self, tok: Tok) -> Tok {
        self.pos += 1;
        tok
    }

    fn read_number(&mut self) -> Option<f32> {
        let start = self.pos;
        while self.peek_at(0).is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos == start {
            return None;
        }
        if self.peek_at(0) == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
            while self.peek_at(0).is_some_and(|c| c.is_ascii_digit()) {
                self.pos += 1;
            }
        }
        let text: String = self.chars[start..self.pos].iter().collect();
        text.parse().ok()
    }

    fn lex_boost(&mut self) -> Result<Tok> {
        self.pos += 1;
        self.skip_whitespace();
        self.read_number()
            .map(Tok::Boost)
            .ok_or_else(|| self.error("expected a number after '^'"))
    }

    fn lex_slop(&mut self) -> Tok {
        self.pos += 1;
        Tok::Slop(self.read_number())
    }

    fn lex_quoted(&mut self) -> Result<String> {
        self.pos += 1;
        let mut text = String::new();

        loop {
            match self.peek_at(0) {
                None => return Err(self.error("unterminated quoted text")),
                Some('"') => {
                    self.pos += 1;
                    return Ok(text);
                }
                Some('\\') => {
                    let escaped = self
                        .peek_at(1)
                        .ok_or_else(|| self.error("unterminated quoted text"))?;
                    text.push('\\');
                    text.push(escaped);
                    self.pos += 2;
                }
                Some(c) => {
                    text.push(c);
                    self.pos += 1;
                }
            }
        }
    }

    fn lex_regexp(&mut self) -> Result<Tok> {
        self.pos += 1;
        let mut text = String::new();

        loop {
            match self.peek_at(0) {
                None => return Err(self.error("unterminated regular expression")),
                Some('/') => {
                    self.pos += 1;
                    return Ok(Tok::Regexp(text));
                }
                Some('\\') if self.peek_at(1) == Some('/') => {
                    text.push_str("\\/");
                    self.pos += 2;
                }
                Some(c) => {
                    text.push(c);
                    self.pos += 1;
                }
            }
        }
    }

    fn lex_range(&mut self, tokens: &mut Vec<Tok>) -> Result<()> {
        loop {
            self.skip_whitespace();
            match self.peek_at(0) {
                None => return Err(self.error("unterminated range")),
                Some(c @ (']' | '}')) => {
                    self.pos += 1;
                    tokens.push(Tok::RangeEnd(c == ']'));
                    return Ok(());
                }
                Some('"') => {
                    let text = self.lex_quoted()?;
                    tokens.push(Tok::RangeQuoted(text));
                }
                Some(_) => {
                    let start = self.pos;
                    while self
                        .peek_at(0)
                        .is_some_and(|c| !c.is_whitespace() && c != ']' && c != '}')
                    {
                        self.pos += 1;
                    }
                    let goop: String = self.chars[start..self.pos].iter().collect();
                    tokens.push(if goop == "TO" {
                        Tok::RangeTo
                    } else {
                        Tok::RangeGoop(goop)
                    });
                }
            }
        }
    }

    fn lex_word(&mut self) -> Result<Tok> {
        let mut raw = String::new();
        // Positions (in chars of `raw`) of unescaped wildcards.
        let mut wildcards: Vec<usize> = Vec::new();
        let mut len = 0;

        while let Some(c) = self.peek_at(0) {
            if c == '\\' {
                let escaped = self
                    .peek_at(1)
                    .ok_or_else(|| self.error("term can not end with escape character"))?;
                raw.push('\\');
                raw.push(escaped);
                self.pos += 2;
                len += 2;
            } else if c == '*' || c == '?' {
                wildcards.push(len);
                raw.push(c);
                self.pos += 1;
                len += 1;
            } else if is_term_char(c) && (len > 0 || is_term_start(c)) {
                raw.push(c);
                self.pos += 1;
                len += 1;
            } else {
                break;
            }
        }

        if raw.is_empty() {
            let c = self.peek_at(0).unwrap_or(' ');
            return Err(self.error(&format!("unexpected '{c}'")));
        }

        Ok(match raw.as_str() {
            "*" => Tok::Star,
            "AND" => Tok::And,
            "OR" => Tok::Or,
            "NOT" => Tok::Not,
            _ if wildcards.is_empty() => Tok::Term(raw),
            _ if wildcards == [len - 1] && raw.ends_with('*') && len > 1 => Tok::Prefix(raw),
            _ => Tok::Wild(raw),
        })
    }
}

struct QueryStringParser<'a> {
    input: &'a str,
    tokens: Vec<Tok>,
    pos: usize,
}

impl QueryStringParser<'_> {
    fn peek(&self) -> Option<&Tok> {
        self.tokens.get(self.pos)
    }

    fn peek_at(&self, offset: usize) -> Option<&Tok> {
        self.tokens.get(self.pos + offset)
    }

    fn next(&mut self) -> Option<Tok> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn error(&self, msg: &str) -> SynparseError {
        SynparseError::syntax(format!("Cannot parse '{}': {msg}", self.input))
    }

    fn unexpected(&self, tok: &Tok) -> SynparseError {
        self.error(&format!("encountered unexpected {}", tok.describe()))
    }

    fn expect_more(&self, what: &str) -> SynparseError {
        self.error(&format!("expected {what} but found end of input"))
    }

    fn parse_level(&mut self) -> Result<QueryTree> {
        let mut clauses = Vec::new();

        let modifier = self.parse_modifier();
        let node = self.parse_clause()?;
        clauses.push(Clause::new(node).with_modifier(modifier));

        while !matches!(self.peek(), None | Some(Tok::RParen)) {
            let conjunction = self.parse_conjunction();
            let modifier = self.parse_modifier();
            let node = self.parse_clause()?;
            clauses.push(
                Clause::new(node)
                    .with_conjunction(conjunction)
                    .with_modifier(modifier),
            );
        }

        Ok(QueryTree::new(clauses))
    }

    fn parse_conjunction(&mut self) -> Conjunction {
        match self.peek() {
            Some(Tok::And) => {
                self.pos += 1;
                Conjunction::And
            }
            Some(Tok::Or) => {
                self.pos += 1;
                Conjunction::Or
            }
            _ => Conjunction::None,
        }
    }

    fn parse_modifier(&mut self) -> Modifier {
        match self.peek() {
            Some(Tok::Plus) => {
                self.pos += 1;
                Modifier::Required
            }
            Some(Tok::Minus) | Some(Tok::Not) => {
                self.pos += 1;
                Modifier::Prohibited
            }
            _ => Modifier::None,
        }
    }

    fn parse_clause(&mut self) -> Result<Node> {
        let field = match (self.peek(), self.peek_at(1)) {
            (Some(Tok::Term(raw)), Some(Tok::Colon)) => {
                let field = discard_escape_chars(raw)?;
                self.pos += 2;
                Some(field)
            }
            (Some(Tok::Star), Some(Tok::Colon)) => {
                self.pos += 2;
                Some("*".to_string())
            }
            _ => None,
        };

        if self.peek() == Some(&Tok::LParen) {
            self.pos += 1;
            let tree = self.parse_level()?;
            match self.next() {
                Some(Tok::RParen) => {}
                Some(tok) => return Err(self.unexpected(&tok)),
                None => return Err(self.expect_more("')'")),
            }
            let boost = self.parse_boost();
            return Ok(Node::Group(Group { field, tree, boost }));
        }

        let (kind, boost) = self.parse_term()?;
        Ok(Node::Atom(FieldAtom { field, kind, boost }))
    }

    fn parse_boost(&mut self) -> Option<f32> {
        match self.peek() {
            Some(Tok::Boost(boost)) => {
                let boost = *boost;
                self.pos += 1;
                Some(boost)
            }
            _ => None,
        }
    }

    fn parse_slop(&mut self) -> Option<Option<f32>> {
        match self.peek() {
            Some(Tok::Slop(slop)) => {
                let slop = *slop;
                self.pos += 1;
                Some(slop)
            }
            _ => None,
        }
    }

    /// `^N` and `~N` may follow a term in either order.
    fn parse_boost_and_slop(&mut self) -> (Option<f32>, Option<Option<f32>>) {
        if let Some(boost) = self.parse_boost() {
            (Some(boost), self.parse_slop())
        } else {
            let slop = self.parse_slop();
            (self.parse_boost(), slop)
        }
    }

    fn parse_term(&mut self) -> Result<(AtomKind, Option<f32>)> {
        let tok = self.next().ok_or_else(|| self.expect_more("a term"))?;

        match tok {
            Tok::Term(raw) => {
                let (boost, slop) = self.parse_boost_and_slop();
                let term = discard_escape_chars(&raw)?;
                let kind = match slop {
                    Some(similarity) => AtomKind::Fuzzy { term, similarity },
                    None => AtomKind::Term(term),
                };
                Ok((kind, boost))
            }
            Tok::BareOper(c) => {
                let (boost, _) = self.parse_boost_and_slop();
                Ok((AtomKind::BareOperator(c.to_string()), boost))
            }
            Tok::Star => {
                let (boost, _) = self.parse_boost_and_slop();
                Ok((AtomKind::Wildcard("*".to_string()), boost))
            }
            Tok::Wild(raw) => {
                let (boost, _) = self.parse_boost_and_slop();
                Ok((AtomKind::Wildcard(raw), boost))
            }
            Tok::Prefix(raw) => {
                let (boost, _) = self.parse_boost_and_slop();
                let prefix = discard_escape_chars(&raw[..raw.len() - 1])?;
                Ok((AtomKind::Prefix(prefix), boost))
            }
            Tok::Regexp(raw) => {
                let (boost, _) = self.parse_boost_and_slop();
                Ok((AtomKind::Regexp(raw), boost))
            }
            Tok::Quoted(raw) => {
                let (boost, slop) = self.parse_boost_and_slop();
                let text = discard_escape_chars(&raw)?;
                let slop = slop.flatten().map(|s| s as u32);
                Ok((AtomKind::Phrase { text, slop }, boost))
            }
            Tok::RangeStart(include_lower) => self.parse_range(include_lower),
            other => Err(self.unexpected(&other)),
        }
    }

    fn parse_range_bound(&mut self) -> Result<Option<String>> {
        match self.next() {
            Some(Tok::RangeGoop(goop)) if goop == "*" => Ok(None),
            Some(Tok::RangeGoop(goop)) => discard_escape_chars(&goop).map(Some),
            Some(Tok::RangeQuoted(quoted)) => discard_escape_chars(&quoted).map(Some),
            Some(Tok::RangeTo) => Ok(Some("TO".to_string())),
            Some(tok) => Err(self.unexpected(&tok)),
            None => Err(self.expect_more("a range bound")),
        }
    }

    fn parse_range(&mut self, include_lower: bool) -> Result<(AtomKind, Option<f32>)> {
        let lower = self.parse_range_bound()?;
        match self.next() {
            Some(Tok::RangeTo) => {}
            Some(tok) => return Err(self.unexpected(&tok)),
            None => return Err(self.expect_more("TO")),
        }
        let upper = self.parse_range_bound()?;
        let include_upper = match self.next() {
            Some(Tok::RangeEnd(inclusive)) => inclusive,
            Some(tok) => return Err(self.unexpected(&tok)),
            None => return Err(self.expect_more("']' or '}'")),
        };
        let boost = self.parse_boost();

        Ok((
            AtomKind::Range {
                lower,
                upper,
                include_lower,
                include_upper,
            },
            boost,
        ))
    }
}
