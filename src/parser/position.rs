//! Grouping of analyzed tokens into positions.

use crate::analysis::token::Token;

/// The terms an analyzer emitted at one logical position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionSlot {
    alternatives: Vec<String>,
    span: usize,
    position: usize,
}

impl PositionSlot {
    fn open(token: &Token, position: usize) -> Self {
        PositionSlot {
            alternatives: vec![token.text.clone()],
            span: token.position_length.max(1),
            position,
        }
    }

    fn push(&mut self, token: &Token) {
        if !self.alternatives.contains(&token.text) {
            self.alternatives.push(token.text.clone());
        }
        self.span = self.span.max(token.position_length);
    }

    /// Terms at this position in emission order, without duplicates.
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// The longest position length among the slot's tokens.
    pub fn span(&self) -> usize {
        self.span
    }

    /// Logical position, counted from 0 for the first slot.
    ///
    /// Holes before the first slot (a leading stop word) are not counted, so
    /// a phrase always starts at 0.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the slot holds more than one distinct term.
    pub fn has_synonyms(&self) -> bool {
        self.alternatives.len() > 1
    }
}

/// Group tokens into slots.
///
/// A token with a positive increment opens a new slot; an increment of 0
/// stacks it on the current one. The first token always opens slot 0.
pub fn group(tokens: &[Token]) -> Vec<PositionSlot> {
    let mut slots: Vec<PositionSlot> = Vec::new();

    for token in tokens {
        match slots.last_mut() {
            None => slots.push(PositionSlot::open(token, 0)),
            Some(current) if token.is_stacked() => current.push(token),
            Some(current) => {
                let position = current.position + token.position_increment;
                slots.push(PositionSlot::open(token, position));
            }
        }
    }

    slots
}
