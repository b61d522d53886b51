//! In-memory study session state.
//!
//! A session is built from one selected batch and never grows. Its target is
//! the batch length; each Know/Unsure on a batch word resolves that word once,
//! and the session completes when every word is resolved. Nothing here is
//! persisted.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{Result, SessionError};
use crate::transition::{self, Action};
use crate::types::Word;

/// Batch size used when the requested size is not a positive integer.
pub const DEFAULT_BATCH_SIZE: usize = 20;

/// Coerce free-text batch size input.
///
/// Non-numeric, zero and negative inputs all fall back to [`DEFAULT_BATCH_SIZE`].
pub fn batch_size(input: &str) -> usize {
    match input.trim().parse::<i64>() {
        Ok(n) if n > 0 => usize::try_from(n).unwrap_or(DEFAULT_BATCH_SIZE),
        _ => DEFAULT_BATCH_SIZE,
    }
}

/// One card of the batch with its presentational reveal flag.
#[derive(Debug, Clone, Serialize)]
pub struct StudyCard {
    pub word: Word,
    pub revealed: bool,
    pub resolved: bool,
}

/// Outcome of resolving a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub resolved: usize,
    pub target: usize,
    pub complete: bool,
}

#[derive(Debug, Clone)]
pub struct StudySession {
    cards: Vec<StudyCard>,
    resolved: HashSet<i64>,
}

impl StudySession {
    /// Start a session over a selected batch.
    ///
    /// An empty batch means there is nothing to study and no session is created.
    pub fn new(batch: Vec<Word>) -> Result<Self> {
        if batch.is_empty() {
            return Err(SessionError::NothingToStudy);
        }

        let cards = batch
            .into_iter()
            .map(|word| StudyCard {
                word,
                revealed: false,
                resolved: false,
            })
            .collect();

        Ok(Self {
            cards,
            resolved: HashSet::new(),
        })
    }

    /// Number of words that must be resolved to finish.
    pub fn target(&self) -> usize {
        self.cards.len()
    }

    pub fn resolved(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_complete(&self) -> bool {
        self.resolved.len() >= self.cards.len()
    }

    /// 1-based position of the card being studied, capped at the target.
    pub fn position(&self) -> usize {
        (self.resolved.len() + 1).min(self.target())
    }

    pub fn cards(&self) -> &[StudyCard] {
        &self.cards
    }

    /// Cards still waiting for Know/Unsure, in batch order.
    pub fn remaining(&self) -> impl Iterator<Item = &StudyCard> {
        self.cards.iter().filter(|card| !card.resolved)
    }

    /// Check that `action` may resolve `word_id` without changing anything.
    ///
    /// Callers persist the status change between `check` and [`Self::resolve`]
    /// so a failed write never advances the session.
    pub fn check(&self, word_id: i64, action: Action) -> Result<()> {
        if !action.resolves() {
            return Err(SessionError::NotResolving(action));
        }
        if self.is_complete() {
            return Err(SessionError::Complete);
        }
        if !self.cards.iter().any(|card| card.word.id == word_id) {
            return Err(SessionError::UnknownWord(word_id));
        }
        if self.resolved.contains(&word_id) {
            return Err(SessionError::AlreadyResolved(word_id));
        }
        Ok(())
    }

    /// Count `word_id` as resolved by `action`.
    pub fn resolve(&mut self, word_id: i64, action: Action) -> Result<Resolution> {
        self.check(word_id, action)?;

        self.resolved.insert(word_id);
        if let Some(card) = self.cards.iter_mut().find(|card| card.word.id == word_id) {
            card.resolved = true;
            card.word.status = transition::apply(card.word.status, action);
        }

        Ok(Resolution {
            resolved: self.resolved(),
            target: self.target(),
            complete: self.is_complete(),
        })
    }

    /// Flip whether the translation of a card is shown.
    ///
    /// Returns the new reveal state, or `None` if the word is not in the batch.
    pub fn toggle_reveal(&mut self, word_id: i64) -> Option<bool> {
        let card = self.cards.iter_mut().find(|card| card.word.id == word_id)?;
        card.revealed = !card.revealed;
        Some(card.revealed)
    }
}
