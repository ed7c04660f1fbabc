use std::collections::BTreeSet;

use log::debug;

use super::models::Candidate;

/// Outcome of swiping the current card away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckStep {
    /// Index of the candidate now on top.
    Next(usize),
    /// Every candidate has been seen.
    Exhausted,
}

/// The swipe screen: candidates shown one at a time, with the set of favorited ids.
#[derive(Debug, Clone)]
pub struct Deck {
    candidates: Vec<Candidate>,
    position: usize,
    favorites: BTreeSet<String>,
}

impl Deck {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            position: 0,
            favorites: BTreeSet::new(),
        }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn current(&self) -> Option<&Candidate> {
        self.candidates.get(self.position)
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.candidates.len()
    }

    pub fn skip(&mut self) -> DeckStep {
        self.advance()
    }

    /// Records the current candidate as a favorite, then moves on.
    pub fn favorite(&mut self) -> DeckStep {
        if let Some(candidate) = self.candidates.get(self.position) {
            debug!("Favorited {} ({})", candidate.name, candidate.id);
            self.favorites.insert(candidate.id.clone());
        }
        self.advance()
    }

    pub fn is_favorite(&self, candidate_id: &str) -> bool {
        self.favorites.contains(candidate_id)
    }

    pub fn favorites(&self) -> &BTreeSet<String> {
        &self.favorites
    }

    fn advance(&mut self) -> DeckStep {
        if self.position + 1 < self.candidates.len() {
            self.position += 1;
            DeckStep::Next(self.position)
        } else {
            self.position = self.candidates.len();
            DeckStep::Exhausted
        }
    }
}
