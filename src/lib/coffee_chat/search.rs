use std::collections::BTreeSet;

use super::models::Candidate;

/// Interest chips selected on the search screen.
#[derive(Debug, Clone, Default)]
pub struct InterestFilter {
    selected: BTreeSet<String>,
}

impl InterestFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the interest, or deselects it when it was already selected.
    pub fn toggle(&mut self, interest: &str) {
        if !self.selected.remove(interest) {
            self.selected.insert(interest.to_owned());
        }
    }

    pub fn is_selected(&self, interest: &str) -> bool {
        self.selected.contains(interest)
    }

    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    /// Everyone when nothing is selected, otherwise candidates sharing at least one selected interest.
    pub fn filter<'a>(&self, candidates: &'a [Candidate]) -> Vec<&'a Candidate> {
        candidates
            .iter()
            .filter(|candidate| {
                self.selected.is_empty()
                    || candidate
                        .interests
                        .iter()
                        .any(|interest| self.selected.contains(interest))
            })
            .collect()
    }
}

/// All interest tags present among the candidates, sorted.
pub fn all_interests(candidates: &[Candidate]) -> BTreeSet<&str> {
    candidates
        .iter()
        .flat_map(|candidate| candidate.interests.iter().map(String::as_str))
        .collect()
}

/// Candidates whose coffee chat request to the viewer is waiting for an answer.
pub fn pending_requests(candidates: &[Candidate]) -> Vec<&Candidate> {
    candidates
        .iter()
        .filter(|candidate| candidate.has_sent_request)
        .collect()
}
