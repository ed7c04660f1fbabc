use std::collections::BTreeSet;

use chrono::NaiveDate;
use futures::future;
use log::{error, info};

use crate::schedule::store::ScheduleStore;

use super::{
    availability::{format_overlap, free_overlap},
    candidate_source::{CandidateSource, CandidateSourceError},
    deck::{Deck, DeckStep},
    helpers::{first_free_slot, next_date_on},
    models::{Config, Proposal},
    proposal_sender::ProposalSender,
};

/// What a pass over today's recommendations ended up doing.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub reviewed: usize,
    pub favorites: BTreeSet<String>,
    pub sent: Vec<Proposal>,
    pub failed: Vec<Proposal>,
}

/// Walks the recommended candidates once. Candidates sharing free time with the
/// viewer's current semester are favorited and invited for their first free slot,
/// counting from `today`; the rest are skipped.
pub async fn run<CS: CandidateSource, PS: ProposalSender>(
    candidate_source: CS,
    proposal_sender: PS,
    store: &ScheduleStore,
    config: &Config,
    today: NaiveDate,
) -> Result<RunSummary, CandidateSourceError> {
    let candidates = candidate_source.fetch_candidates().await?;
    let courses = store.current_courses();
    info!(
        "{} has {} course(s) this semester, reviewing {} candidates",
        config.viewer_name,
        courses.len(),
        candidates.len()
    );

    let mut deck = Deck::new(candidates);
    let mut summary = RunSummary::default();
    let mut proposals = Vec::new();

    while let Some(candidate) = deck.current() {
        summary.reviewed += 1;
        let overlap = free_overlap(courses, &candidate.availability);
        info!("{}: {}", candidate.name, format_overlap(&overlap));

        let step = match first_free_slot(&overlap) {
            Some((day, time)) => {
                proposals.push(Proposal {
                    recipient_id: candidate.id.clone(),
                    date: next_date_on(today, day),
                    time,
                    location: config.default_meeting_location.clone(),
                    message: config.proposal_message.clone(),
                });
                deck.favorite()
            }
            None => deck.skip(),
        };
        if step == DeckStep::Exhausted {
            break;
        }
    }
    summary.favorites = deck.favorites().clone();

    /* proposals go out together, completion order is not significant */
    let results =
        future::join_all(proposals.iter().map(|p| proposal_sender.send_proposal(p))).await;
    for (proposal, result) in proposals.into_iter().zip(results) {
        match result {
            Ok(()) => summary.sent.push(proposal),
            Err(err) => {
                error!("Proposal to {} failed: {}", proposal.recipient_id, err);
                summary.failed.push(proposal);
            }
        }
    }
    info!(
        "Reviewed {} candidates, sent {} proposal(s), {} failed",
        summary.reviewed,
        summary.sent.len(),
        summary.failed.len()
    );

    Ok(summary)
}
