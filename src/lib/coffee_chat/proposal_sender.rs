use std::time::Duration;

use log::info;

use super::models::{Proposal, ProposalError};

/// A trait, necessary for every entity that will deliver coffee chat proposals.
#[allow(async_fn_in_trait)]
pub trait ProposalSender {
    async fn send_proposal(&self, proposal: &Proposal) -> Result<(), ProposalError>;
}

/// Accepts every valid proposal after an artificial delay and only records it in the log.
pub struct LoggingProposalSender {
    latency: Duration,
}

impl LoggingProposalSender {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl ProposalSender for LoggingProposalSender {
    async fn send_proposal(&self, proposal: &Proposal) -> Result<(), ProposalError> {
        proposal.validate()?;
        tokio::time::sleep(self.latency).await;
        info!(
            "Proposed coffee chat to {} on {} at {} in {}",
            proposal.recipient_id, proposal.date, proposal.time, proposal.location
        );
        Ok(())
    }
}
