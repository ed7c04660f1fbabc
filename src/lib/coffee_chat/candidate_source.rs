use std::time::Duration;

use log::{debug, info};

use super::models::Candidate;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CandidateSourceError {
    #[error("candidate source unavailable: {0}")]
    Unavailable(String),
}

/// A trait, necessary for every entity that will supply recommended candidates.
#[allow(async_fn_in_trait)]
pub trait CandidateSource {
    async fn fetch_candidates(&self) -> Result<Vec<Candidate>, CandidateSourceError>;
}

/// Serves a fixed list of candidates after an artificial delay, standing in for a backend call.
pub struct MockCandidates {
    candidates: Vec<Candidate>,
    latency: Duration,
}

impl MockCandidates {
    pub fn new(candidates: Vec<Candidate>, latency: Duration) -> Self {
        Self {
            candidates,
            latency,
        }
    }
}

impl CandidateSource for MockCandidates {
    async fn fetch_candidates(&self) -> Result<Vec<Candidate>, CandidateSourceError> {
        debug!("Simulating candidate fetch with {:?} latency", self.latency);
        tokio::time::sleep(self.latency).await;
        info!("Fetched {} candidates", self.candidates.len());
        Ok(self.candidates.clone())
    }
}
