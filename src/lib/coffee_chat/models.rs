use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::schedule::models::{ClockTime, Weekday};

/// Declared free time of a candidate on one day.
/// Every start time stands for a one-hour window.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AvailabilitySlot {
    pub day: Weekday,
    pub slots: Vec<ClockTime>,
}

/// A model for describing other students shown on profile cards.
/// Consists of:
/// 1. Identity: id, name, optional student id
/// 2. Study info: major, department, year of study
/// 3. Self-description: bio, interest tags, profile image reference
/// 4. Weekly availability, in the order the candidate listed it
/// 5. Whether the candidate already sent the viewer a coffee chat request
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub major: String,
    #[serde(default)]
    pub department: String,
    pub year: u8,
    pub bio: String,
    #[serde(default)]
    pub interests: Vec<String>,
    pub profile_image: String,
    #[serde(default)]
    pub availability: Vec<AvailabilitySlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(default)]
    pub has_sent_request: bool,
}

/// A model for describing ARGS of the tool.
/// Consists of:
/// 1. Path to config.json with the viewer and proposal settings.
/// 2. Path to candidates.json, the mock profiles served by the candidate source.
/// 3. Optional path to semesters.json with the viewer's courses. The built-in empty 2024 terms are used without it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_name = "FILE", default_value = "config.json")]
    pub config_json_path: PathBuf,
    #[arg(long, value_name = "FILE", default_value = "candidates.json")]
    pub candidates_json_path: PathBuf,
    #[arg(long, value_name = "FILE")]
    pub semesters_json_path: Option<PathBuf>,
}

fn default_simulated_latency_ms() -> u64 {
    1000
}

/// A model for describing configuration of the tool.
/// Consists of:
/// 1. Viewer's id, used as sender of proposals and chat messages
/// 2. Viewer's display name
/// 3. Delay of the mocked backend calls, 1 second by default
/// 4. Place suggested in generated proposals
/// 5. Optional greeting attached to generated proposals
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub viewer_id: String,
    pub viewer_name: String,
    #[serde(default = "default_simulated_latency_ms")]
    pub simulated_latency_ms: u64,
    pub default_meeting_location: String,
    #[serde(default)]
    pub proposal_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProposalError {
    #[error("proposal field `{0}` must not be empty")]
    MissingField(&'static str),
    #[error("proposal could not be delivered: {0}")]
    Delivery(String),
}

/// Coffee chat invitation as filled in the proposal form.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub recipient_id: String,
    pub date: NaiveDate,
    pub time: ClockTime,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Proposal {
    /// Recipient and location are required, the message is not.
    pub fn validate(&self) -> Result<(), ProposalError> {
        if self.recipient_id.trim().is_empty() {
            return Err(ProposalError::MissingField("recipient_id"));
        }
        if self.location.trim().is_empty() {
            return Err(ProposalError::MissingField("location"));
        }
        Ok(())
    }
}
