pub mod availability;
pub mod candidate_source;
pub mod deck;
pub mod helpers;
pub mod models;
pub mod proposal_sender;
pub mod run_tool;
pub mod search;
