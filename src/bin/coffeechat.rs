use coffeechat::coffee_chat::helpers;
use coffeechat::coffee_chat::models;

use std::{error::Error, time::Duration};

use clap::Parser;
use coffeechat::coffee_chat::{
    candidate_source::MockCandidates, proposal_sender::LoggingProposalSender, run_tool::run,
};
use coffeechat::schedule::store::ScheduleStore;
use helpers::{get_candidates, get_config, get_semesters};
use log::info;
use models::Args;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    /* Setup logging */
    env_logger::builder()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .init();

    /* Get all the required resources */
    let args = Args::parse();
    let config = get_config(&args)?;
    let store = ScheduleStore::new(get_semesters(&args)?);
    let latency = Duration::from_millis(config.simulated_latency_ms);
    let candidate_source = MockCandidates::new(get_candidates(&args)?, latency);
    let proposal_sender = LoggingProposalSender::new(latency);

    /* Go through today's recommendations */
    let today = chrono::Local::now().date_naive();
    let summary = run(candidate_source, proposal_sender, &store, &config, today).await?;
    info!(
        "Favorited {:?}, {} proposal(s) sent",
        summary.favorites,
        summary.sent.len()
    );

    Ok(())
}
