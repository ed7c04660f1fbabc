use std::{error::Error, fs::File, io::BufReader};

use chrono::{Datelike, Days, NaiveDate};
use figment::{
    providers::{Env, Format, Json},
    Figment,
};
use log::{debug, info};

use crate::{
    coffee_chat::models::{Args, AvailabilitySlot, Candidate, Config},
    schedule::{
        self,
        models::{ClockTime, Semester, Weekday},
    },
};

pub fn log_all_candidates(candidates: &[Candidate]) {
    for candidate in candidates.iter() {
        debug!(
            "Loaded {} ({}, year {}), interested in {:?}",
            candidate.name, candidate.major, candidate.year, candidate.interests
        );
    }
}

pub fn get_candidates(args: &Args) -> Result<Vec<Candidate>, Box<dyn Error>> {
    info!(
        "Reading candidates.json from {}",
        std::path::absolute(&args.candidates_json_path)?.display()
    );
    let candidates_file = BufReader::new(File::open(&args.candidates_json_path)?);
    let candidates: Vec<Candidate> = serde_json::from_reader(candidates_file)?;
    log_all_candidates(&candidates);
    Ok(candidates)
}

/// config.json overlaid with `COFFEECHAT_*` environment variables.
pub fn get_config(args: &Args) -> Result<Config, Box<dyn Error>> {
    let config: Config = Figment::new()
        .merge(Json::file(&args.config_json_path))
        .merge(Env::prefixed("COFFEECHAT_"))
        .extract()?;
    info!(
        "Read config.json from {}",
        std::path::absolute(&args.config_json_path)?.display()
    );
    Ok(config)
}

/// Semesters from the seed file when one is given, the built-in seed otherwise.
pub fn get_semesters(args: &Args) -> Result<Vec<Semester>, Box<dyn Error>> {
    match &args.semesters_json_path {
        Some(path) => schedule::helpers::get_semesters(path),
        None => {
            info!("No semesters file given, starting from the default semesters");
            Ok(Semester::initial())
        }
    }
}

/// The first date on or after `from` that falls on `day`.
pub fn next_date_on(from: NaiveDate, day: Weekday) -> NaiveDate {
    let today = from.weekday().num_days_from_monday();
    let days_ahead = (u32::from(day.index()) + 7 - today) % 7;
    from.checked_add_days(Days::new(u64::from(days_ahead)))
        .unwrap_or(from)
}

/// Earliest listed free slot, in the candidate's own order.
pub fn first_free_slot(overlap: &[AvailabilitySlot]) -> Option<(Weekday, ClockTime)> {
    overlap
        .iter()
        .find_map(|day_slot| day_slot.slots.first().map(|&slot| (day_slot.day, slot)))
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
