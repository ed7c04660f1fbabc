use std::{error::Error, fs::File, io::BufReader, path::Path};

use chrono::{Datelike, Months, NaiveDate};
use log::{debug, error, info};

use crate::schedule::models::{Course, Semester, SemesterDraft, Weekday};

/// First hour row of the weekly timetable.
pub const TIMETABLE_FIRST_HOUR: u8 = 9;
/// Last hour row of the weekly timetable (inclusive).
pub const TIMETABLE_LAST_HOUR: u8 = 22;

const CELL_WIDTH: usize = 12;

pub fn log_all_semesters(semesters: &[Semester]) {
    for semester in semesters.iter() {
        debug!(
            "Semester {} ({}) has {} course(s)",
            semester.name,
            semester.id,
            semester.courses.len()
        );
    }
}

pub fn get_semesters(path: &Path) -> Result<Vec<Semester>, Box<dyn Error>> {
    info!(
        "Reading semesters from {}",
        std::path::absolute(path)?.display()
    );
    let semesters_file = BufReader::new(File::open(path)?);
    let semesters: Vec<Semester> = serde_json::from_reader(semesters_file)?;
    for semester in semesters.iter() {
        if let Err(err) = semester.validate() {
            error!("Rejecting semesters file {}: {}", path.display(), err);
            return Err(err.into());
        }
    }
    log_all_semesters(&semesters);
    Ok(semesters)
}

/// Draft for the "add semester" button: the term that will be running four months from `today`.
/// January to June is the first term, the rest of the year the second.
pub fn upcoming_semester(today: NaiveDate) -> SemesterDraft {
    let target = today.checked_add_months(Months::new(4)).unwrap_or(today);
    let term = if target.month() <= 6 { 1 } else { 2 };
    SemesterDraft::new(format!("{}년 {}학기", target.year(), term))
}

/// Courses that share any part of the `hour:00`-`hour+1:00` cell of `day`.
pub fn courses_at(courses: &[Course], day: Weekday, hour: u8) -> Vec<&Course> {
    let from = u16::from(hour) * 60;
    courses
        .iter()
        .filter(|course| course.occupies(day, from, from + 60))
        .collect()
}

fn fit_cell(text: &str) -> String {
    let text = text.chars().take(CELL_WIDTH).collect::<String>();
    format!("{:<width$}", text, width = CELL_WIDTH)
}

/* the cell a course starts in shows its name, the cells it continues into show a bar */
fn timetable_cell(courses: &[Course], day: Weekday, hour: u8) -> String {
    let in_session = courses_at(courses, day, hour);
    if let Some(starting) = in_session
        .iter()
        .find(|course| course.start_time.hour() == hour)
    {
        fit_cell(&starting.name)
    } else if !in_session.is_empty() {
        fit_cell("|")
    } else {
        fit_cell("")
    }
}

/// Plain-text weekly grid (Monday to Saturday, 9:00 to 22:00) used when a schedule is shared.
pub fn render_timetable(courses: &[Course]) -> String {
    let mut lines = Vec::new();

    let header = Weekday::SCHOOL_DAYS
        .iter()
        .map(|day| fit_cell(day.short_label()))
        .collect::<Vec<_>>()
        .join(" ");
    lines.push(format!("      {}", header).trim_end().to_owned());

    for hour in TIMETABLE_FIRST_HOUR..=TIMETABLE_LAST_HOUR {
        let row = Weekday::SCHOOL_DAYS
            .iter()
            .map(|&day| timetable_cell(courses, day, hour))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("{:02}:00 {}", hour, row).trim_end().to_owned());
    }

    lines.join("\n")
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
