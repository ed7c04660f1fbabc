//! Module with the viewer's timetable model: weekdays, wall-clock times, courses and semesters.
use std::{collections::HashSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Colors offered by the course form. The first one is used when a draft has none.
pub const COURSE_COLORS: [&str; 8] = [
    "#4F46E5", "#7C3AED", "#EC4899", "#F59E0B", "#10B981", "#3B82F6", "#EF4444", "#8B5CF6",
];

fn default_course_color() -> String {
    COURSE_COLORS[0].to_owned()
}

/// Day of the week, Monday first.
/// Seed data written for the Korean UI uses one-letter labels, so those are accepted too.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    #[serde(rename = "Mon", alias = "월")]
    Monday,
    #[serde(rename = "Tue", alias = "화")]
    Tuesday,
    #[serde(rename = "Wed", alias = "수")]
    Wednesday,
    #[serde(rename = "Thu", alias = "목")]
    Thursday,
    #[serde(rename = "Fri", alias = "금")]
    Friday,
    #[serde(rename = "Sat", alias = "토")]
    Saturday,
    #[serde(rename = "Sun", alias = "일")]
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Days shown on the weekly timetable.
    pub const SCHOOL_DAYS: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn short_label(self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseClockTimeError {
    #[error("expected a HH:MM time, got {0:?}")]
    Format(String),
    #[error("time {0:?} is outside of a day")]
    OutOfRange(String),
}

/// Wall-clock time of day with minute precision, written as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour >= 24 || minute >= 60 {
            return None;
        }
        Some(Self {
            minutes: u16::from(hour) * 60 + u16::from(minute),
        })
    }

    pub fn from_hour(hour: u8) -> Option<Self> {
        Self::new(hour, 0)
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.minutes
    }

    pub fn hour(self) -> u8 {
        (self.minutes / 60) as u8
    }

    pub fn minute(self) -> u8 {
        (self.minutes % 60) as u8
    }
}

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_err = || ParseClockTimeError::Format(s.to_owned());
        let (hour, minute) = s.split_once(':').ok_or_else(format_err)?;
        if hour.is_empty()
            || minute.is_empty()
            || !hour.bytes().all(|b| b.is_ascii_digit())
            || !minute.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(format_err());
        }
        let hour: u8 = hour.parse().map_err(|_| format_err())?;
        let minute: u8 = minute.parse().map_err(|_| format_err())?;
        Self::new(hour, minute).ok_or_else(|| ParseClockTimeError::OutOfRange(s.to_owned()))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ParseClockTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Course data as entered in the course form, before the store gives it an id.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub day_of_week: Weekday,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    #[serde(default = "default_course_color")]
    pub color: String,
}

impl CourseDraft {
    pub fn new(
        name: impl Into<String>,
        day_of_week: Weekday,
        start_time: ClockTime,
        end_time: ClockTime,
    ) -> Self {
        Self {
            name: name.into(),
            professor: None,
            location: None,
            day_of_week,
            start_time,
            end_time,
            color: default_course_color(),
        }
    }

    /// Builds a draft from a whole start hour and a duration in hours,
    /// the shape used by the hour-grid course form.
    /// Returns `None` when the course would run past 23:59.
    pub fn from_hours(
        name: impl Into<String>,
        day_of_week: Weekday,
        start_hour: u8,
        duration_hours: u8,
    ) -> Option<Self> {
        let start_time = ClockTime::from_hour(start_hour)?;
        let end_time = ClockTime::from_hour(start_hour.checked_add(duration_hours)?)?;
        Some(Self::new(name, day_of_week, start_time, end_time))
    }

    pub fn with_professor(mut self, professor: impl Into<String>) -> Self {
        self.professor = Some(professor.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// End strictly after start.
    pub fn is_well_formed(&self) -> bool {
        self.end_time > self.start_time
    }

    pub fn into_course(self, id: impl Into<String>) -> Course {
        Course {
            id: id.into(),
            name: self.name,
            professor: self.professor,
            location: self.location,
            day_of_week: self.day_of_week,
            start_time: self.start_time,
            end_time: self.end_time,
            color: self.color,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub day_of_week: Weekday,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    #[serde(default = "default_course_color")]
    pub color: String,
}

impl Course {
    pub fn to_draft(&self) -> CourseDraft {
        CourseDraft {
            name: self.name.clone(),
            professor: self.professor.clone(),
            location: self.location.clone(),
            day_of_week: self.day_of_week,
            start_time: self.start_time,
            end_time: self.end_time,
            color: self.color.clone(),
        }
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end_time.minutes().saturating_sub(self.start_time.minutes())
    }

    pub fn is_well_formed(&self) -> bool {
        self.end_time > self.start_time
    }

    /// Whether the course shares any minute with `[from, to)` (minutes since midnight) on `day`.
    pub fn occupies(&self, day: Weekday, from: u16, to: u16) -> bool {
        self.day_of_week == day && self.start_time.minutes() < to && self.end_time.minutes() > from
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSemesterError {
    #[error("course {course_id} in semester {semester_id} does not end after it starts")]
    CourseEndsBeforeStart {
        semester_id: String,
        course_id: String,
    },
    #[error("course id {course_id} is used more than once in semester {semester_id}")]
    DuplicateCourseId {
        semester_id: String,
        course_id: String,
    },
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Semester {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl Semester {
    /// Seed used when no semesters file is supplied: the two 2024 terms, both empty.
    pub fn initial() -> Vec<Semester> {
        vec![
            Semester {
                id: "2024-1".to_owned(),
                name: "2024년 1학기".to_owned(),
                courses: Vec::new(),
            },
            Semester {
                id: "2024-2".to_owned(),
                name: "2024년 2학기".to_owned(),
                courses: Vec::new(),
            },
        ]
    }

    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == course_id)
    }

    /// Every course ends after it starts and no course id repeats.
    pub fn validate(&self) -> Result<(), InvalidSemesterError> {
        let mut seen = HashSet::new();
        for course in self.courses.iter() {
            if !course.is_well_formed() {
                return Err(InvalidSemesterError::CourseEndsBeforeStart {
                    semester_id: self.id.clone(),
                    course_id: course.id.clone(),
                });
            }
            if !seen.insert(course.id.as_str()) {
                return Err(InvalidSemesterError::DuplicateCourseId {
                    semester_id: self.id.clone(),
                    course_id: course.id.clone(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SemesterDraft {
    pub name: String,
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl SemesterDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            courses: Vec::new(),
        }
    }

    pub fn into_semester(self, id: impl Into<String>) -> Semester {
        Semester {
            id: id.into(),
            name: self.name,
            courses: self.courses,
        }
    }
}
