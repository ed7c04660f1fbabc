//! Free-time overlap between a candidate's declared availability and the viewer's courses.
use crate::{
    coffee_chat::models::AvailabilitySlot,
    schedule::models::{ClockTime, Course},
};

/// Length of one declared availability slot.
pub const SLOT_MINUTES: u16 = 60;

pub const NO_OVERLAP_MESSAGE: &str = "no overlapping free time";

/// Whether the one-hour slot starting at `slot_start` intersects the course interval.
/// Both intervals are half-open, so touching ends do not overlap.
pub fn is_time_overlapping(
    course_start: ClockTime,
    course_end: ClockTime,
    slot_start: ClockTime,
) -> bool {
    let slot_start = slot_start.minutes();
    let slot_end = slot_start + SLOT_MINUTES;
    !(slot_end <= course_start.minutes() || slot_start >= course_end.minutes())
}

/// Keeps the candidate's slots that clash with none of the viewer's courses on the same day.
/// Days left without slots are dropped; ordering follows the candidate's list.
pub fn free_overlap(
    viewer_courses: &[Course],
    availability: &[AvailabilitySlot],
) -> Vec<AvailabilitySlot> {
    availability
        .iter()
        .filter_map(|day_slot| {
            let courses_on_day = viewer_courses
                .iter()
                .filter(|course| course.day_of_week == day_slot.day)
                .collect::<Vec<_>>();
            let slots = day_slot
                .slots
                .iter()
                .copied()
                .filter(|&slot| {
                    !courses_on_day.iter().any(|course| {
                        is_time_overlapping(course.start_time, course.end_time, slot)
                    })
                })
                .collect::<Vec<_>>();
            (!slots.is_empty()).then(|| AvailabilitySlot {
                day: day_slot.day,
                slots,
            })
        })
        .collect()
}

/// One line for a profile card, e.g. `Mon 10:00, 16:00 / Wed 13:00`.
pub fn format_overlap(overlap: &[AvailabilitySlot]) -> String {
    if overlap.is_empty() {
        return NO_OVERLAP_MESSAGE.to_owned();
    }
    overlap
        .iter()
        .map(|day_slot| {
            format!(
                "{} {}",
                day_slot.day,
                day_slot
                    .slots
                    .iter()
                    .map(ClockTime::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join(" / ")
}
