use log::{debug, warn};
use uuid::Uuid;

use super::models::{Course, CourseDraft, Semester, SemesterDraft};

/// Session-wide holder of the viewer's semesters.
///
/// The store is created once and handed to whatever needs "my courses"
/// (the availability check on profile cards, the schedule editor, the chat
/// thread when sharing a timetable). Nothing is persisted.
///
/// Mutations never report failures: updating or deleting an unknown course
/// is a silent no-op, and a semester index that does not exist is ignored
/// with a warning in the log.
#[derive(Debug, Clone)]
pub struct ScheduleStore {
    semesters: Vec<Semester>,
    current_semester_index: usize,
    selected_course: Option<String>,
}

impl Default for ScheduleStore {
    fn default() -> Self {
        Self::new(Semester::initial())
    }
}

impl ScheduleStore {
    pub fn new(semesters: Vec<Semester>) -> Self {
        Self {
            semesters,
            current_semester_index: 0,
            selected_course: None,
        }
    }

    pub fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    pub fn current_semester_index(&self) -> usize {
        self.current_semester_index
    }

    pub fn current_semester(&self) -> Option<&Semester> {
        self.semesters.get(self.current_semester_index)
    }

    /// Courses of the current semester, empty if the current index points nowhere.
    pub fn current_courses(&self) -> &[Course] {
        self.current_semester()
            .map(|semester| semester.courses.as_slice())
            .unwrap_or_default()
    }

    pub fn set_semesters(&mut self, semesters: Vec<Semester>) {
        self.semesters = semesters;
    }

    /// Caller is responsible for passing an index that exists.
    pub fn set_current_semester_index(&mut self, index: usize) {
        self.current_semester_index = index;
    }

    pub fn set_selected_course(&mut self, course_id: Option<&str>) {
        self.selected_course = course_id.map(str::to_owned);
    }

    /// The course picked for editing, looked up in the current semester.
    /// Returns `None` once that course has been deleted.
    pub fn selected_course(&self) -> Option<&Course> {
        let course_id = self.selected_course.as_deref()?;
        self.current_semester()?.course(course_id)
    }

    /// Appends a course with a freshly generated id and returns that id.
    /// Overlapping courses are accepted as is.
    pub fn add_course(&mut self, semester_index: usize, draft: CourseDraft) -> Option<String> {
        let semester = self.semester_mut(semester_index)?;
        let id = Uuid::new_v4().to_string();
        debug!("Adding course {} ({}) to {}", draft.name, id, semester.name);
        semester.courses.push(draft.into_course(id.clone()));
        Some(id)
    }

    pub fn update_course(&mut self, semester_index: usize, course_id: &str, draft: CourseDraft) {
        let Some(semester) = self.semester_mut(semester_index) else {
            return;
        };
        if let Some(course) = semester
            .courses
            .iter_mut()
            .find(|course| course.id == course_id)
        {
            debug!("Updating course {}", course_id);
            *course = draft.into_course(course_id);
        }
    }

    pub fn delete_course(&mut self, semester_index: usize, course_id: &str) {
        let Some(semester) = self.semester_mut(semester_index) else {
            return;
        };
        semester.courses.retain(|course| course.id != course_id);
    }

    /// Puts a new semester in front of the list and makes it current.
    pub fn add_semester(&mut self, draft: SemesterDraft) -> String {
        let id = Uuid::new_v4().to_string();
        debug!("Adding semester {} ({})", draft.name, id);
        self.semesters.insert(0, draft.into_semester(id.clone()));
        self.current_semester_index = 0;
        id
    }

    fn semester_mut(&mut self, semester_index: usize) -> Option<&mut Semester> {
        let total = self.semesters.len();
        let semester = self.semesters.get_mut(semester_index);
        if semester.is_none() {
            warn!(
                "Semester index {} is out of range ({} semesters), ignoring",
                semester_index, total
            );
        }
        semester
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
