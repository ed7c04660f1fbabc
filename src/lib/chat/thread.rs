use chrono::{DateTime, TimeZone, Timelike, Utc};
use log::{debug, error};
use uuid::Uuid;

use crate::schedule::{helpers::render_timetable, store::ScheduleStore};

use super::models::{ChatError, ChatMessage, ChatRoom, MessageKind};

/// Conversation with one other student. Messages live only as long as the thread.
#[derive(Debug, Clone)]
pub struct ChatThread {
    room: ChatRoom,
    viewer_id: String,
    messages: Vec<ChatMessage>,
}

impl ChatThread {
    pub fn new(room: ChatRoom, viewer_id: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            room,
            viewer_id: viewer_id.into(),
            messages,
        }
    }

    pub fn room(&self) -> &ChatRoom {
        &self.room
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether the message was written by the viewer (drawn on the right).
    pub fn is_own(&self, message: &ChatMessage) -> bool {
        message.sender_id == self.viewer_id
    }

    /// Blank input is ignored and yields `None`.
    pub fn send_text(&mut self, input: &str) -> Option<&ChatMessage> {
        if input.trim().is_empty() {
            return None;
        }
        let sender_id = self.viewer_id.clone();
        Some(self.push(sender_id, input.to_owned(), MessageKind::Text))
    }

    pub fn send_image(&mut self, image_url: impl Into<String>) -> &ChatMessage {
        let sender_id = self.viewer_id.clone();
        self.push(
            sender_id,
            "이미지를 보냈습니다".to_owned(),
            MessageKind::Image {
                image_url: image_url.into(),
            },
        )
    }

    /// Sends the current semester's timetable. Fails without touching the
    /// thread when there is no current semester or it has no courses.
    pub fn share_schedule(&mut self, store: &ScheduleStore) -> Result<&ChatMessage, ChatError> {
        let courses = store.current_courses();
        if courses.is_empty() {
            error!(
                "Could not share schedule in {}: {}",
                self.room.id,
                ChatError::EmptySchedule
            );
            return Err(ChatError::EmptySchedule);
        }
        let schedule = render_timetable(courses);
        let sender_id = self.viewer_id.clone();
        Ok(self.push(
            sender_id,
            "시간표를 보냈습니다".to_owned(),
            MessageKind::Schedule { schedule },
        ))
    }

    /// Message from the other side of the conversation.
    pub fn receive(&mut self, content: impl Into<String>) -> &ChatMessage {
        let sender_id = self.room.user_id.clone();
        self.push(sender_id, content.into(), MessageKind::Text)
    }

    fn push(&mut self, sender_id: String, content: String, kind: MessageKind) -> &ChatMessage {
        let message = ChatMessage {
            id: Uuid::new_v4().to_string(),
            sender_id,
            content,
            timestamp: Utc::now(),
            kind,
        };
        debug!("New message {} in room {}", message.id, self.room.id);
        self.room.last_message = message.content.clone();
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }
}

/// Bubble timestamp in the Korean 12-hour style, e.g. `오후 2:05`, read on the viewer's clock.
pub fn format_message_time<Tz: TimeZone>(timestamp: &DateTime<Utc>, zone: &Tz) -> String {
    let local = timestamp.with_timezone(zone);
    let (is_pm, hour) = local.hour12();
    format!(
        "{} {}:{:02}",
        if is_pm { "오후" } else { "오전" },
        hour,
        local.minute()
    )
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
