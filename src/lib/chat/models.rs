use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entry of the chat list.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatRoom {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub profile_image: String,
    pub last_message: String,
    pub timestamp: String,
    #[serde(default)]
    pub unread: u32,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageKind {
    Text,
    Image {
        #[serde(rename = "imageUrl")]
        image_url: String,
    },
    /// A shared timetable, already rendered.
    Schedule {
        #[serde(rename = "scheduleImage")]
        schedule: String,
    },
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub sender_id: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: MessageKind,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("the current semester has no courses to share")]
    EmptySchedule,
}
