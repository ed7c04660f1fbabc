//! Notification feed behind the bell icon.
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    CoffeeChatRequest,
    CoffeeChatAccepted,
    NewMessage,
    NewFavorite,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_read: bool,
    /// The other student this notification is about.
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationFeed {
    notifications: Vec<Notification>,
}

impl NotificationFeed {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    /// Adds an unread notification stamped now and returns its id.
    pub fn push(
        &mut self,
        kind: NotificationKind,
        user_id: impl Into<String>,
        message: impl Into<String>,
    ) -> String {
        let id = Uuid::new_v4().to_string();
        debug!("New {:?} notification {}", kind, id);
        self.notifications.push(Notification {
            id: id.clone(),
            kind,
            message: message.into(),
            timestamp: Utc::now(),
            is_read: false,
            user_id: user_id.into(),
            profile_image: None,
        });
        id
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    /// Unknown ids are ignored.
    pub fn mark_read(&mut self, notification_id: &str) {
        if let Some(notification) = self
            .notifications
            .iter_mut()
            .find(|n| n.id == notification_id)
        {
            notification.is_read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        for notification in self.notifications.iter_mut() {
            notification.is_read = true;
        }
    }

    pub fn newest_first(&self) -> Vec<&Notification> {
        let mut sorted = self.notifications.iter().collect::<Vec<_>>();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn notification(id: &str, kind: NotificationKind, minutes_ago: i64) -> Notification {
        let now = Utc.with_ymd_and_hms(2024, 9, 2, 12, 0, 0).unwrap();
        Notification {
            id: id.to_owned(),
            kind,
            message: format!("notification {id}"),
            timestamp: now - Duration::minutes(minutes_ago),
            is_read: false,
            user_id: "1".to_owned(),
            profile_image: None,
        }
    }

    fn feed() -> NotificationFeed {
        NotificationFeed::new(vec![
            notification("a", NotificationKind::CoffeeChatRequest, 30),
            notification("b", NotificationKind::NewMessage, 5),
            notification("c", NotificationKind::NewFavorite, 120),
        ])
    }

    #[test]
    fn mark_read_and_unread_count() {
        let mut feed = feed();
        assert_eq!(feed.unread_count(), 3);
        feed.mark_read("b");
        assert_eq!(feed.unread_count(), 2);
        feed.mark_read("b");
        feed.mark_read("missing");
        assert_eq!(feed.unread_count(), 2);
        feed.mark_all_read();
        assert_eq!(feed.unread_count(), 0);
    }

    #[test]
    fn newest_first_orders_by_timestamp() {
        let feed = feed();
        let ids = feed
            .newest_first()
            .iter()
            .map(|n| n.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn push_adds_unread() {
        let mut feed = NotificationFeed::default();
        let id = feed.push(
            NotificationKind::CoffeeChatAccepted,
            "2",
            "이지원님이 커피챗을 수락했어요",
        );
        assert_eq!(feed.unread_count(), 1);
        assert_eq!(feed.newest_first()[0].id, id);
    }

    #[test]
    fn kind_serializes_as_snake_case_type() {
        let json = serde_json::to_value(notification("a", NotificationKind::CoffeeChatAccepted, 0))
            .unwrap();
        assert_eq!(json["type"], "coffee_chat_accepted");
        assert_eq!(json["isRead"], false);
    }
}
