use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

pub const TITLE_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Assignment,
    Deadline,
    #[default]
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelatedType {
    Assignment,
    Submission,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub user_id: UserId,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_type: Option<RelatedType>,
    pub created_at: DateTime<Utc>,
}

/// A notification about to be stored for one recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotification {
    pub user_id: UserId,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub related: Option<(Uuid, RelatedType)>,
}

impl NewNotification {
    /// Titles longer than the column allows are cut at a char boundary.
    pub fn new(user_id: UserId, title: &str, message: String, kind: NotificationKind) -> Self {
        Self {
            user_id,
            title: title.trim().chars().take(TITLE_MAX_CHARS).collect(),
            message: message.trim().to_string(),
            kind,
            related: None,
        }
    }

    pub fn related_to(mut self, id: Uuid, related_type: RelatedType) -> Self {
        self.related = Some((id, related_type));
        self
    }
}

/// Notification as returned to its recipient, with a relative age label.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationView {
    #[serde(flatten)]
    pub notification: Notification,
    pub time_ago: String,
}

impl NotificationView {
    pub fn new(notification: Notification, now: DateTime<Utc>) -> Self {
        let time_ago = time_ago(notification.created_at, now);
        Self {
            notification,
            time_ago,
        }
    }
}

/// "Just now", "5m ago", "3h ago", "2d ago".
pub fn time_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - created_at).num_seconds().max(0);

    match seconds {
        s if s < 60 => "Just now".to_string(),
        s if s < 3_600 => format!("{}m ago", s / 60),
        s if s < 86_400 => format!("{}h ago", s / 3_600),
        s => format!("{}d ago", s / 86_400),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn time_ago_buckets() {
        let now = Utc::now();
        assert_eq!(time_ago(now - Duration::seconds(5), now), "Just now");
        assert_eq!(time_ago(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(time_ago(now - Duration::hours(3), now), "3h ago");
        assert_eq!(time_ago(now - Duration::days(2), now), "2d ago");
    }

    #[test]
    fn time_ago_clamps_future_timestamps() {
        let now = Utc::now();
        assert_eq!(time_ago(now + Duration::minutes(10), now), "Just now");
    }

    #[test]
    fn long_titles_are_truncated() {
        let title = "é".repeat(150);
        let n = NewNotification::new(
            UserId::from(Uuid::new_v4()),
            &title,
            "body".to_string(),
            NotificationKind::Assignment,
        );
        assert_eq!(n.title.chars().count(), TITLE_MAX_CHARS);
    }

    #[test]
    fn view_serializes_kind_as_type() {
        let now = Utc::now();
        let view = NotificationView::new(
            Notification {
                id: Uuid::new_v4(),
                user_id: UserId::from(Uuid::new_v4()),
                title: "New Assignment".to_string(),
                message: "Essay due soon".to_string(),
                kind: NotificationKind::Deadline,
                read: false,
                related_id: None,
                related_type: None,
                created_at: now,
            },
            now,
        );

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["type"], "deadline");
        assert_eq!(json["timeAgo"], "Just now");
        assert!(json.get("relatedId").is_none());
    }
}
