use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assignment::application::domain::entities::DueWindow;
use crate::auth::application::domain::entities::{Role, User, UserProfile};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total: u64,
    pub students: u64,
    pub teachers: u64,
    pub admins: u64,
    pub active: u64,
    /// Registered in the last 7 days.
    pub recent: u64,
    pub active_last_30_days: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentStats {
    pub total: u64,
    /// Not deleted and not yet due.
    pub active: u64,
    /// Not deleted and past due.
    pub overdue: u64,
    pub recent: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionStats {
    pub total: u64,
    pub late: u64,
    pub recent: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationStats {
    pub total: u64,
    pub unread: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStats {
    pub users: UserStats,
    pub assignments: AssignmentStats,
    pub submissions: SubmissionStats,
    pub notifications: NotificationStats,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserActivityCounts {
    pub assignments: u64,
    pub submissions: u64,
}

/// A user as seen from the admin console.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetail {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub assignments_count: u64,
    pub submissions_count: u64,
}

impl UserDetail {
    pub fn new(user: User, counts: UserActivityCounts) -> Self {
        Self {
            profile: user.into(),
            assignments_count: counts.assignments,
            submissions_count: counts.submissions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityUser {
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub user: ActivityUser,
}

impl From<User> for ActivityEntry {
    fn from(user: User) -> Self {
        let last_active = user
            .last_login
            .map(|at| at.to_rfc3339())
            .unwrap_or_else(|| "Never".to_string());

        Self {
            kind: "user_activity",
            message: format!("{} ({}) last active: {}", user.name, user.role, last_active),
            timestamp: user.last_login.unwrap_or(user.created_at),
            user: ActivityUser {
                name: user.name,
                email: user.email,
                role: user.role,
            },
        }
    }
}

/// `status` filter on the admin assignment listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminAssignmentStatus {
    /// Includes soft-deleted assignments.
    #[default]
    All,
    Active,
    Overdue,
}

impl AdminAssignmentStatus {
    pub fn due_window(self) -> Option<DueWindow> {
        match self {
            AdminAssignmentStatus::All => None,
            AdminAssignmentStatus::Active => Some(DueWindow::Active),
            AdminAssignmentStatus::Overdue => Some(DueWindow::Overdue),
        }
    }

    pub fn includes_inactive(self) -> bool {
        matches!(self, AdminAssignmentStatus::All)
    }
}
