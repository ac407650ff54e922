use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::assignment::application::domain::entities::Assignment;
use crate::auth::application::domain::entities::{Role, User, UserId};
use crate::notification::application::domain::entities::{Notification, NotificationKind};
use crate::submission::application::domain::entities::{Submission, SubmissionStatus};

pub fn sample_user(role: Role) -> User {
    let now = Utc::now();
    let id = Uuid::new_v4();
    User {
        id: UserId::from(id),
        name: "Test User".to_string(),
        email: format!("user-{}@example.com", id.simple()),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        role,
        is_active: true,
        last_login: None,
        created_at: now,
        updated_at: now,
    }
}

/// Active assignment due a week from now.
pub fn sample_assignment(created_by: UserId) -> Assignment {
    let now = Utc::now();
    Assignment {
        id: Uuid::new_v4(),
        title: "Essay".to_string(),
        description: "Write 500 words on a topic of your choice".to_string(),
        due_date: now + Duration::days(7),
        instructions: None,
        is_active: true,
        created_by,
        attachments: vec![],
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_submission(assignment_id: Uuid, student_id: UserId) -> Submission {
    let now = Utc::now();
    Submission {
        id: Uuid::new_v4(),
        assignment_id,
        student_id,
        status: SubmissionStatus::Submitted,
        submitted_at: now,
        files: vec![],
        text: Some("My answer".to_string()),
        feedback: None,
        created_at: now,
        updated_at: now,
    }
}

/// Unread system notification created just now.
pub fn sample_notification(user_id: UserId) -> Notification {
    Notification {
        id: Uuid::new_v4(),
        user_id,
        title: "Welcome".to_string(),
        message: "Your account is ready".to_string(),
        kind: NotificationKind::System,
        read: false,
        related_id: None,
        related_type: None,
        created_at: Utc::now(),
    }
}
