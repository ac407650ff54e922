use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// Something other users should hear about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityEvent {
    /// Fans out to every active student.
    AssignmentPublished {
        assignment_id: Uuid,
        title: String,
        due_date: DateTime<Utc>,
    },
    /// Goes to the teacher who owns the assignment.
    SubmissionReceived {
        submission_id: Uuid,
        assignment_title: String,
        teacher_id: UserId,
        student_id: UserId,
        late: bool,
    },
}

/// Best effort: failures are logged and never reach the caller.
#[async_trait]
pub trait NotifyActivityUseCase: Send + Sync {
    async fn notify(&self, event: ActivityEvent);
}
