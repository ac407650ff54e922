use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::ports::outgoing::UserQuery;
use crate::notification::application::domain::entities::{
    NewNotification, NotificationKind, RelatedType,
};
use crate::notification::application::ports::incoming::use_cases::{
    ActivityEvent, NotifyActivityUseCase,
};
use crate::notification::application::ports::outgoing::NotificationRepository;

pub struct NotifyActivityService {
    repository: Arc<dyn NotificationRepository>,
    users: Arc<dyn UserQuery>,
}

impl NotifyActivityService {
    pub fn new(repository: Arc<dyn NotificationRepository>, users: Arc<dyn UserQuery>) -> Self {
        Self { repository, users }
    }

    async fn build_batch(&self, event: &ActivityEvent) -> Result<Vec<NewNotification>, String> {
        match event {
            ActivityEvent::AssignmentPublished {
                assignment_id,
                title,
                due_date,
            } => {
                let students = self
                    .users
                    .active_student_ids()
                    .await
                    .map_err(|e| e.to_string())?;

                let message = format!(
                    "New assignment \"{}\" is due {}",
                    title,
                    due_date.format("%Y-%m-%d %H:%M UTC")
                );

                Ok(students
                    .into_iter()
                    .map(|student| {
                        NewNotification::new(
                            student,
                            &format!("New assignment: {}", title),
                            message.clone(),
                            NotificationKind::Assignment,
                        )
                        .related_to(*assignment_id, RelatedType::Assignment)
                    })
                    .collect())
            }

            ActivityEvent::SubmissionReceived {
                submission_id,
                assignment_title,
                teacher_id,
                late,
                ..
            } => {
                let message = if *late {
                    format!("A late submission was received for \"{}\"", assignment_title)
                } else {
                    format!("A submission was received for \"{}\"", assignment_title)
                };

                Ok(vec![NewNotification::new(
                    *teacher_id,
                    "New submission",
                    message,
                    NotificationKind::System,
                )
                .related_to(*submission_id, RelatedType::Submission)])
            }
        }
    }
}

#[async_trait]
impl NotifyActivityUseCase for NotifyActivityService {
    async fn notify(&self, event: ActivityEvent) {
        let batch = match self.build_batch(&event).await {
            Ok(batch) => batch,
            Err(e) => {
                warn!(error = %e, ?event, "Could not resolve notification recipients");
                return;
            }
        };

        if batch.is_empty() {
            return;
        }

        match self.repository.create_many(batch).await {
            Ok(written) => info!(written, "Notifications created"),
            Err(e) => warn!(error = %e, ?event, "Failed to store notifications"),
        }
    }
}
