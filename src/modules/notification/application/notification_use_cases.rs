use std::sync::Arc;

use crate::notification::application::ports::incoming::use_cases::{
    DeleteNotificationUseCase, ListNotificationsUseCase, MarkAllNotificationsReadUseCase,
    MarkNotificationReadUseCase,
};

#[derive(Clone)]
pub struct NotificationUseCases {
    pub list: Arc<dyn ListNotificationsUseCase + Send + Sync>,
    pub mark_read: Arc<dyn MarkNotificationReadUseCase + Send + Sync>,
    pub mark_all_read: Arc<dyn MarkAllNotificationsReadUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteNotificationUseCase + Send + Sync>,
}
