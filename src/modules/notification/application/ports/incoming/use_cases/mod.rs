mod delete_notification;
mod list_notifications;
mod mark_all_notifications_read;
mod mark_notification_read;
mod notify_activity;

pub use delete_notification::{DeleteNotificationError, DeleteNotificationUseCase};
pub use list_notifications::{ListNotificationsError, ListNotificationsUseCase, NotificationFeed};
pub use mark_all_notifications_read::{
    MarkAllNotificationsReadError, MarkAllNotificationsReadUseCase,
};
pub use mark_notification_read::{MarkNotificationReadError, MarkNotificationReadUseCase};
pub use notify_activity::{ActivityEvent, NotifyActivityUseCase};
