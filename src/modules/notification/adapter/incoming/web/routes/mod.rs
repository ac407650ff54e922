mod delete_notification;
mod list_notifications;
mod mark_all_notifications_read;
mod mark_notification_read;

pub use delete_notification::delete_notification_handler;
pub use list_notifications::list_notifications_handler;
pub use mark_all_notifications_read::mark_all_notifications_read_handler;
pub use mark_notification_read::mark_notification_read_handler;
