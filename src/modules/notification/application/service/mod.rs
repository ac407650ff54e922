pub mod delete_notification_service;
pub mod list_notifications_service;
pub mod mark_all_notifications_read_service;
pub mod mark_notification_read_service;
pub mod notify_activity_service;

pub use delete_notification_service::DeleteNotificationService;
pub use list_notifications_service::ListNotificationsService;
pub use mark_all_notifications_read_service::MarkAllNotificationsReadService;
pub use mark_notification_read_service::MarkNotificationReadService;
pub use notify_activity_service::NotifyActivityService;
