pub mod notification_query;
pub mod notification_repository;

pub use notification_query::{NotificationQuery, NotificationQueryError};
pub use notification_repository::{NotificationRepository, NotificationRepositoryError};
