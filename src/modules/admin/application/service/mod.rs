mod content_oversight_service;
mod manage_users_service;
mod system_overview_service;

pub use content_oversight_service::ContentOversightService;
pub use manage_users_service::ManageUsersService;
pub use system_overview_service::{SystemOverviewService, ACTIVITY_LOG_LIMIT};
