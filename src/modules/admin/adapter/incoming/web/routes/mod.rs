mod content_oversight;
mod manage_users;
mod system_overview;

pub use content_oversight::{admin_assignments_handler, admin_submissions_handler};
pub use manage_users::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_role_handler, update_user_status_handler,
};
pub use system_overview::{admin_health_handler, activity_log_handler, system_stats_handler};
