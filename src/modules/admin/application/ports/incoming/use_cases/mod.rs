mod content_oversight;
mod manage_users;
mod system_overview;

pub use content_oversight::{AdminAssignmentQuery, ContentOversightError, ContentOversightUseCase};
pub use manage_users::{ManageUsersError, ManageUsersUseCase};
pub use system_overview::{SystemOverviewError, SystemOverviewUseCase};
