pub mod change_password;
pub mod fetch_current_user;
pub mod login_user;
pub mod register_user;

use serde::Serialize;

use crate::auth::application::domain::entities::UserProfile;

/// Returned by registration and login.
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    pub token: String,
    pub user: UserProfile,
}
