mod auth;

pub use auth::{access_denied_response, AdminUser, AuthenticatedUser};
