mod change_password;
mod fetch_current_user;
mod login_user;
mod register_user;

pub use change_password::{
    __path_change_password_handler, change_password_handler, ChangePasswordRequest,
};
pub use fetch_current_user::{__path_get_current_user_handler, get_current_user_handler};
pub use login_user::{
    __path_login_user_handler, login_user_handler, AuthSessionResponse, LoginRequestDto,
};
pub use register_user::{__path_register_user_handler, register_user_handler, RegisterUserRequest};
