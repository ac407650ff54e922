use std::sync::Arc;

use crate::auth::application::use_cases::{
    change_password::IChangePasswordUseCase, fetch_current_user::IFetchCurrentUserUseCase,
    login_user::ILoginUserUseCase, register_user::IRegisterUserUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub current_user: Arc<dyn IFetchCurrentUserUseCase + Send + Sync>,
    pub change_password: Arc<dyn IChangePasswordUseCase + Send + Sync>,
}
