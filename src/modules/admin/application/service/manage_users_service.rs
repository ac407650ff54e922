use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::admin::application::domain::entities::UserDetail;
use crate::admin::application::ports::incoming::use_cases::{
    ManageUsersError, ManageUsersUseCase,
};
use crate::admin::application::ports::outgoing::AdminStatsQuery;
use crate::auth::application::domain::credentials::NewAccount;
use crate::auth::application::domain::entities::{Role, UserId, UserProfile};
use crate::auth::application::domain::policy::{authorize, Action, Caller};
use crate::auth::application::ports::outgoing::{
    NewUser, PasswordHasher, UserListFilter, UserQuery, UserRepository, UserRepositoryError,
};
use crate::shared::pagination::{PageRequest, PageResult};

fn map_repo_err(err: UserRepositoryError) -> ManageUsersError {
    match err {
        UserRepositoryError::UserNotFound => ManageUsersError::UserNotFound,
        UserRepositoryError::UserAlreadyExists => ManageUsersError::EmailAlreadyExists,
        UserRepositoryError::UserHasContent => ManageUsersError::UserHasContent,
        other => ManageUsersError::RepositoryError(other.to_string()),
    }
}

#[derive(Clone)]
pub struct ManageUsersService {
    query: Arc<dyn UserQuery>,
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    stats: Arc<dyn AdminStatsQuery>,
}

impl ManageUsersService {
    pub fn new(
        query: Arc<dyn UserQuery>,
        repository: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        stats: Arc<dyn AdminStatsQuery>,
    ) -> Self {
        Self {
            query,
            repository,
            hasher,
            stats,
        }
    }
}

#[async_trait]
impl ManageUsersUseCase for ManageUsersService {
    async fn list_users(
        &self,
        caller: Caller,
        filter: UserListFilter,
        page: PageRequest,
    ) -> Result<PageResult<UserProfile>, ManageUsersError> {
        authorize(Some(&caller), Action::ManageUsers)?;

        let users = self.query.list(filter, page).await?;
        Ok(users.map(UserProfile::from))
    }

    async fn get_user(
        &self,
        caller: Caller,
        user_id: UserId,
    ) -> Result<UserDetail, ManageUsersError> {
        authorize(Some(&caller), Action::ManageUsers)?;

        let user = self
            .query
            .find_by_id(user_id)
            .await?
            .ok_or(ManageUsersError::UserNotFound)?;

        let counts = self
            .stats
            .user_activity_counts(user_id)
            .await
            .map_err(|e| ManageUsersError::RepositoryError(e.to_string()))?;

        Ok(UserDetail::new(user, counts))
    }

    async fn create_user(
        &self,
        caller: Caller,
        account: NewAccount,
    ) -> Result<UserProfile, ManageUsersError> {
        authorize(Some(&caller), Action::ManageUsers)?;

        if self.query.find_by_email(account.email()).await?.is_some() {
            return Err(ManageUsersError::EmailAlreadyExists);
        }

        let password_hash = self
            .hasher
            .hash_password(account.password())
            .await
            .map_err(|e| ManageUsersError::HashingFailed(e.to_string()))?;

        let user = self
            .repository
            .create_user(NewUser {
                name: account.name().to_string(),
                email: account.email().to_string(),
                password_hash,
                role: account.role(),
            })
            .await
            .map_err(map_repo_err)?;

        info!(admin_id = %caller.user_id, user_id = %user.id, role = %user.role, "User created by admin");
        Ok(user.into())
    }

    async fn set_status(
        &self,
        caller: Caller,
        user_id: UserId,
        is_active: bool,
    ) -> Result<UserProfile, ManageUsersError> {
        authorize(Some(&caller), Action::ManageUsers)?;

        let user = self
            .repository
            .set_active(user_id, is_active)
            .await
            .map_err(map_repo_err)?;

        info!(admin_id = %caller.user_id, %user_id, is_active, "User status changed");
        Ok(user.into())
    }

    async fn set_role(
        &self,
        caller: Caller,
        user_id: UserId,
        role: Role,
    ) -> Result<UserProfile, ManageUsersError> {
        authorize(
            Some(&caller),
            Action::ChangeUserRole {
                target: user_id,
                new_role: role,
            },
        )
        .inspect_err(|denied| warn!(admin_id = %caller.user_id, %denied, "Role change refused"))?;

        let user = self
            .repository
            .set_role(user_id, role)
            .await
            .map_err(map_repo_err)?;

        info!(admin_id = %caller.user_id, %user_id, %role, "User role changed");
        Ok(user.into())
    }

    async fn delete_user(&self, caller: Caller, user_id: UserId) -> Result<(), ManageUsersError> {
        authorize(Some(&caller), Action::DeleteUser { target: user_id })
            .inspect_err(|denied| warn!(admin_id = %caller.user_id, %denied, "User deletion refused"))?;

        let counts = self
            .stats
            .user_activity_counts(user_id)
            .await
            .map_err(|e| ManageUsersError::RepositoryError(e.to_string()))?;

        if counts.assignments > 0 || counts.submissions > 0 {
            warn!(
                admin_id = %caller.user_id,
                %user_id,
                assignments = counts.assignments,
                submissions = counts.submissions,
                "User deletion refused, account owns content"
            );
            return Err(ManageUsersError::UserHasContent);
        }

        self.repository
            .delete_user(user_id)
            .await
            .map_err(map_repo_err)?;

        info!(admin_id = %caller.user_id, %user_id, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::application::domain::entities::UserActivityCounts;
    use crate::auth::application::domain::policy::AccessDenied;
    use crate::auth::application::ports::outgoing::HashError;
    use crate::tests::support::fixtures::sample_user;
    use crate::tests::support::mocks::{
        MockAdminStatsQueryPort, MockPasswordHasherPort, MockUserQueryPort,
        MockUserRepositoryPort,
    };
    use uuid::Uuid;

    struct Ports {
        query: MockUserQueryPort,
        repository: MockUserRepositoryPort,
        hasher: MockPasswordHasherPort,
        stats: MockAdminStatsQueryPort,
    }

    impl Ports {
        fn new() -> Self {
            Self {
                query: MockUserQueryPort::new(),
                repository: MockUserRepositoryPort::new(),
                hasher: MockPasswordHasherPort::new(),
                stats: MockAdminStatsQueryPort::new(),
            }
        }

        fn service(self) -> ManageUsersService {
            ManageUsersService::new(
                Arc::new(self.query),
                Arc::new(self.repository),
                Arc::new(self.hasher),
                Arc::new(self.stats),
            )
        }
    }

    fn admin() -> Caller {
        Caller::new(UserId::from(Uuid::new_v4()), Role::Admin)
    }

    fn account() -> NewAccount {
        NewAccount::new("New Teacher", "teacher@school.test", "secret1".to_string(), Role::Teacher)
            .unwrap()
    }

    #[tokio::test]
    async fn non_admin_cannot_list_users() {
        let service = Ports::new().service();
        let result = service
            .list_users(
                Caller::new(UserId::from(Uuid::new_v4()), Role::Teacher),
                UserListFilter::default(),
                PageRequest::default(),
            )
            .await;

        assert!(matches!(
            result,
            Err(ManageUsersError::Denied(AccessDenied::Forbidden))
        ));
    }

    #[tokio::test]
    async fn get_user_includes_activity_counts() {
        let user = sample_user(Role::Teacher);
        let user_id = user.id;

        let mut ports = Ports::new();
        ports
            .query
            .expect_find_by_id()
            .returning(move |_| Ok(Some(user.clone())));
        ports
            .stats
            .expect_user_activity_counts()
            .withf(move |id| *id == user_id)
            .returning(|_| {
                Ok(UserActivityCounts {
                    assignments: 4,
                    submissions: 0,
                })
            });

        let detail = ports.service().get_user(admin(), user_id).await.unwrap();
        assert_eq!(detail.profile.id, user_id.value());
        assert_eq!(detail.assignments_count, 4);
    }

    #[tokio::test]
    async fn get_missing_user_is_not_found() {
        let mut ports = Ports::new();
        ports.query.expect_find_by_id().returning(|_| Ok(None));
        ports.stats.expect_user_activity_counts().never();

        let result = ports
            .service()
            .get_user(admin(), UserId::from(Uuid::new_v4()))
            .await;
        assert!(matches!(result, Err(ManageUsersError::UserNotFound)));
    }

    #[tokio::test]
    async fn create_user_hashes_password_and_keeps_role() {
        let mut ports = Ports::new();
        ports.query.expect_find_by_email().returning(|_| Ok(None));
        ports
            .hasher
            .expect_hash_password()
            .returning(|_| Ok("argon2-hash".to_string()));
        ports
            .repository
            .expect_create_user()
            .withf(|u| {
                u.password_hash == "argon2-hash"
                    && u.role == Role::Teacher
                    && u.email == "teacher@school.test"
            })
            .times(1)
            .returning(|u| {
                let mut user = sample_user(u.role);
                user.email = u.email;
                Ok(user)
            });

        let profile = ports.service().create_user(admin(), account()).await.unwrap();
        assert_eq!(profile.role, Role::Teacher);
        assert_eq!(profile.email, "teacher@school.test");
    }

    #[tokio::test]
    async fn create_user_with_taken_email_conflicts() {
        let mut ports = Ports::new();
        ports
            .query
            .expect_find_by_email()
            .returning(|_| Ok(Some(sample_user(Role::Student))));
        ports.repository.expect_create_user().never();

        let result = ports.service().create_user(admin(), account()).await;
        assert!(matches!(result, Err(ManageUsersError::EmailAlreadyExists)));
    }

    #[tokio::test]
    async fn create_user_reports_hash_failure() {
        let mut ports = Ports::new();
        ports.query.expect_find_by_email().returning(|_| Ok(None));
        ports
            .hasher
            .expect_hash_password()
            .returning(|_| Err(HashError::HashFailed));

        let result = ports.service().create_user(admin(), account()).await;
        assert!(matches!(result, Err(ManageUsersError::HashingFailed(_))));
    }

    #[tokio::test]
    async fn admin_cannot_demote_self() {
        let caller = admin();
        let mut ports = Ports::new();
        ports.repository.expect_set_role().never();

        let result = ports
            .service()
            .set_role(caller, caller.user_id, Role::Student)
            .await;
        assert!(matches!(
            result,
            Err(ManageUsersError::Denied(AccessDenied::SelfProtection))
        ));
    }

    #[tokio::test]
    async fn set_role_on_other_user() {
        let mut ports = Ports::new();
        ports
            .repository
            .expect_set_role()
            .times(1)
            .returning(|_, role| Ok(sample_user(role)));

        let profile = ports
            .service()
            .set_role(admin(), UserId::from(Uuid::new_v4()), Role::Teacher)
            .await
            .unwrap();
        assert_eq!(profile.role, Role::Teacher);
    }

    #[tokio::test]
    async fn set_status_on_missing_user_is_not_found() {
        let mut ports = Ports::new();
        ports
            .repository
            .expect_set_active()
            .returning(|_, _| Err(UserRepositoryError::UserNotFound));

        let result = ports
            .service()
            .set_status(admin(), UserId::from(Uuid::new_v4()), false)
            .await;
        assert!(matches!(result, Err(ManageUsersError::UserNotFound)));
    }

    #[tokio::test]
    async fn admin_cannot_delete_self() {
        let caller = admin();
        let mut ports = Ports::new();
        ports.repository.expect_delete_user().never();

        let result = ports.service().delete_user(caller, caller.user_id).await;
        assert!(matches!(
            result,
            Err(ManageUsersError::Denied(AccessDenied::SelfProtection))
        ));
    }

    #[tokio::test]
    async fn delete_other_user() {
        let target = UserId::from(Uuid::new_v4());
        let mut ports = Ports::new();
        ports
            .stats
            .expect_user_activity_counts()
            .withf(move |id| *id == target)
            .returning(|_| {
                Ok(UserActivityCounts {
                    assignments: 0,
                    submissions: 0,
                })
            });
        ports
            .repository
            .expect_delete_user()
            .withf(move |id| *id == target)
            .times(1)
            .returning(|_| Ok(()));

        assert!(ports.service().delete_user(admin(), target).await.is_ok());
    }

    #[tokio::test]
    async fn delete_refused_while_user_owns_assignments() {
        let teacher = UserId::from(Uuid::new_v4());
        let mut ports = Ports::new();
        ports.stats.expect_user_activity_counts().returning(|_| {
            Ok(UserActivityCounts {
                assignments: 2,
                submissions: 0,
            })
        });
        ports.repository.expect_delete_user().never();

        let result = ports.service().delete_user(admin(), teacher).await;
        assert!(matches!(result, Err(ManageUsersError::UserHasContent)));
    }

    #[tokio::test]
    async fn delete_refused_while_student_has_submissions() {
        let mut ports = Ports::new();
        ports.stats.expect_user_activity_counts().returning(|_| {
            Ok(UserActivityCounts {
                assignments: 0,
                submissions: 1,
            })
        });
        ports.repository.expect_delete_user().never();

        let result = ports
            .service()
            .delete_user(admin(), UserId::from(Uuid::new_v4()))
            .await;
        assert!(matches!(result, Err(ManageUsersError::UserHasContent)));
    }

    #[tokio::test]
    async fn delete_race_with_new_content_maps_to_conflict() {
        let mut ports = Ports::new();
        ports.stats.expect_user_activity_counts().returning(|_| {
            Ok(UserActivityCounts {
                assignments: 0,
                submissions: 0,
            })
        });
        ports
            .repository
            .expect_delete_user()
            .returning(|_| Err(UserRepositoryError::UserHasContent));

        let result = ports
            .service()
            .delete_user(admin(), UserId::from(Uuid::new_v4()))
            .await;
        assert!(matches!(result, Err(ManageUsersError::UserHasContent)));
    }
}
