//! `mockall` doubles for every outgoing port and for the admin use cases.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::admin::application::domain::entities::{
    ActivityEntry, SystemStats, UserActivityCounts, UserDetail,
};
use crate::admin::application::ports::incoming::use_cases::{
    AdminAssignmentQuery, ContentOversightError, ContentOversightUseCase, ManageUsersError,
    ManageUsersUseCase, SystemOverviewError, SystemOverviewUseCase,
};
use crate::admin::application::ports::outgoing::{AdminStatsQuery, AdminStatsQueryError};
use crate::assignment::application::domain::entities::{
    Assignment, AssignmentChanges, AssignmentView, NewAssignment,
};
use crate::assignment::application::ports::outgoing::{
    AssignmentListFilter, AssignmentQuery, AssignmentQueryError, AssignmentRepository,
    AssignmentRepositoryError,
};
use crate::auth::application::domain::credentials::NewAccount;
use crate::auth::application::domain::entities::{Role, User, UserId, UserProfile};
use crate::auth::application::domain::policy::Caller;
use crate::auth::application::ports::outgoing::{
    HashError, NewUser, PasswordHasher, TokenClaims, TokenError, TokenProvider, UserListFilter,
    UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};
use crate::notification::application::domain::entities::{NewNotification, Notification};
use crate::notification::application::ports::incoming::use_cases::{
    ActivityEvent, NotifyActivityUseCase,
};
use crate::notification::application::ports::outgoing::{
    NotificationQuery, NotificationQueryError, NotificationRepository,
    NotificationRepositoryError,
};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::submission::application::domain::entities::{
    NewSubmission, Submission, SubmissionRevision, SubmissionStatus, SubmissionView,
};
use crate::submission::application::ports::outgoing::{
    SubmissionListFilter, SubmissionQuery, SubmissionQueryError, SubmissionRepository,
    SubmissionRepositoryError,
};

mock! {
    pub UserQueryPort {}

    #[async_trait]
    impl UserQuery for UserQueryPort {
        async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError>;
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;
        async fn list(
            &self,
            filter: UserListFilter,
            page: PageRequest,
        ) -> Result<PageResult<User>, UserQueryError>;
        async fn recently_active(&self, limit: u64) -> Result<Vec<User>, UserQueryError>;
        async fn active_student_ids(&self) -> Result<Vec<UserId>, UserQueryError>;
    }
}

mock! {
    pub UserRepositoryPort {}

    #[async_trait]
    impl UserRepository for UserRepositoryPort {
        async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;
        async fn update_password(
            &self,
            user_id: UserId,
            new_password_hash: String,
        ) -> Result<(), UserRepositoryError>;
        async fn record_login(
            &self,
            user_id: UserId,
            at: DateTime<Utc>,
        ) -> Result<(), UserRepositoryError>;
        async fn set_active(&self, user_id: UserId, is_active: bool)
            -> Result<User, UserRepositoryError>;
        async fn set_role(&self, user_id: UserId, role: Role) -> Result<User, UserRepositoryError>;
        async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError>;
    }
}

mock! {
    pub PasswordHasherPort {}

    #[async_trait]
    impl PasswordHasher for PasswordHasherPort {
        async fn hash_password(&self, password: &str) -> Result<String, HashError>;
        async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
    }
}

mock! {
    pub TokenProviderPort {}

    impl TokenProvider for TokenProviderPort {
        fn issue_token(&self, user_id: Uuid, email: &str, role: Role) -> Result<String, TokenError>;
        fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
        fn token_ttl(&self) -> i64;
    }
}

mock! {
    pub AssignmentQueryPort {}

    #[async_trait]
    impl AssignmentQuery for AssignmentQueryPort {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Assignment>, AssignmentQueryError>;
        async fn view_by_id(&self, id: Uuid) -> Result<Option<AssignmentView>, AssignmentQueryError>;
        async fn list(
            &self,
            filter: AssignmentListFilter,
            page: PageRequest,
        ) -> Result<PageResult<AssignmentView>, AssignmentQueryError>;
    }
}

mock! {
    pub AssignmentRepositoryPort {}

    #[async_trait]
    impl AssignmentRepository for AssignmentRepositoryPort {
        async fn create(
            &self,
            created_by: UserId,
            assignment: NewAssignment,
        ) -> Result<Assignment, AssignmentRepositoryError>;
        async fn update(
            &self,
            id: Uuid,
            changes: AssignmentChanges,
        ) -> Result<Assignment, AssignmentRepositoryError>;
        async fn deactivate(&self, id: Uuid) -> Result<(), AssignmentRepositoryError>;
    }
}

mock! {
    pub SubmissionQueryPort {}

    #[async_trait]
    impl SubmissionQuery for SubmissionQueryPort {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Submission>, SubmissionQueryError>;
        async fn exists_for(
            &self,
            assignment_id: Uuid,
            student_id: UserId,
        ) -> Result<bool, SubmissionQueryError>;
        async fn view_by_id(&self, id: Uuid) -> Result<Option<SubmissionView>, SubmissionQueryError>;
        async fn list(
            &self,
            filter: SubmissionListFilter,
            page: PageRequest,
        ) -> Result<PageResult<SubmissionView>, SubmissionQueryError>;
    }
}

mock! {
    pub SubmissionRepositoryPort {}

    #[async_trait]
    impl SubmissionRepository for SubmissionRepositoryPort {
        async fn create(&self, submission: NewSubmission)
            -> Result<Submission, SubmissionRepositoryError>;
        async fn resubmit(
            &self,
            id: Uuid,
            revision: SubmissionRevision,
        ) -> Result<Submission, SubmissionRepositoryError>;
        async fn set_feedback(
            &self,
            id: Uuid,
            feedback: String,
        ) -> Result<Submission, SubmissionRepositoryError>;
    }
}

mock! {
    pub NotificationQueryPort {}

    #[async_trait]
    impl NotificationQuery for NotificationQueryPort {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Notification>, NotificationQueryError>;
        async fn list_for_user(
            &self,
            user_id: UserId,
            unread_only: bool,
            page: PageRequest,
        ) -> Result<PageResult<Notification>, NotificationQueryError>;
        async fn unread_count(&self, user_id: UserId) -> Result<u64, NotificationQueryError>;
    }
}

mock! {
    pub NotificationRepositoryPort {}

    #[async_trait]
    impl NotificationRepository for NotificationRepositoryPort {
        async fn create_many(
            &self,
            notifications: Vec<NewNotification>,
        ) -> Result<u64, NotificationRepositoryError>;
        async fn mark_read(&self, id: Uuid) -> Result<Notification, NotificationRepositoryError>;
        async fn mark_all_read(&self, user_id: UserId) -> Result<u64, NotificationRepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), NotificationRepositoryError>;
    }
}

mock! {
    pub NotifyActivityPort {}

    #[async_trait]
    impl NotifyActivityUseCase for NotifyActivityPort {
        async fn notify(&self, event: ActivityEvent);
    }
}

mock! {
    pub AdminStatsQueryPort {}

    #[async_trait]
    impl AdminStatsQuery for AdminStatsQueryPort {
        async fn system_stats(&self, now: DateTime<Utc>) -> Result<SystemStats, AdminStatsQueryError>;
        async fn user_activity_counts(
            &self,
            user_id: UserId,
        ) -> Result<UserActivityCounts, AdminStatsQueryError>;
    }
}

mock! {
    pub ManageUsersPort {}

    #[async_trait]
    impl ManageUsersUseCase for ManageUsersPort {
        async fn list_users(
            &self,
            caller: Caller,
            filter: UserListFilter,
            page: PageRequest,
        ) -> Result<PageResult<UserProfile>, ManageUsersError>;
        async fn get_user(&self, caller: Caller, user_id: UserId)
            -> Result<UserDetail, ManageUsersError>;
        async fn create_user(
            &self,
            caller: Caller,
            account: NewAccount,
        ) -> Result<UserProfile, ManageUsersError>;
        async fn set_status(
            &self,
            caller: Caller,
            user_id: UserId,
            is_active: bool,
        ) -> Result<UserProfile, ManageUsersError>;
        async fn set_role(
            &self,
            caller: Caller,
            user_id: UserId,
            role: Role,
        ) -> Result<UserProfile, ManageUsersError>;
        async fn delete_user(&self, caller: Caller, user_id: UserId) -> Result<(), ManageUsersError>;
    }
}

mock! {
    pub SystemOverviewPort {}

    #[async_trait]
    impl SystemOverviewUseCase for SystemOverviewPort {
        async fn stats(&self, caller: Caller) -> Result<SystemStats, SystemOverviewError>;
        async fn activity_log(&self, caller: Caller) -> Result<Vec<ActivityEntry>, SystemOverviewError>;
    }
}

mock! {
    pub ContentOversightPort {}

    #[async_trait]
    impl ContentOversightUseCase for ContentOversightPort {
        async fn assignments(
            &self,
            caller: Caller,
            query: AdminAssignmentQuery,
            page: PageRequest,
        ) -> Result<PageResult<AssignmentView>, ContentOversightError>;
        async fn submissions(
            &self,
            caller: Caller,
            status: Option<SubmissionStatus>,
            page: PageRequest,
        ) -> Result<PageResult<SubmissionView>, ContentOversightError>;
    }
}
