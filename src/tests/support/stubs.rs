//! Placeholder use cases for the parts of `AppState` a test does not touch.

use async_trait::async_trait;
use uuid::Uuid;

use crate::admin::application::domain::entities::{ActivityEntry, SystemStats, UserDetail};
use crate::admin::application::ports::incoming::use_cases::{
    AdminAssignmentQuery, ContentOversightError, ContentOversightUseCase, ManageUsersError,
    ManageUsersUseCase, SystemOverviewError, SystemOverviewUseCase,
};
use crate::assignment::application::domain::entities::{
    AssignmentChanges, AssignmentDraft, AssignmentView,
};
use crate::assignment::application::ports::incoming::use_cases::{
    AssignmentListQuery, CreateAssignmentError, CreateAssignmentUseCase, DeleteAssignmentError,
    DeleteAssignmentUseCase, GetAssignmentsError, GetAssignmentsUseCase, GetSingleAssignmentError,
    GetSingleAssignmentUseCase, UpdateAssignmentError, UpdateAssignmentUseCase,
};
use crate::auth::application::domain::credentials::NewAccount;
use crate::auth::application::domain::entities::{Role, UserId, UserProfile};
use crate::auth::application::domain::policy::Caller;
use crate::auth::application::ports::outgoing::UserListFilter;
use crate::auth::application::use_cases::change_password::{
    ChangePasswordError, ChangePasswordInput, IChangePasswordUseCase,
};
use crate::auth::application::use_cases::fetch_current_user::{
    FetchCurrentUserError, IFetchCurrentUserUseCase,
};
use crate::auth::application::use_cases::login_user::{ILoginUserUseCase, LoginError, LoginRequest};
use crate::auth::application::use_cases::register_user::{IRegisterUserUseCase, RegisterUserError};
use crate::auth::application::use_cases::AuthSession;
use crate::notification::application::domain::entities::NotificationView;
use crate::notification::application::ports::incoming::use_cases::{
    DeleteNotificationError, DeleteNotificationUseCase, ListNotificationsError,
    ListNotificationsUseCase, MarkAllNotificationsReadError, MarkAllNotificationsReadUseCase,
    MarkNotificationReadError, MarkNotificationReadUseCase, NotificationFeed,
};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::submission::application::domain::entities::{
    SubmissionDraft, SubmissionEdit, SubmissionStatus, SubmissionView,
};
use crate::submission::application::ports::incoming::use_cases::{
    AssignmentSubmissions, GetAssignmentSubmissionsError, GetAssignmentSubmissionsUseCase,
    GetMySubmissionsError, GetMySubmissionsUseCase, ReviewSubmissionError,
    ReviewSubmissionUseCase, SubmitAssignmentError, SubmitAssignmentUseCase,
    UpdateSubmissionError, UpdateSubmissionUseCase,
};

/// Stands in for every use case; panics if a handler actually reaches it.
#[derive(Default, Clone, Copy)]
pub struct Unused;

#[async_trait]
impl IRegisterUserUseCase for Unused {
    async fn execute(&self, _account: NewAccount) -> Result<AuthSession, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ILoginUserUseCase for Unused {
    async fn execute(&self, _request: LoginRequest) -> Result<AuthSession, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl IFetchCurrentUserUseCase for Unused {
    async fn execute(&self, _caller: Caller) -> Result<UserProfile, FetchCurrentUserError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl IChangePasswordUseCase for Unused {
    async fn execute(
        &self,
        _caller: Caller,
        _input: ChangePasswordInput,
    ) -> Result<(), ChangePasswordError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl CreateAssignmentUseCase for Unused {
    async fn execute(
        &self,
        _caller: Caller,
        _draft: AssignmentDraft,
    ) -> Result<AssignmentView, CreateAssignmentError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetAssignmentsUseCase for Unused {
    async fn execute(
        &self,
        _caller: Caller,
        _query: AssignmentListQuery,
        _page: PageRequest,
    ) -> Result<PageResult<AssignmentView>, GetAssignmentsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetSingleAssignmentUseCase for Unused {
    async fn execute(
        &self,
        _caller: Caller,
        _assignment_id: Uuid,
    ) -> Result<AssignmentView, GetSingleAssignmentError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateAssignmentUseCase for Unused {
    async fn execute(
        &self,
        _caller: Caller,
        _assignment_id: Uuid,
        _changes: AssignmentChanges,
    ) -> Result<AssignmentView, UpdateAssignmentError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteAssignmentUseCase for Unused {
    async fn execute(
        &self,
        _caller: Caller,
        _assignment_id: Uuid,
    ) -> Result<(), DeleteAssignmentError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl SubmitAssignmentUseCase for Unused {
    async fn execute(
        &self,
        _caller: Caller,
        _draft: SubmissionDraft,
    ) -> Result<SubmissionView, SubmitAssignmentError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateSubmissionUseCase for Unused {
    async fn execute(
        &self,
        _caller: Caller,
        _submission_id: Uuid,
        _edit: SubmissionEdit,
    ) -> Result<SubmissionView, UpdateSubmissionError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetAssignmentSubmissionsUseCase for Unused {
    async fn execute(
        &self,
        _caller: Caller,
        _assignment_id: Uuid,
        _status: Option<SubmissionStatus>,
        _page: PageRequest,
    ) -> Result<AssignmentSubmissions, GetAssignmentSubmissionsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetMySubmissionsUseCase for Unused {
    async fn execute(
        &self,
        _caller: Caller,
        _page: PageRequest,
    ) -> Result<PageResult<SubmissionView>, GetMySubmissionsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ReviewSubmissionUseCase for Unused {
    async fn execute(
        &self,
        _caller: Caller,
        _submission_id: Uuid,
        _feedback: String,
    ) -> Result<SubmissionView, ReviewSubmissionError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ListNotificationsUseCase for Unused {
    async fn execute(
        &self,
        _caller: Caller,
        _unread_only: bool,
        _page: PageRequest,
    ) -> Result<NotificationFeed, ListNotificationsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl MarkNotificationReadUseCase for Unused {
    async fn execute(
        &self,
        _caller: Caller,
        _notification_id: Uuid,
    ) -> Result<NotificationView, MarkNotificationReadError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl MarkAllNotificationsReadUseCase for Unused {
    async fn execute(&self, _caller: Caller) -> Result<u64, MarkAllNotificationsReadError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteNotificationUseCase for Unused {
    async fn execute(
        &self,
        _caller: Caller,
        _notification_id: Uuid,
    ) -> Result<(), DeleteNotificationError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ManageUsersUseCase for Unused {
    async fn list_users(
        &self,
        _caller: Caller,
        _filter: UserListFilter,
        _page: PageRequest,
    ) -> Result<PageResult<UserProfile>, ManageUsersError> {
        unimplemented!("Not used in this test")
    }

    async fn get_user(
        &self,
        _caller: Caller,
        _user_id: UserId,
    ) -> Result<UserDetail, ManageUsersError> {
        unimplemented!("Not used in this test")
    }

    async fn create_user(
        &self,
        _caller: Caller,
        _account: NewAccount,
    ) -> Result<UserProfile, ManageUsersError> {
        unimplemented!("Not used in this test")
    }

    async fn set_status(
        &self,
        _caller: Caller,
        _user_id: UserId,
        _is_active: bool,
    ) -> Result<UserProfile, ManageUsersError> {
        unimplemented!("Not used in this test")
    }

    async fn set_role(
        &self,
        _caller: Caller,
        _user_id: UserId,
        _role: Role,
    ) -> Result<UserProfile, ManageUsersError> {
        unimplemented!("Not used in this test")
    }

    async fn delete_user(&self, _caller: Caller, _user_id: UserId) -> Result<(), ManageUsersError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl SystemOverviewUseCase for Unused {
    async fn stats(&self, _caller: Caller) -> Result<SystemStats, SystemOverviewError> {
        unimplemented!("Not used in this test")
    }

    async fn activity_log(
        &self,
        _caller: Caller,
    ) -> Result<Vec<ActivityEntry>, SystemOverviewError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ContentOversightUseCase for Unused {
    async fn assignments(
        &self,
        _caller: Caller,
        _query: AdminAssignmentQuery,
        _page: PageRequest,
    ) -> Result<PageResult<AssignmentView>, ContentOversightError> {
        unimplemented!("Not used in this test")
    }

    async fn submissions(
        &self,
        _caller: Caller,
        _status: Option<SubmissionStatus>,
        _page: PageRequest,
    ) -> Result<PageResult<SubmissionView>, ContentOversightError> {
        unimplemented!("Not used in this test")
    }
}
