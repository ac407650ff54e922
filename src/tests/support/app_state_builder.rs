use actix_web::web;
use std::sync::Arc;

use crate::admin::application::admin_use_cases::AdminUseCases;
use crate::admin::application::ports::incoming::use_cases::{
    ContentOversightUseCase, ManageUsersUseCase, SystemOverviewUseCase,
};
use crate::assignment::application::assignment_use_cases::AssignmentUseCases;
use crate::assignment::application::ports::incoming::use_cases::{
    CreateAssignmentUseCase, DeleteAssignmentUseCase, GetAssignmentsUseCase,
    GetSingleAssignmentUseCase, UpdateAssignmentUseCase,
};
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::use_cases::{
    change_password::IChangePasswordUseCase, fetch_current_user::IFetchCurrentUserUseCase,
    login_user::ILoginUserUseCase, register_user::IRegisterUserUseCase,
};
use crate::notification::application::notification_use_cases::NotificationUseCases;
use crate::notification::application::ports::incoming::use_cases::{
    DeleteNotificationUseCase, ListNotificationsUseCase, MarkAllNotificationsReadUseCase,
    MarkNotificationReadUseCase,
};
use crate::submission::application::ports::incoming::use_cases::{
    GetAssignmentSubmissionsUseCase, GetMySubmissionsUseCase, ReviewSubmissionUseCase,
    SubmitAssignmentUseCase, UpdateSubmissionUseCase,
};
use crate::submission::application::submission_use_cases::SubmissionUseCases;
use crate::tests::support::stubs::Unused;
use crate::AppState;

/// Builds an `AppState` where every use case panics unless a test swaps it in.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    assignment: AssignmentUseCases,
    submission: SubmissionUseCases,
    notification: NotificationUseCases,
    admin: AdminUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                register: Arc::new(Unused),
                login: Arc::new(Unused),
                current_user: Arc::new(Unused),
                change_password: Arc::new(Unused),
            },
            assignment: AssignmentUseCases {
                create: Arc::new(Unused),
                get_list: Arc::new(Unused),
                get_single: Arc::new(Unused),
                update: Arc::new(Unused),
                delete: Arc::new(Unused),
            },
            submission: SubmissionUseCases {
                submit: Arc::new(Unused),
                update: Arc::new(Unused),
                by_assignment: Arc::new(Unused),
                mine: Arc::new(Unused),
                review: Arc::new(Unused),
            },
            notification: NotificationUseCases {
                list: Arc::new(Unused),
                mark_read: Arc::new(Unused),
                mark_all_read: Arc::new(Unused),
                delete: Arc::new(Unused),
            },
            admin: AdminUseCases {
                users: Arc::new(Unused),
                overview: Arc::new(Unused),
                content: Arc::new(Unused),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register(mut self, uc: impl IRegisterUserUseCase + 'static) -> Self {
        self.auth.register = Arc::new(uc);
        self
    }

    pub fn with_login(mut self, uc: impl ILoginUserUseCase + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_current_user(mut self, uc: impl IFetchCurrentUserUseCase + 'static) -> Self {
        self.auth.current_user = Arc::new(uc);
        self
    }

    pub fn with_change_password(mut self, uc: impl IChangePasswordUseCase + 'static) -> Self {
        self.auth.change_password = Arc::new(uc);
        self
    }

    pub fn with_create_assignment(mut self, uc: impl CreateAssignmentUseCase + 'static) -> Self {
        self.assignment.create = Arc::new(uc);
        self
    }

    pub fn with_get_assignments(mut self, uc: impl GetAssignmentsUseCase + 'static) -> Self {
        self.assignment.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_assignment(
        mut self,
        uc: impl GetSingleAssignmentUseCase + 'static,
    ) -> Self {
        self.assignment.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_assignment(mut self, uc: impl UpdateAssignmentUseCase + 'static) -> Self {
        self.assignment.update = Arc::new(uc);
        self
    }

    pub fn with_delete_assignment(mut self, uc: impl DeleteAssignmentUseCase + 'static) -> Self {
        self.assignment.delete = Arc::new(uc);
        self
    }

    pub fn with_submit_assignment(mut self, uc: impl SubmitAssignmentUseCase + 'static) -> Self {
        self.submission.submit = Arc::new(uc);
        self
    }

    pub fn with_update_submission(mut self, uc: impl UpdateSubmissionUseCase + 'static) -> Self {
        self.submission.update = Arc::new(uc);
        self
    }

    pub fn with_assignment_submissions(
        mut self,
        uc: impl GetAssignmentSubmissionsUseCase + 'static,
    ) -> Self {
        self.submission.by_assignment = Arc::new(uc);
        self
    }

    pub fn with_my_submissions(mut self, uc: impl GetMySubmissionsUseCase + 'static) -> Self {
        self.submission.mine = Arc::new(uc);
        self
    }

    pub fn with_review_submission(mut self, uc: impl ReviewSubmissionUseCase + 'static) -> Self {
        self.submission.review = Arc::new(uc);
        self
    }

    pub fn with_list_notifications(mut self, uc: impl ListNotificationsUseCase + 'static) -> Self {
        self.notification.list = Arc::new(uc);
        self
    }

    pub fn with_mark_notification_read(
        mut self,
        uc: impl MarkNotificationReadUseCase + 'static,
    ) -> Self {
        self.notification.mark_read = Arc::new(uc);
        self
    }

    pub fn with_mark_all_notifications_read(
        mut self,
        uc: impl MarkAllNotificationsReadUseCase + 'static,
    ) -> Self {
        self.notification.mark_all_read = Arc::new(uc);
        self
    }

    pub fn with_delete_notification(
        mut self,
        uc: impl DeleteNotificationUseCase + 'static,
    ) -> Self {
        self.notification.delete = Arc::new(uc);
        self
    }

    pub fn with_manage_users(mut self, uc: impl ManageUsersUseCase + 'static) -> Self {
        self.admin.users = Arc::new(uc);
        self
    }

    pub fn with_system_overview(mut self, uc: impl SystemOverviewUseCase + 'static) -> Self {
        self.admin.overview = Arc::new(uc);
        self
    }

    pub fn with_content_oversight(mut self, uc: impl ContentOversightUseCase + 'static) -> Self {
        self.admin.content = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            assignment: self.assignment,
            submission: self.submission,
            notification: self.notification,
            admin: self.admin,
        })
    }
}
