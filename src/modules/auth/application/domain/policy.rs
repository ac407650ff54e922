//! Role and ownership rules for every protected operation.
//!
//! Pure functions only: callers load whatever owner ids the rule needs and
//! pass them in through [`Action`].

use super::entities::{Role, UserId};

/// Verified identity of the requester, taken from the session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub user_id: UserId,
    pub role: Role,
}

impl Caller {
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn owns(&self, owner: UserId) -> bool {
        self.user_id == owner
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateAssignment,
    UpdateAssignment { created_by: UserId },
    DeleteAssignment { created_by: UserId },
    /// Reading an assignment that has been soft-deleted.
    ViewInactiveAssignment { created_by: UserId },
    ReadAssignmentSubmissions { created_by: UserId },
    ReviewSubmission { assignment_owner: UserId },
    CreateSubmission,
    ReadSubmission { student_id: UserId },
    UpdateSubmission { student_id: UserId },
    ReadNotification { recipient: UserId },
    UpdateNotification { recipient: UserId },
    DeleteNotification { recipient: UserId },
    ReadUser { user_id: UserId },
    ChangePassword { user_id: UserId },
    ManageUsers,
    ChangeUserRole { target: UserId, new_role: Role },
    DeleteUser { target: UserId },
    ViewSystemStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccessDenied {
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Access denied")]
    Forbidden,

    /// Admin tried to demote or delete their own account.
    #[error("Administrators cannot demote or delete their own account")]
    SelfProtection,
}

pub fn authorize(caller: Option<&Caller>, action: Action) -> Result<(), AccessDenied> {
    let caller = caller.ok_or(AccessDenied::Unauthenticated)?;

    match caller.role {
        Role::Admin => admin_rules(caller, action),
        Role::Teacher => verdict(teacher_allows(caller, action)),
        Role::Student => verdict(student_allows(caller, action)),
    }
}

fn verdict(allowed: bool) -> Result<(), AccessDenied> {
    if allowed {
        Ok(())
    } else {
        Err(AccessDenied::Forbidden)
    }
}

fn admin_rules(caller: &Caller, action: Action) -> Result<(), AccessDenied> {
    match action {
        Action::ChangeUserRole { target, new_role }
            if caller.owns(target) && new_role != Role::Admin =>
        {
            Err(AccessDenied::SelfProtection)
        }
        Action::DeleteUser { target } if caller.owns(target) => Err(AccessDenied::SelfProtection),
        _ => Ok(()),
    }
}

fn teacher_allows(caller: &Caller, action: Action) -> bool {
    match action {
        Action::CreateAssignment => true,
        Action::UpdateAssignment { created_by }
        | Action::DeleteAssignment { created_by }
        | Action::ViewInactiveAssignment { created_by }
        | Action::ReadAssignmentSubmissions { created_by } => caller.owns(created_by),
        Action::ReviewSubmission { assignment_owner } => caller.owns(assignment_owner),
        Action::ReadSubmission { student_id } => caller.owns(student_id),
        Action::ReadNotification { recipient }
        | Action::UpdateNotification { recipient }
        | Action::DeleteNotification { recipient } => caller.owns(recipient),
        Action::ReadUser { user_id } | Action::ChangePassword { user_id } => {
            caller.owns(user_id)
        }
        Action::CreateSubmission
        | Action::UpdateSubmission { .. }
        | Action::ManageUsers
        | Action::ChangeUserRole { .. }
        | Action::DeleteUser { .. }
        | Action::ViewSystemStats => false,
    }
}

fn student_allows(caller: &Caller, action: Action) -> bool {
    match action {
        Action::CreateSubmission => true,
        Action::ReadSubmission { student_id } | Action::UpdateSubmission { student_id } => {
            caller.owns(student_id)
        }
        Action::ReadNotification { recipient }
        | Action::UpdateNotification { recipient }
        | Action::DeleteNotification { recipient } => caller.owns(recipient),
        Action::ReadUser { user_id } | Action::ChangePassword { user_id } => {
            caller.owns(user_id)
        }
        Action::CreateAssignment
        | Action::UpdateAssignment { .. }
        | Action::DeleteAssignment { .. }
        | Action::ViewInactiveAssignment { .. }
        | Action::ReadAssignmentSubmissions { .. }
        | Action::ReviewSubmission { .. }
        | Action::ManageUsers
        | Action::ChangeUserRole { .. }
        | Action::DeleteUser { .. }
        | Action::ViewSystemStats => false,
    }
}
