use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserSummary};
use crate::shared::patch::PatchField;

pub const TITLE_MAX_CHARS: usize = 200;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;
pub const INSTRUCTIONS_MAX_CHARS: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub instructions: Option<String>,
    pub is_active: bool,
    pub created_by: UserId,
    pub attachments: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Assignment together with its creator's public details.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentView {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub creator: Option<UserSummary>,
}

impl From<Assignment> for AssignmentView {
    fn from(assignment: Assignment) -> Self {
        Self {
            assignment,
            creator: None,
        }
    }
}

/// Listing window relative to the due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DueWindow {
    /// Due date not yet passed.
    Active,
    Overdue,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssignmentValidationError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Title cannot be more than 200 characters")]
    TitleTooLong,

    #[error("Description is required")]
    DescriptionRequired,

    #[error("Description cannot be more than 1000 characters")]
    DescriptionTooLong,

    #[error("Instructions cannot be more than 2000 characters")]
    InstructionsTooLong,

    #[error("Due date must be in the future")]
    DueDateNotInFuture,
}

fn required_text(
    raw: &str,
    max: usize,
    empty: AssignmentValidationError,
    too_long: AssignmentValidationError,
) -> Result<String, AssignmentValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(empty);
    }
    if value.chars().count() > max {
        return Err(too_long);
    }
    Ok(value.to_string())
}

fn validate_title(raw: &str) -> Result<String, AssignmentValidationError> {
    required_text(
        raw,
        TITLE_MAX_CHARS,
        AssignmentValidationError::TitleRequired,
        AssignmentValidationError::TitleTooLong,
    )
}

fn validate_description(raw: &str) -> Result<String, AssignmentValidationError> {
    required_text(
        raw,
        DESCRIPTION_MAX_CHARS,
        AssignmentValidationError::DescriptionRequired,
        AssignmentValidationError::DescriptionTooLong,
    )
}

/// Blank instructions collapse to `None`.
fn validate_instructions(raw: &str) -> Result<Option<String>, AssignmentValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if value.chars().count() > INSTRUCTIONS_MAX_CHARS {
        return Err(AssignmentValidationError::InstructionsTooLong);
    }
    Ok(Some(value.to_string()))
}

fn validate_due_date(
    due_date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, AssignmentValidationError> {
    if due_date <= now {
        return Err(AssignmentValidationError::DueDateNotInFuture);
    }
    Ok(due_date)
}

/// Raw fields of a new assignment as received from the client.
#[derive(Debug, Clone)]
pub struct AssignmentDraft {
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub instructions: Option<String>,
    pub attachments: Vec<String>,
}

/// A draft that passed validation at `now`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssignment {
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub instructions: Option<String>,
    pub attachments: Vec<String>,
}

impl AssignmentDraft {
    pub fn validate(self, now: DateTime<Utc>) -> Result<NewAssignment, AssignmentValidationError> {
        let instructions = match self.instructions.as_deref() {
            Some(raw) => validate_instructions(raw)?,
            None => None,
        };

        Ok(NewAssignment {
            title: validate_title(&self.title)?,
            description: validate_description(&self.description)?,
            due_date: validate_due_date(self.due_date, now)?,
            instructions,
            attachments: self.attachments,
        })
    }
}

/// Partial update. `None` keeps the stored value; `instructions` may also be
/// cleared with an explicit null.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub instructions: PatchField<String>,
    pub attachments: Option<Vec<String>>,
}

impl AssignmentChanges {
    pub fn validate(self, now: DateTime<Utc>) -> Result<Self, AssignmentValidationError> {
        let instructions = match self.instructions {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(raw) => match validate_instructions(&raw)? {
                Some(text) => PatchField::Value(text),
                None => PatchField::Null,
            },
        };

        Ok(Self {
            title: self.title.as_deref().map(validate_title).transpose()?,
            description: self
                .description
                .as_deref()
                .map(validate_description)
                .transpose()?,
            due_date: self
                .due_date
                .map(|due| validate_due_date(due, now))
                .transpose()?,
            instructions,
            attachments: self.attachments,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.instructions.is_unset()
            && self.attachments.is_none()
    }
}
