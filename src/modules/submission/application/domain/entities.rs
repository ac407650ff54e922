use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Submitted,
    Late,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Submitted => "submitted",
            SubmissionStatus::Late => "late",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Late exactly when the work arrives after the due instant.
pub fn derive_status(submitted_at: DateTime<Utc>, due_date: DateTime<Utc>) -> SubmissionStatus {
    if submitted_at > due_date {
        SubmissionStatus::Late
    } else {
        SubmissionStatus::Submitted
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionValidationError {
    #[error("Text cannot be empty")]
    TextEmpty,

    #[error("Assignment is overdue and cannot be submitted")]
    PastDue,

    #[error("Feedback cannot be empty")]
    FeedbackEmpty,
}

/// Whether work may still be handed in for a given due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmissionWindow {
    pub accept_late: bool,
}

impl SubmissionWindow {
    pub fn new(accept_late: bool) -> Self {
        Self { accept_late }
    }

    /// Status to store for a write at `now`, or `PastDue` when late work is refused.
    pub fn check(
        &self,
        now: DateTime<Utc>,
        due_date: DateTime<Utc>,
    ) -> Result<SubmissionStatus, SubmissionValidationError> {
        match derive_status(now, due_date) {
            SubmissionStatus::Late if !self.accept_late => Err(SubmissionValidationError::PastDue),
            status => Ok(status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub student_id: UserId,
    pub status: SubmissionStatus,
    pub submitted_at: DateTime<Utc>,
    pub files: Vec<String>,
    pub text: Option<String>,
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The few assignment fields shown next to a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentBrief {
    pub id: Uuid,
    pub title: String,
    pub due_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionView {
    #[serde(flatten)]
    pub submission: Submission,
    pub assignment: Option<AssignmentBrief>,
    pub student: Option<UserSummary>,
}

impl From<Submission> for SubmissionView {
    fn from(submission: Submission) -> Self {
        Self {
            submission,
            assignment: None,
            student: None,
        }
    }
}

/// Optional text must carry something once trimmed.
fn validate_text(text: Option<String>) -> Result<Option<String>, SubmissionValidationError> {
    match text {
        Some(raw) => {
            let value = raw.trim();
            if value.is_empty() {
                return Err(SubmissionValidationError::TextEmpty);
            }
            Ok(Some(value.to_string()))
        }
        None => Ok(None),
    }
}

#[derive(Debug, Clone)]
pub struct SubmissionDraft {
    pub assignment_id: Uuid,
    pub text: Option<String>,
    pub files: Vec<String>,
}

impl SubmissionDraft {
    pub fn validate(self) -> Result<Self, SubmissionValidationError> {
        Ok(Self {
            text: validate_text(self.text)?,
            ..self
        })
    }
}

/// Row to insert once the draft, window and ownership checks passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
    pub assignment_id: Uuid,
    pub student_id: UserId,
    pub status: SubmissionStatus,
    pub submitted_at: DateTime<Utc>,
    pub files: Vec<String>,
    pub text: Option<String>,
}

/// Student edit of an existing submission.
#[derive(Debug, Clone, Default)]
pub struct SubmissionEdit {
    pub text: Option<String>,
    pub files: Option<Vec<String>>,
}

impl SubmissionEdit {
    /// Empty file lists keep the stored files.
    pub fn validate(self) -> Result<Self, SubmissionValidationError> {
        Ok(Self {
            text: validate_text(self.text)?,
            files: self.files.filter(|files| !files.is_empty()),
        })
    }
}

/// What a resubmission writes: always a fresh stamp and status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRevision {
    pub submitted_at: DateTime<Utc>,
    pub status: SubmissionStatus,
    pub text: Option<String>,
    pub files: Option<Vec<String>>,
}

pub fn validate_feedback(raw: &str) -> Result<String, SubmissionValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(SubmissionValidationError::FeedbackEmpty);
    }
    Ok(value.to_string())
}
