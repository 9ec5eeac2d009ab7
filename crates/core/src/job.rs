//! Asynchronous job records and the views served to pollers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a job as seen by a poller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    /// No record exists for the subject.
    NotInitiated,
    /// Submitted; the executor has not written a terminal record yet.
    InProgress,
    Completed,
    Failed,
}

impl JobStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::NotInitiated => "NOT_INITIATED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
        }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(*self, Self::Completed | Self::Failed)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kinds of long-running action the executor knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    /// Recursive content size and file count of a folder.
    FolderSize,
}

impl ActionKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::FolderSize => "folder-size",
        }
    }
}

/// Opaque handle returned at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobHandle {
    pub job_id: String,
}

/// Output of a folder size calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeDetails {
    pub size_in_bytes: u64,
    pub number_of_files: u64,
    pub calculated_at: DateTime<Utc>,
}

/// Cache entry for one subject. Keyed by subject id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub job_id: String,
    pub subject_id: String,
    pub status: JobStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<SizeDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JobRecord {
    #[must_use]
    pub fn in_progress(subject_id: impl Into<String>, job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            subject_id: subject_id.into(),
            status: JobStatus::InProgress,
            result: None,
            error: None,
        }
    }

    #[must_use]
    pub fn completed(
        subject_id: impl Into<String>,
        job_id: impl Into<String>,
        result: SizeDetails,
    ) -> Self {
        Self {
            job_id: job_id.into(),
            subject_id: subject_id.into(),
            status: JobStatus::Completed,
            result: Some(result),
            error: None,
        }
    }

    #[must_use]
    pub fn failed(
        subject_id: impl Into<String>,
        job_id: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            job_id: job_id.into(),
            subject_id: subject_id.into(),
            status: JobStatus::Failed,
            result: None,
            error: Some(error.into()),
        }
    }

    /// Case-insensitive comparison against a caller-supplied handle.
    #[must_use]
    pub fn belongs_to(&self, job_id: &str) -> bool {
        self.job_id.eq_ignore_ascii_case(job_id)
    }
}

/// What a status poll returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatusView {
    pub id: String,
    pub status: JobStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_in_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_files: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JobStatusView {
    #[must_use]
    pub fn not_initiated(subject_id: impl Into<String>) -> Self {
        Self {
            id: subject_id.into(),
            status: JobStatus::NotInitiated,
            job_id: None,
            size_in_bytes: None,
            number_of_files: None,
            calculated_at: None,
            error: None,
        }
    }
}

impl From<JobRecord> for JobStatusView {
    fn from(record: JobRecord) -> Self {
        let (size_in_bytes, number_of_files, calculated_at) = match record.result {
            Some(details) => (
                Some(details.size_in_bytes),
                Some(details.number_of_files),
                Some(details.calculated_at),
            ),
            None => (None, None, None),
        };
        Self {
            id: record.subject_id,
            status: record.status,
            job_id: Some(record.job_id),
            size_in_bytes,
            number_of_files,
            calculated_at,
            error: record.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_id_match_ignores_case() {
        let record = JobRecord::in_progress("folder-1", "AbC-123");
        assert!(record.belongs_to("abc-123"));
        assert!(record.belongs_to("ABC-123"));
        assert!(!record.belongs_to("abc-124"));
    }

    #[test]
    fn status_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&JobStatus::NotInitiated).unwrap();
        assert_eq!(json, "\"NOT_INITIATED\"");
        assert_eq!(JobStatus::InProgress.to_string(), "IN_PROGRESS");
    }

    #[test]
    fn completed_view_carries_result_fields() {
        let at = Utc::now();
        let record = JobRecord::completed(
            "folder-42",
            "J1",
            SizeDetails { size_in_bytes: 1024, number_of_files: 7, calculated_at: at },
        );
        let view = JobStatusView::from(record);
        assert_eq!(view.status, JobStatus::Completed);
        assert_eq!(view.job_id.as_deref(), Some("J1"));
        assert_eq!(view.size_in_bytes, Some(1024));
        assert_eq!(view.number_of_files, Some(7));
        assert_eq!(view.calculated_at, Some(at));
        assert!(view.error.is_none());
    }

    #[test]
    fn failed_view_keeps_error_and_no_payload() {
        let view = JobStatusView::from(JobRecord::failed("folder-1", "J9", "disk on fire"));
        assert_eq!(view.status, JobStatus::Failed);
        assert_eq!(view.error.as_deref(), Some("disk on fire"));
        assert!(view.size_in_bytes.is_none());
    }

    #[test]
    fn not_initiated_view_has_no_job_id() {
        let json = serde_json::to_value(JobStatusView::not_initiated("folder-1")).unwrap();
        assert_eq!(json["status"], "NOT_INITIATED");
        assert!(json.get("jobId").is_none());
    }

    #[test]
    fn terminal_states() {
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
        assert!(!JobStatus::InProgress.is_terminal());
        assert!(!JobStatus::NotInitiated.is_terminal());
    }
}
