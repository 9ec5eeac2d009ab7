//! Submission and polling of asynchronous jobs.
//!
//! One status record per subject lives in the shared cache, keyed by the
//! subject id. The job id is stored inside the record and checked when a
//! poller asks for a finished result.


use std::sync::Arc;

use contentrest_core::{
    ActionKind, JobHandle, JobRecord, JobStatus, JobStatusView, NodeKind, SubjectRef,
};
use contentrest_storage::traits::{StatusCache, SubjectResolver};

use crate::ServiceError;
use crate::executor::ActionExecutor;

pub struct JobTracker {
    resolver: Arc<dyn SubjectResolver>,
    cache: Arc<dyn StatusCache>,
    executor: Arc<dyn ActionExecutor>,
    kind: ActionKind,
    expected: NodeKind,
}

impl JobTracker {
    /// Tracker for folder size calculations.
    #[must_use]
    pub fn folder_size(
        resolver: Arc<dyn SubjectResolver>,
        cache: Arc<dyn StatusCache>,
        executor: Arc<dyn ActionExecutor>,
    ) -> Self {
        Self::new(resolver, cache, executor, ActionKind::FolderSize, NodeKind::Folder)
    }

    #[must_use]
    pub fn new(
        resolver: Arc<dyn SubjectResolver>,
        cache: Arc<dyn StatusCache>,
        executor: Arc<dyn ActionExecutor>,
        kind: ActionKind,
        expected: NodeKind,
    ) -> Self {
        Self { resolver, cache, executor, kind, expected }
    }

    /// Start a job for `subject_id`, or return the handle of the live one.
    ///
    /// The in-progress record is written before the executor is asked to
    /// run, so a poll that races the executor sees `IN_PROGRESS`. A live
    /// in-progress or completed record is returned as is. A failed record
    /// is replaced by a new job.
    pub async fn submit(&self, subject_id: &str) -> Result<JobHandle, ServiceError> {
        let subject = self.validate(subject_id).await?;
        let job_id = self.executor.create_handle(self.kind);
        let record = JobRecord::in_progress(subject.id.as_str(), job_id.as_str());

        if let Some(existing) = self.cache.put_if_absent(&subject.id, record.clone()).await? {
            if existing.status != JobStatus::Failed {
                tracing::debug!(
                    subject = %subject.id,
                    job_id = %existing.job_id,
                    status = %existing.status,
                    "job already recorded, not starting another"
                );
                return Ok(JobHandle { job_id: existing.job_id });
            }
            if !self.cache.put_if_owned(&subject.id, &existing.job_id, record).await? {
                // Another submit replaced the failed record first.
                let current = self.cache.get(&subject.id).await?;
                return Ok(JobHandle {
                    job_id: current.map_or(existing.job_id, |record| record.job_id),
                });
            }
            tracing::info!(
                subject = %subject.id,
                failed_job_id = %existing.job_id,
                "retrying after failed job"
            );
        }

        tracing::info!(subject = %subject.id, job_id = %job_id, kind = self.kind.as_str(), "job submitted");
        if let Err(e) = self.executor.execute_async(&job_id, subject.clone()).await {
            tracing::error!(subject = %subject.id, job_id = %job_id, "could not schedule job: {e}");
            let failed = JobRecord::failed(subject.id.as_str(), job_id.as_str(), e.to_string());
            self.cache.put_if_owned(&subject.id, &job_id, failed).await?;
            return Err(e);
        }
        Ok(JobHandle { job_id })
    }

    /// Read the status of the job for `subject_id`. Never writes the cache.
    pub async fn get_status(
        &self,
        subject_id: &str,
        job_id: &str,
    ) -> Result<JobStatusView, ServiceError> {
        let subject = self.validate(subject_id).await?;
        if job_id.trim().is_empty() {
            return Err(ServiceError::InvalidArgument("job id is required".to_owned()));
        }

        let Some(record) = self.cache.get(&subject.id).await? else {
            return Ok(JobStatusView::not_initiated(subject.id));
        };

        match record.status {
            JobStatus::Completed | JobStatus::Failed => {
                if !record.belongs_to(job_id) {
                    return Err(ServiceError::Unprocessable(format!(
                        "job {job_id} does not match the recorded job for {}",
                        subject.id
                    )));
                }
                Ok(JobStatusView::from(record))
            },
            JobStatus::InProgress | JobStatus::NotInitiated => Ok(JobStatusView {
                status: JobStatus::InProgress,
                ..JobStatusView::from(record)
            }),
        }
    }

    async fn validate(&self, subject_id: &str) -> Result<SubjectRef, ServiceError> {
        if subject_id.trim().is_empty() {
            return Err(ServiceError::InvalidArgument("subject id is required".to_owned()));
        }
        let subject = self.resolver.resolve(subject_id).await?;
        if !self.resolver.is_of_expected_kind(&subject, self.expected) {
            return Err(ServiceError::InvalidNodeType {
                id: subject.id,
                expected: self.expected.as_str(),
                actual: subject.kind.as_str(),
            });
        }
        Ok(subject)
    }
}
