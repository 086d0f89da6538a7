//! Batch label printing
//!
//! Jobs run one after another with a fixed pause between them. A failing
//! job is recorded and the batch moves on; once started a batch cannot be
//! cancelled.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use shared::models::LabelTemplate;
use tracing::{error, info, instrument, warn};

use crate::printer::LabelPrinter;
use crate::validate::TemplateValidator;

/// Pause between consecutive jobs
pub const DEFAULT_JOB_DELAY: Duration = Duration::from_millis(100);

/// One label to print: the template it was rendered from plus the rendered bytes
#[derive(Debug, Clone)]
pub struct LabelJob {
    pub id: String,
    pub template: LabelTemplate,
    pub payload: Vec<u8>,
}

impl LabelJob {
    pub fn new(id: impl Into<String>, template: LabelTemplate, payload: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            template,
            payload,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum JobStatus {
    Completed,
    Error(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobReport {
    pub job_id: String,
    #[serde(flatten)]
    pub status: JobStatus,
}

impl JobReport {
    pub fn is_completed(&self) -> bool {
        self.status == JobStatus::Completed
    }
}

/// Sequential batch runner over a single printer
pub struct BatchPrinter<P> {
    printer: P,
    validator: TemplateValidator,
    delay: Duration,
}

impl<P: LabelPrinter> BatchPrinter<P> {
    pub fn new(printer: P) -> Self {
        Self {
            printer,
            validator: TemplateValidator::default(),
            delay: DEFAULT_JOB_DELAY,
        }
    }

    pub fn with_validator(mut self, validator: TemplateValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn printer(&self) -> &P {
        &self.printer
    }

    /// Print every job in order, returning one report per job
    #[instrument(skip(self, jobs), fields(job_count = jobs.len()))]
    pub async fn run(&self, jobs: &[LabelJob]) -> Vec<JobReport> {
        let mut reports = Vec::with_capacity(jobs.len());

        for (i, job) in jobs.iter().enumerate() {
            if i > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            let status = self.run_job(job).await;
            reports.push(JobReport {
                job_id: job.id.clone(),
                status,
            });
        }

        let completed = reports.iter().filter(|r| r.is_completed()).count();
        info!(completed, failed = reports.len() - completed, "Batch finished");
        reports
    }

    async fn run_job(&self, job: &LabelJob) -> JobStatus {
        let LabelTemplate {
            name,
            label_size,
            fields,
        } = &job.template;
        let result = self.validator.validate_template(fields, *label_size, name);

        for warning in &result.warnings {
            warn!(job_id = %job.id, %warning, "Print quality warning");
        }
        if !result.is_valid {
            error!(job_id = %job.id, errors = result.errors.len(), "Template invalid, job skipped");
            return JobStatus::Error(result.errors.join("; "));
        }

        match self.printer.print(&job.payload).await {
            Ok(()) => {
                info!(job_id = %job.id, bytes = job.payload.len(), "Label printed");
                JobStatus::Completed
            }
            Err(e) => {
                error!(job_id = %job.id, error = %e, "Label print failed");
                JobStatus::Error(e.to_string())
            }
        }
    }
}
