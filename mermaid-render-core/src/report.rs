//! Batch results and their aggregation.
//!
//! Each render task yields exactly one `RenderResult`. The batch folds them
//! into a `BatchReport` in the order they complete, which is what the CLI
//! prints at the end of a run.

/// What happened to a single diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered,
    /// Captured helper stderr, or the description of why it could not run
    Failed(String),
}

/// Outcome of one render task, identified by the input file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    pub filename: String,
    pub outcome: RenderOutcome,
}

impl RenderResult {
    pub fn rendered(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            outcome: RenderOutcome::Rendered,
        }
    }

    pub fn failed(filename: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            outcome: RenderOutcome::Failed(error.into()),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome == RenderOutcome::Rendered
    }

    /// Failure detail, if the task failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            RenderOutcome::Rendered => None,
            RenderOutcome::Failed(e) => Some(e),
        }
    }
}

/// A failed file and its error text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFailure {
    pub filename: String,
    pub error: String,
}

/// Aggregate over all results of a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    total: usize,
    succeeded: usize,
    failures: Vec<RenderFailure>,
}

impl BatchReport {
    /// Empty report for a batch of `total` tasks.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            total,
            succeeded: 0,
            failures: Vec::new(),
        }
    }

    pub fn record(&mut self, result: RenderResult) {
        match result.outcome {
            RenderOutcome::Rendered => self.succeeded += 1,
            RenderOutcome::Failed(error) => self.failures.push(RenderFailure {
                filename: result.filename,
                error,
            }),
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Results recorded so far.
    #[must_use]
    pub fn recorded(&self) -> usize {
        self.succeeded + self.failures.len()
    }

    /// Failures in the order they were observed.
    #[must_use]
    pub fn failures(&self) -> &[RenderFailure] {
        &self.failures
    }

    /// True when every task was recorded and none failed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty() && self.succeeded == self.total
    }

    /// One-line summary, e.g. `2/3 rendered successfully`.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!("{}/{} rendered successfully", self.succeeded, self.total)
    }
}
