// ============================================================================
// mermaid-render-core/src/batch.rs
// ============================================================================
//
// BATCH RENDERING: Bounded Parallel Helper Invocations
//
// A batch renders every discovered diagram by invoking the helper once per
// file. Invocations run on a dedicated rayon pool sized to the configured
// worker count, so no more than that many helper processes are ever in flight.
// All tasks are submitted up front; results travel back over a channel and are
// folded into the report as they complete, in completion order.
//
// A failing file never aborts the batch: its error is captured as data in its
// `RenderResult` and surfaces only in the final report.
//
// AI-ASSISTANT-INFO: Batch task construction, per-task execution and the worker pool

// ---- Internal crate imports ----
use crate::config::RenderOptions;
use crate::discovery::output_path_for;
use crate::error::{CoreError, CoreResult};
use crate::external::{HelperArgs, HelperInvocation, HelperInvoker, HelperOutput};
use crate::report::{BatchReport, RenderResult};

// ---- Standard library imports ----
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::{Arc, mpsc};
use std::time::Duration;

// ============================================================================
// TASKS
// ============================================================================

/// One diagram to render.
#[derive(Debug, Clone)]
pub struct RenderTask {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Snapshot shared by every task of the batch
    pub options: Arc<RenderOptions>,
}

impl RenderTask {
    pub fn new(input: PathBuf, output_dir: &Path, options: Arc<RenderOptions>) -> Self {
        let output = output_path_for(&input, output_dir, options.format);
        Self {
            input,
            output,
            options,
        }
    }

    /// Identifier used in results: the input's file name.
    #[must_use]
    pub fn filename(&self) -> String {
        self.input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input.display().to_string())
    }

    #[must_use]
    pub fn invocation(&self, timeout: Option<Duration>) -> HelperInvocation {
        HelperInvocation::new(
            HelperArgs::render(&self.input, Some(&self.output), &self.options),
            timeout,
        )
    }
}

/// Builds one task per input file, all sharing `options`.
#[must_use]
pub fn build_tasks(files: Vec<PathBuf>, output_dir: &Path, options: RenderOptions) -> Vec<RenderTask> {
    let options = Arc::new(options);
    files
        .into_iter()
        .map(|input| RenderTask::new(input, output_dir, Arc::clone(&options)))
        .collect()
}

// ============================================================================
// SINGLE TASK EXECUTION
// ============================================================================

/// Renders one task and captures the outcome. Never fails: every error
/// becomes a failed `RenderResult`.
pub fn render_task<I>(invoker: &I, task: &RenderTask, timeout: Option<Duration>) -> RenderResult
where
    I: HelperInvoker + ?Sized,
{
    let filename = task.filename();
    let invocation = task.invocation(timeout);

    let detail = match invoker.invoke(&invocation) {
        Ok(output) if output.success() => {
            log::debug!("Rendered {} -> {}", filename, task.output.display());
            return RenderResult::rendered(filename);
        }
        Ok(output) => failure_detail(&output),
        Err(e) => e.to_string(),
    };

    log::debug!("Render of {filename} failed: {detail}");
    discard_output(&task.output);
    RenderResult::failed(filename, detail)
}

/// Error text for a helper that exited unsuccessfully.
fn failure_detail(output: &HelperOutput) -> String {
    let stderr = output.stderr.trim_end();
    if !stderr.is_empty() {
        return stderr.to_string();
    }
    match output.exit_code {
        Some(code) => format!("helper exited with code {code}"),
        None => "helper terminated by signal".to_string(),
    }
}

/// Removes whatever a failed helper left at the output path.
fn discard_output(path: &Path) {
    if path.is_file() {
        match std::fs::remove_file(path) {
            Ok(()) => log::debug!("Removed output of failed render: {}", path.display()),
            Err(e) => log::warn!("Could not remove {}: {}", path.display(), e),
        }
    }
}

// ============================================================================
// WORKER POOL
// ============================================================================

/// Rejects task lists in which two inputs would write the same output file.
fn check_distinct_outputs(tasks: &[RenderTask]) -> CoreResult<()> {
    let mut claimed: HashMap<&Path, &Path> = HashMap::with_capacity(tasks.len());
    for task in tasks {
        if let Some(first) = claimed.insert(task.output.as_path(), task.input.as_path()) {
            return Err(CoreError::Config(format!(
                "'{}' and '{}' would both render to '{}'",
                first.display(),
                task.input.display(),
                task.output.display()
            )));
        }
    }
    Ok(())
}

/// Renders all `tasks` with at most `workers` helper invocations in flight.
///
/// `on_result` is called on the calling thread for each result as it arrives.
/// The returned report always accounts for every task exactly once.
///
/// # Errors
///
/// * `CoreError::Config` - `workers` is zero, or two tasks share an output path
/// * `CoreError::ThreadPool` - the worker pool could not be created
pub fn run_batch<I, F>(
    invoker: &I,
    tasks: Vec<RenderTask>,
    workers: usize,
    timeout: Option<Duration>,
    mut on_result: F,
) -> CoreResult<BatchReport>
where
    I: HelperInvoker + ?Sized,
    F: FnMut(&RenderResult),
{
    if workers == 0 {
        return Err(CoreError::Config("Worker count must be at least 1".to_string()));
    }
    check_distinct_outputs(&tasks)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("render-worker-{i}"))
        .build()
        .map_err(|e| CoreError::ThreadPool(e.to_string()))?;

    let mut report = BatchReport::new(tasks.len());
    log::debug!("Dispatching {} task(s) on {} worker(s)", tasks.len(), workers);

    let (tx, rx) = mpsc::channel::<RenderResult>();

    pool.in_place_scope(|scope| {
        for task in tasks {
            let tx = tx.clone();
            scope.spawn(move |_| {
                let result = panic::catch_unwind(AssertUnwindSafe(|| {
                    render_task(invoker, &task, timeout)
                }))
                .unwrap_or_else(|_| {
                    RenderResult::failed(task.filename(), "render task panicked")
                });
                // The receiver lives until every sender is gone.
                let _ = tx.send(result);
            });
        }
        drop(tx);

        for result in rx {
            on_result(&result);
            report.record(result);
        }
    });

    Ok(report)
}
