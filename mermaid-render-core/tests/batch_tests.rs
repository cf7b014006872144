// mermaid-render-core/tests/batch_tests.rs
//
// Batch orchestration against fake invokers: no helper processes are spawned.

use mermaid_render_core::external::{HelperInvocation, HelperInvoker, HelperOutput};
use mermaid_render_core::{
    CoreError, CoreResult, OutputFormat, RenderOptions, RenderResult, build_tasks,
    find_diagram_files, run_batch,
};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;
use tempfile::tempdir;

/// Fake helper that fails for inputs whose name contains `fail`, reports a
/// timeout for inputs containing `slow`, and succeeds (writing the output
/// file) otherwise. Tracks how many invocations are in flight.
#[derive(Default)]
struct FakeHelper {
    delay: Duration,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    calls: Mutex<Vec<String>>,
}

impl FakeHelper {
    fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Default::default()
        }
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl HelperInvoker for FakeHelper {
    fn invoke(&self, invocation: &HelperInvocation) -> CoreResult<HelperOutput> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let input = invocation.flag_value("--input").unwrap_or_default().to_string();
        self.calls.lock().unwrap().push(input.clone());
        thread::sleep(self.delay);

        let result = if input.contains("fail") {
            Ok(HelperOutput {
                exit_code: Some(1),
                stdout: String::new(),
                stderr: "boom".to_string(),
            })
        } else if input.contains("slow") {
            Err(CoreError::Timeout("node render_helper.mjs render".to_string(), Duration::from_secs(30)))
        } else {
            if let Some(output) = invocation.flag_value("--output") {
                std::fs::write(output, format!("rendered {input}")).unwrap();
            }
            Ok(HelperOutput {
                exit_code: Some(0),
                stdout: String::new(),
                stderr: String::new(),
            })
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

fn inputs(dir: &Path, names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(|n| dir.join(n)).collect()
}

#[test]
fn test_two_succeed_one_fails() -> Result<(), Box<dyn std::error::Error>> {
    let input = tempdir()?;
    let output = tempdir()?;
    let helper = FakeHelper::default();

    let tasks = build_tasks(
        inputs(input.path(), &["a.mmd", "b_fail.mmd", "c.mmd"]),
        output.path(),
        RenderOptions::default(),
    );

    let mut seen = Vec::new();
    let report = run_batch(&helper, tasks, 4, Some(Duration::from_secs(30)), |r: &RenderResult| {
        seen.push(r.filename.clone());
    })?;

    assert_eq!(report.summary_line(), "2/3 rendered successfully");
    assert_eq!(report.failed(), 1);
    assert_eq!(report.failures()[0].filename, "b_fail.mmd");
    assert_eq!(report.failures()[0].error, "boom");
    assert!(!report.is_success());
    assert_eq!(seen.len(), 3);

    assert!(output.path().join("a.svg").is_file());
    assert!(output.path().join("c.svg").is_file());
    assert!(!output.path().join("b_fail.svg").exists());
    Ok(())
}

#[test]
fn test_every_task_reported_exactly_once() -> Result<(), Box<dyn std::error::Error>> {
    let input = tempdir()?;
    let output = tempdir()?;
    let helper = FakeHelper::with_delay(Duration::from_millis(5));

    let names: Vec<String> = (0..40)
        .map(|i| match i % 5 {
            0 => format!("d{i}_fail.mmd"),
            1 => format!("d{i}_slow.mmd"),
            _ => format!("d{i}.mmd"),
        })
        .collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let tasks = build_tasks(inputs(input.path(), &name_refs), output.path(), RenderOptions::default());

    let mut seen = HashSet::new();
    let report = run_batch(&helper, tasks, 3, None, |r: &RenderResult| {
        assert!(seen.insert(r.filename.clone()), "duplicate result for {}", r.filename);
    })?;

    assert_eq!(report.succeeded() + report.failed(), 40);
    assert_eq!(report.succeeded(), 24);
    assert_eq!(seen.len(), 40);
    assert_eq!(helper.call_count(), 40);
    assert!(report
        .failures()
        .iter()
        .filter(|f| f.filename.contains("slow"))
        .all(|f| f.error.contains("timed out")));
    Ok(())
}

#[test]
fn test_in_flight_never_exceeds_workers() -> Result<(), Box<dyn std::error::Error>> {
    let input = tempdir()?;
    let output = tempdir()?;
    let helper = FakeHelper::with_delay(Duration::from_millis(30));

    let names: Vec<String> = (0..12).map(|i| format!("n{i}.mmd")).collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let tasks = build_tasks(inputs(input.path(), &name_refs), output.path(), RenderOptions::default());

    let report = run_batch(&helper, tasks, 2, None, |_| {})?;

    assert!(report.is_success());
    let max = helper.max_in_flight.load(Ordering::SeqCst);
    assert!(max <= 2, "saw {max} concurrent invocations with 2 workers");
    assert!(max >= 1);
    Ok(())
}

#[test]
fn test_single_worker_runs_serially() -> Result<(), Box<dyn std::error::Error>> {
    let input = tempdir()?;
    let output = tempdir()?;
    let helper = FakeHelper::with_delay(Duration::from_millis(5));

    let tasks = build_tasks(
        inputs(input.path(), &["a.mmd", "b.mmd", "c.mmd", "d.mmd"]),
        output.path(),
        RenderOptions::default(),
    );
    let report = run_batch(&helper, tasks, 1, None, |_| {})?;

    assert_eq!(report.succeeded(), 4);
    assert_eq!(helper.max_in_flight.load(Ordering::SeqCst), 1);
    Ok(())
}

#[test]
fn test_zero_workers_rejected_before_any_invocation() {
    let helper = FakeHelper::default();
    let tasks = build_tasks(
        vec![PathBuf::from("a.mmd")],
        Path::new("out"),
        RenderOptions::default(),
    );
    let result = run_batch(&helper, tasks, 0, None, |_| {});
    assert!(matches!(result, Err(CoreError::Config(_))));
    assert_eq!(helper.call_count(), 0);
}

#[test]
fn test_rerun_produces_identical_outputs() -> Result<(), Box<dyn std::error::Error>> {
    let input = tempdir()?;
    let options = RenderOptions {
        format: OutputFormat::Ascii,
        ..Default::default()
    };
    let names = ["x.mmd", "y.mmd", "z.mmd"];

    let mut runs = Vec::new();
    for _ in 0..2 {
        let output = tempdir()?;
        let helper = FakeHelper::with_delay(Duration::from_millis(2));
        let tasks = build_tasks(inputs(input.path(), &names), output.path(), options.clone());
        assert!(run_batch(&helper, tasks, 3, None, |_| {})?.is_success());

        let contents: Vec<Vec<u8>> = ["x.txt", "y.txt", "z.txt"]
            .iter()
            .map(|n| std::fs::read(output.path().join(n)))
            .collect::<Result<_, _>>()?;
        runs.push(contents);
    }

    assert_eq!(runs[0], runs[1]);
    Ok(())
}

#[test]
fn test_empty_task_list_yields_empty_report() -> Result<(), Box<dyn std::error::Error>> {
    let helper = FakeHelper::default();
    let report = run_batch(&helper, Vec::new(), 4, None, |_| {})?;
    assert_eq!(report.total(), 0);
    assert_eq!(report.summary_line(), "0/0 rendered successfully");
    Ok(())
}

#[test]
fn test_colliding_outputs_rejected_before_any_invocation() -> Result<(), Box<dyn std::error::Error>> {
    let input = tempdir()?;
    let output = tempdir()?;
    let helper = FakeHelper::default();

    let tasks = build_tasks(
        inputs(input.path(), &["flow.mmd", "other.mmd", "flow.MMD"]),
        output.path(),
        RenderOptions::default(),
    );
    assert_eq!(tasks[0].output, tasks[2].output);

    match run_batch(&helper, tasks, 2, None, |_| {}) {
        Err(CoreError::Config(msg)) => {
            assert!(msg.contains("flow.mmd"), "{msg}");
            assert!(msg.contains("flow.MMD"), "{msg}");
            assert!(msg.contains("flow.svg"), "{msg}");
        }
        other => panic!("Expected a config error, got {other:?}"),
    }
    assert_eq!(helper.call_count(), 0);
    Ok(())
}

#[test]
fn test_discovered_batch_never_shares_an_output() -> Result<(), Box<dyn std::error::Error>> {
    let input = tempdir()?;
    let output = tempdir()?;
    std::fs::write(input.path().join("flow.mmd"), "graph TD\n")?;
    std::fs::write(input.path().join("flow_fail.MMD"), "graph TD\n")?;
    std::fs::write(input.path().join("flow.MMD"), "graph TD\n")?;
    let helper = FakeHelper::default();

    let files = find_diagram_files(input.path())?;
    let tasks = build_tasks(files, output.path(), RenderOptions::default());
    let report = run_batch(&helper, tasks, 2, None, |_| {})?;

    assert_eq!(report.summary_line(), "1/1 rendered successfully");
    assert!(output.path().join("flow.svg").is_file());
    assert_eq!(helper.call_count(), 1);
    Ok(())
}
