// ============================================================================
// mermaid-render-core/src/external/process.rs
// ============================================================================
//
// PROCESS INVOKER: Running the Helper as a Child Process
//
// Spawns `<runtime> <script> <args...>`, drains stdout and stderr on reader
// threads so a chatty helper can never block on a full pipe, and waits for it
// to exit. When the invocation carries a timeout the child is polled and
// killed once the deadline passes.
//
// AI-ASSISTANT-INFO: Concrete HelperInvoker backed by std::process

// ---- Internal crate imports ----
use super::{HelperInvocation, HelperInvoker, HelperOutput};
use crate::config::HelperConfig;
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::io::{self, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Interval between exit checks while a timeout is pending.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs helper invocations as real child processes.
#[derive(Debug, Clone)]
pub struct ProcessInvoker {
    helper: HelperConfig,
}

impl ProcessInvoker {
    #[must_use]
    pub fn new(helper: HelperConfig) -> Self {
        Self { helper }
    }

    /// Human-readable command name used in logs and errors.
    fn label(&self, invocation: &HelperInvocation) -> String {
        format!(
            "{} {} {}",
            self.helper.runtime,
            self.helper.script.display(),
            invocation.verb().unwrap_or_default()
        )
        .trim_end()
        .to_string()
    }

    fn spawn(&self, invocation: &HelperInvocation) -> CoreResult<Child> {
        let mut cmd = Command::new(&self.helper.runtime);
        cmd.arg(&self.helper.script)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        log::debug!("Running: {cmd:?}");

        cmd.spawn().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                CoreError::DependencyNotFound(self.helper.runtime.clone())
            } else {
                CoreError::CommandStart(self.helper.runtime.clone(), e)
            }
        })
    }
}

impl HelperInvoker for ProcessInvoker {
    fn invoke(&self, invocation: &HelperInvocation) -> CoreResult<HelperOutput> {
        let label = self.label(invocation);
        let mut child = self.spawn(invocation)?;

        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let waited = match invocation.timeout {
            Some(timeout) => wait_with_deadline(&mut child, timeout),
            None => child.wait().map(Some).map_err(CoreError::from),
        };

        let status = match waited {
            Ok(Some(status)) => status,
            Ok(None) => {
                let timeout = invocation.timeout.unwrap_or_default();
                log::warn!("'{label}' exceeded {timeout:?}, killing it");
                reap(&mut child);
                // Reader threads are left to finish on their own: a grandchild
                // may still hold the pipes open.
                return Err(CoreError::Timeout(label, timeout));
            }
            Err(e) => {
                log::error!("Lost track of '{label}': {e}");
                reap(&mut child);
                return Err(e);
            }
        };

        let output = HelperOutput {
            exit_code: status.code(),
            stdout: join_reader(stdout),
            stderr: join_reader(stderr),
        };

        if output.success() {
            log::debug!("'{label}' finished successfully");
        } else {
            log::debug!("'{label}' exited with {:?}", output.exit_code);
        }
        Ok(output)
    }
}

/// Polls `child` until it exits or `timeout` elapses (`Ok(None)`). A timeout
/// too large to express as a deadline waits without one.
fn wait_with_deadline(child: &mut Child, timeout: Duration) -> CoreResult<Option<ExitStatus>> {
    let Some(deadline) = Instant::now().checked_add(timeout) else {
        log::debug!("Timeout {timeout:?} has no representable deadline, waiting unbounded");
        return Ok(Some(child.wait()?));
    };
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        let now = Instant::now();
        if now >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL.min(deadline - now));
    }
}

/// Kills `child` and waits for it. The child may already have exited.
fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

fn drain<R>(pipe: Option<R>) -> Option<JoinHandle<String>>
where
    R: Read + Send + 'static,
{
    pipe.map(|mut reader| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            if let Err(e) = reader.read_to_end(&mut buf) {
                log::debug!("Error reading helper output: {e}");
            }
            String::from_utf8_lossy(&buf).into_owned()
        })
    })
}

fn join_reader(handle: Option<JoinHandle<String>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Writes a shell script and returns an invoker that runs it with `sh`.
    fn script_invoker(dir: &TempDir, body: &str) -> ProcessInvoker {
        let script = dir.path().join("helper.sh");
        fs::write(&script, body).unwrap();
        ProcessInvoker::new(HelperConfig::new("sh", script))
    }

    #[test]
    fn test_captures_stdout_and_exit_code() {
        let dir = TempDir::new().unwrap();
        let invoker = script_invoker(&dir, "echo \"verb=$1 input=$3\"\n");
        let invocation = HelperInvocation::new(
            vec!["render".into(), "--input".into(), "a.mmd".into()],
            None,
        );

        let out = invoker.invoke(&invocation).unwrap();
        assert!(out.success());
        assert_eq!(out.stdout.trim(), "verb=render input=a.mmd");
        assert!(out.stderr.is_empty());
    }

    #[test]
    fn test_captures_stderr_on_failure() {
        let dir = TempDir::new().unwrap();
        let invoker = script_invoker(&dir, "echo boom >&2\nexit 3\n");
        let out = invoker
            .invoke(&HelperInvocation::new(vec!["render".into()], Some(Duration::from_secs(10))))
            .unwrap();
        assert_eq!(out.exit_code, Some(3));
        assert_eq!(out.stderr.trim(), "boom");
    }

    #[test]
    fn test_timeout_kills_helper() {
        let dir = TempDir::new().unwrap();
        let invoker = script_invoker(&dir, "exec sleep 5\n");
        let started = Instant::now();
        let result = invoker.invoke(&HelperInvocation::new(
            vec!["render".into()],
            Some(Duration::from_millis(200)),
        ));
        assert!(matches!(result, Err(CoreError::Timeout(_, _))));
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn test_unrepresentable_timeout_waits_for_exit() {
        let dir = TempDir::new().unwrap();
        let invoker = script_invoker(&dir, "echo done\nexit 0\n");
        let out = invoker
            .invoke(&HelperInvocation::new(
                vec!["render".into()],
                Some(Duration::from_secs(u64::MAX)),
            ))
            .unwrap();
        assert!(out.success());
        assert_eq!(out.stdout.trim(), "done");
    }

    #[test]
    fn test_timeout_error_reports_sub_second_limit() {
        let dir = TempDir::new().unwrap();
        let invoker = script_invoker(&dir, "exec sleep 5\n");
        let err = invoker
            .invoke(&HelperInvocation::new(
                vec!["render".into()],
                Some(Duration::from_millis(150)),
            ))
            .unwrap_err();
        assert!(err.to_string().ends_with("timed out after 150ms"), "{err}");
    }

    #[test]
    fn test_missing_runtime_reports_dependency() {
        let invoker = ProcessInvoker::new(HelperConfig::new("surely-not-a-runtime-91c2", "x.mjs"));
        let result = invoker.invoke(&HelperInvocation::new(vec!["list-themes".into()], None));
        assert!(matches!(result, Err(CoreError::DependencyNotFound(_))));
    }
}
