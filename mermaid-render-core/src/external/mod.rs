// ============================================================================
// mermaid-render-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the Rendering Helper Process
//
// All actual diagram rendering happens in an external helper script executed
// by a JavaScript runtime. This module is the process boundary: it describes
// a helper invocation, abstracts how it is executed behind the
// `HelperInvoker` trait, and checks that the runtime is installed.
//
// KEY COMPONENTS:
// - HelperInvocation / HelperOutput: one call to the helper and what it returned
// - HelperInvoker: trait implemented by the real process runner and by test fakes
// - ProcessInvoker: runs `<runtime> <script> <args...>` with an optional timeout
// - HelperArgs: builds the helper's verb + flag argument list
// - check_dependency: verifies the runtime can be spawned
//
// AI-ASSISTANT-INFO: External helper process abstraction and dependency checks

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::io;
use std::process::{Command, Stdio};
use std::time::Duration;

// ============================================================================
// SUBMODULES
// ============================================================================

/// Argument list construction for the helper's `render` and `list-themes` verbs
pub mod args;

/// Concrete invoker that spawns the helper as a child process
pub mod process;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use args::HelperArgs;
pub use process::ProcessInvoker;

// ============================================================================
// INVOCATION TYPES
// ============================================================================

/// A single call to the helper: its arguments (verb first) and time limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperInvocation {
    pub args: Vec<String>,
    /// `None` waits for the helper indefinitely
    pub timeout: Option<Duration>,
}

impl HelperInvocation {
    pub fn new(args: Vec<String>, timeout: Option<Duration>) -> Self {
        Self { args, timeout }
    }

    /// The helper verb (`render`, `list-themes`), if any.
    #[must_use]
    pub fn verb(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// Value following `flag` in the argument list.
    #[must_use]
    pub fn flag_value(&self, flag: &str) -> Option<&str> {
        self.args
            .iter()
            .position(|a| a == flag)
            .and_then(|i| self.args.get(i + 1))
            .map(String::as_str)
    }
}

/// Captured result of a helper process that ran to completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelperOutput {
    /// Exit code; `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl HelperOutput {
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

// ============================================================================
// INVOKER TRAIT
// ============================================================================

/// Executes helper invocations.
///
/// `Ok` means the helper ran and exited (successfully or not); `Err` means it
/// could not be run at all (spawn failure, timeout). Implementations are shared
/// across batch workers, hence `Send + Sync`.
///
/// # Examples
///
/// ```rust
/// use mermaid_render_core::external::{HelperInvocation, HelperInvoker, HelperOutput};
/// use mermaid_render_core::CoreResult;
///
/// struct AlwaysOk;
///
/// impl HelperInvoker for AlwaysOk {
///     fn invoke(&self, _invocation: &HelperInvocation) -> CoreResult<HelperOutput> {
///         Ok(HelperOutput { exit_code: Some(0), ..Default::default() })
///     }
/// }
///
/// let out = AlwaysOk.invoke(&HelperInvocation::new(vec!["render".into()], None)).unwrap();
/// assert!(out.success());
/// ```
pub trait HelperInvoker: Send + Sync {
    fn invoke(&self, invocation: &HelperInvocation) -> CoreResult<HelperOutput>;
}

impl<T: HelperInvoker + ?Sized> HelperInvoker for &T {
    fn invoke(&self, invocation: &HelperInvocation) -> CoreResult<HelperOutput> {
        (**self).invoke(invocation)
    }
}

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that the runtime executable can be found and started.
///
/// Runs `<runtime> --version` with its output discarded. Only the ability to
/// spawn the process matters; the exit status is not inspected.
///
/// # Errors
///
/// * `CoreError::DependencyNotFound` - the executable is not on the PATH
/// * `CoreError::CommandStart` - it exists but could not be started
pub fn check_dependency(runtime: &str) -> CoreResult<()> {
    let result = Command::new(runtime)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {runtime}");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{runtime}' not found.");
            Err(CoreError::DependencyNotFound(runtime.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{runtime}': {e}");
            Err(CoreError::CommandStart(runtime.to_string(), e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invocation_accessors() {
        let invocation = HelperInvocation::new(
            vec![
                "render".to_string(),
                "--input".to_string(),
                "a.mmd".to_string(),
                "--format".to_string(),
                "svg".to_string(),
            ],
            None,
        );
        assert_eq!(invocation.verb(), Some("render"));
        assert_eq!(invocation.flag_value("--input"), Some("a.mmd"));
        assert_eq!(invocation.flag_value("--format"), Some("svg"));
        assert_eq!(invocation.flag_value("--theme"), None);
    }

    #[test]
    fn test_output_success_requires_zero_exit() {
        let mut out = HelperOutput::default();
        assert!(!out.success());
        out.exit_code = Some(0);
        assert!(out.success());
        out.exit_code = Some(2);
        assert!(!out.success());
    }

    #[test]
    fn test_check_dependency_missing() {
        let result = check_dependency("surely-not-a-real-runtime-7f3a");
        assert!(matches!(result, Err(CoreError::DependencyNotFound(name)) if name == "surely-not-a-real-runtime-7f3a"));
    }

    #[cfg(unix)]
    #[test]
    fn test_check_dependency_present() {
        assert!(check_dependency("sh").is_ok());
    }
}
