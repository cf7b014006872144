//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command. Every
//! command runs its pre-flight checks (helper runtime present, input paths
//! exist, output directory created) before invoking the helper at all.

/// Renders one diagram and mirrors the helper's exit code.
pub mod render;

/// Renders a directory of diagrams on a bounded worker pool.
pub mod batch;

/// Lists the helper's built-in themes.
pub mod themes;

use std::process::ExitCode;

/// Maps a helper exit code onto our own. Codes outside 1..=255 (and
/// termination by signal) become 1.
pub(crate) fn mirror_exit_code(code: Option<i32>) -> ExitCode {
    match code {
        Some(0) => ExitCode::SUCCESS,
        Some(code) => u8::try_from(code)
            .ok()
            .filter(|c| *c != 0)
            .map_or(ExitCode::FAILURE, ExitCode::from),
        None => ExitCode::FAILURE,
    }
}
