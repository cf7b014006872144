// ============================================================================
// mermaid-render-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for the Core Library
//
// This module defines the error type shared by every operation in
// mermaid-render-core. Precondition failures (missing runtime, missing input,
// no diagrams found) surface as `CoreError` values and stop a run before any
// work starts. Per-file render failures inside a batch are NOT errors at this
// level: they are captured as data in a `RenderResult` (see report.rs).
//
// AI-ASSISTANT-INFO: Core error type and result alias

// ---- External crate imports ----
use thiserror::Error;

// ---- Standard library imports ----
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Errors produced by the mermaid-render core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The given input file or directory does not exist (or has the wrong kind).
    #[error("Input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("No .mmd files found in {}", .0.display())]
    NoFilesFound(PathBuf),

    /// The runtime needed by the rendering helper is not on the PATH.
    #[error("Required dependency '{0}' not found in PATH")]
    DependencyNotFound(String),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    /// The helper ran but exited non-zero; carries its stderr verbatim.
    #[error("Command '{command}' failed with exit code {code}: {stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("Command '{0}' timed out after {1:?}")]
    Timeout(String, Duration),

    #[error("Could not parse theme list: {0}")]
    ThemeListParse(#[from] serde_json::Error),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),

    #[error("{0}")]
    OperationFailed(String),
}

/// Result alias used across the core library.
pub type CoreResult<T> = Result<T, CoreError>;
