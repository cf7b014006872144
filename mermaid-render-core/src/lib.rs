//! Core library for rendering Mermaid diagrams through an external helper.
//!
//! The helper (a Node.js script) does the actual rendering; this crate
//! locates and invokes it, discovers diagram sources, and runs batches of
//! renders on a bounded worker pool with per-file failure capture.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mermaid_render_core::{
//!     BatchConfig, HelperConfig, ProcessInvoker, RenderOptions, build_tasks,
//!     find_diagram_files, run_batch,
//! };
//! use std::path::PathBuf;
//!
//! let helper = HelperConfig::resolve(None, None).unwrap();
//! let invoker = ProcessInvoker::new(helper);
//!
//! let config = BatchConfig::new(
//!     PathBuf::from("./diagrams"),
//!     PathBuf::from("./output"),
//!     RenderOptions::default(),
//! );
//! config.validate().unwrap();
//!
//! let files = find_diagram_files(&config.input_dir).unwrap();
//! let tasks = build_tasks(files, &config.output_dir, config.options.clone());
//! let report = run_batch(&invoker, tasks, config.workers, config.timeout, |_| {}).unwrap();
//! println!("{}", report.summary_line());
//! ```

pub mod batch;
pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod render;
pub mod report;
pub mod themes;

// Re-exports for public API
pub use batch::{RenderTask, build_tasks, render_task, run_batch};
pub use config::{
    AsciiLayout, BatchConfig, HelperConfig, OutputFormat, RenderOptions, ThemeColors,
};
pub use discovery::{find_diagram_files, output_path_for};
pub use error::{CoreError, CoreResult};
pub use external::{
    HelperInvocation, HelperInvoker, HelperOutput, ProcessInvoker, check_dependency,
};
pub use render::render_file;
pub use report::{BatchReport, RenderFailure, RenderOutcome, RenderResult};
pub use themes::{list_themes, parse_theme_list};
