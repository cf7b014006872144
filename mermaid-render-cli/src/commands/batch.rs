//! Implementation of the 'batch' subcommand.
//!
//! This module handles rendering every `.mmd` file of a directory: pre-flight
//! validation, task construction, delegation to the core worker pool, and the
//! final report. Pre-flight failures abort before any helper is started; per
//! file failures are collected and only change the exit code.

use crate::cli::BatchArgs;
use crate::error::{CliErrorContext, CliResult};
use crate::terminal;

use mermaid_render_core::{
    BatchConfig, CoreError, HelperConfig, ProcessInvoker, RenderOptions, ThemeColors,
    build_tasks, check_dependency, find_diagram_files,
};

use std::fs;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use log::{debug, info};

/// Creates and validates the batch configuration from CLI arguments.
pub fn create_batch_config(args: BatchArgs) -> CliResult<BatchConfig> {
    let options = RenderOptions {
        format: args.format.into(),
        theme: args.theme,
        colors: ThemeColors {
            bg: args.bg,
            fg: args.fg,
            ..Default::default()
        },
        font: None,
        transparent: args.transparent,
        use_ascii: args.use_ascii,
        ascii_layout: None,
    };

    let mut config = BatchConfig::new(args.input_dir, args.output_dir, options);
    config.workers = args.workers;
    config.timeout = Some(Duration::from_secs(args.timeout));
    config.validate()?;
    Ok(config)
}

/// Renders the whole directory and returns exit code 0 only if every file rendered.
pub fn run_batch(helper: &HelperConfig, args: BatchArgs) -> CliResult<ExitCode> {
    let started = Instant::now();
    let config = create_batch_config(args)?;

    // --- Pre-flight ---
    if !config.input_dir.is_dir() {
        return Err(CoreError::InputNotFound(config.input_dir));
    }

    check_dependency(&helper.runtime)?;

    fs::create_dir_all(&config.output_dir).cli_with_context(|| {
        format!(
            "Failed to create output directory '{}'",
            config.output_dir.display()
        )
    })?;

    let files = find_diagram_files(&config.input_dir)?;
    terminal::print_line(format!("Found {} diagram(s) to render...", files.len()));

    // --- Dispatch ---
    let total = files.len();
    let tasks = build_tasks(files, &config.output_dir, config.options.clone());
    let invoker = ProcessInvoker::new(helper.clone());
    let progress = terminal::batch_progress(total);

    debug!(
        "Batch: {} file(s) as {}, {} worker(s), timeout {:?}",
        total, config.options.format, config.workers, config.timeout
    );

    let report = mermaid_render_core::run_batch(
        &invoker,
        tasks,
        config.workers,
        config.timeout,
        |result| {
            progress.suspend(|| terminal::print_result(result));
            progress.inc(1);
        },
    )?;
    progress.finish_and_clear();

    // --- Report ---
    terminal::print_report(&report);
    info!(
        "Batch finished at {} in {:.1}s",
        crate::logging::get_timestamp(),
        started.elapsed().as_secs_f64()
    );

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use mermaid_render_core::OutputFormat;

    fn parse(args: &[&str]) -> BatchArgs {
        match Cli::parse_from(args).command {
            Commands::Batch(args) => args,
            other => panic!("Expected Batch command, got {other:?}"),
        }
    }

    #[test]
    fn test_create_batch_config() {
        let args = parse(&[
            "mermaid-render", "batch", "-i", "in", "-o", "out", "-f", "ascii", "--use-ascii",
            "--bg", "#fff", "-w", "8", "--timeout", "5",
        ]);
        let config = create_batch_config(args).unwrap();
        assert_eq!(config.workers, 8);
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.options.format, OutputFormat::Ascii);
        assert!(config.options.use_ascii);
        assert_eq!(config.options.colors.bg.as_deref(), Some("#fff"));
        assert!(config.options.font.is_none());
        assert!(config.options.ascii_layout.is_none());
    }
}
