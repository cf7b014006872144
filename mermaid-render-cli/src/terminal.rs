// ============================================================================
// mermaid-render-cli/src/terminal.rs
// ============================================================================
//
// TERMINAL OUTPUT: UI Components and Styling
//
// Everything the user is meant to read goes through this module: per-file
// result lines, batch summaries, theme listings and fatal errors. Results and
// summaries go to stdout, failures and errors to stderr. Color is only used
// when the stream is a terminal and NO_COLOR is unset.
//
// AI-ASSISTANT-INFO: Terminal UI components and styling for the CLI

// ---- External crate imports ----
use console::style;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use mermaid_render_core::{BatchReport, RenderResult};
use owo_colors::OwoColorize;

// ---- Standard library imports ----
use std::fmt::Display;
use std::io::IsTerminal;

// ============================================================================
// STYLING CONSTANTS
// ============================================================================

/// Styling constants for terminal output
pub mod styling {
    pub const SUCCESS_SYMBOL: &str = "✓";
    pub const ERROR_SYMBOL: &str = "✗";
    pub const FAILURE_INDENT: &str = "  - ";
}

// ============================================================================
// COLOR DETECTION
// ============================================================================

fn no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

fn stdout_color() -> bool {
    !no_color() && std::io::stdout().is_terminal()
}

fn stderr_color() -> bool {
    !no_color() && std::io::stderr().is_terminal()
}

// ============================================================================
// GENERAL OUTPUT
// ============================================================================

/// Prints a plain line to stdout.
pub fn print_line(message: impl Display) {
    println!("{message}");
}

/// Prints a bold heading line to stdout.
pub fn print_heading(title: &str) {
    if stdout_color() {
        println!("{}", style(title).bold());
    } else {
        println!("{title}");
    }
}

/// Prints a fatal error to stderr as `Error: <message>`.
pub fn print_error(message: impl Display) {
    if stderr_color() {
        eprintln!("{} {}", "Error:".red().bold(), message);
    } else {
        eprintln!("Error: {message}");
    }
}

// ============================================================================
// BATCH OUTPUT
// ============================================================================

/// Prints a single completed result: `✓ name` to stdout or `✗ name: error` to stderr.
pub fn print_result(result: &RenderResult) {
    match result.error() {
        None => {
            if stdout_color() {
                println!("{} {}", styling::SUCCESS_SYMBOL.green(), result.filename);
            } else {
                println!("{} {}", styling::SUCCESS_SYMBOL, result.filename);
            }
        }
        Some(error) => {
            if stderr_color() {
                eprintln!(
                    "{} {}: {}",
                    styling::ERROR_SYMBOL.red(),
                    style(&result.filename).bold(),
                    error
                );
            } else {
                eprintln!("{} {}: {}", styling::ERROR_SYMBOL, result.filename, error);
            }
        }
    }
}

/// Prints the final summary line and, if any file failed, the itemized failures.
pub fn print_report(report: &BatchReport) {
    println!();
    if stdout_color() {
        let summary = report.summary_line();
        if report.is_success() {
            println!("{}", summary.green());
        } else {
            println!("{}", summary.yellow());
        }
    } else {
        println!("{}", report.summary_line());
    }

    if report.failed() == 0 {
        return;
    }

    println!();
    if stdout_color() {
        println!("{}", format!("{} failed:", report.failed()).red().bold());
    } else {
        println!("{} failed:", report.failed());
    }
    for failure in report.failures() {
        println!("{}{}: {}", styling::FAILURE_INDENT, failure.filename, failure.error);
    }
}

/// Progress bar for a batch, drawn on stderr. Hidden when stderr is not a terminal.
pub fn batch_progress(total: usize) -> ProgressBar {
    let target = if std::io::stderr().is_terminal() {
        ProgressDrawTarget::stderr()
    } else {
        ProgressDrawTarget::hidden()
    };
    let bar = ProgressBar::with_draw_target(Some(total as u64), target);
    if let Ok(bar_style) =
        ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} ({elapsed})")
    {
        bar.set_style(bar_style.progress_chars("#>."));
    }
    bar
}

// ============================================================================
// THEME OUTPUT
// ============================================================================

/// Prints a numbered theme listing followed by a total and a usage hint.
pub fn print_themes(themes: &[String]) {
    print_heading("Available Beautiful-Mermaid Themes:");
    println!();
    for (i, theme) in themes.iter().enumerate() {
        println!("{:2}. {}", i + 1, theme);
    }
    println!();
    println!("Total: {} themes", themes.len());
    println!();
    println!("Usage:");
    println!("  mermaid-render render --input diagram.mmd --theme <theme-name> --output output.svg");
}
