//! Implementation of the 'themes' subcommand.

use crate::error::CliResult;
use crate::terminal;

use mermaid_render_core::{HelperConfig, ProcessInvoker, check_dependency, list_themes};

use std::process::ExitCode;

/// Asks the helper for its themes and prints them as a numbered list.
pub fn run_themes(helper: &HelperConfig) -> CliResult<ExitCode> {
    check_dependency(&helper.runtime)?;

    let invoker = ProcessInvoker::new(helper.clone());
    let themes = list_themes(&invoker, None)?;

    terminal::print_themes(&themes);
    Ok(ExitCode::SUCCESS)
}
