//! Implementation of the 'render' subcommand.
//!
//! Renders a single diagram. With `--output` the helper writes the file and
//! prints a confirmation; without it the rendered SVG or ASCII art is printed
//! to stdout.

use crate::cli::RenderArgs;
use crate::commands::mirror_exit_code;
use crate::error::{CliErrorContext, CliResult};
use crate::terminal;

use mermaid_render_core::{
    AsciiLayout, CoreError, HelperConfig, ProcessInvoker, RenderOptions, ThemeColors,
    check_dependency, render_file,
};

use std::fs;
use std::process::ExitCode;
use std::time::Duration;

use log::debug;

/// Builds the render snapshot from the command-line flags.
pub fn render_options(args: &RenderArgs) -> RenderOptions {
    RenderOptions {
        format: args.format.into(),
        theme: args.theme.clone(),
        colors: ThemeColors {
            bg: args.bg.clone(),
            fg: args.fg.clone(),
            line: args.line.clone(),
            accent: args.accent.clone(),
            muted: args.muted.clone(),
            surface: args.surface.clone(),
            border: args.border.clone(),
        },
        font: Some(args.font.clone()),
        transparent: args.transparent,
        use_ascii: args.use_ascii,
        ascii_layout: Some(AsciiLayout {
            padding_x: args.padding_x,
            padding_y: args.padding_y,
            box_border_padding: args.box_border_padding,
        }),
    }
}

/// Runs the helper once and returns the exit code to terminate with.
pub fn run_render(helper: &HelperConfig, args: RenderArgs) -> CliResult<ExitCode> {
    check_dependency(&helper.runtime)?;

    if !args.input.is_file() {
        return Err(CoreError::InputNotFound(args.input));
    }

    if let Some(parent) = args
        .output
        .as_deref()
        .and_then(|p| p.parent())
        .filter(|p| !p.as_os_str().is_empty())
    {
        fs::create_dir_all(parent).cli_with_context(|| {
            format!("Failed to create output directory '{}'", parent.display())
        })?;
    }

    let options = render_options(&args);
    let timeout = args.timeout.map(Duration::from_secs);
    debug!("Rendering {} with {:?} (timeout: {:?})", args.input.display(), options, timeout);

    let invoker = ProcessInvoker::new(helper.clone());
    let output = render_file(&invoker, &args.input, args.output.as_deref(), &options, timeout)?;

    if output.success() {
        terminal::print_line(output.stdout.trim_end_matches(['\n', '\r']));
        Ok(ExitCode::SUCCESS)
    } else {
        terminal::print_error(output.stderr.trim_end());
        Ok(mirror_exit_code(output.exit_code))
    }
}
