// mermaid-render-cli/src/lib.rs
//
// Library portion of the mermaid-render CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod terminal;

// Re-export items needed by the binary or integration tests
pub use cli::{BatchArgs, Cli, Commands, HelperLocation, RenderArgs};
pub use commands::batch::run_batch;
pub use commands::render::run_render;
pub use commands::themes::run_themes;
pub use error::CliResult;

use mermaid_render_core::HelperConfig;
use std::process::ExitCode;

/// Resolves the helper location once and dispatches to the selected command.
pub fn run(cli: Cli) -> CliResult<ExitCode> {
    let helper = HelperConfig::resolve(cli.helper.runtime, cli.helper.script)?;

    match cli.command {
        Commands::Render(args) => run_render(&helper, args),
        Commands::Batch(args) => run_batch(&helper, args),
        Commands::Themes => run_themes(&helper),
    }
}
