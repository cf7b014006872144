// mermaid-render-cli/src/main.rs
//
// Entry point for the `mermaid-render` binary: parses arguments, sets up
// logging, runs the selected command and turns its outcome into the process
// exit code. Fatal errors are printed once, here, as `Error: <message>`.

use clap::Parser;
use mermaid_render_cli::{Cli, logging, terminal};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose);
    log::debug!("Run started: {}", logging::get_timestamp());

    match mermaid_render_cli::run(cli) {
        Ok(code) => code,
        Err(e) => {
            terminal::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
