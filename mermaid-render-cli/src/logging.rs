// ============================================================================
// mermaid-render-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger Setup for the CLI
//
// User-facing output (results, summaries, theme lists) is printed by the
// terminal module. The `log` macros carry diagnostics only and go to stderr
// through env_logger:
// - default: info
// - --verbose: debug
// - RUST_LOG overrides both
//
// Info lines are written as plain messages, everything else is prefixed
// with its level.
//
// AI-ASSISTANT-INFO: Logging initialization and helpers

use std::io::Write;

/// Initializes env_logger. Safe to call once per process.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };

    let result = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .format(|buf, record| {
        if record.level() == log::Level::Info {
            writeln!(buf, "{}", record.args())
        } else {
            writeln!(buf, "[{}] {}", record.level(), record.args())
        }
    })
    .try_init();

    if let Err(e) = result {
        eprintln!("Warning: logger already initialized: {e}");
    }
}

/// Returns the current local timestamp formatted as "YYYY-MM-DD HH:MM:SS".
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
