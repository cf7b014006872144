//! Theme listing.
//!
//! The helper's `list-themes` verb prints a JSON array of theme names.

use crate::error::{CoreError, CoreResult};
use crate::external::{HelperArgs, HelperInvocation, HelperInvoker};

use std::time::Duration;

/// Parses the helper's theme list (a JSON array of strings).
pub fn parse_theme_list(stdout: &str) -> CoreResult<Vec<String>> {
    Ok(serde_json::from_str(stdout.trim())?)
}

/// Asks the helper for its built-in themes.
///
/// # Errors
///
/// * `CoreError::CommandFailed` - the helper exited non-zero; carries its stderr
/// * `CoreError::ThemeListParse` - stdout was not a JSON array of strings
/// * Any error from the invoker (spawn failure, timeout)
pub fn list_themes<I>(invoker: &I, timeout: Option<Duration>) -> CoreResult<Vec<String>>
where
    I: HelperInvoker + ?Sized,
{
    let invocation = HelperInvocation::new(HelperArgs::list_themes(), timeout);
    let output = invoker.invoke(&invocation)?;

    if !output.success() {
        return Err(CoreError::CommandFailed {
            command: "list-themes".to_string(),
            code: output.exit_code.unwrap_or(-1),
            stderr: output.stderr.trim_end().to_string(),
        });
    }

    let themes = parse_theme_list(&output.stdout)?;
    log::debug!("Helper reported {} theme(s)", themes.len());
    Ok(themes)
}
