//! Single-file rendering.
//!
//! A thin pass-through: check the input exists, build the full argument list
//! and invoke the helper once. The caller decides what to do with the output
//! and mirrors the helper's exit code.

use crate::config::RenderOptions;
use crate::error::{CoreError, CoreResult};
use crate::external::{HelperArgs, HelperInvocation, HelperInvoker, HelperOutput};

use std::path::Path;
use std::time::Duration;

/// Renders `input` once. With `output` set the helper writes the file; without
/// it the rendered diagram comes back on the helper's stdout.
///
/// # Errors
///
/// * `CoreError::InputNotFound` - `input` is not an existing file
/// * Any error from the invoker (spawn failure, timeout)
///
/// A helper that runs but exits non-zero is reported through
/// `HelperOutput::exit_code`, not as an error.
pub fn render_file<I>(
    invoker: &I,
    input: &Path,
    output: Option<&Path>,
    options: &RenderOptions,
    timeout: Option<Duration>,
) -> CoreResult<HelperOutput>
where
    I: HelperInvoker + ?Sized,
{
    if !input.is_file() {
        return Err(CoreError::InputNotFound(input.to_path_buf()));
    }

    let invocation = HelperInvocation::new(HelperArgs::render(input, output, options), timeout);
    invoker.invoke(&invocation)
}
