//! Helper argument builder
//!
//! The helper takes a verb followed by `--key value` pairs. Boolean options
//! are passed as `--flag true` and only when enabled; optional values are
//! omitted entirely when unset so the helper's own defaults apply.

use crate::config::RenderOptions;

use std::path::Path;

/// Builder for helper argument lists.
#[derive(Debug, Default)]
pub struct HelperArgs {
    args: Vec<String>,
}

impl HelperArgs {
    /// Starts an argument list with the given verb.
    #[must_use]
    pub fn verb(verb: &str) -> Self {
        Self {
            args: vec![verb.to_string()],
        }
    }

    /// Adds `--key value`.
    #[must_use]
    pub fn flag(mut self, key: &str, value: impl Into<String>) -> Self {
        self.args.push(key.to_string());
        self.args.push(value.into());
        self
    }

    /// Adds `--key value` when `value` is set.
    #[must_use]
    pub fn optional(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.flag(key, v),
            None => self,
        }
    }

    /// Adds `--key true` when `enabled`.
    #[must_use]
    pub fn switch(self, key: &str, enabled: bool) -> Self {
        if enabled { self.flag(key, "true") } else { self }
    }

    #[must_use]
    pub fn build(self) -> Vec<String> {
        self.args
    }

    /// Arguments for rendering `input`, writing to `output` or to the helper's
    /// stdout when `output` is `None`.
    #[must_use]
    pub fn render(input: &Path, output: Option<&Path>, options: &RenderOptions) -> Vec<String> {
        let mut builder = Self::verb("render")
            .flag("--input", input.to_string_lossy())
            .optional(
                "--output",
                output.map(|p| p.to_string_lossy()).as_deref(),
            )
            .flag("--format", options.format.as_str())
            .optional("--theme", options.theme.as_deref());

        for (key, value) in options.colors.flags() {
            builder = builder.flag(key, value);
        }

        builder = builder
            .optional("--font", options.font.as_deref())
            .switch("--transparent", options.transparent)
            .switch("--use-ascii", options.use_ascii);

        if let Some(layout) = options.ascii_layout {
            builder = builder
                .flag("--padding-x", layout.padding_x.to_string())
                .flag("--padding-y", layout.padding_y.to_string())
                .flag("--box-border-padding", layout.box_border_padding.to_string());
        }

        builder.build()
    }

    /// Arguments for the theme listing verb.
    #[must_use]
    pub fn list_themes() -> Vec<String> {
        Self::verb("list-themes").build()
    }
}
