// ============================================================================
// mermaid-render-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: Core Configuration Structures and Constants
//
// This module defines the configuration handed to the core library by its
// consumers (the CLI). Nothing here is global: the helper location, the
// render options and the batch settings are resolved once at start-up and
// passed explicitly into every operation.
//
// KEY COMPONENTS:
// - OutputFormat: SVG image or ASCII/Unicode text art
// - ThemeColors / AsciiLayout / RenderOptions: the render snapshot sent to the helper
// - HelperConfig: runtime executable + helper script location
// - BatchConfig: directories, worker count and per-file timeout for batch runs
//
// AI-ASSISTANT-INFO: Configuration structures and constants for mermaid-render-core

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// DEFAULT CONSTANTS
// ============================================================================

/// Extension (without the dot) of diagram source files picked up by discovery.
pub const DIAGRAM_EXTENSION: &str = "mmd";

/// Runtime used to execute the helper script when none is configured.
pub const DEFAULT_RUNTIME: &str = "node";

/// File name of the helper script looked up next to the running executable.
pub const HELPER_SCRIPT_NAME: &str = "render_helper.mjs";

/// Number of helper processes a batch keeps in flight by default.
pub const DEFAULT_WORKERS: usize = 4;

/// Per-file timeout for batch rendering.
pub const DEFAULT_BATCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Font family requested by the single-file renderer unless overridden.
pub const DEFAULT_FONT: &str = "Inter";

pub const DEFAULT_PADDING_X: u32 = 5;
pub const DEFAULT_PADDING_Y: u32 = 5;
pub const DEFAULT_BOX_BORDER_PADDING: u32 = 1;

// ============================================================================
// OUTPUT FORMAT
// ============================================================================

/// Output format produced by the helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Scalable vector graphics.
    #[default]
    Svg,
    /// ASCII or Unicode box-drawing text art.
    Ascii,
}

impl OutputFormat {
    /// Value passed to the helper's `--format` flag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Ascii => "ascii",
        }
    }

    /// Extension (without the dot) of files written in this format.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Ascii => "txt",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// RENDER OPTIONS
// ============================================================================

/// Color overrides forwarded to the helper. Unset colors are left to the
/// helper's own defaults (or to the selected theme).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeColors {
    /// Background color
    pub bg: Option<String>,
    /// Foreground (text) color
    pub fg: Option<String>,
    /// Edge/connector color
    pub line: Option<String>,
    /// Arrow heads and highlights
    pub accent: Option<String>,
    /// Secondary text and labels
    pub muted: Option<String>,
    /// Node fill tint
    pub surface: Option<String>,
    /// Node stroke
    pub border: Option<String>,
}

impl ThemeColors {
    /// Returns `(flag, value)` pairs for every color that is set, in the
    /// order the helper documents them.
    pub fn flags(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("--bg", &self.bg),
            ("--fg", &self.fg),
            ("--line", &self.line),
            ("--accent", &self.accent),
            ("--muted", &self.muted),
            ("--surface", &self.surface),
            ("--border", &self.border),
        ]
        .into_iter()
        .filter_map(|(flag, value)| value.as_deref().map(|v| (flag, v)))
    }
}

/// Spacing parameters for ASCII output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiLayout {
    /// Horizontal spacing between nodes
    pub padding_x: u32,
    /// Vertical spacing between nodes
    pub padding_y: u32,
    /// Padding inside node boxes
    pub box_border_padding: u32,
}

impl Default for AsciiLayout {
    fn default() -> Self {
        Self {
            padding_x: DEFAULT_PADDING_X,
            padding_y: DEFAULT_PADDING_Y,
            box_border_padding: DEFAULT_BOX_BORDER_PADDING,
        }
    }
}

/// Everything the helper needs to know about how to render a diagram.
///
/// A batch shares one snapshot across all of its tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    /// Built-in theme name (e.g. `tokyo-night`); takes precedence over colors in the helper
    pub theme: Option<String>,
    pub colors: ThemeColors,
    pub font: Option<String>,
    /// Transparent background (SVG only)
    pub transparent: bool,
    /// Pure ASCII instead of Unicode box drawing (ASCII only)
    pub use_ascii: bool,
    /// ASCII spacing; `None` leaves the helper defaults in place
    pub ascii_layout: Option<AsciiLayout>,
}

// ============================================================================
// HELPER LOCATION
// ============================================================================

/// Location of the external rendering helper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperConfig {
    /// Executable that runs the script (normally `node`)
    pub runtime: String,
    /// Path to the helper script
    pub script: PathBuf,
}

impl HelperConfig {
    pub fn new(runtime: impl Into<String>, script: impl Into<PathBuf>) -> Self {
        Self {
            runtime: runtime.into(),
            script: script.into(),
        }
    }

    /// Resolves the helper location from explicit overrides, falling back to
    /// `node` and to `render_helper.mjs` next to the running executable.
    pub fn resolve(runtime: Option<String>, script: Option<PathBuf>) -> CoreResult<Self> {
        let runtime = runtime
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RUNTIME.to_string());

        let script = match script {
            Some(path) => path,
            None => {
                let exe = std::env::current_exe()?;
                let dir = exe.parent().ok_or_else(|| {
                    CoreError::Config(format!(
                        "Could not determine directory of executable '{}'",
                        exe.display()
                    ))
                })?;
                dir.join(HELPER_SCRIPT_NAME)
            }
        };

        log::debug!("Helper resolved: {} {}", runtime, script.display());
        Ok(Self { runtime, script })
    }
}

// ============================================================================
// BATCH CONFIGURATION
// ============================================================================

/// Settings for a batch run over a directory of diagrams.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub options: RenderOptions,
    /// Maximum number of helper processes in flight at once
    pub workers: usize,
    /// Per-file timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl BatchConfig {
    /// Creates a batch configuration with default worker count and timeout.
    pub fn new(input_dir: PathBuf, output_dir: PathBuf, options: RenderOptions) -> Self {
        Self {
            input_dir,
            output_dir,
            options,
            workers: DEFAULT_WORKERS,
            timeout: Some(DEFAULT_BATCH_TIMEOUT),
        }
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.workers == 0 {
            return Err(CoreError::Config(
                "Worker count must be at least 1".to_string(),
            ));
        }
        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(CoreError::Config(
                "Timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
