// mermaid-render-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::builder::TypedValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use mermaid_render_core::OutputFormat;
use mermaid_render_core::config::{
    DEFAULT_BOX_BORDER_PADDING, DEFAULT_FONT, DEFAULT_PADDING_X, DEFAULT_PADDING_Y,
};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "mermaid-render: Render Mermaid diagrams as SVG or ASCII art",
    long_about = "Renders Mermaid diagrams through the beautiful-mermaid Node.js helper, one file at a time or in parallel batches."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub helper: HelperLocation,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

/// Where to find the rendering helper.
#[derive(Args, Debug, Clone, Default)]
pub struct HelperLocation {
    /// Runtime used to execute the helper script (default: node)
    #[arg(long, global = true, value_name = "PROGRAM", env = "MERMAID_RENDER_RUNTIME")]
    pub runtime: Option<String>,

    /// Path to the helper script (default: render_helper.mjs next to this executable)
    #[arg(long = "helper", global = true, value_name = "SCRIPT", env = "MERMAID_RENDER_HELPER")]
    pub script: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Renders a single Mermaid file as SVG or ASCII art
    Render(RenderArgs),
    /// Renders every .mmd file in a directory in parallel
    Batch(BatchArgs),
    /// Lists the helper's built-in themes
    Themes,
}

/// Output format accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatArg {
    #[default]
    Svg,
    Ascii,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Svg => OutputFormat::Svg,
            FormatArg::Ascii => OutputFormat::Ascii,
        }
    }
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Input Mermaid file (.mmd)
    #[arg(short = 'i', long = "input", required = true, value_name = "FILE")]
    pub input: PathBuf,

    /// Output file (SVG or text). If omitted, prints to stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = FormatArg::Svg)]
    pub format: FormatArg,

    /// Built-in theme name (e.g., tokyo-night, dracula, github-dark)
    #[arg(short = 't', long, value_name = "NAME")]
    pub theme: Option<String>,

    // --- Color Overrides ---
    /// Background color (hex)
    #[arg(long, value_name = "HEX")]
    pub bg: Option<String>,

    /// Foreground color (hex)
    #[arg(long, value_name = "HEX")]
    pub fg: Option<String>,

    /// Edge/connector color (hex)
    #[arg(long, value_name = "HEX")]
    pub line: Option<String>,

    /// Arrow heads and highlights color (hex)
    #[arg(long, value_name = "HEX")]
    pub accent: Option<String>,

    /// Secondary text and labels color (hex)
    #[arg(long, value_name = "HEX")]
    pub muted: Option<String>,

    /// Node fill tint color (hex)
    #[arg(long, value_name = "HEX")]
    pub surface: Option<String>,

    /// Node stroke color (hex)
    #[arg(long, value_name = "HEX")]
    pub border: Option<String>,

    /// Font family
    #[arg(long, value_name = "FAMILY", default_value = DEFAULT_FONT)]
    pub font: String,

    /// Render with transparent background (SVG only)
    #[arg(long)]
    pub transparent: bool,

    /// Use pure ASCII instead of Unicode (ASCII format only)
    #[arg(long)]
    pub use_ascii: bool,

    // --- ASCII Layout ---
    /// Horizontal spacing between nodes (ASCII only)
    #[arg(long, value_name = "N", default_value_t = DEFAULT_PADDING_X)]
    pub padding_x: u32,

    /// Vertical spacing between nodes (ASCII only)
    #[arg(long, value_name = "N", default_value_t = DEFAULT_PADDING_Y)]
    pub padding_y: u32,

    /// Padding inside node boxes (ASCII only)
    #[arg(long, value_name = "N", default_value_t = DEFAULT_BOX_BORDER_PADDING)]
    pub box_border_padding: u32,

    /// Optional: Kill the helper after this many seconds (default: wait indefinitely)
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

#[derive(Parser, Debug)]
pub struct BatchArgs {
    /// Input directory containing .mmd files
    #[arg(short = 'i', long = "input-dir", required = true, value_name = "DIR")]
    pub input_dir: PathBuf,

    /// Output directory for rendered files
    #[arg(short = 'o', long = "output-dir", required = true, value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = FormatArg::Svg)]
    pub format: FormatArg,

    /// Built-in theme name
    #[arg(short = 't', long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Background color (hex)
    #[arg(long, value_name = "HEX")]
    pub bg: Option<String>,

    /// Foreground color (hex)
    #[arg(long, value_name = "HEX")]
    pub fg: Option<String>,

    /// Render with transparent background (SVG only)
    #[arg(long)]
    pub transparent: bool,

    /// Use pure ASCII instead of Unicode (ASCII format only)
    #[arg(long)]
    pub use_ascii: bool,

    /// Number of parallel workers
    #[arg(
        short = 'w',
        long,
        value_name = "COUNT",
        env = "MERMAID_RENDER_WORKERS",
        default_value_t = mermaid_render_core::config::DEFAULT_WORKERS,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    pub workers: usize,

    /// Per-file timeout in seconds
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = mermaid_render_core::config::DEFAULT_BATCH_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,
}
