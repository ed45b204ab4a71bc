//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and defaults. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser};

/// Main CLI entry-point.
///
/// The invocation shape is fixed: a positional plugin name, a required
/// `--path`, and an optional `--components` list. Unknown flags and missing
/// arguments are clap usage errors.
#[derive(Debug, Parser)]
#[command(
    name    = "plugsmith",
    bin_name = "plugsmith",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f50c} Scaffold Claude Code plugins",
    long_about = "Plugsmith creates a new Claude Code plugin directory with a \
                  manifest and starter files for the components you select.",
    after_help = "COMPONENTS (comma-separated, default: all):\n\
        \x20 commands, agents, skills, hooks, mcp, lsp, scripts\n\n\
        PLUGIN NAME REQUIREMENTS:\n\
        \x20 kebab-case identifier (lowercase letters, digits, hyphens),\n\
        \x20 starting with a letter, at most 64 characters\n\n\
        EXAMPLES:\n\
        \x20 plugsmith my-plugin --path ./plugins\n\
        \x20 plugsmith my-plugin --path . --components commands,hooks,mcp",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Flags that tune output and logging.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Plugin name in kebab-case (e.g. 'my-plugin').
    #[arg(value_name = "PLUGIN_NAME")]
    pub name: String,

    /// Parent directory for the new plugin. Created if absent; the plugin
    /// directory itself must not yet exist.
    #[arg(long = "path", value_name = "DIR", help = "Destination parent directory")]
    pub path: PathBuf,

    /// Comma-separated component kinds to scaffold.
    #[arg(
        long = "components",
        value_name = "LIST",
        help = "Component kinds to include (default: all)"
    )]
    pub components: Option<String>,
}

/// Global arguments for all invocations.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`). Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>).
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Configuration file path.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,
}

// ── tests ─────────────────────────────────────────────────────────────────────
