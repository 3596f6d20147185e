//! CLI argument parsing via clap.

use clap::{Parser, Subcommand, ValueEnum};

/// Resolve the active theme and translate design tokens for the external
/// component library.
#[derive(Debug, Parser)]
#[command(name = "theme-bridge", version)]
pub struct Args {
    /// Path to config file (default: ./theme-bridge.toml or ~/.config/theme-bridge/theme-bridge.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Log debug events to stderr (overridden by RUST_LOG).
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Show the resolved theme, mode and template id (default).
    Status,
    /// List the theme catalog grouped by category.
    Themes {
        /// Only show one category (industry, geographic, general).
        #[arg(long)]
        category: Option<String>,
    },
    /// List themes recommended for a use case.
    Recommend {
        /// Free-text use case, e.g. "patient portal".
        #[arg(num_args = 1.., required = true)]
        use_case: Vec<String>,
    },
    /// Switch and persist the current theme.
    Set {
        theme: String,
    },
    /// Change the mode preference.
    Mode {
        #[arg(value_enum)]
        mode: ModeArg,
    },
    /// Translate internal token names for one category.
    Translate {
        category: String,
        #[arg(num_args = 1.., required = true)]
        tokens: Vec<String>,
    },
    /// Show mapping-table coverage per category.
    Progress,
    /// List vocabulary tokens with no mapping yet.
    Unmigrated {
        category: String,
    },
    /// Run health checks; exits 1 when any check fails.
    Doctor,
    /// Clear a preference-load error.
    Retry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Light,
    Dark,
    System,
    Toggle,
}

/// Default `tracing` filter when `RUST_LOG` is unset.
pub fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "theme_bridge=debug"
    } else {
        "warn"
    }
}
