//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "eclipath",
    bin_name = "eclipath",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Resolve the classpath of Eclipse Java projects",
    long_about = "eclipath reads .project and .classpath files, follows project \
                  references and user libraries, and prints everything a \
                  project needs to build.",
    after_help = "EXAMPLES:\n\
        \x20 eclipath --repo ~/src/product resolve App\n\
        \x20 eclipath --repo ~/src/product classpath App --separator ';'\n\
        \x20 eclipath --workspace ~/eclipse-workspace deps App\n\
        \x20 eclipath completions bash > /usr/share/bash-completion/completions/eclipath",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a project and show everything it needs to build.
    #[command(
        visible_alias = "r",
        about = "Resolve a project",
        after_help = "EXAMPLES:\n\
            \x20 eclipath resolve App\n\
            \x20 eclipath resolve App --format json"
    )]
    Resolve(ResolveArgs),

    /// Print a project's classpath on one line.
    #[command(
        visible_alias = "cp",
        about = "Print the classpath of a project",
        after_help = "EXAMPLES:\n\
            \x20 eclipath classpath App\n\
            \x20 javac -cp \"$(eclipath classpath App)\" Main.java"
    )]
    Classpath(ClasspathArgs),

    /// Print a project and every project it references, transitively.
    #[command(
        about = "List the projects a project depends on",
        after_help = "EXAMPLES:\n\
            \x20 eclipath deps App"
    )]
    Deps(DepsArgs),

    /// List the projects known to the configured repositories.
    #[command(
        visible_alias = "ls",
        about = "List known projects",
        after_help = "EXAMPLES:\n\
            \x20 eclipath --repo ~/src/product projects"
    )]
    Projects,

    /// Initialise an eclipath configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 eclipath init          # default location\n\
            \x20 eclipath init --force  # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 eclipath completions bash > ~/.local/share/bash-completion/completions/eclipath\n\
            \x20 eclipath completions zsh  > ~/.zfunc/_eclipath\n\
            \x20 eclipath completions fish > ~/.config/fish/completions/eclipath.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the eclipath configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 eclipath config get catalog_mode\n\
            \x20 eclipath config list\n\
            \x20 eclipath config path"
    )]
    Config(ConfigCommands),
}

// ── resolve ───────────────────────────────────────────────────────────────────

/// Arguments for `eclipath resolve`.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Project name, as written in its `.project` file.
    #[arg(value_name = "PROJECT")]
    pub project: String,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: ReportFormat,
}

/// Output format for `resolve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Sectioned, human-readable report.
    Text,
    /// The resolved project as a JSON object.
    Json,
}

// ── classpath ─────────────────────────────────────────────────────────────────

/// Arguments for `eclipath classpath`.
#[derive(Debug, Args)]
pub struct ClasspathArgs {
    /// Project name.
    #[arg(value_name = "PROJECT")]
    pub project: String,

    /// Separator placed between classpath elements.
    ///
    /// Defaults to the platform's path-list separator.
    #[arg(short = 's', long = "separator", value_name = "SEP")]
    pub separator: Option<String>,
}

// ── deps ──────────────────────────────────────────────────────────────────────

/// Arguments for `eclipath deps`.
#[derive(Debug, Args)]
pub struct DepsArgs {
    /// Project name.
    #[arg(value_name = "PROJECT")]
    pub project: String,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `eclipath init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `eclipath completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `eclipath config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `test_archives.cache_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
