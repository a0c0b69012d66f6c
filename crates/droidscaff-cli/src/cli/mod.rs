//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use droidscaff_core::domain::{DependencyStrategy, PermissionTier};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "droidscaff",
    bin_name = "droidscaff",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Clean Architecture scaffolding for existing Android projects",
    long_about = "droidscaff reads the applicationId of an Android app module, \
                  creates domain/data/presentation packages for it, adds \
                  manifest permissions, and inserts common dependencies.",
    after_help = "EXAMPLES:\n\
        \x20 droidscaff                          # interactive session\n\
        \x20 droidscaff run ./MyApp --tier basic --deps inline\n\
        \x20 droidscaff scaffold ./MyApp --package com.example.app\n\
        \x20 droidscaff completions bash > ~/.local/share/bash-completion/completions/droidscaff",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; `run` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Full interactive session: scaffold, permissions, dependencies.
    #[command(
        about = "Run every stage against an app folder",
        after_help = "EXAMPLES:\n\
            \x20 droidscaff run\n\
            \x20 droidscaff run ./MyApp\n\
            \x20 droidscaff run ./MyApp --tier intermediate --deps skip"
    )]
    Run(RunArgs),

    /// Only create the Clean Architecture folders and READMEs.
    #[command(
        about = "Create the layer folders and READMEs",
        after_help = "EXAMPLES:\n\
            \x20 droidscaff scaffold ./MyApp\n\
            \x20 droidscaff scaffold ./MyApp --package com.example.app"
    )]
    Scaffold(ScaffoldArgs),

    /// Only add manifest permissions.
    #[command(
        about = "Add a permission tier to AndroidManifest.xml",
        after_help = "EXAMPLES:\n\
            \x20 droidscaff permissions ./MyApp\n\
            \x20 droidscaff permissions ./MyApp --tier advanced"
    )]
    Permissions(PermissionsArgs),

    /// Only insert dependencies.
    #[command(
        about = "Insert dependencies into the build script or version catalog",
        after_help = "EXAMPLES:\n\
            \x20 droidscaff deps ./MyApp\n\
            \x20 droidscaff deps ./MyApp --strategy catalog"
    )]
    Deps(DepsArgs),

    /// Write a default configuration file.
    #[command(about = "Initialise configuration")]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 droidscaff completions bash > ~/.local/share/bash-completion/completions/droidscaff\n\
            \x20 droidscaff completions zsh  > ~/.zfunc/_droidscaff\n\
            \x20 droidscaff completions fish > ~/.config/fish/completions/droidscaff.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the droidscaff configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 droidscaff config get dependencies.strategy\n\
            \x20 droidscaff config list\n\
            \x20 droidscaff config path"
    )]
    Config(ConfigCommands),
}

// ── run ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Args)]
pub struct RunArgs {
    /// Android project folder (the one containing `app/`). Prompted for when
    /// omitted.
    #[arg(value_name = "PATH", help = "Android project folder")]
    pub path: Option<PathBuf>,

    /// Preselect a permission tier instead of showing the menu.
    #[arg(
        short = 't',
        long = "tier",
        value_name = "TIER",
        help = "Permission tier: basic, beginner, intermediate, advanced (or 1-4)"
    )]
    pub tier: Option<PermissionTier>,

    /// Override the configured dependency strategy.
    #[arg(
        short = 'd',
        long = "deps",
        value_name = "STRATEGY",
        help = "Dependency strategy: ask, inline, catalog, skip"
    )]
    pub deps: Option<DependencyStrategy>,
}

// ── stages ────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ScaffoldArgs {
    #[arg(value_name = "PATH", help = "Android project folder")]
    pub path: PathBuf,

    /// Use this package instead of the build script's applicationId.
    #[arg(
        short = 'p',
        long = "package",
        value_name = "ID",
        help = "Package name, e.g. com.example.app"
    )]
    pub package: Option<String>,
}

#[derive(Debug, Args)]
pub struct PermissionsArgs {
    #[arg(value_name = "PATH", help = "Android project folder")]
    pub path: PathBuf,

    #[arg(
        short = 't',
        long = "tier",
        value_name = "TIER",
        help = "Permission tier: basic, beginner, intermediate, advanced (or 1-4)"
    )]
    pub tier: Option<PermissionTier>,
}

#[derive(Debug, Args)]
pub struct DepsArgs {
    #[arg(value_name = "PATH", help = "Android project folder")]
    pub path: PathBuf,

    #[arg(
        short = 's',
        long = "strategy",
        value_name = "STRATEGY",
        help = "Dependency strategy: ask, inline, catalog, skip"
    )]
    pub strategy: Option<DependencyStrategy>,
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
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

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `permissions.default_tier`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
