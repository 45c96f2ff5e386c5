//! Clap derive structures for the `fppctl` CLI.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// fppctl -- drive Falcon Player devices from the command line
#[derive(Debug, Parser)]
#[command(
    name = "fppctl",
    version,
    about = "Control Falcon Player (FPP) lighting devices from the command line",
    long_about = "Talks to the FPP HTTP API: pixel overlay models, playlists,\n\
        the scheduler, daemon status, media files and plugins.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Device profile to use
    #[arg(long, short = 'p', env = "FPP_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Device address (overrides profile), e.g. 10.0.0.249 or http://fpp.local
    #[arg(long, short = 'H', env = "FPP_HOST", global = true)]
    pub host: Option<String>,

    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "FPP_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// Request timeout in seconds [default: from config, else 10]
    #[arg(long, env = "FPP_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(flatten)]
    Device(DeviceCommand),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Commands that talk to a device.
#[derive(Debug, Subcommand)]
pub enum DeviceCommand {
    /// Pixel overlay models
    #[command(alias = "m")]
    Models(ModelsArgs),

    /// List fonts available for overlay text
    Fonts,

    /// Playlists
    #[command(alias = "pl")]
    Playlists(PlaylistsArgs),

    /// The scheduler
    Schedule(ScheduleArgs),

    /// Show daemon status
    Status,

    /// List files in a media directory (sequences, music, videos, ...)
    Files {
        /// Directory name
        dir: String,
    },

    /// List installed plugins
    Plugins {
        /// Exit with status 4 unless this plugin is installed
        #[arg(long)]
        contains: Option<String>,
    },

    /// Show configured channel outputs
    Outputs,

    /// Print a raw configuration file as JSON
    ConfigFile {
        /// File name, e.g. channeloutputs.json
        name: String,
    },

    /// Run FPP commands
    #[command(name = "command", alias = "cmd")]
    Run(RunArgs),
}

// ── Models ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ModelsArgs {
    #[command(subcommand)]
    pub command: ModelsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ModelsCommand {
    /// List all overlay models
    #[command(alias = "ls")]
    List,

    /// Show one model
    Get { name: String },

    /// Dump a model's channel data
    Data {
        name: String,

        /// Ask the device to run-length encode the data
        #[arg(long)]
        rle: bool,
    },

    /// Blank every pixel of a model
    Clear { name: String },

    /// Set a model's state: 0 off, 1 on, 2/3 transparent modes
    State {
        name: String,

        /// Integer, true/false, or a mode name
        state: String,
    },

    /// Fill a model with one colour (channels are clamped to 0-255)
    Fill {
        name: String,
        #[arg(allow_negative_numbers = true)]
        r: i64,
        #[arg(allow_negative_numbers = true)]
        g: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },

    /// Set a single pixel
    Pixel {
        name: String,
        x: u32,
        y: u32,
        #[arg(allow_negative_numbers = true)]
        r: i64,
        #[arg(allow_negative_numbers = true)]
        g: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
}

// ── Playlists ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PlaylistsArgs {
    #[command(subcommand)]
    pub command: PlaylistsCommand,
}

#[derive(Debug, Subcommand)]
pub enum PlaylistsCommand {
    /// List playlist names
    #[command(alias = "ls")]
    List,

    /// Show a playlist and its entries
    Get { name: String },
}

// ── Schedule ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ScheduleArgs {
    #[command(subcommand)]
    pub command: ScheduleCommand,
}

#[derive(Debug, Subcommand)]
pub enum ScheduleCommand {
    /// List stored schedule entries
    #[command(alias = "ls")]
    List,

    /// Show upcoming occurrences computed by the daemon
    Upcoming,

    /// Tell the daemon to reload the schedule
    Reload,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(subcommand)]
    pub command: RunCommand,
}

#[derive(Debug, Subcommand)]
pub enum RunCommand {
    /// Queue a playlist to play after the current one
    InsertPlaylist {
        playlist: String,

        /// First item to play
        #[arg(long, allow_negative_numbers = true)]
        start: i64,

        /// Last item to play
        #[arg(long, allow_negative_numbers = true)]
        end: i64,

        /// Only insert when nothing is currently playing
        #[arg(long)]
        if_not_running: bool,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration (file + environment)
    Show,

    /// Print the config file path
    Path,

    /// Add or replace a device profile
    AddProfile {
        /// Profile name
        name: String,

        /// Device address
        #[arg(long = "address", short = 'a')]
        address: String,

        /// Per-profile timeout in seconds
        #[arg(long = "profile-timeout")]
        profile_timeout: Option<u64>,

        /// Make this the default profile
        #[arg(long)]
        default: bool,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
