//! CLI error types with miette diagnostics.
//!
//! Maps `fpp_api::Error` kinds into user-facing errors with actionable
//! help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use fpp_api::ErrorKind;
use fpp_config::ConfigError;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const REJECTED: i32 = 5;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const INTERRUPTED: i32 = 130;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the FPP device: {context}")]
    #[diagnostic(
        code(fppctl::connection_failed),
        help(
            "Check that FPP is running and reachable from this machine.\n\
             Try: fppctl --host <address> status"
        )
    )]
    ConnectionFailed {
        context: String,
        #[source]
        source: fpp_api::Error,
    },

    #[error("Request timed out: {context}")]
    #[diagnostic(
        code(fppctl::timeout),
        help("Increase the timeout with --timeout or check the device's load.")
    )]
    Timeout { context: String },

    #[error("Interrupted")]
    #[diagnostic(code(fppctl::interrupted))]
    Interrupted,

    // ── Device responses ─────────────────────────────────────────────
    #[error("{context}: not found")]
    #[diagnostic(
        code(fppctl::not_found),
        help("Run: fppctl {list_command} to see what exists")
    )]
    NotFound {
        context: String,
        list_command: String,
    },

    #[error("{context}: HTTP {status}")]
    #[diagnostic(code(fppctl::http_status))]
    HttpStatus { context: String, status: u16 },

    #[error("Device rejected the request: {message}")]
    #[diagnostic(code(fppctl::rejected))]
    Rejected { context: String, message: String },

    #[error("Unexpected response from device: {context}")]
    #[diagnostic(
        code(fppctl::bad_response),
        help("The FPP version on the device may not be supported. Re-run with -vv for details.")
    )]
    BadResponse {
        context: String,
        #[source]
        source: fpp_api::Error,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(fppctl::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(fppctl::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: fppctl config add-profile <name> --address <host>"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No FPP device configured")]
    #[diagnostic(
        code(fppctl::no_device),
        help(
            "Pass --host <address>, set FPP_HOST, or add a profile:\n  \
             fppctl config add-profile default --address <host>\n\
             Config file: {path}"
        )
    )]
    NoDevice { path: String },

    #[error(transparent)]
    #[diagnostic(code(fppctl::config))]
    Config(ConfigError),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(fppctl::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    #[diagnostic(code(fppctl::yaml))]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    #[diagnostic(code(fppctl::internal))]
    Other(fpp_api::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Interrupted => exit_code::INTERRUPTED,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Rejected { .. } => exit_code::REJECTED,
            Self::Validation { .. } | Self::ProfileNotFound { .. } | Self::NoDevice { .. } => {
                exit_code::USAGE
            }
            Self::HttpStatus { .. }
            | Self::BadResponse { .. }
            | Self::Config(_)
            | Self::Io(_)
            | Self::Json(_)
            | Self::Yaml(_)
            | Self::Other(_) => exit_code::GENERAL,
        }
    }

    /// Attach the `fppctl` listing command to a not-found error, so the
    /// help text can point at it.
    pub fn listed_by(self, command: &str) -> Self {
        match self {
            Self::NotFound { context, .. } => Self::NotFound {
                context,
                list_command: command.into(),
            },
            other => other,
        }
    }
}

// ── fpp_api::Error → CliError ────────────────────────────────────────

impl From<fpp_api::Error> for CliError {
    fn from(err: fpp_api::Error) -> Self {
        let context = err.to_string();
        match err.kind() {
            ErrorKind::NetworkFailure => match err.root() {
                fpp_api::Error::Cancelled => Self::Interrupted,
                fpp_api::Error::DeadlineExceeded => Self::Timeout { context },
                fpp_api::Error::Transport(e) if e.is_timeout() => Self::Timeout { context },
                _ => Self::ConnectionFailed {
                    context,
                    source: err,
                },
            },
            ErrorKind::UnexpectedStatus if err.is_not_found() => Self::NotFound {
                context,
                list_command: "--help".into(),
            },
            ErrorKind::UnexpectedStatus => Self::HttpStatus {
                context,
                status: err.status().unwrap_or_default(),
            },
            ErrorKind::LogicalFailure => Self::Rejected {
                message: err.device_message().unwrap_or_default().to_owned(),
                context,
            },
            ErrorKind::DecodeFailure => Self::BadResponse {
                context,
                source: err,
            },
            ErrorKind::Configuration => Self::Validation {
                field: "host".into(),
                reason: err.root().to_string(),
            },
            ErrorKind::EncodeFailure => Self::Other(err),
        }
    }
}

// ── ConfigError → CliError ───────────────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ProfileNotFound { name, available } => {
                Self::ProfileNotFound { name, available }
            }
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::Client(api) => api.into(),
            other => Self::Config(other),
        }
    }
}
