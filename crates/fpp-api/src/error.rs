use thiserror::Error;

/// Top-level error type for the `fpp-api` crate.
///
/// Every variant maps onto one [`ErrorKind`]. Resource operations wrap the
/// transport error in [`Error::Context`] so the caller learns which
/// operation and resource failed; the accessors below look through that
/// wrapping.
#[derive(Debug, Error)]
pub enum Error {
    // ── Configuration ───────────────────────────────────────────────
    /// Base URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Base URL parsed but cannot have paths resolved against it.
    #[error("URL cannot be used as a base endpoint: {url}")]
    UnsupportedBaseUrl { url: String },

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The call's deadline passed before a response was decoded.
    #[error("Request deadline exceeded")]
    DeadlineExceeded,

    /// The call was cancelled through its `CallContext`.
    #[error("Request cancelled")]
    Cancelled,

    /// Anything other than HTTP 200. The body is drained and discarded.
    #[error("unexpected HTTP status {status} ({reason})")]
    UnexpectedStatus { status: u16, reason: String },

    // ── Data ────────────────────────────────────────────────────────
    /// The response body did not decode into the requested shape.
    #[error("unable to parse response: {source}")]
    Deserialization {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// The request body could not be encoded as JSON.
    #[error("unable to marshal request body: {0}")]
    Serialization(#[source] serde_json::Error),

    // ── Device ──────────────────────────────────────────────────────
    /// HTTP 200, but the `{Status, message}` envelope did not say OK.
    #[error("device reported failure: {message}")]
    Device { message: String },

    // ── Context ─────────────────────────────────────────────────────
    /// An error annotated with the operation and resource it came from.
    #[error("{context}")]
    Context {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

/// Coarse classification of an [`Error`], independent of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The client was misconfigured at construction time.
    Configuration,
    /// No response was received: connection, DNS, timeout or cancellation.
    NetworkFailure,
    /// The device answered with a status other than 200.
    UnexpectedStatus,
    /// The response body was not valid JSON for the destination shape.
    DecodeFailure,
    /// The request body could not be serialized.
    EncodeFailure,
    /// HTTP 200 with a non-OK status envelope.
    LogicalFailure,
}

impl Error {
    /// The innermost error, skipping any `Context` layers.
    pub fn root(&self) -> &Error {
        let mut current = self;
        while let Self::Context { source, .. } = current {
            current = source;
        }
        current
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidUrl(_) | Self::UnsupportedBaseUrl { .. } | Self::ClientBuild(_) => {
                ErrorKind::Configuration
            }
            Self::Transport(_) | Self::DeadlineExceeded | Self::Cancelled => {
                ErrorKind::NetworkFailure
            }
            Self::UnexpectedStatus { .. } => ErrorKind::UnexpectedStatus,
            Self::Deserialization { .. } => ErrorKind::DecodeFailure,
            Self::Serialization(_) => ErrorKind::EncodeFailure,
            Self::Device { .. } => ErrorKind::LogicalFailure,
            Self::Context { source, .. } => source.kind(),
        }
    }

    /// HTTP status code for `UnexpectedStatus` errors.
    pub fn status(&self) -> Option<u16> {
        match self.root() {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The device-supplied message of a logical failure.
    pub fn device_message(&self) -> Option<&str> {
        match self.root() {
            Self::Device { message } => Some(message),
            _ => None,
        }
    }

    /// Returns `true` if the device answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if the call ended because its context was cancelled
    /// or its deadline passed.
    pub fn is_cancelled(&self) -> bool {
        matches!(self.root(), Self::Cancelled | Self::DeadlineExceeded)
    }
}

/// Attach operation context to a `Result<T, Error>`.
pub(crate) trait ResultExt<T> {
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T, Error>;
}

impl<T> ResultExt<T> for Result<T, Error> {
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T, Error> {
        self.map_err(|source| Error::Context {
            context: f(),
            source: Box::new(source),
        })
    }
}
