//! Per-call cancellation and deadline.
//!
//! Every resource operation takes a [`CallContext`]. The context is checked
//! around the whole round trip (send, status check, body read, decode), so a
//! cancelled or expired call returns promptly and never decodes a partial
//! body. Dropping the returned future cancels the request as well.
//!
//! ```no_run
//! use std::time::Duration;
//! use fpp_api::{CallContext, Client};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> Result<(), fpp_api::Error> {
//! let client = Client::new("http://fpp.local")?;
//! let cancel = CancellationToken::new();
//! let ctx = CallContext::background()
//!     .with_cancellation(cancel.clone())
//!     .with_timeout(Duration::from_secs(2));
//!
//! let models = client.get_overlays_models(&ctx).await?;
//! # let _ = models;
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::Error;

#[derive(Debug, Clone, Default)]
pub struct CallContext {
    cancel: Option<CancellationToken>,
    deadline: Option<Instant>,
}

impl CallContext {
    /// A context that is never cancelled and has no deadline of its own.
    /// The transport's configured timeout still applies.
    pub fn background() -> Self {
        Self::default()
    }

    /// Cancel the call when `token` fires.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Fail the call if it has not completed within `timeout` from now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Fail the call if it has not completed by `deadline`. An earlier
    /// deadline already on the context is kept.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }

    /// Drive `fut` to completion unless the context is cancelled or its
    /// deadline passes first.
    pub(crate) async fn run<T, F>(&self, fut: F) -> Result<T, Error>
    where
        F: Future<Output = Result<T, Error>>,
    {
        let cancelled = async {
            match &self.cancel {
                Some(token) => token.cancelled().await,
                None => std::future::pending().await,
            }
        };

        let bounded = async {
            match self.deadline {
                Some(deadline) => tokio::time::timeout_at(deadline, fut)
                    .await
                    .unwrap_or(Err(Error::DeadlineExceeded)),
                None => fut.await,
            }
        };

        tokio::select! {
            biased;
            () = cancelled => Err(Error::Cancelled),
            result = bounded => result,
        }
    }
}

impl From<CancellationToken> for CallContext {
    fn from(token: CancellationToken) -> Self {
        Self::background().with_cancellation(token)
    }
}
