use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::core::error::{Stage, YfError};

/// Cancellation scope for a single call.
///
/// Cancelling the token, or reaching the deadline, aborts whatever stage of the call
/// is in flight: the send, or the body read that follows it. The token is shared with
/// the caller, so one token can govern many calls.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl CallContext {
    /// A fresh context with its own token and no deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a caller-owned token.
    pub fn from_token(token: CancellationToken) -> Self {
        Self {
            token,
            deadline: None,
        }
    }

    /// Abort the call once `dur` has elapsed from now.
    pub fn with_timeout(self, dur: Duration) -> Self {
        self.with_deadline(Instant::now() + dur)
    }

    /// Abort the call at `deadline`.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// The underlying token. Cancelling any clone of it cancels this context.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// The instant after which the call is abandoned, if one was set.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Cancel every call bound to this context or a clone of its token.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// `true` once the token has been cancelled. A passed deadline does not count.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    async fn expired(&self) {
        match self.deadline {
            Some(d) => tokio::time::sleep_until(d).await,
            None => std::future::pending().await,
        }
    }
}

/// Drive `fut` to completion unless `ctx` is cancelled or expires first.
///
/// Client errors are mapped to the transport kind for `stage`.
pub(crate) async fn guarded<T, F>(
    ctx: Option<&CallContext>,
    stage: Stage,
    fut: F,
) -> Result<T, YfError>
where
    F: Future<Output = Result<T, reqwest::Error>>,
{
    let Some(ctx) = ctx else {
        return fut.await.map_err(|e| YfError::transport(stage, e));
    };

    tokio::select! {
        biased;
        () = ctx.token.cancelled() => Err(YfError::Canceled { stage }),
        () = ctx.expired() => Err(YfError::DeadlineExceeded { stage }),
        res = fut => res.map_err(|e| YfError::transport(stage, e)),
    }
}
