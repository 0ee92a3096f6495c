//! In-flight request tokens
//!
//! Each operation kind owns one gate. Issuing a token supersedes every token
//! issued before it, and publishing with a superseded token is a no-op, so the
//! display always reflects the most recently *started* request rather than
//! the most recently *finished* one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// Identifies one in-flight request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Whether a response made it onto the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered,
    /// A newer request of the same kind was issued meanwhile
    Discarded,
}

#[derive(Debug, Clone, Default)]
pub struct RequestGate {
    latest: Arc<AtomicU64>,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a token, invalidating all earlier ones
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }

    /// Replaces the channel value if `token` is still current
    ///
    /// The check runs under the channel's write lock, so a stale response can
    /// never land after the response of a newer request.
    pub fn publish<T>(
        &self,
        token: RequestToken,
        channel: &watch::Sender<T>,
        value: T,
    ) -> RenderOutcome {
        let published = channel.send_if_modified(|slot| {
            if self.is_current(token) {
                *slot = value;
                true
            } else {
                false
            }
        });

        if published {
            RenderOutcome::Rendered
        } else {
            tracing::debug!("Discarding stale response for request {}", token.0);
            RenderOutcome::Discarded
        }
    }
}
