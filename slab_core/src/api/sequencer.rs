//! Latest-request-wins sequencing for interactive clients.
//!
//! A form client may fire a new analysis on every edit, and responses can
//! arrive out of order. Each request takes a [`RequestTicket`] when issued;
//! a completed result is kept only if its ticket is still the most recent
//! one issued, so a slow stale response never overwrites a newer one.

use std::sync::{Mutex, MutexGuard};

use tracing::debug;

/// Monotonic identifier handed out per request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct State<T> {
    issued: u64,
    latest: Option<(u64, T)>,
}

/// Tracks in-flight requests and keeps only the newest result.
#[derive(Debug)]
pub struct RequestSequencer<T> {
    state: Mutex<State<T>>,
}

impl<T> Default for RequestSequencer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RequestSequencer<T> {
    pub fn new() -> Self {
        RequestSequencer {
            state: Mutex::new(State { issued: 0, latest: None }),
        }
    }

    // A panic while holding the lock cannot leave the counter inconsistent.
    fn lock(&self) -> MutexGuard<'_, State<T>> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Issue a ticket for a new request; it supersedes all earlier tickets.
    pub fn issue(&self) -> RequestTicket {
        let mut state = self.lock();
        state.issued += 1;
        RequestTicket(state.issued)
    }

    /// Record a completed result.
    ///
    /// Returns `true` if the result was kept, `false` if a newer request has
    /// been issued since this ticket was taken.
    pub fn complete(&self, ticket: RequestTicket, value: T) -> bool {
        let mut state = self.lock();
        if ticket.0 != state.issued {
            debug!(ticket = ticket.0, latest = state.issued, "discarding stale result");
            return false;
        }
        state.latest = Some((ticket.0, value));
        true
    }

    /// Whether `ticket` is still the newest issued request
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.lock().issued == ticket.0
    }
}

impl<T: Clone> RequestSequencer<T> {
    /// The most recently accepted result, if any
    pub fn latest(&self) -> Option<T> {
        self.lock().latest.as_ref().map(|(_, value)| value.clone())
    }
}
