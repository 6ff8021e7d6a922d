use std::sync::{
    atomic::{AtomicU64, Ordering},
    Mutex,
};

/// Orders responses by dispatch time. Every request takes a ticket when it is
/// sent; a response is applied only if no later ticket has been applied yet.
#[derive(Debug, Default)]
pub struct ResponseSequencer {
    next: AtomicU64,
    applied: Mutex<u64>,
}

impl ResponseSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next ticket. Tickets start at 1.
    pub fn issue(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Run `apply` if `ticket` is newer than every ticket applied so far.
    /// The check and `apply` happen under one lock so two responses can't
    /// interleave their writes.
    pub fn apply_if_latest(&self, ticket: u64, apply: impl FnOnce()) -> bool {
        let mut applied = self
            .applied
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if ticket <= *applied {
            return false;
        }
        *applied = ticket;
        apply();
        true
    }

    pub fn last_applied(&self) -> u64 {
        *self
            .applied
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
