//! Request sequencing for fetch-on-mount effects.
//!
//! A screen that fires one request per mount (or per parameter change) gets
//! no ordering guarantee from the network: an older response may land after
//! a newer one. Each load takes a ticket; only the holder of the newest
//! ticket may write its result into view state. Unmounting invalidates every
//! outstanding ticket, so a late response cannot touch signals that no
//! longer exist.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::on_cleanup;

#[derive(Clone, Debug, Default)]
pub struct RequestSequencer {
    latest: Arc<AtomicU64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request generation, invalidating all earlier tickets.
    pub fn begin(&self) -> RequestTicket {
        let seq = self.latest.fetch_add(1, Ordering::Relaxed) + 1;
        RequestTicket {
            seq,
            latest: Arc::clone(&self.latest),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RequestTicket {
    seq: u64,
    latest: Arc<AtomicU64>,
}

impl RequestTicket {
    /// Still the newest request? Stale holders must drop their result.
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::Relaxed) == self.seq
    }
}

/// Sequencer scoped to the current reactive owner: when the owner is cleaned
/// up (the screen unmounts), every outstanding ticket goes stale.
pub fn use_sequencer() -> RequestSequencer {
    let sequencer = RequestSequencer::new();
    on_cleanup({
        let sequencer = sequencer.clone();
        move || {
            let _ = sequencer.begin();
        }
    });
    sequencer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_lone_ticket_is_current() {
        let sequencer = RequestSequencer::new();
        assert!(sequencer.begin().is_current());
    }

    #[test]
    fn a_newer_ticket_invalidates_the_older_one() {
        let sequencer = RequestSequencer::new();
        let first = sequencer.begin();
        let second = sequencer.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn clones_share_the_generation() {
        let sequencer = RequestSequencer::new();
        let ticket = sequencer.begin();
        let _ = sequencer.clone().begin();
        assert!(!ticket.is_current());
    }
}
