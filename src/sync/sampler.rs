//! Playback sampler scheduling.
//!
//! The engine itself owns no timer thread; the host schedules real timer
//! callbacks at [`TICK_PERIOD`] and feeds them back through
//! [`crate::SyncEngine::tick`]. Cancellation has to be race-free: a tick
//! already queued by the host when the player pauses must not act on the
//! engine. That is handled with tickets: starting the sampler issues a fresh
//! [`TickTicket`], cancelling invalidates it, and a tick presenting a stale
//! ticket is ignored (invalidate-then-check).

use std::time::Duration;

/// Fixed sampler period: well under perceptible lag while keeping the
/// polling of the external player cheap.
pub const TICK_PERIOD: Duration = Duration::from_millis(35);

/// Proof-of-liveness token issued by [`Sampler::start`].
///
/// The host must hand the ticket back with every tick; only the ticket from
/// the most recent `start` is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickTicket(u64);

/// Tracks whether the periodic sampler is live and which ticket is current.
#[derive(Debug)]
pub struct Sampler {
    next_ticket: u64,
    active: Option<u64>,
}

impl Sampler {
    pub fn new() -> Self {
        Self {
            next_ticket: 0,
            active: None,
        }
    }

    /// Start (or restart) the sampler, invalidating any previous ticket.
    pub fn start(&mut self) -> TickTicket {
        self.next_ticket += 1;
        self.active = Some(self.next_ticket);
        TickTicket(self.next_ticket)
    }

    /// Cancel the sampler. Ticks carrying the old ticket become no-ops
    /// immediately, even if the host has already queued them.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Whether a tick presenting this ticket may act on the engine.
    pub fn accepts(&self, ticket: TickTicket) -> bool {
        self.active == Some(ticket.0)
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_valid_until_cancel() {
        let mut sampler = Sampler::new();
        let ticket = sampler.start();
        assert!(sampler.accepts(ticket));
        sampler.cancel();
        assert!(!sampler.accepts(ticket));
        assert!(!sampler.is_active());
    }

    #[test]
    fn test_restart_invalidates_previous_ticket() {
        let mut sampler = Sampler::new();
        let old = sampler.start();
        let new = sampler.start();
        assert!(!sampler.accepts(old));
        assert!(sampler.accepts(new));
    }
}
