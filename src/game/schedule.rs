//! Deferred combat timer.
//!
//! When combat is deferred, ending player 2's phase arms a timer instead of
//! resolving immediately. The timer can be driven two ways:
//!
//! - call `GameStore::advance_clock` from a frame loop, or
//! - take the `CombatTicket` from `GameStore::pending_combat`, wait on any
//!   runtime, then hand it to `GameStore::fire_combat`.
//!
//! Tickets carry the match generation they were issued in and a serial that
//! is unique per arm. Reinitializing or restoring a match bumps the
//! generation, and every new arm gets a new serial, so a ticket only ever
//! fires the combat it was issued for.

use std::time::Duration;

/// Handle for one armed combat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CombatTicket {
    generation: u64,
    serial: u64,
    delay: Duration,
}

impl CombatTicket {
    /// How long after arming the combat is due.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[derive(Clone, Copy, Debug)]
struct Pending {
    ticket: CombatTicket,
    remaining: Duration,
}

/// Single-slot timer for the end-phase combat step.
#[derive(Clone, Debug, Default)]
pub struct CombatTimer {
    generation: u64,
    armed: u64,
    pending: Option<Pending>,
}

impl CombatTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer, replacing any armed combat.
    pub fn arm(&mut self, delay: Duration) -> CombatTicket {
        self.armed += 1;
        let ticket = CombatTicket {
            generation: self.generation,
            serial: self.armed,
            delay,
        };
        self.pending = Some(Pending {
            ticket,
            remaining: delay,
        });
        ticket
    }

    /// Drop the armed combat without invalidating the generation.
    pub fn disarm(&mut self) {
        self.pending = None;
    }

    /// Start a new generation: disarm and invalidate every issued ticket.
    pub fn cancel_all(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    /// The armed combat, if any.
    #[must_use]
    pub fn pending(&self) -> Option<CombatTicket> {
        self.pending.map(|p| p.ticket)
    }

    /// Whether `ticket` is the one currently armed.
    #[must_use]
    pub fn is_current(&self, ticket: CombatTicket) -> bool {
        self.pending.is_some_and(|p| p.ticket == ticket)
    }

    /// Let `elapsed` pass. Returns true, and disarms, when the combat is due.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };
        pending.remaining = pending.remaining.saturating_sub(elapsed);
        if pending.remaining.is_zero() {
            self.pending = None;
            return true;
        }
        false
    }
}
