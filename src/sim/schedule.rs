//! Deferred effects keyed to absolute clock time
//!
//! Delayed resets (punch unlock, hit flashes, restart notice) are queued here
//! and drained once per tick against the simulation clock. Entries fire at
//! most once, in fire-time order, ties broken by scheduling order.

use serde::{Deserialize, Serialize};

use super::state::EnemyId;

/// Effects that resolve some time after they are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Deferred {
    /// End of the punch lockout window
    PunchUnlock,
    /// Clear the player's hit tint
    PlayerRecover,
    /// Clear a struck enemy's tint and knockback; no-op if it died meanwhile
    EnemyRecover(EnemyId),
    /// Tell the scene owner the restart delay has elapsed
    RestartDue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Scheduled {
    fire_at: f64,
    seq: u64,
    effect: Deferred,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scheduler {
    pending: Vec<Scheduled>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, fire_at: f64, effect: Deferred) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Scheduled { fire_at, seq, effect });
    }

    /// Remove and return everything due at or before `now`, oldest first
    pub fn drain_due(&mut self, now: f64) -> Vec<Deferred> {
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|s| s.fire_at <= now);
        self.pending = rest;

        due.sort_by(|a, b| a.fire_at.total_cmp(&b.fire_at).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|s| s.effect).collect()
    }

    pub fn is_pending(&self, effect: Deferred) -> bool {
        self.pending.iter().any(|s| s.effect == effect)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_only_when_due() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(200.0, Deferred::PunchUnlock);

        assert!(scheduler.drain_due(199.9).is_empty());
        assert_eq!(scheduler.drain_due(200.0), vec![Deferred::PunchUnlock]);
        // Fired once, never again
        assert!(scheduler.drain_due(10_000.0).is_empty());
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_drain_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(300.0, Deferred::RestartDue);
        scheduler.schedule(100.0, Deferred::PunchUnlock);
        scheduler.schedule(100.0, Deferred::PlayerRecover);

        let fired = scheduler.drain_due(500.0);
        assert_eq!(
            fired,
            vec![Deferred::PunchUnlock, Deferred::PlayerRecover, Deferred::RestartDue]
        );
    }

    #[test]
    fn test_partial_drain_keeps_future_entries() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(100.0, Deferred::PlayerRecover);
        scheduler.schedule(2000.0, Deferred::RestartDue);

        assert_eq!(scheduler.drain_due(150.0), vec![Deferred::PlayerRecover]);
        assert_eq!(scheduler.len(), 1);
        assert!(scheduler.is_pending(Deferred::RestartDue));
    }
}
