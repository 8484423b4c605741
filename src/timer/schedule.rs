//! Tick cadence and the single pending tick callback.
use chrono::{DateTime, Local, TimeDelta};

/// How often the running timer wakes up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cadence {
    /// Every second, while less than one minute has elapsed.
    Second,
    /// Every minute afterwards.
    Minute,
}

impl Cadence {
    pub fn for_elapsed(elapsed_minutes: i64) -> Self {
        if elapsed_minutes <= 0 {
            Cadence::Second
        } else {
            Cadence::Minute
        }
    }

    pub fn interval(self) -> TimeDelta {
        match self {
            Cadence::Second => TimeDelta::milliseconds(1000),
            Cadence::Minute => TimeDelta::milliseconds(60_000),
        }
    }
}

pub type CallbackId = u64;

/// The one scheduled tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pending {
    pub id: CallbackId,
    pub due: DateTime<Local>,
    pub cadence: Cadence,
}

/// Holds at most one pending callback. Arming replaces it, so there is never
/// more than one live tick.
#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Option<Pending>,
    next_id: CallbackId,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules the next tick, cancelling any outstanding one.
    ///
    /// The due instant never passes `limit` (the next minute boundary or the
    /// end of the session), so a long interval cannot overshoot a display change.
    pub fn arm(&mut self, now: DateTime<Local>, cadence: Cadence, limit: DateTime<Local>) -> Pending {
        self.next_id += 1;
        let due = (now + cadence.interval()).min(limit.max(now));
        let pending = Pending {
            id: self.next_id,
            due,
            cadence,
        };
        self.pending = Some(pending);
        pending
    }

    pub fn cancel(&mut self) -> Option<Pending> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    /// The pending callback if it is due at `now`.
    pub fn due(&self, now: DateTime<Local>) -> Option<Pending> {
        self.pending().filter(|pending| pending.due <= now)
    }

    /// True when the pending callback is further away than its own interval,
    /// which only happens after the wall clock jumped backwards.
    pub fn is_behind(&self, now: DateTime<Local>) -> bool {
        self.pending()
            .is_some_and(|pending| pending.due - now > pending.cadence.interval())
    }

    /// Consumes the callback `id` if it is the live one; stale ids do nothing.
    pub fn claim(&mut self, id: CallbackId) -> bool {
        match self.pending {
            Some(pending) if pending.id == id => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the pending callback, zero when overdue.
    pub fn time_until_due(&self, now: DateTime<Local>) -> Option<TimeDelta> {
        self.pending()
            .map(|pending| (pending.due - now).max(TimeDelta::zero()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::local;

    #[test]
    fn test_cadence_for_elapsed() {
        assert_eq!(Cadence::for_elapsed(0), Cadence::Second);
        assert_eq!(Cadence::for_elapsed(-3), Cadence::Second);
        assert_eq!(Cadence::for_elapsed(1), Cadence::Minute);
        assert_eq!(Cadence::Second.interval().num_milliseconds(), 1000);
        assert_eq!(Cadence::Minute.interval().num_milliseconds(), 60_000);
    }

    #[test]
    fn test_arm_replaces_pending() {
        let now = local(2024, 3, 15, 10, 0, 0);
        let far = local(2024, 3, 15, 12, 0, 0);
        let mut scheduler = Scheduler::new();
        let first = scheduler.arm(now, Cadence::Second, far);
        let second = scheduler.arm(now, Cadence::Minute, far);

        assert_ne!(first.id, second.id);
        assert_eq!(scheduler.pending(), Some(second));
        assert!(!scheduler.claim(first.id));
        assert!(scheduler.claim(second.id));
        assert_eq!(scheduler.pending(), None);
    }

    #[test]
    fn test_due_is_capped_by_limit() {
        let now = local(2024, 3, 15, 10, 1, 20);
        let boundary = local(2024, 3, 15, 10, 2, 0);
        let mut scheduler = Scheduler::new();
        let pending = scheduler.arm(now, Cadence::Minute, boundary);
        assert_eq!(pending.due, boundary);

        let pending = scheduler.arm(now, Cadence::Minute, now - TimeDelta::seconds(5));
        assert_eq!(pending.due, now);
    }

    #[test]
    fn test_due_and_claim() {
        let now = local(2024, 3, 15, 10, 0, 0);
        let mut scheduler = Scheduler::new();
        scheduler.arm(now, Cadence::Second, local(2024, 3, 15, 11, 0, 0));

        assert!(scheduler.due(now).is_none());
        assert_eq!(
            scheduler.time_until_due(now),
            Some(TimeDelta::seconds(1))
        );
        let due = scheduler.due(now + TimeDelta::seconds(1));
        assert!(due.is_some());
        assert!(scheduler.claim(due.map(|pending| pending.id).unwrap_or_default()));
        assert!(scheduler.due(now + TimeDelta::seconds(2)).is_none());
        assert_eq!(scheduler.time_until_due(now), None);
    }

    #[test]
    fn test_is_behind_after_backward_jump() {
        let now = local(2024, 3, 15, 10, 0, 0);
        let mut scheduler = Scheduler::new();
        assert!(!scheduler.is_behind(now));

        scheduler.arm(now, Cadence::Minute, local(2024, 3, 15, 11, 0, 0));
        assert!(!scheduler.is_behind(now));
        assert!(!scheduler.is_behind(now + TimeDelta::seconds(30)));
        assert!(scheduler.is_behind(now - TimeDelta::minutes(5)));
    }
}
