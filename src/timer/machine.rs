use chrono::{DateTime, Local, TimeDelta};
use tracing::{debug, info, trace};

use crate::clock::{Clock, SystemClock};

use super::format::{Locale, clock_time};
use super::resolve::{minutes_between, resolve, truncate_to_minute};
use super::schedule::{Cadence, CallbackId, Scheduler};
use super::{RunState, Snapshot, TimeField, TimeInput};

/// Values published by the most recent tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reading {
    pub elapsed_minutes: i64,
    pub remaining_minutes: i64,
    pub progress_percent: u8,
}

/// Owns all temporal state of one focus session.
///
/// Commands that do not apply in the current state are ignored without
/// side effects.
pub struct FocusTimer<C: Clock = SystemClock> {
    clock: C,
    locale: Locale,
    input: TimeInput,
    end_time: Option<DateTime<Local>>,
    start_time: Option<DateTime<Local>>,
    state: RunState,
    reading: Reading,
    reset_pending: bool,
    scheduler: Scheduler,
    cadence: Option<Cadence>,
}

impl FocusTimer<SystemClock> {
    pub fn new(locale: Locale) -> Self {
        Self::with_clock(SystemClock, locale)
    }
}

impl<C: Clock> FocusTimer<C> {
    pub fn with_clock(clock: C, locale: Locale) -> Self {
        Self {
            clock,
            locale,
            input: TimeInput::default(),
            end_time: None,
            start_time: None,
            state: RunState::Idle,
            reading: Reading::default(),
            reset_pending: false,
            scheduler: Scheduler::new(),
            cadence: None,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn input(&self) -> &TimeInput {
        &self.input
    }

    pub fn is_reset_pending(&self) -> bool {
        self.reset_pending
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    /// Applies the new text of one field and re-resolves the end time.
    pub fn on_time_input(&mut self, field: TimeField, raw: &str) {
        if self.state != RunState::Idle {
            debug!(?field, state = ?self.state, "time input ignored");
            return;
        }
        self.input.apply(field, raw);
        let validation = self.input.validate();
        self.end_time = if validation.valid {
            Some(resolve(validation.hours, validation.minutes, self.clock.now()))
        } else {
            None
        };
        debug!(
            hours = %self.input.hours,
            minutes = %self.input.minutes,
            valid = validation.valid,
            "time input updated"
        );
    }

    /// Replaces the whole end time at once, e.g. from a "HH:MM" argument.
    ///
    /// Returns false, leaving the input untouched, unless `text` is a valid
    /// clock time.
    pub fn set_end_time_text(&mut self, text: &str) -> bool {
        let Some(parsed) = TimeInput::from_clock_text(text) else {
            return false;
        };
        if !parsed.validate().valid {
            return false;
        }
        self.on_time_input(TimeField::Hours, &parsed.hours);
        self.on_time_input(TimeField::Minutes, &parsed.minutes);
        self.state == RunState::Idle
    }

    /// End time to use at `now`: the stored one while still ahead, otherwise
    /// re-resolved from the entered time.
    fn effective_end(&self, now: DateTime<Local>) -> Option<DateTime<Local>> {
        match self.end_time {
            Some(end) if end > now => Some(end),
            Some(_) => {
                let validation = self.input.validate();
                validation
                    .valid
                    .then(|| resolve(validation.hours, validation.minutes, now))
            }
            None => None,
        }
    }

    /// Whole minutes of focus: from the start once running, from `now` while idle.
    pub fn focus_minutes(&self, now: DateTime<Local>) -> Option<i64> {
        match self.state {
            RunState::Idle => self
                .effective_end(now)
                .map(|end| minutes_between(now, end))
                .filter(|minutes| *minutes > 0),
            RunState::Running | RunState::Completed => match (self.start_time, self.end_time) {
                (Some(start), Some(end)) => Some(minutes_between(start, end).max(0)),
                _ => None,
            },
        }
    }

    pub fn is_start_enabled(&self, now: DateTime<Local>) -> bool {
        self.state == RunState::Idle && self.focus_minutes(now).is_some()
    }

    pub fn start(&mut self) {
        let now = self.clock.now();
        if !self.is_start_enabled(now) {
            debug!(state = ?self.state, "start ignored");
            return;
        }
        let Some(end) = self.effective_end(now) else {
            return;
        };
        if self.end_time != Some(end) {
            debug!(end = %end, "end time rolled forward before start");
        }
        let start = truncate_to_minute(now);
        self.start_time = Some(start);
        self.end_time = Some(end);
        self.state = RunState::Running;
        self.reading = Reading {
            elapsed_minutes: 0,
            remaining_minutes: minutes_between(start, end).max(0),
            progress_percent: 0,
        };
        info!(
            start = %clock_time(start),
            end = %clock_time(end),
            total_minutes = minutes_between(start, end),
            "focus session started"
        );
        self.reschedule(now);
    }

    /// Recomputes the reading from the clock and re-arms the next tick.
    pub fn tick(&mut self) {
        if self.state != RunState::Running {
            return;
        }
        let (Some(start), Some(end)) = (self.start_time, self.end_time) else {
            return;
        };
        let now = self.clock.now();
        let total = minutes_between(start, end);
        if total <= 0 || now >= end {
            self.complete(total.max(0));
            return;
        }

        let elapsed = minutes_between(start, now).clamp(0, total);
        let progress = (elapsed * 100 / total).clamp(0, 100) as u8;
        self.reading = Reading {
            elapsed_minutes: elapsed,
            remaining_minutes: (total - elapsed).max(0),
            progress_percent: progress.max(self.reading.progress_percent),
        };
        self.reschedule(now);
    }

    /// Runs the pending tick if it is due.
    pub fn poll(&mut self) {
        let now = self.clock.now();
        if let Some(pending) = self.scheduler.due(now) {
            trace!(id = pending.id, cadence = ?pending.cadence, "tick due");
            self.fire(pending.id);
        } else if self.scheduler.is_behind(now) {
            debug!("clock moved backwards, recomputing");
            self.tick();
        }
    }

    /// Runs the tick for callback `id`, unless it has since been cancelled or replaced.
    pub fn fire(&mut self, id: CallbackId) {
        if self.scheduler.claim(id) {
            self.tick();
        } else {
            debug!(id, "stale tick callback dropped");
        }
    }

    /// How long the caller may sleep before the next tick is due.
    pub fn time_until_next_tick(&self) -> Option<TimeDelta> {
        self.scheduler.time_until_due(self.clock.now())
    }

    fn reschedule(&mut self, now: DateTime<Local>) {
        let (Some(start), Some(end)) = (self.start_time, self.end_time) else {
            return;
        };
        let elapsed = self.reading.elapsed_minutes;
        let cadence = Cadence::for_elapsed(elapsed);
        let next_boundary = start + TimeDelta::minutes(elapsed + 1);
        self.scheduler.arm(now, cadence, next_boundary.min(end));
        if self.cadence != Some(cadence) {
            debug!(?cadence, elapsed_minutes = elapsed, "tick cadence switched");
            self.cadence = Some(cadence);
        }
    }

    fn complete(&mut self, total: i64) {
        self.scheduler.cancel();
        self.cadence = None;
        self.state = RunState::Completed;
        self.reading = Reading {
            elapsed_minutes: total,
            remaining_minutes: 0,
            progress_percent: 100,
        };
        info!(total_minutes = total, "focus session completed");
    }

    /// Asks for confirmation before wiping the session.
    pub fn request_reset(&mut self) {
        self.reset_pending = true;
    }

    pub fn cancel_reset(&mut self) {
        self.reset_pending = false;
    }

    /// Discards the whole session and returns to a fresh idle timer.
    pub fn confirm_reset(&mut self) {
        if !self.reset_pending {
            debug!("reset confirmation without a pending request ignored");
            return;
        }
        self.scheduler.cancel();
        self.cadence = None;
        self.input = TimeInput::default();
        self.end_time = None;
        self.start_time = None;
        self.state = RunState::Idle;
        self.reading = Reading::default();
        self.reset_pending = false;
        info!("focus session reset");
    }

    pub fn snapshot(&self) -> Snapshot {
        let now = self.clock.now();
        let focus_minutes = self.focus_minutes(now);
        let (end, start_display) = match self.state {
            RunState::Idle => (self.effective_end(now), clock_time(now)),
            RunState::Running | RunState::Completed => (
                self.end_time,
                self.start_time.map(clock_time).unwrap_or_else(|| clock_time(now)),
            ),
        };
        let reading = match self.state {
            RunState::Idle => Reading::default(),
            RunState::Running | RunState::Completed => self.reading,
        };
        Snapshot {
            run_state: self.state,
            end_time_display: end.map(clock_time),
            start_time_display: start_display,
            focus_minutes,
            focus_duration_display: focus_minutes.map(|minutes| self.locale.format_minutes(minutes)),
            elapsed_minutes: reading.elapsed_minutes,
            remaining_minutes: reading.remaining_minutes,
            progress_percent: reading.progress_percent,
            is_start_enabled: self.is_start_enabled(now),
            is_reset_pending: self.reset_pending,
            hours_text: self.input.hours.clone(),
            minutes_text: self.input.minutes.clone(),
            input_valid: self.input.validate().valid,
        }
    }
}

#[cfg(test)]
impl<C: Clock> FocusTimer<C> {
    pub fn end_time(&self) -> Option<DateTime<Local>> {
        self.end_time
    }

    pub fn start_time(&self) -> Option<DateTime<Local>> {
        self.start_time
    }

    pub fn reading(&self) -> Reading {
        self.reading
    }

    pub fn cadence(&self) -> Option<Cadence> {
        self.cadence
    }

    pub fn pending_callback(&self) -> Option<CallbackId> {
        self.scheduler.pending().map(|pending| pending.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{ManualClock, local};

    fn timer_at(hour: u32, minute: u32, second: u32) -> (FocusTimer<ManualClock>, ManualClock) {
        let clock = ManualClock::at_hms(hour, minute, second);
        (FocusTimer::with_clock(clock.clone(), Locale::Ko), clock)
    }

    fn enter(timer: &mut FocusTimer<ManualClock>, hours: &str, minutes: &str) {
        timer.on_time_input(TimeField::Hours, hours);
        timer.on_time_input(TimeField::Minutes, minutes);
    }

    fn run_seconds(timer: &mut FocusTimer<ManualClock>, clock: &ManualClock, seconds: i64) {
        for _ in 0..seconds {
            clock.advance_secs(1);
            timer.poll();
        }
    }

    #[test]
    fn test_day_rollover_scenario() {
        let (mut timer, _clock) = timer_at(23, 50, 0);
        enter(&mut timer, "00", "10");
        assert_eq!(timer.end_time(), Some(local(2024, 3, 16, 0, 10, 0)));
        let snapshot = timer.snapshot();
        assert_eq!(snapshot.focus_minutes, Some(20));
        assert_eq!(snapshot.end_time_display.as_deref(), Some("00:10"));
    }

    #[test]
    fn test_same_day_scenario() {
        let (mut timer, _clock) = timer_at(10, 0, 0);
        enter(&mut timer, "10", "05");
        assert_eq!(timer.end_time(), Some(local(2024, 3, 15, 10, 5, 0)));

        let snapshot = timer.snapshot();
        assert_eq!(snapshot.focus_minutes, Some(5));
        assert_eq!(snapshot.focus_duration_display.as_deref(), Some("5분"));
        assert!(snapshot.is_start_enabled);
        assert_eq!(snapshot.run_state, RunState::Idle);
    }

    #[test]
    fn test_lone_minute_digit_scenario() {
        let (mut timer, _clock) = timer_at(10, 0, 0);
        timer.on_time_input(TimeField::Minutes, "7");
        assert_eq!(timer.input().minutes, "07");
        assert_eq!(timer.end_time(), None);
        assert!(!timer.snapshot().is_start_enabled);
    }

    #[test]
    fn test_non_digit_scenario() {
        let (mut timer, _clock) = timer_at(10, 0, 0);
        timer.on_time_input(TimeField::Hours, "ab3c");
        assert_eq!(timer.input().hours, "3");
    }

    #[test]
    fn test_completion_scenario() {
        let (mut timer, clock) = timer_at(10, 0, 0);
        enter(&mut timer, "10", "02");
        timer.start();
        assert_eq!(timer.state(), RunState::Running);

        run_seconds(&mut timer, &clock, 121);

        let snapshot = timer.snapshot();
        assert_eq!(snapshot.run_state, RunState::Completed);
        assert_eq!(snapshot.progress_percent, 100);
        assert_eq!(snapshot.remaining_minutes, 0);
        assert_eq!(snapshot.elapsed_minutes, 2);
        assert_eq!(timer.pending_callback(), None);
    }

    #[test]
    fn test_start_truncates_seconds() {
        let (mut timer, _clock) = timer_at(10, 0, 37);
        enter(&mut timer, "10", "30");
        timer.start();
        assert_eq!(timer.start_time(), Some(local(2024, 3, 15, 10, 0, 0)));
        assert_eq!(timer.focus_minutes(timer.now()), Some(30));
        assert_eq!(timer.reading().remaining_minutes, 30);
    }

    #[test]
    fn test_start_ignored_without_end_time() {
        let (mut timer, _clock) = timer_at(10, 0, 0);
        timer.start();
        assert_eq!(timer.state(), RunState::Idle);
        assert_eq!(timer.start_time(), None);
        assert_eq!(timer.pending_callback(), None);
    }

    #[test]
    fn test_start_ignored_when_under_a_minute() {
        let (mut timer, _clock) = timer_at(10, 4, 30);
        enter(&mut timer, "10", "05");
        assert!(timer.end_time().is_some());
        assert!(!timer.snapshot().is_start_enabled);
        timer.start();
        assert_eq!(timer.state(), RunState::Idle);
    }

    #[test]
    fn test_stale_end_time_rolls_forward_on_start() {
        let (mut timer, clock) = timer_at(10, 0, 0);
        enter(&mut timer, "10", "30");
        clock.set(local(2024, 3, 15, 10, 45, 0));

        let snapshot = timer.snapshot();
        assert_eq!(snapshot.focus_minutes, Some(23 * 60 + 45));
        assert!(snapshot.is_start_enabled);

        timer.start();
        assert_eq!(timer.state(), RunState::Running);
        assert_eq!(timer.end_time(), Some(local(2024, 3, 16, 10, 30, 0)));
    }

    #[test]
    fn test_clearing_input_clears_end_time() {
        let (mut timer, _clock) = timer_at(10, 0, 0);
        enter(&mut timer, "11", "00");
        assert!(timer.end_time().is_some());
        timer.on_time_input(TimeField::Minutes, "");
        assert_eq!(timer.end_time(), None);
        assert!(!timer.snapshot().is_start_enabled);
    }

    #[test]
    fn test_input_is_idempotent() {
        let (mut once, _) = timer_at(10, 0, 0);
        let (mut twice, _) = timer_at(10, 0, 0);
        once.on_time_input(TimeField::Hours, "13");
        twice.on_time_input(TimeField::Hours, "13");
        twice.on_time_input(TimeField::Hours, "13");
        assert_eq!(once.input(), twice.input());
        assert_eq!(once.end_time(), twice.end_time());
    }

    #[test]
    fn test_input_ignored_while_running() {
        let (mut timer, _clock) = timer_at(10, 0, 0);
        enter(&mut timer, "11", "00");
        timer.start();
        timer.on_time_input(TimeField::Hours, "15");
        assert_eq!(timer.input().hours, "11");
        assert_eq!(timer.end_time(), Some(local(2024, 3, 15, 11, 0, 0)));
    }

    #[test]
    fn test_cadence_switches_after_first_minute() {
        let (mut timer, clock) = timer_at(10, 0, 0);
        enter(&mut timer, "11", "00");
        timer.start();
        assert_eq!(timer.cadence(), Some(Cadence::Second));
        assert_eq!(timer.time_until_next_tick(), Some(TimeDelta::seconds(1)));

        run_seconds(&mut timer, &clock, 59);
        assert_eq!(timer.cadence(), Some(Cadence::Second));
        assert_eq!(timer.reading().elapsed_minutes, 0);

        run_seconds(&mut timer, &clock, 1);
        assert_eq!(timer.cadence(), Some(Cadence::Minute));
        assert_eq!(timer.reading().elapsed_minutes, 1);
        assert_eq!(timer.time_until_next_tick(), Some(TimeDelta::seconds(60)));
    }

    #[test]
    fn test_minute_ticks_follow_minute_boundaries() {
        let (mut timer, clock) = timer_at(10, 0, 40);
        enter(&mut timer, "11", "00");
        timer.start();
        // The start is anchored at 10:00:00, so the first minute ends 20s later.
        run_seconds(&mut timer, &clock, 20);
        assert_eq!(timer.reading().elapsed_minutes, 1);
        assert_eq!(timer.time_until_next_tick(), Some(TimeDelta::seconds(60)));
    }

    #[test]
    fn test_single_pending_callback_while_running() {
        let (mut timer, clock) = timer_at(10, 0, 0);
        enter(&mut timer, "10", "30");
        timer.start();
        let first = timer.pending_callback();
        assert!(first.is_some());

        timer.tick();
        let second = timer.pending_callback();
        assert!(second.is_some());
        assert_ne!(first, second);

        let before = timer.reading();
        clock.advance_secs(90);
        timer.fire(first.unwrap_or_default());
        assert_eq!(timer.reading(), before);
        assert_eq!(timer.pending_callback(), second);

        timer.fire(second.unwrap_or_default());
        assert_eq!(timer.reading().elapsed_minutes, 1);
        assert!(timer.pending_callback().is_some());
        assert_ne!(timer.pending_callback(), second);
    }

    #[test]
    fn test_running_invariants_hold_over_session() {
        let (mut timer, clock) = timer_at(9, 12, 0);
        enter(&mut timer, "10", "42");
        timer.start();
        let total = timer.focus_minutes(timer.now()).unwrap_or_default();
        assert_eq!(total, 90);

        let mut last_progress = 0;
        while timer.state() == RunState::Running {
            clock.advance_secs(7);
            timer.poll();
            let snapshot = timer.snapshot();
            if snapshot.is_running() {
                assert_eq!(snapshot.elapsed_minutes + snapshot.remaining_minutes, total);
            }
            assert!(snapshot.progress_percent >= last_progress);
            assert!(snapshot.progress_percent <= 100);
            last_progress = snapshot.progress_percent;
        }
        assert_eq!(last_progress, 100);
        assert!(clock.now() >= local(2024, 3, 15, 10, 42, 0));
        assert!(clock.now() < local(2024, 3, 15, 10, 42, 7));
    }

    #[test]
    fn test_clock_moving_backwards_never_goes_negative() {
        let (mut timer, clock) = timer_at(10, 0, 0);
        enter(&mut timer, "11", "00");
        timer.start();
        clock.advance_secs(20 * 60);
        timer.tick();
        let progress = timer.reading().progress_percent;
        assert_eq!(progress, 33);

        clock.set(local(2024, 3, 15, 9, 30, 0));
        timer.tick();
        let reading = timer.reading();
        assert_eq!(reading.elapsed_minutes, 0);
        assert_eq!(reading.remaining_minutes, 60);
        assert_eq!(reading.progress_percent, progress);
    }

    #[test]
    fn test_tick_past_end_completes() {
        let (mut timer, clock) = timer_at(10, 0, 0);
        enter(&mut timer, "10", "01");
        timer.start();
        clock.advance_secs(5 * 60);
        timer.tick();
        assert_eq!(timer.state(), RunState::Completed);
        assert_eq!(timer.reading().progress_percent, 100);
        assert_eq!(timer.reading().remaining_minutes, 0);
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let (mut timer, _clock) = timer_at(10, 0, 0);
        enter(&mut timer, "11", "00");
        timer.start();

        timer.confirm_reset();
        assert_eq!(timer.state(), RunState::Running);

        timer.request_reset();
        assert!(timer.snapshot().is_reset_pending);
        assert_eq!(timer.state(), RunState::Running);

        timer.cancel_reset();
        assert!(!timer.is_reset_pending());
        assert_eq!(timer.state(), RunState::Running);
        assert!(timer.pending_callback().is_some());
    }

    #[test]
    fn test_reset_round_trip_matches_fresh_timer() {
        let (mut timer, clock) = timer_at(10, 0, 0);
        enter(&mut timer, "11", "00");
        timer.start();
        run_seconds(&mut timer, &clock, 75);
        let stale = timer.pending_callback();

        timer.request_reset();
        timer.confirm_reset();

        let fresh = FocusTimer::with_clock(clock.clone(), Locale::Ko);
        assert_eq!(timer.snapshot(), fresh.snapshot());
        assert_eq!(timer.state(), RunState::Idle);
        assert!(timer.input().is_empty());
        assert_eq!(timer.end_time(), None);
        assert_eq!(timer.start_time(), None);
        assert_eq!(timer.pending_callback(), None);

        clock.advance_secs(3600);
        timer.poll();
        timer.fire(stale.unwrap_or_default());
        assert_eq!(timer.snapshot(), fresh.snapshot());
    }

    #[test]
    fn test_completed_is_terminal_until_reset() {
        let (mut timer, clock) = timer_at(10, 0, 0);
        enter(&mut timer, "10", "02");
        timer.start();
        run_seconds(&mut timer, &clock, 130);
        assert_eq!(timer.state(), RunState::Completed);

        timer.start();
        timer.on_time_input(TimeField::Hours, "12");
        timer.tick();
        assert_eq!(timer.state(), RunState::Completed);
        assert_eq!(timer.input().hours, "10");

        timer.request_reset();
        timer.confirm_reset();
        enter(&mut timer, "12", "00");
        timer.start();
        assert_eq!(timer.state(), RunState::Running);
    }

    #[test]
    fn test_running_snapshot_uses_start_anchor() {
        let (mut timer, clock) = timer_at(10, 0, 0);
        enter(&mut timer, "11", "30");
        timer.start();
        clock.advance_secs(30 * 60);
        timer.poll();

        let snapshot = timer.snapshot();
        assert_eq!(snapshot.start_time_display, "10:00");
        assert_eq!(snapshot.end_time_display.as_deref(), Some("11:30"));
        assert_eq!(snapshot.focus_minutes, Some(90));
        assert_eq!(snapshot.focus_duration_display.as_deref(), Some("1시간 30분"));
        assert_eq!(snapshot.elapsed_minutes, 30);
        assert_eq!(snapshot.remaining_minutes, 60);
        assert_eq!(snapshot.progress_percent, 33);
        assert!(!snapshot.is_start_enabled);
    }

    #[test]
    fn test_set_end_time_text() {
        let (mut timer, _clock) = timer_at(8, 0, 0);
        assert!(timer.set_end_time_text("9:15"));
        assert_eq!(timer.input().hours, "09");
        assert_eq!(timer.input().minutes, "15");
        assert_eq!(timer.end_time(), Some(local(2024, 3, 15, 9, 15, 0)));

        assert!(!timer.set_end_time_text("930"));
        assert_eq!(timer.input().hours, "09");
        assert_eq!(timer.end_time(), Some(local(2024, 3, 15, 9, 15, 0)));
    }

    #[test]
    fn test_end_time_shown_while_under_a_minute_away() {
        let (mut timer, _clock) = timer_at(10, 4, 30);
        enter(&mut timer, "10", "05");

        let snapshot = timer.snapshot();
        assert!(snapshot.input_valid);
        assert_eq!(snapshot.end_time_display.as_deref(), Some("10:05"));
        assert_eq!(snapshot.focus_minutes, None);
        assert_eq!(snapshot.focus_duration_display, None);
        assert!(!snapshot.is_start_enabled);
    }

    #[test]
    fn test_tick_with_empty_session_completes() {
        let (mut timer, clock) = timer_at(10, 0, 0);
        enter(&mut timer, "11", "00");
        timer.start();
        timer.end_time = timer.start_time;
        clock.advance_secs(5);
        timer.tick();

        assert_eq!(timer.state(), RunState::Completed);
        assert_eq!(
            timer.reading(),
            Reading {
                elapsed_minutes: 0,
                remaining_minutes: 0,
                progress_percent: 100,
            }
        );
        assert_eq!(timer.pending_callback(), None);
    }

    #[test]
    fn test_tick_with_end_before_start_completes() {
        let (mut timer, _clock) = timer_at(10, 0, 0);
        enter(&mut timer, "11", "00");
        timer.start();
        timer.end_time = timer.start_time.map(|start| start - TimeDelta::minutes(5));
        timer.tick();

        assert_eq!(timer.state(), RunState::Completed);
        assert_eq!(timer.reading().elapsed_minutes, 0);
        assert_eq!(timer.reading().remaining_minutes, 0);
        assert_eq!(timer.reading().progress_percent, 100);
        assert_eq!(timer.pending_callback(), None);
    }

    #[test]
    fn test_backward_clock_jump_rearms_tick() {
        let (mut timer, clock) = timer_at(10, 0, 0);
        enter(&mut timer, "11", "00");
        timer.start();
        run_seconds(&mut timer, &clock, 20 * 60);
        assert_eq!(timer.reading().elapsed_minutes, 20);

        clock.set(local(2024, 3, 15, 10, 15, 0));
        timer.poll();
        assert_eq!(timer.reading().elapsed_minutes, 15);
        assert_eq!(timer.reading().remaining_minutes, 45);
        assert!(timer.time_until_next_tick() <= Some(TimeDelta::seconds(60)));

        run_seconds(&mut timer, &clock, 60);
        assert_eq!(timer.reading().elapsed_minutes, 16);
    }
}
