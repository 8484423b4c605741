//! Turns a chosen wall-clock time into the next matching instant.
use chrono::{DateTime, Local, LocalResult, NaiveDateTime, TimeDelta, TimeZone, Timelike};

/// Next instant strictly after `now` showing `hours:minutes:00` on the local clock.
pub fn resolve(hours: u32, minutes: u32, now: DateTime<Local>) -> DateTime<Local> {
    let hours = hours.min(23);
    let minutes = minutes.min(59);
    let mut date = now.date_naive();
    loop {
        if let Some(naive) = date.and_hms_opt(hours, minutes, 0) {
            let candidate = local_instant(naive);
            if candidate > now {
                return candidate;
            }
        }
        match date.succ_opt() {
            Some(next) => date = next,
            None => return now + TimeDelta::minutes(1),
        }
    }
}

/// Maps a local wall time to an instant; gaps move forward, overlaps take the earlier one.
fn local_instant(naive: NaiveDateTime) -> DateTime<Local> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(instant) => instant,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => Local
            .from_local_datetime(&(naive + TimeDelta::hours(1)))
            .earliest()
            .unwrap_or_else(|| Local.from_utc_datetime(&naive)),
    }
}

/// Drops seconds and sub-seconds.
pub fn truncate_to_minute(instant: DateTime<Local>) -> DateTime<Local> {
    instant
        .with_nanosecond(0)
        .and_then(|t| t.with_second(0))
        .unwrap_or(instant)
}

/// Whole minutes from `from` to `to`, truncated toward zero.
pub fn minutes_between(from: DateTime<Local>, to: DateTime<Local>) -> i64 {
    to.signed_duration_since(from).num_minutes()
}
