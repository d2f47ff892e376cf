use chrono::{DateTime, FixedOffset, Local, TimeZone, Timelike};

use crate::error::ClockError;

/// Source of local wall-clock time.
pub trait TimeSource {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The system clock in the local time zone.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().into()
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Copy, Clone)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl TimeSource for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Whole local hour, 0..=23.
#[inline]
pub fn current_hour<Tz: TimeZone>(now: &DateTime<Tz>) -> f64 {
    f64::from(now.hour())
}

/// Local minute including the elapsed fraction of it, in [0, 60).
#[inline]
pub fn current_minute<Tz: TimeZone>(now: &DateTime<Tz>) -> f64 {
    // Leap seconds report nanos past 1e9; keep them inside the minute.
    let nanos = now.nanosecond().min(999_999_999);
    let seconds = f64::from(now.second()) + f64::from(nanos) / 1e9;
    f64::from(now.minute()) + seconds / 60.0
}

/// Start of the first whole minute strictly after `now`.
///
/// An instant exactly on a boundary advances a full minute.
pub fn next_minute_boundary<Tz: TimeZone>(now: &DateTime<Tz>) -> Result<DateTime<Tz>, ClockError> {
    let seconds = (now.timestamp().div_euclid(60) + 1) * 60;
    DateTime::from_timestamp(seconds, 0)
        .map(|utc| utc.with_timezone(&now.timezone()))
        .ok_or(ClockError::TimestampOutOfRange { seconds })
}

/// Hour and minute fed to the face.
///
/// `minute` keeps its fraction for smooth hands; the sentence uses the whole
/// values from [`TimeOfDay::whole_hour`] and [`TimeOfDay::whole_minute`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TimeOfDay {
    hour: f64,
    minute: f64,
}

impl TimeOfDay {
    /// Validated constructor: hour in [0, 24), minute in [0, 60).
    pub fn new(hour: f64, minute: f64) -> Result<Self, ClockError> {
        check("hour", hour, 24.0)?;
        check("minute", minute, 60.0)?;
        Ok(Self { hour, minute })
    }

    pub fn from_datetime<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        Self { hour: current_hour(now), minute: current_minute(now) }
    }

    /// Hour, in [0, 24).
    #[inline]
    pub fn hour(self) -> f64 {
        self.hour
    }

    /// Minute with its fraction, in [0, 60).
    #[inline]
    pub fn minute(self) -> f64 {
        self.minute
    }

    #[inline]
    pub fn whole_hour(self) -> i64 {
        self.hour.trunc() as i64
    }

    #[inline]
    pub fn whole_minute(self) -> i64 {
        self.minute.trunc() as i64
    }
}

fn check(field: &'static str, value: f64, end: f64) -> Result<(), ClockError> {
    if !value.is_finite() {
        return Err(ClockError::NonFiniteTime { field, value });
    }
    if !(0.0..end).contains(&value) {
        return Err(ClockError::TimeOutOfRange { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap()
    }

    // ── readings ──────────────────────────────────────────────────────────

    #[test]
    fn hour_is_whole_local_hour() {
        assert_eq!(current_hour(&at("2024-05-01T15:59:59+02:00")), 15.0);
        assert_eq!(current_hour(&at("2024-05-01T00:00:00-07:00")), 0.0);
    }

    #[test]
    fn minute_carries_seconds_fraction() {
        assert_eq!(current_minute(&at("2024-05-01T15:20:00+02:00")), 20.0);
        assert_eq!(current_minute(&at("2024-05-01T15:20:30+02:00")), 20.5);
    }

    #[test]
    fn exact_hour_boundary_is_that_hour() {
        let t = TimeOfDay::from_datetime(&at("2024-05-01T03:00:00.000+00:00"));
        assert_eq!(t.whole_hour(), 3);
        assert_eq!(t.whole_minute(), 0);
    }

    #[test]
    fn whole_minute_truncates() {
        let t = TimeOfDay::from_datetime(&at("2024-05-01T09:44:59.999+00:00"));
        assert_eq!(t.whole_minute(), 44);
        assert!(t.minute() > 44.99);
    }

    // ── next_minute_boundary ──────────────────────────────────────────────

    #[test]
    fn boundary_is_next_whole_minute() {
        let next = next_minute_boundary(&at("2024-05-01T15:20:17.250+02:00")).unwrap();
        assert_eq!(next, at("2024-05-01T15:21:00+02:00"));
        assert_eq!(next.offset(), at("2024-05-01T15:21:00+02:00").offset());
    }

    #[test]
    fn boundary_is_strictly_after_now() {
        let now = at("2024-05-01T15:20:00+02:00");
        assert_eq!(next_minute_boundary(&now).unwrap(), at("2024-05-01T15:21:00+02:00"));
    }

    #[test]
    fn boundary_rolls_over_midnight() {
        let next = next_minute_boundary(&at("2024-12-31T23:59:59.999+00:00")).unwrap();
        assert_eq!(next, at("2025-01-01T00:00:00+00:00"));
    }

    #[test]
    fn boundary_respects_half_hour_offsets() {
        let next = next_minute_boundary(&at("2024-05-01T10:07:41+05:30")).unwrap();
        assert_eq!(next, at("2024-05-01T10:08:00+05:30"));
    }

    // ── TimeOfDay::new ────────────────────────────────────────────────────

    #[test]
    fn new_rejects_non_finite() {
        assert!(matches!(
            TimeOfDay::new(f64::NAN, 0.0),
            Err(ClockError::NonFiniteTime { field: "hour", .. })
        ));
        assert!(matches!(
            TimeOfDay::new(3.0, f64::INFINITY),
            Err(ClockError::NonFiniteTime { field: "minute", .. })
        ));
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert_eq!(
            TimeOfDay::new(24.0, 0.0),
            Err(ClockError::TimeOutOfRange { field: "hour", value: 24.0 })
        );
        assert_eq!(
            TimeOfDay::new(3.0, -0.5),
            Err(ClockError::TimeOutOfRange { field: "minute", value: -0.5 })
        );
        assert!(TimeOfDay::new(23.0, 59.99).is_ok());
    }
}
