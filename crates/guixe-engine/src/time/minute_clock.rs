use std::time::Duration;

use chrono::{DateTime, FixedOffset};

use crate::error::ClockError;

use super::source::{SystemClock, TimeOfDay, TimeSource, next_minute_boundary};

/// Clock reading taken at a tick.
#[derive(Debug, Copy, Clone)]
pub struct MinuteTick {
    /// Wall-clock instant of the tick.
    pub now: DateTime<FixedOffset>,

    /// Face inputs derived from `now`.
    pub time: TimeOfDay,

    /// Monotonic tick counter.
    pub tick_index: u64,
}

/// Minute-aligned tick source.
///
/// The clock never sleeps itself; the caller waits for
/// [`until_next_boundary`](Self::until_next_boundary) and then calls
/// [`tick`](Self::tick), so the sentence and hands change exactly when the
/// wall-clock minute does.
#[derive(Debug, Clone)]
pub struct MinuteClock<S = SystemClock> {
    source: S,
    tick_index: u64,
}

impl MinuteClock<SystemClock> {
    /// Creates a clock reading local system time.
    pub fn system() -> Self {
        Self::new(SystemClock)
    }
}

impl<S: TimeSource> MinuteClock<S> {
    pub fn new(source: S) -> Self {
        Self { source, tick_index: 0 }
    }

    /// Reads the source and returns a new `MinuteTick`.
    pub fn tick(&mut self) -> MinuteTick {
        let now = self.source.now();

        let tick = MinuteTick {
            now,
            time: TimeOfDay::from_datetime(&now),
            tick_index: self.tick_index,
        };

        self.tick_index = self.tick_index.wrapping_add(1);

        log::trace!("minute tick {} at {}", tick.tick_index, now);
        tick
    }

    /// Time left until the next whole minute.
    pub fn until_next_boundary(&self) -> Result<Duration, ClockError> {
        let now = self.source.now();
        let next = next_minute_boundary(&now)?;

        // `next` is strictly after `now`, so the delta is never negative.
        Ok((next - now).to_std().unwrap_or(Duration::ZERO))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;

    fn fixed(rfc3339: &str) -> MinuteClock<FixedClock> {
        MinuteClock::new(FixedClock(DateTime::parse_from_rfc3339(rfc3339).unwrap()))
    }

    #[test]
    fn ticks_count_up() {
        let mut clock = fixed("2024-05-01T08:05:00+00:00");
        assert_eq!(clock.tick().tick_index, 0);
        assert_eq!(clock.tick().tick_index, 1);
        assert_eq!(clock.tick().tick_index, 2);
    }

    #[test]
    fn tick_carries_face_inputs() {
        let mut clock = fixed("2024-05-01T20:45:30+01:00");
        let tick = clock.tick();
        assert_eq!(tick.time.hour(), 20.0);
        assert_eq!(tick.time.minute(), 45.5);
        assert_eq!(tick.time.whole_minute(), 45);
    }

    #[test]
    fn waits_until_the_next_minute() {
        let clock = fixed("2024-05-01T08:05:42.500+00:00");
        assert_eq!(clock.until_next_boundary().unwrap(), Duration::from_millis(17_500));
    }

    #[test]
    fn on_a_boundary_waits_a_full_minute() {
        let clock = fixed("2024-05-01T08:05:00+00:00");
        assert_eq!(clock.until_next_boundary().unwrap(), Duration::from_secs(60));
    }
}
