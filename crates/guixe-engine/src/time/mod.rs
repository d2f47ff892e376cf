//! Time subsystem.
//!
//! Reads the wall clock and turns it into the inputs the face needs, without
//! owning any scheduling loop. Intended usage:
//! - one `MinuteClock` per displayed face
//! - sleep for `until_next_boundary()`, then call `tick()` and recompose

mod minute_clock;
mod source;

pub use minute_clock::{MinuteClock, MinuteTick};
pub use source::{
    FixedClock, SystemClock, TimeOfDay, TimeSource, current_hour, current_minute,
    next_minute_boundary,
};
