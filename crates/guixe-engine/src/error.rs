use std::fmt;

/// Errors raised by the engine.
///
/// Per-frame geometry never fails; these come from loading configuration,
/// applying UI events, or validating clock readings.
#[derive(Debug, Clone, PartialEq)]
pub enum ClockError {
    /// A word list must hold exactly one word per hour position.
    InvalidWordList { len: usize },
    /// A word was empty or only whitespace.
    EmptyWord { index: usize },
    /// A word edit addressed a position outside 0..12.
    WordIndexOutOfRange { index: usize },
    /// A time component was NaN or infinite.
    NonFiniteTime { field: &'static str, value: f64 },
    /// A time component was outside its range (hour [0, 24), minute [0, 60)).
    TimeOutOfRange { field: &'static str, value: f64 },
    /// A timestamp could not be represented as a date-time.
    TimestampOutOfRange { seconds: i64 },
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockError::InvalidWordList { len } => {
                write!(f, "word list must have exactly 12 words, got {len}")
            }
            ClockError::EmptyWord { index } => {
                write!(f, "word {index} is empty")
            }
            ClockError::WordIndexOutOfRange { index } => {
                write!(f, "word index {index} is outside 0..12")
            }
            ClockError::NonFiniteTime { field, value } => {
                write!(f, "{field} is not a finite number: {value}")
            }
            ClockError::TimeOutOfRange { field, value } => {
                write!(f, "{field} is out of range: {value}")
            }
            ClockError::TimestampOutOfRange { seconds } => {
                write!(f, "timestamp {seconds}s is outside the supported date range")
            }
        }
    }
}

impl std::error::Error for ClockError {}
