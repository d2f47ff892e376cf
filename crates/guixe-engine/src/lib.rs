//! Guixe word clock engine.
//!
//! Pure geometry and time-to-word mapping for an analog clock face whose
//! time reads as a sentence, `"WORD1 IS WORD2"`, built from twelve
//! user-editable words. A renderer owns the window and widgets; once per
//! minute it composes a [`ClockFrame`] and draws the recorded
//! [`scene::DrawList`].
//!
//! ```rust
//! use guixe_engine::{ClockConfig, ClockFrame, TimeOfDay};
//! use guixe_engine::scene::DrawList;
//!
//! let config = ClockConfig::default();
//! let frame = ClockFrame::compose(&config, TimeOfDay::new(1.0, 0.0).unwrap());
//! assert_eq!(frame.sentence.to_string(), "DREAM IS WORK");
//!
//! let mut list = DrawList::new();
//! frame.record(&config, &mut list);
//! assert_eq!(list.len(), 18);
//! ```

pub mod config;
pub mod coords;
pub mod error;
pub mod face;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod time;
pub mod words;

pub use config::{ClockConfig, ClockEvent};
pub use error::ClockError;
pub use face::{ClockFrame, HourLabel};
pub use time::TimeOfDay;
pub use words::{Sentence, WordList};
