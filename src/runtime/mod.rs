//! Ambient host capabilities: wall clock, randomness, and scoped timers.
//!
//! Panels never touch `js_sys::Date` or an RNG directly; they go through the
//! handles provided here via context, so tests can substitute fixed sources.

mod clock;
mod random;
mod ticker;

pub use clock::{BrowserClock, ClockReading, ClockSource, FixedClock, WallClock};
pub use random::RandomSource;
pub use ticker::scoped_interval;
