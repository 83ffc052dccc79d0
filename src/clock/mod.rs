//! Wall-clock display: sample formatting and the once-per-second ticker

mod sample;
mod ticker;

pub const LOG_TARGET: &str = "lost_sounds::clock";

pub use sample::{ClockDisplay, ClockSample};
pub use ticker::{ClockSource, ClockTicker, CLOCK_TICK_INTERVAL};
