use std::time::Duration as StdDuration;
use tracing::{trace, warn};

pub const PROGRESS_UPDATE_INTERVAL: StdDuration = StdDuration::from_millis(100);
pub const LOG_TARGET: &str = "lost_sounds::playback::progress";

/// Holds the normalized playback progress last reported by the player service.
///
/// The stored value is only ever replaced by a new sample. Nothing here
/// advances it between callbacks, so the scrubber is piecewise constant.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProgressTracker {
    progress: f64,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored progress with the backend's sample.
    /// Returns `true` if the stored value changed.
    pub fn on_player_progress(&mut self, played_fraction: f64) -> bool {
        if !played_fraction.is_finite() {
            warn!(target: LOG_TARGET, "Discarding non-finite progress sample: {}", played_fraction);
            return false;
        }
        trace!(target: LOG_TARGET, "Progress sample: {:.4}", played_fraction);
        let changed = self.progress != played_fraction;
        self.progress = played_fraction;
        changed
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }
}

/// Maps a pointer position on the scrubber track to a seek fraction.
///
/// Clicks at `track_left` map to exactly `0.0` and clicks at
/// `track_left + track_width` to exactly `1.0`. A collapsed or invalid track
/// yields `0.0`.
pub fn fraction_from_gesture(pointer_x: f64, track_left: f64, track_width: f64) -> f64 {
    if !(track_width > 0.0) || !track_width.is_finite() {
        return 0.0;
    }
    // Edge checks first: `(left + width) - left` is not always `width` in f64.
    if pointer_x <= track_left {
        return 0.0;
    }
    if pointer_x >= track_left + track_width {
        return 1.0;
    }
    let relative = (pointer_x - track_left) / track_width;
    if relative.is_nan() {
        return 0.0;
    }
    relative.clamp(0.0, 1.0)
}
