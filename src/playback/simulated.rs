//! In-process player backend with a fixed-length virtual timeline.
//!
//! Stands in for a real video backend: it keeps its own clock, clamps seeks
//! into `[0, duration]`, and reports the played fraction on a fixed cadence
//! while playing. It is silent while paused. At the end of the media it pauses
//! itself and says so through the sink; the next `play` starts over.

use crate::playback::error::PlayerError;
use crate::playback::service::{PlayerService, ProgressSink};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration as StdDuration;
use tokio::sync::Mutex as TokioMutex;
use tokio::task::JoinHandle;
use tokio::time::{interval, Instant, MissedTickBehavior};
use tracing::{debug, info, trace};

const LOG_TARGET: &str = "lost_sounds::playback::simulated";

#[derive(Debug)]
struct Timeline {
    duration_secs: f64,
    /// Position at `playing_since` (or the frozen position while paused).
    anchor_secs: f64,
    playing_since: Option<Instant>,
    position_known: bool,
}

impl Timeline {
    fn position_at(&self, now: Instant) -> f64 {
        let elapsed = self
            .playing_since
            .map(|since| now.saturating_duration_since(since).as_secs_f64())
            .unwrap_or(0.0);
        (self.anchor_secs + elapsed).min(self.duration_secs)
    }

    fn fraction_at(&self, now: Instant) -> f64 {
        if self.duration_secs <= 0.0 {
            return 0.0;
        }
        self.position_at(now) / self.duration_secs
    }

    fn freeze(&mut self, now: Instant) {
        self.anchor_secs = self.position_at(now);
        self.playing_since = None;
    }
}

/// Player backend driven by a virtual clock.
pub struct VirtualPlayer {
    timeline: Arc<TokioMutex<Timeline>>,
    reporter: JoinHandle<()>,
}

impl VirtualPlayer {
    /// Creates the backend and spawns its progress reporting task.
    pub fn spawn(duration_secs: f64, progress_interval: StdDuration, sink: ProgressSink) -> Arc<Self> {
        let timeline = Arc::new(TokioMutex::new(Timeline {
            duration_secs: duration_secs.max(0.0),
            anchor_secs: 0.0,
            playing_since: None,
            position_known: false,
        }));
        info!(target: LOG_TARGET, "Spawning virtual player ({:.1}s, reporting every {:?}).", duration_secs, progress_interval);
        let reporter = tokio::spawn(report_progress(timeline.clone(), progress_interval, sink));
        Arc::new(Self { timeline, reporter })
    }

    pub async fn duration_secs(&self) -> f64 {
        self.timeline.lock().await.duration_secs
    }

    pub async fn is_playing(&self) -> bool {
        self.timeline.lock().await.playing_since.is_some()
    }
}

impl Drop for VirtualPlayer {
    fn drop(&mut self) {
        self.reporter.abort();
    }
}

/// Emits the played fraction while the timeline is running; stops at the end
/// of the media and exits when the widget goes away.
async fn report_progress(timeline: Arc<TokioMutex<Timeline>>, period: StdDuration, sink: ProgressSink) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        if sink.is_closed() {
            debug!(target: LOG_TARGET, "Progress sink closed, reporter exiting.");
            break;
        }
        let (fraction, ended) = {
            let mut tl = timeline.lock().await;
            if tl.playing_since.is_none() {
                continue;
            }
            let now = Instant::now();
            let fraction = tl.fraction_at(now);
            let ended = tl.position_at(now) >= tl.duration_secs;
            if ended {
                debug!(target: LOG_TARGET, "Reached end of media, pausing.");
                tl.freeze(now);
            }
            (fraction, ended)
        };
        trace!(target: LOG_TARGET, "Reporting fraction {:.4}", fraction);
        if !sink.report(fraction) {
            break;
        }
        if ended && !sink.report_ended() {
            break;
        }
    }
}

#[async_trait]
impl PlayerService for VirtualPlayer {
    async fn play(&self) -> Result<(), PlayerError> {
        let mut tl = self.timeline.lock().await;
        let now = Instant::now();
        if tl.duration_secs <= 0.0 {
            return Err(PlayerError::Rejected("media has no duration".to_string()));
        }
        if tl.playing_since.is_none() && tl.position_at(now) >= tl.duration_secs {
            debug!(target: LOG_TARGET, "Play at end of media, restarting from the beginning.");
            tl.anchor_secs = 0.0;
        }
        if tl.playing_since.is_none() {
            tl.playing_since = Some(now);
            tl.position_known = true;
        }
        Ok(())
    }

    async fn pause(&self) -> Result<(), PlayerError> {
        let mut tl = self.timeline.lock().await;
        tl.freeze(Instant::now());
        Ok(())
    }

    async fn seek_absolute(&self, seconds: f64) -> Result<(), PlayerError> {
        if !seconds.is_finite() {
            return Err(PlayerError::Rejected(format!("invalid seek target {}", seconds)));
        }
        let mut tl = self.timeline.lock().await;
        tl.anchor_secs = seconds.clamp(0.0, tl.duration_secs);
        tl.position_known = true;
        if tl.playing_since.is_some() {
            tl.playing_since = Some(Instant::now());
        }
        debug!(target: LOG_TARGET, "Seeked to {:.2}s (requested {:.2}s).", tl.anchor_secs, seconds);
        Ok(())
    }

    async fn seek_fraction(&self, fraction: f64) -> Result<(), PlayerError> {
        let duration = self.timeline.lock().await.duration_secs;
        self.seek_absolute(fraction * duration).await
    }

    async fn current_position_seconds(&self) -> Option<f64> {
        let tl = self.timeline.lock().await;
        if !tl.position_known {
            return None;
        }
        Some(tl.position_at(Instant::now()))
    }
}
