use crate::playback::service::PlayerService;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

const LOG_TARGET: &str = "lost_sounds::playback::transport";

/// Owns the play/pause flag and turns user gestures into player commands.
///
/// Until a backend is attached every command is accepted and dropped. The
/// play/pause flag still flips, and is pushed to the backend on attach.
pub struct TransportController {
    player: Option<Arc<dyn PlayerService>>,
    is_playing: bool,
}

impl TransportController {
    pub fn new() -> Self {
        Self {
            player: None,
            is_playing: false,
        }
    }

    /// Binds the player backend and brings it in line with the current flag.
    #[instrument(skip(self, player))]
    pub async fn attach(&mut self, player: Arc<dyn PlayerService>) {
        info!(target: LOG_TARGET, "Player service attached.");
        self.player = Some(player);
        if self.is_playing {
            self.issue_play_state().await;
        }
    }

    pub fn is_ready(&self) -> bool {
        self.player.is_some()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Flips the play/pause flag and commands the backend. Returns the new flag.
    #[instrument(skip(self))]
    pub async fn toggle(&mut self) -> bool {
        self.is_playing = !self.is_playing;
        info!(target: LOG_TARGET, "Playback toggled, playing = {}.", self.is_playing);
        self.issue_play_state().await;
        self.is_playing
    }

    /// Clears the play flag after the backend stopped at the end of the media.
    /// Returns `true` if the flag changed.
    pub fn on_playback_ended(&mut self) -> bool {
        if !self.is_playing {
            return false;
        }
        info!(target: LOG_TARGET, "Player reached the end of the media.");
        self.is_playing = false;
        true
    }

    /// Seeks relative to the backend's current position.
    ///
    /// An unknown position counts as zero. The target is not clamped here.
    #[instrument(skip(self))]
    pub async fn skip(&mut self, delta_seconds: f64) {
        let Some(player) = self.player.as_ref() else {
            debug!(target: LOG_TARGET, "Skip ignored, player service not attached yet.");
            return;
        };
        let current = player.current_position_seconds().await.unwrap_or(0.0);
        let target = current + delta_seconds;
        debug!(target: LOG_TARGET, "Skipping {:+}s: {:.2}s -> {:.2}s", delta_seconds, current, target);
        if let Err(e) = player.seek_absolute(target).await {
            warn!(target: LOG_TARGET, "Seek to {:.2}s was not applied: {}", target, e);
        }
    }

    /// Seeks to a fraction of the total duration. Callers clamp to `[0, 1]`.
    #[instrument(skip(self))]
    pub async fn seek_to_fraction(&mut self, fraction: f64) {
        let Some(player) = self.player.as_ref() else {
            debug!(target: LOG_TARGET, "Seek ignored, player service not attached yet.");
            return;
        };
        if let Err(e) = player.seek_fraction(fraction).await {
            warn!(target: LOG_TARGET, "Seek to fraction {:.4} was not applied: {}", fraction, e);
        }
    }

    async fn issue_play_state(&self) {
        let Some(player) = self.player.as_ref() else {
            debug!(target: LOG_TARGET, "Player service not attached yet, play state will be applied on attach.");
            return;
        };
        let result = if self.is_playing {
            player.play().await
        } else {
            player.pause().await
        };
        if let Err(e) = result {
            warn!(target: LOG_TARGET, "Player did not accept play state {}: {}", self.is_playing, e);
        }
    }
}

impl Default for TransportController {
    fn default() -> Self {
        Self::new()
    }
}
