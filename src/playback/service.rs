//! Contract between the widget and whatever backend actually renders the media.

use crate::playback::error::PlayerError;
use crate::widget::WidgetCommand;
use async_trait::async_trait;
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::trace;

use super::LOG_TARGET;

/// Capabilities the transport controller needs from a player backend.
///
/// Implementations are free to clamp or reject out-of-range seeks; callers
/// never rely on either behavior.
#[async_trait]
pub trait PlayerService: Send + Sync {
    /// Starts (or resumes) playback.
    async fn play(&self) -> Result<(), PlayerError>;

    /// Pauses playback. Progress callbacks stop until the next `play`.
    async fn pause(&self) -> Result<(), PlayerError>;

    /// Seeks to an absolute position in seconds.
    async fn seek_absolute(&self, seconds: f64) -> Result<(), PlayerError>;

    /// Seeks to a fraction of the total duration.
    async fn seek_fraction(&self, fraction: f64) -> Result<(), PlayerError>;

    /// Current position in seconds, or `None` if the backend has not reported one yet.
    async fn current_position_seconds(&self) -> Option<f64>;
}

/// Channel a backend uses to deliver played-fraction samples to the widget.
///
/// Holds only a weak reference to the command channel, so a backend that
/// outlives every widget handle does not keep the widget loop running.
#[derive(Debug, Clone)]
pub struct ProgressSink {
    tx: mpsc::WeakSender<WidgetCommand>,
}

impl ProgressSink {
    pub fn new(tx: &mpsc::Sender<WidgetCommand>) -> Self {
        Self { tx: tx.downgrade() }
    }

    /// Posts a sample. Returns `false` once the widget has shut down.
    ///
    /// A full channel drops the sample; the next one supersedes it anyway.
    pub fn report(&self, played_fraction: f64) -> bool {
        self.post(WidgetCommand::PlayerProgress(played_fraction))
    }

    /// Tells the widget the backend stopped on its own at the end of the media.
    pub fn report_ended(&self) -> bool {
        self.post(WidgetCommand::PlayerEnded)
    }

    pub fn is_closed(&self) -> bool {
        match self.tx.upgrade() {
            Some(tx) => tx.is_closed(),
            None => true,
        }
    }

    fn post(&self, command: WidgetCommand) -> bool {
        let Some(tx) = self.tx.upgrade() else {
            return false;
        };
        match tx.try_send(command) {
            Ok(()) => true,
            Err(TrySendError::Full(command)) => {
                trace!(target: LOG_TARGET, "Command channel full, dropping {:?}", command);
                true
            }
            Err(TrySendError::Closed(_)) => false,
        }
    }
}
