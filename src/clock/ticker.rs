use crate::clock::{ClockSample, LOG_TARGET};
use crate::widget::WidgetCommand;
use std::time::Duration as StdDuration;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info, instrument, trace, warn};

pub const CLOCK_TICK_INTERVAL: StdDuration = StdDuration::from_secs(1);

/// Produces the sample posted on each tick. Swappable so tests can pin the time.
pub type ClockSource = std::sync::Arc<dyn Fn() -> ClockSample + Send + Sync>;

/// Owns the periodic clock task of one widget instance.
///
/// `stop` consumes the ticker, so the task is released exactly once.
#[derive(Debug)]
pub struct ClockTicker {
    task_handle: JoinHandle<()>,
    shutdown_tx: broadcast::Sender<()>,
}

impl ClockTicker {
    /// Spawns the ticker. The first sample is posted immediately.
    ///
    /// The ticker only holds a weak sender: it exits on its own once every
    /// strong sender of the command channel is gone.
    pub fn spawn(command_tx: mpsc::WeakSender<WidgetCommand>, period: StdDuration, source: ClockSource) -> Self {
        let (shutdown_tx, mut shutdown_rx) = broadcast::channel::<()>(1);
        info!(target: LOG_TARGET, "Spawning clock ticker with period {:?}.", period);

        let task_handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    biased;
                    _ = shutdown_rx.recv() => {
                        debug!(target: LOG_TARGET, "Clock ticker received shutdown signal.");
                        break;
                    }
                    _ = ticker.tick() => {
                        let Some(command_tx) = command_tx.upgrade() else {
                            debug!(target: LOG_TARGET, "Command channel has no senders left, clock ticker exiting.");
                            break;
                        };
                        let sample = source();
                        trace!(target: LOG_TARGET, "Tick: {} {}", sample.time_label(), sample.day_label());
                        match command_tx.try_send(WidgetCommand::ClockTick(sample)) {
                            Ok(()) => {}
                            Err(TrySendError::Full(_)) => {
                                trace!(target: LOG_TARGET, "Command channel full, dropping clock sample.");
                            }
                            Err(TrySendError::Closed(_)) => {
                                debug!(target: LOG_TARGET, "Command channel closed, clock ticker exiting.");
                                break;
                            }
                        }
                    }
                }
            }
        });

        Self {
            task_handle,
            shutdown_tx,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task_handle.is_finished()
    }

    /// Signals the task and waits for it, aborting after a timeout.
    #[instrument(skip(self))]
    pub async fn stop(mut self) {
        if let Err(e) = self.shutdown_tx.send(()) {
            trace!(target: LOG_TARGET, "Shutdown signal not delivered (task already gone): {}", e);
        }
        let timeout_duration = StdDuration::from_secs(2);
        tokio::select! {
            biased;
            result = &mut self.task_handle => {
                match result {
                    Ok(()) => info!(target: LOG_TARGET, "Clock ticker stopped."),
                    Err(e) if e.is_cancelled() => info!(target: LOG_TARGET, "Clock ticker was cancelled."),
                    Err(e) => error!(target: LOG_TARGET, "Clock ticker join error: {:?}", e),
                }
            }
            _ = tokio::time::sleep(timeout_duration) => {
                warn!(target: LOG_TARGET, "Clock ticker did not stop within {:?}, aborting.", timeout_duration);
                self.task_handle.abort();
            }
        }
    }
}
