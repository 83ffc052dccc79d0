use crate::clock::{ClockSample, ClockSource, ClockTicker};
use crate::media::MediaReference;
use crate::news::{NewsApiContract, NewsItem};
use crate::playback::{PlayerService, ProgressSink, ProgressTracker, TransportController};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, instrument, trace};

mod command_handler;
mod run_loop;
mod state;

pub use state::{PlaybackState, WidgetCommand, WidgetSnapshot, WidgetUpdate};

const LOG_TARGET: &str = "lost_sounds::widget";

/// The news source a widget reads once at startup.
pub struct NewsFeed {
    pub api: Arc<dyn NewsApiContract>,
    pub tag: String,
    pub per_page: usize,
}

/// Owns all widget state. Run it as a Tokio task with `Widget::run`; drive it
/// through the `WidgetHandle` returned by `Widget::new`. The loop ends on
/// `Shutdown` or once every handle has been dropped.
pub struct Widget {
    // --- State ---
    media: MediaReference,
    transport: TransportController,
    progress: ProgressTracker,
    clock: Option<ClockSample>,
    news: Vec<NewsItem>,

    // --- Communication ---
    command_rx: mpsc::Receiver<WidgetCommand>,
    /// Weak, so only `WidgetHandle`s keep the loop alive.
    internal_command_tx: mpsc::WeakSender<WidgetCommand>,
    update_tx: broadcast::Sender<WidgetUpdate>,

    // --- Side streams ---
    clock_source: ClockSource,
    clock_ticker: Option<ClockTicker>,
    news_feed: Option<NewsFeed>,
    news_task: Option<JoinHandle<()>>,
}

impl Widget {
    /// Creates a widget for `media` and the handle used to command it.
    pub fn new(media: MediaReference, command_buffer_size: usize, update_capacity: usize) -> (Self, WidgetHandle) {
        let (command_tx, command_rx) = mpsc::channel(command_buffer_size);
        let (update_tx, _) = broadcast::channel(update_capacity);

        let widget = Widget {
            media,
            transport: TransportController::new(),
            progress: ProgressTracker::new(),
            clock: None,
            news: Vec::new(),
            command_rx,
            internal_command_tx: command_tx.downgrade(),
            update_tx,
            clock_source: Arc::new(ClockSample::now),
            clock_ticker: None,
            news_feed: None,
            news_task: None,
        };

        (widget, WidgetHandle { tx: command_tx })
    }

    /// Replaces the wall clock used by the ticker.
    pub fn with_clock_source(mut self, source: ClockSource) -> Self {
        self.clock_source = source;
        self
    }

    /// Configures the one-shot headline read performed when the loop starts.
    pub fn with_news_feed(mut self, feed: NewsFeed) -> Self {
        self.news_feed = Some(feed);
        self
    }

    /// Subscribes to widget state updates.
    pub fn subscribe(&self) -> broadcast::Receiver<WidgetUpdate> {
        self.update_tx.subscribe()
    }

    fn playback_state(&self) -> PlaybackState {
        PlaybackState {
            is_playing: self.transport.is_playing(),
            progress: self.progress.progress(),
        }
    }

    fn broadcast_update(&self, update: WidgetUpdate) {
        trace!(target: LOG_TARGET, "Broadcasting update: {:?}", update);
        if self.update_tx.send(update).is_err() {
            // No subscribers is normal, e.g. in headless runs.
            debug!(target: LOG_TARGET, "No active listeners for widget update.");
        }
    }

    /// Runs the message loop. This should be spawned as a Tokio task.
    #[instrument(skip(self))]
    pub async fn run(&mut self) {
        run_loop::run_widget_loop(self).await;
    }
}

/// Cloneable sender side of a widget.
#[derive(Debug, Clone)]
pub struct WidgetHandle {
    tx: mpsc::Sender<WidgetCommand>,
}

impl WidgetHandle {
    /// Posts a command. Returns `false` if the widget has shut down.
    pub async fn send(&self, command: WidgetCommand) -> bool {
        self.tx.send(command).await.is_ok()
    }

    pub async fn toggle(&self) -> bool {
        self.send(WidgetCommand::TogglePlayback).await
    }

    pub async fn skip(&self, delta_seconds: f64) -> bool {
        self.send(WidgetCommand::Skip { delta_seconds }).await
    }

    pub async fn attach_player(&self, player: Arc<dyn PlayerService>) -> bool {
        self.send(WidgetCommand::AttachPlayer(player)).await
    }

    pub async fn shutdown(&self) -> bool {
        self.send(WidgetCommand::Shutdown).await
    }

    /// Requests the current widget state.
    pub async fn snapshot(&self) -> Option<WidgetSnapshot> {
        let (responder, response) = oneshot::channel();
        if !self.send(WidgetCommand::GetSnapshot(responder)).await {
            return None;
        }
        response.await.ok()
    }

    /// Sink a player backend uses to report progress into this widget.
    pub fn progress_sink(&self) -> ProgressSink {
        ProgressSink::new(&self.tx)
    }
}
