use crate::clock::ClockSample;
use crate::media::MediaReference;
use crate::news::NewsItem;
use crate::playback::PlayerService;
use std::fmt;
use std::sync::Arc;
use tokio::sync::oneshot;

/// Messages accepted by the widget task. User gestures and every asynchronous
/// source (player callbacks, clock, news) arrive through the same channel.
pub enum WidgetCommand {
    TogglePlayback,
    Skip { delta_seconds: f64 },
    /// Absolute seek; the fraction must already be clamped to `[0, 1]`.
    SeekToFraction(f64),
    /// Click on the scrubber track, mapped through `fraction_from_gesture`.
    SeekFromGesture {
        pointer_x: f64,
        track_left: f64,
        track_width: f64,
    },
    AttachPlayer(Arc<dyn PlayerService>),
    PlayerProgress(f64),
    /// The backend reached the end of the media and stopped by itself.
    PlayerEnded,
    ClockTick(ClockSample),
    NewsLoaded(Vec<NewsItem>),
    GetSnapshot(oneshot::Sender<WidgetSnapshot>),
    Shutdown,
}

impl fmt::Debug for WidgetCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetCommand::TogglePlayback => write!(f, "TogglePlayback"),
            WidgetCommand::Skip { delta_seconds } => write!(f, "Skip({:+})", delta_seconds),
            WidgetCommand::SeekToFraction(fraction) => write!(f, "SeekToFraction({})", fraction),
            WidgetCommand::SeekFromGesture { pointer_x, track_left, track_width } => write!(
                f,
                "SeekFromGesture {{ pointer_x: {}, track_left: {}, track_width: {} }}",
                pointer_x, track_left, track_width
            ),
            WidgetCommand::AttachPlayer(_) => write!(f, "AttachPlayer(..)"),
            WidgetCommand::PlayerProgress(fraction) => write!(f, "PlayerProgress({})", fraction),
            WidgetCommand::PlayerEnded => write!(f, "PlayerEnded"),
            WidgetCommand::ClockTick(sample) => write!(f, "ClockTick({:?})", sample),
            WidgetCommand::NewsLoaded(items) => write!(f, "NewsLoaded({} items)", items.len()),
            WidgetCommand::GetSnapshot(_) => write!(f, "GetSnapshot"),
            WidgetCommand::Shutdown => write!(f, "Shutdown"),
        }
    }
}

/// Play/pause flag plus the last reported progress fraction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub progress: f64,
}

/// Everything a view needs to draw the widget.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetSnapshot {
    pub playback: PlaybackState,
    pub media: MediaReference,
    pub background_url: String,
    pub clock: Option<ClockSample>,
    pub news: Vec<NewsItem>,
    pub player_ready: bool,
}

/// Updates broadcast by the widget task as its state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetUpdate {
    Playback(PlaybackState),
    Clock(ClockSample),
    News(Vec<NewsItem>),
    PlayerReady,
    Stopped,
}
