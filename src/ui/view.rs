//! Terminal rendition of the widget

use crate::clock::ClockSample;
use crate::media::{background_for, MediaReference};
use crate::news::NewsItem;
use crate::ui::input::HELP_TEXT;
use crate::widget::WidgetUpdate;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, warn};

const LOG_TARGET: &str = "lost_sounds::ui::view";
const BAR_RESOLUTION: u64 = 1000;
const BAR_TEMPLATE: &str = "{msg} [{bar:50.cyan/blue}] {percent:>3}%";

/// Draws the scrubber and status line from widget updates.
pub struct TerminalView {
    bar: ProgressBar,
    media_id: String,
    clock: Option<ClockSample>,
    is_playing: bool,
}

impl TerminalView {
    pub fn new(media: &MediaReference) -> Self {
        let bar = ProgressBar::new(BAR_RESOLUTION);
        match ProgressStyle::with_template(BAR_TEMPLATE) {
            Ok(style) => bar.set_style(style.progress_chars("=> ")),
            Err(e) => warn!(target: LOG_TARGET, "Invalid progress template, using default style: {}", e),
        }
        bar.println(format!("background: {}", background_for(media.media_id())));
        bar.println(HELP_TEXT);

        let view = Self {
            bar,
            media_id: media.media_id().to_string(),
            clock: None,
            is_playing: false,
        };
        view.refresh_message();
        view
    }

    /// Applies one update. Returns `false` once the widget has stopped.
    pub fn apply(&mut self, update: WidgetUpdate) -> bool {
        match update {
            WidgetUpdate::Playback(state) => {
                self.is_playing = state.is_playing;
                self.bar.set_position(bar_position(state.progress));
                self.refresh_message();
            }
            WidgetUpdate::Clock(sample) => {
                self.clock = Some(sample);
                self.refresh_message();
            }
            WidgetUpdate::News(items) => {
                for line in news_lines(&items) {
                    self.bar.println(line);
                }
            }
            WidgetUpdate::PlayerReady => {
                debug!(target: LOG_TARGET, "Player ready.");
            }
            WidgetUpdate::Stopped => {
                self.bar.finish_and_clear();
                return false;
            }
        }
        true
    }

    /// Renders updates until the widget stops or the stream closes.
    pub async fn run(mut self, mut updates: broadcast::Receiver<WidgetUpdate>) {
        loop {
            match updates.recv().await {
                Ok(update) => {
                    if !self.apply(update) {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    debug!(target: LOG_TARGET, "View lagged behind by {} updates.", skipped);
                }
                Err(RecvError::Closed) => {
                    self.bar.finish_and_clear();
                    break;
                }
            }
        }
    }

    fn refresh_message(&self) {
        self.bar
            .set_message(status_line(self.clock.as_ref(), self.is_playing, &self.media_id));
    }
}

/// Scrubber position for a progress fraction.
pub fn bar_position(progress: f64) -> u64 {
    (progress.clamp(0.0, 1.0) * BAR_RESOLUTION as f64).round() as u64
}

/// Clock, transport glyph, and media id, e.g. `09:05 Tue  ||  KySOP1wtF7o`.
pub fn status_line(clock: Option<&ClockSample>, is_playing: bool, media_id: &str) -> String {
    let clock = clock
        .map(|sample| format!("{} {}", sample.time_label(), sample.day_label()))
        .unwrap_or_else(|| "--:-- ---".to_string());
    let glyph = if is_playing { "||" } else { "|>" };
    format!("{}  {}  {}", clock, glyph, media_id)
}

/// One printable line per headline.
pub fn news_lines(items: &[NewsItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| format!("* {} - {} ({})  {}", item.title, item.author, item.published_label, item.url))
        .collect()
}
