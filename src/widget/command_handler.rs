use super::{Widget, WidgetSnapshot, WidgetUpdate, LOG_TARGET};
use crate::clock::ClockSample;
use crate::media::background_for;
use crate::news::NewsItem;
use crate::playback::{fraction_from_gesture, PlayerService};
use std::sync::Arc;
use tracing::{debug, info, instrument, trace};

#[instrument(skip(widget))]
pub async fn handle_toggle(widget: &mut Widget) {
    widget.transport.toggle().await;
    widget.broadcast_update(WidgetUpdate::Playback(widget.playback_state()));
}

#[instrument(skip(widget))]
pub async fn handle_skip(widget: &mut Widget, delta_seconds: f64) {
    widget.transport.skip(delta_seconds).await;
}

#[instrument(skip(widget))]
pub async fn handle_seek_to_fraction(widget: &mut Widget, fraction: f64) {
    widget.transport.seek_to_fraction(fraction).await;
}

#[instrument(skip(widget))]
pub async fn handle_seek_from_gesture(widget: &mut Widget, pointer_x: f64, track_left: f64, track_width: f64) {
    let fraction = fraction_from_gesture(pointer_x, track_left, track_width);
    debug!(target: LOG_TARGET, "Click at {:.1} on track [{:.1}, +{:.1}] -> fraction {:.4}", pointer_x, track_left, track_width, fraction);
    widget.transport.seek_to_fraction(fraction).await;
}

#[instrument(skip(widget, player))]
pub async fn handle_attach_player(widget: &mut Widget, player: Arc<dyn PlayerService>) {
    if widget.transport.is_ready() {
        info!(target: LOG_TARGET, "Replacing previously attached player service.");
    }
    widget.transport.attach(player).await;
    widget.broadcast_update(WidgetUpdate::PlayerReady);
}

pub fn handle_player_progress(widget: &mut Widget, played_fraction: f64) {
    if widget.progress.on_player_progress(played_fraction) {
        widget.broadcast_update(WidgetUpdate::Playback(widget.playback_state()));
    }
}

pub fn handle_player_ended(widget: &mut Widget) {
    if widget.transport.on_playback_ended() {
        widget.broadcast_update(WidgetUpdate::Playback(widget.playback_state()));
    }
}

pub fn handle_clock_tick(widget: &mut Widget, sample: ClockSample) {
    trace!(target: LOG_TARGET, "Clock sample {}", sample.time_label());
    widget.clock = Some(sample);
    widget.broadcast_update(WidgetUpdate::Clock(sample));
}

#[instrument(skip(widget, items), fields(item_count = items.len()))]
pub fn handle_news_loaded(widget: &mut Widget, items: Vec<NewsItem>) {
    info!(target: LOG_TARGET, "Publishing {} headlines.", items.len());
    widget.news = items;
    widget.broadcast_update(WidgetUpdate::News(widget.news.clone()));
}

pub fn build_snapshot(widget: &Widget) -> WidgetSnapshot {
    WidgetSnapshot {
        playback: widget.playback_state(),
        media: widget.media.clone(),
        background_url: background_for(widget.media.media_id()),
        clock: widget.clock,
        news: widget.news.clone(),
        player_ready: widget.transport.is_ready(),
    }
}
