use super::{command_handler, Widget, WidgetCommand, WidgetUpdate, LOG_TARGET};
use crate::clock::{ClockTicker, CLOCK_TICK_INTERVAL};
use crate::news::spawn_news_loader;
use tracing::{debug, info, trace};

/// Runs the widget's message loop until `Shutdown` or until every sender is gone.
pub async fn run_widget_loop(widget: &mut Widget) {
    info!(target: LOG_TARGET, "Widget run loop started for media '{}'.", widget.media.media_id());
    start_side_streams(widget);

    while let Some(command) = widget.command_rx.recv().await {
        trace!(target: LOG_TARGET, "Received command: {:?}", command);
        match command {
            WidgetCommand::TogglePlayback => command_handler::handle_toggle(widget).await,
            WidgetCommand::Skip { delta_seconds } => command_handler::handle_skip(widget, delta_seconds).await,
            WidgetCommand::SeekToFraction(fraction) => command_handler::handle_seek_to_fraction(widget, fraction).await,
            WidgetCommand::SeekFromGesture { pointer_x, track_left, track_width } => {
                command_handler::handle_seek_from_gesture(widget, pointer_x, track_left, track_width).await
            }
            WidgetCommand::AttachPlayer(player) => command_handler::handle_attach_player(widget, player).await,
            WidgetCommand::PlayerProgress(fraction) => command_handler::handle_player_progress(widget, fraction),
            WidgetCommand::PlayerEnded => command_handler::handle_player_ended(widget),
            WidgetCommand::ClockTick(sample) => command_handler::handle_clock_tick(widget, sample),
            WidgetCommand::NewsLoaded(items) => command_handler::handle_news_loaded(widget, items),
            WidgetCommand::GetSnapshot(responder) => {
                let snapshot = command_handler::build_snapshot(widget);
                let _ = responder.send(snapshot); // Ignore error if receiver dropped
            }
            WidgetCommand::Shutdown => {
                info!(target: LOG_TARGET, "Shutdown command received. Exiting run loop.");
                break;
            }
        }
    }

    info!(target: LOG_TARGET, "Widget run loop finished. Performing teardown.");
    if let Some(ticker) = widget.clock_ticker.take() {
        ticker.stop().await;
    }
    if let Some(news_task) = widget.news_task.take() {
        if !news_task.is_finished() {
            debug!(target: LOG_TARGET, "Abandoning in-flight news fetch.");
            news_task.abort();
        }
    }
    widget.broadcast_update(WidgetUpdate::Stopped);
    info!(target: LOG_TARGET, "Widget teardown complete.");
}

/// Starts the clock ticker and the one-shot news read.
fn start_side_streams(widget: &mut Widget) {
    if widget.clock_ticker.is_none() {
        widget.clock_ticker = Some(ClockTicker::spawn(
            widget.internal_command_tx.clone(),
            CLOCK_TICK_INTERVAL,
            widget.clock_source.clone(),
        ));
    }

    if let Some(feed) = widget.news_feed.take() {
        debug!(target: LOG_TARGET, "Starting news fetch for tag '{}'.", feed.tag);
        widget.news_task = Some(spawn_news_loader(
            feed.api,
            feed.tag,
            feed.per_page,
            widget.internal_command_tx.clone(),
        ));
    } else {
        debug!(target: LOG_TARGET, "No news feed configured.");
    }
}
