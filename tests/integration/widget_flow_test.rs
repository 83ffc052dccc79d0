//! End-to-end tests of the widget loop driving the virtual player
//!
//! Time is paused so the player's timeline and the progress cadence are
//! deterministic.

use crate::test_utils::{fixed_clock, wait_for_update};
use lost_sounds::media::MediaReference;
use lost_sounds::playback::{PlayerService, VirtualPlayer, PROGRESS_UPDATE_INTERVAL};
use lost_sounds::widget::{PlaybackState, Widget, WidgetCommand, WidgetHandle, WidgetUpdate};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

const SOURCE_URL: &str = "https://www.youtube.com/watch?v=KySOP1wtF7o";
const DURATION_SECS: f64 = 240.0;

fn start_widget() -> (WidgetHandle, tokio::sync::broadcast::Receiver<WidgetUpdate>, JoinHandle<()>) {
    let (widget, handle) = Widget::new(MediaReference::new(SOURCE_URL), 64, 256);
    let mut widget = widget.with_clock_source(Arc::new(fixed_clock));
    let updates = widget.subscribe();
    let task = tokio::spawn(async move { widget.run().await });
    (handle, updates, task)
}

async fn attach_virtual_player(handle: &WidgetHandle, duration_secs: f64) -> Arc<VirtualPlayer> {
    let player = VirtualPlayer::spawn(duration_secs, PROGRESS_UPDATE_INTERVAL, handle.progress_sink());
    assert!(handle.attach_player(player.clone()).await);
    player
}

async fn position(player: &VirtualPlayer) -> f64 {
    player
        .current_position_seconds()
        .await
        .expect("Position should be known after a seek")
}

#[cfg(test)]
mod widget_flow_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_attach_marks_player_ready() {
        let (handle, mut updates, task) = start_widget();
        let _player = attach_virtual_player(&handle, DURATION_SECS).await;

        wait_for_update(&mut updates, |u| *u == WidgetUpdate::PlayerReady).await;
        assert!(handle.snapshot().await.expect("Widget should be running").player_ready);

        handle.shutdown().await;
        task.await.expect("Widget task panicked");
    }

    #[tokio::test(start_paused = true)]
    async fn test_skip_forward_then_back_restores_position() {
        let (handle, _updates, task) = start_widget();
        let player = attach_virtual_player(&handle, DURATION_SECS).await;

        handle.send(WidgetCommand::SeekToFraction(0.5)).await;
        handle.snapshot().await;
        assert_eq!(position(&player).await, 120.0);

        handle.skip(10.0).await;
        handle.snapshot().await;
        assert_eq!(position(&player).await, 130.0);

        handle.skip(-10.0).await;
        handle.snapshot().await;
        assert_eq!(position(&player).await, 120.0);

        handle.shutdown().await;
        task.await.expect("Widget task panicked");
    }

    #[tokio::test(start_paused = true)]
    async fn test_skip_past_start_is_clamped_by_player() {
        let (handle, _updates, task) = start_widget();
        let player = attach_virtual_player(&handle, DURATION_SECS).await;

        handle.send(WidgetCommand::SeekToFraction(0.01)).await;
        handle.skip(-10.0).await;
        handle.snapshot().await;
        assert_eq!(position(&player).await, 0.0);

        handle.send(WidgetCommand::SeekToFraction(0.99)).await;
        handle.skip(10.0).await;
        handle.snapshot().await;
        assert_eq!(position(&player).await, DURATION_SECS);

        handle.shutdown().await;
        task.await.expect("Widget task panicked");
    }

    #[tokio::test(start_paused = true)]
    async fn test_track_click_seeks_to_fraction() {
        let (handle, _updates, task) = start_widget();
        let player = attach_virtual_player(&handle, DURATION_SECS).await;

        handle
            .send(WidgetCommand::SeekFromGesture {
                pointer_x: 175.0,
                track_left: 100.0,
                track_width: 100.0,
            })
            .await;
        handle.snapshot().await;
        assert_eq!(position(&player).await, 180.0);

        // Clicks past the right edge land on the end of the media.
        handle
            .send(WidgetCommand::SeekFromGesture {
                pointer_x: 400.0,
                track_left: 100.0,
                track_width: 100.0,
            })
            .await;
        handle.snapshot().await;
        assert_eq!(position(&player).await, DURATION_SECS);

        handle.shutdown().await;
        task.await.expect("Widget task panicked");
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_before_attach_starts_playback() {
        let (handle, mut updates, task) = start_widget();

        handle.toggle().await;
        let update = wait_for_update(&mut updates, |u| matches!(u, WidgetUpdate::Playback(_))).await;
        assert_eq!(
            update,
            WidgetUpdate::Playback(PlaybackState {
                is_playing: true,
                progress: 0.0
            })
        );

        let player = attach_virtual_player(&handle, DURATION_SECS).await;
        wait_for_update(&mut updates, |u| {
            matches!(u, WidgetUpdate::Playback(state) if state.progress > 0.0)
        })
        .await;
        assert!(player.is_playing().await);

        handle.shutdown().await;
        task.await.expect("Widget task panicked");
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_freezes_progress() {
        let (handle, mut updates, task) = start_widget();
        let player = attach_virtual_player(&handle, DURATION_SECS).await;

        handle.toggle().await;
        wait_for_update(&mut updates, |u| {
            matches!(u, WidgetUpdate::Playback(state) if state.progress > 0.0)
        })
        .await;

        handle.toggle().await;
        handle.snapshot().await;
        assert!(!player.is_playing().await);
        // Samples emitted before the pause landed are drained by now.
        let frozen = handle.snapshot().await.expect("Widget should be running").playback;
        assert!(!frozen.is_playing);

        tokio::time::sleep(Duration::from_secs(2)).await;
        let later = handle.snapshot().await.expect("Widget should be running").playback;
        assert_eq!(later.progress, frozen.progress);

        handle.shutdown().await;
        task.await.expect("Widget task panicked");
    }

    #[tokio::test(start_paused = true)]
    async fn test_progress_reaches_end_of_media() {
        let (handle, mut updates, task) = start_widget();
        let player = attach_virtual_player(&handle, 1.0).await;

        handle.toggle().await;
        wait_for_update(&mut updates, |u| {
            matches!(u, WidgetUpdate::Playback(state) if state.progress >= 1.0)
        })
        .await;
        assert!(!player.is_playing().await);
        assert_eq!(position(&player).await, 1.0);

        // The widget follows the backend back to paused.
        let update = wait_for_update(&mut updates, |u| {
            matches!(u, WidgetUpdate::Playback(state) if !state.is_playing)
        })
        .await;
        assert_eq!(
            update,
            WidgetUpdate::Playback(PlaybackState {
                is_playing: false,
                progress: 1.0
            })
        );

        handle.shutdown().await;
        task.await.expect("Widget task panicked");
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_after_end_restarts_playback() {
        let (handle, mut updates, task) = start_widget();
        let player = attach_virtual_player(&handle, 1.0).await;

        handle.toggle().await;
        wait_for_update(&mut updates, |u| {
            matches!(u, WidgetUpdate::Playback(state) if state.progress >= 1.0 && !state.is_playing)
        })
        .await;

        handle.toggle().await;
        let snapshot = handle.snapshot().await.expect("Widget should be running");
        assert!(snapshot.playback.is_playing);
        assert!(player.is_playing().await);
        assert!(position(&player).await < 0.5);

        wait_for_update(&mut updates, |u| {
            matches!(u, WidgetUpdate::Playback(state) if state.is_playing && state.progress > 0.0 && state.progress < 1.0)
        })
        .await;

        handle.shutdown().await;
        task.await.expect("Widget task panicked");
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handles_ends_widget_with_player_attached() {
        let (handle, mut updates, task) = start_widget();
        let player = attach_virtual_player(&handle, DURATION_SECS).await;
        handle.toggle().await;
        wait_for_update(&mut updates, |u| {
            matches!(u, WidgetUpdate::Playback(state) if state.progress > 0.0)
        })
        .await;

        drop(handle);
        tokio::time::timeout(Duration::from_secs(30), task)
            .await
            .expect("Widget loop should end once every handle is gone")
            .expect("Widget task panicked");
        wait_for_update(&mut updates, |u| *u == WidgetUpdate::Stopped).await;
        assert!(player.is_playing().await);
    }
}
