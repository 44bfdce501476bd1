//! Integration tests for the playback clock as seen through a session.

use mediacanvas_core::{EditorConfig, PlaybackConfig};
use mediacanvas_editor::{ClockStatus, EditorSession};
use mediacanvas_media::MediaResource;
use std::time::Duration;
use tokio::time;

fn session() -> EditorSession {
    EditorSession::new(EditorConfig::default())
}

#[test]
fn manual_ticks_without_runtime() {
    let session = session();
    let clock = session.clock();

    assert!(!clock.tick());
    assert_eq!(clock.toggle_play(), ClockStatus::Running);
    for _ in 0..10 {
        assert!(clock.tick());
    }
    assert_eq!(clock.current_time(), 1.0);

    clock.reset_timer();
    assert_eq!(clock.current_time(), 0.0);
    assert!(!clock.is_playing());
}

#[tokio::test(start_paused = true)]
async fn toggle_twice_then_reset() {
    let session = session();
    let clock = session.clock();

    clock.toggle_play();
    time::sleep(Duration::from_millis(550)).await;
    clock.toggle_play();
    assert_eq!(clock.current_time(), 0.5);
    assert!(!clock.is_playing());

    time::sleep(Duration::from_secs(1)).await;
    assert_eq!(clock.current_time(), 0.5);

    clock.reset_timer();
    assert_eq!(clock.state().current_time, 0.0);
    assert!(!clock.state().is_playing);
}

#[tokio::test(start_paused = true)]
async fn items_appear_as_playhead_reaches_them() {
    let session = session();
    session
        .upload([MediaResource::new("a.mp4", "video/mp4", vec![0u8; 16])])
        .unwrap();
    session.editor().update_time_range(0.5, 1.0);
    assert!(session.layers().is_empty());

    session.clock().toggle_play();
    time::sleep(Duration::from_millis(650)).await;
    assert_eq!(session.layers().len(), 1);
    assert!(session.editor().is_playing());

    time::sleep(Duration::from_millis(500)).await;
    assert!(session.layers().is_empty());
    assert_eq!(session.snapshot().clock_label, "00:01");
}

#[tokio::test(start_paused = true)]
async fn custom_tick_interval_from_config() {
    let config = EditorConfig {
        playback: PlaybackConfig {
            tick_step_secs: 0.5,
            tick_interval_ms: 500,
        },
        ..Default::default()
    };
    let session = EditorSession::new(config);
    session.clock().toggle_play();
    time::sleep(Duration::from_millis(1600)).await;
    assert_eq!(session.clock().current_time(), 1.5);
}
