// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the composed player view.
//!
//! These drive a [`PlayerView`] the way a host would: surface callbacks,
//! engine events posted from the engine side, and user commands.

mod common;

use common::{ScriptedEngine, TestWindow};
use player_view::config::Config;
use player_view::domain::layout::{ContainerParent, FitMode, Orientation};
use player_view::domain::video::{Bitmap, DataSource, SurfaceHandle, SurfaceId, VolumePercent};
use player_view::ui::controller::{ControllerState, FullscreenIcon, PlayIcon};
use player_view::ui::{Controller, Notice, PlayerView, SurfaceAction};
use player_view::video_player::{EventKind, PlayerEvent};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

fn new_view() -> PlayerView<ScriptedEngine, TestWindow> {
    let config = Config {
        click_debounce_ms: Some(0),
        ..Config::default()
    };
    PlayerView::new(ScriptedEngine::default(), TestWindow::default(), &config)
}

fn size_event(width: u32, height: u32) -> PlayerEvent {
    PlayerEvent::VideoSizeChanged { width, height }
}

#[test]
fn test_landscape_video_fills_width() {
    let mut view = new_view();
    view.set_controller(Controller::new(), FitMode::Default);
    view.on_container_resized(1080);

    assert!(view.engine().emit(size_event(1920, 1080)));
    view.process_events();

    let layout = view.layout().expect("layout after size event");
    assert_eq!((layout.surface_width, layout.surface_height), (1080, 608));
    assert_eq!(layout.container_height, 608);
}

#[test]
fn test_portrait_video_is_pillarboxed() {
    let mut view = new_view();
    view.set_controller(Controller::new(), FitMode::Default);
    view.on_container_resized(1080);

    view.engine().emit(size_event(1080, 1920));
    view.process_events();

    let layout = view.layout().expect("layout after size event");
    assert_eq!((layout.surface_width, layout.surface_height), (608, 1080));
}

#[test]
fn test_placeholder_layout_before_first_size_event() {
    let mut view = new_view();
    let layout = view
        .set_controller(Controller::new(), FitMode::Default)
        .expect("placeholder layout");
    assert_eq!(layout.surface_width, 1080);
    assert_eq!(layout.surface_height, 608);
}

#[test]
fn test_fullscreen_enter_exit_is_symmetric() {
    let mut view = new_view();
    view.set_controller(Controller::new(), FitMode::Default);
    view.engine().emit(size_event(1920, 1080));
    view.process_events();
    let inline_layout = view.layout();

    assert!(view.switch_screen());
    assert_eq!(view.platform().parent, ContainerParent::Decor);
    assert!(!view.platform().bars_visible);
    assert_eq!(view.platform().orientation, Orientation::Landscape);
    assert_eq!(view.controls().fullscreen_icon, FullscreenIcon::Exit);

    assert!(!view.enter_fullscreen(), "second enter is a no-op");

    assert!(view.exit_fullscreen(), "successful exit reports true");
    assert_eq!(view.platform().parent, ContainerParent::InLayout);
    assert!(view.platform().bars_visible);
    assert_eq!(view.platform().orientation, Orientation::Portrait);
    assert_eq!(view.platform().moves, 2);
    assert_eq!(view.layout(), inline_layout);
    assert_eq!(view.controls().fullscreen_icon, FullscreenIcon::Enter);
}

#[test]
fn test_surface_recreation_binds_engine_once() {
    let mut view = new_view();
    let first = SurfaceHandle::new(SurfaceId::new(1), 1080, 608);
    let second = SurfaceHandle::new(SurfaceId::new(2), 1080, 608);

    assert_eq!(
        view.on_surface_available(first),
        SurfaceAction::Bound(SurfaceId::new(1))
    );
    assert!(!view.on_surface_destroyed(SurfaceId::new(1)));
    assert_eq!(
        view.on_surface_available(second),
        SurfaceAction::Reused(SurfaceId::new(1))
    );

    assert_eq!(view.engine().count("bind:1"), 1);
    assert_eq!(view.engine().count("bind:2"), 0);
    assert_eq!(view.platform().reused, vec![SurfaceId::new(1)]);
}

#[test]
fn test_play_starts_after_prepared() {
    let mut view = new_view();
    assert!(view.play(DataSource::parse("https://example.com/live.m3u8")));
    assert!(!view.is_playing());

    view.engine().emit(PlayerEvent::Prepared);
    view.process_events();

    assert!(view.is_playing());
    assert_eq!(view.controller().state(), ControllerState::Playing);
    assert_eq!(view.controls().play_icon, PlayIcon::Pause);
}

#[test]
fn test_play_is_debounced_with_default_interval() {
    let mut view = PlayerView::new(
        ScriptedEngine::default(),
        TestWindow::default(),
        &Config::default(),
    );
    assert!(view.play(DataSource::parse("/videos/a.mp4")));
    assert!(!view.play(DataSource::parse("/videos/a.mp4")));
    assert_eq!(view.engine().count("prepare_async"), 1);
}

#[test]
fn test_listener_sees_events_in_post_order() {
    let mut view = new_view();
    let seen = Rc::new(RefCell::new(Vec::new()));
    for kind in [EventKind::BufferingUpdate, EventKind::Prepared] {
        let sink = Rc::clone(&seen);
        view.on(kind, move |event| sink.borrow_mut().push(event.clone()));
    }

    let poster = view.engine().poster.clone().expect("engine was set up");
    let worker = std::thread::spawn(move || {
        poster.post(PlayerEvent::BufferingUpdate(10));
        poster.post(PlayerEvent::BufferingUpdate(50));
        poster.post(PlayerEvent::Prepared);
    });
    worker.join().expect("worker thread");

    assert_eq!(view.process_events(), 3);
    assert_eq!(
        *seen.borrow(),
        vec![
            PlayerEvent::BufferingUpdate(10),
            PlayerEvent::BufferingUpdate(50),
            PlayerEvent::Prepared,
        ]
    );
}

#[test]
fn test_nothing_is_delivered_after_release() {
    let mut view = new_view();
    view.on_surface_available(SurfaceHandle::new(SurfaceId::new(1), 1080, 608));
    let delivered = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&delivered);
    view.on(EventKind::Error, move |_| *sink.borrow_mut() += 1);

    view.engine().emit(PlayerEvent::Error {
        code: -5,
        message: "open failed".to_string(),
    });
    view.release();

    assert!(!view.engine().emit(PlayerEvent::PlaybackComplete));
    assert_eq!(view.process_events(), 0);
    assert_eq!(*delivered.borrow(), 0);
    assert_eq!(view.platform().released, vec![SurfaceId::new(1)]);
    assert!(!view.platform().keep_screen_on);
    assert_eq!(view.engine().count("release"), 1);

    view.release();
    assert_eq!(view.engine().count("release"), 1);
}

#[test]
fn test_error_event_becomes_notice() {
    let mut view = new_view();
    view.engine().emit(PlayerEvent::Error {
        code: -5,
        message: "open failed".to_string(),
    });
    view.process_events();

    assert_eq!(
        view.take_notices(),
        vec![Notice::PlaybackError {
            code: -5,
            message: "open failed".to_string()
        }]
    );
}

#[test]
fn test_seek_bar_drag_seeks_once_and_resumes() {
    let mut view = new_view();
    view.engine_mut().duration = 60_000;
    view.play(DataSource::parse("/videos/a.mp4"));

    view.begin_seek();
    assert_eq!(view.seek_preview(25), 15_000);
    assert_eq!(view.seek_preview(50), 30_000);
    view.end_seek();

    assert_eq!(view.engine().count("seek:30000"), 1);
    assert_eq!(view.engine().log.iter().filter(|e| e.starts_with("seek:")).count(), 1);
    assert!(view.is_playing());
}

#[test]
fn test_mute_toggle_round_trip() {
    let mut view = new_view();
    assert_eq!(view.toggle_mute(), VolumePercent::MUTED);
    assert_eq!(view.toggle_mute(), VolumePercent::FULL);
}

#[test]
fn test_screenshot_lands_in_configured_directory() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let mut view = new_view();
    view.set_capture_dirs(dir.path().join("records"), dir.path().join("shots"));
    view.engine_mut().bitmap = Some(Bitmap::new(2, 2, Arc::new(vec![255u8; 16])));

    let path = view.screenshot().expect("screenshot saved");
    assert!(path.starts_with(dir.path().join("shots")));
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("jpg"));

    let decoded = image_rs::open(&path).expect("valid jpeg");
    assert_eq!((decoded.width(), decoded.height()), (2, 2));
}
