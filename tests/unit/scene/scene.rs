use super::*;
use crate::foundation::rng::Rng64;
use crate::render::recording::RecordingSurface;
use crate::schedule::engine::EngineState;
use crate::schedule::fade::FadePhase;

fn scene() -> Scene<RecordingSurface> {
    Scene::with_rng(
        SceneConfig::default(),
        RecordingSurface::new(SurfaceSize::new(640, 480)),
        Box::new(Rng64::new(11)),
    )
    .unwrap()
}

#[test]
fn mount_generates_the_ambient_layer_once() {
    let mut s = scene();
    let clock = ManualClock::new();
    assert!(s.ambient().is_none());
    s.mount(&clock);
    let first = s.ambient().unwrap().clone();
    assert_eq!(first.len(), 20 + 30 + 6 + 50 + 35 + 40);
    s.mount(&clock);
    assert_eq!(s.ambient().unwrap(), &first);
}

#[test]
fn trigger_is_ignored_until_mounted() {
    let mut s = scene();
    let mut clock = ManualClock::new();
    assert_eq!(s.set_trigger(true, &mut clock), None);
    assert_eq!(s.engine().state(), EngineState::Idle);
    assert!(clock.is_idle());
}

#[test]
fn rising_edge_starts_burst_and_music() {
    let mut s = scene();
    let mut clock = ManualClock::new();
    s.mount(&clock);
    assert_eq!(s.set_trigger(true, &mut clock), Some(FadeEvent::Restart));
    assert_eq!(s.engine().active_count(), 150);
    assert_eq!(s.music().phase(), FadePhase::FadingIn);
    assert_eq!(clock.pending(), 2);
}

#[test]
fn pump_drives_frames_and_fades_to_idle() {
    let mut s = scene();
    let mut clock = ManualClock::new();
    s.mount(&clock);
    s.set_trigger(true, &mut clock);

    let report = s.pump(&mut clock, 10_000);
    assert!(clock.is_idle());
    assert!(report.frames > 0 && report.frames <= 334);
    assert_eq!(report.fade_events.last(), Some(&FadeEvent::Volume(0.15)));
    assert_eq!(s.engine().state(), EngineState::Idle);
    assert_eq!(s.music().phase(), FadePhase::Playing);
}

#[test]
fn pump_respects_the_task_limit() {
    let mut s = scene();
    let mut clock = ManualClock::new();
    s.mount(&clock);
    s.set_trigger(true, &mut clock);
    let report = s.pump(&mut clock, 5);
    assert_eq!(report.tasks, 5);
    assert!(!clock.is_idle());
}

#[test]
fn unmount_cancels_everything() {
    let mut s = scene();
    let mut clock = ManualClock::new();
    s.mount(&clock);
    s.set_trigger(true, &mut clock);
    s.pump(&mut clock, 3);

    s.unmount(&mut clock);
    assert!(clock.is_idle());
    assert!(s.ambient().is_none());
    assert!(s.engine().particles().is_empty());
    assert_eq!(s.music().phase(), FadePhase::Paused);
    assert!(s.ambient_sprites(&clock).is_empty());
}

#[test]
fn stale_ids_dispatch_to_nothing() {
    let mut s = scene();
    let mut clock = ManualClock::new();
    s.mount(&clock);
    assert_eq!(s.dispatch(TaskId(77), &mut clock), Dispatch::Stale);
}

#[test]
fn ambient_sprites_follow_the_clock() {
    let mut s = scene();
    let mut clock = ManualClock::new();
    s.mount(&clock);
    let a = s.ambient_sprites(&clock);
    clock.advance(Duration::from_secs(3));
    let b = s.ambient_sprites(&clock);
    assert_eq!(a.len(), b.len());
    assert_ne!(a, b);
    assert_eq!(s.elapsed_s(&clock), Some(3.0));
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = SceneConfig {
        palette: Vec::new(),
        ..SceneConfig::default()
    };
    assert!(Scene::new(cfg, RecordingSurface::new(SurfaceSize::new(1, 1))).is_err());
}
