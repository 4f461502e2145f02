//! Volume, mute and lazy-start behavior of the playback controller.

use flipbook_wasm::playback::{Playback, VolumeIcon, DEFAULT_VOLUME};

#[test]
fn icon_thresholds() {
    let mut pb = Playback::default();
    assert_eq!(pb.set_volume(0.0), VolumeIcon::Muted);
    assert_eq!(pb.set_volume(0.49), VolumeIcon::Low);
    assert_eq!(pb.set_volume(0.5), VolumeIcon::High);
    assert_eq!(pb.set_volume(1.0), VolumeIcon::High);
}

#[test]
fn set_volume_clamps() {
    let mut pb = Playback::default();
    pb.set_volume(1.7);
    assert_eq!(pb.volume(), 1.0);
    pb.set_volume(-0.3);
    assert_eq!(pb.volume(), 0.0);
}

#[test]
fn mute_restores_last_audible_volume() {
    let mut pb = Playback::default();
    pb.set_volume(0.8);
    // Dragging the slider to zero must not erase the 0.8 preference.
    pb.set_volume(0.0);
    assert_eq!(pb.toggle_mute(), 0.8);
    assert_eq!(pb.volume(), 0.8);

    // And muting via the button round-trips the same way.
    assert_eq!(pb.toggle_mute(), 0.0);
    assert_eq!(pb.toggle_mute(), 0.8);
}

#[test]
fn unmute_without_history_uses_default() {
    let mut pb = Playback::new(0.0);
    assert_eq!(pb.toggle_mute(), DEFAULT_VOLUME);
}

#[test]
fn ensure_started_is_idempotent() {
    let mut pb = Playback::default();
    let first = pb.ensure_started();
    assert!(first.start_playback && first.init_visualizer);

    let second = pb.ensure_started();
    assert!(!second.start_playback && !second.init_visualizer);
    assert!(pb.is_playing());
}

#[test]
fn rejected_start_retries_but_latch_stays() {
    let mut pb = Playback::default();
    pb.ensure_started();

    // Autoplay policy said no: only playback is retried on the next click.
    pb.start_failed();
    assert!(!pb.is_playing());
    assert!(pb.visualizer_ready());

    let retry = pb.ensure_started();
    assert!(retry.start_playback);
    assert!(!retry.init_visualizer);
}
