use musicdrv::driver::*;
use musicdrv::drivers::{register_host_driver, register_music_drivers};
use musicdrv::mock::{HostCall, RecordingHost};

fn session_with_host(host: &RecordingHost) -> MusicSession {
    let mut registry = MusicDriverRegistry::new();
    let shared = host.clone();
    register_host_driver(&mut registry, move || shared.clone());
    register_music_drivers(&mut registry);
    MusicSession::new(registry)
}

fn theme() -> MusicSongInfo {
    MusicSongInfo::standard_midi("Theme", "/music/theme.mid")
}

#[test]
fn test_session_without_driver_is_silent() {
    let mut session = MusicSession::new(MusicDriverRegistry::new());

    assert!(session.active().is_none());
    session.play_song(&theme());
    session.stop_song();
    session.set_volume(12);
    assert!(!session.is_song_playing());
    assert_eq!(session.volume(), 12);
}

#[test]
fn test_autoprobe_picks_host_driver() {
    let host = RecordingHost::new();
    let mut session = session_with_host(&host);

    let name = session.select(&DriverSelection::autoprobe()).unwrap();
    assert_eq!(name, "host");

    session.play_song(&theme());
    assert!(session.is_song_playing());
    assert!(host.calls().contains(&HostCall::Play("/music/theme.mid".to_string())));
}

#[test]
fn test_selected_driver_gets_session_volume() {
    let host = RecordingHost::new();
    let mut session = session_with_host(&host);

    session.set_volume(255);
    session.select(&DriverSelection::autoprobe()).unwrap();

    assert_eq!(session.active().map(|d| d.volume()), Some(255));
    assert!(host.calls().contains(&HostCall::SetVolume(1.0)));
}

#[test]
fn test_default_volume_is_full_volume() {
    let host = RecordingHost::new();
    let mut session = session_with_host(&host);

    session.select(&DriverSelection::autoprobe()).unwrap();

    assert_eq!(session.volume(), DEFAULT_MUSIC_VOLUME);
    assert_eq!(
        host.playback_calls(),
        vec![HostCall::Init, HostCall::SetVolume(1.0)]
    );
}

#[test]
fn test_reselect_stops_previous_driver() {
    let host = RecordingHost::new();
    let mut session = session_with_host(&host);

    session.select(&DriverSelection::autoprobe()).unwrap();
    session.play_song(&theme());
    host.clear_calls();

    let name = session.select(&DriverSelection::named("null")).unwrap();
    assert_eq!(name, "null");
    assert_eq!(host.calls(), vec![HostCall::Stop]);
    assert_eq!(session.active_name(), Some("null"));
    assert!(!session.is_song_playing());
}

#[test]
fn test_unknown_reselect_keeps_current_driver() {
    let host = RecordingHost::new();
    let mut session = session_with_host(&host);

    session.select(&DriverSelection::autoprobe()).unwrap();
    session.play_song(&theme());
    host.clear_calls();

    let err = session.select(&DriverSelection::named("nope")).unwrap_err();

    assert!(matches!(err, DriverError::UnknownDriver { .. }));
    assert_eq!(session.active_name(), Some("host"));
    assert!(session.is_song_playing());
    assert!(!host.calls().contains(&HostCall::Stop));
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn test_failed_start_leaves_no_driver() {
    let host = RecordingHost::new();
    let mut session = session_with_host(&host);

    session.select(&DriverSelection::autoprobe()).unwrap();
    let selection = DriverSelection::parse("extmidi:cmd=");
    let err = session.select(&selection).unwrap_err();

    assert!(matches!(err, DriverError::StartFailure { .. }));
    assert!(session.active().is_none());
    assert_eq!(host.playback_calls().last(), Some(&HostCall::Stop));
}

#[test]
fn test_shutdown_and_drop_stop_driver() {
    let host = RecordingHost::new();
    let mut session = session_with_host(&host);
    session.select(&DriverSelection::named("host")).unwrap();

    session.shutdown();
    assert!(session.active().is_none());
    assert_eq!(host.playback_calls().last(), Some(&HostCall::Stop));

    session.select(&DriverSelection::named("host")).unwrap();
    host.clear_calls();
    drop(session);
    assert_eq!(host.calls(), vec![HostCall::Stop]);
}

#[test]
fn test_unavailable_host_still_selected() {
    let host = RecordingHost::unavailable();
    let mut session = session_with_host(&host);

    // a missing host player degrades to silence instead of falling back
    assert_eq!(session.select(&DriverSelection::autoprobe()).unwrap(), "host");
    session.play_song(&theme());
    assert!(!session.is_song_playing());
}

#[tokio::test]
async fn test_poll_loop_sees_song_finish() {
    use tokio::time::{interval, sleep, timeout, Duration};

    let host = RecordingHost::new();
    let mut session = session_with_host(&host);
    session.select(&DriverSelection::autoprobe()).unwrap();
    session.play_song(&theme());

    let player = host.clone();
    tokio::spawn(async move {
        sleep(Duration::from_millis(50)).await;
        player.set_playing(false);
    });

    let polls = timeout(Duration::from_secs(5), async {
        let mut ticker = interval(Duration::from_millis(10));
        let mut polls = 0;
        loop {
            ticker.tick().await;
            polls += 1;
            if !session.is_song_playing() {
                break polls;
            }
        }
    })
    .await
    .expect("song never finished");

    assert!(polls > 1);
    assert_eq!(session.active_name(), Some("host"));
}
