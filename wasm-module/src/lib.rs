use js_sys::{Function, Reflect};
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use musicdrv::driver::{
    DriverSelection, DriverType, MusicDriverRegistry, MusicSession, MusicSongInfo,
};
use musicdrv::drivers::{register_host_driver, register_music_drivers, HostFunction, MusicHost};

/// Host playback through global JavaScript functions
///
/// The page provides `midi_player_init()`, `midi_player_play(path)`,
/// `midi_player_stop()`, `midi_player_is_playing()` and
/// `midi_player_set_volume(0.0..=1.0)`; any of them may be missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowMusicHost;

impl WindowMusicHost {
    fn function(&self, function: HostFunction) -> Option<Function> {
        Reflect::get(&js_sys::global(), &JsValue::from_str(function.symbol()))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
    }

    fn call(&self, function: HostFunction, arg: Option<JsValue>) -> Option<JsValue> {
        let target = self.function(function)?;
        let result = match arg {
            Some(arg) => target.call1(&JsValue::NULL, &arg),
            None => target.call0(&JsValue::NULL),
        };

        match result {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("{} threw: {:?}", function.symbol(), e);
                None
            }
        }
    }
}

impl MusicHost for WindowMusicHost {
    fn probe(&self, function: HostFunction) -> bool {
        self.function(function).is_some()
    }

    fn init(&mut self) {
        self.call(HostFunction::Init, None);
    }

    fn play(&mut self, path: &str) {
        self.call(HostFunction::Play, Some(JsValue::from_str(path)));
    }

    fn stop(&mut self) {
        self.call(HostFunction::Stop, None);
    }

    fn is_playing(&mut self) -> bool {
        self.call(HostFunction::IsPlaying, None)
            .map_or(false, |value| value.is_truthy())
    }

    fn set_volume(&mut self, volume: f64) {
        self.call(HostFunction::SetVolume, Some(JsValue::from_f64(volume)));
    }
}

/// Music playback facade exported to JavaScript
#[wasm_bindgen]
pub struct WebMusicPlayer {
    session: MusicSession,
}

#[wasm_bindgen]
impl WebMusicPlayer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let mut registry = MusicDriverRegistry::new();
        register_host_driver(&mut registry, || WindowMusicHost);
        register_music_drivers(&mut registry);

        Self {
            session: MusicSession::new(registry),
        }
    }

    /// Select a driver by `name:options`, or autoprobe when empty
    pub fn select(&mut self, selection: &str) -> Result<String, JsValue> {
        self.session
            .select(&DriverSelection::parse(selection))
            .map(str::to_string)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn driver(&self) -> Option<String> {
        self.session.active_name().map(str::to_string)
    }

    pub fn play(&mut self, path: &str, title: &str) {
        self.session
            .play_song(&MusicSongInfo::standard_midi(title, path));
    }

    pub fn stop(&mut self) {
        self.session.stop_song();
    }

    pub fn is_playing(&mut self) -> bool {
        self.session.is_song_playing()
    }

    pub fn set_volume(&mut self, level: u8) {
        self.session.set_volume(level);
    }

    pub fn drivers(&self) -> String {
        self.session.registry().describe(DriverType::Music)
    }
}

impl Default for WebMusicPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_driver_listed_first() {
        let player = WebMusicPlayer::new();
        let listing = player.drivers();

        assert!(listing.starts_with("List of music drivers:\n"));
        let host = listing.find("host:").unwrap();
        let null = listing.find("null:").unwrap();
        assert!(host < null);
        assert_eq!(player.driver(), None);
    }
}
