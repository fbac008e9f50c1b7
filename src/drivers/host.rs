use anyhow::Result;
use tracing::{debug, warn};
use crate::driver::{
    normalize_volume, Driver, DriverParams, MusicDriver, MusicSongInfo, PlaybackState,
    DEFAULT_MUSIC_VOLUME,
};
use crate::song::{playable_file, SmfResolver, SongResolver};

/// Functions a host environment may provide for MIDI playback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostFunction {
    Init,
    Play,
    Stop,
    IsPlaying,
    SetVolume,
}

impl HostFunction {
    pub const ALL: [HostFunction; 5] = [
        HostFunction::Init,
        HostFunction::Play,
        HostFunction::Stop,
        HostFunction::IsPlaying,
        HostFunction::SetVolume,
    ];

    /// Symbol the host exports the function under
    pub fn symbol(&self) -> &'static str {
        match self {
            HostFunction::Init => "midi_player_init",
            HostFunction::Play => "midi_player_play",
            HostFunction::Stop => "midi_player_stop",
            HostFunction::IsPlaying => "midi_player_is_playing",
            HostFunction::SetVolume => "midi_player_set_volume",
        }
    }
}

/// Playback function set provided by a scripting host
///
/// Calls are only made for functions whose probe succeeded.
pub trait MusicHost: Send {
    fn probe(&self, function: HostFunction) -> bool;

    fn init(&mut self);

    fn play(&mut self, path: &str);

    fn stop(&mut self);

    fn is_playing(&mut self) -> bool;

    /// `volume` is in 0.0..=1.0
    fn set_volume(&mut self, volume: f64);
}

/// Host functions found at start time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostCapabilities {
    pub init: bool,
    pub play: bool,
    pub stop: bool,
    pub is_playing: bool,
    pub set_volume: bool,
}

impl HostCapabilities {
    pub fn probe(host: &dyn MusicHost) -> Self {
        Self {
            init: host.probe(HostFunction::Init),
            play: host.probe(HostFunction::Play),
            stop: host.probe(HostFunction::Stop),
            is_playing: host.probe(HostFunction::IsPlaying),
            set_volume: host.probe(HostFunction::SetVolume),
        }
    }

    /// Host player is usable at all
    pub fn available(&self) -> bool {
        self.init
    }
}

/// Music driver delegating playback to a scripting host
pub struct HostMusicDriver<H> {
    host: H,
    resolver: Box<dyn SongResolver>,
    capabilities: HostCapabilities,
    state: PlaybackState,
    volume: u8,
}

impl<H: MusicHost> HostMusicDriver<H> {
    pub const NAME: &'static str = "host";
    pub const DESCRIPTION: &'static str = "Scripting Host Music Driver";
    pub const PRIORITY: i32 = 10;

    pub fn new(host: H) -> Self {
        Self::with_resolver(host, Box::new(SmfResolver))
    }

    pub fn with_resolver(host: H, resolver: Box<dyn SongResolver>) -> Self {
        Self {
            host,
            resolver,
            capabilities: HostCapabilities::default(),
            state: PlaybackState::Idle,
            volume: DEFAULT_MUSIC_VOLUME,
        }
    }

    pub fn capabilities(&self) -> HostCapabilities {
        self.capabilities
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    fn active(&self) -> bool {
        self.capabilities.available()
    }
}

impl<H: MusicHost> Driver for HostMusicDriver<H> {
    fn start(&mut self, _params: &DriverParams) -> Result<()> {
        debug!("host music driver: starting");

        self.capabilities = HostCapabilities::probe(&self.host);
        if self.capabilities.available() {
            self.host.init();
        } else {
            warn!("host music driver: host player not available, music will be silent");
        }
        Ok(())
    }

    fn stop(&mut self) {
        debug!("host music driver: stopping");
        self.stop_song();
        self.capabilities = HostCapabilities::default();
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}

impl<H: MusicHost> MusicDriver for HostMusicDriver<H> {
    fn play_song(&mut self, song: &MusicSongInfo) {
        let Some(path) = playable_file(self.resolver.as_ref(), song) else {
            debug!("host music driver: no MIDI file for song '{}'", song.song_name);
            return;
        };

        if !self.active() || !self.capabilities.play {
            debug!("host music driver: cannot play {}, host has no player", path.display());
            return;
        }

        debug!("host music driver: playing {}", path.display());
        self.state = PlaybackState::Playing;
        self.host.play(&path.to_string_lossy());
    }

    fn stop_song(&mut self) {
        self.state = PlaybackState::Idle;
        if self.active() && self.capabilities.stop {
            self.host.stop();
        }
    }

    fn is_song_playing(&mut self) -> bool {
        if !self.state.is_playing() {
            return false;
        }

        let still_playing = self.capabilities.is_playing && self.host.is_playing();
        if !still_playing {
            self.state = PlaybackState::Idle;
        }
        still_playing
    }

    fn set_volume(&mut self, level: u8) {
        self.volume = level;
        if self.active() && self.capabilities.set_volume {
            self.host.set_volume(normalize_volume(level));
        }
    }

    fn volume(&self) -> u8 {
        self.volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_symbols() {
        let symbols: Vec<_> = HostFunction::ALL.iter().map(HostFunction::symbol).collect();
        assert_eq!(
            symbols,
            vec![
                "midi_player_init",
                "midi_player_play",
                "midi_player_stop",
                "midi_player_is_playing",
                "midi_player_set_volume",
            ]
        );
    }
}
