use anyhow::Result;
use crate::driver::{Driver, DriverParams, MusicDriver, MusicSongInfo, DEFAULT_MUSIC_VOLUME};

/// Music driver that plays nothing
pub struct NullMusicDriver {
    volume: u8,
}

impl NullMusicDriver {
    pub const NAME: &'static str = "null";
    pub const DESCRIPTION: &'static str = "Null Music Driver";
    pub const PRIORITY: i32 = 1;

    pub fn new() -> Self {
        Self {
            volume: DEFAULT_MUSIC_VOLUME,
        }
    }
}

impl Default for NullMusicDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for NullMusicDriver {
    fn start(&mut self, _params: &DriverParams) -> Result<()> {
        Ok(())
    }

    fn stop(&mut self) {}

    fn name(&self) -> &str {
        Self::NAME
    }
}

impl MusicDriver for NullMusicDriver {
    fn play_song(&mut self, _song: &MusicSongInfo) {}

    fn stop_song(&mut self) {}

    fn is_song_playing(&mut self) -> bool {
        false
    }

    fn set_volume(&mut self, level: u8) {
        self.volume = level;
    }

    fn volume(&self) -> u8 {
        self.volume
    }
}
