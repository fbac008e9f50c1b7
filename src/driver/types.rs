use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Driver category a registry partitions by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverType {
    Music,
    Sound,
    Video,
}

impl DriverType {
    pub fn name(&self) -> &'static str {
        match self {
            DriverType::Music => "music",
            DriverType::Sound => "sound",
            DriverType::Video => "video",
        }
    }
}

impl fmt::Display for DriverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Playback state tracked by every music driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing,
}

impl PlaybackState {
    pub fn is_playing(&self) -> bool {
        *self == PlaybackState::Playing
    }
}

/// Loudest playback level
pub const MAX_MUSIC_VOLUME: u8 = 127;

/// Volume a freshly created driver starts with
pub const DEFAULT_MUSIC_VOLUME: u8 = MAX_MUSIC_VOLUME;

/// Map a volume level onto the 0.0..=1.0 scale backends expect
///
/// Levels above [`MAX_MUSIC_VOLUME`] play at full volume.
pub fn normalize_volume(level: u8) -> f64 {
    f64::from(level.min(MAX_MUSIC_VOLUME)) / f64::from(MAX_MUSIC_VOLUME)
}

/// Storage format of a song file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MusicTrackType {
    /// Standard MIDI file
    #[default]
    StandardMidi,
    /// MPS GM driver MIDI format (contained in a CAT file)
    MpsMidi,
    /// AdLib music format (contained in a CAT file)
    DosAdlib,
}

/// Descriptor of one song of a music set
///
/// Drivers never open this themselves; a [`SongResolver`](crate::song::SongResolver)
/// turns it into a playable file path.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MusicSongInfo {
    pub song_name: String,
    pub tracknr: u8,
    pub filename: PathBuf,
    pub filetype: MusicTrackType,
    /// Entry index in a CAT container, or -1 for a standalone file
    pub cat_index: i32,
    pub loop_song: bool,
}

impl MusicSongInfo {
    /// Standalone Standard MIDI file song
    pub fn standard_midi(song_name: impl Into<String>, filename: impl Into<PathBuf>) -> Self {
        Self {
            song_name: song_name.into(),
            tracknr: 0,
            filename: filename.into(),
            filetype: MusicTrackType::StandardMidi,
            cat_index: -1,
            loop_song: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_volume_bounds() {
        assert_eq!(normalize_volume(0), 0.0);
        assert_eq!(normalize_volume(DEFAULT_MUSIC_VOLUME), 1.0);
        assert_eq!(normalize_volume(255), 1.0);
        assert!((normalize_volume(64) - 0.504).abs() < 0.001);
    }

    #[test]
    fn test_driver_type_json_format() {
        let json = serde_json::to_string(&DriverType::Music).unwrap();
        assert_eq!(json, "\"music\"");
        assert_eq!(DriverType::Video.to_string(), "video");
    }

    #[test]
    fn test_standard_midi_song() {
        let song = MusicSongInfo::standard_midi("Theme", "/music/theme.mid");
        assert_eq!(song.filetype, MusicTrackType::StandardMidi);
        assert_eq!(song.cat_index, -1);
        assert_eq!(PlaybackState::default(), PlaybackState::Idle);
    }
}
