use std::path::PathBuf;
use tracing::debug;
use crate::driver::{MusicSongInfo, MusicTrackType};

/// Maps a song descriptor to a Standard MIDI file on disk
pub trait SongResolver: Send {
    fn smf_path(&self, song: &MusicSongInfo) -> Option<PathBuf>;
}

/// Resolver for songs already stored as standalone Standard MIDI files
///
/// Songs packed in CAT containers need converting first and resolve to
/// nothing here.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmfResolver;

impl SongResolver for SmfResolver {
    fn smf_path(&self, song: &MusicSongInfo) -> Option<PathBuf> {
        match song.filetype {
            MusicTrackType::StandardMidi => Some(song.filename.clone()),
            other => {
                debug!("No SMF conversion for {:?} song '{}'", other, song.song_name);
                None
            }
        }
    }
}

/// Resolve `song` to a non-empty file path
pub fn playable_file(resolver: &dyn SongResolver, song: &MusicSongInfo) -> Option<PathBuf> {
    resolver
        .smf_path(song)
        .filter(|path| !path.as_os_str().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_midi_resolves_to_filename() {
        let song = MusicSongInfo::standard_midi("Theme", "/music/theme.mid");
        assert_eq!(
            playable_file(&SmfResolver, &song),
            Some(PathBuf::from("/music/theme.mid"))
        );
    }

    #[test]
    fn test_empty_filename_is_not_playable() {
        let song = MusicSongInfo::standard_midi("Silence", "");
        assert_eq!(playable_file(&SmfResolver, &song), None);
    }

    #[test]
    fn test_cat_songs_are_not_playable() {
        let song = MusicSongInfo {
            song_name: "Packed".to_string(),
            filename: PathBuf::from("/music/gm.cat"),
            filetype: MusicTrackType::MpsMidi,
            cat_index: 3,
            ..Default::default()
        };
        assert_eq!(playable_file(&SmfResolver, &song), None);
    }
}
