use anyhow::Result;
use super::params::DriverParams;
use super::types::MusicSongInfo;

/// Lifecycle shared by every driver instance
pub trait Driver: Send {
    /// Acquire backend resources using the recognized options in `params`
    ///
    /// An unavailable playback capability is not an error: the driver starts
    /// and stays silent. Only conditions that prevent the driver from working
    /// at all are reported.
    fn start(&mut self, params: &DriverParams) -> Result<()>;

    /// Release backend resources. Idempotent, and safe before `start`.
    fn stop(&mut self);

    /// Name of the factory that registered this driver
    fn name(&self) -> &str;
}

/// Music playback operations
///
/// Playback is fire-and-forget: `play_song` hands a file to the backend and
/// `is_song_playing` polls for completion. No method may block.
pub trait MusicDriver: Driver {
    /// Begin playing `song`; a song without a playable file is ignored
    fn play_song(&mut self, song: &MusicSongInfo);

    /// Halt the current song, if any
    fn stop_song(&mut self);

    /// Whether the backend is still playing
    ///
    /// Idle drivers answer without contacting the backend. A playing driver
    /// re-synchronizes with the backend and drops to idle once it reports
    /// the song finished.
    fn is_song_playing(&mut self) -> bool;

    /// Store `level` and forward it to the backend
    fn set_volume(&mut self, level: u8);

    /// Last level passed to `set_volume`
    fn volume(&self) -> u8;
}

impl std::fmt::Debug for dyn MusicDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MusicDriver")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}
