use anyhow::{bail, Result};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use tracing::{debug, warn};
use crate::driver::{
    Driver, DriverParams, MusicDriver, MusicSongInfo, PlaybackState, DEFAULT_MUSIC_VOLUME,
};
use crate::song::{playable_file, SmfResolver, SongResolver};

/// Player used when no `cmd` option is given
pub const DEFAULT_PLAYER: &str = "timidity";
const DEFAULT_PLAYER_ARGS: &[&str] = &["-idqq"];

/// Music driver running an external MIDI player process per song
///
/// Options: `cmd=<program>` and `params=<whitespace separated arguments>`.
/// The song path is appended as the last argument.
pub struct ExternalMidiDriver {
    command: String,
    args: Vec<String>,
    resolver: Box<dyn SongResolver>,
    child: Option<Child>,
    state: PlaybackState,
    volume: u8,
}

impl ExternalMidiDriver {
    pub const NAME: &'static str = "extmidi";
    pub const DESCRIPTION: &'static str = "External MIDI Driver";
    pub const PRIORITY: i32 = 3;

    pub fn new() -> Self {
        Self::with_resolver(Box::new(SmfResolver))
    }

    pub fn with_resolver(resolver: Box<dyn SongResolver>) -> Self {
        Self {
            command: DEFAULT_PLAYER.to_string(),
            args: DEFAULT_PLAYER_ARGS.iter().map(|s| s.to_string()).collect(),
            resolver,
            child: None,
            state: PlaybackState::Idle,
            volume: DEFAULT_MUSIC_VOLUME,
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn spawn_player(&mut self, path: &Path) {
        match Command::new(&self.command)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => {
                debug!("extmidi: started '{}' (pid {}) for {}", self.command, child.id(), path.display());
                self.child = Some(child);
                self.state = PlaybackState::Playing;
            }
            Err(e) => {
                warn!("extmidi: failed to run '{}': {}", self.command, e);
            }
        }
    }

    fn kill_player(&mut self) {
        if let Some(mut child) = self.child.take() {
            // the player may already have exited on its own
            if let Err(e) = child.kill() {
                debug!("extmidi: kill failed: {}", e);
            }
            if let Err(e) = child.wait() {
                debug!("extmidi: reaping player failed: {}", e);
            }
        }
    }
}

impl Default for ExternalMidiDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for ExternalMidiDriver {
    fn start(&mut self, params: &DriverParams) -> Result<()> {
        if let Some(command) = params.get("cmd") {
            if command.trim().is_empty() {
                bail!("no command given for external MIDI player");
            }
            self.command = command.trim().to_string();
            self.args.clear();
        }

        if let Some(args) = params.get("params") {
            self.args = args.split_whitespace().map(str::to_string).collect();
        }

        debug!("extmidi: using '{}' with arguments {:?}", self.command, self.args);
        Ok(())
    }

    fn stop(&mut self) {
        self.stop_song();
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}

impl MusicDriver for ExternalMidiDriver {
    fn play_song(&mut self, song: &MusicSongInfo) {
        let Some(path) = playable_file(self.resolver.as_ref(), song) else {
            debug!("extmidi: no MIDI file for song '{}'", song.song_name);
            return;
        };

        self.stop_song();
        self.spawn_player(&path);
    }

    fn stop_song(&mut self) {
        self.kill_player();
        self.state = PlaybackState::Idle;
    }

    fn is_song_playing(&mut self) -> bool {
        if !self.state.is_playing() {
            return false;
        }

        let running = match self.child.as_mut().map(Child::try_wait) {
            Some(Ok(None)) => true,
            Some(Ok(Some(status))) => {
                debug!("extmidi: player exited with {}", status);
                false
            }
            Some(Err(e)) => {
                debug!("extmidi: polling player failed: {}", e);
                false
            }
            None => false,
        };

        if !running {
            self.kill_player();
            self.state = PlaybackState::Idle;
        }
        running
    }

    fn set_volume(&mut self, level: u8) {
        self.volume = level;
        debug!("extmidi: volume control not supported by external player");
    }

    fn volume(&self) -> u8 {
        self.volume
    }
}

impl Drop for ExternalMidiDriver {
    fn drop(&mut self) {
        self.kill_player();
    }
}
