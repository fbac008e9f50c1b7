use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};
use crate::drivers::{HostFunction, MusicHost};

/// Call received by a [`RecordingHost`]
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Probe(HostFunction),
    Init,
    Play(String),
    Stop,
    IsPlaying,
    SetVolume(f64),
}

#[derive(Debug, Default)]
struct HostLog {
    functions: HashSet<HostFunction>,
    playing: bool,
    calls: Vec<HostCall>,
}

/// Simulated scripting host that records every call
///
/// Clones share one log, so a test can keep a handle after moving the host
/// into a driver.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    log: Arc<Mutex<HostLog>>,
}

impl RecordingHost {
    /// Host exporting every playback function
    pub fn new() -> Self {
        Self::with_functions(&HostFunction::ALL)
    }

    /// Host exporting nothing
    pub fn unavailable() -> Self {
        Self::with_functions(&[])
    }

    pub fn with_functions(functions: &[HostFunction]) -> Self {
        let host = Self::default();
        host.lock().functions = functions.iter().copied().collect();
        host
    }

    /// Simulate the host player starting or finishing a song on its own
    pub fn set_playing(&self, playing: bool) {
        self.lock().playing = playing;
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.lock().calls.clone()
    }

    /// Calls other than capability probes
    pub fn playback_calls(&self) -> Vec<HostCall> {
        self.lock()
            .calls
            .iter()
            .filter(|call| !matches!(call, HostCall::Probe(_)))
            .cloned()
            .collect()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    fn lock(&self) -> MutexGuard<'_, HostLog> {
        // a poisoned log only means another test thread panicked mid-record
        self.log.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, call: HostCall) {
        self.lock().calls.push(call);
    }
}

impl MusicHost for RecordingHost {
    fn probe(&self, function: HostFunction) -> bool {
        self.record(HostCall::Probe(function));
        self.lock().functions.contains(&function)
    }

    fn init(&mut self) {
        self.record(HostCall::Init);
    }

    fn play(&mut self, path: &str) {
        let mut log = self.lock();
        log.calls.push(HostCall::Play(path.to_string()));
        log.playing = true;
    }

    fn stop(&mut self) {
        let mut log = self.lock();
        log.calls.push(HostCall::Stop);
        log.playing = false;
    }

    fn is_playing(&mut self) -> bool {
        let mut log = self.lock();
        log.calls.push(HostCall::IsPlaying);
        log.playing
    }

    fn set_volume(&mut self, volume: f64) {
        self.record(HostCall::SetVolume(volume));
    }
}
