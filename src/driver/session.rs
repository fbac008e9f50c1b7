use tracing::{debug, info};
use super::error::{DriverError, Result};
use super::params::DriverSelection;
use super::registry::MusicDriverRegistry;
use super::selector::select_driver;
use super::traits::{Driver, MusicDriver};
use super::types::{DriverType, MusicSongInfo, DEFAULT_MUSIC_VOLUME};

/// Owns the registry and the single active music driver
pub struct MusicSession {
    registry: MusicDriverRegistry,
    active: Option<Box<dyn MusicDriver>>,
    volume: u8,
}

impl MusicSession {
    pub fn new(registry: MusicDriverRegistry) -> Self {
        Self {
            registry,
            active: None,
            volume: DEFAULT_MUSIC_VOLUME,
        }
    }

    pub fn registry(&self) -> &MusicDriverRegistry {
        &self.registry
    }

    /// Replace the active driver with a freshly selected one
    ///
    /// An unknown driver name is rejected before anything changes. Otherwise
    /// the previous driver is stopped first, so a start failure leaves the
    /// session without a driver.
    pub fn select(&mut self, selection: &DriverSelection) -> Result<&str> {
        if let Some(name) = selection.name.as_deref() {
            if self.registry.find_by_name(DriverType::Music, name).is_none() {
                return Err(DriverError::UnknownDriver {
                    driver_type: DriverType::Music,
                    name: name.to_string(),
                });
            }
        }

        self.shutdown();

        let mut driver = select_driver(&self.registry, DriverType::Music, selection)?;
        driver.set_volume(self.volume);
        info!("Music driver '{}' active", driver.name());

        Ok(self.active.insert(driver).name())
    }

    /// Stop and drop the active driver, if any
    pub fn shutdown(&mut self) {
        if let Some(mut previous) = self.active.take() {
            debug!("Stopping music driver '{}'", previous.name());
            previous.stop();
        }
    }

    pub fn active(&self) -> Option<&dyn MusicDriver> {
        self.active.as_deref()
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active.as_ref().map(|driver| driver.name())
    }

    pub fn play_song(&mut self, song: &MusicSongInfo) {
        if let Some(driver) = self.active.as_mut() {
            driver.play_song(song);
        }
    }

    pub fn stop_song(&mut self) {
        if let Some(driver) = self.active.as_mut() {
            driver.stop_song();
        }
    }

    pub fn is_song_playing(&mut self) -> bool {
        self.active
            .as_mut()
            .map_or(false, |driver| driver.is_song_playing())
    }

    /// Set the volume now and for every driver selected later
    pub fn set_volume(&mut self, level: u8) {
        self.volume = level;
        if let Some(driver) = self.active.as_mut() {
            driver.set_volume(level);
        }
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }
}

impl Drop for MusicSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}
